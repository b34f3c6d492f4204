//! A curated catalog of brand SVG icons, with everything needed to turn a
//! user's pick of icons into something shareable: a canonical URL, an iframe
//! embed snippet, and npm usage code.
//!
//! # Quick start
//!
//! ```
//! use brandkit::{Catalog, Selection, embed};
//!
//! let catalog = Catalog::builtin();
//!
//! let mut selection = Selection::new();
//! selection.toggle(catalog.get("github").unwrap());
//! selection.toggle(catalog.get("react").unwrap());
//!
//! let url = embed::canonical_url(&selection, "https://brandkit.example");
//! assert_eq!(url, "https://brandkit.example/icons/github,react");
//! ```
//!
//! # High level design
//!
//! Data flows one way, through four small stages, and you can stop at any of
//! them depending on what you are building:
//!
//! 1.  *The catalog*:
//!
//!     An immutable table of [IconRecord]s bundled with the crate and parsed
//!     once ([Catalog::builtin]). Query it with [Catalog::all],
//!     [Catalog::by_category], [Catalog::search] and [Catalog::get]: all of
//!     them reads, all of them total, never an error for "not found".
//!
//! 2.  *Selection*:
//!
//!     A gallery view owns a [Selection], an ordered duplicate-free set of
//!     chosen icons with toggle semantics. Insertion order is significant:
//!     it is the order ids appear in generated URLs and code.
//!
//! 3.  *Embed artifacts*:
//!
//!     The [embed] module turns a selection into copyable strings. These are
//!     pure string templates; the clipboard, and the UI acknowledging the
//!     copy, are the caller's business.
//!
//! 4.  *The embed route*:
//!
//!     The other direction: an incoming `/icons/{ids}` URL is parsed by
//!     [route::EmbedRequest] and resolved back into render-ready records,
//!     dropping ids the catalog no longer knows.
//!
//! Rendering is deliberately data-driven: there is no one-type-per-icon
//! surface, just [IconRecord::to_svg] parameterized by [RenderOptions],
//! because every icon renders identically and differs only by data.

mod catalog;
pub mod embed;
mod icon;
pub mod route;
mod selection;

pub use catalog::{Catalog, CatalogError};
pub use icon::{Category, IconRecord, RenderOptions};
pub use route::{DEFAULT_EMBED_SIZE, EmbedRequest, ResolvedEmbed};
pub use selection::Selection;

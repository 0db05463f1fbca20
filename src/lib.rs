//! Markup and stylesheet loading: a DOM tree plus a flat selector rule table
//! seeded from the bundled default stylesheet.
pub mod document;
pub mod error;
pub mod origin;

pub use css::{RuleTable, default_rules, load_default_stylesheet};
pub use document::{Document, build_rules};
pub use error::DocumentError;
pub use html::{ContentItem, Element};
pub use net::{Fetch, FetchConfig, FetchError, NetFetcher};

//! Base-origin computation and `href` resolution for linked stylesheets.
use url::Url;

/// `scheme://host`, with `:port` when the URL names a non-default port.
pub fn origin_of(url: &Url) -> String {
    let mut origin = format!("{}://{}", url.scheme(), url.host_str().unwrap_or(""));
    if let Some(port) = url.port() {
        origin.push(':');
        origin.push_str(&port.to_string());
    }
    origin
}

/// Resolve a stylesheet `href` against a document origin.
///
/// Anything containing `://` is taken as absolute. Otherwise the href is
/// appended to the origin with exactly one `/` between them when neither side
/// supplies it. Relative paths resolve from the origin, not the document path.
pub fn resolve_href(href: &str, origin: &str) -> String {
    if href.contains("://") {
        href.to_string()
    } else if href.starts_with('/') || origin.ends_with('/') {
        format!("{origin}{href}")
    } else {
        format!("{origin}/{href}")
    }
}

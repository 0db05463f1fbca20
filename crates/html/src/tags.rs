//! Per-tag-name capabilities consulted by the tree builder.
//!
//! All lookups are ASCII case-insensitive.

const VOID: &[&str] = &[
    "area",
    "base",
    "basefont",
    "col",
    "frame",
    "hr",
    "input",
    "link",
    "isindex",
    "!doctype",
    "meta",
    "img",
    "br",
    "source",
    "!",
    "!--",
    "!--[if",
    "![endif]--",
];
const RAW_TEXT: &[&str] = &["script", "style"];
const PROTECTED: &[&str] = &["script", "body", "head", "html"];
const REOPEN_CLOSES: &[&str] = &["p", "li", "dt", "dd", "option"];

fn one_of(name: &str, set: &[&str]) -> bool {
    set.iter().any(|candidate| name.eq_ignore_ascii_case(candidate))
}

/// Elements that never hold children. Includes the comment-marker tag names
/// left behind by malformed or conditional comments.
pub fn is_void(name: &str) -> bool {
    one_of(name, VOID)
}

/// Tag names carrying `!` are stray declaration/comment artifacts and are
/// treated as childless as well.
pub fn is_childless(name: &str) -> bool {
    is_void(name) || name.contains('!')
}

/// Elements whose content is never parsed as nested markup.
pub fn is_raw_text(name: &str) -> bool {
    one_of(name, RAW_TEXT)
}

/// Elements that survive a mismatched close tag; the stray close is parsed as
/// a nested element instead of closing them.
pub fn is_protected(name: &str) -> bool {
    one_of(name, PROTECTED)
}

/// Elements implicitly closed by an opening tag of the same name, so that
/// `<p>one<p>two` yields sibling paragraphs.
pub fn closes_on_reopen(name: &str) -> bool {
    one_of(name, REOPEN_CLOSES)
}

pub fn is_doctype(name: &str) -> bool {
    name.eq_ignore_ascii_case("!doctype")
}

/// Tags whose content or target may feed the rule table.
pub fn is_stylesheet_candidate(name: &str) -> bool {
    name.eq_ignore_ascii_case("style") || name.eq_ignore_ascii_case("link")
}

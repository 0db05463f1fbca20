//! Comment removal for raw markup and stylesheet text.
//!
//! Both strippers make one linear pass and only ever drop bytes, so the output
//! is allocated once at the input's length. A comment whose closing delimiter
//! never appears swallows the rest of the input; this is not an error.

use memchr::memmem;

const HTML_COMMENT_START: &str = "<!--";
const HTML_COMMENT_END: &str = "-->";
const CSS_COMMENT_START: &str = "/*";
const CSS_COMMENT_END: &str = "*/";

/// Remove every `<!-- ... -->` span (conditional comments included).
pub fn strip_html_comments(text: &str) -> String {
    strip_delimited(text, HTML_COMMENT_START, HTML_COMMENT_END)
}

/// Remove every `/* ... */` span.
pub fn strip_css_comments(text: &str) -> String {
    strip_delimited(text, CSS_COMMENT_START, CSS_COMMENT_END)
}

fn strip_delimited(text: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let open_finder = memmem::Finder::new(open);
    let close_finder = memmem::Finder::new(close);
    let bytes = text.as_bytes();
    let mut i = 0;
    // Delimiters are ASCII, so every cut below lands on a char boundary.
    while i < bytes.len() {
        let Some(rel) = open_finder.find(&bytes[i..]) else {
            out.push_str(&text[i..]);
            break;
        };
        let start = i + rel;
        out.push_str(&text[i..start]);
        let body = start + open.len();
        // The terminator is searched strictly after the opener: `<!-->` stays open.
        match close_finder.find(&bytes[body..]) {
            Some(end) => i = body + end + close.len(),
            None => break,
        }
    }
    out
}

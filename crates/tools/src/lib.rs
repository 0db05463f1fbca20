pub mod comments;

pub use comments::{strip_css_comments, strip_html_comments};

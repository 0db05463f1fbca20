pub mod debug;
pub mod dom_utils;
pub mod perf_fixtures;
pub mod tags;

mod attributes;
mod dom_builder;
mod tokenizer;
mod types;

pub use crate::attributes::{TagInfo, parse_tag};
pub use crate::dom_builder::{TreeBuilder, TreeBuilderConfig, build_dom};
pub use crate::tokenizer::{collapse_whitespace, tokenize};
pub use crate::types::{ContentItem, Element, TAGNAME_ATTR, Token, TokenKind};

/// Strip comments, tokenize and build the tree for raw markup.
pub fn parse_document(markup: &str) -> Option<Element> {
    parse_document_with(markup, TreeBuilderConfig::default())
}

pub fn parse_document_with(markup: &str, config: TreeBuilderConfig) -> Option<Element> {
    let cleaned = tools::strip_html_comments(markup);
    let tokens = tokenize(&cleaned);
    TreeBuilder::new(&tokens, config).build()
}

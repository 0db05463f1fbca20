//! Recursive-descent tree builder over the markup token stream.
//!
//! One call to `element` builds one element: it reads the tag text (the
//! opening `<` has already been consumed by the caller), then the `>`, then
//! children until the matching close tag or the end of the stream.
//!
//! Recovery rules, all silent:
//! - `!doctype` is transparent; the next tag becomes the element instead.
//! - Void and `!`-named elements take no children.
//! - A matching close (`</name>`, case-insensitive) ends the element.
//! - A mismatched close ends the element without being consumed, so an outer
//!   element may claim it. Protected elements (`html`, `head`, `body`,
//!   `script`) never auto-close: the stray close is parsed as if it opened a
//!   nested element, or kept as text inside `script`.
//! - `p`, `li` and similar elements close when a tag of the same name opens,
//!   leaving the `<` for the parent.
//! - Inside raw-text elements (`script`, `style`) every `<` and `</` is text.
//! - Anything else is text, coalesced with a preceding text run.
use crate::attributes::parse_tag;
use crate::tags;
use crate::types::{Element, Token, TokenKind};
use core_types::TokenCursor;

#[derive(Clone, Copy, Debug)]
pub struct TreeBuilderConfig {
    /// Deepest element nesting built. Markup nested below this depth is kept
    /// as text of the deepest element.
    pub max_depth: usize,
}

impl Default for TreeBuilderConfig {
    fn default() -> Self {
        Self { max_depth: 1024 }
    }
}

pub struct TreeBuilder<'a> {
    cursor: TokenCursor<'a>,
    config: TreeBuilderConfig,
    depth_capped: bool,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(tokens: &'a [Token], config: TreeBuilderConfig) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            config,
            depth_capped: false,
        }
    }

    /// Build the root element. Stray tokens ahead of the first tag text are skipped.
    pub fn build(mut self) -> Option<Element> {
        while let Some(token) = self.cursor.peek() {
            if token.is(TokenKind::Text) {
                break;
            }
            self.cursor.next();
        }
        let root = self.element(0);
        if self.depth_capped {
            log::warn!(
                target: "html.tree_builder",
                "nesting deeper than {} kept as text",
                self.config.max_depth
            );
        }
        log::debug!(
            target: "html.tree_builder",
            "built tree; {} tokens left unconsumed",
            self.cursor.remaining()
        );
        root
    }

    /// True when the cursor sits on tag text, i.e. a `<`/`</` just consumed opens an element.
    fn at_tag_text(&self) -> bool {
        self.cursor.peek_is(TokenKind::Text)
    }

    /// Consume tag text and its optional `>`.
    fn open_tag(&mut self) -> Option<Element> {
        let info = self.cursor.next()?;
        let tag = parse_tag(&info.text);
        self.cursor.eat(TokenKind::TagEnd);
        Some(Element::new(tag.name, tag.attributes))
    }

    fn element(&mut self, depth: usize) -> Option<Element> {
        let mut element = self.open_tag()?;

        // Doctypes are skipped in place; a run of them adds no recursion depth.
        while tags::is_doctype(&element.tag_name) {
            if !(self.cursor.eat(TokenKind::OpenStart) && self.at_tag_text()) {
                return Some(element);
            }
            element = self.open_tag()?;
        }

        if tags::is_childless(&element.tag_name) {
            return Some(element);
        }

        let raw_text = tags::is_raw_text(&element.tag_name);
        let protected = tags::is_protected(&element.tag_name);
        let reopen_closes = tags::closes_on_reopen(&element.tag_name);

        while let Some(token) = self.cursor.peek() {
            match token.kind {
                TokenKind::CloseStart if self.closes(&element) => {
                    self.cursor.next();
                    self.cursor.next();
                    self.cursor.eat(TokenKind::TagEnd);
                    return Some(element);
                }
                TokenKind::CloseStart if !protected => return Some(element),
                TokenKind::OpenStart if reopen_closes && self.reopens(&element) => {
                    return Some(element);
                }
                // Protected elements fall through: the stray close opens a child.
                TokenKind::OpenStart | TokenKind::CloseStart if !raw_text => {
                    self.cursor.next();
                    if self.at_tag_text() && depth < self.config.max_depth {
                        if let Some(child) = self.element(depth + 1) {
                            element.push_element(child);
                        }
                    } else {
                        if depth >= self.config.max_depth {
                            self.depth_capped = true;
                        }
                        element.push_text(&token.text);
                    }
                }
                _ => {
                    self.cursor.next();
                    element.push_text(&token.text);
                }
            }
        }
        Some(element)
    }

    /// Does the upcoming `<name` open another element named like `element`?
    fn reopens(&self, element: &Element) -> bool {
        self.cursor.peek_nth(1).is_some_and(|t| {
            t.is(TokenKind::Text)
                && t.text
                    .split_whitespace()
                    .next()
                    .is_some_and(|name| element.is(name.trim_end_matches('/')))
        })
    }

    /// Does the upcoming `</name` close `element`?
    fn closes(&self, element: &Element) -> bool {
        self.cursor
            .peek_nth(1)
            .is_some_and(|t| t.is(TokenKind::Text) && element.is(t.text.trim()))
    }
}

pub fn build_dom(tokens: &[Token]) -> Option<Element> {
    TreeBuilder::new(tokens, TreeBuilderConfig::default()).build()
}

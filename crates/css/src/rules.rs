//! Selector-keyed rule table and the builder that fills it.
//!
//! Selectors are stored as written (trimmed), one entry per comma-separated
//! part of a group. Nothing is matched or ranked; the table is a flat
//! `selector -> property -> value` map.
use crate::syntax::tokenize;
use core_types::{Token, TokenCursor, TokenKind};
use std::collections::BTreeMap;

pub type Declarations = BTreeMap<String, String>;

const IMPORTANT: &str = "!important";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: BTreeMap<String, Declarations>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from raw stylesheet text.
    pub fn parse(css: &str) -> Self {
        let mut table = Self::new();
        table.add_rules(css);
        table
    }

    /// Strip comments, tokenize and feed `css` into this table.
    ///
    /// A selector group header replaces any declarations already stored under
    /// each of its selectors; use [`RuleTable::merge`] to layer whole tables.
    pub fn add_rules(&mut self, css: &str) {
        let mut text = String::from(";");
        // The tokenizer drops its first token; the sentinel absorbs that.
        text.push_str(&tools::strip_css_comments(css));
        let tokens = tokenize(&text);
        let before = self.rules.len();
        build_rules(self, &tokens);
        log::debug!(
            target: "css.rules",
            "{} tokens, {} selectors ({} new)",
            tokens.len(),
            self.rules.len(),
            self.rules.len().saturating_sub(before)
        );
    }

    pub fn get(&self, selector: &str) -> Option<&Declarations> {
        self.rules.get(selector)
    }

    pub fn declaration(&self, selector: &str, property: &str) -> Option<&str> {
        self.rules.get(selector)?.get(property).map(String::as_str)
    }

    pub fn insert(&mut self, selector: impl Into<String>, declarations: Declarations) {
        self.rules.insert(selector.into(), declarations);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Declarations)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn entry(&mut self, selector: &str) -> &mut Declarations {
        self.rules.entry(selector.to_string()).or_default()
    }

    /// One line per selector followed by its indented `property: value` lines.
    pub fn outline(&self) -> Vec<String> {
        let mut out = Vec::new();
        for (selector, declarations) in &self.rules {
            out.push(selector.clone());
            for (property, value) in declarations {
                out.push(format!("  {property}: {value}"));
            }
        }
        out
    }
}

enum State {
    Seeking,
    Collecting(Vec<String>),
}

/// Feed a token stream into `table`.
///
/// Seeking: a `Text` directly followed by `{` is a selector group header.
/// Collecting: each `Text` is a `property: value` declaration for every
/// selector of the group until `}`. Everything else is skipped.
fn build_rules(table: &mut RuleTable, tokens: &[Token]) {
    let mut cursor = TokenCursor::new(tokens);
    let mut state = State::Seeking;
    while let Some(token) = cursor.next() {
        state = match state {
            State::Seeking => {
                if token.is(TokenKind::Text) && cursor.eat(TokenKind::BraceOpen) {
                    State::Collecting(open_group(table, &token.text))
                } else {
                    State::Seeking
                }
            }
            State::Collecting(selectors) => match token.kind {
                TokenKind::Text => {
                    write_declaration(table, &selectors, &token.text);
                    State::Collecting(selectors)
                }
                TokenKind::BraceClose => State::Seeking,
                _ => State::Collecting(selectors),
            },
        };
    }
}

fn open_group(table: &mut RuleTable, header: &str) -> Vec<String> {
    let selectors: Vec<String> = header
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    for selector in &selectors {
        table.insert(selector.clone(), Declarations::new());
    }
    log::trace!(target: "css.rules", "selector group {selectors:?}");
    selectors
}

fn parse_declaration(text: &str) -> Option<(&str, String)> {
    let (key, value) = text.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.replace(IMPORTANT, "").trim().to_string()))
}

fn write_declaration(table: &mut RuleTable, selectors: &[String], text: &str) {
    let Some((key, value)) = parse_declaration(text) else {
        return;
    };
    for selector in selectors {
        table.entry(selector).insert(key.to_string(), value.clone());
    }
}

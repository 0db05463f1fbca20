use std::collections::HashMap;

pub use core_types::{Token, TokenKind};

/// Attribute key that mirrors an element's tag name.
pub const TAGNAME_ATTR: &str = "tagname";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentItem {
    TextRun(String),
    Element(Element),
}

impl ContentItem {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentItem::TextRun(text) => Some(text),
            ContentItem::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            ContentItem::Element(element) => Some(element),
            ContentItem::TextRun(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub tag_name: String,
    /// Always holds a `tagname` entry equal to `tag_name`.
    pub attributes: HashMap<String, String>,
    pub children: Vec<ContentItem>,
}

impl Element {
    pub fn new(tag_name: impl Into<String>, mut attributes: HashMap<String, String>) -> Self {
        let tag_name = tag_name.into();
        attributes.insert(TAGNAME_ATTR.to_string(), tag_name.clone());
        Self {
            tag_name,
            attributes,
            children: Vec::new(),
        }
    }

    /// Case-insensitive tag name test.
    pub fn is(&self, name: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(name)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn push_element(&mut self, child: Element) {
        self.children.push(ContentItem::Element(child));
    }

    /// Append text, merging into a trailing text run so that no two runs are adjacent.
    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(ContentItem::TextRun(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(ContentItem::TextRun(text.to_string()));
        }
    }

    /// First direct text run, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.children.iter().find_map(ContentItem::as_text)
    }

    /// Direct child elements in order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(ContentItem::as_element)
    }

    /// Concatenated text of this subtree in document order.
    pub fn text(&self) -> String {
        fn walk(element: &Element, out: &mut String) {
            for child in &element.children {
                match child {
                    ContentItem::TextRun(text) => out.push_str(text),
                    ContentItem::Element(e) => walk(e, out),
                }
            }
        }
        let mut out = String::new();
        walk(self, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_element_mirrors_tag_name() {
        let mut attrs = HashMap::new();
        attrs.insert(TAGNAME_ATTR.to_string(), "bogus".to_string());
        let el = Element::new("DiV", attrs);
        assert_eq!(el.attr(TAGNAME_ATTR), Some("DiV"));
        assert!(el.is("div"));
    }

    #[test]
    fn push_text_coalesces_adjacent_runs() {
        let mut el = Element::new("p", HashMap::new());
        el.push_text("a");
        el.push_text("");
        el.push_text("b");
        el.push_element(Element::new("br", HashMap::new()));
        el.push_text("c");
        assert_eq!(el.children.len(), 3);
        assert_eq!(el.first_text(), Some("ab"));
        assert_eq!(el.text(), "abc");
        assert_eq!(el.elements().count(), 1);
    }
}

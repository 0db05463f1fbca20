use crate::tags;
use crate::types::{ContentItem, Element};

/// Pre-order walk over `root` and every descendant element.
pub fn walk_elements<'a>(root: &'a Element, visit: &mut dyn FnMut(&'a Element)) {
    visit(root);
    for child in &root.children {
        if let ContentItem::Element(e) = child {
            walk_elements(e, visit);
        }
    }
}

/// `<style>` and `<link>` elements in document order. Whether a `link` is
/// actually a stylesheet is decided by the consumer.
pub fn stylesheet_candidates(root: &Element) -> Vec<&Element> {
    let mut out = Vec::new();
    walk_elements(root, &mut |e| {
        if tags::is_stylesheet_candidate(&e.tag_name) {
            out.push(e);
        }
    });
    out
}

/// First element in document order with the given tag name (case-insensitive).
pub fn find_first<'a>(root: &'a Element, name: &str) -> Option<&'a Element> {
    if root.is(name) {
        return Some(root);
    }
    root.elements().find_map(|child| find_first(child, name))
}

/// Every element with the given tag name, in document order.
pub fn find_all<'a>(root: &'a Element, name: &str) -> Vec<&'a Element> {
    let mut out = Vec::new();
    walk_elements(root, &mut |e| {
        if e.is(name) {
            out.push(e);
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_document;

    #[test]
    fn candidates_in_document_order() {
        let root = parse_document(
            "<html><head><link rel=icon href=f.ico><style>a{}</style></head>\
             <body><STYLE>b{}</STYLE><div><link rel=stylesheet href=x.css></div></body></html>",
        )
        .expect("root");
        let found: Vec<_> = stylesheet_candidates(&root)
            .into_iter()
            .map(|e| (e.tag_name.as_str(), e.attr("href").or(e.first_text()).unwrap_or("")))
            .collect();
        assert_eq!(
            found,
            [("link", "f.ico"), ("style", "a{}"), ("STYLE", "b{}"), ("link", "x.css")]
        );
    }

    #[test]
    fn find_helpers() {
        let root = parse_document("<div><p>1</p><section><p>2</p></section></div>").expect("root");
        assert_eq!(find_first(&root, "P").map(Element::text).as_deref(), Some("1"));
        assert_eq!(find_all(&root, "p").len(), 2);
        assert!(find_first(&root, "table").is_none());
        assert!(find_first(&root, "div").is_some_and(|d| std::ptr::eq(d, &root)));
    }
}

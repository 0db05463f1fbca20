use crate::types::{ContentItem, Element, TAGNAME_ATTR};

const INDENT_STEP: &str = "  ";

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

/// Deterministic line rendering of a tree for tests and debugging.
///
/// Elements print as `<name k="v">` with attributes sorted by name (the
/// mirrored `tagname` entry is omitted); text runs print quoted and escaped.
/// Each level of nesting indents by two spaces.
pub fn outline(root: &Element) -> Vec<String> {
    fn walk(element: &Element, indent: &mut String, out: &mut Vec<String>) {
        let mut attrs: Vec<_> = element
            .attributes
            .iter()
            .filter(|(k, _)| k.as_str() != TAGNAME_ATTR)
            .collect();
        attrs.sort();

        let mut line = String::with_capacity(indent.len() + 32);
        line.push_str(indent);
        line.push('<');
        line.push_str(&element.tag_name);
        for (k, v) in attrs {
            line.push(' ');
            line.push_str(k);
            line.push_str("=\"");
            line.push_str(&escape_text(v));
            line.push('"');
        }
        line.push('>');
        out.push(line);

        indent.push_str(INDENT_STEP);
        for child in &element.children {
            match child {
                ContentItem::TextRun(text) => {
                    out.push(format!("{indent}\"{}\"", escape_text(text)));
                }
                ContentItem::Element(e) => walk(e, indent, out),
            }
        }
        indent.truncate(indent.len() - INDENT_STEP.len());
    }

    let mut out = Vec::new();
    let mut indent = String::new();
    walk(root, &mut indent, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_document;

    #[test]
    fn outline_sorts_attributes_and_quotes_text() {
        let root = parse_document("<div id=a class=\"x\"><p>say \"hi\"</p><br></div>").expect("root");
        assert_eq!(
            outline(&root),
            [
                r#"<div class="x" id="a">"#,
                r#"  <p>"#,
                r#"    "say \"hi\"""#,
                r#"  <br>"#,
            ]
        );
    }
}

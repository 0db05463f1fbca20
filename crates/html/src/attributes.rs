//! Splits the text between `<` and `>` into a tag name and its attributes.
//!
//! The text is cut at spaces, `=` and `"`, keeping each delimiter as its own
//! part; spaces are then dropped unless they sit inside a quoted value. The
//! first part names the tag, and `name = value` triples follow. A quoted value
//! runs to the matching `"` (or to the end of the tag), so spaces and `=`
//! survive inside it. A name with no `=` after it is stored with an empty
//! value wherever it appears; a trailing `name =` with no value is dropped.
use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagInfo {
    pub name: String,
    pub attributes: HashMap<String, String>,
}

const QUOTE: &str = "\"";
const EQUALS: &str = "=";
const SELF_CLOSE: &str = "/";

fn split_parts(info: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    for (i, c) in info.char_indices() {
        let is_space = c.is_ascii_whitespace();
        if !(is_space || c == '=' || c == '"') {
            continue;
        }
        if start < i {
            parts.push(&info[start..i]);
        }
        if c == '"' {
            in_quotes = !in_quotes;
        }
        if !is_space || in_quotes {
            parts.push(&info[i..i + c.len_utf8()]);
        }
        start = i + c.len_utf8();
    }
    if start < info.len() {
        parts.push(&info[start..]);
    }
    parts
}

fn tag_name(raw: &str) -> &str {
    // `<br/>`: the self-closing slash is not part of the name.
    match raw.strip_suffix('/') {
        Some(name) if !name.is_empty() => name,
        _ => raw,
    }
}

pub fn parse_tag(info: &str) -> TagInfo {
    let parts = split_parts(info);
    let Some((first, mut rest)) = parts.split_first() else {
        return TagInfo::default();
    };
    let mut attributes = HashMap::new();

    while let Some(&name) = rest.first() {
        if name == EQUALS || name == QUOTE || name == SELF_CLOSE {
            rest = &rest[1..];
            continue;
        }
        if rest.get(1) != Some(&EQUALS) {
            // Valueless attribute such as `disabled`.
            attributes.insert(name.to_string(), String::new());
            rest = &rest[1..];
            continue;
        }
        if rest.len() < 3 {
            break;
        }
        rest = &rest[2..];
        let value = if rest[0] == QUOTE {
            let body = &rest[1..];
            let end = body.iter().position(|p| *p == QUOTE).unwrap_or(body.len());
            let value = body[..end].concat();
            rest = body.get(end + 1..).unwrap_or(&[]);
            value
        } else {
            let value = rest[0].to_string();
            rest = &rest[1..];
            value
        };
        attributes.insert(name.to_string(), value);
    }

    TagInfo {
        name: tag_name(first).to_string(),
        attributes,
    }
}

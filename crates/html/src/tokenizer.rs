//! Markup tokenizer.
//!
//! The tokenizer only classifies: `<` becomes `OpenStart`, `</` becomes
//! `CloseStart`, `>` becomes `TagEnd`, and whatever lies between them becomes
//! `Text`. Bracket balance is left to the tree builder.
//!
//! Fragments made only of spaces, tabs and line breaks are dropped. Surviving
//! text has each whitespace run collapsed to one space. The first token of the
//! stream is the document's leading `<` and is discarded, so the stream starts
//! at the root tag's name.
use crate::types::{Token, TokenKind};
use memchr::memchr2;

fn is_markup_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn is_blank(fragment: &str) -> bool {
    fragment.chars().all(is_markup_whitespace)
}

/// Collapse each run of spaces, tabs and line breaks into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if is_markup_whitespace(c) {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            in_run = false;
            out.push(c);
        }
    }
    out
}

fn emit(out: &mut Vec<Token>, token: Token) {
    #[cfg(any(test, feature = "debug-stats"))]
    log::trace!(target: "html.tokenizer", "emit token: {token:?}");
    out.push(token);
}

fn push_text(out: &mut Vec<Token>, fragment: &str) {
    if !is_blank(fragment) {
        emit(out, Token::text(collapse_whitespace(fragment)));
    }
}

/// Tokenize comment-free markup.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0;
    // `<`, `/` and `>` are ASCII, so every slice below is cut on a char boundary.
    while i < bytes.len() {
        let Some(rel) = memchr2(b'<', b'>', &bytes[i..]) else {
            push_text(&mut out, &input[i..]);
            break;
        };
        let at = i + rel;
        push_text(&mut out, &input[i..at]);
        if bytes[at] == b'>' {
            emit(&mut out, Token::new(TokenKind::TagEnd, ">"));
            i = at + 1;
        } else if bytes.get(at + 1) == Some(&b'/') {
            emit(&mut out, Token::new(TokenKind::CloseStart, "</"));
            i = at + 2;
        } else {
            emit(&mut out, Token::new(TokenKind::OpenStart, "<"));
            i = at + 1;
        }
    }
    if !out.is_empty() {
        out.remove(0);
    }
    log::debug!(target: "html.tokenizer", "tokenized {} bytes into {} tokens", input.len(), out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn drops_leading_open_marker() {
        let tokens = tokenize("<p>hi</p>");
        assert_eq!(texts(&tokens), ["p", ">", "hi", "</", "p", ">"]);
        assert_eq!(
            kinds(&tokens),
            [
                TokenKind::Text,
                TokenKind::TagEnd,
                TokenKind::Text,
                TokenKind::CloseStart,
                TokenKind::Text,
                TokenKind::TagEnd,
            ]
        );
    }

    #[test]
    fn drops_whitespace_only_fragments() {
        let tokens = tokenize("<ul>\n\t<li>a</li>\n  <li>b</li>\n</ul>\n");
        assert!(tokens.iter().all(|t| !t.text.trim().is_empty()));
        assert_eq!(
            texts(&tokens),
            ["ul", ">", "<", "li", ">", "a", "</", "li", ">", "<", "li", ">", "b", "</", "li", ">", "</", "ul", ">"]
        );
    }

    #[test]
    fn collapses_whitespace_runs_in_text() {
        let tokens = tokenize("<p>\n\t hello \t\n  world  </p>");
        assert_eq!(tokens[2].text, " hello world ");
    }

    #[test]
    fn collapses_whitespace_inside_tag_text() {
        let tokens = tokenize("<div\n   class=\"a\"\tid=x>");
        assert_eq!(tokens[0].text, "div class=\"a\" id=x");
    }

    #[test]
    fn reconstructs_tag_boundaries() {
        let input = "<html><body class=\"x\"><p>a<br>b</p></body></html>";
        let tokens = tokenize(input);
        let mut rebuilt = String::from("<");
        for token in &tokens {
            rebuilt.push_str(&token.text);
        }
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn lone_angle_brackets_are_classified_not_validated() {
        let tokens = tokenize("<a>1 < 2 > 0<");
        assert_eq!(
            kinds(&tokens),
            [
                TokenKind::Text,
                TokenKind::TagEnd,
                TokenKind::Text,
                TokenKind::OpenStart,
                TokenKind::Text,
                TokenKind::TagEnd,
                TokenKind::Text,
                TokenKind::OpenStart,
            ]
        );
    }

    #[test]
    fn preserves_utf8_text() {
        let tokens = tokenize("<p>caf\u{e9} \u{1F600}</p>");
        assert_eq!(tokens[2].text, "caf\u{e9} \u{1F600}");
    }

    #[test]
    fn empty_and_blank_input_yield_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t ").is_empty());
        assert!(tokenize("<").is_empty());
    }

    #[test]
    fn handles_many_angle_brackets_linearly() {
        let input = "<".repeat(200_000);
        let tokens = tokenize(&input);
        assert_eq!(tokens.len(), input.len() - 1);
    }
}

//! Stylesheet tokenizer.
//!
//! `{`, `}` and `;` become their own tokens and everything between them is
//! `Text`. Whitespace-only fragments are dropped; other text is kept verbatim.
//! Like the markup tokenizer, the first token of the stream is discarded.
use core_types::{Token, TokenKind};

fn classify(b: u8) -> Option<TokenKind> {
    match b {
        b'{' => Some(TokenKind::BraceOpen),
        b'}' => Some(TokenKind::BraceClose),
        b';' => Some(TokenKind::Semicolon),
        _ => None,
    }
}

fn push_text(out: &mut Vec<Token>, fragment: &str) {
    if !fragment.trim().is_empty() {
        out.push(Token::text(fragment));
    }
}

/// Tokenize comment-free stylesheet text.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let mut start = 0;
    // Delimiters are ASCII, so each cut lands on a char boundary.
    for (i, b) in input.bytes().enumerate() {
        let Some(kind) = classify(b) else {
            continue;
        };
        push_text(&mut out, &input[start..i]);
        out.push(Token::new(kind, &input[i..i + 1]));
        start = i + 1;
    }
    push_text(&mut out, &input[start..]);
    if !out.is_empty() {
        out.remove(0);
    }
    out
}

//! Token types shared by the markup and stylesheet grammars.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// `<`
    OpenStart,
    /// `</`
    CloseStart,
    /// `>`
    TagEnd,
    Text,
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// `;`
    Semicolon,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Text, text)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Forward-only position over an immutable token slice.
///
/// Every token is handed out at most once by `next`; recursive consumers share
/// one cursor by `&mut` so a token consumed by a callee is never seen again by
/// its caller.
#[derive(Debug)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Look `n` tokens past the current one (`peek_nth(0) == peek()`).
    pub fn peek_nth(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(self.pos + n)
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.is(kind))
    }

    pub fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Consume the current token only if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_hands_out_each_token_once() {
        let tokens = vec![
            Token::new(TokenKind::OpenStart, "<"),
            Token::text("p"),
            Token::new(TokenKind::TagEnd, ">"),
        ];
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(cursor.peek_nth(1).map(|t| t.text.as_str()), Some("p"));
        assert!(cursor.eat(TokenKind::OpenStart));
        assert!(!cursor.eat(TokenKind::TagEnd));
        assert_eq!(cursor.next().map(|t| t.text.as_str()), Some("p"));
        assert_eq!(cursor.remaining(), 1);
        assert!(cursor.eat(TokenKind::TagEnd));
        assert!(cursor.is_empty());
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.position(), 3);
    }
}

//! Token representation for segmented text.
//!
//! A Token is one contiguous fragment of the input. Downstream line-wrapping
//! treats each token as unbreakable.

use serde::{Deserialize, Serialize};

/// Which recognizer produced a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TokenKind {
    /// Run of ASCII letters and digits
    Latin,
    /// Run of ASCII digits
    Num,
    /// Dictionary word
    Word,
    /// Run of characters nothing recognized
    #[default]
    Unmatched,
}

impl TokenKind {
    /// Convert to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Latin => "LATIN",
            TokenKind::Num => "NUM",
            TokenKind::Word => "WORD",
            TokenKind::Unmatched => "UNMATCHED",
        }
    }
}

/// A single token from the segmentation process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The raw text of the token
    pub text: String,

    /// Starting byte offset in the original string
    pub start: usize,

    /// Length in bytes
    pub len: usize,

    /// The recognizer that produced this token
    pub kind: TokenKind,
}

impl Token {
    /// Create a token from a fragment of the input
    pub fn new(text: &str, start: usize, kind: TokenKind) -> Self {
        Token {
            text: text.to_string(),
            start,
            len: text.len(),
            kind,
        }
    }

    /// Byte offset just past the end of this token
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Check if this token is a dictionary word
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Check if nothing recognized this token
    pub fn is_unmatched(&self) -> bool {
        self.kind == TokenKind::Unmatched
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.text, self.kind.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("สวัสดี", 0, TokenKind::Word);
        assert_eq!(token.text, "สวัสดี");
        assert_eq!(token.start, 0);
        assert_eq!(token.len, 18);
        assert_eq!(token.end(), 18);
        assert!(token.is_word());
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("5555", 7, TokenKind::Latin);
        assert_eq!(format!("{}", token), "5555/LATIN");
    }

    #[test]
    fn test_token_json() {
        let token = Token::new("xx", 3, TokenKind::Latin);
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"text":"xx","start":3,"len":2,"kind":"Latin"}"#);
    }
}

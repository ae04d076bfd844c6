use std::fmt::Write;

use crate::scanner::token::{Token, TokenKind};

/// Column width the kind label is padded to in the text dump.
pub const LABEL_WIDTH: usize = 15;

pub fn label(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::BlockStart => "START",
        TokenKind::BlockEnd => "END",
        TokenKind::Comment => "COMMENT",
        TokenKind::Keyword => "KEYWORD",
        TokenKind::TypeName => "TYPE",
        TokenKind::Identifier => "IDENTIFIER",
        TokenKind::Operator => "OPERATOR",
        TokenKind::Number => "NUMBER",
        TokenKind::String => "STRING",
        TokenKind::Delimiter => "DELIMITER",
        TokenKind::Punctuation => "PUNCTUATION",
        TokenKind::Unknown => "UNKNOWN",
    }
}

/// One line of the text dump, without the trailing newline.
pub fn format_token(token: &Token) -> String {
    format!(
        "Token: {:<width$}Value = {}",
        label(token.kind),
        token.text,
        width = LABEL_WIDTH
    )
}

pub fn to_text(tokens: &[Token]) -> String {
    let mut buf = String::new();
    for token in tokens {
        // Writing to a String cannot fail.
        let _ = writeln!(buf, "{}", format_token(token));
    }
    buf
}

pub fn to_json(tokens: &[Token]) -> String {
    serde_json::to_string_pretty(tokens).expect("tokens should be serializable")
}

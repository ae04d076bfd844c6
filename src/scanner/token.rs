use std::fmt;

use serde::Serialize;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TokenKind {
    // Block markers
    BlockStart,
    BlockEnd,

    Comment,

    // Words
    Keyword,
    TypeName,
    Identifier,

    Operator,

    // Literals
    Number,
    String,

    Delimiter,
    Punctuation,

    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Byte offset one past the end of the span.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::new(span.offset.into(), span.len)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} '{}' @{}", self.kind, self.text, self.span.offset)
    }
}

pub const KEYWORDS: &[&str] = &[
    "fn", "class", "return", "if", "else", "while", "for", "switch", "case", "default", "do",
    "with", "try", "except", "in", "not", "and", "or",
];

pub const TYPE_NAMES: &[&str] = &["int", "float", "str", "bool", "tuple", "list", "dict"];

/// Classify an identifier-shaped word against the keyword table, then the
/// type-name table.
pub fn word_kind(word: &str) -> TokenKind {
    match word {
        "fn" | "class" | "return" | "if" | "else" | "while" | "for" | "switch" | "case"
        | "default" | "do" | "with" | "try" | "except" | "in" | "not" | "and" | "or" => {
            TokenKind::Keyword
        }
        "int" | "float" | "str" | "bool" | "tuple" | "list" | "dict" => TokenKind::TypeName,
        _ => TokenKind::Identifier,
    }
}

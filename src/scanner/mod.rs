pub mod lexer;
pub mod token;

use crate::error::CompileError;
use token::Token;

/// Knobs for a single scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Report string literals that reach end of input without their closing
    /// quote instead of closing them implicitly.
    pub strict: bool,
}

/// Scan source code into a list of tokens.
///
/// Unterminated string literals are closed by end of input, so the only
/// possible error is an internal `UnreachableState`.
pub fn scan(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    lexer::scan_all(source, &ScanOptions::default())
}

/// Scan with explicit options.
pub fn scan_with(source: &str, options: &ScanOptions) -> Result<Vec<Token>, Vec<CompileError>> {
    lexer::scan_all(source, options)
}

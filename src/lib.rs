pub mod error;
pub mod logging;
pub mod report;
pub mod scanner;

// Re-export error types for convenience
pub use error::CompileError;

/// The sample program bundled with the scanner, shown by `ixo-lex --demo`.
pub const SAMPLE_PROGRAM: &str = include_str!("../fixtures/sample.ixo");

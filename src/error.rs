use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CompileError {
    #[error("unterminated {quote}...{quote} literal")]
    #[diagnostic(
        code(ixo::unterminated_literal),
        help("close the literal with the quote character that opened it")
    )]
    UnterminatedLiteral {
        quote: char,
        #[label("literal starts here and runs to end of input")]
        span: SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },

    #[error("no scanning rule matched {found:?}")]
    #[diagnostic(code(ixo::unreachable_state))]
    UnreachableState {
        found: char,
        #[label("here")]
        span: SourceSpan,
        #[source_code]
        src: miette::NamedSource<String>,
    },
}

impl CompileError {
    pub fn unterminated_literal(quote: char, offset: usize, len: usize) -> Self {
        Self::UnterminatedLiteral {
            quote,
            span: SourceSpan::new(offset.into(), len),
            src: miette::NamedSource::new("input", String::new()),
        }
    }

    pub fn unreachable_state(found: char, offset: usize, len: usize) -> Self {
        Self::UnreachableState {
            found,
            span: SourceSpan::new(offset.into(), len),
            src: miette::NamedSource::new("input", String::new()),
        }
    }

    pub fn span(&self) -> SourceSpan {
        match self {
            Self::UnterminatedLiteral { span, .. } | Self::UnreachableState { span, .. } => *span,
        }
    }

    /// Attach source code for fancy miette diagnostics
    pub fn with_source_code(self, name: impl Into<String>, source: impl Into<String>) -> Self {
        let src = miette::NamedSource::new(name.into(), source.into());
        match self {
            Self::UnterminatedLiteral { quote, span, .. } => {
                Self::UnterminatedLiteral { quote, span, src }
            }
            Self::UnreachableState { found, span, .. } => {
                Self::UnreachableState { found, span, src }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_implements_diagnostic() {
        let err = CompileError::unterminated_literal('"', 0, 4);
        let diag: &dyn Diagnostic = &err;
        let code = diag.code().expect("diagnostic code").to_string();
        assert_eq!(code, "ixo::unterminated_literal");
    }

    #[test]
    fn unterminated_literal_message_names_quote() {
        let err = CompileError::unterminated_literal('\'', 3, 5);
        assert_eq!(err.to_string(), "unterminated '...' literal");
        assert_eq!(err.span(), SourceSpan::new(3.into(), 5));
    }

    #[test]
    fn unreachable_state_message() {
        let err = CompileError::unreachable_state('@', 7, 1);
        assert_eq!(err.to_string(), "no scanning rule matched '@'");
        let diag: &dyn Diagnostic = &err;
        assert_eq!(
            diag.code().expect("diagnostic code").to_string(),
            "ixo::unreachable_state"
        );
    }

    #[test]
    fn with_source_keeps_variant_and_span() {
        let err = CompileError::unterminated_literal('"', 4, 6)
            .with_source_code("test.ixo", "x = \"open\n");
        assert!(matches!(err, CompileError::UnterminatedLiteral { quote: '"', .. }));
        assert_eq!(err.span(), SourceSpan::new(4.into(), 6));
        let diag: &dyn Diagnostic = &err;
        assert!(diag.source_code().is_some());
    }
}

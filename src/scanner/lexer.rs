use winnow::combinator::{alt, cut_err, opt};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::stream::{LocatingSlice, Location, Stream};
use winnow::token::{any, rest, take_till, take_while};

use crate::error::CompileError;
use crate::scanner::ScanOptions;
use crate::scanner::token::{Span, Token, TokenKind, word_kind};

type Input<'a> = LocatingSlice<&'a str>;

const OPERATOR_CHARS: &str = "+-*/%^&|!<>=~.";

fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(c)
}

fn whitespace<'a>(input: &mut Input<'a>) -> ModalResult<()> {
    take_while(0.., [' ', '\t', '\n', '\r'])
        .void()
        .parse_next(input)
}

fn comment<'a>(input: &mut Input<'a>) -> ModalResult<Token> {
    let start = input.current_token_start();
    let text: &str = ('#', take_till(0.., '\n')).take().parse_next(input)?;
    Ok(Token::new(
        TokenKind::Comment,
        text,
        Span::new(start, text.len()),
    ))
}

fn word<'a>(input: &mut Input<'a>) -> ModalResult<Token> {
    let start = input.current_token_start();
    let text: &str = (
        any.verify(|c: &char| c.is_ascii_alphabetic()),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)?;
    Ok(Token::new(word_kind(text), text, Span::new(start, text.len())))
}

// Dots are accepted anywhere in the run; `3.14.15` and a lone `.` are both
// single numbers.
fn number_literal<'a>(input: &mut Input<'a>) -> ModalResult<Token> {
    let start = input.current_token_start();
    let text: &str =
        take_while(1.., |c: char| c.is_ascii_digit() || c == '.').parse_next(input)?;
    Ok(Token::new(
        TokenKind::Number,
        text,
        Span::new(start, text.len()),
    ))
}

/// A quoted literal ends at the next occurrence of its own quote character.
/// No escapes are recognized. When `strict` is set a missing terminator is a
/// cut error; otherwise end of input closes the literal.
fn string_literal<'a>(input: &mut Input<'a>, strict: bool) -> ModalResult<Token> {
    let start = input.current_token_start();
    let quote = any
        .verify(|c: &char| *c == '"' || *c == '\'')
        .parse_next(input)?;
    let text: &str = take_till(0.., quote).parse_next(input)?;
    if strict {
        cut_err(quote).parse_next(input)?;
    } else {
        opt(quote).parse_next(input)?;
    }
    let end = input.current_token_start();
    Ok(Token::new(
        TokenKind::String,
        text,
        Span::new(start, end - start),
    ))
}

fn bracket<'a>(input: &mut Input<'a>) -> ModalResult<Token> {
    let start = input.current_token_start();
    let c = any
        .verify(|c: &char| "()[]{}".contains(*c))
        .parse_next(input)?;
    let kind = match c {
        '{' => TokenKind::BlockStart,
        '}' => TokenKind::BlockEnd,
        _ => TokenKind::Delimiter,
    };
    Ok(Token::new(kind, c.to_string(), Span::new(start, 1)))
}

fn punctuation<'a>(input: &mut Input<'a>) -> ModalResult<Token> {
    let start = input.current_token_start();
    let c = any.verify(|c: &char| ":,;".contains(*c)).parse_next(input)?;
    Ok(Token::new(
        TokenKind::Punctuation,
        c.to_string(),
        Span::new(start, 1),
    ))
}

fn operator<'a>(input: &mut Input<'a>) -> ModalResult<Token> {
    let start = input.current_token_start();
    let text: &str = take_while(1.., is_operator_char).parse_next(input)?;
    Ok(Token::new(
        TokenKind::Operator,
        text,
        Span::new(start, text.len()),
    ))
}

/// Anything no other rule claims, including every non-ASCII character.
fn unknown<'a>(input: &mut Input<'a>) -> ModalResult<Token> {
    let start = input.current_token_start();
    let c = any.parse_next(input)?;
    Ok(Token::new(
        TokenKind::Unknown,
        c.to_string(),
        Span::new(start, c.len_utf8()),
    ))
}

fn scan_token<'a>(input: &mut Input<'a>, options: &ScanOptions) -> ModalResult<Token> {
    alt((
        comment,
        word,
        number_literal,
        |i: &mut Input<'a>| string_literal(i, options.strict),
        bracket,
        punctuation,
        operator,
        unknown,
    ))
    .parse_next(input)
}

/// Scan all tokens from source, returning either a token list or scan errors.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len(), strict = options.strict))]
pub fn scan_all(source: &str, options: &ScanOptions) -> Result<Vec<Token>, Vec<CompileError>> {
    let mut input = LocatingSlice::new(source);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    loop {
        if whitespace(&mut input).is_err() {
            break;
        }
        if input.is_empty() {
            break;
        }

        let offset = input.current_token_start();
        let checkpoint = input.checkpoint();
        match scan_token(&mut input, options) {
            Ok(token) if input.current_token_start() > offset => {
                tracing::trace!(kind = ?token.kind, text = %token.text, offset, "token");
                tokens.push(token);
            }
            Ok(_) | Err(ErrMode::Backtrack(_)) | Err(ErrMode::Incomplete(_)) => {
                // Every rule consumes at least one character, so reaching
                // this arm means the rule table is broken. Skip a character
                // to keep the cursor moving.
                input.reset(&checkpoint);
                let c = any::<_, ContextError>.parse_next(&mut input).ok();
                let ch = c.unwrap_or('?');
                errors.push(CompileError::unreachable_state(
                    ch,
                    offset,
                    ch.len_utf8(),
                ));
            }
            Err(ErrMode::Cut(_)) => {
                // Only an unterminated literal cuts; it runs to end of input.
                input.reset(&checkpoint);
                let remainder: &str = rest::<_, ContextError>
                    .parse_next(&mut input)
                    .unwrap_or_default();
                let quote = remainder.chars().next().unwrap_or('"');
                errors.push(CompileError::unterminated_literal(
                    quote,
                    offset,
                    remainder.len(),
                ));
            }
        }
    }

    tracing::debug!(tokens = tokens.len(), errors = errors.len(), "scan finished");

    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(errors)
    }
}

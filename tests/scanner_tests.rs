use std::thread;

use ixo_lex::report;
use ixo_lex::scanner::token::TokenKind;
use ixo_lex::scanner::{self, ScanOptions};

#[test]
fn fixture_sample_dump() {
    let source = include_str!("../fixtures/sample.ixo");
    let expected = include_str!("../fixtures/sample.expected");
    let tokens = scanner::scan(source).expect("scan should succeed");
    assert_eq!(report::to_text(&tokens), expected);
}

#[test]
fn sample_program_constant_matches_fixture() {
    assert_eq!(ixo_lex::SAMPLE_PROGRAM, include_str!("../fixtures/sample.ixo"));
}

#[test]
fn fixture_block_markers_balance() {
    let tokens = scanner::scan(ixo_lex::SAMPLE_PROGRAM).expect("scan should succeed");
    let opened = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::BlockStart)
        .count();
    let closed = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::BlockEnd)
        .count();
    assert_eq!(opened, 3);
    assert_eq!(opened, closed);
}

#[test]
fn fixture_spans_slice_source() {
    let source = ixo_lex::SAMPLE_PROGRAM;
    let tokens = scanner::scan(source).expect("scan should succeed");
    for token in &tokens {
        let slice = &source[token.span.offset..token.span.offset + token.span.len];
        match token.kind {
            TokenKind::String => assert!(slice.contains(token.text.as_str())),
            _ => assert_eq!(slice, token.text),
        }
    }
}

#[test]
fn strict_scan_reports_every_unterminated_literal() {
    let source = "a = 'fine'\nb = \"open";
    let errors = scanner::scan_with(source, &ScanOptions { strict: true }).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "unterminated \"...\" literal");

    let tokens = scanner::scan(source).expect("lenient scan should succeed");
    assert_eq!(tokens.last().map(|t| t.text.as_str()), Some("open"));
}

#[test]
fn independent_scans_run_in_parallel() {
    let sources = ["fn a() {}", "x += 1.5", "# c\n'q'", "@@@"];
    let handles: Vec<_> = sources
        .iter()
        .map(|s| {
            let source = s.to_string();
            thread::spawn(move || scanner::scan(&source).expect("scan should succeed"))
        })
        .collect();
    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("scanner thread should not panic"))
        .collect();
    for (source, tokens) in sources.iter().zip(&results) {
        assert_eq!(*tokens, scanner::scan(source).expect("scan should succeed"));
    }
    assert_eq!(results[3].len(), 3);
}

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use ixo_lex::error::CompileError;
use ixo_lex::logging;
use ixo_lex::report;
use ixo_lex::scanner::{self, ScanOptions};

#[derive(Parser, Debug)]
#[command(name = "ixo-lex", about = "Tokenize Ixo source and print the token stream")]
struct Cli {
    /// Ixo source file to scan (omit to read standard input)
    file: Option<PathBuf>,

    /// Scan the bundled sample program instead of a file
    #[arg(long, conflicts_with = "file")]
    demo: bool,

    /// Reject string literals that are missing their closing quote
    #[arg(long)]
    strict: bool,

    /// Token output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    format: String,
}

fn read_source(cli: &Cli) -> Result<(String, String)> {
    if cli.demo {
        return Ok(("<demo>".to_string(), ixo_lex::SAMPLE_PROGRAM.to_string()));
    }
    match &cli.file {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("read source file '{}'", path.display()))?;
            Ok((path.display().to_string(), source))
        }
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("read source from stdin")?;
            Ok(("<stdin>".to_string(), source))
        }
    }
}

fn report_scan_errors(errors: Vec<CompileError>, name: &str, source: &str) -> anyhow::Error {
    let count = errors.len();
    for e in errors {
        let report = miette::Report::new(e.with_source_code(name, source));
        eprintln!("{report:?}");
    }
    anyhow::anyhow!("{count} error(s)")
}

fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let (name, source) = read_source(&cli)?;
    let options = ScanOptions { strict: cli.strict };
    let tokens = scanner::scan_with(&source, &options)
        .map_err(|e| report_scan_errors(e, &name, &source))?;

    match cli.format.as_str() {
        "json" => println!("{}", report::to_json(&tokens)),
        _ => print!("{}", report::to_text(&tokens)),
    }
    Ok(())
}

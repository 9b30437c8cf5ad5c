// identspell-split: Split identifiers into words.
//
// Prints each identifier followed by its words and their character
// offsets, one word per line:
//   getHTMLParser
//     0 get
//     3 HTML
//     7 Parser
//
// Usage:
//   identspell-split [IDENT...]

use std::io::{self, Write};

use clap::Parser;
use identspell::tokenizer;

/// Split program identifiers at casing boundaries
#[derive(Parser, Debug)]
#[command(name = "identspell-split")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Identifiers to split (read from stdin when omitted)
    identifiers: Vec<String>,
}

fn main() {
    identspell_cli::init_tracing();
    let args = Args::parse();

    let identifiers = identspell_cli::read_identifiers(args.identifiers)
        .unwrap_or_else(|e| identspell_cli::fatal(&format!("error reading stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for ident in &identifiers {
        let _ = writeln!(out, "{ident}");
        for word in tokenizer::split(ident) {
            let _ = writeln!(out, "  {} {}", word.pos, word.text);
        }
    }
}

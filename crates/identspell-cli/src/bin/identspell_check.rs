// identspell-check: Check identifiers for misspelled words.
//
// Reads identifiers from the command line, or from stdin (one per line)
// when none are given, and reports whether each contains a misspelling:
//   C: ident          (clean)
//   W: ident          (misspelled)
//   F: replacement    (with --fix, when a rename can be offered)
//
// Usage:
//   identspell-check [-d PATH] [--fix] [--pass-through] [--min-len N] [IDENT...]

use std::io::{self, Write};

use clap::Parser;
use identspell::FixPolicy;

/// Check program identifiers for misspelled words
#[derive(Parser, Debug)]
#[command(name = "identspell-check")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Word list file (one word per line)
    #[arg(short = 'd', long = "dict-path", env = identspell_cli::DICT_PATH_ENV)]
    dict_path: Option<String>,

    /// Also print a replacement for misspelled identifiers
    #[arg(short, long)]
    fix: bool,

    /// Keep correct and unfixable words when computing replacements
    #[arg(long)]
    pass_through: bool,

    /// Minimum identifier length (in characters) to check
    #[arg(long = "min-len", default_value_t = 4)]
    min_len: usize,

    /// Identifiers to check (read from stdin when omitted)
    identifiers: Vec<String>,
}

fn main() {
    identspell_cli::init_tracing();
    let args = Args::parse();

    let mut handle = identspell_cli::load_handle(args.dict_path.as_deref())
        .unwrap_or_else(|e| identspell_cli::fatal(&e));
    handle.set_min_identifier_len(args.min_len);
    if args.pass_through {
        handle.set_fix_policy(FixPolicy::PassThrough);
    }

    let identifiers = identspell_cli::read_identifiers(args.identifiers)
        .unwrap_or_else(|e| identspell_cli::fatal(&format!("error reading stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for ident in &identifiers {
        if !handle.has_misspelling(ident) {
            let _ = writeln!(out, "C: {ident}");
            continue;
        }
        let _ = writeln!(out, "W: {ident}");
        if args.fix {
            if let Some(replacement) = handle.rename_offer(ident) {
                let _ = writeln!(out, "F: {replacement}");
            }
        }
    }
}

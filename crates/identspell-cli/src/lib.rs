// identspell-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use identspell::handle::IdentSpellHandle;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable naming a word list file.
pub const DICT_PATH_ENV: &str = "IDENTSPELL_DICT_PATH";

/// Word list file name looked up in the home and current directories.
const WORDS_FILE: &str = "words.txt";

/// Search for a word list and create an IdentSpellHandle.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `IDENTSPELL_DICT_PATH` environment variable
/// 3. `~/.identspell/words.txt`
/// 4. `/usr/share/dict/words`
/// 5. Current working directory (looks for `words.txt`)
pub fn load_handle(dict_path: Option<&str>) -> Result<IdentSpellHandle, String> {
    let search_paths = build_search_paths(dict_path);

    for path in &search_paths {
        if path.is_file() {
            debug!(path = %path.display(), "loading word list");
            return IdentSpellHandle::from_path(path).map_err(|e| e.to_string());
        }
    }

    Err(format!(
        "could not find a word list in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of word list files to try, in order.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".identspell").join(WORDS_FILE));
    }

    paths.push(PathBuf::from("/usr/share/dict/words"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDS_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default
/// `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Identifiers from the command line, or from stdin (one per line, blank
/// lines skipped) when none were given.
pub fn read_identifiers(args: Vec<String>) -> io::Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }
    let mut identifiers = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let ident = line.trim();
        if !ident.is_empty() {
            identifiers.push(ident.to_string());
        }
    }
    Ok(identifiers)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

// pinyin-cli: shared utilities for the CLI tools.

use std::path::PathBuf;
use std::process;

use pinyin_ime::{EngineError, PinyinEngine};

/// System lexicon file name.
const SYSTEM_TSV: &str = "system.tsv";

/// Learned lexicon file name.
const LEARNED_TSV: &str = "learned.tsv";

/// Search for lexicon files and create a PinyinEngine.
///
/// Search order:
/// 1. `lexicon_path` argument (if provided)
/// 2. `PINYIN_LEXICON_PATH` environment variable
/// 3. `~/.pinyin-ime`
/// 4. Current working directory (looks for `system.tsv` directly)
pub fn load_engine(lexicon_path: Option<&str>) -> Result<PinyinEngine, String> {
    let search_paths = build_search_paths(lexicon_path);

    for dir in &search_paths {
        let system_path = dir.join(SYSTEM_TSV);
        if system_path.is_file() {
            let learned_path = dir.join(LEARNED_TSV);
            return PinyinEngine::open(&system_path, &learned_path)
                .map_err(|e: EngineError| format!("failed to create engine: {e}"));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        SYSTEM_TSV,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search for lexicon files.
fn build_search_paths(lexicon_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = lexicon_path {
        paths.push(PathBuf::from(dir));
    }
    if let Ok(dir) = std::env::var("PINYIN_LEXICON_PATH") {
        paths.push(PathBuf::from(dir));
    }
    if let Ok(home) = std::env::var("HOME") {
        paths.push(PathBuf::from(home).join(".pinyin-ime"));
    }
    paths.push(PathBuf::from("."));
    paths
}

/// Extract a `-d`/`--lexicon-path` argument; returns the path and the
/// remaining arguments.
pub fn parse_lexicon_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut path = None;
    let mut rest = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "-d" || arg == "--lexicon-path" {
            path = iter.next().cloned();
        } else {
            rest.push(arg.clone());
        }
    }
    (path, rest)
}

/// Whether the arguments ask for help.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "-h" || a == "--help")
}

/// Print an error to stderr and exit with a failure status.
pub fn fatal(message: &str) -> ! {
    eprintln!("error: {message}");
    process::exit(1);
}

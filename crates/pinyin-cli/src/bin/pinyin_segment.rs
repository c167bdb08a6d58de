// pinyin-segment: Divide raw Pinyin strings from stdin into syllables.
//
// Reads one letter string per line and prints the boundary-marked
// reading:
//   D: ni'hao
//
// Usage:
//   pinyin-segment [OPTIONS]
//
// Options:
//   -h, --help   Print help

use std::io::{self, BufRead, Write};

use pinyin_core::SyllableGrammar;
use pinyin_ime::Segmenter;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if pinyin_cli::wants_help(&args) {
        println!("pinyin-segment: Divide raw Pinyin strings from stdin into syllables.");
        println!();
        println!("Usage: pinyin-segment [OPTIONS]");
        println!();
        println!("Reads one letter string per line. Prints:");
        println!("  D: divided'reading");
        println!();
        println!("Options:");
        println!("  -h, --help   Print this help");
        return;
    }

    let grammar = SyllableGrammar::new();
    let segmenter = Segmenter::new(&grammar);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }
        let divided = segmenter.segment(raw);
        let _ = writeln!(out, "D: {divided}");
    }
}

// pinyin-search: Convert Pinyin strings from stdin into candidate lists.
//
// Reads one letter string per line and prints the divided reading
// followed by the first page of candidates:
//   D: ni'hao
//   1. 你好
//   2. 你
//
// Usage:
//   pinyin-search [-d LEXICON_PATH] [OPTIONS]
//
// Options:
//   -d, --lexicon-path PATH   Directory containing system.tsv
//   -n, --page-size N          Candidates per page (default 5)
//   --all                      Print every candidate with kind detail
//   -h, --help                 Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lexicon_path, args) = pinyin_cli::parse_lexicon_path(&args);

    if pinyin_cli::wants_help(&args) {
        println!("pinyin-search: Convert Pinyin strings from stdin into candidate lists.");
        println!();
        println!("Usage: pinyin-search [-d LEXICON_PATH] [OPTIONS]");
        println!();
        println!("Reads one letter string per line. Prints the divided reading");
        println!("and the first page of candidates (or all with --all).");
        println!();
        println!("Options:");
        println!("  -d, --lexicon-path PATH   Directory containing system.tsv");
        println!("  -n, --page-size N          Candidates per page (default 5)");
        println!("  --all                      Print every candidate with kind detail");
        println!("  -h, --help                 Print this help");
        return;
    }

    let show_all = args.iter().any(|a| a == "--all");
    let page_size = parse_page_size(&args);

    let mut engine = pinyin_cli::load_engine(lexicon_path.as_deref())
        .unwrap_or_else(|e| pinyin_cli::fatal(&e));
    if let Some(n) = page_size {
        engine.set_page_size(n);
    }

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
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if !engine.search(input) {
            let _ = writeln!(out, "R: {input}");
            continue;
        }
        let _ = writeln!(out, "D: {}", engine.divided_pinyin());

        let total = engine.candidate_count();
        let shown = if show_all {
            total
        } else {
            engine.page_size().min(total)
        };
        for index in 0..shown {
            match engine.candidate_info(index) {
                Ok(info) => {
                    if show_all {
                        let _ = writeln!(
                            out,
                            "{}. {} ({}){}",
                            index + 1,
                            info.text,
                            info.reading,
                            if info.can_forget { "" } else { " *" }
                        );
                    } else {
                        let _ = writeln!(out, "{}. {}", index + 1, info.text);
                    }
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    break;
                }
            }
        }
    }
}

fn parse_page_size(args: &[String]) -> Option<usize> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "-n" || arg == "--page-size" {
            return iter.next().and_then(|n| n.parse().ok());
        }
    }
    None
}

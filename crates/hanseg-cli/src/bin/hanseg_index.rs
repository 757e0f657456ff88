// hanseg-index: Extract index terms from text on stdin.
//
// Segments the input and keeps only tokens long enough to be useful as
// search-index terms (two or more characters by default).
//
// Usage:
//   hanseg-index [-d DICT_PATH] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Dictionary directory containing main.dic
//   --min-chars N          Minimum token length to keep (default 2)
//   -h, --help             Print help

use std::io::{self, Read, Write};

use hanseg_zh::indexing::MIN_INDEX_CHARS;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = hanseg_cli::parse_dict_path(&args);

    if hanseg_cli::wants_help(&args) {
        println!("hanseg-index: Extract search-index terms from Chinese text.");
        println!();
        println!("Usage: hanseg-index [-d DICT_PATH] [OPTIONS]");
        println!();
        println!("Reads text from stdin, prints one index term per line.");
        println!("Tokens shorter than the minimum length are dropped.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary directory containing main.dic");
        println!("  --min-chars N          Minimum token length to keep (default 2)");
        println!("  -h, --help             Print this help");
        return;
    }

    let min_chars = parse_min_chars(&args).unwrap_or(MIN_INDEX_CHARS);

    let seg = hanseg_cli::load_segmenter(dict_path.as_deref())
        .unwrap_or_else(|e| hanseg_cli::fatal(&e));

    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .unwrap_or_else(|e| hanseg_cli::fatal(&format!("failed to read stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for token in seg.segment_bytes(&input) {
        if token.chars().count() >= min_chars {
            let _ = writeln!(out, "{token}");
        }
    }
}

/// Parse `--min-chars N` from the remaining arguments.
fn parse_min_chars(args: &[String]) -> Option<usize> {
    let pos = args.iter().position(|a| a == "--min-chars")?;
    let value = args.get(pos + 1).unwrap_or_else(|| {
        hanseg_cli::fatal("--min-chars requires a value");
    });
    match value.parse() {
        Ok(n) => Some(n),
        Err(_) => hanseg_cli::fatal(&format!("invalid --min-chars value: {value}")),
    }
}

// hanseg-cut: Segment text from stdin.
//
// Reads text from stdin and prints one token per line.
//
// Usage:
//   hanseg-cut [-d DICT_PATH] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Dictionary directory containing main.dic
//   -h, --help             Print help

use std::io::{self, Read, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = hanseg_cli::parse_dict_path(&args);

    if hanseg_cli::wants_help(&args) {
        println!("hanseg-cut: Segment Chinese text from stdin.");
        println!();
        println!("Usage: hanseg-cut [-d DICT_PATH]");
        println!();
        println!("Reads text from stdin, prints one token per line.");
        println!("Separator punctuation is dropped from the output.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary directory containing main.dic");
        println!("  -h, --help             Print this help");
        return;
    }

    let seg = hanseg_cli::load_segmenter(dict_path.as_deref())
        .unwrap_or_else(|e| hanseg_cli::fatal(&e));

    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .unwrap_or_else(|e| hanseg_cli::fatal(&format!("failed to read stdin: {e}")));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for token in seg.segment_bytes(&input) {
        let _ = writeln!(out, "{token}");
    }
}

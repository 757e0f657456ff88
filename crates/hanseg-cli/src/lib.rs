// hanseg-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use hanseg_zh::Segmenter;

/// Main word-list file name.
const MAIN_DIC: &str = "main.dic";

/// Suffix (special word) list file name.
const SUFFIX_DIC: &str = "suffix.dic";

/// Search for dictionary files and create a [`Segmenter`].
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `HANSEG_DICT_PATH` environment variable
/// 3. `~/.hanseg`
/// 4. Current working directory
///
/// `main.dic` is required; `suffix.dic` is optional and an engine without
/// it simply applies no suffix bias.
pub fn load_segmenter(dict_path: Option<&str>) -> Result<Segmenter, String> {
    let search_paths = build_search_paths(dict_path);

    for dir in &search_paths {
        let main_path = dir.join(MAIN_DIC);
        if !main_path.is_file() {
            continue;
        }
        let main_data = std::fs::read(&main_path)
            .map_err(|e| format!("failed to read {}: {}", main_path.display(), e))?;

        let suffix_path = dir.join(SUFFIX_DIC);
        let suffix_data = if suffix_path.is_file() {
            Some(
                std::fs::read(&suffix_path)
                    .map_err(|e| format!("failed to read {}: {}", suffix_path.display(), e))?,
            )
        } else {
            None
        };

        return Ok(Segmenter::from_bytes(&main_data, suffix_data.as_deref()));
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        MAIN_DIC,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search for dictionary files.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    // 2. HANSEG_DICT_PATH environment variable
    if let Ok(env_path) = std::env::var("HANSEG_DICT_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".hanseg"));
    }

    // 4. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            if i + 1 < args.len() {
                dict_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (dict_path, remaining)
}

/// Whether the argument list asks for help.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "-h" || a == "--help")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

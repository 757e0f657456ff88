// Plain-text word-list loading: one word per line, UTF-8.

use std::io::BufRead;

use crate::DictError;

/// Decode a word list from raw file contents.
///
/// Decoding is best-effort: malformed UTF-8 is replaced rather than
/// rejected, so this never fails. Line endings (`\n` and `\r\n`) are
/// stripped and blank lines skipped. Overlong entries are kept here; the
/// trie applies its own length bound on insert.
pub fn words_from_bytes(data: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(data)
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a word list from a buffered reader.
///
/// I/O errors are propagated; decoding remains lossy per line.
pub fn words_from_reader<R: BufRead>(mut reader: R) -> Result<Vec<String>, DictError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(words_from_bytes(&data))
}

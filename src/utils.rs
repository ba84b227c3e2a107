/*!
 * Utility functions for RepoDump
 */

use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::filter::ExcludeList;

/// Truncate a string from the left to at most `max_len` bytes, keeping the
/// trailing part and prefixing `...` when shortened.
///
/// The cut position is snapped forward to a char boundary, so multibyte
/// names never split mid-character.
pub fn truncate_left(text: &str, max_len: usize) -> String {
    if text.len() <= max_len {
        return text.to_string();
    }

    let mut idx = text.len().saturating_sub(max_len.saturating_sub(3));
    while !text.is_char_boundary(idx) {
        idx += 1;
    }

    format!("...{}", &text[idx..])
}

/// Count the files the content pass will visit, for progress tracking.
///
/// Uses the same pruned walk as the dump pass so the count matches the
/// number of sections actually written.
pub fn count_files(dir: &Path, excludes: &ExcludeList) -> io::Result<u64> {
    let mut count = 0;

    let walker = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| !excludes.is_excluded(e.path()));

    for entry in walker.filter_map(Result::ok) {
        if entry.file_type().is_file() {
            count += 1;
        }
    }

    Ok(count)
}

/*!
 * Tree-style directory structure rendering
 *
 * Produces a depth-first, name-sorted rendering of a directory using the
 * familiar `tree` connectors:
 *
 * ```text
 * ├── src
 * │   ├── lib.rs
 * │   └── main.rs
 * └── README.md
 * ```
 *
 * Entries matching the exclusion list are filtered out before connectors
 * are assigned, so the tree view and the content dump agree on what the
 * repository contains.
 */

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::filter::ExcludeList;

/// Branch connector for a non-last sibling
const BRANCH: &str = "├── ";
/// Branch connector for the last sibling
const BRANCH_LAST: &str = "└── ";
/// Prefix continuation under a non-last directory
const CONTINUE: &str = "│   ";
/// Prefix continuation under a last directory
const CONTINUE_LAST: &str = "    ";

/// Render the structure of `dir` into `out`, one line per entry.
///
/// `prefix` is the indentation accumulated from enclosing levels; callers
/// start with `""`. A directory that cannot be listed due to a permission
/// error yields a single `[Permission Denied]` marker line at the current
/// prefix and is not descended into; any other listing failure propagates.
pub fn render_tree<W: Write>(
    dir: &Path,
    out: &mut W,
    prefix: &str,
    excludes: &ExcludeList,
) -> io::Result<()> {
    let read_dir = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            writeln!(out, "{}[Permission Denied]", prefix)?;
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let mut entries: Vec<(String, PathBuf)> = read_dir
        .filter_map(std::result::Result::ok)
        .map(|e| (e.file_name().to_string_lossy().into_owned(), e.path()))
        .filter(|(_, path)| !excludes.is_excluded(path))
        .collect();

    // Case-sensitive ordinal order, matching the dump pass
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    let count = entries.len();
    for (i, (name, path)) in entries.into_iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { BRANCH_LAST } else { BRANCH };
        writeln!(out, "{}{}{}", prefix, connector, name)?;

        if path.is_dir() {
            let extension = if is_last { CONTINUE_LAST } else { CONTINUE };
            render_tree(&path, out, &format!("{}{}", prefix, extension), excludes)?;
        }
    }

    Ok(())
}

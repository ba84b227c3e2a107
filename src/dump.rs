/*!
 * File content dumping
 *
 * Writes one delimited section per file: a separator line, a `# File:`
 * label with the file's path relative to the scan root, another separator,
 * then the file's content verbatim, then a blank line of separation.
 */

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use crate::report::FileReportInfo;

/// Separator line between the label and surrounding content
pub const SECTION_SEPARATOR: &str = "--------------------";

/// Placeholder written when a file is binary or unreadable
pub const UNREADABLE_PLACEHOLDER: &str =
    "# [Could not read file content (binary or permission denied)]";

/// Dump a single file's contents into `out`.
///
/// The separators and path label are always written, before the content
/// read is attempted. Returns `Some` with line/char counts when the file
/// was read as text, `None` when a placeholder was written instead. The
/// only `Err` case is a failed write to `out`.
pub fn dump_file<W: Write>(
    abs_path: &Path,
    rel_path: &Path,
    out: &mut W,
) -> io::Result<Option<FileReportInfo>> {
    writeln!(out, "{}", SECTION_SEPARATOR)?;
    writeln!(out, "# File: {}", rel_path.display())?;
    writeln!(out, "{}", SECTION_SEPARATOR)?;

    let info = match fs::read(abs_path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(content) => {
                out.write_all(content.as_bytes())?;
                Some(FileReportInfo {
                    lines: content.lines().count(),
                    chars: content.chars().count(),
                })
            }
            Err(_) => {
                writeln!(out, "{}", UNREADABLE_PLACEHOLDER)?;
                None
            }
        },
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            writeln!(out, "{}", UNREADABLE_PLACEHOLDER)?;
            None
        }
        Err(e) => {
            writeln!(out, "# [Error reading file: {}]", e)?;
            None
        }
    };

    // Visual separation between entries
    write!(out, "\n\n")?;

    Ok(info)
}

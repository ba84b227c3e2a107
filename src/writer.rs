/*!
 * Summary writer for RepoDump
 *
 * Orchestrates the two passes over the target directory: first the
 * tree-style structure rendering, then the content dump. Both passes share
 * the same exclusion list and name ordering, so the structure section and
 * the contents section always describe the same set of files.
 */

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::Config;
use crate::dump::dump_file;
use crate::error::Result;
use crate::filter::ExcludeList;
use crate::report::FileReportInfo;
use crate::tree::render_tree;
use crate::utils::truncate_left;

/// Header preceding the tree rendering
const STRUCTURE_HEADER: &str = "=== Repository Structure (tree-like) ===";
/// Header preceding the content dump
const CONTENTS_HEADER: &str = "=== File Contents ===";

/// Statistics accumulated over one summary run
#[derive(Debug, Clone, Default)]
pub struct WriterStatistics {
    /// Number of files whose section was written
    pub files_processed: usize,
    /// Total number of lines across readable files
    pub total_lines: usize,
    /// Total number of characters across readable files
    pub total_chars: usize,
    /// Number of files replaced by a placeholder (binary or unreadable)
    pub unreadable_files: usize,
    /// Per-file line/char counts, keyed by path relative to the scan root
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Writer for repository summaries
pub struct SummaryWriter {
    /// Writer configuration
    config: Config,
    /// Exclusion list built from the configuration
    excludes: ExcludeList,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl SummaryWriter {
    /// Create a new summary writer
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        let excludes = ExcludeList::new(config.exclude_patterns.clone());
        Self {
            config,
            excludes,
            progress,
        }
    }

    /// The exclusion list this writer applies to both passes
    pub fn excludes(&self) -> &ExcludeList {
        &self.excludes
    }

    /// Walk the target directory and write the summary file.
    ///
    /// Creates (or truncates) the configured output file, writes the
    /// structure section followed by the contents section, and returns the
    /// run statistics.
    pub fn write(&self) -> Result<WriterStatistics> {
        // Canonicalize so every walked path is absolute, which is what the
        // substring exclusion matches against
        let root = fs::canonicalize(&self.config.target_dir)?;

        let file = File::create(&self.config.output_file)?;
        let mut out = BufWriter::new(file);
        let mut stats = WriterStatistics::default();

        writeln!(out, "{}", STRUCTURE_HEADER)?;
        render_tree(&root, &mut out, "", &self.excludes)?;
        write!(out, "\n{}\n\n", CONTENTS_HEADER)?;

        self.dump_contents(&root, &mut out, &mut stats)?;

        out.flush()?;
        Ok(stats)
    }

    /// Second pass: walk the tree top-down, pruning excluded directories
    /// before descending, and dump every non-excluded file.
    fn dump_contents<W: Write>(
        &self,
        root: &Path,
        out: &mut W,
        stats: &mut WriterStatistics,
    ) -> Result<()> {
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.excludes.is_excluded(e.path()));

        for entry in walker.filter_map(std::result::Result::ok) {
            if !entry.file_type().is_file() {
                continue;
            }

            let rel_path = entry.path().strip_prefix(root).unwrap_or(entry.path());

            self.progress.inc(1);
            let file_name = entry.file_name().to_string_lossy();
            // Truncate long names to avoid display issues
            let display_name = truncate_left(&file_name, 40);
            self.progress
                .set_message(format!("Current file: {}", display_name));

            match dump_file(entry.path(), rel_path, out)? {
                Some(info) => {
                    stats.files_processed += 1;
                    stats.total_lines += info.lines;
                    stats.total_chars += info.chars;
                    stats
                        .file_details
                        .insert(rel_path.to_string_lossy().into_owned(), info);
                }
                None => {
                    stats.files_processed += 1;
                    stats.unreadable_files += 1;
                    stats.file_details.insert(
                        rel_path.to_string_lossy().into_owned(),
                        FileReportInfo::default(),
                    );
                }
            }
        }

        Ok(())
    }
}

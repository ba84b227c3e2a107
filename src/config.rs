/*!
 * Configuration handling for RepoDump
 */

use std::path::PathBuf;

use clap::Parser;

use crate::error::{Error, Result};
use crate::filter::DEFAULT_EXCLUDE;

/// Command-line arguments for RepoDump
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "repodump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate a plain-text summary of a repository's structure and file contents",
    long_about = "Walks a directory tree and writes a single text report: a tree-style \
listing of the directory structure followed by the contents of every non-excluded file, \
designed for providing context to Large Language Models (LLMs)."
)]
pub struct Args {
    /// Path to the repository to summarize
    #[clap(default_value = ".")]
    pub repo_path: String,

    /// Output filename
    #[clap(short = 'o', long = "output", default_value = "repo_contents_summary.txt")]
    pub output: String,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target directory to summarize
    pub target_dir: PathBuf,

    /// Output file path
    pub output_file: PathBuf,

    /// Exclusion patterns, in order: the output filename first, then the
    /// built-in defaults. Matched as literal substrings of absolute paths.
    pub exclude_patterns: Vec<String>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let mut exclude_patterns = vec![args.output.clone()];
        exclude_patterns.extend(DEFAULT_EXCLUDE.iter().map(|p| p.to_string()));

        Self {
            target_dir: PathBuf::from(args.repo_path),
            output_file: PathBuf::from(args.output),
            exclude_patterns,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Check if target directory exists and is a directory
        if !self.target_dir.exists() || !self.target_dir.is_dir() {
            return Err(Error::Config(format!(
                "Target directory not found: {}",
                self.target_dir.display()
            )));
        }

        // Check if output file directory exists
        if let Some(parent) = self.output_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::Config(format!(
                    "Output directory not found: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }
}

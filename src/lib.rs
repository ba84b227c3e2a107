/*!
 * RepoDump - Generate a plain-text summary of directory contents for LLM context
 *
 * This library walks a directory tree and produces a single text report:
 * a tree-style listing of the directory structure followed by the
 * concatenated contents of every non-excluded file.
 */

pub mod config;
pub mod dump;
pub mod error;
pub mod filter;
pub mod report;
pub mod tree;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::Config;
pub use error::{Error, Result};
pub use filter::{ExcludeList, DEFAULT_EXCLUDE};
pub use report::{FileReportInfo, ReportFormat, Reporter, RunReport};
pub use tree::render_tree;
pub use utils::{count_files, truncate_left};
pub use writer::{SummaryWriter, WriterStatistics};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

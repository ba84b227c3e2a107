/*!
 * Command-line interface for RepoDump
 */

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use repodump::config::{Args, Config};
use repodump::error::Result;
use repodump::report::{ReportFormat, Reporter, RunReport};
use repodump::utils::count_files;
use repodump::writer::SummaryWriter;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Create configuration
    let config = Config::from_args(args);

    // Validate configuration
    config.validate()?;

    // Create progress bar
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) Elapsed: {elapsed_precise}")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📊 Setup");
    progress.set_message(format!(
        "📂 Summarizing directory: {}",
        config.target_dir.display()
    ));

    // Create writer
    let writer = SummaryWriter::new(config.clone(), Arc::new(progress.clone()));

    // Count files for progress tracking
    let total_files = match count_files(&config.target_dir, writer.excludes()) {
        Ok(count) => {
            progress.set_message(format!("🔎 Found {} files to process", count));
            count
        }
        Err(e) => {
            progress.set_message(format!("⚠️ Warning: Failed to count files: {}", e));
            0
        }
    };

    progress.set_length(total_files);
    progress.set_prefix("📊 Processing");
    progress.set_message("Starting summary...");

    // Generate the summary
    let start_time = Instant::now();
    let stats = writer.write()?;
    let duration = start_time.elapsed();

    // Clear the progress bar
    progress.finish_and_clear();

    // Prepare and print the run report
    let run_report = RunReport {
        output_file: config.output_file.display().to_string(),
        duration,
        files_processed: stats.files_processed,
        total_lines: stats.total_lines,
        total_chars: stats.total_chars,
        unreadable_files: stats.unreadable_files,
        file_details: stats.file_details,
    };

    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&run_report);

    println!(
        "Repository summary generated in '{}'",
        config.output_file.display()
    );

    Ok(())
}

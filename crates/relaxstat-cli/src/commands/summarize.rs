use crate::cli::SummarizeArgs;
use crate::config::builder::build_summarize_config;
use crate::config::file::FileConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use relaxstat::{engine::progress::ProgressReporter, workflows};
use tracing::{info, warn};

pub async fn run(args: SummarizeArgs, file_config: &FileConfig) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = build_summarize_config(&args, file_config)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Scanning relax runs in {}...", config.relax_dir.display());
    let report =
        tokio::task::block_in_place(|| workflows::summarize::run(&config, &reporter))?;

    if report.table.records.is_empty() {
        warn!("No run in {:?} produced a complex score.", config.relax_dir);
        println!("Warning: no scored runs found; the summary table has no rows.");
    } else {
        println!(
            "Kept {} of {} scored run(s).",
            report.table.records.len(),
            report.scored_runs
        );
    }
    println!(
        "Wrote detailed results + summary to {}",
        report.output_path.display()
    );

    Ok(())
}

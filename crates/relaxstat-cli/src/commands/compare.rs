use crate::cli::CompareArgs;
use crate::config::builder::build_compare_config;
use crate::config::file::FileConfig;
use crate::error::Result;
use crate::plot::{ChartRequest, render_group_chart};
use crate::utils::progress::CliProgressHandler;
use relaxstat::{engine::progress::ProgressReporter, workflows};
use tracing::{debug, info};

pub async fn run(args: CompareArgs, file_config: &FileConfig) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = build_compare_config(&args, file_config)?;
    if args.raw_ddg.is_some() || args.raw_custom.is_some() {
        debug!("--raw-ddg and --raw-custom are accepted for compatibility and ignored.");
    }

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let report = tokio::task::block_in_place(|| workflows::compare::run(&config, &reporter))?;

    if report.groups.is_empty() {
        println!("No {} data found.", config.value_column);
        return Ok(());
    }

    if args.no_plot {
        info!("Chart disabled with --no-plot.");
    } else {
        let request = ChartRequest {
            groups: &report.groups,
            value_column: &config.value_column,
            rank_column: &config.rank_column,
            top_n: config.top_n,
        };
        match tokio::task::block_in_place(|| render_group_chart(&request, &args.out_plots))? {
            Some(path) => println!("Wrote {}", path.display()),
            None => println!("Chart rendering is not available in this build; skipping plot."),
        }
    }

    if config.statistics_path.is_some() && report.statistics_path.is_none() {
        info!("No statistics file was written.");
    }

    Ok(())
}

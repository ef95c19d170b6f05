use super::config::CompareConfig;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use super::scanner::list_subdirectories;
use crate::core::io::summary::{DetailBlock, SummaryFile};
use crate::core::io::traits::ReadableFile;
use crate::core::models::group::{BaselineComparison, Group};
use crate::core::stats::dunn::dunn_bonferroni;
use crate::core::stats::kruskal::kruskal_wallis;
use tracing::{debug, info, instrument, warn};

fn parse_cell(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Values of `value_column` from the best `n` rows of a detail block.
///
/// Rows are ordered by ascending `rank_column`, unparsable ranks last, and the first `n`
/// are kept. Without a rank column every row is used in file order. Missing,
/// unparsable or non-finite value cells are dropped. Returns `None` if `value_column` is absent.
pub fn top_n_column_values(
    block: &DetailBlock,
    rank_column: &str,
    value_column: &str,
    n: usize,
) -> Option<Vec<f64>> {
    let mut rows: Vec<&Vec<String>> = block.rows.iter().collect();

    if let Some(rank_idx) = block.column_index(rank_column) {
        let rank_of = |row: &Vec<String>| {
            row.get(rank_idx)
                .and_then(|c| parse_cell(c))
                .unwrap_or(f64::INFINITY)
        };
        rows.sort_by(|a, b| rank_of(*a).total_cmp(&rank_of(*b)));
        rows.truncate(n);
    }

    let value_idx = block.column_index(value_column)?;
    Some(
        rows.into_iter()
            .filter_map(|row| row.get(value_idx).and_then(|c| parse_cell(c)))
            .collect(),
    )
}

/// Reads the summary table of every group directory under the configured root.
///
/// Groups are returned sorted by name. Directories without a summary table, tables
/// without a detail block, tables lacking the value column, and groups with no usable
/// values are reported and left out.
#[instrument(skip_all, name = "collect_groups", fields(root = %config.root_dir.display()))]
pub fn collect_groups(
    config: &CompareConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<Group>, EngineError> {
    let group_dirs = list_subdirectories(&config.root_dir, &[])?;
    reporter.report(Progress::TaskStart {
        total_steps: group_dirs.len() as u64,
    });

    let mut groups = Vec::new();
    for dir in &group_dirs {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let summary_path = dir.join(&config.summary_file_name);

        let outcome = if !summary_path.is_file() {
            debug!("No summary table in {:?}", dir);
            None
        } else {
            match SummaryFile::read_from_path(&summary_path) {
                Ok(Some(block)) => Some(block),
                Ok(None) => {
                    debug!("Summary table {:?} has no detail rows", summary_path);
                    None
                }
                Err(e) => {
                    warn!("Failed to read {:?}: {}", summary_path, e);
                    reporter.skipped(summary_path.display().to_string(), e);
                    None
                }
            }
        };

        if let Some(block) = outcome {
            match top_n_column_values(
                &block,
                &config.rank_column,
                &config.value_column,
                config.top_n,
            ) {
                None => {
                    warn!(
                        "No '{}' column found in {:?}",
                        config.value_column, summary_path
                    );
                    reporter.skipped(
                        summary_path.display().to_string(),
                        format!("no '{}' column", config.value_column),
                    );
                }
                Some(values) if values.is_empty() => {
                    debug!("Group '{}' has no usable '{}' values", name, config.value_column);
                }
                Some(values) => {
                    reporter.message(format!(
                        "Group {:20} | Top-N {} count = {}",
                        name,
                        config.value_column,
                        values.len()
                    ));
                    groups.push(Group::new(name, values));
                }
            }
        }
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);

    info!("Collected {} group(s) with data.", groups.len());
    Ok(groups)
}

/// Kruskal-Wallis across all groups plus Dunn's test of each group against `baseline`.
///
/// One row is produced per non-baseline group, in the order of `groups`.
pub fn compare_against_baseline(
    groups: &[Group],
    baseline: &str,
    column: &str,
) -> Result<Vec<BaselineComparison>, EngineError> {
    let baseline_idx = groups
        .iter()
        .position(|g| g.name == baseline)
        .ok_or_else(|| EngineError::MissingBaseline(baseline.to_string()))?;

    let samples: Vec<&[f64]> = groups.iter().map(|g| g.values.as_slice()).collect();
    let kruskal = kruskal_wallis(&samples).ok_or_else(|| {
        EngineError::Statistics(
            "Kruskal-Wallis needs at least two non-empty groups with distinct values".to_string(),
        )
    })?;
    info!(
        "Kruskal-Wallis: H = {:.4}, p = {:.4e}",
        kruskal.h, kruskal.p_value
    );
    let dunn = dunn_bonferroni(&samples);

    let base = &groups[baseline_idx];
    let mean_baseline = base.mean().unwrap_or(f64::NAN);

    Ok(groups
        .iter()
        .enumerate()
        .filter(|(idx, g)| *idx != baseline_idx && !g.is_empty())
        .map(|(idx, g)| BaselineComparison {
            column: column.to_string(),
            baseline_group: base.name.clone(),
            other_group: g.name.clone(),
            n_baseline: base.len(),
            n_other: g.len(),
            mean_baseline,
            mean_other: g.mean().unwrap_or(f64::NAN),
            kruskal_h: kruskal.h,
            kruskal_p: kruskal.p_value,
            dunn_p_adjusted: dunn
                .as_ref()
                .and_then(|m| m.get(baseline_idx, idx))
                .unwrap_or(f64::NAN),
        })
        .collect())
}

use crate::core::io::summary::ColumnSummary;
use crate::core::models::metric::Metric;
use crate::core::models::record::{RankedRecord, RunRecord};
use crate::core::stats::descriptive;

/// Sorts records by ascending score and keeps the first `n`.
///
/// The sort is stable, so runs with equal scores keep their scan order.
pub fn rank_top_n(mut records: Vec<RunRecord>, n: usize) -> Vec<RankedRecord> {
    records.sort_by(|a, b| a.score.total_cmp(&b.score));
    records
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(rank, record)| RankedRecord::new(rank, record))
        .collect()
}

/// Mean and population standard deviation of every metric with at least one value.
pub fn summarize_columns(records: &[RankedRecord]) -> Vec<ColumnSummary> {
    Metric::STATISTICS_ORDER
        .iter()
        .filter_map(|&metric| {
            let values: Vec<f64> = records.iter().filter_map(|r| r.value(metric)).collect();
            Some(ColumnSummary {
                metric,
                mean: descriptive::mean(&values)?,
                std_dev: descriptive::population_std(&values)?,
                count: values.len(),
            })
        })
        .collect()
}

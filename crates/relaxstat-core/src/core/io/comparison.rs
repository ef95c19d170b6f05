use super::summary::SummaryError;
use super::traits::WritableFile;
use crate::core::models::group::{BaselineComparison, Group};
use serde::Serialize;
use std::io::Write;

const COMPARISON_HEADER: [&str; 10] = [
    "stat",
    "baseline_group",
    "other_group",
    "n_baseline",
    "n_other",
    "mean_baseline",
    "mean_other",
    "kruskal_H_global",
    "kruskal_p_global",
    "dunn_p_adj",
];

/// Formats a value as `d.<precision digits>e±XX`, the exponent padded to at least two digits.
pub fn format_scientific(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let rendered = format!("{:.*e}", precision, value);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => rendered,
    }
}

fn format_fixed(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.6}", value)
    }
}

/// Column-per-group table of the raw values behind a comparison.
///
/// The header lists group names in the given order; row `i` holds the `i`-th value of
/// every group, or an empty cell once a group is exhausted.
pub struct RawValuesFile;

impl WritableFile for RawValuesFile {
    type Input = [Group];
    type Error = SummaryError;

    fn write_to(data: &Self::Input, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(data.iter().map(|g| g.name.as_str()))?;

        let longest = data.iter().map(Group::len).max().unwrap_or(0);
        for i in 0..longest {
            csv_writer.write_record(data.iter().map(|g| {
                g.values
                    .get(i)
                    .map(|&v| format_fixed(v))
                    .unwrap_or_default()
            }))?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct ComparisonRow<'a> {
    stat: &'a str,
    baseline_group: &'a str,
    other_group: &'a str,
    n_baseline: usize,
    n_other: usize,
    mean_baseline: String,
    mean_other: String,
    kruskal_h_global: String,
    kruskal_p_global: String,
    dunn_p_adj: String,
}

impl<'a> From<&'a BaselineComparison> for ComparisonRow<'a> {
    fn from(c: &'a BaselineComparison) -> Self {
        Self {
            stat: &c.column,
            baseline_group: &c.baseline_group,
            other_group: &c.other_group,
            n_baseline: c.n_baseline,
            n_other: c.n_other,
            mean_baseline: format_fixed(c.mean_baseline),
            mean_other: format_fixed(c.mean_other),
            kruskal_h_global: format_fixed(c.kruskal_h),
            kruskal_p_global: format_scientific(c.kruskal_p, 6),
            dunn_p_adj: format_scientific(c.dunn_p_adjusted, 6),
        }
    }
}

/// Kruskal-Wallis and Dunn results of every group against the baseline group.
pub struct ComparisonFile;

impl WritableFile for ComparisonFile {
    type Input = [BaselineComparison];
    type Error = SummaryError;

    fn write_to(data: &Self::Input, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv_writer.write_record(COMPARISON_HEADER)?;
        for comparison in data {
            csv_writer.serialize(ComparisonRow::from(comparison))?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

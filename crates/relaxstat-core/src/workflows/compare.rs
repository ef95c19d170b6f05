use crate::core::io::comparison::{ComparisonFile, RawValuesFile, format_scientific};
use crate::core::io::summary::SummaryError;
use crate::core::io::traits::WritableFile;
use crate::core::models::group::{BaselineComparison, Group};
use crate::engine::comparator::{collect_groups, compare_against_baseline};
use crate::engine::config::CompareConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Default)]
pub struct CompareReport {
    /// Groups with at least one value, sorted by name.
    pub groups: Vec<Group>,
    /// `None` when statistics were not requested or could not be computed.
    pub comparisons: Option<Vec<BaselineComparison>>,
    pub raw_values_path: Option<PathBuf>,
    pub statistics_path: Option<PathBuf>,
}

fn write_output<F>(data: &F::Input, path: &Path) -> Result<(), EngineError>
where
    F: WritableFile<Error = SummaryError>,
{
    F::write_to_path(data, path).map_err(|source| EngineError::Output {
        path: path.to_path_buf(),
        source,
    })
}

#[instrument(skip_all, name = "compare_workflow")]
pub fn run(config: &CompareConfig, reporter: &ProgressReporter) -> Result<CompareReport, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Collecting groups",
    });
    let groups = collect_groups(config, reporter)?;
    reporter.report(Progress::PhaseFinish);

    let mut report = CompareReport {
        groups,
        ..Default::default()
    };
    if report.groups.is_empty() {
        info!("No '{}' data found in any group.", config.value_column);
        return Ok(report);
    }

    if let Some(path) = &config.raw_values_path {
        write_output::<RawValuesFile>(&report.groups, path)?;
        reporter.message(format!("Wrote raw {} values to {}", config.value_column, path.display()));
        report.raw_values_path = Some(path.clone());
    }

    if let Some(path) = &config.statistics_path {
        reporter.report(Progress::PhaseStart {
            name: "Testing against baseline",
        });
        let outcome =
            compare_against_baseline(&report.groups, &config.baseline_group, &config.value_column);
        reporter.report(Progress::PhaseFinish);

        match outcome {
            Ok(comparisons) => {
                if let Some(first) = comparisons.first() {
                    reporter.message(format!(
                        "Kruskal-Wallis: H = {:.4}, p = {}",
                        first.kruskal_h,
                        format_scientific(first.kruskal_p, 4)
                    ));
                }
                write_output::<ComparisonFile>(&comparisons, path)?;
                reporter.message(format!("Wrote statistics to {}", path.display()));
                report.comparisons = Some(comparisons);
                report.statistics_path = Some(path.clone());
            }
            Err(e @ (EngineError::MissingBaseline(_) | EngineError::Statistics(_))) => {
                warn!("Skipping statistics: {}", e);
                reporter.message(format!("Statistics skipped: {}", e));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::CompareConfigBuilder;
    use std::fs;
    use tempfile::tempdir;

    fn write_group(root: &Path, name: &str, inte: &[f64]) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        let mut content = String::from("Rank,Score,IntE\n");
        for (i, v) in inte.iter().enumerate() {
            content.push_str(&format!("{i},{:.3},{v:.3}\n", -100.0 + i as f64));
        }
        content.push_str("\nStatistic,Mean,StdDev\n");
        fs::write(dir.join("summary.csv"), content).unwrap();
    }

    fn config(root: &Path, baseline: &str) -> CompareConfig {
        CompareConfigBuilder::new()
            .root_dir(root.to_path_buf())
            .summary_file_name("summary.csv")
            .top_n(40)
            .rank_column("Score")
            .value_column("IntE")
            .baseline_group(baseline)
            .raw_values_path(Some(root.join("raw_IntE.csv")))
            .statistics_path(Some(root.join("stats_IntE.csv")))
            .build()
            .unwrap()
    }

    #[test]
    fn writes_raw_values_and_statistics() {
        let root = tempdir().unwrap();
        write_group(root.path(), "mut_strong", &[-11.9, -13.4, -12.7, -10.9]);
        write_group(root.path(), "mut_weak", &[-8.1, -7.7, -9.0]);
        write_group(root.path(), "wt", &[-10.5, -12.0, -11.2, -9.8]);

        let report = run(&config(root.path(), "wt"), &ProgressReporter::new()).unwrap();
        assert_eq!(report.groups.len(), 3);
        let comparisons = report.comparisons.unwrap();
        assert_eq!(comparisons.len(), 2);

        let raw = fs::read_to_string(root.path().join("raw_IntE.csv")).unwrap();
        assert_eq!(raw.lines().next().unwrap(), "mut_strong,mut_weak,wt");
        assert_eq!(raw.lines().count(), 5);

        let stats = fs::read_to_string(root.path().join("stats_IntE.csv")).unwrap();
        let rows: Vec<&str> = stats.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].starts_with("IntE,wt,mut_strong,4,4,-10.875000,-12.225000,7.136364,2.820709e-02,"));
        assert!(rows[2].starts_with("IntE,wt,mut_weak,4,3,"));
    }

    #[test]
    fn missing_baseline_keeps_raw_values_but_skips_statistics() {
        let root = tempdir().unwrap();
        write_group(root.path(), "a", &[-1.0, -2.0]);
        write_group(root.path(), "b", &[-3.0, -4.0]);

        let report = run(&config(root.path(), "wt"), &ProgressReporter::new()).unwrap();
        assert!(report.comparisons.is_none());
        assert!(report.statistics_path.is_none());
        assert!(root.path().join("raw_IntE.csv").is_file());
        assert!(!root.path().join("stats_IntE.csv").exists());
    }

    #[test]
    fn no_groups_writes_nothing() {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join("empty_group")).unwrap();

        let report = run(&config(root.path(), "wt"), &ProgressReporter::new()).unwrap();
        assert!(report.groups.is_empty());
        assert!(report.raw_values_path.is_none());
        assert!(!root.path().join("raw_IntE.csv").exists());
    }

    #[test]
    fn missing_root_fails() {
        let root = tempdir().unwrap();
        let result = run(&config(&root.path().join("absent"), "wt"), &ProgressReporter::new());
        assert!(matches!(result, Err(EngineError::MissingDirectory { .. })));
    }
}

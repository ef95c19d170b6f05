use crate::core::io::summary::{SummaryFile, SummaryTable};
use crate::core::io::traits::WritableFile;
use crate::engine::config::SummarizeConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::ranking::{rank_top_n, summarize_columns};
use crate::engine::scanner::scan_runs;
use std::path::PathBuf;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct SummarizeReport {
    /// Number of runs that produced a scored record before truncation.
    pub scored_runs: usize,
    pub table: SummaryTable,
    pub output_path: PathBuf,
}

#[instrument(skip_all, name = "summarize_workflow")]
pub fn run(
    config: &SummarizeConfig,
    reporter: &ProgressReporter,
) -> Result<SummarizeReport, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Scanning runs",
    });
    let records = scan_runs(&config.relax_dir, &config.scan, reporter)?;
    reporter.report(Progress::PhaseFinish);

    let scored_runs = records.len();
    let ranked = rank_top_n(records, config.scan.top_n);
    let statistics = summarize_columns(&ranked);
    info!(
        "Keeping {} of {} scored runs (top {}).",
        ranked.len(),
        scored_runs,
        config.scan.top_n
    );
    let table = SummaryTable {
        records: ranked,
        statistics,
    };

    reporter.report(Progress::PhaseStart {
        name: "Writing summary",
    });
    SummaryFile::write_to_path(&table, &config.output_path).map_err(|source| {
        EngineError::Output {
            path: config.output_path.clone(),
            source,
        }
    })?;
    reporter.report(Progress::PhaseFinish);
    info!("Wrote summary table to {:?}", config.output_path);

    Ok(SummarizeReport {
        scored_runs,
        table,
        output_path: config.output_path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::summary::SummaryFile;
    use crate::core::io::traits::ReadableFile;
    use crate::core::models::metric::Metric;
    use crate::engine::config::SummarizeConfigBuilder;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_run(root: &Path, name: &str, score: f64, ddg_bind: Option<f64>) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("min_again_0001.pdb"), "").unwrap();
        let mut log = format!(
            "Score of the complex: {score}\nInteraction energy of complex: {}\nUnbound RNA score: -300.0\nUnbound protein score: -500.0\n",
            score / 10.0
        );
        if let Some(ddg) = ddg_bind {
            log.push_str(&format!("ddG_bind: {ddg}\n"));
        }
        fs::write(dir.join("relax_2.log"), log).unwrap();
    }

    fn config(root: &Path, top_n: usize) -> SummarizeConfig {
        SummarizeConfigBuilder::new()
            .relax_dir(root.to_path_buf())
            .log_file_name("relax_2.log")
            .model_prefix("min_again")
            .model_suffix("pdb")
            .excluded_dirs(vec!["input_lists".into()])
            .top_n(top_n)
            .build()
            .unwrap()
    }

    #[test]
    fn writes_top_n_summary_next_to_runs() {
        let root = tempdir().unwrap();
        write_run(root.path(), "run_1", -5.0, Some(-1.0));
        write_run(root.path(), "run_2", -3.2, Some(-2.0));
        write_run(root.path(), "run_3", -7.1, None);
        write_run(root.path(), "run_4", -1.0, Some(-4.0));

        let report = run(&config(root.path(), 2), &ProgressReporter::new()).unwrap();
        assert_eq!(report.scored_runs, 4);
        assert_eq!(report.output_path, root.path().join("summary.csv"));

        let scores: Vec<f64> = report.table.records.iter().map(|r| r.record.score).collect();
        assert_eq!(scores, vec![-7.1, -5.0]);

        let block = SummaryFile::read_from_path(&report.output_path)
            .unwrap()
            .unwrap();
        assert_eq!(block.rows.len(), 2);
        let ddg_idx = block.column_index(Metric::DdgBind.column_name()).unwrap();
        assert_eq!(block.rows[0][ddg_idx], "");
        assert_eq!(block.rows[1][ddg_idx], "-1.000");

        let text = fs::read_to_string(&report.output_path).unwrap();
        assert!(text.contains("\nddG_bind,-1.000,0.000"));
        assert!(text.contains("\nScore,-6.050,1.050"));
    }

    #[test]
    fn missing_relax_dir_fails() {
        let root = tempdir().unwrap();
        let result = run(&config(&root.path().join("nope"), 20), &ProgressReporter::new());
        assert!(matches!(result, Err(EngineError::MissingDirectory { .. })));
    }

    #[test]
    fn empty_relax_dir_writes_header_only_table() {
        let root = tempdir().unwrap();
        let report = run(&config(root.path(), 20), &ProgressReporter::new()).unwrap();
        assert!(report.table.records.is_empty());
        assert!(report.table.statistics.is_empty());
        let text = fs::read_to_string(&report.output_path).unwrap();
        assert!(text.starts_with("Rank,Score,"));
        assert!(text.contains("Statistic,Mean,StdDev"));
    }
}

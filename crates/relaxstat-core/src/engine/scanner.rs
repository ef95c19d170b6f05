use super::config::ScanConfig;
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use crate::core::io::relax_log::RelaxLog;
use crate::core::io::traits::ReadableFile;
use crate::core::models::record::RunRecord;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Why a run directory contributed no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NoModelFile,
    NoLogFile,
    NoScore,
    Unreadable(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoModelFile => f.write_str("no model file"),
            SkipReason::NoLogFile => f.write_str("no log file"),
            SkipReason::NoScore => f.write_str("log has no complex score"),
            SkipReason::Unreadable(e) => write!(f, "unreadable: {}", e),
        }
    }
}

/// Immediate subdirectories of `root`, sorted by name, minus the excluded names.
pub fn list_subdirectories(root: &Path, excluded: &[String]) -> Result<Vec<PathBuf>, EngineError> {
    if !root.is_dir() {
        return Err(EngineError::MissingDirectory {
            path: root.to_path_buf(),
        });
    }

    let read_error = |source| EngineError::DirectoryRead {
        path: root.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in fs::read_dir(root).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name();
        if excluded.iter().any(|e| name.to_string_lossy() == e.as_str()) {
            debug!("Excluding reserved directory {:?}", path);
            continue;
        }
        dirs.push(path);
    }
    dirs.sort();
    Ok(dirs)
}

/// `name` matches the glob `<prefix>*<suffix>`; prefix and suffix may not overlap.
fn matches_model_pattern(name: &str, prefix: &str, suffix: &str) -> bool {
    name.len() >= prefix.len() + suffix.len() && name.starts_with(prefix) && name.ends_with(suffix)
}

/// First file (by name) in `dir` whose name starts with the model prefix and ends with the suffix.
pub fn find_model_file(dir: &Path, config: &ScanConfig) -> Result<Option<PathBuf>, std::io::Error> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if matches_model_pattern(&name, &config.model_prefix, &config.model_suffix) {
            candidates.push(entry.path());
        }
    }
    candidates.sort();
    Ok(candidates.into_iter().next())
}

/// Builds the record for a single run directory.
pub fn scan_run(dir: &Path, config: &ScanConfig) -> Result<RunRecord, SkipReason> {
    let model_path = find_model_file(dir, config)
        .map_err(|e| SkipReason::Unreadable(e.to_string()))?
        .ok_or(SkipReason::NoModelFile)?;

    let log_path = dir.join(&config.log_file_name);
    if !log_path.is_file() {
        return Err(SkipReason::NoLogFile);
    }

    let metrics =
        RelaxLog::read_from_path(&log_path).map_err(|e| SkipReason::Unreadable(e.to_string()))?;
    let run_name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    RunRecord::from_metrics(run_name, metrics, model_path).ok_or(SkipReason::NoScore)
}

/// Scans every run directory under `root` and returns the records that have a score.
///
/// Directories are visited in name order; runs without a model file, without a log,
/// or without a complex score are reported through `reporter` and skipped.
#[instrument(skip_all, name = "scan_runs", fields(root = %root.display()))]
pub fn scan_runs(
    root: &Path,
    config: &ScanConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<RunRecord>, EngineError> {
    let run_dirs = list_subdirectories(root, &config.excluded_dirs)?;
    info!("Found {} candidate run directories.", run_dirs.len());

    reporter.report(Progress::TaskStart {
        total_steps: run_dirs.len() as u64,
    });

    let mut records = Vec::with_capacity(run_dirs.len());
    for dir in &run_dirs {
        match scan_run(dir, config) {
            Ok(record) => {
                debug!("Run {:?} scored {:.3}", dir, record.score);
                records.push(record);
            }
            Err(reason) => {
                match &reason {
                    SkipReason::Unreadable(_) => warn!("Skipping {:?}: {}", dir, reason),
                    _ => debug!("Skipping {:?}: {}", dir, reason),
                }
                reporter.skipped(dir.display().to_string(), &reason);
            }
        }
        reporter.report(Progress::TaskIncrement);
    }
    reporter.report(Progress::TaskFinish);

    info!(
        "{} of {} run directories produced a scored record.",
        records.len(),
        run_dirs.len()
    );
    Ok(records)
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

/// How run directories are recognised and how many runs are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    /// Name of the log file inside each run directory.
    pub log_file_name: String,
    /// Model files start with this prefix...
    pub model_prefix: String,
    /// ...and end with this suffix.
    pub model_suffix: String,
    /// Subdirectory names that never hold runs.
    pub excluded_dirs: Vec<String>,
    pub top_n: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummarizeConfig {
    pub relax_dir: PathBuf,
    pub output_path: PathBuf,
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompareConfig {
    pub root_dir: PathBuf,
    /// Summary table file name inside each group directory.
    pub summary_file_name: String,
    pub top_n: usize,
    pub rank_column: String,
    pub value_column: String,
    pub baseline_group: String,
    pub raw_values_path: Option<PathBuf>,
    pub statistics_path: Option<PathBuf>,
}

fn require_non_empty(parameter: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            parameter,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

fn require_positive(parameter: &'static str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidValue {
            parameter,
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

#[derive(Default)]
pub struct SummarizeConfigBuilder {
    relax_dir: Option<PathBuf>,
    output_path: Option<PathBuf>,
    log_file_name: Option<String>,
    model_prefix: Option<String>,
    model_suffix: Option<String>,
    excluded_dirs: Option<Vec<String>>,
    top_n: Option<usize>,
}

impl SummarizeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn relax_dir(mut self, path: PathBuf) -> Self {
        self.relax_dir = Some(path);
        self
    }
    /// Defaults to `summary.csv` inside the relax directory.
    pub fn output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }
    pub fn log_file_name(mut self, name: impl Into<String>) -> Self {
        self.log_file_name = Some(name.into());
        self
    }
    pub fn model_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.model_prefix = Some(prefix.into());
        self
    }
    pub fn model_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.model_suffix = Some(suffix.into());
        self
    }
    pub fn excluded_dirs(mut self, dirs: Vec<String>) -> Self {
        self.excluded_dirs = Some(dirs);
        self
    }
    pub fn top_n(mut self, n: usize) -> Self {
        self.top_n = Some(n);
        self
    }

    pub fn build(self) -> Result<SummarizeConfig, ConfigError> {
        let relax_dir = self
            .relax_dir
            .ok_or(ConfigError::MissingParameter("relax_dir"))?;
        let log_file_name = self
            .log_file_name
            .ok_or(ConfigError::MissingParameter("log_file_name"))?;
        require_non_empty("log_file_name", &log_file_name)?;
        let top_n = self.top_n.ok_or(ConfigError::MissingParameter("top_n"))?;
        require_positive("top_n", top_n)?;

        let scan = ScanConfig {
            log_file_name,
            model_prefix: self
                .model_prefix
                .ok_or(ConfigError::MissingParameter("model_prefix"))?,
            model_suffix: self
                .model_suffix
                .ok_or(ConfigError::MissingParameter("model_suffix"))?,
            excluded_dirs: self.excluded_dirs.unwrap_or_default(),
            top_n,
        };
        let output_path = self
            .output_path
            .unwrap_or_else(|| relax_dir.join("summary.csv"));

        Ok(SummarizeConfig {
            relax_dir,
            output_path,
            scan,
        })
    }
}

#[derive(Default)]
pub struct CompareConfigBuilder {
    root_dir: Option<PathBuf>,
    summary_file_name: Option<String>,
    top_n: Option<usize>,
    rank_column: Option<String>,
    value_column: Option<String>,
    baseline_group: Option<String>,
    raw_values_path: Option<PathBuf>,
    statistics_path: Option<PathBuf>,
}

impl CompareConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_dir(mut self, path: PathBuf) -> Self {
        self.root_dir = Some(path);
        self
    }
    pub fn summary_file_name(mut self, name: impl Into<String>) -> Self {
        self.summary_file_name = Some(name.into());
        self
    }
    pub fn top_n(mut self, n: usize) -> Self {
        self.top_n = Some(n);
        self
    }
    pub fn rank_column(mut self, column: impl Into<String>) -> Self {
        self.rank_column = Some(column.into());
        self
    }
    pub fn value_column(mut self, column: impl Into<String>) -> Self {
        self.value_column = Some(column.into());
        self
    }
    pub fn baseline_group(mut self, group: impl Into<String>) -> Self {
        self.baseline_group = Some(group.into());
        self
    }
    pub fn raw_values_path(mut self, path: Option<PathBuf>) -> Self {
        self.raw_values_path = path;
        self
    }
    pub fn statistics_path(mut self, path: Option<PathBuf>) -> Self {
        self.statistics_path = path;
        self
    }

    pub fn build(self) -> Result<CompareConfig, ConfigError> {
        let summary_file_name = self
            .summary_file_name
            .ok_or(ConfigError::MissingParameter("summary_file_name"))?;
        require_non_empty("summary_file_name", &summary_file_name)?;
        let value_column = self
            .value_column
            .ok_or(ConfigError::MissingParameter("value_column"))?;
        require_non_empty("value_column", &value_column)?;
        let top_n = self.top_n.ok_or(ConfigError::MissingParameter("top_n"))?;
        require_positive("top_n", top_n)?;

        Ok(CompareConfig {
            root_dir: self
                .root_dir
                .ok_or(ConfigError::MissingParameter("root_dir"))?,
            summary_file_name,
            top_n,
            rank_column: self
                .rank_column
                .ok_or(ConfigError::MissingParameter("rank_column"))?,
            value_column,
            baseline_group: self
                .baseline_group
                .ok_or(ConfigError::MissingParameter("baseline_group"))?,
            raw_values_path: self.raw_values_path,
            statistics_path: self.statistics_path,
        })
    }
}

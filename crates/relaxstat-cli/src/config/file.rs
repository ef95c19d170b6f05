use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileScanConfig {
    pub log_file: Option<String>,
    pub model_prefix: Option<String>,
    pub model_suffix: Option<String>,
    pub exclude_dirs: Option<Vec<String>>,
    pub top_n: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileCompareConfig {
    pub summary_file: Option<String>,
    pub top_n: Option<usize>,
    pub rank_column: Option<String>,
    pub value_column: Option<String>,
    pub baseline_group: Option<String>,
}

/// Contents of a TOML configuration file. Every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub scan: Option<FileScanConfig>,
    pub compare: Option<FileCompareConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_both_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("relaxstat.toml");
        fs::write(
            &path,
            r#"
            [scan]
            log-file = "relax_3.log"
            exclude-dirs = ["input_lists", "scratch"]
            top-n = 10

            [compare]
            value-column = "ddG_bind"
            baseline-group = "relax_wt"
            "#,
        )
        .unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        let scan = config.scan.unwrap();
        assert_eq!(scan.log_file.as_deref(), Some("relax_3.log"));
        assert_eq!(
            scan.exclude_dirs,
            Some(vec!["input_lists".to_string(), "scratch".to_string()])
        );
        assert_eq!(scan.top_n, Some(10));
        assert!(scan.model_prefix.is_none());

        let compare = config.compare.unwrap();
        assert_eq!(compare.value_column.as_deref(), Some("ddG_bind"));
        assert_eq!(compare.baseline_group.as_deref(), Some("relax_wt"));
        assert!(compare.top_n.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[scan]\nlog_file = \"relax_2.log\"\n").unwrap();

        let result = FileConfig::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = FileConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}

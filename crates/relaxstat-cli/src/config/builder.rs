use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use crate::cli::{CompareArgs, SummarizeArgs};
use crate::error::{CliError, Result};
use relaxstat::engine::config::{
    CompareConfig, CompareConfigBuilder, SummarizeConfig, SummarizeConfigBuilder,
};
use std::path::Path;
use std::str::FromStr;

/// Reads the optional config file and applies `-S KEY=VALUE` overrides on top of it.
pub fn load_file_config(path: Option<&Path>, set_values: &[String]) -> Result<FileConfig> {
    let file_config = match path {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    apply_set_values(file_config, set_values)
}

pub fn build_summarize_config(args: &SummarizeArgs, file: &FileConfig) -> Result<SummarizeConfig> {
    let defaults = DefaultsConfig::default();
    let scan = file.scan.clone().unwrap_or_default();

    let mut builder = SummarizeConfigBuilder::new()
        .relax_dir(args.relax_dir.clone())
        .log_file_name(
            args.log_name
                .clone()
                .or(scan.log_file)
                .unwrap_or(defaults.log_file_name),
        )
        .model_prefix(
            args.model_prefix
                .clone()
                .or(scan.model_prefix)
                .unwrap_or(defaults.model_prefix),
        )
        .model_suffix(
            args.model_suffix
                .clone()
                .or(scan.model_suffix)
                .unwrap_or(defaults.model_suffix),
        )
        .excluded_dirs(scan.exclude_dirs.unwrap_or(defaults.excluded_dirs))
        .top_n(args.nmodels.or(scan.top_n).unwrap_or(defaults.scan_top_n));

    if let Some(out) = &args.out {
        builder = builder.output_path(out.clone());
    }

    Ok(builder.build()?)
}

pub fn build_compare_config(args: &CompareArgs, file: &FileConfig) -> Result<CompareConfig> {
    let defaults = DefaultsConfig::default();
    let compare = file.compare.clone().unwrap_or_default();

    let config = CompareConfigBuilder::new()
        .root_dir(args.root_dir.clone())
        .summary_file_name(compare.summary_file.unwrap_or(defaults.summary_file_name))
        .top_n(
            args.top_n
                .or(compare.top_n)
                .unwrap_or(defaults.compare_top_n),
        )
        .rank_column(
            args.rank_column
                .clone()
                .or(compare.rank_column)
                .unwrap_or(defaults.rank_column),
        )
        .value_column(
            args.column
                .clone()
                .or(compare.value_column)
                .unwrap_or(defaults.value_column),
        )
        .baseline_group(
            args.baseline
                .clone()
                .or(compare.baseline_group)
                .unwrap_or(defaults.baseline_group),
        )
        .raw_values_path(args.raw_inte.clone())
        .statistics_path(args.stats_vs_relax.clone())
        .build()?;

    Ok(config)
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();

        match key {
            "scan.log-file" => {
                config.scan.get_or_insert_with(Default::default).log_file =
                    Some(value_str.to_string());
            }
            "scan.model-prefix" => {
                config.scan.get_or_insert_with(Default::default).model_prefix =
                    Some(value_str.to_string());
            }
            "scan.model-suffix" => {
                config.scan.get_or_insert_with(Default::default).model_suffix =
                    Some(value_str.to_string());
            }
            "scan.exclude-dirs" => {
                config.scan.get_or_insert_with(Default::default).exclude_dirs = Some(
                    value_str
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect(),
                );
            }
            "scan.top-n" => {
                config.scan.get_or_insert_with(Default::default).top_n =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "compare.summary-file" => {
                config.compare.get_or_insert_with(Default::default).summary_file =
                    Some(value_str.to_string());
            }
            "compare.top-n" => {
                config.compare.get_or_insert_with(Default::default).top_n =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "compare.rank-column" => {
                config.compare.get_or_insert_with(Default::default).rank_column =
                    Some(value_str.to_string());
            }
            "compare.value-column" => {
                config.compare.get_or_insert_with(Default::default).value_column =
                    Some(value_str.to_string());
            }
            "compare.baseline-group" => {
                config.compare.get_or_insert_with(Default::default).baseline_group =
                    Some(value_str.to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

use super::traits::ReadableFile;
use crate::core::models::metric::Metric;
use crate::core::models::record::LogMetrics;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Scraper for the log written by a relax-and-score run.
///
/// Each metric is announced by a fixed phrase; its value is the last
/// whitespace-delimited token on that line. Lines are tested against the markers in
/// [`Metric::LOGGED`] order and only the first matching marker counts. Unparsable
/// and non-finite values are ignored, and reading stops as soon as every metric has a value.
pub struct RelaxLog;

impl RelaxLog {
    fn scrape_line(line: &str, metrics: &mut LogMetrics) {
        let Some(metric) = Metric::LOGGED
            .into_iter()
            .find(|m| m.log_marker().is_some_and(|marker| line.contains(marker)))
        else {
            return;
        };

        let Some(token) = line.split_whitespace().last() else {
            return;
        };
        match token.parse::<f64>().ok().filter(|v| v.is_finite()) {
            Some(value) => metrics.set(metric, value),
            None => trace!("Ignoring unparsable {} value '{}'", metric, token),
        }
    }
}

impl ReadableFile for RelaxLog {
    type Output = LogMetrics;
    type Error = LogError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, Self::Error> {
        let mut metrics = LogMetrics::default();
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buffer);
            Self::scrape_line(&line, &mut metrics);
            if metrics.is_complete() {
                break;
            }
        }

        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(content: &str) -> LogMetrics {
        RelaxLog::read_from(&mut Cursor::new(content.as_bytes())).unwrap()
    }

    const FULL_LOG: &str = "\
core.init: Rosetta version 3.14
protocols.relax: Starting FastRelax
Score of the complex: -851.234
ddG_bind = -32.75
Interaction energy of complex   -120.5
Unbound RNA score:  -301.125
Unbound protein score: -510.0
";

    #[test]
    fn extracts_trailing_token_of_each_marker_line() {
        let metrics = parse(FULL_LOG);
        assert_eq!(metrics.score, Some(-851.234));
        assert_eq!(metrics.ddg_bind, Some(-32.75));
        assert_eq!(metrics.interaction_energy, Some(-120.5));
        assert_eq!(metrics.unbound_rna, Some(-301.125));
        assert_eq!(metrics.unbound_protein, Some(-510.0));
        assert!(metrics.is_complete());
    }

    #[test]
    fn stops_reading_once_all_metrics_are_set() {
        let content = format!("{FULL_LOG}Score of the complex: 999.0\n");
        assert_eq!(parse(&content).score, Some(-851.234));
    }

    #[test]
    fn later_line_overwrites_incomplete_metric() {
        let content = "Score of the complex: -10.0\nScore of the complex: -12.5\n";
        assert_eq!(parse(content).score, Some(-12.5));
    }

    #[test]
    fn unparsable_value_leaves_field_unset() {
        let content = "Score of the complex: -5.0\nddG_bind = n/a\n";
        let metrics = parse(content);
        assert_eq!(metrics.score, Some(-5.0));
        assert_eq!(metrics.ddg_bind, None);
    }

    #[test]
    fn unparsable_value_keeps_earlier_value() {
        let content = "ddG_bind = -3.0\nddG_bind = pending\n";
        assert_eq!(parse(content).ddg_bind, Some(-3.0));
    }

    #[test]
    fn non_finite_values_are_ignored() {
        let metrics = parse("Score of the complex: -nan\nddG_bind = inf\nUnbound RNA score: NaN\n");
        assert_eq!(metrics.score, None);
        assert_eq!(metrics.ddg_bind, None);
        assert_eq!(metrics.unbound_rna, None);

        let metrics = parse("Score of the complex: -4.0\nScore of the complex: nan\n");
        assert_eq!(metrics.score, Some(-4.0));
    }

    #[test]
    fn first_matching_marker_wins() {
        // Both the score marker and the ddG_bind marker appear; the score marker is tested first.
        let content = "Score of the complex (ddG_bind pending): -7.5\n";
        let metrics = parse(content);
        assert_eq!(metrics.score, Some(-7.5));
        assert_eq!(metrics.ddg_bind, None);
    }

    #[test]
    fn empty_log_yields_no_metrics() {
        assert_eq!(parse(""), LogMetrics::default());
    }

    #[test]
    fn tolerates_invalid_utf8() {
        let mut bytes = b"garbage \xff\xfe line\n".to_vec();
        bytes.extend_from_slice(b"Score of the complex: -1.5\n");
        let metrics = RelaxLog::read_from(&mut Cursor::new(bytes)).unwrap();
        assert_eq!(metrics.score, Some(-1.5));
    }

    #[test]
    fn reads_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relax_2.log");
        std::fs::write(&path, FULL_LOG).unwrap();
        let metrics = RelaxLog::read_from_path(&path).unwrap();
        assert_eq!(metrics.unbound_protein, Some(-510.0));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = RelaxLog::read_from_path(dir.path().join("absent.log"));
        assert!(matches!(result, Err(LogError::Io(_))));
    }
}

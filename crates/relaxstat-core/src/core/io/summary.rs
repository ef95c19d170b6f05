use super::traits::{ReadableFile, WritableFile};
use crate::core::models::metric::Metric;
use crate::core::models::record::RankedRecord;
use std::io::{self, BufRead, Write};
use thiserror::Error;

const RANK_HEADER: &str = "Rank";
const MODEL_HEADER: &str = "PDB";
const STATISTICS_HEADER: [&str; 3] = ["Statistic", "Mean", "StdDev"];

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Mean and population standard deviation of one metric over the ranked records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSummary {
    pub metric: Metric,
    pub mean: f64,
    pub std_dev: f64,
    pub count: usize,
}

/// Contents of a summary table: the ranked records followed by per-column statistics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryTable {
    pub records: Vec<RankedRecord>,
    pub statistics: Vec<ColumnSummary>,
}

/// The detail block of a summary table: header row plus data rows, as raw cells.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailBlock {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DetailBlock {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h.trim() == name)
    }
}

fn format_value(value: Option<f64>) -> String {
    value.map(|v| format!("{:.3}", v)).unwrap_or_default()
}

fn is_blank_row(line: &str) -> bool {
    line.chars()
        .all(|c| c.is_whitespace() || c == ',' || c == '"')
}

/// The summary CSV written for a directory of relax runs.
///
/// Layout: a detail block (`Rank, Score, ddG_bind, IntE, Unbound_RNA, Unbound_Prot,
/// ΔG_custom, PDB`), one blank line, then a statistics block (`Statistic, Mean, StdDev`).
/// Numbers are written with three decimals and absent values as empty cells.
///
/// Reading returns only the detail block, which is everything before the first blank
/// row. A table without a blank row or without any data row yields `None`.
pub struct SummaryFile;

impl WritableFile for SummaryFile {
    type Input = SummaryTable;
    type Error = SummaryError;

    fn write_to(data: &Self::Input, writer: &mut impl Write) -> Result<(), Self::Error> {
        {
            let mut detail = csv::Writer::from_writer(&mut *writer);
            let header = std::iter::once(RANK_HEADER)
                .chain(Metric::TABLE_ORDER.iter().map(|m| m.column_name()))
                .chain(std::iter::once(MODEL_HEADER));
            detail.write_record(header)?;

            for ranked in &data.records {
                let mut row = Vec::with_capacity(Metric::TABLE_ORDER.len() + 2);
                row.push(ranked.rank.to_string());
                row.extend(
                    Metric::TABLE_ORDER
                        .iter()
                        .map(|&m| format_value(ranked.value(m))),
                );
                row.push(ranked.record.model_path.display().to_string());
                detail.write_record(&row)?;
            }
            detail.flush()?;
        }

        writeln!(writer)?;

        let mut statistics = csv::Writer::from_writer(&mut *writer);
        statistics.write_record(STATISTICS_HEADER)?;
        for summary in &data.statistics {
            statistics.write_record([
                summary.metric.label().to_string(),
                format!("{:.3}", summary.mean),
                format!("{:.3}", summary.std_dev),
            ])?;
        }
        statistics.flush()?;
        Ok(())
    }
}

impl ReadableFile for SummaryFile {
    type Output = Option<DetailBlock>;
    type Error = SummaryError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, Self::Error> {
        let mut block = String::new();
        let mut found_separator = false;
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buffer);
            if is_blank_row(&line) {
                found_separator = true;
                break;
            }
            block.push_str(&line);
            if !line.ends_with('\n') {
                block.push('\n');
            }
        }

        if !found_separator {
            return Ok(None);
        }

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(block.as_bytes());

        let mut records = csv_reader.records();
        let Some(header) = records.next().transpose()? else {
            return Ok(None);
        };
        let header: Vec<String> = header.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in records {
            rows.push(record?.iter().map(str::to_string).collect::<Vec<_>>());
        }

        if rows.is_empty() {
            return Ok(None);
        }
        Ok(Some(DetailBlock { header, rows }))
    }
}

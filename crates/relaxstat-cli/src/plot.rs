//! Bar chart of group means with sample standard deviation error bars (SVG output).
//!
//! Rendering is compiled in with the `plot` feature; without it the chart step is a no-op
//! and the caller prints a notice.

use crate::error::Result;
use relaxstat::core::models::group::Group;
use relaxstat::core::models::metric::Metric;
use std::path::{Path, PathBuf};

pub struct ChartRequest<'a> {
    pub groups: &'a [Group],
    pub value_column: &'a str,
    pub rank_column: &'a str,
    pub top_n: usize,
}

impl ChartRequest<'_> {
    fn caption(&self) -> String {
        let label = Metric::from_column_name(self.value_column)
            .map(|m| m.label().to_string())
            .unwrap_or_else(|| self.value_column.to_string());
        format!(
            "{} ({}; top {} by {})",
            label, self.value_column, self.top_n, self.rank_column
        )
    }

    fn file_name(&self) -> String {
        format!("comparison_{}.svg", self.value_column)
    }
}

/// Writes the chart into `out_dir`, creating it if needed.
///
/// Returns the chart path, or `None` when chart rendering is not compiled in.
#[cfg(feature = "plot")]
pub fn render_group_chart(request: &ChartRequest<'_>, out_dir: &Path) -> Result<Option<PathBuf>> {
    use crate::error::CliError;
    use plotters::prelude::*;
    use tracing::{debug, info};

    std::fs::create_dir_all(out_dir)?;
    let svg_path = out_dir.join(request.file_name());
    let plot_error = |e: &dyn std::fmt::Display| CliError::Plot {
        path: svg_path.clone(),
        message: e.to_string(),
    };

    let bars: Vec<(&str, f64, f64)> = request
        .groups
        .iter()
        .filter_map(|g| Some((g.name.as_str(), g.mean()?, g.sample_std()?)))
        .collect();
    debug!("Charting {} group(s) into {:?}", bars.len(), svg_path);

    let root = SVGBackend::new(&svg_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| plot_error(&e))?;

    if bars.is_empty() {
        root.draw(&Text::new(
            "No data",
            (450, 300),
            ("sans-serif", 20).into_font().color(&BLACK),
        ))
        .map_err(|e| plot_error(&e))?;
        root.present().map_err(|e| plot_error(&e))?;
        return Ok(Some(svg_path.clone()));
    }

    let low = bars
        .iter()
        .map(|(_, mean, std)| mean - std)
        .fold(0.0f64, f64::min);
    let high = bars
        .iter()
        .map(|(_, mean, std)| mean + std)
        .fold(0.0f64, f64::max);
    let pad = ((high - low) * 0.1).max(1e-6);

    let mut chart = ChartBuilder::on(&root)
        .caption(request.caption(), ("sans-serif", 18))
        .margin(20)
        .x_label_area_size(80)
        .y_label_area_size(70)
        .build_cartesian_2d((0..bars.len()).into_segmented(), (low - pad)..(high + pad))
        .map_err(|e| plot_error(&e))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len())
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(idx) if *idx < bars.len() => bars[*idx].0.to_string(),
            _ => String::new(),
        })
        .y_desc(request.value_column)
        .draw()
        .map_err(|e| plot_error(&e))?;

    chart
        .draw_series(bars.iter().enumerate().map(|(idx, (_, mean, _))| {
            Rectangle::new(
                [
                    (SegmentValue::Exact(idx), 0.0),
                    (SegmentValue::Exact(idx + 1), *mean),
                ],
                BLUE.mix(0.6).filled(),
            )
        }))
        .map_err(|e| plot_error(&e))?;

    chart
        .draw_series(bars.iter().enumerate().map(|(idx, (_, mean, std))| {
            ErrorBar::new_vertical(
                SegmentValue::CenterOf(idx),
                mean - std,
                *mean,
                mean + std,
                BLACK.stroke_width(1),
                10,
            )
        }))
        .map_err(|e| plot_error(&e))?;

    root.present().map_err(|e| plot_error(&e))?;
    info!("Chart written to {:?}", svg_path);
    Ok(Some(svg_path.clone()))
}

#[cfg(not(feature = "plot"))]
pub fn render_group_chart(request: &ChartRequest<'_>, out_dir: &Path) -> Result<Option<PathBuf>> {
    tracing::debug!(
        "Chart rendering not compiled in; skipping {:?}",
        out_dir.join(request.file_name())
    );
    Ok(None)
}

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use relaxstat::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

struct DisplayState {
    bar: ProgressBar,
    /// Inputs skipped since the current phase started.
    phase_skips: usize,
    total_skips: usize,
}

impl DisplayState {
    fn apply(&mut self, progress: Progress) {
        let bar = &self.bar;
        match progress {
            Progress::PhaseStart { name } => {
                self.phase_skips = 0;
                bar.reset();
                bar.set_length(0);
                bar.set_style(spinner_style());
                bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                bar.set_message(name);
            }
            Progress::PhaseFinish => {
                bar.disable_steady_tick();
                let summary = match self.phase_skips {
                    0 => "✓ Done".to_string(),
                    n => format!("✓ Done ({} skipped)", n),
                };
                bar.finish_with_message(summary);
            }
            Progress::TaskStart { total_steps } => {
                bar.disable_steady_tick();
                bar.reset();
                bar.set_length(total_steps);
                bar.set_position(0);
                bar.set_style(bar_style());
            }
            Progress::TaskIncrement => bar.inc(1),
            Progress::TaskFinish => {
                if let Some(length) = bar.length() {
                    bar.set_position(length);
                }
                bar.finish();
            }
            Progress::Skipped { item, reason } => {
                self.phase_skips += 1;
                self.total_skips += 1;
                bar.suspend(|| println!("  Skipped {}: {}", item, reason));
            }
            Progress::Message(text) => bar.suspend(|| println!("{}", text)),
        }
    }
}

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg:<20} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .with_key(
            "eta",
            |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
            },
        )
        .progress_chars("##-")
}

/// Renders workflow progress on stderr and prints skips and messages on stdout.
#[derive(Clone)]
pub struct CliProgressHandler {
    state: Arc<Mutex<DisplayState>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target)
            .with_style(spinner_style())
            .with_message("Initializing...");
        bar.finish_and_clear();

        Self {
            state: Arc::new(Mutex::new(DisplayState {
                bar,
                phase_skips: 0,
                total_skips: 0,
            })),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let state = self.state.clone();
        Box::new(move |progress: Progress| match state.lock() {
            Ok(mut guard) => guard.apply(progress),
            Err(_) => warn!("Progress display mutex was poisoned. Cannot update progress."),
        })
    }

    /// Number of runs or groups skipped over the whole command.
    pub fn skipped_total(&self) -> usize {
        self.state.lock().map(|s| s.total_skips).unwrap_or(0)
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relaxstat::engine::config::{CompareConfigBuilder, SummarizeConfigBuilder};
    use relaxstat::engine::progress::ProgressReporter;
    use relaxstat::workflows;
    use std::fs;
    use std::path::Path;
    use std::thread;

    fn hidden_handler() -> CliProgressHandler {
        CliProgressHandler::with_draw_target(ProgressDrawTarget::hidden())
    }

    fn bar_snapshot(handler: &CliProgressHandler) -> (Option<u64>, u64, String, bool) {
        let state = handler.state.lock().unwrap();
        (
            state.bar.length(),
            state.bar.position(),
            state.bar.message(),
            state.bar.is_finished(),
        )
    }

    fn write_run(root: &Path, name: &str, log: Option<&str>) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("min_again_0001.pdb"), "").unwrap();
        if let Some(log) = log {
            fs::write(dir.join("relax_2.log"), log).unwrap();
        }
    }

    #[test]
    fn handler_starts_finished_and_empty() {
        let handler = hidden_handler();
        let (length, _, _, finished) = bar_snapshot(&handler);
        assert_eq!(length, Some(0));
        assert!(finished);
        assert_eq!(handler.skipped_total(), 0);
    }

    #[test]
    fn phase_summary_counts_skips_of_that_phase_only() {
        let handler = hidden_handler();
        let callback = handler.get_callback();

        callback(Progress::PhaseStart {
            name: "Scanning runs",
        });
        assert_eq!(bar_snapshot(&handler).2, "Scanning runs");
        callback(Progress::TaskStart { total_steps: 3 });
        callback(Progress::TaskIncrement);
        callback(Progress::Skipped {
            item: "relax/run_2".into(),
            reason: "no log file".into(),
        });
        callback(Progress::TaskFinish);
        callback(Progress::PhaseFinish);

        let (length, position, message, finished) = bar_snapshot(&handler);
        assert_eq!((length, position), (Some(3), 3));
        assert_eq!(message, "✓ Done (1 skipped)");
        assert!(finished);

        callback(Progress::PhaseStart {
            name: "Writing summary",
        });
        callback(Progress::PhaseFinish);
        assert_eq!(bar_snapshot(&handler).2, "✓ Done");
        assert_eq!(handler.skipped_total(), 1);
    }

    #[test]
    fn summarize_workflow_drives_the_display() {
        let root = tempfile::tempdir().unwrap();
        write_run(root.path(), "run_a", Some("Score of the complex: -9.0\n"));
        write_run(root.path(), "run_b", Some("Score of the complex: -4.0\n"));
        write_run(root.path(), "run_c", None);

        let config = SummarizeConfigBuilder::new()
            .relax_dir(root.path().to_path_buf())
            .log_file_name("relax_2.log")
            .model_prefix("min_again")
            .model_suffix("pdb")
            .top_n(20)
            .build()
            .unwrap();

        let handler = hidden_handler();
        let reporter = ProgressReporter::with_callback(handler.get_callback());
        let report = workflows::summarize::run(&config, &reporter).unwrap();

        assert_eq!(report.table.records.len(), 2);
        assert_eq!(handler.skipped_total(), 1);
        let (_, _, message, finished) = bar_snapshot(&handler);
        assert_eq!(message, "✓ Done");
        assert!(finished);
    }

    #[test]
    fn compare_workflow_reports_skipped_groups() {
        let root = tempfile::tempdir().unwrap();
        for (group, table) in [
            ("relax_wt", "Rank,Score,IntE\n0,-3.0,-30.0\n\n"),
            ("relax_g12u", "Rank,Score,IntE\n0,-2.0,-25.0\n\n"),
            ("relax_broken", "Rank,Score\n0,-2.0\n\n"),
        ] {
            let dir = root.path().join(group);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("summary.csv"), table).unwrap();
        }

        let config = CompareConfigBuilder::new()
            .root_dir(root.path().to_path_buf())
            .summary_file_name("summary.csv")
            .top_n(40)
            .rank_column("Score")
            .value_column("IntE")
            .baseline_group("relax_wt")
            .build()
            .unwrap();

        let handler = hidden_handler();
        let reporter = ProgressReporter::with_callback(handler.get_callback());
        let report = workflows::compare::run(&config, &reporter).unwrap();

        assert_eq!(report.groups.len(), 2);
        let (length, position, message, _) = bar_snapshot(&handler);
        assert_eq!((length, position), (Some(3), 3));
        assert_eq!(message, "✓ Done (1 skipped)");
        assert_eq!(handler.skipped_total(), 1);
    }

    #[test]
    fn callback_can_be_used_from_another_thread() {
        let handler = hidden_handler();
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::PhaseStart {
                name: "Collecting groups",
            });
            callback(Progress::Message("Group relax_wt | Top-N IntE count = 40".into()));
            callback(Progress::PhaseFinish);
        })
        .join()
        .unwrap();

        let (_, _, message, finished) = bar_snapshot(&handler);
        assert!(finished);
        assert_eq!(message, "✓ Done");
    }
}

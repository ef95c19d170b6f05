use super::metric::Metric;
use std::path::PathBuf;

/// Weight of the complex score in the derived binding energy.
pub const CUSTOM_SCORE_WEIGHT: f64 = 0.38;
/// Weight of the unbound protein score in the derived binding energy.
pub const CUSTOM_UNBOUND_PROTEIN_WEIGHT: f64 = 0.38;
/// Weight of the unbound RNA score in the derived binding energy.
pub const CUSTOM_UNBOUND_RNA_WEIGHT: f64 = 0.28;

/// Computes the derived binding energy `0.38·score − 0.38·protein − 0.28·rna`.
///
/// Returns `None` unless all three inputs are present.
pub fn derived_energy(
    score: Option<f64>,
    unbound_protein: Option<f64>,
    unbound_rna: Option<f64>,
) -> Option<f64> {
    let (score, protein, rna) = (score?, unbound_protein?, unbound_rna?);
    Some(
        CUSTOM_SCORE_WEIGHT * score
            - CUSTOM_UNBOUND_PROTEIN_WEIGHT * protein
            - CUSTOM_UNBOUND_RNA_WEIGHT * rna,
    )
}

/// Raw values scraped from a single relax log. Any field may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LogMetrics {
    pub score: Option<f64>,
    pub ddg_bind: Option<f64>,
    pub interaction_energy: Option<f64>,
    pub unbound_rna: Option<f64>,
    pub unbound_protein: Option<f64>,
}

impl LogMetrics {
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Score => self.score,
            Metric::DdgBind => self.ddg_bind,
            Metric::InteractionEnergy => self.interaction_energy,
            Metric::UnboundRna => self.unbound_rna,
            Metric::UnboundProtein => self.unbound_protein,
            Metric::Custom => derived_energy(self.score, self.unbound_protein, self.unbound_rna),
        }
    }

    /// Stores a logged metric. Setting [`Metric::Custom`] is a no-op since it is derived.
    pub fn set(&mut self, metric: Metric, value: f64) {
        let slot = match metric {
            Metric::Score => &mut self.score,
            Metric::DdgBind => &mut self.ddg_bind,
            Metric::InteractionEnergy => &mut self.interaction_energy,
            Metric::UnboundRna => &mut self.unbound_rna,
            Metric::UnboundProtein => &mut self.unbound_protein,
            Metric::Custom => return,
        };
        *slot = Some(value);
    }

    pub fn is_complete(&self) -> bool {
        Metric::LOGGED.iter().all(|&m| self.get(m).is_some())
    }
}

/// One relaxed model that produced a usable complex score.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    /// Name of the run directory the record was scanned from.
    pub run_name: String,
    pub score: f64,
    pub ddg_bind: Option<f64>,
    pub interaction_energy: Option<f64>,
    pub unbound_rna: Option<f64>,
    pub unbound_protein: Option<f64>,
    pub model_path: PathBuf,
}

impl RunRecord {
    /// Builds a record from scraped log values, or `None` when the score never resolved.
    pub fn from_metrics(
        run_name: impl Into<String>,
        metrics: LogMetrics,
        model_path: PathBuf,
    ) -> Option<Self> {
        Some(Self {
            run_name: run_name.into(),
            score: metrics.score?,
            ddg_bind: metrics.ddg_bind,
            interaction_energy: metrics.interaction_energy,
            unbound_rna: metrics.unbound_rna,
            unbound_protein: metrics.unbound_protein,
            model_path,
        })
    }

    pub fn custom_energy(&self) -> Option<f64> {
        derived_energy(Some(self.score), self.unbound_protein, self.unbound_rna)
    }

    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Score => Some(self.score),
            Metric::DdgBind => self.ddg_bind,
            Metric::InteractionEnergy => self.interaction_energy,
            Metric::UnboundRna => self.unbound_rna,
            Metric::UnboundProtein => self.unbound_protein,
            Metric::Custom => self.custom_energy(),
        }
    }
}

/// A record that survived top-N selection, with its 0-based position in the ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRecord {
    pub rank: usize,
    pub record: RunRecord,
    pub custom: Option<f64>,
}

impl RankedRecord {
    pub fn new(rank: usize, record: RunRecord) -> Self {
        let custom = record.custom_energy();
        Self {
            rank,
            record,
            custom,
        }
    }

    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Custom => self.custom,
            other => self.record.value(other),
        }
    }
}

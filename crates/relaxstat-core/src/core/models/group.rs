use crate::core::stats::descriptive;

/// Values of one summary-table column, taken from the best runs of one group directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub values: Vec<f64>,
}

impl Group {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> Option<f64> {
        descriptive::mean(&self.values)
    }

    /// Sample standard deviation (n − 1 denominator); `0.0` for a single value.
    pub fn sample_std(&self) -> Option<f64> {
        match self.values.len() {
            0 => None,
            1 => Some(0.0),
            _ => descriptive::sample_std(&self.values),
        }
    }
}

/// One group compared against the baseline group.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineComparison {
    /// Summary-table column the values were taken from.
    pub column: String,
    pub baseline_group: String,
    pub other_group: String,
    pub n_baseline: usize,
    pub n_other: usize,
    pub mean_baseline: f64,
    pub mean_other: f64,
    /// Kruskal-Wallis H across every group, repeated on each row.
    pub kruskal_h: f64,
    pub kruskal_p: f64,
    /// Bonferroni-adjusted Dunn p-value for this pair; NaN when unavailable.
    pub dunn_p_adjusted: f64,
}

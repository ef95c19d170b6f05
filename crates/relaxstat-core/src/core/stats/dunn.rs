use super::ranks::rank_with_ties;
use super::special::normal_sf;

/// Symmetric matrix of Bonferroni-adjusted Dunn p-values, indexed by sample position.
#[derive(Debug, Clone, PartialEq)]
pub struct DunnMatrix {
    size: usize,
    p_adjusted: Vec<f64>,
}

impl DunnMatrix {
    pub fn size(&self) -> usize {
        self.size
    }

    /// Adjusted p-value between samples `i` and `j`; `1.0` on the diagonal.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.size || j >= self.size {
            return None;
        }
        Some(self.p_adjusted[i * self.size + j])
    }
}

/// Dunn's post-hoc test on pooled ranks, two-sided, Bonferroni-adjusted over all
/// `k(k − 1)/2` pairs and capped at one.
///
/// Returns `None` for fewer than two samples, an empty sample, or zero rank variance.
pub fn dunn_bonferroni(samples: &[&[f64]]) -> Option<DunnMatrix> {
    let k = samples.len();
    if k < 2 || samples.iter().any(|s| s.is_empty()) {
        return None;
    }

    let pooled: Vec<f64> = samples.iter().flat_map(|s| s.iter().copied()).collect();
    let n = pooled.len() as f64;
    let ranked = rank_with_ties(&pooled);

    let mut mean_ranks = Vec::with_capacity(k);
    let mut offset = 0;
    for sample in samples {
        let rank_sum: f64 = ranked.ranks[offset..offset + sample.len()].iter().sum();
        mean_ranks.push(rank_sum / sample.len() as f64);
        offset += sample.len();
    }

    let tie_adjustment = if n > 1.0 {
        ranked.tie_term / (12.0 * (n - 1.0))
    } else {
        0.0
    };
    let rank_variance = n * (n + 1.0) / 12.0 - tie_adjustment;
    if rank_variance <= 0.0 {
        return None;
    }

    let comparisons = (k * (k - 1) / 2) as f64;
    let mut p_adjusted = vec![1.0; k * k];
    for i in 0..k {
        for j in (i + 1)..k {
            let scale = (rank_variance
                * (1.0 / samples[i].len() as f64 + 1.0 / samples[j].len() as f64))
                .sqrt();
            let z = (mean_ranks[i] - mean_ranks[j]).abs() / scale;
            let p = (2.0 * normal_sf(z) * comparisons).min(1.0);
            p_adjusted[i * k + j] = p;
            p_adjusted[j * k + i] = p;
        }
    }

    Some(DunnMatrix {
        size: k,
        p_adjusted,
    })
}

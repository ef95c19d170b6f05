use super::ranks::rank_with_ties;
use super::special::chi_squared_sf;

/// Result of a Kruskal-Wallis H test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KruskalWallis {
    /// Tie-corrected H statistic.
    pub h: f64,
    pub p_value: f64,
    pub degrees_of_freedom: usize,
}

/// Kruskal-Wallis H test across independent samples.
///
/// Ties receive average ranks and H is divided by the usual tie correction factor.
/// Returns `None` when fewer than two samples are given, when any sample is empty,
/// or when every pooled value is identical (the statistic is undefined).
pub fn kruskal_wallis(samples: &[&[f64]]) -> Option<KruskalWallis> {
    if samples.len() < 2 || samples.iter().any(|s| s.is_empty()) {
        return None;
    }

    let pooled: Vec<f64> = samples.iter().flat_map(|s| s.iter().copied()).collect();
    let n = pooled.len() as f64;
    let ranked = rank_with_ties(&pooled);

    let tie_correction = 1.0 - ranked.tie_term / (n * n * n - n);
    if tie_correction <= 0.0 {
        return None;
    }

    let mut offset = 0;
    let mut weighted_rank_sums = 0.0;
    for sample in samples {
        let rank_sum: f64 = ranked.ranks[offset..offset + sample.len()].iter().sum();
        weighted_rank_sums += rank_sum * rank_sum / sample.len() as f64;
        offset += sample.len();
    }

    let h = (12.0 / (n * (n + 1.0)) * weighted_rank_sums - 3.0 * (n + 1.0)) / tie_correction;
    let degrees_of_freedom = samples.len() - 1;

    Some(KruskalWallis {
        h,
        p_value: chi_squared_sf(h, degrees_of_freedom as f64),
        degrees_of_freedom,
    })
}

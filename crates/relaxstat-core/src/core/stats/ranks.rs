/// Pooled ranks of a sample, ties resolved to their average rank.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSample {
    /// 1-based ranks, in the order of the input values.
    pub ranks: Vec<f64>,
    /// `Σ (t³ − t)` over every tie block of size `t`.
    pub tie_term: f64,
}

pub fn rank_with_ties(values: &[f64]) -> RankedSample {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; n];
    let mut tie_term = 0.0;
    let mut start = 0;
    while start < n {
        let mut end = start;
        while end + 1 < n && values[order[end + 1]] == values[order[start]] {
            end += 1;
        }
        let average = (start + end) as f64 / 2.0 + 1.0;
        for &idx in &order[start..=end] {
            ranks[idx] = average;
        }
        let t = (end - start + 1) as f64;
        tie_term += t * t * t - t;
        start = end + 1;
    }

    RankedSample { ranks, tie_term }
}

// reelscore-curves/src/entropy/mod.rs
use libm::log;

/// Calculates the Shannon entropy of a set of non-negative weights, normalized to 0..=1.
///
/// The weights are treated as unnormalized shares. 1.0 means perfectly balanced,
/// 0.0 means all mass sits in a single share. Fewer than two shares, or a zero total,
/// yield 0.
pub fn normalized_entropy(weights: &[f64]) -> f64 {
    if weights.len() < 2 {
        return 0.0;
    }

    let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
    if total <= 0.0 {
        return 0.0;
    }

    let mut entropy = 0.0;
    for &w in weights {
        if w > 0.0 {
            let p = w / total;
            entropy -= p * log(p);
        }
    }

    entropy / log(weights.len() as f64)
}

/// How clearly a single share dominates, normalized to 0..=1.
///
/// 0.0 when the shares are uniform, 1.0 when one share holds everything.
pub fn dominance(weights: &[f64]) -> f64 {
    if weights.len() < 2 {
        return 0.0;
    }

    let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
    if total <= 0.0 {
        return 0.0;
    }

    let max_share = weights.iter().fold(0.0_f64, |acc, w| acc.max(*w)) / total;
    let uniform = 1.0 / weights.len() as f64;
    ((max_share - uniform) / (1.0 - uniform)).clamp(0.0, 1.0)
}

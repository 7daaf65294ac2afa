// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use stars_core::{MeanAdjacency, StarsError};

/// Average edge-selection variance over all unordered feature pairs.
///
/// For each pair `(i, j)` with `i < j`, the contribution is `2 * f * (1 - f)`
/// where `f` is the empirical edge-selection frequency; the score is the mean
/// over all `C(p, 2)` pairs. The diagonal and lower triangle are excluded.
/// Scores lie in `[0, 0.5]`: `0` when every frequency is exactly 0 or 1,
/// `0.5` when every frequency is exactly `0.5`.
pub fn edge_instability(mean_adj: &MeanAdjacency) -> Result<f64, StarsError> {
    let p = mean_adj.p();
    if p < 2 {
        return Err(StarsError::domain(format!(
            "edge instability needs at least 2 features (no pairs to average); got p={p}"
        )));
    }

    let mut total = 0.0;
    for i in 0..p {
        for j in (i + 1)..p {
            let freq = mean_adj.get(i, j);
            total += 2.0 * freq * (1.0 - freq);
        }
    }

    let n_pairs = (p * (p - 1) / 2) as f64;
    Ok(total / n_pairs)
}

// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::SelectionDiagnostics;

/// One point of the instability path: the regularization value at a path
/// position and its edge-instability score averaged over subsamples.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstabilityPoint {
    pub rho: f64,
    pub instability: f64,
}

/// Outcome of a StARS selection run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionResult {
    /// Selected regularization value; always an element of the input path.
    pub rho_opt: f64,
    /// False when no candidate met the stability bound and `rho_opt` is the
    /// second-largest distinct path value substituted as a fallback.
    pub stability_achieved: bool,
    /// Per-position `(rho, instability)` pairs in input path order.
    pub instability_path: Vec<InstabilityPoint>,
    pub diagnostics: SelectionDiagnostics,
}

impl SelectionResult {
    /// Instability score for the selected value, if the selected rho appears
    /// in the path (it always does for results produced by the selector;
    /// duplicates resolve to the minimum score among matching positions).
    pub fn selected_instability(&self) -> Option<f64> {
        self.instability_path
            .iter()
            .filter(|point| point.rho == self.rho_opt)
            .map(|point| point.instability)
            .fold(None, |best, score| match best {
                Some(current) if current <= score => Some(current),
                _ => Some(score),
            })
    }
}

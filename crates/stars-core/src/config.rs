// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::StarsError;

pub const DEFAULT_BETA: f64 = 0.05;
pub const DEFAULT_THRESHOLD: f64 = 1e-3;

/// Configuration for the StARS selector.
///
/// Passed explicitly at construction; there are no module-level defaults, so
/// concurrent callers can carry different configurations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarsConfig {
    /// Stability bound on the average edge variance, in `(0, 1)`.
    pub beta: f64,
    /// Minimum absolute dependence score for which an edge is drawn, `>= 0`.
    pub threshold: f64,
    /// When set, the selected regularization value is printed.
    pub verbose: bool,
}

impl Default for StarsConfig {
    fn default() -> Self {
        Self {
            beta: DEFAULT_BETA,
            threshold: DEFAULT_THRESHOLD,
            verbose: false,
        }
    }
}

impl StarsConfig {
    pub fn validate(&self) -> Result<(), StarsError> {
        if !self.beta.is_finite() || self.beta <= 0.0 || self.beta >= 1.0 {
            return Err(StarsError::invalid_input(format!(
                "StarsConfig.beta must lie in (0, 1); got {}",
                self.beta
            )));
        }
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(StarsError::invalid_input(format!(
                "StarsConfig.threshold must be finite and >= 0; got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use std::borrow::Cow;

/// Structured diagnostics captured from a selection run.
///
/// `warnings` is the non-fatal channel: when stability selection cannot meet
/// the configured bound and a fallback value is substituted, the condition is
/// recorded here and never changes control flow for the caller.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionDiagnostics {
    pub n_features: usize,
    pub n_subsamples: usize,
    pub path_len: usize,
    pub runtime_ms: Option<u64>,
    pub notes: Vec<String>,
    pub warnings: Vec<String>,
    pub algorithm: Cow<'static, str>,
}

impl Default for SelectionDiagnostics {
    fn default() -> Self {
        Self {
            n_features: 0,
            n_subsamples: 0,
            path_len: 0,
            runtime_ms: None,
            notes: vec![],
            warnings: vec![],
            algorithm: Cow::Borrowed(""),
        }
    }
}

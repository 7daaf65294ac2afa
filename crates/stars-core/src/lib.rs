// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

//! Shared types for StARS stability selection: validated matrix views,
//! adjacency containers, configuration, errors, diagnostics, and results.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod matrix;
pub mod results;

pub use config::StarsConfig;
pub use diagnostics::SelectionDiagnostics;
pub use error::StarsError;
pub use matrix::{AdjacencyMatrix, DepMatrixView, MeanAdjacency};
pub use results::{InstabilityPoint, SelectionResult};

// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

//! StARS stability selection (Liu, Roeder & Wasserman) of the regularization
//! strength for sparse graphical-model estimators.
//!
//! Given per-subsample families of dependency matrices computed along a
//! shared regularization path, [`Stars::select`] picks the value whose graphs
//! are stable across subsamples, preferring sparser solutions among stable
//! candidates.

pub mod adjacency;
pub mod instability;
pub mod selector;

pub use adjacency::to_adjacency;
pub use instability::edge_instability;
pub use selector::{Stars, SubsampleFamily};
pub use stars_core::{
    AdjacencyMatrix, DepMatrixView, InstabilityPoint, MeanAdjacency, SelectionDiagnostics,
    SelectionResult, StarsConfig, StarsError,
};

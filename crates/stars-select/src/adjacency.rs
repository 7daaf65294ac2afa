// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use stars_core::{AdjacencyMatrix, DepMatrixView, StarsError};

// Closeness tolerances for the symmetry test, matching the widespread
// allclose defaults: |a - b| <= abs_tol + rel_tol * |b|.
const SYMMETRY_REL_TOL: f64 = 1e-5;
const SYMMETRY_ABS_TOL: f64 = 1e-8;

fn is_numerically_symmetric(dep: &DepMatrixView<'_>) -> bool {
    let p = dep.p();
    for i in 0..p {
        for j in (i + 1)..p {
            let a = dep.get(i, j);
            let b = dep.get(j, i);
            let close = (a - b).abs() <= SYMMETRY_ABS_TOL + SYMMETRY_REL_TOL * b.abs();
            if !close {
                return false;
            }
        }
    }
    true
}

/// Converts a dependency matrix into a binary, symmetric adjacency matrix.
///
/// Numerically symmetric inputs (factorized models produce these) are
/// thresholded on the upper triangle and mirrored, so near-threshold entries
/// that differ only within tolerance cannot break symmetry. Non-symmetric
/// inputs are treated as directed estimates and OR-symmetrized: an edge is
/// drawn when either direction exceeds the threshold in absolute value.
///
/// NaN scores never produce an edge and fail the closeness test, forcing the
/// OR-symmetrize branch.
pub fn to_adjacency(
    dep: &DepMatrixView<'_>,
    threshold: f64,
) -> Result<AdjacencyMatrix, StarsError> {
    let p = dep.p();
    let mut entries = vec![0u8; p * p];

    if is_numerically_symmetric(dep) {
        for i in 0..p {
            entries[i * p + i] = u8::from(dep.get(i, i).abs() > threshold);
            for j in (i + 1)..p {
                let edge = u8::from(dep.get(i, j).abs() > threshold);
                entries[i * p + j] = edge;
                entries[j * p + i] = edge;
            }
        }
    } else {
        for i in 0..p {
            entries[i * p + i] = u8::from(dep.get(i, i).abs() > threshold);
            for j in (i + 1)..p {
                let edge =
                    u8::from(dep.get(i, j).abs() > threshold || dep.get(j, i).abs() > threshold);
                entries[i * p + j] = edge;
                entries[j * p + i] = edge;
            }
        }
    }

    AdjacencyMatrix::new(entries, p)
}

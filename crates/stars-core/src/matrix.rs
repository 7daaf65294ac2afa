// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::StarsError;

/// Zero-copy view over a row-major square `p x p` dependency matrix.
///
/// Entry `(i, j)` is the dependence score between features `i` and `j` as
/// estimated by the external inference algorithm. The view is read-only; the
/// matrix may or may not be symmetric.
#[derive(Clone, Copy, Debug)]
pub struct DepMatrixView<'a> {
    values: &'a [f64],
    p: usize,
}

impl<'a> DepMatrixView<'a> {
    /// Constructs a validated square view.
    pub fn new(values: &'a [f64], p: usize) -> Result<Self, StarsError> {
        if p == 0 {
            return Err(StarsError::invalid_input("p must be >= 1"));
        }
        let expected_len = p
            .checked_mul(p)
            .ok_or_else(|| StarsError::invalid_input("p*p overflow while validating shape"))?;
        if values.len() != expected_len {
            return Err(StarsError::shape(format!(
                "dependency matrix is not square: got {} values, expected {expected_len} (p={p})",
                values.len()
            )));
        }
        Ok(Self { values, p })
    }

    /// Feature count.
    pub fn p(&self) -> usize {
        self.p
    }

    /// Entry at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.p + j]
    }

    /// Underlying row-major buffer.
    pub fn values(&self) -> &'a [f64] {
        self.values
    }
}

/// Owned binary adjacency matrix, symmetric by construction.
///
/// Entry `(i, j) = 1` encodes an undirected edge between features `i` and
/// `j`. Entries are `0`/`1` bytes in a row-major buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    entries: Vec<u8>,
    p: usize,
}

impl AdjacencyMatrix {
    /// Constructs a validated adjacency matrix.
    ///
    /// Validates the buffer length, that every entry is `0` or `1`, and that
    /// the matrix is exactly symmetric.
    pub fn new(entries: Vec<u8>, p: usize) -> Result<Self, StarsError> {
        if entries.len() != p * p {
            return Err(StarsError::shape(format!(
                "adjacency buffer length mismatch: got {}, expected {} (p={p})",
                entries.len(),
                p * p
            )));
        }
        if let Some((idx, val)) = entries
            .iter()
            .copied()
            .enumerate()
            .find(|(_, v)| *v != 0 && *v != 1)
        {
            return Err(StarsError::invalid_input(format!(
                "adjacency entries must be 0/1 bytes: index {idx} has {val}"
            )));
        }
        for i in 0..p {
            for j in (i + 1)..p {
                if entries[i * p + j] != entries[j * p + i] {
                    return Err(StarsError::invalid_input(format!(
                        "adjacency matrix is not symmetric at ({i}, {j})"
                    )));
                }
            }
        }
        Ok(Self { entries, p })
    }

    /// Feature count.
    pub fn p(&self) -> usize {
        self.p
    }

    /// True when an undirected edge connects features `i` and `j`.
    pub fn is_edge(&self, i: usize, j: usize) -> bool {
        self.entries[i * self.p + j] == 1
    }

    /// Row-major `0`/`1` entries.
    pub fn entries(&self) -> &[u8] {
        &self.entries
    }

    /// Number of distinct undirected edges (strict upper triangle).
    pub fn edge_count(&self) -> usize {
        let mut count = 0;
        for i in 0..self.p {
            for j in (i + 1)..self.p {
                if self.is_edge(i, j) {
                    count += 1;
                }
            }
        }
        count
    }
}

/// Element-wise average of adjacency matrices over subsamples.
///
/// Entry `(i, j)` is the empirical edge-selection frequency in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct MeanAdjacency {
    values: Vec<f64>,
    p: usize,
}

impl MeanAdjacency {
    /// Constructs a validated mean adjacency matrix.
    pub fn new(values: Vec<f64>, p: usize) -> Result<Self, StarsError> {
        if values.len() != p * p {
            return Err(StarsError::shape(format!(
                "mean adjacency buffer length mismatch: got {}, expected {} (p={p})",
                values.len(),
                p * p
            )));
        }
        if let Some((idx, val)) = values
            .iter()
            .copied()
            .enumerate()
            .find(|(_, v)| !(*v >= 0.0 && *v <= 1.0))
        {
            return Err(StarsError::invalid_input(format!(
                "mean adjacency entries must lie in [0, 1]: index {idx} has {val}"
            )));
        }
        Ok(Self { values, p })
    }

    /// Feature count.
    pub fn p(&self) -> usize {
        self.p
    }

    /// Edge-selection frequency at `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.p + j]
    }
}

#[cfg(test)]
mod tests {
    use super::{AdjacencyMatrix, DepMatrixView, MeanAdjacency};
    use crate::StarsError;

    #[test]
    fn dep_view_validates_square_buffer() {
        let values = [0.0, 0.1, 0.2, 0.0];
        let view = DepMatrixView::new(&values, 2).expect("2x2 buffer should validate");
        assert_eq!(view.p(), 2);
        assert_eq!(view.get(0, 1), 0.1);
        assert_eq!(view.get(1, 0), 0.2);
    }

    #[test]
    fn dep_view_rejects_non_square_buffer() {
        let values = [0.0, 0.1, 0.2];
        let err = DepMatrixView::new(&values, 2).expect_err("3 values cannot form a 2x2 matrix");
        assert!(matches!(err, StarsError::Shape(_)));
    }

    #[test]
    fn dep_view_rejects_zero_features() {
        let err = DepMatrixView::new(&[], 0).expect_err("p=0 must fail");
        assert!(matches!(err, StarsError::InvalidInput(_)));
    }

    #[test]
    fn adjacency_validates_symmetry_and_binary_entries() {
        let ok = AdjacencyMatrix::new(vec![0, 1, 1, 0], 2).expect("symmetric 0/1 should validate");
        assert!(ok.is_edge(0, 1));
        assert!(ok.is_edge(1, 0));
        assert_eq!(ok.edge_count(), 1);

        let asymmetric = AdjacencyMatrix::new(vec![0, 1, 0, 0], 2)
            .expect_err("asymmetric adjacency must fail");
        assert!(matches!(asymmetric, StarsError::InvalidInput(_)));

        let non_binary =
            AdjacencyMatrix::new(vec![0, 2, 2, 0], 2).expect_err("entry 2 must fail");
        assert!(matches!(non_binary, StarsError::InvalidInput(_)));

        let wrong_len = AdjacencyMatrix::new(vec![0, 1, 1], 2).expect_err("length 3 must fail");
        assert!(matches!(wrong_len, StarsError::Shape(_)));
    }

    #[test]
    fn mean_adjacency_rejects_out_of_range_and_nan_entries() {
        let ok = MeanAdjacency::new(vec![0.0, 0.5, 0.5, 0.0], 2).expect("valid frequencies");
        assert_eq!(ok.get(0, 1), 0.5);

        let above = MeanAdjacency::new(vec![0.0, 1.5, 1.5, 0.0], 2)
            .expect_err("frequency above 1 must fail");
        assert!(matches!(above, StarsError::InvalidInput(_)));

        let nan = MeanAdjacency::new(vec![0.0, f64::NAN, 0.0, 0.0], 2)
            .expect_err("NaN frequency must fail");
        assert!(matches!(nan, StarsError::InvalidInput(_)));
    }
}

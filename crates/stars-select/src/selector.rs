// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::adjacency::to_adjacency;
use crate::instability::edge_instability;
use stars_core::{
    AdjacencyMatrix, DepMatrixView, InstabilityPoint, MeanAdjacency, SelectionDiagnostics,
    SelectionResult, StarsConfig, StarsError,
};
use std::borrow::Cow;
use std::time::Instant;

/// One data subsample: an identifier plus its dependency matrices, ordered by
/// position in the regularization path.
///
/// Alignment is by position index, never by value, so duplicate path values
/// stay unambiguous.
#[derive(Clone, Debug)]
pub struct SubsampleFamily<'a> {
    pub id: String,
    pub deps: Vec<DepMatrixView<'a>>,
}

impl<'a> SubsampleFamily<'a> {
    pub fn new(id: impl Into<String>, deps: Vec<DepMatrixView<'a>>) -> Self {
        Self {
            id: id.into(),
            deps,
        }
    }
}

/// StARS regularization selector.
///
/// Pure offline computation: no retries, no shared state, deterministic for
/// fixed inputs. See Liu, Roeder and Wasserman, "Stability approach to
/// regularization selection for high dimensional graphical models".
#[derive(Clone, Debug)]
pub struct Stars {
    config: StarsConfig,
}

impl Stars {
    pub fn new(config: StarsConfig) -> Result<Self, StarsError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StarsConfig {
        &self.config
    }

    /// Selects the regularization value whose subsampled graphs are stable.
    ///
    /// Scans distinct path values in ascending order and returns the first
    /// whose running-minimum instability is within `beta`; when none
    /// qualifies, falls back to the second-largest distinct value and records
    /// a warning in the diagnostics.
    pub fn select(
        &self,
        rhos: &[f64],
        subsamples: &[SubsampleFamily<'_>],
    ) -> Result<SelectionResult, StarsError> {
        let started_at = Instant::now();
        let p = validate_inputs(rhos, subsamples)?;

        let mut sample_adjs = Vec::with_capacity(subsamples.len());
        for family in subsamples {
            let mut adjs = Vec::with_capacity(family.deps.len());
            for dep in &family.deps {
                adjs.push(to_adjacency(dep, self.config.threshold)?);
            }
            sample_adjs.push(adjs);
        }

        let scores = instability_scores(&sample_adjs, rhos.len(), p)?;

        let mut notes = vec![format!(
            "beta={}, threshold={}",
            self.config.beta, self.config.threshold
        )];
        let mut warnings = vec![];

        let (rho_opt, stability_achieved) =
            match running_min_select(rhos, &scores, self.config.beta) {
                Some(rho) => (rho, true),
                None => {
                    let sorted = distinct_sorted(rhos);
                    if sorted.len() < 2 {
                        return Err(StarsError::domain(format!(
                            "no regularization value met the stability bound beta={} and the \
                             fallback needs at least 2 distinct path values; got {}",
                            self.config.beta,
                            sorted.len()
                        )));
                    }
                    let fallback = sorted[sorted.len() - 2];
                    warnings.push(format!(
                        "the optimal regularization value could not be determined with \
                         stability selection; value {fallback:.7} is set"
                    ));
                    (fallback, false)
                }
            };

        if self.config.verbose {
            println!("selected regularization: {rho_opt:.7}");
        }

        let runtime_ms = match u64::try_from(started_at.elapsed().as_millis()) {
            Ok(ms) => ms,
            Err(_) => u64::MAX,
        };
        notes.push(format!(
            "selected rho={rho_opt}, stability_achieved={stability_achieved}"
        ));

        let instability_path = rhos
            .iter()
            .zip(&scores)
            .map(|(&rho, &instability)| InstabilityPoint { rho, instability })
            .collect();

        Ok(SelectionResult {
            rho_opt,
            stability_achieved,
            instability_path,
            diagnostics: SelectionDiagnostics {
                n_features: p,
                n_subsamples: subsamples.len(),
                path_len: rhos.len(),
                runtime_ms: Some(runtime_ms),
                notes,
                warnings,
                algorithm: Cow::Borrowed("stars"),
            },
        })
    }
}

fn validate_inputs(
    rhos: &[f64],
    subsamples: &[SubsampleFamily<'_>],
) -> Result<usize, StarsError> {
    if rhos.is_empty() {
        return Err(StarsError::invalid_input(
            "regularization path must not be empty",
        ));
    }
    if let Some((idx, rho)) = rhos
        .iter()
        .copied()
        .enumerate()
        .find(|(_, rho)| !rho.is_finite())
    {
        return Err(StarsError::invalid_input(format!(
            "regularization values must be finite: index {idx} has {rho}"
        )));
    }
    if subsamples.is_empty() {
        return Err(StarsError::invalid_input(
            "at least one subsample family is required",
        ));
    }

    for family in subsamples {
        if family.deps.len() != rhos.len() {
            return Err(StarsError::shape_mismatch(format!(
                "dependency matrices for some regularization values are missing: \
                 subsample '{}' has {} matrices, path has {}",
                family.id,
                family.deps.len(),
                rhos.len()
            )));
        }
    }

    let p = subsamples[0].deps[0].p();
    for family in subsamples {
        for (position, dep) in family.deps.iter().enumerate() {
            if dep.p() != p {
                return Err(StarsError::shape_mismatch(format!(
                    "feature count mismatch: subsample '{}' position {position} has p={}, \
                     expected p={p}",
                    family.id,
                    dep.p()
                )));
            }
        }
    }
    Ok(p)
}

fn mean_adjacency_at(
    sample_adjs: &[Vec<AdjacencyMatrix>],
    position: usize,
    p: usize,
) -> Result<MeanAdjacency, StarsError> {
    let n_subsamples = sample_adjs.len() as f64;
    let mut acc = vec![0.0f64; p * p];
    for adjs in sample_adjs {
        for (slot, &entry) in acc.iter_mut().zip(adjs[position].entries()) {
            *slot += f64::from(entry);
        }
    }
    for slot in acc.iter_mut() {
        *slot /= n_subsamples;
    }
    MeanAdjacency::new(acc, p)
}

/// Per-position instability scores. Positions are independent, so this step
/// parallelizes across the path under the `parallel` feature; each position
/// still reduces its subsamples in input order.
fn instability_scores(
    sample_adjs: &[Vec<AdjacencyMatrix>],
    n_positions: usize,
    p: usize,
) -> Result<Vec<f64>, StarsError> {
    let score_at = |position: usize| -> Result<f64, StarsError> {
        let mean = mean_adjacency_at(sample_adjs, position, p)?;
        edge_instability(&mean)
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (0..n_positions).into_par_iter().map(score_at).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..n_positions).map(score_at).collect()
    }
}

/// Single forward pass over path positions sorted by rho ascending.
///
/// The candidate is judged by the minimum instability observed among all
/// values at most as large (the StARS monotonization), not by its own score;
/// the first qualifying distinct rho wins, which breaks ties toward the
/// smallest value.
fn running_min_select(rhos: &[f64], scores: &[f64], beta: f64) -> Option<f64> {
    let mut order: Vec<usize> = (0..rhos.len()).collect();
    order.sort_by(|&a, &b| rhos[a].total_cmp(&rhos[b]));

    let mut running_min = f64::INFINITY;
    let mut cursor = 0;
    while cursor < order.len() {
        let rho = rhos[order[cursor]];
        // Fold in every position sharing this value before testing, so
        // duplicate path values are all covered by the running minimum.
        while cursor < order.len() && rhos[order[cursor]] == rho {
            running_min = running_min.min(scores[order[cursor]]);
            cursor += 1;
        }
        if running_min <= beta {
            return Some(rho);
        }
    }
    None
}

fn distinct_sorted(rhos: &[f64]) -> Vec<f64> {
    let mut sorted = rhos.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.dedup();
    sorted
}

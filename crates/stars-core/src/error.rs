// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use std::fmt;

/// Error taxonomy for stability selection.
///
/// Every variant indicates a contract violation by the caller; nothing here
/// is transient, so no error is ever retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StarsError {
    /// Generic invalid input (empty path, non-finite values, bad config).
    InvalidInput(String),
    /// A dependency matrix buffer is not square.
    Shape(String),
    /// A subsample's matrix sequence disagrees with the regularization path,
    /// or feature counts disagree across matrices.
    ShapeMismatch(String),
    /// The computation is undefined for the given sizes (fewer than 2
    /// features, or fewer than 2 distinct regularization values when the
    /// fallback is needed).
    Domain(String),
}

impl StarsError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape(message.into())
    }

    pub fn shape_mismatch(message: impl Into<String>) -> Self {
        Self::ShapeMismatch(message.into())
    }

    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain(message.into())
    }
}

impl fmt::Display for StarsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
            Self::Shape(message) => write!(f, "shape error: {message}"),
            Self::ShapeMismatch(message) => write!(f, "shape mismatch: {message}"),
            Self::Domain(message) => write!(f, "domain error: {message}"),
        }
    }
}

impl std::error::Error for StarsError {}

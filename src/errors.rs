//! Error types for regularizer construction.
//!
//! Graph construction itself is contract-based and does not fail at runtime;
//! these errors cover numeric failure in the transform step and parameter
//! validation in [`crate::builder::ManifoldRegularizerBuilder`].

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ManifoldError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ManifoldError {
    /// `I + strength * reg_mat` is not symmetric positive-definite.
    #[error("Cholesky factorization failed: {reason}")]
    FactorizationFailed { reason: String },

    /// Transformation requested before any `build` call.
    #[error("regularizer has not been built")]
    NotBuilt,

    /// A sample's width differs from the first sample's.
    #[error("sample {index} has {found} dimensions, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize, index: usize },

    /// Edges reference more nodes than there are samples.
    #[error("edges reference {nodes} nodes but only {samples} samples were given")]
    SampleCountMismatch { samples: usize, nodes: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

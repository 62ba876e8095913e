//! Dense helpers around `smartcore` matrices used by the regularizer.
//!
//! `smartcore` supplies the Cholesky factorization; the lower-triangular inverse
//! is a plain forward substitution since the factor is already triangular.

use log::{debug, trace};
use smartcore::linalg::basic::arrays::{Array, Array2, MutArray};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linalg::traits::cholesky::CholeskyDecomposable;

use crate::errors::{ManifoldError, Result};

/// Row-major dense matrix from equally long rows.
pub fn from_rows(rows: &[Vec<f64>], ncols: usize) -> DenseMatrix<f64> {
    DenseMatrix::from_iterator(rows.iter().flatten().copied(), rows.len(), ncols, 0)
}

/// `I + strength * m`
pub fn shifted_identity(m: &DenseMatrix<f64>, strength: f64) -> DenseMatrix<f64> {
    let (n, _) = m.shape();
    let mut out = m.mul_scalar(strength);
    out.add_mut(&DenseMatrix::<f64>::eye(n));
    out
}

/// `(m + mᵗ) / 2`, returning the largest absolute asymmetry that was removed.
pub fn symmetrize(m: &mut DenseMatrix<f64>) -> f64 {
    let (n, ncols) = m.shape();
    debug_assert_eq!(n, ncols, "only square matrices can be symmetrized");
    let transposed = m.transpose();
    let max_asymmetry = m
        .sub(&transposed)
        .iterator(0)
        .fold(0.0_f64, |acc, x| acc.max(x.abs()));

    m.add_mut(&transposed);
    m.mul_scalar_mut(0.5);
    trace!("Symmetrized {}×{} matrix, max asymmetry {:.3e}", n, n, max_asymmetry);
    max_asymmetry
}

/// Lower-triangular Cholesky factor `L` with `m = L·Lᵗ`.
///
/// Fails when `m` is not positive-definite, including the case where a pivot
/// collapses to zero or turns non-finite.
pub fn cholesky_lower(m: &DenseMatrix<f64>) -> Result<DenseMatrix<f64>> {
    let (n, ncols) = m.shape();
    if n != ncols {
        return Err(ManifoldError::FactorizationFailed {
            reason: format!("matrix is not square: {}×{}", n, ncols),
        });
    }

    let chol = m
        .cholesky()
        .map_err(|e| ManifoldError::FactorizationFailed { reason: e.to_string() })?;
    let lower = chol.L();

    for i in 0..n {
        let pivot = *lower.get((i, i));
        if !(pivot.is_finite() && pivot > 0.0) {
            return Err(ManifoldError::FactorizationFailed {
                reason: format!("non-positive pivot {} at row {}", pivot, i),
            });
        }
    }
    debug!("Cholesky factor computed for {}×{} matrix", n, n);
    Ok(lower)
}

/// Inverse of a lower-triangular matrix with a non-zero diagonal, by forward substitution.
pub fn inv_lower_triangular(l: &DenseMatrix<f64>) -> DenseMatrix<f64> {
    let (n, _) = l.shape();
    let mut inv = DenseMatrix::<f64>::zeros(n, n);
    for i in 0..n {
        inv.set((i, i), 1.0 / *l.get((i, i)));
        for j in (i + 1)..n {
            let mut sum = 0.0;
            for k in i..j {
                sum -= *l.get((j, k)) * *inv.get((k, i));
            }
            inv.set((j, i), sum / *l.get((j, j)));
        }
    }
    inv
}

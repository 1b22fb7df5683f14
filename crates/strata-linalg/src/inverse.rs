//! Gauss-Jordan inversion shared by both matrix families.

use crate::error::{LinalgError, Result};

/// Inverts the `n`x`n` matrix stored row-major in `elems`, returning the row-major inverse.
///
/// Uses partial pivoting. A pivot whose magnitude does not exceed `f64::EPSILON` times the largest
/// input magnitude is treated as zero, so nearly singular inputs are rejected instead of producing
/// huge, meaningless elements. Any NaN or infinite input element makes the matrix singular.
pub(crate) fn invert(n: usize, mut elems: Vec<f64>) -> Result<Vec<f64>> {
    debug_assert_eq!(elems.len(), n * n);

    if elems.iter().any(|e| !e.is_finite()) {
        log::trace!("non-finite element in {n}x{n} input, matrix is singular");
        return Err(LinalgError::Singular);
    }
    let scale = elems.iter().fold(0.0f64, |max, e| max.max(e.abs()));
    if scale == 0.0 {
        return Err(LinalgError::Singular);
    }
    let threshold = f64::EPSILON * scale;

    let mut inverse = vec![0.0; n * n];
    for i in 0..n {
        inverse[i * n + i] = 1.0;
    }

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&a, &b| elems[a * n + col].abs().total_cmp(&elems[b * n + col].abs()))
            .unwrap_or(col);
        let pivot = elems[pivot_row * n + col];
        if pivot.abs() <= threshold {
            log::trace!("pivot {pivot} in column {col} is below {threshold}, matrix is singular");
            return Err(LinalgError::Singular);
        }
        if pivot_row != col {
            log::trace!("swapping rows {col} and {pivot_row}");
            swap_rows(&mut elems, n, col, pivot_row);
            swap_rows(&mut inverse, n, col, pivot_row);
        }

        for k in 0..n {
            elems[col * n + k] /= pivot;
            inverse[col * n + k] /= pivot;
        }

        for row in (0..n).filter(|&row| row != col) {
            let factor = elems[row * n + col];
            if factor == 0.0 {
                continue;
            }
            for k in 0..n {
                elems[row * n + k] -= factor * elems[col * n + k];
                inverse[row * n + k] -= factor * inverse[col * n + k];
            }
        }
    }

    Ok(inverse)
}

fn swap_rows(elems: &mut [f64], n: usize, a: usize, b: usize) {
    for k in 0..n {
        elems.swap(a * n + k, b * n + k);
    }
}

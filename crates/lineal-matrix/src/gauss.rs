//! Row-reduction kernels shared by determinant, inversion and solving.
//!
//! The kernels operate on a mutable [`Matrix`] restricted to a prefix of
//! pivot columns, so the same code serves in-place reduction of a square
//! matrix and reduction of augmented systems (`[A | I]` for inversion,
//! `[A | b]` for solving), where only the left block holds pivots.

use num_traits::Float;

use crate::matrix::Matrix;

/// Default tolerance below which a pivot candidate is treated as zero.
///
/// Elimination accumulates floating point drift, so pivot checks compare
/// magnitudes against this tolerance instead of exact zero. Every public
/// entry point of [`SquareMatrix`](crate::SquareMatrix) has a
/// `*_with_tolerance` variant to override it per call.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-9;

/// Outcome of a forward elimination pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elimination {
    /// Number of row swaps performed by partial pivoting; the determinant
    /// sign flips once per swap.
    pub swaps: usize,
    /// Number of pivots found. A `rank` below the matrix order means the
    /// matrix is singular within the tolerance used.
    pub rank: usize,
}

impl Elimination {
    /// `true` iff elimination found a pivot for every row of a matrix of
    /// the given order.
    pub fn is_full_rank(&self, order: usize) -> bool {
        self.rank == order
    }
}

pub(crate) fn default_tolerance<T: Float>() -> T {
    T::from(DEFAULT_PIVOT_TOLERANCE).unwrap_or_else(T::epsilon)
}

/// Forward pass: reduces to row-echelon form with partial pivoting over
/// the first `pivot_cols` columns.
///
/// At each pivot column the largest-magnitude candidate from the current
/// row downward is selected. A column whose best candidate is within
/// `tolerance` of zero is skipped and recorded as rank deficiency rather
/// than failing, so rank and determinant can still be reported.
pub(crate) fn forward<T: Float>(m: &mut Matrix<T>, pivot_cols: usize, tolerance: T) -> Elimination {
    let rows = m.rows();
    let mut swaps = 0;
    let mut pivot_row = 0;
    for col in 0..pivot_cols {
        if pivot_row == rows {
            break;
        }
        let mut best = pivot_row;
        for r in pivot_row + 1..rows {
            if m.at(r, col).abs() > m.at(best, col).abs() {
                best = r;
            }
        }
        if m.at(best, col).abs() <= tolerance {
            continue;
        }
        if best != pivot_row {
            m.swap_rows(best, pivot_row);
            swaps += 1;
        }
        let pivot = m.at(pivot_row, col);
        for r in pivot_row + 1..rows {
            let factor = m.at(r, col) / pivot;
            if factor == T::zero() {
                continue;
            }
            *m.at_mut(r, col) = T::zero();
            for c in col + 1..m.cols() {
                let updated = m.at(r, c) - factor * m.at(pivot_row, c);
                *m.at_mut(r, c) = updated;
            }
        }
        pivot_row += 1;
    }
    Elimination {
        swaps,
        rank: pivot_row,
    }
}

/// Backward pass: assumes row-echelon form, scales every pivot to one and
/// eliminates the entries above it, yielding reduced row-echelon form.
pub(crate) fn backward<T: Float>(m: &mut Matrix<T>, pivot_cols: usize, tolerance: T) {
    let rows = m.rows();
    for row in (0..rows).rev() {
        let Some(lead) = (0..pivot_cols).find(|&c| m.at(row, c).abs() > tolerance) else {
            continue;
        };
        let pivot = m.at(row, lead);
        for c in lead..m.cols() {
            let scaled = m.at(row, c) / pivot;
            *m.at_mut(row, c) = scaled;
        }
        *m.at_mut(row, lead) = T::one();
        for r in 0..row {
            let factor = m.at(r, lead);
            if factor == T::zero() {
                continue;
            }
            *m.at_mut(r, lead) = T::zero();
            for c in lead + 1..m.cols() {
                let updated = m.at(r, c) - factor * m.at(row, c);
                *m.at_mut(r, c) = updated;
            }
        }
    }
}

/// Determinant via the forward pass on a scratch copy: the product of the
/// diagonal pivots, sign-flipped once per row swap; exactly zero when
/// elimination finds fewer pivots than rows.
pub(crate) fn determinant<T: Float>(m: &Matrix<T>, tolerance: T) -> T {
    debug_assert!(m.is_square());
    let mut work = m.clone();
    let order = work.rows();
    let outcome = forward(&mut work, order, tolerance);
    if !outcome.is_full_rank(order) {
        return T::zero();
    }
    let product = (0..order).fold(T::one(), |acc, i| acc * work.at(i, i));
    if outcome.swaps % 2 == 1 {
        -product
    } else {
        product
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[[f64; 3]]) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_forward_reduces_below_pivots() {
        let mut m = matrix(&[[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]]);
        let outcome = forward(&mut m, 3, 1e-9);
        assert_eq!(outcome.rank, 3);
        for r in 0..3 {
            for c in 0..r {
                assert_eq!(m.at(r, c), 0.0);
            }
        }
    }

    #[test]
    fn test_forward_counts_swaps() {
        // pivoting must move the larger second row up
        let mut m = Matrix::from_rows(&[[1.0, 2.0], [10.0, 1.0]]).unwrap();
        let outcome = forward(&mut m, 2, 1e-9);
        assert_eq!(outcome.swaps, 1);
        assert_eq!(m.at(0, 0), 10.0);
    }

    #[test]
    fn test_forward_records_rank_deficiency() {
        let mut m = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
        let outcome = forward(&mut m, 2, 1e-9);
        assert_eq!(outcome.rank, 1);
        assert!(!outcome.is_full_rank(2));
    }

    #[test]
    fn test_backward_yields_reduced_form() {
        let mut m = matrix(&[[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]]);
        forward(&mut m, 3, 1e-9);
        backward(&mut m, 3, 1e-9);
        for r in 0..3 {
            for c in 0..3 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert!((m.at(r, c) - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_determinant_known_values() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert!((determinant(&m, 1e-9) - -2.0).abs() < 1e-12);

        let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
        assert_eq!(determinant(&singular, 1e-9), 0.0);
    }
}

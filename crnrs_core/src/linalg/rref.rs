//! Gauss-Jordan elimination to reduced row echelon form
use log::{trace, warn};
use nalgebra::DMatrix;

/// A candidate pivot within this factor of the zero threshold (either side) triggers a warning
const NEAR_TOLERANCE_FACTOR: f64 = 10.0;

/// Smallest relative tolerance applied, smaller, non-positive or non-finite tolerances are
/// raised to it
pub const MIN_TOLERANCE: f64 = f64::EPSILON;

/// Result of row reducing a matrix
#[derive(Clone, Debug, PartialEq)]
pub struct Rref {
    /// The matrix in reduced row echelon form, values at or below the threshold are exactly zero
    pub reduced: DMatrix<f64>,
    /// Pivot column of each nonzero row of `reduced`, ascending
    pub pivot_columns: Vec<usize>,
    /// The absolute threshold used to decide whether a value is zero
    pub threshold: f64,
}

impl Rref {
    /// Rank of the reduced matrix
    pub fn rank(&self) -> usize {
        self.pivot_columns.len()
    }

    /// Columns which are not pivot columns, ascending
    pub fn nonpivot_columns(&self) -> Vec<usize> {
        (0..self.reduced.ncols())
            .filter(|c| !self.pivot_columns.contains(c))
            .collect()
    }
}

/// Absolute zero threshold for a matrix: `tolerance * max(1, largest |entry|)`
///
/// A `tolerance` below [`MIN_TOLERANCE`] (including zero, negative values and NaN) or an
/// infinite one is replaced by [`MIN_TOLERANCE`].
pub fn effective_tolerance(matrix: &DMatrix<f64>, tolerance: f64) -> f64 {
    let tolerance = if tolerance.is_finite() && tolerance >= MIN_TOLERANCE {
        tolerance
    } else {
        warn!(
            "Tolerance {} is not usable, falling back to {:e}",
            tolerance, MIN_TOLERANCE
        );
        MIN_TOLERANCE
    };
    let largest = matrix.iter().fold(0f64, |acc, v| acc.max(v.abs()));
    tolerance * largest.max(1.0)
}

/// Row reduce a matrix to reduced row echelon form
///
/// Columns are scanned left to right. In each column the remaining row with the largest
/// magnitude entry becomes the pivot row (the topmost such row on ties); a column whose
/// largest remaining magnitude is at or below the threshold (see [`effective_tolerance`])
/// has no pivot.
///
/// # Parameters
/// - `matrix`: Matrix to reduce, left unchanged
/// - `tolerance`: relative zero tolerance
///
/// # Returns
/// The reduced matrix along with its pivot columns, see [`Rref`]
///
/// # Examples
/// ```rust
/// use nalgebra::DMatrix;
/// use crnrs_core::linalg::rref::rref;
/// let matrix = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 2.0, 4.0, 6.0]);
/// let reduced = rref(&matrix, 1e-10);
/// assert_eq!(reduced.pivot_columns, vec![0]);
/// ```
pub fn rref(matrix: &DMatrix<f64>, tolerance: f64) -> Rref {
    let threshold = effective_tolerance(matrix, tolerance);
    let mut reduced = matrix.clone();
    let (nrows, ncols) = reduced.shape();
    let mut pivot_columns = Vec::new();
    let mut pivot_row = 0;

    for col in 0..ncols {
        if pivot_row >= nrows {
            break;
        }
        let mut best_row = pivot_row;
        for row in pivot_row + 1..nrows {
            if reduced[(row, col)].abs() > reduced[(best_row, col)].abs() {
                best_row = row;
            }
        }
        let magnitude = reduced[(best_row, col)].abs();
        if magnitude > 0f64
            && magnitude > threshold / NEAR_TOLERANCE_FACTOR
            && magnitude < threshold * NEAR_TOLERANCE_FACTOR
        {
            warn!(
                "Pivot candidate {:e} in column {} is close to the zero threshold {:e}, \
                pivot selection may be unstable",
                magnitude, col, threshold
            );
        }
        if magnitude <= threshold {
            for row in pivot_row..nrows {
                reduced[(row, col)] = 0f64;
            }
            continue;
        }

        reduced.swap_rows(pivot_row, best_row);
        let pivot = reduced[(pivot_row, col)];
        for c in col..ncols {
            reduced[(pivot_row, c)] /= pivot;
        }
        for row in 0..nrows {
            if row == pivot_row {
                continue;
            }
            let factor = reduced[(row, col)];
            if factor == 0f64 {
                continue;
            }
            for c in col..ncols {
                let pivot_value = reduced[(pivot_row, c)];
                reduced[(row, c)] -= factor * pivot_value;
            }
            reduced[(row, col)] = 0f64;
        }
        trace!("Pivot found in column {} (row {})", col, pivot_row);
        pivot_columns.push(col);
        pivot_row += 1;
    }

    // Remove elimination noise
    reduced.iter_mut().for_each(|v| {
        if v.abs() <= threshold {
            *v = 0f64
        }
    });

    Rref {
        reduced,
        pivot_columns,
        threshold,
    }
}

/// Numerical rank of a matrix, the number of pivots found by [`rref`]
pub fn rank(matrix: &DMatrix<f64>, tolerance: f64) -> usize {
    rref(matrix, tolerance).rank()
}

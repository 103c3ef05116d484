//! Construction of a basis for the orthogonal complement of the stoichiometric subspace
use log::debug;
use nalgebra::DMatrix;

use crate::linalg::rref::rref;

/// Basis of the null space of a matrix, with the pivot partition of its columns
#[derive(Clone, Debug, PartialEq)]
pub struct ComplementBasis {
    /// Basis vectors as columns, one per nonpivot column
    pub basis_matrix: DMatrix<f64>,
    /// Pivot columns of the row reduced input, ascending
    pub pivot_columns: Vec<usize>,
    /// Remaining columns, ascending; column `j` of `basis_matrix` belongs to `nonpivot_columns[j]`
    pub nonpivot_columns: Vec<usize>,
}

/// Compute a basis of `{x : basis * x = 0}`
///
/// The rows of `basis` are row reduced, then for each nonpivot column `n` a vector is built
/// with a one at `n`, `-B[i, n]` at the pivot column of every reduced row `i`, and zero
/// elsewhere. These vectors are placed as columns in ascending nonpivot order.
///
/// # Parameters
/// - `basis`: Matrix whose rows span the subspace (normally the rows of a
///     [`crate::analysis::row_space::StoichiometricBasis`])
/// - `tolerance`: relative zero tolerance passed to [`rref`]
///
/// # Examples
/// ```rust
/// use nalgebra::DMatrix;
/// use crnrs_core::analysis::orthogonal_complement::orthogonal_complement;
/// let basis = DMatrix::from_row_slice(1, 2, &[-1.0, 1.0]);
/// let complement = orthogonal_complement(&basis, 1e-10);
/// assert_eq!(complement.nonpivot_columns, vec![1]);
/// assert_eq!(complement.basis_matrix, DMatrix::from_row_slice(2, 1, &[1.0, 1.0]));
/// ```
pub fn orthogonal_complement(basis: &DMatrix<f64>, tolerance: f64) -> ComplementBasis {
    let reduced = rref(basis, tolerance);
    let nonpivot_columns = reduced.nonpivot_columns();
    let ncols = basis.ncols();

    let mut basis_matrix = DMatrix::<f64>::zeros(ncols, nonpivot_columns.len());
    for (j, &nonpivot) in nonpivot_columns.iter().enumerate() {
        basis_matrix[(nonpivot, j)] = 1f64;
        for (row, &pivot) in reduced.pivot_columns.iter().enumerate() {
            let value = reduced.reduced[(row, nonpivot)];
            if value != 0f64 {
                basis_matrix[(pivot, j)] = -value;
            }
        }
    }
    debug!(
        "Orthogonal complement has dimension {} (pivots {:?})",
        nonpivot_columns.len(),
        reduced.pivot_columns
    );
    ComplementBasis {
        basis_matrix,
        pivot_columns: reduced.pivot_columns,
        nonpivot_columns,
    }
}

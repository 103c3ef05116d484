//! Selection of a basis of the stoichiometric subspace from the reaction vectors
use log::debug;
use nalgebra::DMatrix;

use crate::analysis::reaction_vectors::ReactionVectors;
use crate::linalg::rref::rref;

/// Basis of the stoichiometric subspace made of actual reaction vectors
#[derive(Clone, Debug, PartialEq)]
pub struct StoichiometricBasis {
    /// Selected reaction vectors as rows, unmodified
    pub basis: DMatrix<f64>,
    /// Index of each selected row in the reaction vector matrix, ascending
    pub row_indices: Vec<usize>,
    /// Label of each selected row (see [`ReactionVectors::row_ids`])
    pub row_ids: Vec<String>,
}

impl StoichiometricBasis {
    /// Dimension of the stoichiometric subspace
    pub fn rank(&self) -> usize {
        self.basis.nrows()
    }
}

/// Select a maximal linearly independent subset of the reaction vectors
///
/// The transpose of the reaction vector matrix is row reduced, each of its pivot columns
/// identifies a reaction vector which is kept as is. Rows which are zero or combinations of
/// earlier rows are never selected.
///
/// # Parameters
/// - `vectors`: Reaction vectors of the network
/// - `tolerance`: relative zero tolerance passed to [`rref`]
pub fn extract_row_space_basis(vectors: &ReactionVectors, tolerance: f64) -> StoichiometricBasis {
    let reduced = rref(&vectors.matrix.transpose(), tolerance);
    let row_indices = reduced.pivot_columns;
    let basis = DMatrix::from_fn(row_indices.len(), vectors.matrix.ncols(), |i, j| {
        vectors.matrix[(row_indices[i], j)]
    });
    let row_ids = row_indices
        .iter()
        .map(|&idx| vectors.row_ids[idx].clone())
        .collect();
    debug!(
        "Stoichiometric subspace has rank {} ({} reaction vectors)",
        row_indices.len(),
        vectors.matrix.nrows()
    );
    StoichiometricBasis {
        basis,
        row_indices,
        row_ids,
    }
}

#[cfg(test)]
mod row_space_tests {
    use super::*;

    fn vectors(nrows: usize, ncols: usize, data: &[f64]) -> ReactionVectors {
        ReactionVectors {
            matrix: DMatrix::from_row_slice(nrows, ncols, data),
            row_ids: (0..nrows).map(|i| format!("R{}", i + 1)).collect(),
        }
    }

    #[test]
    fn single_reaction() {
        let basis = extract_row_space_basis(&vectors(1, 2, &[-1.0, 1.0]), 1e-10);
        assert_eq!(basis.row_indices, vec![0]);
        assert_eq!(basis.basis, DMatrix::from_row_slice(1, 2, &[-1.0, 1.0]));
        assert_eq!(basis.rank(), 1);
    }

    #[test]
    fn duplicate_and_zero_rows_skipped() {
        let basis = extract_row_space_basis(
            &vectors(
                4,
                3,
                &[0.0, 0.0, 0.0, -1.0, 1.0, 0.0, 1.0, -1.0, 0.0, 0.0, -1.0, 1.0],
            ),
            1e-10,
        );
        assert_eq!(basis.row_indices, vec![1, 3]);
        assert_eq!(basis.row_ids, vec!["R2".to_string(), "R4".to_string()]);
        assert_eq!(
            basis.basis,
            DMatrix::from_row_slice(2, 3, &[-1.0, 1.0, 0.0, 0.0, -1.0, 1.0])
        );
    }

    #[test]
    fn rows_are_not_combined() {
        // The third row is the sum of the first two and is not selected, the kept rows keep
        // their original (unreduced) values
        let basis = extract_row_space_basis(
            &vectors(3, 3, &[-2.0, 1.0, 0.0, 0.0, -3.0, 1.0, -2.0, -2.0, 1.0]),
            1e-10,
        );
        assert_eq!(basis.row_indices, vec![0, 1]);
        assert_eq!(
            basis.basis,
            DMatrix::from_row_slice(2, 3, &[-2.0, 1.0, 0.0, 0.0, -3.0, 1.0])
        );
    }

    #[test]
    fn empty() {
        let basis = extract_row_space_basis(&vectors(0, 0, &[]), 1e-10);
        assert!(basis.row_indices.is_empty());
        assert_eq!(basis.basis.shape(), (0, 0));
    }
}

//! The labeled result of the orthogonal complement computation
use nalgebra::{DMatrix, DVector};

use crate::analysis::orthogonal_complement::ComplementBasis;
use crate::analysis::row_space::StoichiometricBasis;
use crate::reaction_network::network::Network;
use crate::reaction_network::reaction::Reaction;

/// Orthogonal complement of the stoichiometric subspace of a network, with each basis
/// vector labeled by its nonpivot species
#[derive(Clone, Debug, PartialEq)]
pub struct OrthogonalComplementBasis {
    /// Sorted species of the network, the row order of `basis_matrix`
    pub species: Vec<String>,
    /// Reactions of the network
    pub reactions: Vec<Reaction>,
    /// Reaction vectors spanning the stoichiometric subspace
    pub stoichiometric_basis: StoichiometricBasis,
    /// Basis vectors of the orthogonal complement as columns (species x nonpivot species)
    pub basis_matrix: DMatrix<f64>,
    /// Species labeling each column of `basis_matrix`
    pub nonpivot_species: Vec<String>,
    /// Species whose columns held a pivot
    pub pivot_species: Vec<String>,
}

impl OrthogonalComplementBasis {
    /// Package the pieces computed for a network
    pub(crate) fn assemble(
        network: &Network,
        stoichiometric_basis: StoichiometricBasis,
        complement: ComplementBasis,
    ) -> Self {
        let species: Vec<String> = network.species().iter().cloned().collect();
        let label = |idx: &usize| species[*idx].clone();
        let nonpivot_species: Vec<String> = complement.nonpivot_columns.iter().map(label).collect();
        let pivot_species: Vec<String> = complement.pivot_columns.iter().map(label).collect();
        OrthogonalComplementBasis {
            reactions: network.reactions().to_vec(),
            stoichiometric_basis,
            basis_matrix: complement.basis_matrix,
            nonpivot_species,
            pivot_species,
            species,
        }
    }

    /// Dimension of the orthogonal complement
    pub fn dimension(&self) -> usize {
        self.nonpivot_species.len()
    }

    /// Dimension of the stoichiometric subspace
    pub fn rank(&self) -> usize {
        self.stoichiometric_basis.rank()
    }

    /// The basis vector labeled by a species, None if that species is not a nonpivot species
    pub fn column_for(&self, species: &str) -> Option<DVector<f64>> {
        self.nonpivot_species
            .iter()
            .position(|s| s == species)
            .map(|idx| self.basis_matrix.column(idx).into_owned())
    }

    /// Iterate over (label, basis vector) pairs in column order
    pub fn labeled_columns(&self) -> impl Iterator<Item = (&str, DVector<f64>)> + '_ {
        self.nonpivot_species
            .iter()
            .enumerate()
            .map(|(idx, s)| (s.as_str(), self.basis_matrix.column(idx).into_owned()))
    }
}

//! Conversion of reactions into reaction vectors over the species of a network
use indexmap::IndexSet;
use log::debug;
use nalgebra::{DMatrix, DVector};

use crate::reaction_network::complex::Complex;
use crate::reaction_network::reaction::Reaction;
use crate::reaction_network::MalformedNetworkError;

/// Matrix of reaction vectors, one row per reaction direction
#[derive(Clone, Debug, PartialEq)]
pub struct ReactionVectors {
    /// Reaction vectors as rows, columns follow the species order
    pub matrix: DMatrix<f64>,
    /// Label of each row, the forward id of the reaction or, for the second row of a
    /// reversible reaction, its reverse id
    pub row_ids: Vec<String>,
}

impl ReactionVectors {
    /// Number of rows (reaction directions)
    pub fn nrows(&self) -> usize {
        self.matrix.nrows()
    }
}

/// Build the vector of a complex over the species space
///
/// # Parameters
/// - `complex`: Complex to convert
/// - `reaction_id`: id of the reaction the complex belongs to, used in errors
/// - `species`: Sorted species of the network, giving the index of each species
///
/// # Returns
/// - `Ok`: Vector with the coefficient of each species at its index, zero elsewhere
/// - `Err`: a [`MalformedNetworkError`] if the complex is malformed or references a species
///     not in `species`
pub fn complex_vector(
    complex: &Complex,
    reaction_id: &str,
    species: &IndexSet<String>,
) -> Result<DVector<f64>, MalformedNetworkError> {
    complex.validate(reaction_id)?;
    let mut vector = DVector::<f64>::zeros(species.len());
    for (s, coefficient) in complex.iter() {
        let idx = species
            .get_index_of(s)
            .ok_or_else(|| MalformedNetworkError::UnknownSpecies {
                reaction: reaction_id.to_string(),
                species: s.to_string(),
            })?;
        vector[idx] = coefficient;
    }
    Ok(vector)
}

/// Build the reaction vector (product minus reactant) of a reaction
pub fn reaction_vector(
    reaction: &Reaction,
    species: &IndexSet<String>,
) -> Result<DVector<f64>, MalformedNetworkError> {
    let reactant = complex_vector(&reaction.reactant, &reaction.id, species)?;
    let product = complex_vector(&reaction.product, &reaction.id, species)?;
    Ok(product - reactant)
}

/// Build the matrix of reaction vectors of a list of reactions
///
/// Each reaction contributes its reaction vector as a row, a reversible reaction is
/// immediately followed by the negation of its reaction vector.
///
/// # Parameters
/// - `reactions`: Reactions to convert
/// - `species`: Sorted species, the column order of the matrix
pub fn build_reaction_vectors(
    reactions: &[Reaction],
    species: &IndexSet<String>,
) -> Result<ReactionVectors, MalformedNetworkError> {
    let mut rows: Vec<DVector<f64>> = Vec::with_capacity(reactions.len());
    let mut row_ids: Vec<String> = Vec::with_capacity(reactions.len());
    for reaction in reactions {
        let vector = reaction_vector(reaction, species)?;
        if reaction.reversible {
            rows.push(vector.clone());
            rows.push(-vector);
            row_ids.push(reaction.forward_id());
            row_ids.push(reaction.reverse_id());
        } else {
            rows.push(vector);
            row_ids.push(reaction.forward_id());
        }
    }
    let matrix = DMatrix::from_fn(rows.len(), species.len(), |i, j| rows[i][j]);
    debug!(
        "Built {}x{} reaction vector matrix from {} reactions",
        matrix.nrows(),
        matrix.ncols(),
        reactions.len()
    );
    Ok(ReactionVectors { matrix, row_ids })
}

//! Module providing the structural analyses of a reaction network
//!
//! The orthogonal complement computation runs in stages, each a pure function of the one before:
//! reaction vectors ([`reaction_vectors`]), a basis of the stoichiometric subspace made of
//! reaction vectors ([`row_space`]), and the orthogonal complement of that basis
//! ([`orthogonal_complement`]), packaged together in [`result`].

pub mod deficiency;
pub mod orthogonal_complement;
pub mod reaction_vectors;
pub mod result;
pub mod row_space;

use log::debug;

use crate::analysis::orthogonal_complement::orthogonal_complement;
use crate::analysis::reaction_vectors::build_reaction_vectors;
use crate::analysis::result::OrthogonalComplementBasis;
use crate::analysis::row_space::extract_row_space_basis;
use crate::configuration::default_tolerance;
use crate::reaction_network::network::Network;
use crate::reaction_network::MalformedNetworkError;

/// Compute a basis for the orthogonal complement of the stoichiometric subspace of a network,
/// using the configured tolerance
///
/// # Examples
/// ```rust
/// use crnrs_core::analysis::compute_orthogonal_complement_basis;
/// use crnrs_core::reaction_network::complex::Complex;
/// use crnrs_core::reaction_network::network::Network;
/// use crnrs_core::reaction_network::reaction::Reaction;
/// let network = Network::new(
///     "isomerization",
///     vec![Reaction::new(
///         "R1",
///         Complex::from_pairs([("A", 1.0)]),
///         Complex::from_pairs([("B", 1.0)]),
///         false,
///     )],
/// );
/// let result = compute_orthogonal_complement_basis(&network).unwrap();
/// assert_eq!(result.nonpivot_species, vec!["B".to_string()]);
/// ```
pub fn compute_orthogonal_complement_basis(
    network: &Network,
) -> Result<OrthogonalComplementBasis, MalformedNetworkError> {
    compute_orthogonal_complement_basis_with_tolerance(network, default_tolerance())
}

/// Compute a basis for the orthogonal complement of the stoichiometric subspace of a network
///
/// # Parameters
/// - `network`: Network to analyse
/// - `tolerance`: relative zero tolerance, used for both row reductions
///
/// # Returns
/// - `Ok`: the [`OrthogonalComplementBasis`], one column per nonpivot species
/// - `Err`: a [`MalformedNetworkError`] if a reaction is malformed, no partial result is returned
pub fn compute_orthogonal_complement_basis_with_tolerance(
    network: &Network,
    tolerance: f64,
) -> Result<OrthogonalComplementBasis, MalformedNetworkError> {
    debug!(
        "Analysing network {} ({} reactions, {} species)",
        network.id,
        network.reactions().len(),
        network.species().len()
    );
    let vectors = build_reaction_vectors(network.reactions(), network.species())?;
    let stoichiometric_basis = extract_row_space_basis(&vectors, tolerance);
    let complement = orthogonal_complement(&stoichiometric_basis.basis, tolerance);
    let result = OrthogonalComplementBasis::assemble(network, stoichiometric_basis, complement);
    debug!("Nonpivot species: {:?}", result.nonpivot_species);
    Ok(result)
}

#[cfg(test)]
mod analysis_tests {
    use super::*;
    use crate::reaction_network::complex::Complex;
    use crate::reaction_network::reaction::{Reaction, ReactionBuilder};
    use approx::assert_relative_eq;
    use nalgebra::{DMatrix, DVector};

    fn setup_network() -> Network {
        // A + B <-> C, C -> D, D -> A + B
        let r1 = ReactionBuilder::default()
            .id("R1")
            .reactant(Complex::from_pairs([("A", 1.0), ("B", 1.0)]))
            .product(Complex::from_pairs([("C", 1.0)]))
            .reversible(true)
            .build()
            .unwrap();
        let r2 = ReactionBuilder::default()
            .id("R2")
            .reactant(Complex::from_pairs([("C", 1.0)]))
            .product(Complex::from_pairs([("D", 1.0)]))
            .build()
            .unwrap();
        let r3 = ReactionBuilder::default()
            .id("R3")
            .reactant(Complex::from_pairs([("D", 1.0)]))
            .product(Complex::from_pairs([("A", 1.0), ("B", 1.0)]))
            .kinetic(Some("k3 * D".to_string()))
            .build()
            .unwrap();
        Network::new("cycle", vec![r1, r2, r3])
    }

    #[test]
    fn cycle_network() {
        let network = setup_network();
        let result = compute_orthogonal_complement_basis_with_tolerance(&network, 1e-10).unwrap();
        assert_eq!(result.species, vec!["A", "B", "C", "D"]);
        // Rows: R1, R1 reverse, R2, R3; only R1 and R2 are independent
        assert_eq!(result.rank(), 2);
        assert_eq!(result.stoichiometric_basis.row_indices, vec![0, 2]);
        assert_eq!(result.stoichiometric_basis.row_ids, vec!["R1", "R2"]);
        assert_eq!(result.pivot_species, vec!["A", "C"]);
        assert_eq!(result.nonpivot_species, vec!["B", "D"]);
        assert_eq!(result.dimension(), 2);

        let expected =
            DMatrix::from_row_slice(4, 2, &[-1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 1.0]);
        assert_relative_eq!(result.basis_matrix, expected, epsilon = 1e-12);
        assert_relative_eq!(
            &result.stoichiometric_basis.basis * &result.basis_matrix,
            DMatrix::<f64>::zeros(2, 2),
            epsilon = 1e-12
        );
    }

    #[test]
    fn labeled_columns() {
        let result = compute_orthogonal_complement_basis_with_tolerance(&setup_network(), 1e-10)
            .unwrap();
        assert_relative_eq!(
            result.column_for("D").unwrap(),
            DVector::from_vec(vec![1.0, 0.0, 1.0, 1.0]),
            epsilon = 1e-12
        );
        assert!(result.column_for("A").is_none());
        let labels: Vec<&str> = result.labeled_columns().map(|(s, _)| s).collect();
        assert_eq!(labels, vec!["B", "D"]);
    }

    #[test]
    fn malformed_network_gives_no_result() {
        let mut network = setup_network();
        network.add_reaction(Reaction::new(
            "R4",
            Complex::from_pairs([("A", 1.0), ("A", 1.0)]),
            Complex::empty(),
            false,
        ));
        assert_eq!(
            compute_orthogonal_complement_basis_with_tolerance(&network, 1e-10),
            Err(MalformedNetworkError::DuplicateSpecies {
                reaction: "R4".to_string(),
                species: "A".to_string(),
            })
        );
    }

    #[test]
    fn configured_tolerance() {
        let network = setup_network();
        assert_eq!(
            compute_orthogonal_complement_basis(&network).unwrap(),
            compute_orthogonal_complement_basis_with_tolerance(&network, default_tolerance())
                .unwrap()
        );
    }
}

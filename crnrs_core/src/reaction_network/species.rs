//! Derivation of the species of a network from its reactions
use indexmap::IndexSet;

use crate::reaction_network::reaction::Reaction;

/// Collect the sorted, deduplicated species appearing in any reaction
///
/// Species are gathered from every reactant complex and then every product complex, sorted
/// lexicographically, and deduplicated. The resulting order is the column order of every
/// matrix built from the network.
///
/// # Parameters
/// - `reactions`: Reactions to collect species from
///
/// # Returns
/// An [`IndexSet`] whose iteration order is the sorted species order, so that
/// `get_index_of` gives the column of a species.
///
/// # Examples
/// ```rust
/// use crnrs_core::reaction_network::complex::Complex;
/// use crnrs_core::reaction_network::reaction::Reaction;
/// use crnrs_core::reaction_network::species::resolve_species;
/// let reactions = vec![Reaction::new(
///     "R1",
///     Complex::from_pairs([("B", 1.0)]),
///     Complex::from_pairs([("A", 1.0)]),
///     false,
/// )];
/// let species = resolve_species(&reactions);
/// assert_eq!(species.get_index_of("A"), Some(0));
/// ```
pub fn resolve_species(reactions: &[Reaction]) -> IndexSet<String> {
    let mut species: Vec<&str> = reactions
        .iter()
        .flat_map(|r| r.reactant.species.iter())
        .chain(reactions.iter().flat_map(|r| r.product.species.iter()))
        .map(String::as_str)
        .collect();
    species.sort_unstable();
    species.dedup();
    species.into_iter().map(str::to_string).collect()
}

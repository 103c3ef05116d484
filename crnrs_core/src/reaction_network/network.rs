//! This module provides the Network struct for representing an entire reaction network
use std::fmt::{Display, Formatter};

use indexmap::IndexSet;

use crate::reaction_network::reaction::Reaction;
use crate::reaction_network::species::resolve_species;
use crate::reaction_network::MalformedNetworkError;

/// Represents a Chemical Reaction Network
#[derive(Clone, Debug, PartialEq)]
pub struct Network {
    /// Id associated with the Network
    pub id: String,
    /// Reactions of the network, in the order they were added
    reactions: Vec<Reaction>,
    /// Sorted species of the network, always derived from `reactions`
    species: IndexSet<String>,
}

impl Network {
    /// Create a network from a list of reactions
    ///
    /// # Examples
    /// ```rust
    /// use crnrs_core::reaction_network::complex::Complex;
    /// use crnrs_core::reaction_network::network::Network;
    /// use crnrs_core::reaction_network::reaction::Reaction;
    /// let network = Network::new(
    ///     "example",
    ///     vec![Reaction::new(
    ///         "R1",
    ///         Complex::from_pairs([("A", 1.0)]),
    ///         Complex::from_pairs([("B", 1.0)]),
    ///         false,
    ///     )],
    /// );
    /// assert_eq!(network.species().len(), 2);
    /// ```
    pub fn new(id: &str, reactions: Vec<Reaction>) -> Self {
        let species = resolve_species(&reactions);
        Network {
            id: id.to_string(),
            reactions,
            species,
        }
    }

    /// Create a network without any reactions
    pub fn new_empty(id: &str) -> Self {
        Network::new(id, Vec::new())
    }

    /// Add a reaction to the network
    ///
    /// The species of the network are derived again to include any new species
    pub fn add_reaction(&mut self, reaction: Reaction) {
        self.reactions.push(reaction);
        self.species = resolve_species(&self.reactions);
    }

    /// Reactions of the network
    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    /// Sorted species of the network
    pub fn species(&self) -> &IndexSet<String> {
        &self.species
    }

    /// Position of a species in the sorted species order
    pub fn species_index(&self, species: &str) -> Option<usize> {
        self.species.get_index_of(species)
    }

    /// Check every reaction of the network (see [`Reaction::validate`])
    pub fn validate(&self) -> Result<(), MalformedNetworkError> {
        self.reactions.iter().try_for_each(Reaction::validate)
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Network {}", self.id)?;
        for reaction in &self.reactions {
            writeln!(f, "  {}", reaction)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod network_tests {
    use super::*;
    use crate::reaction_network::complex::Complex;
    use crate::reaction_network::reaction::ReactionBuilder;

    fn setup_network() -> Network {
        let r1 = ReactionBuilder::default()
            .id("R1")
            .reactant(Complex::from_pairs([("B", 1.0)]))
            .product(Complex::from_pairs([("C", 1.0)]))
            .build()
            .unwrap();
        let r2 = ReactionBuilder::default()
            .id("R2")
            .reactant(Complex::from_pairs([("A", 1.0)]))
            .product(Complex::from_pairs([("B", 1.0)]))
            .reversible(true)
            .build()
            .unwrap();
        Network::new("test", vec![r1, r2])
    }

    #[test]
    fn empty_network() {
        let network = Network::new_empty("empty");
        assert!(network.reactions().is_empty());
        assert!(network.species().is_empty());
        assert!(network.validate().is_ok());
    }

    #[test]
    fn species_derived() {
        let network = setup_network();
        assert_eq!(
            network.species().iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
        assert_eq!(network.species_index("B"), Some(1));
        assert_eq!(network.species_index("D"), None);
    }

    #[test]
    fn add_reaction() {
        let mut network = setup_network();
        network.add_reaction(
            ReactionBuilder::default()
                .id("R3")
                .reactant(Complex::from_pairs([("D", 1.0)]))
                .build()
                .unwrap(),
        );
        assert_eq!(network.reactions().len(), 3);
        assert_eq!(network.species().len(), 4);
        assert_eq!(network.species_index("D"), Some(3));
    }

    #[test]
    fn validate() {
        let mut network = setup_network();
        assert!(network.validate().is_ok());
        network.add_reaction(Reaction::new(
            "bad",
            Complex::from_pairs([("A", 1.0), ("A", 1.0)]),
            Complex::empty(),
            false,
        ));
        match network.validate() {
            Err(MalformedNetworkError::DuplicateSpecies { reaction, species }) => {
                assert_eq!(reaction, "bad");
                assert_eq!(species, "A");
            }
            _ => panic!("Malformed reaction not detected"),
        }
    }

    #[test]
    fn display() {
        let network = setup_network();
        assert_eq!(
            format!("{}", network),
            "Network test\n  R1: B -> C\n  R2: A <-> B\n"
        );
    }
}

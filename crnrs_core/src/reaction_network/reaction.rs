//! This module provides a struct for representing reactions
use std::fmt::{Display, Formatter};
use std::hash::{DefaultHasher, Hash, Hasher};

use derive_builder::Builder;

use crate::reaction_network::complex::Complex;
use crate::reaction_network::MalformedNetworkError;

/// Represents a reaction in the network
#[derive(Builder, Debug, Clone, PartialEq)]
pub struct Reaction {
    /// Used to identify the reaction
    #[builder(setter(into))]
    pub id: String,
    /// Complex consumed by the reaction
    #[builder(default = "Complex::empty()")]
    pub reactant: Complex,
    /// Complex produced by the reaction
    #[builder(default = "Complex::empty()")]
    pub product: Complex,
    /// Whether the reaction can also run from product to reactant
    #[builder(default = "false")]
    pub reversible: bool,
    /// Kinetic rate law
    ///
    /// ### Note
    /// This is carried along with the reaction, but the structural analysis never reads it
    #[builder(default = "None")]
    pub kinetic: Option<String>,
}

impl Reaction {
    /// Create a new reaction
    pub fn new(id: &str, reactant: Complex, product: Complex, reversible: bool) -> Reaction {
        Reaction {
            id: id.to_string(),
            reactant,
            product,
            reversible,
            kinetic: None,
        }
    }

    /// Determine the label of the row contributed by the reaction running forward
    ///
    /// # Note:
    /// The forward id is the reaction id itself
    pub fn forward_id(&self) -> String {
        self.id.clone()
    }

    /// Determine the label of the row contributed by the reverse direction of a reversible reaction
    ///
    /// # Note:
    /// The reverse id is "{reaction_id}_reverse_{hexidecimal hash of reaction_id}"
    pub fn reverse_id(&self) -> String {
        let mut hasher = DefaultHasher::new();
        self.id.hash(&mut hasher);
        format!("{}_reverse_{:x}", &self.id, hasher.finish())
    }

    /// Iterate over every species referenced by the reaction, reactant side first
    pub fn species(&self) -> impl Iterator<Item = &str> + '_ {
        self.reactant
            .species
            .iter()
            .chain(self.product.species.iter())
            .map(String::as_str)
    }

    /// Check both complexes of the reaction (see [`Complex::validate`])
    pub fn validate(&self) -> Result<(), MalformedNetworkError> {
        self.reactant.validate(&self.id)?;
        self.product.validate(&self.id)
    }
}

impl Display for Reaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let arrow = if self.reversible { "<->" } else { "->" };
        write!(f, "{}: {} {} {}", self.id, self.reactant, arrow, self.product)
    }
}

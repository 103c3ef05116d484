//! This module provides the Complex struct, one side of a reaction
use std::fmt::{Display, Formatter};

use crate::reaction_network::MalformedNetworkError;

/// A formal linear combination of species
///
/// The species and their stoichiometric coefficients are stored as two position aligned lists,
/// so `stoichiometry[i]` is the coefficient of `species[i]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Complex {
    /// Species ids appearing in the complex
    pub species: Vec<String>,
    /// Stoichiometric coefficient of each species
    pub stoichiometry: Vec<f64>,
}

impl Complex {
    /// Create a new complex from aligned lists of species and coefficients
    ///
    /// No validation happens here, see [`Complex::validate`].
    pub fn new(species: Vec<String>, stoichiometry: Vec<f64>) -> Complex {
        Complex {
            species,
            stoichiometry,
        }
    }

    /// Create the empty complex (written `0`)
    pub fn empty() -> Complex {
        Complex::default()
    }

    /// Create a complex from (species, coefficient) pairs
    ///
    /// # Examples
    /// ```rust
    /// use crnrs_core::reaction_network::complex::Complex;
    /// let complex = Complex::from_pairs([("A", 2.0), ("B", 1.0)]);
    /// assert_eq!(complex.to_string(), "2 A + B");
    /// ```
    pub fn from_pairs<S, I>(pairs: I) -> Complex
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, f64)>,
    {
        let (species, stoichiometry): (Vec<String>, Vec<f64>) =
            pairs.into_iter().map(|(s, c)| (s.into(), c)).unzip();
        Complex {
            species,
            stoichiometry,
        }
    }

    /// Iterate over the (species, coefficient) pairs of the complex
    ///
    /// # Note:
    /// If the two lists differ in length the iterator stops at the shorter one, call
    /// [`Complex::validate`] first when that matters.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.species
            .iter()
            .map(String::as_str)
            .zip(self.stoichiometry.iter().copied())
    }

    /// Number of entries in the complex
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// Whether this is the empty complex
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Check that the complex is well formed
    ///
    /// # Parameters
    /// - `reaction_id`: id of the reaction the complex belongs to, used in the error
    ///
    /// # Returns
    /// - `Err(MalformedNetworkError::StoichiometryLengthMismatch)` if the species and
    ///   coefficient lists differ in length
    /// - `Err(MalformedNetworkError::DuplicateSpecies)` if a species appears more than once
    pub fn validate(&self, reaction_id: &str) -> Result<(), MalformedNetworkError> {
        if self.species.len() != self.stoichiometry.len() {
            return Err(MalformedNetworkError::StoichiometryLengthMismatch {
                reaction: reaction_id.to_string(),
                species: self.species.len(),
                coefficients: self.stoichiometry.len(),
            });
        }
        for (idx, s) in self.species.iter().enumerate() {
            if self.species[..idx].contains(s) {
                return Err(MalformedNetworkError::DuplicateSpecies {
                    reaction: reaction_id.to_string(),
                    species: s.clone(),
                });
            }
        }
        Ok(())
    }

    /// Whether two complexes contain the same species with the same coefficients,
    /// irrespective of the order of their entries
    pub fn same_composition(&self, other: &Complex) -> bool {
        self.sorted_entries() == other.sorted_entries()
    }

    fn sorted_entries(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self.iter().filter(|(_, c)| *c != 0.0).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "0");
        }
        let terms = self
            .iter()
            .map(|(s, c)| {
                if c == 1.0 {
                    s.to_string()
                } else {
                    format!("{} {}", c, s)
                }
            })
            .collect::<Vec<_>>();
        write!(f, "{}", terms.join(" + "))
    }
}

//! Module providing the data model of a chemical reaction network

pub mod complex;
pub mod network;
pub mod reaction;
pub mod species;

use thiserror::Error;

/// Ways a network description can be inconsistent
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MalformedNetworkError {
    #[error("Species {species} in reaction {reaction} is not a species of the network")]
    UnknownSpecies { reaction: String, species: String },
    #[error("Species {species} appears more than once in a complex of reaction {reaction}")]
    DuplicateSpecies { reaction: String, species: String },
    #[error(
        "Complex of reaction {reaction} has {species} species but {coefficients} coefficients"
    )]
    StoichiometryLengthMismatch {
        reaction: String,
        species: usize,
        coefficients: usize,
    },
}

//! Core rust implementation of crn.rs, a crate for the structural analysis of chemical reaction
//! networks: the stoichiometric subspace, its orthogonal complement, and the deficiency.

pub mod analysis;
pub mod configuration;
pub mod linalg;
pub mod reaction_network;

//! Module providing the dense linear algebra shared by the analyses

pub mod rref;

//! Complexes, linkage classes, and the deficiency of a network
use log::{debug, warn};

use crate::analysis::reaction_vectors::build_reaction_vectors;
use crate::configuration::default_tolerance;
use crate::linalg::rref::rank;
use crate::reaction_network::complex::Complex;
use crate::reaction_network::network::Network;
use crate::reaction_network::MalformedNetworkError;

/// Summary of the quantities making up the deficiency of a network
#[derive(Clone, Debug, PartialEq)]
pub struct DeficiencyReport {
    /// Distinct complexes of the network, in order of first appearance
    pub complexes: Vec<Complex>,
    /// Connected components of the complex graph, as indices into `complexes`
    pub linkage_classes: Vec<Vec<usize>>,
    /// Dimension of the stoichiometric subspace
    pub rank: usize,
    /// Number of complexes minus number of linkage classes minus rank
    pub deficiency: usize,
}

/// Index of a complex in `complexes`, appending it if it is not there yet
fn intern(complexes: &mut Vec<Complex>, complex: &Complex) -> usize {
    match complexes.iter().position(|c| c.same_composition(complex)) {
        Some(idx) => idx,
        None => {
            complexes.push(complex.clone());
            complexes.len() - 1
        }
    }
}

/// Distinct complexes of a network along with the (reactant, product) complex index pair
/// of every reaction
fn complex_graph(network: &Network) -> (Vec<Complex>, Vec<(usize, usize)>) {
    let mut complexes: Vec<Complex> = Vec::new();
    let edges = network
        .reactions()
        .iter()
        .map(|reaction| {
            let reactant = intern(&mut complexes, &reaction.reactant);
            let product = intern(&mut complexes, &reaction.product);
            (reactant, product)
        })
        .collect();
    (complexes, edges)
}

/// Collect the distinct complexes of a network
///
/// Complexes are listed in order of first appearance (reactant then product of each
/// reaction, in reaction order), two complexes are the same if they have the same composition.
pub fn complexes(network: &Network) -> Vec<Complex> {
    complex_graph(network).0
}

fn find(parents: &mut [usize], mut idx: usize) -> usize {
    while parents[idx] != idx {
        parents[idx] = parents[parents[idx]];
        idx = parents[idx];
    }
    idx
}

/// Group the complexes of a network into linkage classes
///
/// Every reaction links its reactant and product complex, regardless of direction.
///
/// # Returns
/// Each linkage class as ascending indices into [`complexes`], classes ordered by their
/// smallest index
pub fn linkage_classes(network: &Network) -> Vec<Vec<usize>> {
    let (complexes, edges) = complex_graph(network);
    let mut parents: Vec<usize> = (0..complexes.len()).collect();
    for (reactant, product) in edges {
        let reactant = find(&mut parents, reactant);
        let product = find(&mut parents, product);
        if reactant != product {
            let (low, high) = (reactant.min(product), reactant.max(product));
            parents[high] = low;
        }
    }
    let mut classes: Vec<Vec<usize>> = Vec::new();
    let mut class_of_root: Vec<Option<usize>> = vec![None; complexes.len()];
    for idx in 0..complexes.len() {
        let root = find(&mut parents, idx);
        match class_of_root[root] {
            Some(class) => classes[class].push(idx),
            None => {
                class_of_root[root] = Some(classes.len());
                classes.push(vec![idx]);
            }
        }
    }
    classes
}

/// Compute the deficiency of a network using the configured tolerance
pub fn deficiency(network: &Network) -> Result<DeficiencyReport, MalformedNetworkError> {
    deficiency_with_tolerance(network, default_tolerance())
}

/// Compute the deficiency of a network
///
/// # Parameters
/// - `network`: Network to analyse
/// - `tolerance`: relative zero tolerance used to find the rank of the reaction vectors
///
/// # Returns
/// - `Ok`: the [`DeficiencyReport`] of the network
/// - `Err`: a [`MalformedNetworkError`] if a reaction is malformed
pub fn deficiency_with_tolerance(
    network: &Network,
    tolerance: f64,
) -> Result<DeficiencyReport, MalformedNetworkError> {
    network.validate()?;
    let vectors = build_reaction_vectors(network.reactions(), network.species())?;
    let rank = rank(&vectors.matrix, tolerance);
    let complexes = complexes(network);
    let linkage_classes = linkage_classes(network);
    let deficiency = match (complexes.len() - linkage_classes.len()).checked_sub(rank) {
        Some(deficiency) => deficiency,
        None => {
            warn!(
                "Rank {} of network {} exceeds complexes minus linkage classes ({}), \
                the tolerance is too tight; reporting deficiency 0",
                rank,
                network.id,
                complexes.len() - linkage_classes.len()
            );
            0
        }
    };
    debug!(
        "Network {} has {} complexes, {} linkage classes, rank {}, deficiency {}",
        network.id,
        complexes.len(),
        linkage_classes.len(),
        rank,
        deficiency
    );
    Ok(DeficiencyReport {
        complexes,
        linkage_classes,
        rank,
        deficiency,
    })
}

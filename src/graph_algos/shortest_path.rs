use std::{fmt::Debug, hash::Hash};

use crate::errors::PathError;
use super::PredecessorMap;

/// Construct the shortest path from the destination back to the source
/// Returns the ordered path as a vector of nodes from source to destination
/// predecessors: PredecessorMap<N> - node -> node it is reached from
/// Fails if the chain stops at a node other than the source, or loops
pub fn reconstruct_path<N>(predecessors: &PredecessorMap<N>, source: &N, destination: &N) -> Result<Vec<N>, PathError<N>>
where
    N: Eq + Hash + Clone + Debug,
{

    let mut path = vec![destination.clone()];
    let mut current = destination;

    // Trace back from destination to source
    while current != source {
        let Some(previous) = predecessors.get(current) else {
            return Err(PathError::Disconnected {
                node: current.clone(),
                destination: destination.clone(),
            });
        };

        // every node but the source has one entry, a longer chain must repeat a node
        if path.len() > predecessors.len() {
            return Err(PathError::PredecessorCycle { node: previous.clone() });
        }

        path.push(previous.clone());
        current = previous;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}

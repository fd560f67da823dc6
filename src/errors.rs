use std::fmt::Debug;

/// Errors raised while searching a graph or rebuilding a path from its predecessors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError<N: Debug> {
    /// Destination is unreachable from the origin, or not in the graph at all
    #[error("could not find a path from {origin:?} to {destination:?}")]
    NoPath { origin: N, destination: N },

    /// Predecessor chain ended at a node that is not the source
    #[error("predecessor chain for {destination:?} ends at {node:?}, which is not the source")]
    Disconnected { node: N, destination: N },

    /// Predecessor chain loops back on itself
    #[error("predecessor chain revisits {node:?}")]
    PredecessorCycle { node: N },

    /// Cost of reaching the node can't be represented in the cost type
    #[error("cost of reaching {node:?} overflows")]
    CostOverflow { node: N },
}

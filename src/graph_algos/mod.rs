pub mod dijkstra;
mod shortest_path;

pub use shortest_path::reconstruct_path;

use std::{fmt::Debug, hash::Hash};

use crate::collections::FxIndexMap;
use crate::cost::Cost;
use crate::errors::PathError;

/// Best known cumulative cost from the source, per node
pub type CostMap<N, C> = FxIndexMap<N, C>;

/// Node -> the neighbor it is reached from on its cheapest known path
/// The source never has an entry
pub type PredecessorMap<N> = FxIndexMap<N, N>;


/// Outcome of a single-source search
/// Holds every node reached before the search stopped, in discovery order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths<N, C>
where
    N: Eq + Hash,
{
    source: N,
    costs: CostMap<N, C>,
    predecessors: PredecessorMap<N>,
}

impl<N, C> ShortestPaths<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Cost,
{
    pub(crate) fn new(source: N, costs: CostMap<N, C>, predecessors: PredecessorMap<N>) -> Self {
        ShortestPaths { source, costs, predecessors }
    }

    pub fn source(&self) -> &N {
        &self.source
    }

    pub fn costs(&self) -> &CostMap<N, C> {
        &self.costs
    }

    pub fn predecessors(&self) -> &PredecessorMap<N> {
        &self.predecessors
    }

    pub fn cost(&self, node: &N) -> Option<C> {
        self.costs.get(node).copied()
    }

    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.predecessors.get(node)
    }

    /// True if the search reached the node
    pub fn contains(&self, node: &N) -> bool {
        self.costs.contains_key(node)
    }

    /// Ordered nodes from the source to the destination
    pub fn path_to(&self, destination: &N) -> Result<Vec<N>, PathError<N>> {
        self.path_with_cost_to(destination).map(|(path, _)| path)
    }

    /// Path to the destination together with its total cost
    pub fn path_with_cost_to(&self, destination: &N) -> Result<(Vec<N>, C), PathError<N>> {
        let Some(cost) = self.cost(destination) else {
            return Err(PathError::NoPath {
                origin: self.source.clone(),
                destination: destination.clone(),
            });
        };
        let path = reconstruct_path(&self.predecessors, &self.source, destination)?;

        Ok((path, cost))
    }

    pub fn into_predecessors(self) -> PredecessorMap<N> {
        self.predecessors
    }

    pub fn into_parts(self) -> (N, CostMap<N, C>, PredecessorMap<N>) {
        (self.source, self.costs, self.predecessors)
    }
}

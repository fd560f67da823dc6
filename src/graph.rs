use std::hash::Hash;

use crate::collections::{FxIndexMap, FxIndexSet};
use crate::cost::Cost;


/// Weighted directed graph stored as a nested map: node -> {neighbor -> edge weight}
/// Nodes exist implicitly, either as a key or as the target of an edge.
/// Edge weights are expected to be non-negative, this is not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<N, C>
where
    N: Eq + Hash,
{
    adjacency: FxIndexMap<N, FxIndexMap<N, C>>,
}

impl<N, C> Default for Graph<N, C>
where
    N: Eq + Hash,
{
    fn default() -> Self {
        Graph { adjacency: FxIndexMap::default() }
    }
}

impl<N, C> Graph<N, C>
where
    N: Eq + Hash + Clone,
    C: Copy,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node without adding any edges
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Add the directed edge from -> to
    /// A second edge between the same pair overwrites the first, the old weight is returned
    pub fn add_edge(&mut self, from: N, to: N, weight: C) -> Option<C> {
        self.adjacency.entry(from).or_default().insert(to, weight)
    }

    /// Outgoing edges of a node, in insertion order
    /// Unknown nodes have no neighbors
    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = (&'a N, C)> + use<'a, N, C> {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(neighbor, &weight)| (neighbor, weight)))
    }

    pub fn edge_weight(&self, from: &N, to: &N) -> Option<C> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// True if the node has outgoing edges, was added explicitly or is the target of an edge
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
            || self.adjacency.values().any(|edges| edges.contains_key(node))
    }

    /// Number of distinct nodes, counting edge targets
    pub fn node_count(&self) -> usize {
        let mut nodes: FxIndexSet<&N> = FxIndexSet::default();
        for (node, edges) in &self.adjacency {
            nodes.insert(node);
            nodes.extend(edges.keys());
        }
        nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    /// Total weight along a sequence of nodes
    /// None if any consecutive pair is not an edge or the total overflows;
    /// an empty or single node path costs zero
    pub fn path_cost(&self, path: &[N]) -> Option<C>
    where
        C: Cost,
    {
        path.windows(2).try_fold(C::zero(), |total, hop| {
            total.checked_add(self.edge_weight(&hop[0], &hop[1])?)
        })
    }
}

impl<N, C> From<FxIndexMap<N, FxIndexMap<N, C>>> for Graph<N, C>
where
    N: Eq + Hash,
{
    fn from(adjacency: FxIndexMap<N, FxIndexMap<N, C>>) -> Self {
        Graph { adjacency }
    }
}

impl<N, C> FromIterator<(N, N, C)> for Graph<N, C>
where
    N: Eq + Hash + Clone,
    C: Copy,
{
    fn from_iter<I: IntoIterator<Item = (N, N, C)>>(edges: I) -> Self {
        let mut graph = Graph::new();
        graph.extend(edges);
        graph
    }
}

impl<N, C> Extend<(N, N, C)> for Graph<N, C>
where
    N: Eq + Hash + Clone,
    C: Copy,
{
    fn extend<I: IntoIterator<Item = (N, N, C)>>(&mut self, edges: I) {
        for (from, to, weight) in edges {
            self.add_edge(from, to, weight);
        }
    }
}

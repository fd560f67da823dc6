use crate::cost::Cost;
use crate::errors::PathError;
use crate::collections::FxIndexMap;
use crate::graph::Graph;
use super::{CostMap, PredecessorMap, ShortestPaths};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use log::{debug, trace};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};




/// Identify the shortest path from source to destination using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Edge weights must be non-negative
/// Fails with CostOverflow if a path cost can't be represented in C
pub fn find_path<N, C>(graph: &Graph<N, C>, source: N, destination: &N) -> Result<Vec<N>, PathError<N>>
where
    N: Eq + Hash + Clone + Debug,
    C: Cost,
{
    let paths = single_source_shortest_paths(graph, source, Some(destination))?;
    paths.path_to(destination)
}

/// Same as find_path, also returns the total cost of the path
pub fn find_path_with_cost<N, C>(graph: &Graph<N, C>, source: N, destination: &N) -> Result<(Vec<N>, C), PathError<N>>
where
    N: Eq + Hash + Clone + Debug,
    C: Cost,
{
    let paths = single_source_shortest_paths(graph, source, Some(destination))?;
    paths.path_with_cost_to(destination)
}

/// Costs and predecessors of every node reachable from source
/// With a destination the search stops as soon as the destination's cost is final,
/// nodes costing more than the destination may be missing from the result
pub fn single_source_shortest_paths<N, C>(graph: &Graph<N, C>, source: N, destination: Option<&N>) -> Result<ShortestPaths<N, C>, PathError<N>>
where
    N: Eq + Hash + Clone + Debug,
    C: Cost,
{
    single_source_shortest_paths_with(
        source,
        |node: &N| graph.neighbors(node).map(|(neighbor, weight)| (neighbor.clone(), weight)),
        destination,
    )
}

/// single_source_shortest_paths over an implicit graph
/// neighbors returns the outgoing edges of a node with their weights
pub fn single_source_shortest_paths_with<N, C, IT, NN>(source: N, neighbors: NN, destination: Option<&N>) -> Result<ShortestPaths<N, C>, PathError<N>>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Cost,
{
    debug!("Shortest path search from {:?} to {:?}", source, destination);

    let (nodes_map, destination_index) = build_dijkstra_graph(source.clone(), neighbors, destination)?;

    if let Some(destination) = destination {
        if destination_index.is_none() {
            debug!("No path from {:?} to {:?}", source, destination);
            return Err(PathError::NoPath {
                origin: source,
                destination: destination.clone(),
            });
        }
    }

    let (costs, predecessors) = split_node_map(nodes_map);
    debug!("Search from {:?} reached {} nodes", source, costs.len());

    Ok(ShortestPaths::new(source, costs, predecessors))
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns a map of nodes with their parent index and smallest cost,
/// along with the index of the destination if it was settled
/// Stops with CostOverflow as soon as a relaxed cost can't be represented
fn build_dijkstra_graph<N, C, IT, NN>(source: N, neighbors: NN, destination: Option<&N>) -> Result<(FxIndexMap<N, (usize, C)>, Option<usize>), PathError<N>>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Cost,
{

    // Frontier - binary heap sorts Biggest to Smallest, NodeId reverses the order
    // A node can be queued several times, stale entries are skipped when popped
    let mut nodes_to_visit: BinaryHeap<NodeId<C>> = BinaryHeap::new();

    // Every node reached so far, with (parent_index, cost)
    // for the source, parent_index is set to usize::MAX to indicate it has no parent
    let mut nodes_map: FxIndexMap<N, (usize, C)> = FxIndexMap::default();

    let source_index = nodes_map.insert_full(source, (usize::MAX, Zero::zero())).0;
    nodes_to_visit.push(NodeId {
        index: source_index,
        cost: Zero::zero(),
    });

    let mut settled = 0usize;

    // Loop over each node to visit, removing the cheapest node
    while let Some(NodeId { cost, index }) = nodes_to_visit.pop() {

        // fetch current best cost for node
        let Some((node, &(_, c))) = nodes_map.get_index(index) else {
            continue;
        };

        // A cheaper path to this node was queued after this entry
        if cost > c {
            continue;
        }

        settled += 1;
        trace!("Settled {:?} at cost {:?}", node, c);

        // The destination's cost is final once it is popped
        if destination == Some(node) {
            debug!("Reached destination after settling {} nodes", settled);
            return Ok((nodes_map, Some(index)));
        }

        let edges = neighbors(node);

        for (neighbor, edge_cost) in edges {

            // new cost to reach this node = edge cost + node cost
            let Some(new_cost) = c.checked_add(edge_cost) else {
                debug!("Cost of {:?} overflows past {:?}", neighbor, c);
                return Err(PathError::CostOverflow { node: neighbor });
            };

            let neighbor_index = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    // First time we're seeing this neighbor
                    let neighbor_index = e.index();
                    e.insert((index, new_cost));
                    neighbor_index
                }
                Occupied(mut e) => {
                    if new_cost < e.get().1 {
                        // Found a cheaper path to this neighbor
                        e.insert((index, new_cost));
                        e.index()
                    } else {
                        continue;
                    }
                }
            };

            nodes_to_visit.push(NodeId {
                index: neighbor_index,
                cost: new_cost,
            });
        }
    }

    debug!("Frontier exhausted after settling {} nodes", settled);
    Ok((nodes_map, None))
}


/// Split the parent-index map into a cost map and a predecessor map
fn split_node_map<N, C>(nodes_map: FxIndexMap<N, (usize, C)>) -> (CostMap<N, C>, PredecessorMap<N>)
where
    N: Eq + Hash + Clone,
    C: Copy,
{
    let mut predecessors: PredecessorMap<N> = FxIndexMap::default();

    for (node, &(parent_index, _)) in nodes_map.iter() {
        if let Some((parent, _)) = nodes_map.get_index(parent_index) {
            predecessors.insert(node.clone(), parent.clone());
        }
    }

    let costs = nodes_map
        .into_iter()
        .map(|(node, (_, cost))| (node, cost))
        .collect();

    (costs, predecessors)
}


/// Frontier entry
/// - for ordering we only need cost and a way to identify the node
/// - equal costs are popped in discovery order (lower index first)
#[derive(Debug)]
struct NodeId<T> {
    index: usize,
    cost: T
}

impl<T: Ord> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl<T: Ord> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.index == other.index
    }
}
impl<T: PartialEq> Eq for NodeId<T> {}

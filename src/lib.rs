//! Single-source shortest paths over weighted directed graphs with Dijkstra's algorithm,
//! and reconstruction of the cheapest path from the resulting predecessor map.
//!
//! ```
//! use dijkstar::{Graph, find_path};
//!
//! let graph: Graph<&str, u32> = [("a", "b", 1), ("a", "c", 100), ("b", "c", 1)]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(find_path(&graph, "a", &"c").unwrap(), vec!["a", "b", "c"]);
//! ```

pub mod collections;
pub mod cost;
pub mod errors;
pub mod graph;
pub mod graph_algos;

pub use cost::Cost;
pub use errors::PathError;
pub use graph::Graph;
pub use graph_algos::{CostMap, PredecessorMap, ShortestPaths, reconstruct_path};
pub use graph_algos::dijkstra::{
    find_path,
    find_path_with_cost,
    single_source_shortest_paths,
    single_source_shortest_paths_with,
};

use dijkstar::{Graph, PathError, find_path, single_source_shortest_paths};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_graph(rng: &mut StdRng, node_count: usize, edge_count: usize) -> Graph<usize, u64> {
    let mut graph = Graph::new();
    for node in 0..node_count {
        graph.add_node(node);
    }
    for _ in 0..edge_count {
        let from = rng.random_range(0..node_count);
        let to = rng.random_range(0..node_count);
        graph.add_edge(from, to, rng.random_range(0..20));
    }
    graph
}

// Reference costs by repeated relaxation of every edge
fn bellman_ford(graph: &Graph<usize, u64>, node_count: usize, source: usize) -> Vec<Option<u64>> {
    let mut costs = vec![None; node_count];
    costs[source] = Some(0);

    for _ in 0..node_count {
        let mut changed = false;
        for from in 0..node_count {
            let Some(from_cost) = costs[from] else { continue };
            for (&to, weight) in graph.neighbors(&from) {
                let candidate = from_cost + weight;
                if costs[to].is_none_or(|current| candidate < current) {
                    costs[to] = Some(candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    costs
}

#[test]
fn costs_match_bellman_ford() {
    init_log();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let node_count = rng.random_range(1..30);
        let edge_count = rng.random_range(0..node_count * 4);
        let graph = random_graph(&mut rng, node_count, edge_count);
        let source = rng.random_range(0..node_count);

        let paths = single_source_shortest_paths(&graph, source, None).unwrap();
        let expected = bellman_ford(&graph, node_count, source);

        for node in 0..node_count {
            assert_eq!(paths.cost(&node), expected[node], "cost of {node} from {source}");
        }
    }
}

#[test]
fn paths_follow_edges_and_match_costs() {
    init_log();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let node_count = rng.random_range(2..25);
        let edge_count = rng.random_range(0..node_count * 3);
        let graph = random_graph(&mut rng, node_count, edge_count);
        let source = rng.random_range(0..node_count);
        let destination = rng.random_range(0..node_count);

        let expected = bellman_ford(&graph, node_count, source);

        match find_path(&graph, source, &destination) {
            Ok(path) => {
                assert_eq!(path.first(), Some(&source));
                assert_eq!(path.last(), Some(&destination));
                // path_cost is None if any hop is not an edge
                assert_eq!(graph.path_cost(&path), expected[destination]);
            }
            Err(err) => {
                assert_eq!(expected[destination], None);
                assert_eq!(err, PathError::NoPath { origin: source, destination });
            }
        }
    }
}

#[test]
fn early_exit_keeps_destination_cost() {
    init_log();
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..30 {
        let node_count = rng.random_range(2..40);
        let graph = random_graph(&mut rng, node_count, node_count * 3);
        let source = rng.random_range(0..node_count);

        let full = single_source_shortest_paths(&graph, source, None).unwrap();

        for destination in full.costs().keys() {
            let partial = single_source_shortest_paths(&graph, source, Some(destination)).unwrap();
            assert_eq!(partial.cost(destination), full.cost(destination));
        }
    }
}

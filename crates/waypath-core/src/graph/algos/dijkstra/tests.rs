use super::*;
use crate::graph::{build_graph, GraphNode};
use crate::model::{Location, Route};

fn location(id: &str, x: f64, y: f64) -> Location {
    Location {
        id: id.to_string(),
        name: format!("Location {}", id),
        description: None,
        x_coordinate: x,
        y_coordinate: y,
        created_at: None,
    }
}

fn route(from: &str, to: &str, distance: f64) -> Route {
    Route {
        id: format!("rt-{}-{}", from, to),
        from_location_id: from.to_string(),
        to_location_id: to.to_string(),
        distance,
        created_at: None,
    }
}

fn abc_locations() -> Vec<Location> {
    vec![
        location("A", 0.0, 0.0),
        location("B", 3.0, 4.0),
        location("C", 10.0, 10.0),
    ]
}

fn node(id: &str) -> GraphNode {
    GraphNode {
        id: id.to_string(),
        name: id.to_string(),
        x: 0.0,
        y: 0.0,
    }
}

/// Directed graph from explicit edges, without the builder's mirroring
fn directed(ids: &[&str], edges: &[(&str, &str, f64)]) -> Graph {
    let mut graph = Graph::new();
    for id in ids {
        graph.add_node(node(id));
    }
    for (from, to, w) in edges {
        graph.add_edge(from, to, *w).unwrap();
    }
    graph
}

#[test]
fn test_two_hop_path() {
    let graph = build_graph(
        &abc_locations(),
        &[route("A", "B", 5.0), route("B", "C", 5.0)],
    )
    .unwrap();

    let result = graph.dijkstra("A", "C").unwrap();
    assert_eq!(result.path, vec!["A", "B", "C"]);
    assert_eq!(result.distance, 10.0);
    assert_eq!(result.hops(), 2);

    let names: Vec<_> = result.locations.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["Location A", "Location B", "Location C"]);
    assert_eq!(result.locations[1].x, 3.0);
    assert_eq!(result.locations[1].y, 4.0);
}

#[test]
fn test_no_routes_means_no_path() {
    let graph = build_graph(&abc_locations(), &[]).unwrap();

    assert_eq!(graph.shortest_path("A", "C"), PathOutcome::Unreachable);
    assert!(graph.dijkstra("A", "C").is_none());
}

#[test]
fn test_same_start_and_end_without_edges() {
    let graph = build_graph(&abc_locations(), &[]).unwrap();

    let result = graph.dijkstra("A", "A").unwrap();
    assert_eq!(result.path, vec!["A"]);
    assert_eq!(result.distance, 0.0);
    assert_eq!(result.locations.len(), 1);
    assert_eq!(result.hops(), 0);
}

#[test]
fn test_same_start_and_end_unknown_node() {
    let graph = build_graph(&abc_locations(), &[]).unwrap();

    assert_eq!(
        graph.shortest_path("Z", "Z"),
        PathOutcome::UnknownEndpoint("Z".to_string())
    );
}

#[test]
fn test_unknown_endpoints_are_distinguished() {
    let graph = build_graph(&abc_locations(), &[route("A", "B", 1.0)]).unwrap();

    assert_eq!(
        graph.shortest_path("nope", "A"),
        PathOutcome::UnknownEndpoint("nope".to_string())
    );
    assert_eq!(
        graph.shortest_path("A", "nope"),
        PathOutcome::UnknownEndpoint("nope".to_string())
    );
    assert!(graph.dijkstra("A", "nope").is_none());
}

#[test]
fn test_prefers_cheaper_longer_route() {
    let graph = directed(
        &["s", "a", "b", "t"],
        &[
            ("s", "t", 10.0),
            ("s", "a", 1.0),
            ("a", "b", 1.0),
            ("b", "t", 1.0),
        ],
    );

    let result = graph.dijkstra("s", "t").unwrap();
    assert_eq!(result.path, vec!["s", "a", "b", "t"]);
    assert_eq!(result.distance, 3.0);
}

#[test]
fn test_stale_frontier_entries_are_ignored() {
    // "t" is first reached through the expensive direct edge, then improved via "a"
    let graph = directed(
        &["s", "a", "t", "u"],
        &[
            ("s", "t", 9.0),
            ("s", "a", 1.0),
            ("a", "t", 2.0),
            ("t", "u", 1.0),
        ],
    );

    let result = graph.dijkstra("s", "u").unwrap();
    assert_eq!(result.path, vec!["s", "a", "t", "u"]);
    assert_eq!(result.distance, 4.0);
}

#[test]
fn test_respects_edge_direction() {
    let graph = directed(&["a", "b"], &[("a", "b", 2.0)]);

    assert!(graph.dijkstra("a", "b").is_some());
    assert_eq!(graph.shortest_path("b", "a"), PathOutcome::Unreachable);
}

#[test]
fn test_zero_weight_edges() {
    let graph = directed(&["a", "b", "c"], &[("a", "b", 0.0), ("b", "c", 0.0)]);

    let result = graph.dijkstra("a", "c").unwrap();
    assert_eq!(result.path, vec!["a", "b", "c"]);
    assert_eq!(result.distance, 0.0);
}

#[test]
fn test_max_distance_bound() {
    let graph = build_graph(
        &abc_locations(),
        &[route("A", "B", 5.0), route("B", "C", 5.0)],
    )
    .unwrap();

    assert!(graph.shortest_path_within("A", "C", Some(10.0)).is_found());
    assert_eq!(
        graph.shortest_path_within("A", "C", Some(9.99)),
        PathOutcome::Unreachable
    );
    assert!(graph.shortest_path_within("A", "B", Some(9.99)).is_found());
}

#[test]
fn test_disconnected_component() {
    let graph = build_graph(
        &[
            location("A", 0.0, 0.0),
            location("B", 1.0, 0.0),
            location("C", 5.0, 5.0),
            location("D", 6.0, 5.0),
        ],
        &[route("A", "B", 1.0), route("C", "D", 1.0)],
    )
    .unwrap();

    assert_eq!(graph.shortest_path("A", "D"), PathOutcome::Unreachable);
    assert_eq!(graph.dijkstra("D", "C").unwrap().distance, 1.0);
}

/// Deterministic pseudo-random generator for building test graphs
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

fn random_network(seed: u64, size: usize, route_count: usize) -> (Vec<Location>, Vec<Route>) {
    let mut rng = Lcg(seed);
    let locations: Vec<Location> = (0..size)
        .map(|i| location(&format!("n{:02}", i), i as f64, 0.0))
        .collect();
    let routes = (0..route_count)
        .filter_map(|_| {
            let from = (rng.next() as usize) % size;
            let to = (rng.next() as usize) % size;
            let distance = 1.0 + (rng.next() % 20) as f64;
            (from != to).then(|| route(&locations[from].id, &locations[to].id, distance))
        })
        .collect();
    (locations, routes)
}

/// All-pairs distances by Floyd-Warshall, used as an oracle
fn floyd_warshall(graph: &Graph) -> Vec<Vec<f64>> {
    let ids: Vec<String> = graph.nodes().into_iter().map(|n| n.id).collect();
    let n = ids.len();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for i in 0..n {
        dist[i][i] = 0.0;
        for j in 0..n {
            if let Some(w) = graph.weight(&ids[i], &ids[j]) {
                dist[i][j] = dist[i][j].min(w);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if dist[i][k] + dist[k][j] < dist[i][j] {
                    dist[i][j] = dist[i][k] + dist[k][j];
                }
            }
        }
    }
    dist
}

#[test]
fn test_matches_floyd_warshall_oracle() {
    for seed in [1, 7, 42, 2024] {
        let (locations, routes) = random_network(seed, 12, 18);
        let graph = build_graph(&locations, &routes).unwrap();
        let oracle = floyd_warshall(&graph);
        let ids: Vec<String> = graph.nodes().into_iter().map(|n| n.id).collect();

        for (i, from) in ids.iter().enumerate() {
            for (j, to) in ids.iter().enumerate() {
                match graph.shortest_path(from, to) {
                    PathOutcome::Found(result) => {
                        assert!((result.distance - oracle[i][j]).abs() < 1e-9);
                        assert_eq!(result.path.first(), Some(from));
                        assert_eq!(result.path.last(), Some(to));

                        // The reported distance is the sum of the hops taken
                        let summed: f64 = result
                            .path
                            .windows(2)
                            .map(|pair| graph.weight(&pair[0], &pair[1]).unwrap())
                            .sum();
                        assert!((summed - result.distance).abs() < 1e-9);
                    }
                    PathOutcome::Unreachable => assert!(oracle[i][j].is_infinite()),
                    PathOutcome::UnknownEndpoint(id) => panic!("unexpected unknown {}", id),
                }
            }
        }
    }
}

#[test]
fn test_triangle_inequality() {
    let (locations, routes) = random_network(99, 10, 16);
    let graph = build_graph(&locations, &routes).unwrap();
    let ids: Vec<String> = graph.nodes().into_iter().map(|n| n.id).collect();

    let dist = |a: &str, b: &str| graph.dijkstra(a, b).map(|r| r.distance);

    for a in &ids {
        for b in &ids {
            for c in &ids {
                if let (Some(ab), Some(bc), Some(ac)) = (dist(a, b), dist(b, c), dist(a, c)) {
                    assert!(ac <= ab + bc + 1e-9, "{} {} {}", a, b, c);
                }
            }
        }
    }
}

#[test]
fn test_path_is_symmetric_for_built_graphs() {
    let (locations, routes) = random_network(5, 8, 12);
    let graph = build_graph(&locations, &routes).unwrap();

    for a in &locations {
        for b in &locations {
            let forward = graph.dijkstra(&a.id, &b.id).map(|r| r.distance);
            let backward = graph.dijkstra(&b.id, &a.id).map(|r| r.distance);
            assert_eq!(forward, backward);
        }
    }
}

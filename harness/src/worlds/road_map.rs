//! `road_map`: the Romanian road network, undirected, distances in km.

use super::weighted_graph::WeightedGraphV1;

/// `(city, city, km)` for every road.
pub const ROADS: &[(&str, &str, u32)] = &[
    ("Arad", "Zerind", 75),
    ("Arad", "Sibiu", 140),
    ("Arad", "Timisoara", 118),
    ("Zerind", "Oradea", 71),
    ("Oradea", "Sibiu", 151),
    ("Timisoara", "Lugoj", 111),
    ("Lugoj", "Mehadia", 70),
    ("Mehadia", "Drobeta", 75),
    ("Drobeta", "Craiova", 120),
    ("Craiova", "Rimnicu Vilcea", 146),
    ("Craiova", "Pitesti", 138),
    ("Sibiu", "Fagaras", 99),
    ("Sibiu", "Rimnicu Vilcea", 80),
    ("Rimnicu Vilcea", "Pitesti", 97),
    ("Fagaras", "Bucharest", 211),
    ("Pitesti", "Bucharest", 101),
    ("Bucharest", "Giurgiu", 90),
    ("Bucharest", "Urziceni", 85),
    ("Urziceni", "Hirsova", 98),
    ("Hirsova", "Eforie", 86),
    ("Urziceni", "Vaslui", 142),
    ("Vaslui", "Iasi", 92),
    ("Iasi", "Neamt", 87),
];

/// Build the road network as a graph keyed by city name.
#[must_use]
pub fn road_map() -> WeightedGraphV1<&'static str> {
    let mut graph = WeightedGraphV1::new("road_map");
    for &(a, b, km) in ROADS {
        graph.add_undirected_edge(a, b, f64::from(km));
    }
    graph
}

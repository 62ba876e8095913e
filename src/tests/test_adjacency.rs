use std::collections::HashMap;

use approx::assert_relative_eq;

use crate::adjacency::UndirectedAdjacencyList;
use crate::graph::Edge;
use crate::graph_factory::find_k_nearest_neighbors;
use crate::operators::{squared_euclidean_distance, use_weights_of_one, WeightKernel};
use crate::tests::init;
use crate::tests::test_data::make_gaussian;

#[test]
fn test_star_graph_layout() {
    init();
    let edges = vec![Edge::new(0, 1, 1.0), Edge::new(0, 2, 2.0), Edge::new(3, 0, 3.0)];
    let graph = UndirectedAdjacencyList::build(&edges, |e: &Edge| e.distance() * 10.0);

    assert_eq!(graph.size(), 4);
    assert_eq!(graph.nnz(), 6);
    assert_eq!(graph.degree(0), 3);
    assert_eq!((graph.begin(0), graph.end(0)), (0, 3));

    // insertion order is kept
    let hub: Vec<(usize, f32)> = graph.neighbors(0).iter().map(|nb| (nb.index, nb.weight)).collect();
    assert_eq!(hub, vec![(1, 10.0), (2, 20.0), (3, 30.0)]);

    for leaf in 1..4 {
        assert_eq!(graph.degree(leaf), 1);
        assert_eq!(graph.neighbors(leaf)[0].index, 0);
    }
    assert_relative_eq!(graph.weight_sum(0), 60.0);
}

#[test]
fn test_isolated_node_has_empty_block() {
    let edges = vec![Edge::new(0, 2, 1.0), Edge::new(2, 3, 1.0)];
    let graph = UndirectedAdjacencyList::build(&edges, use_weights_of_one);

    assert_eq!(graph.size(), 4);
    assert_eq!(graph.degree(1), 0);
    assert_eq!(graph.begin(1), graph.end(1));
    assert!(graph.neighbors(1).is_empty());
    assert_eq!(graph.weight_sum(1), 0.0);
    assert_eq!(graph.degree(2), 2);
}

#[test]
fn test_degrees_and_weights_match_edge_list() {
    init();
    let samples = make_gaussian(25, 3, 11);
    let edges = find_k_nearest_neighbors(
        &samples,
        |a: &Vec<f64>, b: &Vec<f64>| squared_euclidean_distance(a, b),
        3,
    );
    let kernel = WeightKernel::Gaussian { gamma: 0.7 };
    let graph = UndirectedAdjacencyList::build(&edges, |e: &Edge| kernel.edge_weight(e));

    let mut degree: HashMap<usize, usize> = HashMap::new();
    for e in &edges {
        *degree.entry(e.index1()).or_default() += 1;
        *degree.entry(e.index2()).or_default() += 1;
    }
    assert_eq!(graph.size(), 25);
    assert_eq!(graph.nnz(), 2 * edges.len());
    for i in 0..graph.size() {
        assert_eq!(graph.degree(i), degree.get(&i).copied().unwrap_or(0));
    }

    // Each edge shows up at both endpoints with the same weight
    for e in &edges {
        let w = kernel.edge_weight(e);
        let (a, b) = e.key();
        let at_a: Vec<_> = graph.neighbors(a).iter().filter(|nb| nb.index == b).collect();
        let at_b: Vec<_> = graph.neighbors(b).iter().filter(|nb| nb.index == a).collect();
        assert_eq!(at_a.len(), 1);
        assert_eq!(at_b.len(), 1);
        assert_eq!(at_a[0].weight, w);
        assert_eq!(at_b[0].weight, w);
    }
}

#[test]
fn test_iter_visits_every_node() {
    let edges = vec![Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)];
    let graph = UndirectedAdjacencyList::build(&edges, use_weights_of_one);
    let degrees: Vec<usize> = graph.iter().map(|(_, nbs)| nbs.len()).collect();
    assert_eq!(degrees, vec![1, 2, 1]);
    assert!(!graph.is_empty());
    assert!(UndirectedAdjacencyList::default().is_empty());
}

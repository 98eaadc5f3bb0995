//! End-to-end scenarios over small graphs with a cycle and a fork,
//! run against the public `find_paths` entry point rather than any
//! internal module.

use path_engine::{find_paths, FindPathsOptions, GraphAdapter, NamedNode, Node};
use std::collections::HashMap;
use std::convert::Infallible;

/// A graph adapter backed by a flat triple list, just large enough for
/// these scenarios; production adapters would sit in front of a real
/// triple store.
#[derive(Default)]
struct TestGraph {
    triples: Vec<(NamedNode, NamedNode, Node)>,
}

impl TestGraph {
    fn new(triples: impl IntoIterator<Item = (&'static str, &'static str, &'static str)>) -> Self {
        Self {
            triples: triples
                .into_iter()
                .map(|(s, p, o)| (iri(s), iri(p), Node::Resource(iri(o))))
                .collect(),
        }
    }
}

impl GraphAdapter for TestGraph {
    type Error = Infallible;

    fn forward_neighbors(&self, node: &NamedNode, predicate: &NamedNode) -> Result<Vec<Node>, Self::Error> {
        Ok(self
            .triples
            .iter()
            .filter(|(s, p, _)| s == node && p == predicate)
            .map(|(_, _, o)| o.clone())
            .collect())
    }

    fn reverse_neighbors(&self, node: &NamedNode, predicate: &NamedNode) -> Result<Vec<NamedNode>, Self::Error> {
        Ok(self
            .triples
            .iter()
            .filter(|(_, p, o)| p == predicate && *o == Node::Resource(node.clone()))
            .map(|(s, _, _)| s.clone())
            .collect())
    }
}

fn iri(s: &str) -> NamedNode {
    NamedNode::new_unchecked(s)
}

fn ex_prefixes() -> HashMap<String, String> {
    HashMap::from([("ex".to_owned(), "http://ex.org/".to_owned())])
}

fn friend_cycle() -> TestGraph {
    TestGraph::new([
        ("http://ex.org/A", "http://ex.org/knows", "http://ex.org/B"),
        ("http://ex.org/B", "http://ex.org/knows", "http://ex.org/C"),
        ("http://ex.org/C", "http://ex.org/knows", "http://ex.org/A"),
        ("http://ex.org/A", "http://ex.org/worksAt", "http://ex.org/X"),
    ])
}

fn destinations(paths: &[path_engine::PathWitness]) -> Vec<String> {
    let mut out: Vec<_> = paths.iter().map(|p| p.destination().to_string()).collect();
    out.sort();
    out
}

#[test]
fn single_predicate_yields_one_witness() {
    let paths = find_paths("http://ex.org/A", "ex:knows", &ex_prefixes(), &friend_cycle(), FindPathsOptions::default())
        .unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].len(), 1);
    assert_eq!(paths[0].destination().to_string(), "<http://ex.org/B>");
}

#[test]
fn one_or_more_over_a_cycle_yields_shortest_per_destination() {
    let paths = find_paths("http://ex.org/A", "ex:knows+", &ex_prefixes(), &friend_cycle(), FindPathsOptions::default())
        .unwrap();
    assert_eq!(paths.len(), 3);
    let mut lengths: Vec<_> = paths.iter().map(path_engine::PathWitness::len).collect();
    lengths.sort_unstable();
    assert_eq!(lengths, vec![1, 2, 3]);
}

#[test]
fn zero_or_more_includes_trivial_path() {
    let paths = find_paths("http://ex.org/A", "ex:knows*", &ex_prefixes(), &friend_cycle(), FindPathsOptions::default())
        .unwrap();
    assert_eq!(paths.len(), 4);
    assert!(paths.iter().any(path_engine::PathWitness::is_empty));
}

#[test]
fn reverse_traversal_walks_against_edge_direction() {
    let paths = find_paths("http://ex.org/B", "^ex:knows", &ex_prefixes(), &friend_cycle(), FindPathsOptions::default())
        .unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].destination().to_string(), "<http://ex.org/A>");
    assert_eq!(paths[0].steps()[0].direction, path_engine::Direction::Reverse);
}

#[test]
fn sequence_with_no_matching_two_hop_is_empty() {
    let paths = find_paths(
        "http://ex.org/A",
        "ex:knows/ex:worksAt",
        &ex_prefixes(),
        &friend_cycle(),
        FindPathsOptions::default(),
    )
    .unwrap();
    assert!(paths.is_empty());
}

#[test]
fn alternative_reaches_both_branches() {
    let paths = find_paths(
        "http://ex.org/A",
        "ex:knows | ex:worksAt",
        &ex_prefixes(),
        &friend_cycle(),
        FindPathsOptions::default(),
    )
    .unwrap();
    assert_eq!(destinations(&paths), vec!["<http://ex.org/B>", "<http://ex.org/X>"]);
}

#[test]
fn two_tied_witnesses_to_the_same_destination_both_survive() {
    let graph = TestGraph::new([
        ("http://ex.org/A", "http://ex.org/knows", "http://ex.org/B"),
        ("http://ex.org/B", "http://ex.org/knows", "http://ex.org/C"),
        ("http://ex.org/C", "http://ex.org/knows", "http://ex.org/A"),
        ("http://ex.org/A", "http://ex.org/worksAt", "http://ex.org/X"),
        ("http://ex.org/A", "http://ex.org/knows", "http://ex.org/D"),
        ("http://ex.org/D", "http://ex.org/knows", "http://ex.org/C"),
    ]);
    let paths =
        find_paths("http://ex.org/A", "ex:knows/ex:knows", &ex_prefixes(), &graph, FindPathsOptions::default())
            .unwrap();
    let to_c: Vec<_> = paths.iter().filter(|p| p.destination().to_string() == "<http://ex.org/C>").collect();
    assert_eq!(to_c.len(), 2);
}

#[test]
fn double_inversion_restores_the_original_result_set() {
    let once = find_paths("http://ex.org/A", "ex:knows", &ex_prefixes(), &friend_cycle(), FindPathsOptions::default())
        .unwrap();
    let double_inverted =
        find_paths("http://ex.org/A", "^^ex:knows", &ex_prefixes(), &friend_cycle(), FindPathsOptions::default()).unwrap();
    assert_eq!(destinations(&once), destinations(&double_inverted));
}

#[test]
fn zero_or_one_returns_trivial_and_length_one_paths() {
    let paths = find_paths("http://ex.org/A", "ex:knows?", &ex_prefixes(), &friend_cycle(), FindPathsOptions::default())
        .unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths.iter().any(path_engine::PathWitness::is_empty));
    assert!(paths.iter().any(|p| p.len() == 1));
}

#[test]
fn unreachable_start_node_yields_an_empty_result_not_an_error() {
    let paths = find_paths(
        "http://ex.org/nowhere",
        "ex:knows",
        &ex_prefixes(),
        &friend_cycle(),
        FindPathsOptions::default(),
    )
    .unwrap();
    assert!(paths.is_empty());
}

//! The path explorer — a breadth-first search over the product of the
//! RDF graph and the compiled NFA. This is the heart of the system: an
//! ε-transition advances the NFA state without advancing the graph node
//! or the path; a labeled transition advances both.

use crate::error::PathEvaluationError;
use crate::graph::GraphAdapter;
use crate::label::{Direction, Label};
use crate::nfa::{Nfa, StateId};
use crate::options::FindPathsOptions;
use crate::witness::PathWitness;
use rdf_model::{NamedNode, Node};
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// One unit of BFS work: a graph node, an NFA state, and the path prefix
/// that reached them together.
struct SearchState {
    node: Node,
    nfa_state: StateId,
    path: PathWitness,
}

/// Runs the product-graph BFS from `start` against `nfa` and returns
/// every accepted path witness, unfiltered (the dedup/shorten pass
/// happens afterward, in [`crate::filter`]).
///
/// An unreachable or edge-less `start` is not an error here: the BFS
/// simply explores nothing beyond whatever the ε-closure of the initial
/// state admits, which is exactly the trivial path when the NFA accepts
/// the empty string.
pub(crate) fn explore<G: GraphAdapter>(
    graph: &G,
    start: &NamedNode,
    nfa: &Nfa,
    options: &FindPathsOptions,
) -> Result<Vec<PathWitness>, PathEvaluationError<G::Error>> {
    let closures = nfa.epsilon_closure_table();
    let max_len = options.effective_max_path_length();

    let mut visited: FxHashMap<(Node, StateId), usize> = FxHashMap::default();
    let mut frontier: VecDeque<SearchState> = VecDeque::new();
    let mut accepted = Vec::new();

    let start_node = Node::Resource(graph.node_for_iri(start));
    enqueue_closure(
        start_node.clone(),
        nfa.start(),
        PathWitness::origin(start_node),
        &closures,
        &mut visited,
        &mut frontier,
    );

    while let Some(SearchState { node, nfa_state, path }) = frontier.pop_front() {
        if nfa.is_final(nfa_state) {
            // Emitted, not returned: a longer continuation from here may
            // still be the shortest route to a *different* destination.
            accepted.push(path.clone());
        }

        for (label, target) in nfa.transitions_from(nfa_state) {
            match label {
                Label::Epsilon => {
                    enqueue_closure(
                        node.clone(),
                        *target,
                        path.clone(),
                        &closures,
                        &mut visited,
                        &mut frontier,
                    );
                }
                Label::Predicate(predicate, direction) => {
                    let Some(resource) = node.as_resource() else {
                        continue; // a literal closes the path branch
                    };
                    let next_len = path.len() + 1;
                    if next_len > max_len {
                        if options.max_path_length.is_none() {
                            // The caller asked for "unlimited" but we hit
                            // the built-in safety ceiling; a configured
                            // cap instead just prunes this branch
                            // silently below.
                            return Err(PathEvaluationError::PathLengthExceeded(max_len));
                        }
                        continue;
                    }
                    let neighbors = fetch_neighbors(graph, resource, predicate, *direction)
                        .map_err(PathEvaluationError::GraphAccess)?;
                    for neighbor in neighbors {
                        let extended = path.extend(predicate.clone(), *direction, neighbor.clone());
                        enqueue_closure(
                            neighbor,
                            *target,
                            extended,
                            &closures,
                            &mut visited,
                            &mut frontier,
                        );
                    }
                }
            }
        }
    }

    Ok(accepted)
}

fn fetch_neighbors<G: GraphAdapter>(
    graph: &G,
    resource: &NamedNode,
    predicate: &NamedNode,
    direction: Direction,
) -> Result<Vec<Node>, G::Error> {
    match direction {
        Direction::Forward => graph.forward_neighbors(resource, predicate),
        Direction::Reverse => Ok(graph
            .reverse_neighbors(resource, predicate)?
            .into_iter()
            .map(Node::Resource)
            .collect()),
    }
}

/// Enqueues the ε-closure of `(node, state)`, applying the visited-map
/// rule: a pair is admitted if unseen, or if seen no deeper than the
/// depth it was first recorded at. The `≤` (not `<`) deliberately lets
/// equal-length ties through so that distinct witnesses of the same
/// minimum length both survive to the result filter.
fn enqueue_closure(
    node: Node,
    state: StateId,
    path: PathWitness,
    closures: &[Vec<StateId>],
    visited: &mut FxHashMap<(Node, StateId), usize>,
    frontier: &mut VecDeque<SearchState>,
) {
    let depth = path.len();
    for &closure_state in &closures[state as usize] {
        let key = (node.clone(), closure_state);
        let admitted = match visited.get(&key) {
            Some(&recorded_depth) => depth <= recorded_depth,
            None => true,
        };
        if admitted {
            visited.insert(key, depth);
            frontier.push_back(SearchState {
                node: node.clone(),
                nfa_state: closure_state,
                path: path.clone(),
            });
        }
    }
}

//! Property path evaluation that returns concrete path witnesses rather
//! than a mere reachability boolean.
//!
//! The pipeline is: parse a textual path expression (`path-lang`) into an
//! AST, compile the AST into a Thompson-style NFA, run a product-graph
//! breadth-first search against a caller-supplied [`GraphAdapter`], and
//! dedup-and-shorten the accepted witnesses. This deliberately deviates
//! from standard SPARQL property path semantics, which only ever report
//! whether two nodes are connected.
#![deny(unsafe_code)]

mod compiler;
mod error;
mod explorer;
mod filter;
mod graph;
mod label;
mod nfa;
mod options;
mod witness;

use std::collections::HashMap;

pub use crate::error::PathEvaluationError;
pub use crate::graph::GraphAdapter;
pub use crate::label::Direction;
pub use crate::nfa::{Nfa, StateId};
pub use crate::options::{FindPathsOptions, DEFAULT_SAFETY_DEPTH};
pub use crate::witness::{PathRow, PathWitness, Step};
pub use path_lang::PathExpression;
pub use rdf_model::{NamedNode, Node};

/// Finds every shortest-per-destination path witness from `start_iri`
/// matching `expression` in `graph`.
///
/// `prefixes` maps prefix labels to their namespace IRIs, resolved the
/// same way `path-lang` resolves `prefix:local` names inside `expression`.
/// Parse errors and malformed-IRI errors are reported before any graph
/// access occurs; an unreachable `start_iri` is not an error and simply
/// yields an empty or trivial-only result.
pub fn find_paths<G: GraphAdapter>(
    start_iri: &str,
    expression: &str,
    prefixes: &HashMap<String, String>,
    graph: &G,
    options: FindPathsOptions,
) -> Result<Vec<PathWitness>, PathEvaluationError<G::Error>> {
    let start =
        NamedNode::new(start_iri).map_err(PathEvaluationError::InvalidStartIri)?;
    let expr = path_lang::parse_path(expression, prefixes)?;
    let nfa = compiler::compile(&expr);
    let accepted = explorer::explore(graph, &start, &nfa, &options)?;
    Ok(filter::filter(accepted, &options))
}

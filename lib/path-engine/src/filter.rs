//! The result filter: turns the explorer's raw, unfiltered stream of
//! accepted witnesses into the dedup-and-shorten result set.

use crate::options::FindPathsOptions;
use crate::witness::PathWitness;
use rdf_model::Node;
use rustc_hash::FxHashMap;

/// Applies the dedup-and-shorten policy:
/// 1. Group by destination (a literal groups by its lexical form, via
///    `Node::grouping_key`).
/// 2. Within each group, keep only the shortest predicate count.
/// 3. Discard duplicate witnesses (identical node/predicate sequence).
///
/// Literal destinations are then dropped unless
/// [`FindPathsOptions::include_literal_endpoints`] is set — literals
/// still close off a branch during exploration, but by default are not
/// reported as destinations.
pub(crate) fn filter(paths: Vec<PathWitness>, options: &FindPathsOptions) -> Vec<PathWitness> {
    let mut shortest_per_group: FxHashMap<String, usize> = FxHashMap::default();
    for path in &paths {
        let key = path.destination().grouping_key();
        shortest_per_group
            .entry(key)
            .and_modify(|min| *min = (*min).min(path.len()))
            .or_insert_with(|| path.len());
    }

    let mut seen = FxHashMap::default();
    let mut result = Vec::new();
    for path in paths {
        if !options.include_literal_endpoints && matches!(path.destination(), Node::Literal(_)) {
            continue;
        }
        let key = path.destination().grouping_key();
        if path.len() != shortest_per_group[&key] {
            continue;
        }
        // The dedup key is the (origin, predicate, node) sequence only —
        // not `Direction` — so a forward witness and a reverse witness
        // that name the same nodes and predicates collapse to one, per
        // the data model's `(p_i, n_i)` identity.
        let dedup_key = (
            path.origin_node().clone(),
            path.steps().iter().map(|step| (step.predicate.clone(), step.node.clone())).collect::<Vec<_>>(),
        );
        if seen.insert(dedup_key, ()).is_none() {
            result.push(path);
        }
    }
    result
}

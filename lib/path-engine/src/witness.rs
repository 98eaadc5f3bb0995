use crate::label::Direction;
use rdf_model::{NamedNode, Node};

/// One step of a [`PathWitness`]: the predicate traversed to reach
/// `node`, and the direction it was traversed in.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub predicate: NamedNode,
    pub direction: Direction,
    pub node: Node,
}

/// A concrete walk through the graph accepted by a compiled NFA.
///
/// Invariant: `steps.len() + 1 == nodes().count()`; this is enforced by
/// construction (every [`PathWitness::extend`] call appends exactly one
/// step) rather than checked after the fact.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathWitness {
    origin: Node,
    steps: Vec<Step>,
}

impl PathWitness {
    pub(crate) fn origin(origin: Node) -> Self {
        Self { origin, steps: Vec::new() }
    }

    #[must_use]
    pub(crate) fn extend(&self, predicate: NamedNode, direction: Direction, node: Node) -> Self {
        let mut steps = self.steps.clone();
        steps.push(Step { predicate, direction, node });
        Self { origin: self.origin.clone(), steps }
    }

    /// The predicate count; 0 for a single-node path.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[inline]
    pub fn origin_node(&self) -> &Node {
        &self.origin
    }

    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The final node of the walk — the destination the result filter
    /// groups by.
    #[inline]
    pub fn destination(&self) -> &Node {
        self.steps.last().map_or(&self.origin, |step| &step.node)
    }

    /// All nodes visited, origin first.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        std::iter::once(&self.origin).chain(self.steps.iter().map(|step| &step.node))
    }

    /// Row-oriented serialization: one row per step, `predicate` null
    /// for the origin.
    pub fn to_rows(&self, path_id: u64) -> Vec<PathRow> {
        let mut rows = Vec::with_capacity(self.steps.len() + 1);
        rows.push(PathRow {
            path_id,
            step_index: 0,
            predicate: None,
            node: self.origin.clone(),
        });
        for (index, step) in self.steps.iter().enumerate() {
            rows.push(PathRow {
                path_id,
                step_index: index + 1,
                predicate: Some(step.predicate.clone()),
                node: step.node.clone(),
            });
        }
        rows
    }
}

/// One row of the result-serialization contract.
#[derive(Eq, PartialEq, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathRow {
    pub path_id: u64,
    pub step_index: usize,
    pub predicate: Option<NamedNode>,
    pub node: Node,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iri(s: &str) -> NamedNode {
        NamedNode::new_unchecked(s)
    }

    #[test]
    fn predicate_count_equals_nodes_minus_one() {
        let witness = PathWitness::origin(Node::Resource(iri("http://ex.org/A")))
            .extend(iri("http://ex.org/knows"), Direction::Forward, Node::Resource(iri("http://ex.org/B")));
        assert_eq!(witness.len() + 1, witness.nodes().count());
    }

    #[test]
    fn rows_have_null_predicate_only_at_step_zero() {
        let witness = PathWitness::origin(Node::Resource(iri("http://ex.org/A")))
            .extend(iri("http://ex.org/knows"), Direction::Forward, Node::Resource(iri("http://ex.org/B")));
        let rows = witness.to_rows(0);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].predicate.is_none());
        assert!(rows[1].predicate.is_some());
        assert_eq!(rows[1].step_index, 1);
    }
}

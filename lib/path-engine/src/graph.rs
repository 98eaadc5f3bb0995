use rdf_model::{NamedNode, Node};
use std::error::Error;

/// The capability the path explorer consumes from an RDF triple store.
/// Mirrors `spareval::QueryableDataset`'s shape: an associated `Error`
/// the adapter owns, and read-only lookups the engine never mutates.
///
/// A missing node must yield an empty neighbor sequence rather than an
/// error.
pub trait GraphAdapter {
    type Error: Error + Send + Sync + 'static;

    /// All `o` such that `(node, predicate, o)` is a triple in the graph.
    fn forward_neighbors(
        &self,
        node: &NamedNode,
        predicate: &NamedNode,
    ) -> Result<Vec<Node>, Self::Error>;

    /// All `s` such that `(s, predicate, node)` is a triple in the graph.
    fn reverse_neighbors(
        &self,
        node: &NamedNode,
        predicate: &NamedNode,
    ) -> Result<Vec<NamedNode>, Self::Error>;

    /// The starting-point constructor: resolves an absolute IRI to a
    /// node handle. Does not need to check that the node actually
    /// appears in any triple — an unreachable start is handled by the
    /// explorer simply finding no neighbors, not by this method erroring.
    fn node_for_iri(&self, iri: &NamedNode) -> NamedNode {
        iri.clone()
    }
}

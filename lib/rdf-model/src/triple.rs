use crate::named_node::NamedNode;
use crate::node::Node;
use std::fmt;

/// An RDF triple: `(subject, predicate, object)`. The subject is always
/// a resource; the object may be a literal.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triple {
    pub subject: NamedNode,
    pub predicate: NamedNode,
    pub object: Node,
}

impl Triple {
    #[inline]
    pub fn new(subject: NamedNode, predicate: NamedNode, object: impl Into<Node>) -> Self {
        Self { subject, predicate, object: object.into() }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

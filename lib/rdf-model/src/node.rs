use crate::literal::Literal;
use crate::named_node::NamedNode;
use std::fmt;

/// An RDF graph node: either a walkable IRI resource or a terminal
/// literal. Blank nodes and RDF-star triple terms are not part of this
/// model — the graphs this engine walks are assumed to already be
/// skolemized or otherwise blank-node-free at the adapter boundary.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum Node {
    Resource(NamedNode),
    Literal(Literal),
}

impl Node {
    /// Only resources are walkable; a literal encountered mid-walk closes
    /// that branch of the search.
    #[inline]
    pub fn is_walkable(&self) -> bool {
        matches!(self, Self::Resource(_))
    }

    #[inline]
    pub fn as_resource(&self) -> Option<&NamedNode> {
        match self {
            Self::Resource(node) => Some(node),
            Self::Literal(_) => None,
        }
    }

    /// The key the result filter groups this node by when it is a path
    /// destination.
    pub fn grouping_key(&self) -> String {
        match self {
            Self::Resource(node) => node.as_str().to_owned(),
            Self::Literal(lit) => lit.lexical_form(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resource(node) => node.fmt(f),
            Self::Literal(lit) => lit.fmt(f),
        }
    }
}

impl From<NamedNode> for Node {
    #[inline]
    fn from(node: NamedNode) -> Self {
        Self::Resource(node)
    }
}

impl From<Literal> for Node {
    #[inline]
    fn from(lit: Literal) -> Self {
        Self::Literal(lit)
    }
}

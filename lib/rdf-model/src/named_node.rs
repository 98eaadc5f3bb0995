use oxiri::{Iri, IriParseError};
use std::fmt;

/// An RDF [IRI](https://www.w3.org/TR/rdf11-concepts/#dfn-iri).
///
/// The default string formatter returns an N-Triples compatible representation:
/// ```
/// use rdf_model::NamedNode;
///
/// assert_eq!(
///     "<http://example.com/foo>",
///     NamedNode::new("http://example.com/foo")?.to_string()
/// );
/// # Result::<_, oxiri::IriParseError>::Ok(())
/// ```
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NamedNode {
    iri: String,
}

impl NamedNode {
    /// Builds and validates an RDF IRI.
    pub fn new(iri: impl Into<String>) -> Result<Self, IriParseError> {
        Ok(Self::new_from_iri(Iri::parse(iri.into())?))
    }

    #[inline]
    fn new_from_iri(iri: Iri<String>) -> Self {
        Self::new_unchecked(iri.into_inner())
    }

    /// Builds an RDF IRI from a string without validating it.
    ///
    /// It is the caller's responsibility to ensure that `iri` is a valid IRI.
    /// [`NamedNode::new`] is the safe version of this constructor.
    #[inline]
    pub fn new_unchecked(iri: impl Into<String>) -> Self {
        Self { iri: iri.into() }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.iri.as_str()
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.iri
    }
}

impl fmt::Display for NamedNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.iri)
    }
}

impl PartialEq<str> for NamedNode {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<NamedNode> for str {
    #[inline]
    fn eq(&self, other: &NamedNode) -> bool {
        self == other.as_str()
    }
}

impl From<NamedNode> for String {
    #[inline]
    fn from(node: NamedNode) -> Self {
        node.into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_absolute_iris_only() {
        assert!(NamedNode::new("http://example.com/foo").is_ok());
        assert!(NamedNode::new("not an iri").is_err());
    }

    #[test]
    fn display_is_n_triples_shaped() {
        assert_eq!(
            NamedNode::new("http://example.com/foo").unwrap().to_string(),
            "<http://example.com/foo>"
        );
    }

    #[test]
    fn equality_is_by_iri_string() {
        let a = NamedNode::new_unchecked("http://example.com/foo");
        let b = NamedNode::new_unchecked("http://example.com/foo");
        assert_eq!(a, b);
        assert_eq!(a, *"http://example.com/foo");
    }
}

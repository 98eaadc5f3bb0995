use crate::named_node::NamedNode;
use oxilangtag::{LanguageTag, LanguageTagParseError};
use std::fmt;

/// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#dfn-literal).
///
/// Literals are not walkable: the path explorer only ever observes
/// them as the object of a closing edge. [`Literal::lexical_form`] is the
/// key the result filter groups a literal endpoint by.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal(LiteralContent);

#[derive(Eq, PartialEq, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum LiteralContent {
    Simple { value: String },
    LanguageTagged { value: String, language: String },
    Typed { value: String, datatype: NamedNode },
}

impl Literal {
    #[inline]
    pub fn new_simple(value: impl Into<String>) -> Self {
        Self(LiteralContent::Simple { value: value.into() })
    }

    #[inline]
    pub fn new_typed(value: impl Into<String>, datatype: NamedNode) -> Self {
        Self(LiteralContent::Typed { value: value.into(), datatype })
    }

    pub fn new_language_tagged(
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<Self, LanguageTagParseError> {
        let language = LanguageTag::parse(language.into())?.into_inner().to_ascii_lowercase();
        Ok(Self(LiteralContent::LanguageTagged { value: value.into(), language }))
    }

    /// The literal's lexical value, ignoring datatype or language tag.
    #[inline]
    pub fn value(&self) -> &str {
        match &self.0 {
            LiteralContent::Simple { value }
            | LiteralContent::LanguageTagged { value, .. }
            | LiteralContent::Typed { value, .. } => value,
        }
    }

    #[inline]
    pub fn language(&self) -> Option<&str> {
        match &self.0 {
            LiteralContent::LanguageTagged { language, .. } => Some(language),
            _ => None,
        }
    }

    #[inline]
    pub fn datatype(&self) -> Option<&NamedNode> {
        match &self.0 {
            LiteralContent::Typed { datatype, .. } => Some(datatype),
            _ => None,
        }
    }

    /// The lexical form used to group this literal as a path destination:
    /// paths whose destination is a literal group by the literal's lexical
    /// form. Includes the datatype or language tag so that two literals
    /// with the same text but different types are not conflated.
    pub fn lexical_form(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            LiteralContent::Simple { value } => write!(f, "{value:?}"),
            LiteralContent::LanguageTagged { value, language } => {
                write!(f, "{value:?}@{language}")
            }
            LiteralContent::Typed { value, datatype } => write!(f, "{value:?}^^{datatype}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_form_distinguishes_datatype() {
        let a = Literal::new_simple("1");
        let b = Literal::new_typed("1", NamedNode::new_unchecked("http://www.w3.org/2001/XMLSchema#integer"));
        assert_ne!(a.lexical_form(), b.lexical_form());
    }

    #[test]
    fn language_tag_lowercased() {
        let lit = Literal::new_language_tagged("chat", "EN").unwrap();
        assert_eq!(lit.language(), Some("en"));
    }
}

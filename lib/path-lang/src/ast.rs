use rdf_model::NamedNode;
use std::fmt;

/// A property path expression, as a strictly immutable tree once built.
/// `Group` is kept as its own variant — rather than flattened away
/// during parsing — purely to preserve the surface syntax for
/// [`PathExpression`]'s `Display` impl; it is semantically identity (the
/// Thompson compiler compiles it exactly like its child).
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum PathExpression {
    /// Match a single outgoing edge labeled `iri`.
    Predicate(NamedNode),
    /// Traverse `child` against edge direction.
    Inverse(Box<Self>),
    /// Match `left` then `right`.
    Sequence(Box<Self>, Box<Self>),
    /// Match `left` or `right`.
    Alternative(Box<Self>, Box<Self>),
    /// `child*`
    ZeroOrMore(Box<Self>),
    /// `child+`
    OneOrMore(Box<Self>),
    /// `child?`
    ZeroOrOne(Box<Self>),
    /// A parenthesized sub-expression; semantically identity.
    Group(Box<Self>),
}

impl PathExpression {
    #[inline]
    pub fn predicate(iri: NamedNode) -> Self {
        Self::Predicate(iri)
    }

    #[inline]
    pub fn inverse(self) -> Self {
        Self::Inverse(Box::new(self))
    }

    #[inline]
    pub fn sequence(self, next: Self) -> Self {
        Self::Sequence(Box::new(self), Box::new(next))
    }

    #[inline]
    pub fn alternative(self, other: Self) -> Self {
        Self::Alternative(Box::new(self), Box::new(other))
    }

    #[inline]
    pub fn zero_or_more(self) -> Self {
        Self::ZeroOrMore(Box::new(self))
    }

    #[inline]
    pub fn one_or_more(self) -> Self {
        Self::OneOrMore(Box::new(self))
    }

    #[inline]
    pub fn zero_or_one(self) -> Self {
        Self::ZeroOrOne(Box::new(self))
    }

    #[inline]
    pub fn group(self) -> Self {
        Self::Group(Box::new(self))
    }
}

impl From<NamedNode> for PathExpression {
    #[inline]
    fn from(iri: NamedNode) -> Self {
        Self::Predicate(iri)
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate(p) => p.fmt(f),
            Self::Inverse(p) => write!(f, "^{p}"),
            Self::Sequence(a, b) => write!(f, "{a}/{b}"),
            Self::Alternative(a, b) => write!(f, "{a}|{b}"),
            Self::ZeroOrMore(p) => write!(f, "{p}*"),
            Self::OneOrMore(p) => write!(f, "{p}+"),
            Self::ZeroOrOne(p) => write!(f, "{p}?"),
            Self::Group(p) => write!(f, "({p})"),
        }
    }
}

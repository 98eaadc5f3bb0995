use rdf_model::NamedNode;
use std::fmt;

/// The direction a labeled transition is walked in.
///
/// A naive `"^" + pred` string concatenation double-prefixes under
/// nested `Inverse` nodes. Keeping the direction as its own bit instead
/// of mutating a string means toggling it twice is a no-op by
/// construction, so `^^p == p` holds for free.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    #[inline]
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

/// An NFA transition label: either ε, or a predicate IRI tagged with the
/// direction it is traversed in.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum Label {
    Epsilon,
    Predicate(NamedNode, Direction),
}

impl Label {
    #[inline]
    pub fn forward(predicate: NamedNode) -> Self {
        Self::Predicate(predicate, Direction::Forward)
    }

    /// Flips the direction of a predicate label; ε is never inverted,
    /// since direction is orthogonal to it.
    #[must_use]
    pub fn inverted(self) -> Self {
        match self {
            Self::Epsilon => Self::Epsilon,
            Self::Predicate(p, dir) => Self::Predicate(p, dir.flip()),
        }
    }

    #[inline]
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Self::Epsilon)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Epsilon => f.write_str("ε"),
            Self::Predicate(p, Direction::Forward) => p.fmt(f),
            Self::Predicate(p, Direction::Reverse) => write!(f, "^{p}"),
        }
    }
}

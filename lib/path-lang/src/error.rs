use peg::error::ParseError;
use peg::str::LineCol;

/// Error returned while parsing a property path expression.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct PathSyntaxError {
    #[from]
    kind: PathSyntaxErrorKind,
}

impl PathSyntaxError {
    pub(crate) fn unknown_prefix(prefix: impl Into<String>) -> Self {
        PathSyntaxErrorKind::UnknownPrefix(prefix.into()).into()
    }

    pub(crate) fn malformed_iri(iri: impl Into<String>, reason: rdf_model::IriParseError) -> Self {
        PathSyntaxErrorKind::MalformedIri(iri.into(), reason).into()
    }

    pub(crate) fn syntax(error: ParseError<LineCol>) -> Self {
        PathSyntaxErrorKind::Syntax(error).into()
    }
}

#[derive(Debug, thiserror::Error)]
enum PathSyntaxErrorKind {
    #[error(transparent)]
    Syntax(#[from] ParseError<LineCol>),
    #[error("unknown prefix {0:?}")]
    UnknownPrefix(String),
    #[error("malformed IRI {0:?}: {1}")]
    MalformedIri(String, #[source] rdf_model::IriParseError),
}

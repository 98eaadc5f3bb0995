use std::error::Error;

/// Errors raised while evaluating a property path.
///
/// Syntax, unknown-prefix and malformed-IRI errors are raised by
/// `path-lang` before any graph access happens and surface here as
/// [`PathEvaluationError::Parse`]. An unreachable start node is
/// deliberately not a variant here: it is not fatal, and simply yields an
/// empty result.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PathEvaluationError<E: Error + Send + Sync + 'static> {
    /// The path expression failed to parse.
    #[error(transparent)]
    Parse(#[from] path_lang::PathSyntaxError),
    /// `start_iri` is not a syntactically valid absolute IRI. This is
    /// distinct from a malformed IRI inside the path expression itself,
    /// which `path-lang` reports as part of `Parse`.
    #[error("invalid start IRI: {0}")]
    InvalidStartIri(#[source] rdf_model::IriParseError),
    /// The graph adapter failed; the search is aborted and partial
    /// results are discarded.
    #[error("graph access failed: {0}")]
    GraphAccess(#[source] E),
    /// A search walked past [`crate::options::FindPathsOptions::max_path_length`]
    /// (or the built-in safety ceiling if unset).
    #[error("path length exceeded the configured maximum of {0}")]
    PathLengthExceeded(usize),
}

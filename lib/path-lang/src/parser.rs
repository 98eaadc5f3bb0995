//! Recursive-descent parser for the property path grammar:
//!
//! ```text
//! path       := sequence ('|' sequence)*
//! sequence   := inverse   ('/' inverse)*
//! inverse    := '^'? element
//! element    := primary ('*' | '+' | '?')?
//! primary    := iri | '(' path ')'
//! iri        := '<' ABSOLUTE_URI '>' | prefix ':' localName
//! ```
//!
//! Built with `peg`, the same parser-generator `spargebra::SparqlParser`
//! uses for the full SPARQL grammar this one is a small corner of.

use crate::ast::PathExpression;
use crate::error::PathSyntaxError;
use rdf_model::NamedNode;
use std::cell::RefCell;
use std::collections::HashMap;

/// Resolves prefixed names during parsing and collects the first
/// resolution failure so it can be surfaced as a proper
/// [`PathSyntaxError`] instead of `peg`'s generic "expected" message.
struct ParserState<'a> {
    prefixes: &'a HashMap<String, String>,
    error: RefCell<Option<PathSyntaxError>>,
}

impl ParserState<'_> {
    fn resolve_prefixed(&self, prefix: &str, local: &str) -> Result<NamedNode, &'static str> {
        let Some(namespace) = self.prefixes.get(prefix) else {
            *self.error.borrow_mut() = Some(PathSyntaxError::unknown_prefix(prefix));
            return Err("unknown prefix");
        };
        let mut iri = String::with_capacity(namespace.len() + local.len());
        iri.push_str(namespace);
        iri.push_str(local);
        NamedNode::new(&iri).map_err(|e| {
            *self.error.borrow_mut() = Some(PathSyntaxError::malformed_iri(iri, e));
            "malformed IRI"
        })
    }

    fn resolve_absolute(&self, iri: &str) -> Result<NamedNode, &'static str> {
        NamedNode::new(iri).map_err(|e| {
            *self.error.borrow_mut() = Some(PathSyntaxError::malformed_iri(iri, e));
            "malformed IRI"
        })
    }
}

peg::parser! {
    grammar path_grammar(state: &ParserState<'_>) for str {
        rule _() = quiet!{[' ' | '\t' | '\r' | '\n']*}

        pub rule path() -> PathExpression = _ p:alternative() _ { p }

        rule alternative() -> PathExpression =
            p:sequence() ps:(_ "|" _ p:sequence() { p })* {
                ps.into_iter().fold(p, PathExpression::alternative)
            }

        rule sequence() -> PathExpression =
            p:inverse() ps:(_ "/" _ p:inverse() { p })* {
                ps.into_iter().fold(p, PathExpression::sequence)
            }

        rule inverse() -> PathExpression =
            "^" _ p:element() { p.inverse() } /
            element()

        rule element() -> PathExpression =
            p:primary() op:postfix_op()? {
                match op {
                    Some('*') => p.zero_or_more(),
                    Some('+') => p.one_or_more(),
                    Some('?') => p.zero_or_one(),
                    Some(_) => unreachable!("postfix_op only yields * + ?"),
                    None => p,
                }
            }

        rule postfix_op() -> char = c:['*' | '+' | '?'] { c }

        rule primary() -> PathExpression =
            "(" _ p:alternative() _ ")" { p.group() } /
            n:iri() { PathExpression::predicate(n) }

        rule iri() -> NamedNode =
            "<" s:$((!['>'] [_])*) ">" {? state.resolve_absolute(s) } /
            prefix:prefixed_name_prefix() ":" local:prefixed_name_local() {?
                state.resolve_prefixed(prefix, local)
            }

        rule prefixed_name_prefix() -> &'input str =
            $(pn_char_first() pn_char()*) / $("")

        rule prefixed_name_local() -> &'input str = $(pn_char()+)

        rule pn_char_first() = ['a'..='z' | 'A'..='Z']
        rule pn_char() = ['a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-' | '.']
    }
}

/// Parses a property path expression, resolving prefixed names against
/// `prefixes`.
pub fn parse_path(
    expression: &str,
    prefixes: &HashMap<String, String>,
) -> Result<PathExpression, PathSyntaxError> {
    let state = ParserState { prefixes, error: RefCell::new(None) };
    match path_grammar::path(expression, &state) {
        Ok(expr) => Ok(expr),
        Err(syntax_error) => Err(state
            .error
            .into_inner()
            .unwrap_or_else(|| PathSyntaxError::syntax(syntax_error))),
    }
}

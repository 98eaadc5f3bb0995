//! Minimal RDF term model backing the property path engine.
//!
//! This crate deliberately covers only what the path-finding engine needs
//! to name graph nodes and triples: IRI resources, literals, and the
//! triples that connect them. It is not a general-purpose RDF toolkit —
//! there are no blank nodes, no quads, and no graph/dataset containers.
#![deny(unsafe_code)]

mod literal;
mod named_node;
mod node;
mod triple;

pub use crate::literal::Literal;
pub use crate::named_node::NamedNode;
pub use crate::node::Node;
pub use crate::triple::Triple;
pub use oxilangtag::LanguageTagParseError;
pub use oxiri::IriParseError;

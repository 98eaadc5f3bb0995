//! Thompson construction: compiles a [`PathExpression`] into an [`Nfa`]
//! fragment by fragment. Each call gets its own [`Builder`], so state ids
//! never leak or collide across calls.

use crate::label::Label;
use crate::nfa::{Builder, Nfa, StateId};
use path_lang::PathExpression;
use rustc_hash::FxHashSet;

/// One compiled fragment: a sub-automaton's start state and final states,
/// not yet attached to the overall accept set.
struct Fragment {
    start: StateId,
    finals: Vec<StateId>,
}

/// Compiles `expr` into a complete NFA. The resulting automaton contains
/// no dead states: every state the builder allocates is wired into the
/// fragment that requested it.
pub fn compile(expr: &PathExpression) -> Nfa {
    let mut builder = Builder::new();
    let fragment = compile_fragment(expr, &mut builder);
    builder.finish(fragment.start, fragment.finals.into_iter().collect())
}

fn compile_fragment(expr: &PathExpression, builder: &mut Builder) -> Fragment {
    match expr {
        PathExpression::Predicate(iri) => {
            let s = builder.new_state();
            let f = builder.new_state();
            builder.add_transition(s, Label::forward(iri.clone()), f);
            Fragment { start: s, finals: vec![f] }
        }
        PathExpression::Inverse(child) => {
            // Compiling then inverting the whole fragment, rather than
            // threading a "walk backwards" flag through every other
            // operator, keeps every other arm of this match identical to
            // the non-inverted case. State ids are monotonic, so the
            // states allocated while compiling `child` are exactly the
            // range `[before, builder.state_count())`.
            let before = builder.state_count();
            let fragment = compile_fragment(child, builder);
            builder.invert_labels_in_range(before, builder.state_count());
            fragment
        }
        PathExpression::Sequence(left, right) => {
            let a = compile_fragment(left, builder);
            let b = compile_fragment(right, builder);
            for &fa in &a.finals {
                builder.add_transition(fa, Label::Epsilon, b.start);
            }
            Fragment { start: a.start, finals: b.finals }
        }
        PathExpression::Alternative(left, right) => {
            let a = compile_fragment(left, builder);
            let b = compile_fragment(right, builder);
            let s = builder.new_state();
            builder.add_transition(s, Label::Epsilon, a.start);
            builder.add_transition(s, Label::Epsilon, b.start);
            let finals = a.finals.into_iter().chain(b.finals).collect();
            Fragment { start: s, finals }
        }
        PathExpression::ZeroOrMore(child) => {
            let a = compile_fragment(child, builder);
            let s = builder.new_state();
            let f = builder.new_state();
            builder.add_transition(s, Label::Epsilon, a.start);
            builder.add_transition(s, Label::Epsilon, f);
            for &fa in &a.finals {
                builder.add_transition(fa, Label::Epsilon, a.start);
                builder.add_transition(fa, Label::Epsilon, f);
            }
            Fragment { start: s, finals: vec![f] }
        }
        PathExpression::OneOrMore(child) => {
            let a = compile_fragment(child, builder);
            let f = builder.new_state();
            for &fa in &a.finals {
                builder.add_transition(fa, Label::Epsilon, a.start);
                builder.add_transition(fa, Label::Epsilon, f);
            }
            Fragment { start: a.start, finals: vec![f] }
        }
        PathExpression::ZeroOrOne(child) => {
            let a = compile_fragment(child, builder);
            let s = builder.new_state();
            builder.add_transition(s, Label::Epsilon, a.start);
            for &fa in &a.finals {
                builder.add_transition(s, Label::Epsilon, fa);
            }
            Fragment { start: s, finals: a.finals }
        }
        PathExpression::Group(child) => compile_fragment(child, builder),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdf_model::NamedNode;

    fn iri(s: &str) -> NamedNode {
        NamedNode::new_unchecked(s)
    }

    fn predicate(s: &str) -> PathExpression {
        PathExpression::predicate(iri(s))
    }

    #[test]
    fn predicate_compiles_to_two_states_one_transition() {
        let nfa = compile(&predicate("http://ex.org/knows"));
        assert_eq!(nfa.state_count(), 2);
        assert_eq!(nfa.transitions_from(nfa.start()).len(), 1);
    }

    #[test]
    fn sequence_links_final_of_left_to_start_of_right_by_epsilon() {
        let expr = predicate("http://ex.org/knows").sequence(predicate("http://ex.org/worksAt"));
        let nfa = compile(&expr);
        // state 1 is the final state of the left Predicate fragment.
        let out = nfa.transitions_from(1);
        assert!(out.iter().any(|(label, _)| label.is_epsilon()));
    }

    #[test]
    fn zero_or_more_has_epsilon_bypass_to_final() {
        let expr = predicate("http://ex.org/knows").zero_or_more();
        let nfa = compile(&expr);
        let start_out = nfa.transitions_from(nfa.start());
        assert_eq!(start_out.len(), 2);
        assert!(start_out.iter().all(|(label, _)| label.is_epsilon()));
    }

    #[test]
    fn inverse_flips_the_predicate_direction() {
        let expr = predicate("http://ex.org/knows").inverse();
        let nfa = compile(&expr);
        let (label, _) = &nfa.transitions_from(nfa.start())[0];
        assert_eq!(label.to_string(), "^<http://ex.org/knows>");
    }

    #[test]
    fn double_inverse_restores_forward_direction() {
        let expr = predicate("http://ex.org/knows").inverse().inverse();
        let nfa = compile(&expr);
        let (label, _) = &nfa.transitions_from(nfa.start())[0];
        assert_eq!(label.to_string(), "<http://ex.org/knows>");
    }
}

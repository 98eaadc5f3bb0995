use crate::label::Label;
use rustc_hash::FxHashSet;

/// An NFA state identifier, unique within one compilation.
pub type StateId = u32;

/// A Thompson-style NFA with epsilon transitions.
///
/// Transitions are stored per-state as an insertion-ordered adjacency
/// list: ordering never affects which paths are accepted, but it is kept
/// deterministic so that two calls against the same inputs explore the
/// product graph in the same order.
#[derive(Debug, Clone)]
pub struct Nfa {
    transitions: Vec<Vec<(Label, StateId)>>,
    start: StateId,
    finals: FxHashSet<StateId>,
}

impl Nfa {
    /// Builds an NFA over `state_count` states (0..state_count), from
    /// the fragment a [`crate::compiler::compile`] run produced.
    pub(crate) fn new(
        transitions: Vec<Vec<(Label, StateId)>>,
        start: StateId,
        finals: FxHashSet<StateId>,
    ) -> Self {
        debug_assert!(!finals.is_empty(), "the final-state set must be non-empty");
        debug_assert!(
            finals.iter().all(|&f| (f as usize) < transitions.len()),
            "every final state must exist among the compiled states"
        );
        Self { transitions, start, finals }
    }

    #[inline]
    pub fn start(&self) -> StateId {
        self.start
    }

    #[inline]
    pub fn is_final(&self, state: StateId) -> bool {
        self.finals.contains(&state)
    }

    #[inline]
    pub fn transitions_from(&self, state: StateId) -> &[(Label, StateId)] {
        &self.transitions[state as usize]
    }

    #[inline]
    pub fn state_count(&self) -> usize {
        self.transitions.len()
    }

    /// Produces an inverted copy: same states, start and finals, but
    /// every non-ε transition has its predicate direction flipped.
    /// Because [`Label::inverted`] toggles a direction bit rather than
    /// string-concatenating a marker, `invert(invert(n))` restores the
    /// exact original labels, not merely an equivalent automaton.
    #[must_use]
    pub fn inverted(&self) -> Self {
        let transitions = self
            .transitions
            .iter()
            .map(|edges| {
                edges
                    .iter()
                    .map(|(label, target)| (label.clone().inverted(), *target))
                    .collect()
            })
            .collect();
        Self { transitions, start: self.start, finals: self.finals.clone() }
    }

    /// The ε-closure of every state, indexed by state id.
    ///
    /// This is purely a property of the automaton, independent of any
    /// graph node or path prefix, so it is computed once per `find_paths`
    /// call and reused for every search state the explorer enqueues. The
    /// per-state BFS below tracks its own visited set and therefore
    /// terminates even when the NFA contains an ε-only cycle among
    /// states (e.g. compiling `(p?)*` wires a final state's ε-edge back
    /// to a state that ε-reaches it directly) — termination here does
    /// not depend on the explorer's `(node, state) → depth` pruning.
    pub(crate) fn epsilon_closure_table(&self) -> Vec<Vec<StateId>> {
        (0..self.state_count() as StateId).map(|state| self.epsilon_closure_of(state)).collect()
    }

    fn epsilon_closure_of(&self, start: StateId) -> Vec<StateId> {
        let mut closure = vec![start];
        let mut seen = FxHashSet::from_iter([start]);
        let mut cursor = 0;
        while cursor < closure.len() {
            let state = closure[cursor];
            cursor += 1;
            for (label, target) in self.transitions_from(state) {
                if label.is_epsilon() && seen.insert(*target) {
                    closure.push(*target);
                }
            }
        }
        closure
    }
}

/// Accumulates states and transitions for one Thompson compilation.
/// A fresh [`Builder`] is created per `find_paths` call; state ids are
/// monotonic and never reused within it.
#[derive(Debug, Default)]
pub(crate) struct Builder {
    transitions: Vec<Vec<(Label, StateId)>>,
}

impl Builder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn new_state(&mut self) -> StateId {
        let id = self.transitions.len() as StateId;
        self.transitions.push(Vec::new());
        id
    }

    pub(crate) fn add_transition(&mut self, from: StateId, label: Label, to: StateId) {
        self.transitions[from as usize].push((label, to));
    }

    pub(crate) fn state_count(&self) -> StateId {
        self.transitions.len() as StateId
    }

    /// Flips the direction of every non-ε transition whose *source*
    /// state falls in `[from, to)`. Used to compile `Inverse`: since
    /// state ids are allocated monotonically, a child fragment's
    /// states are exactly the range allocated while compiling it, so
    /// this inverts precisely that fragment without touching sibling
    /// fragments already wired into the builder.
    pub(crate) fn invert_labels_in_range(&mut self, from: StateId, to: StateId) {
        for state in &mut self.transitions[from as usize..to as usize] {
            for (label, _) in state.iter_mut() {
                *label = label.clone().inverted();
            }
        }
    }

    pub(crate) fn finish(self, start: StateId, finals: FxHashSet<StateId>) -> Nfa {
        Nfa::new(self.transitions, start, finals)
    }
}

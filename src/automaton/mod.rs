//! The automaton store: states, alphabet, transition relation, and the
//! mutation primitives operations are built out of.

pub mod closure;
pub mod determinize;
pub mod epsilon;
pub mod equivalence;
pub mod language;
pub mod minimize;
pub mod prune;
pub mod serde_model;

use std::collections::{BTreeMap, BTreeSet};

use crate::error::AutomataError;
use crate::symbol::Symbol;

/// A state label, unique within its owning automaton.
pub type State = String;

/// The name given to the completion sink state.
pub const ERROR_STATE: &str = "Qerror";

/// A finite automaton: the 5-tuple `(Q, Σ, δ, q0, F)`.
///
/// `δ` is a partial mapping; a missing `(state, symbol)` entry means no
/// transition, which is distinct from a transition into a sink state. The
/// initial state is `Option` because [`FiniteAutomaton::discard_state`] can
/// remove `q0`, leaving the automaton in the canonical empty-language
/// transient state until a caller reassigns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiniteAutomaton {
    states: BTreeSet<State>,
    alphabet: BTreeSet<Symbol>,
    transitions: BTreeMap<(State, Symbol), BTreeSet<State>>,
    initial_state: Option<State>,
    accept_states: BTreeSet<State>,
}

impl FiniteAutomaton {
    /// Creates an automaton with a single initial state and no transitions.
    pub fn new(initial_state: impl Into<State>) -> Self {
        let initial_state = initial_state.into();
        let mut states = BTreeSet::new();
        states.insert(initial_state.clone());
        Self {
            states,
            alphabet: BTreeSet::new(),
            transitions: BTreeMap::new(),
            initial_state: Some(initial_state),
            accept_states: BTreeSet::new(),
        }
    }

    /// Builds an automaton directly from a transition table, matching the
    /// `{(state, symbol): {next states}}` shape of the data model.
    pub fn from_transitions<A, I, S>(
        initial_state: impl Into<State>,
        accept_states: A,
        transitions: I,
    ) -> Self
    where
        A: IntoIterator<Item = S>,
        S: Into<State>,
        I: IntoIterator<Item = (State, Symbol, State)>,
    {
        let mut fa = Self::new(initial_state);
        for state in accept_states {
            let state = state.into();
            fa.accept_states.insert(state.clone());
            fa.states.insert(state);
        }
        for (src, sym, dst) in transitions {
            fa.add_transition(src, sym, dst);
        }
        fa
    }

    /// Inserts `dst` into `δ(src, sym)`, registering `src`/`dst` in `Q` and
    /// `sym` in `Σ` as a side effect.
    pub fn add_transition(&mut self, src: impl Into<State>, sym: Symbol, dst: impl Into<State>) {
        let src = src.into();
        let dst = dst.into();
        self.states.insert(src.clone());
        self.states.insert(dst.clone());
        self.alphabet.insert(sym);
        self.transitions
            .entry((src, sym))
            .or_default()
            .insert(dst);
    }

    /// Returns `δ(q, s)`, or the empty set if no transition is recorded.
    #[must_use]
    pub fn transitate(&self, q: &str, s: Symbol) -> BTreeSet<State> {
        self.transitions
            .get(&(q.to_string(), s))
            .cloned()
            .unwrap_or_default()
    }

    /// Returns the states reachable from `q` via any transitions on `s`,
    /// panic-free even when `q` is not `Q` (yields the empty set).
    pub(crate) fn transitions_from(&self, q: &str) -> impl Iterator<Item = (&Symbol, &State)> {
        self.transitions
            .iter()
            .filter(move |((src, _), _)| src == q)
            .flat_map(|((_, sym), dsts)| dsts.iter().map(move |dst| (sym, dst)))
    }

    #[must_use]
    pub fn states(&self) -> &BTreeSet<State> {
        &self.states
    }

    #[must_use]
    pub fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    #[must_use]
    pub fn initial_state(&self) -> Option<&State> {
        self.initial_state.as_ref()
    }

    #[must_use]
    pub fn accept_states(&self) -> &BTreeSet<State> {
        &self.accept_states
    }

    #[must_use]
    pub fn is_accepting(&self, q: &str) -> bool {
        self.accept_states.contains(q)
    }

    /// Every `(state, symbol) -> states` entry, in deterministic order.
    pub fn transitions(&self) -> impl Iterator<Item = (&State, Symbol, &BTreeSet<State>)> {
        self.transitions
            .iter()
            .map(|((src, sym), dsts)| (src, *sym, dsts))
    }

    /// An automaton is deterministic when every `(state, symbol)` pair (for
    /// non-epsilon symbols) maps to at most one state, and no epsilon
    /// transitions remain.
    #[must_use]
    pub fn is_deterministic(&self) -> bool {
        self.transitions.iter().all(|((_, sym), dsts)| {
            if sym.is_epsilon() {
                dsts.is_empty()
            } else {
                dsts.len() <= 1
            }
        })
    }

    /// An automaton is complete when it is deterministic and every
    /// `(state, symbol)` pair in `Q × Σ` has exactly one transition.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_deterministic()
            && self.states.iter().all(|q| {
                self.alphabet
                    .iter()
                    .all(|s| !self.transitate(q, *s).is_empty())
            })
    }

    /// Deep-copies this automaton; the result shares no state with `self`.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Relabels states per `table`. The mapping need not be total: states
    /// absent from `table` keep their original label. `table` must be
    /// injective on its domain, or states will merge.
    pub fn rename_states(&mut self, table: &BTreeMap<State, State>) {
        let rename = |q: &State| table.get(q).cloned().unwrap_or_else(|| q.clone());

        self.states = self.states.iter().map(rename).collect();
        self.initial_state = self.initial_state.as_ref().map(rename);
        self.accept_states = self.accept_states.iter().map(rename).collect();

        let mut transitions = BTreeMap::new();
        for ((src, sym), dsts) in std::mem::take(&mut self.transitions) {
            let src = rename(&src);
            let dsts: BTreeSet<State> = dsts.iter().map(rename).collect();
            transitions
                .entry((src, sym))
                .or_insert_with(BTreeSet::new)
                .extend(dsts);
        }
        self.transitions = transitions;
    }

    /// Renames every state `q` to `prefix‖q`.
    pub fn prefix_state_names(&mut self, prefix: &str) {
        let table = self
            .states
            .iter()
            .map(|q| (q.clone(), format!("{prefix}{q}")))
            .collect();
        self.rename_states(&table);
    }

    /// Renames `q0` to `Q0` and every other state to `Q1`, `Q2`, ... in
    /// ascending order of the states' current labels (an arbitrary but fixed
    /// iteration order, since `states` is a `BTreeSet`).
    pub fn reset_state_names(&mut self) {
        let mut table = BTreeMap::new();
        if let Some(initial) = self.initial_state.clone() {
            table.insert(initial.clone(), "Q0".to_string());
            let mut index = 1;
            for q in &self.states {
                if *q != initial {
                    table.insert(q.clone(), format!("Q{index}"));
                    index += 1;
                }
            }
        } else {
            for (index, q) in self.states.iter().enumerate() {
                table.insert(q.clone(), format!("Q{index}"));
            }
        }
        self.rename_states(&table);
    }

    /// Removes `q` from `Q`, `F`, every `δ` entry sourced at `q`, and every
    /// target set containing `q`. If `q` was `q0`, the initial state becomes
    /// undefined (empty-language, until reassigned).
    pub fn discard_state(&mut self, q: &str) {
        self.states.remove(q);
        self.accept_states.remove(q);
        if self.initial_state.as_deref() == Some(q) {
            self.initial_state = None;
        }
        self.transitions.retain(|(src, _), _| src != q);
        for dsts in self.transitions.values_mut() {
            dsts.remove(q);
        }
        self.transitions.retain(|_, dsts| !dsts.is_empty());
    }

    /// Sets the initial state, inserting it into `Q` if absent. Used to
    /// reassign `q0` after [`Self::discard_state`] or by closure operations
    /// that introduce a fresh start state.
    pub fn set_initial_state(&mut self, q: impl Into<State>) {
        let q = q.into();
        self.states.insert(q.clone());
        self.initial_state = Some(q);
    }

    /// Marks `q` as accepting, validating that it belongs to `Q`.
    pub fn set_accepting(&mut self, q: &str) -> Result<(), AutomataError> {
        if !self.states.contains(q) {
            return Err(AutomataError::UnknownState(q.to_string()));
        }
        self.accept_states.insert(q.to_string());
        Ok(())
    }
}

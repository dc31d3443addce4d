//! Subset-construction determinization.

use std::collections::{BTreeSet, VecDeque};

use super::{FiniteAutomaton, State};

/// Renders a subset of states as a single composite state label, e.g.
/// `{A,B,C}`. Sorted so that the same subset always yields the same label.
fn subset_label(subset: &BTreeSet<State>) -> State {
    if subset.is_empty() {
        return "∅".to_string();
    }
    format!("{{{}}}", subset.iter().cloned().collect::<Vec<_>>().join(","))
}

impl FiniteAutomaton {
    /// Determinizes `self` via subset construction. Performs epsilon-removal
    /// as a prelude if epsilon-transitions remain. The result is
    /// deterministic, with state names reset (`Q0`, `Q1`, ...). Does not
    /// mutate `self`.
    #[must_use]
    pub fn determinize(&self) -> Self {
        let source = if self.alphabet().iter().any(|s| s.is_epsilon()) {
            self.remove_epsilon_transitions()
        } else {
            self.copy()
        };

        let Some(start) = source.initial_state().cloned() else {
            return Self::empty_language(source.alphabet().iter().copied());
        };

        let start_set: BTreeSet<State> = source.epsilon_closure(&start);
        let mut result = FiniteAutomaton::new(subset_label(&start_set));
        if start_set.iter().any(|q| source.is_accepting(q)) {
            result.accept_states.insert(subset_label(&start_set));
        }

        let mut seen = BTreeSet::new();
        seen.insert(start_set.clone());
        let mut worklist = VecDeque::new();
        worklist.push_back(start_set);

        while let Some(subset) = worklist.pop_front() {
            let label = subset_label(&subset);
            for sym in source.alphabet().iter().copied() {
                let union: BTreeSet<State> = subset
                    .iter()
                    .flat_map(|q| source.transitate(q, sym))
                    .collect();
                if union.is_empty() {
                    continue;
                }
                let new_label = subset_label(&union);
                result.add_transition(label.clone(), sym, new_label.clone());
                if seen.insert(union.clone()) {
                    if union.iter().any(|q| source.is_accepting(q)) {
                        result.accept_states.insert(new_label);
                    }
                    worklist.push_back(union);
                }
            }
        }

        result.reset_state_names();
        result
    }
}

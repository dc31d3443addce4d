//! Epsilon-transition removal.

use std::collections::BTreeSet;

use crate::symbol::{Symbol, EPSILON};

use super::{FiniteAutomaton, State};

impl FiniteAutomaton {
    /// Computes the epsilon-closure of `q`: the least fixed point under
    /// `δ(·, ε)`, including `q` itself. Depth-first with a visited set so
    /// epsilon-cycles terminate.
    #[must_use]
    pub fn epsilon_closure(&self, q: &str) -> BTreeSet<State> {
        let epsilon = Symbol::new(EPSILON).expect("epsilon is always a valid symbol");
        let mut closure = BTreeSet::new();
        let mut stack = vec![q.to_string()];
        closure.insert(q.to_string());
        while let Some(state) = stack.pop() {
            for next in self.transitate(&state, epsilon) {
                if closure.insert(next.clone()) {
                    stack.push(next);
                }
            }
        }
        closure
    }

    /// Returns a new automaton with every epsilon-transition eliminated and
    /// its effects folded into the remaining non-epsilon transitions and
    /// accept set. Does not mutate `self`.
    #[must_use]
    pub fn remove_epsilon_transitions(&self) -> Self {
        let mut result = self.copy();
        let epsilon = Symbol::new(EPSILON).expect("epsilon is always a valid symbol");

        let closures: Vec<(State, BTreeSet<State>)> = self
            .states()
            .iter()
            .map(|q| (q.clone(), self.epsilon_closure(q)))
            .collect();

        for (q, closure) in &closures {
            for r in closure {
                for sym in self.alphabet() {
                    if sym.is_epsilon() {
                        continue;
                    }
                    for dst in self.transitate(r, *sym) {
                        result.add_transition(q.clone(), *sym, dst);
                    }
                }
                if self.is_accepting(r) {
                    result.accept_states.insert(q.clone());
                }
            }
        }

        result.transitions.retain(|(_, sym), _| !sym.is_epsilon());
        result.alphabet.remove(&epsilon);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;

    fn sym(c: char) -> Symbol {
        Symbol::new(c).unwrap()
    }

    #[test]
    fn epsilon_closure_follows_chain() {
        let mut fa = FiniteAutomaton::new("A");
        fa.add_transition("A", sym(EPSILON), "B");
        fa.add_transition("B", sym(EPSILON), "C");
        let closure = fa.epsilon_closure("A");
        assert_eq!(
            closure,
            ["A", "B", "C"].iter().map(|s| s.to_string()).collect()
        );
    }

    #[test]
    fn epsilon_closure_tolerates_cycles() {
        let mut fa = FiniteAutomaton::new("A");
        fa.add_transition("A", sym(EPSILON), "B");
        fa.add_transition("B", sym(EPSILON), "A");
        let closure = fa.epsilon_closure("A");
        assert_eq!(closure.len(), 2);
    }

    #[test]
    fn removal_folds_transitions_and_acceptance() {
        let mut fa = FiniteAutomaton::new("A");
        fa.add_transition("A", sym(EPSILON), "B");
        fa.add_transition("B", sym('a'), "C");
        fa.set_accepting("B").unwrap();

        let reduced = fa.remove_epsilon_transitions();
        assert!(reduced.alphabet().iter().all(|s| !s.is_epsilon()));
        assert!(reduced.transitate("A", sym('a')).contains("C"));
        assert!(reduced.is_accepting("A"));
    }
}

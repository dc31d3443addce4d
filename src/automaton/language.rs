//! Sentence evaluation and enumeration.

use std::collections::BTreeSet;

use crate::symbol::Sentence;

use super::{FiniteAutomaton, State};

impl FiniteAutomaton {
    /// Evaluates `w`: starting from `{q0}`, follows `δ` on each symbol of
    /// `w`, accepting iff the resulting state set intersects `F`.
    #[must_use]
    pub fn evaluate(&self, w: &Sentence) -> bool {
        let Some(start) = self.initial_state() else {
            return false;
        };
        let mut current: BTreeSet<State> = BTreeSet::from([start.clone()]);
        for symbol in w.symbols() {
            current = current
                .iter()
                .flat_map(|q| self.transitate(q, *symbol))
                .collect();
            if current.is_empty() {
                return false;
            }
        }
        current.iter().any(|q| self.is_accepting(q))
    }

    /// Enumerates every accepted sentence of length exactly `n`, by
    /// breadth-first expansion over `(state, prefix)` pairs, skipping
    /// epsilon-transitions. Results are deduplicated and lexicographically
    /// ordered.
    #[must_use]
    pub fn gen_sentences(&self, n: usize) -> Vec<Sentence> {
        let Some(start) = self.initial_state().cloned() else {
            return Vec::new();
        };

        let mut frontier: Vec<(State, Sentence)> = vec![(start, Sentence::empty())];
        for _ in 0..n {
            let mut next = Vec::new();
            for (state, prefix) in frontier {
                for sym in self.alphabet().iter().copied() {
                    if sym.is_epsilon() {
                        continue;
                    }
                    for dst in self.transitate(&state, sym) {
                        next.push((dst, prefix.pushed(sym)));
                    }
                }
            }
            frontier = next;
        }

        let sentences: BTreeSet<Sentence> = frontier
            .into_iter()
            .filter(|(state, _)| self.is_accepting(state))
            .map(|(_, sentence)| sentence)
            .collect();

        sentences.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;

    fn sym(c: char) -> Symbol {
        Symbol::new(c).unwrap()
    }

    fn ends_in_b() -> FiniteAutomaton {
        let mut fa = FiniteAutomaton::new("A");
        fa.add_transition("A", sym('a'), "A");
        fa.add_transition("A", sym('b'), "B");
        fa.add_transition("B", sym('a'), "A");
        fa.add_transition("B", sym('b'), "B");
        fa.set_accepting("B").unwrap();
        fa
    }

    #[test]
    fn evaluate_accepts_and_rejects() {
        let fa = ends_in_b();
        assert!(fa.evaluate(&"ab".parse().unwrap()));
        assert!(!fa.evaluate(&"ba".parse().unwrap()));
        assert!(!fa.evaluate(&"".parse().unwrap()));
    }

    #[test]
    fn gen_sentences_enumerates_exact_length() {
        let fa = ends_in_b();
        let sentences = fa.gen_sentences(2);
        assert_eq!(sentences.len(), 2);
        for sentence in &sentences {
            assert!(fa.evaluate(sentence));
            assert_eq!(sentence.symbols().len(), 2);
        }
    }

    #[test]
    fn gen_sentences_zero_length_checks_initial_acceptance() {
        let fa = ends_in_b();
        assert!(fa.gen_sentences(0).is_empty());

        let mut accepts_empty = fa;
        accepts_empty.set_accepting("A").unwrap();
        assert_eq!(accepts_empty.gen_sentences(0), vec![Sentence::empty()]);
    }
}

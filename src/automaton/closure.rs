//! Closure operations: union, concatenation, Kleene star, reversal,
//! completion, complement, intersection, difference.

use std::collections::BTreeSet;

use crate::symbol::Symbol;

use super::{FiniteAutomaton, ERROR_STATE};

impl FiniteAutomaton {
    /// Union of `self` and `other`. Disjoints both operands by prefixing
    /// their state names, wires a fresh start state replicating both
    /// originals' outgoing transitions, and marks it accepting iff either
    /// original start was accepting (preserving epsilon-membership). Result
    /// is an NFA with reset state names. An operand whose initial state is
    /// undefined (see [`FiniteAutomaton::discard_state`]) contributes the
    /// empty language. Does not mutate `self` or `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut a = self.copy();
        let mut b = other.copy();
        a.prefix_state_names("fa1_");
        b.prefix_state_names("fa2_");

        let (a_start, b_start) = match (a.initial_state().cloned(), b.initial_state().cloned()) {
            (Some(a_start), Some(b_start)) => (a_start, b_start),
            (None, None) => {
                let alphabet: BTreeSet<Symbol> =
                    a.alphabet().iter().chain(b.alphabet().iter()).copied().collect();
                return Self::empty_language(alphabet);
            }
            (None, Some(_)) => {
                b.reset_state_names();
                return b;
            }
            (Some(_), None) => {
                a.reset_state_names();
                return a;
            }
        };

        let mut result = a;
        for (src, sym, dsts) in b.transitions() {
            for dst in dsts {
                result.add_transition(src.clone(), sym, dst.clone());
            }
        }
        result.accept_states.extend(b.accept_states.iter().cloned());

        let new_start = "Q0_union";
        result.set_initial_state(new_start);
        for sym in result.alphabet().iter().copied().collect::<Vec<_>>() {
            for dst in result.transitate(&a_start, sym) {
                result.add_transition(new_start, sym, dst);
            }
            for dst in result.transitate(&b_start, sym) {
                result.add_transition(new_start, sym, dst);
            }
        }
        if result.is_accepting(&a_start) || result.is_accepting(&b_start) {
            result.accept_states.insert(new_start.to_string());
        }

        result.reset_state_names();
        result
    }

    /// Concatenation of `self` followed by `other`. For every accept state
    /// of `self`, `other`'s start out-edges are copied onto it; it keeps its
    /// acceptance only if `other`'s start is itself accepting. Result is an
    /// NFA with reset state names. If either operand's initial state is
    /// undefined (its language is empty), the concatenation is empty too.
    /// Does not mutate `self` or `other`.
    #[must_use]
    pub fn concatenate(&self, other: &Self) -> Self {
        let mut a = self.copy();
        let mut b = other.copy();
        a.prefix_state_names("fa1_");
        b.prefix_state_names("fa2_");

        let (Some(_), Some(b_start)) = (a.initial_state(), b.initial_state().cloned()) else {
            let alphabet: BTreeSet<Symbol> =
                a.alphabet().iter().chain(b.alphabet().iter()).copied().collect();
            return Self::empty_language(alphabet);
        };
        let a_accepts = a.accept_states.clone();

        let mut result = a;
        for (src, sym, dsts) in b.transitions() {
            for dst in dsts {
                result.add_transition(src.clone(), sym, dst.clone());
            }
        }

        let b_start_accepting = b.is_accepting(&b_start);
        for f in &a_accepts {
            for sym in result.alphabet().iter().copied().collect::<Vec<_>>() {
                for dst in result.transitate(&b_start, sym) {
                    result.add_transition(f.clone(), sym, dst);
                }
            }
            if !b_start_accepting {
                result.accept_states.remove(f);
            }
        }

        result.accept_states.extend(b.accept_states.iter().cloned());
        result.reset_state_names();
        result
    }

    /// Kleene star of `self`: on a copy, every accept state gets `q0`'s
    /// out-edges copied onto it, and `q0` becomes accepting (to admit the
    /// empty string). If `self`'s initial state is undefined (its language
    /// is empty), the star is the one-string language `{ε}`. Does not
    /// mutate `self`.
    #[must_use]
    pub fn kleene_star(&self) -> Self {
        let mut result = self.copy();
        let Some(start) = result.initial_state().cloned() else {
            let mut empty_star = FiniteAutomaton::new("Q0");
            empty_star.accept_states.insert("Q0".to_string());
            return empty_star;
        };
        let accepts = result.accept_states.clone();

        for f in &accepts {
            for sym in result.alphabet().iter().copied().collect::<Vec<_>>() {
                for dst in result.transitate(&start, sym) {
                    result.add_transition(f.clone(), sym, dst);
                }
            }
        }
        result.accept_states.insert(start);
        result
    }

    /// Reversal of `self`: every transition is flipped, a fresh start
    /// replicates the original accept states' out-edges (now in-edges), and
    /// the sole accept state is the original `q0`. Result has reset state
    /// names. If `self`'s initial state is undefined, its language (and
    /// hence the reversal) is empty. Does not mutate `self`.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let Some(old_start) = self.initial_state().cloned() else {
            return Self::empty_language(self.alphabet().iter().copied());
        };

        let mut result = FiniteAutomaton::new("Q0_reverse");
        for (src, sym, dsts) in self.transitions() {
            for dst in dsts {
                result.add_transition(dst.clone(), sym, src.clone());
            }
        }
        for q in self.states() {
            result.states.insert(q.clone());
        }

        let new_start = "Q0_reverse";
        for f in self.accept_states() {
            for sym in result.alphabet().iter().copied().collect::<Vec<_>>() {
                for dst in result.transitate(f, sym) {
                    result.add_transition(new_start, sym, dst);
                }
            }
        }

        result.accept_states.clear();
        result.accept_states.insert(old_start);
        result.reset_state_names();
        result
    }

    /// Completes `self`: every undefined `(q, s)` transition is routed to
    /// [`ERROR_STATE`], which loops on every symbol. Returns a new automaton;
    /// does not mutate `self`.
    #[must_use]
    pub fn complete(&self) -> Self {
        let mut result = self.copy();
        let alphabet: Vec<Symbol> = result.alphabet().iter().copied().collect();
        let states: Vec<String> = result.states().iter().cloned().collect();
        let mut needs_sink = false;
        for q in &states {
            for sym in &alphabet {
                if result.transitate(q, *sym).is_empty() {
                    needs_sink = true;
                    result.add_transition(q.clone(), *sym, ERROR_STATE);
                }
            }
        }
        if needs_sink {
            for sym in &alphabet {
                result.add_transition(ERROR_STATE, *sym, ERROR_STATE);
            }
        }
        result
    }

    /// Complement of `self`: determinize, complete, then flip the accept
    /// set. Does not mutate `self`.
    #[must_use]
    pub fn complement(&self) -> Self {
        let complete = self.determinize().complete();
        let mut result = complete.copy();
        let flipped: std::collections::BTreeSet<String> = result
            .states()
            .iter()
            .filter(|q| !complete.is_accepting(q))
            .cloned()
            .collect();
        result.accept_states = flipped;
        result
    }

    /// Intersection via De Morgan's law: `A ∩ B = ¬(¬A ∪ ¬B)`. Does not
    /// mutate `self` or `other`.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.complement().union(&other.complement()).complement()
    }

    /// Difference `self \ other = self ∩ ¬other`. Does not mutate `self` or
    /// `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.intersection(&other.complement())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;

    fn sym(c: char) -> Symbol {
        Symbol::new(c).unwrap()
    }

    fn single_symbol_fa(c: char) -> FiniteAutomaton {
        let mut fa = FiniteAutomaton::new("A");
        fa.add_transition("A", sym(c), "B");
        fa.set_accepting("B").unwrap();
        fa
    }

    #[test]
    fn union_accepts_either_language() {
        let a = single_symbol_fa('a');
        let b = single_symbol_fa('b');
        let u = a.union(&b).determinize();
        assert!(u.evaluate(&"a".parse().unwrap()));
        assert!(u.evaluate(&"b".parse().unwrap()));
        assert!(!u.evaluate(&"".parse().unwrap()));
        assert!(!u.evaluate(&"ab".parse().unwrap()));
        assert!(!u.evaluate(&"ba".parse().unwrap()));
    }

    #[test]
    fn concatenation_accepts_exactly_aa() {
        let a = single_symbol_fa('a');
        let cat = a.concatenate(&single_symbol_fa('a')).determinize();
        assert!(cat.evaluate(&"aa".parse().unwrap()));
        assert!(!cat.evaluate(&"a".parse().unwrap()));
        assert!(!cat.evaluate(&"aaa".parse().unwrap()));
    }

    #[test]
    fn kleene_star_accepts_empty_and_repetition() {
        let star = single_symbol_fa('a').kleene_star().determinize();
        assert!(star.evaluate(&"".parse().unwrap()));
        assert!(star.evaluate(&"aaaa".parse().unwrap()));
    }

    #[test]
    fn reverse_of_reverse_preserves_language() {
        let mut fa = FiniteAutomaton::new("A");
        fa.add_transition("A", sym('a'), "B");
        fa.add_transition("B", sym('b'), "C");
        fa.set_accepting("C").unwrap();

        let back = fa.reverse().reverse().determinize();
        let original = fa.determinize();
        assert!(original.is_equivalent(&back));
    }

    #[test]
    fn complement_flips_ends_in_b() {
        let mut fa = FiniteAutomaton::new("A");
        fa.add_transition("A", sym('a'), "A");
        fa.add_transition("A", sym('b'), "B");
        fa.add_transition("B", sym('a'), "A");
        fa.add_transition("B", sym('b'), "B");
        fa.set_accepting("B").unwrap();
        let fa = fa.determinize();

        let complement = fa.complement();
        assert!(complement.evaluate(&"".parse().unwrap()));
        assert!(complement.evaluate(&"a".parse().unwrap()));
        assert!(complement.evaluate(&"aa".parse().unwrap()));
        assert!(!complement.evaluate(&"b".parse().unwrap()));
        assert!(!complement.evaluate(&"ab".parse().unwrap()));
    }

    #[test]
    fn closure_ops_treat_undefined_initial_state_as_empty_language() {
        let mut undefined = single_symbol_fa('a');
        undefined.discard_state("A");
        assert!(undefined.initial_state().is_none());

        let b = single_symbol_fa('b');

        assert!(undefined.union(&b).evaluate(&"b".parse().unwrap()));
        assert!(!undefined.concatenate(&b).evaluate(&"b".parse().unwrap()));
        assert!(undefined.kleene_star().evaluate(&"".parse().unwrap()));
        assert!(!undefined.kleene_star().evaluate(&"a".parse().unwrap()));
        assert!(!undefined.reverse().evaluate(&"".parse().unwrap()));
    }
}

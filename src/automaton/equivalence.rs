//! Language equivalence.
//!
//! Testing only `A ∩ ¬B = ∅` is not symmetric in general (it misses the
//! case where `B` accepts something `A` doesn't), so equivalence checks
//! both directions.

use super::FiniteAutomaton;

impl FiniteAutomaton {
    /// `self ≡ other` iff both `self ∩ ¬other` and `¬self ∩ other` have
    /// empty language, tested via `is_dead(q0)` on each intersection after
    /// pruning. Does not mutate `self` or `other`.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self) -> bool {
        has_empty_language(&self.intersection(&other.complement()))
            && has_empty_language(&other.intersection(&self.complement()))
    }
}

fn has_empty_language(fa: &FiniteAutomaton) -> bool {
    match fa.initial_state() {
        None => true,
        Some(start) => fa.is_dead(start),
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
        fa.determinize()
    }

    #[test]
    fn identity_is_equivalent() {
        let fa = single_symbol_fa('a');
        assert!(fa.is_equivalent(&fa));
    }

    #[test]
    fn distinct_languages_are_not_equivalent() {
        let a = single_symbol_fa('a');
        let b = single_symbol_fa('b');
        assert!(!a.is_equivalent(&b));
    }

    #[test]
    fn union_identity_law() {
        let fa = single_symbol_fa('a');
        let union = fa.union(&fa).determinize();
        assert!(union.is_equivalent(&fa));
    }

    #[test]
    fn difference_of_identical_languages_is_empty() {
        let fa = single_symbol_fa('a');
        let diff = fa.difference(&fa);
        assert!(has_empty_language(&diff.determinize()));
    }

    #[test]
    fn de_morgan_identity() {
        let a = single_symbol_fa('a');
        let b = single_symbol_fa('b');
        let lhs = a.union(&b).determinize().complement();
        let rhs = a.complement().intersection(&b.complement());
        assert!(lhs.is_equivalent(&rhs));
    }
}

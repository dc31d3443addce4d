mod support;

use support::{ends_in_b, sentence, single_symbol_automaton};

// Union of {"a"} and {"b"}.
#[test]
fn scenario_union() {
    let a = single_symbol_automaton('a');
    let b = single_symbol_automaton('b');
    let u = a.union(&b);
    assert!(u.evaluate(&sentence("a")));
    assert!(u.evaluate(&sentence("b")));
    assert!(!u.evaluate(&sentence("")));
    assert!(!u.evaluate(&sentence("ab")));
    assert!(!u.evaluate(&sentence("ba")));
}

// Concatenation of {"a"} and {"a"} accepts exactly "aa".
#[test]
fn scenario_concatenation() {
    let a = single_symbol_automaton('a');
    let concat = a.concatenate(&a);
    assert!(concat.evaluate(&sentence("aa")));
    assert!(!concat.evaluate(&sentence("a")));
    assert!(!concat.evaluate(&sentence("aaa")));
}

// Complement of "ends in b".
#[test]
fn scenario_complement() {
    let n = ends_in_b();
    let complement = n.complement();
    assert!(complement.evaluate(&sentence("")));
    assert!(complement.evaluate(&sentence("a")));
    assert!(complement.evaluate(&sentence("aa")));
    assert!(!complement.evaluate(&sentence("b")));
    assert!(!complement.evaluate(&sentence("ab")));
}

// Involutions — reverse(reverse(N)) and complement(complement(N)).
#[test]
fn property_involutions() {
    let n = ends_in_b();
    let dfa = n.determinize();
    assert!(dfa.reverse().reverse().is_equivalent(&dfa));

    let complete = dfa.complete();
    assert!(complete.complement().complement().is_equivalent(&complete));
}

// Identity laws: union/intersection with self, difference from self.
#[test]
fn property_identity_laws() {
    let n = ends_in_b();
    assert!(n.union(&n).is_equivalent(&n));
    assert!(n.intersection(&n).is_equivalent(&n));

    let diff = n.difference(&n);
    assert!(!diff.evaluate(&sentence("ab")));
    assert!(!diff.evaluate(&sentence("")));
}

// De Morgan: complement(union(A, B)) == intersection(complement(A), complement(B)).
#[test]
fn property_de_morgan() {
    let a = single_symbol_automaton('a').complete();
    let b = single_symbol_automaton('b').complete();

    let lhs = a.union(&b).complement();
    let rhs = a.complement().intersection(&b.complement());
    assert!(lhs.is_equivalent(&rhs));
}

// A closure op applied to an operand with an undefined initial state (the
// post-discard_state empty-language transient) treats that operand as the
// empty language rather than panicking.
#[test]
fn closure_ops_tolerate_undefined_initial_state() {
    let mut undefined = single_symbol_automaton('a');
    undefined.discard_state("Q0");
    assert!(undefined.initial_state().is_none());

    let b = single_symbol_automaton('b');

    let u = undefined.union(&b);
    assert!(u.evaluate(&sentence("b")));
    assert!(!u.evaluate(&sentence("a")));

    let cat = undefined.concatenate(&b);
    assert!(!cat.evaluate(&sentence("b")));
    assert!(!cat.evaluate(&sentence("")));

    let star = undefined.kleene_star();
    assert!(star.evaluate(&sentence("")));
    assert!(!star.evaluate(&sentence("a")));

    let rev = undefined.reverse();
    assert!(!rev.evaluate(&sentence("a")));
    assert!(!rev.evaluate(&sentence("")));
}

#[test]
fn union_with_undefined_operand_keeps_defined_operands_language() {
    let mut undefined = single_symbol_automaton('a');
    undefined.discard_state("Q0");

    let b = single_symbol_automaton('b');
    let u = b.union(&undefined);
    assert!(u.evaluate(&sentence("b")));
    assert!(!u.evaluate(&sentence("a")));
}

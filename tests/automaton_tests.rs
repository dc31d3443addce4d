mod support;

use relang::automaton::FiniteAutomaton;
use relang::symbol::Symbol;
use support::ends_in_b;

// Alphabet well-formedness after epsilon removal.
#[test]
fn property_alphabet_excludes_epsilon_after_removal() {
    let mut fa = FiniteAutomaton::new("A");
    fa.add_transition("A", Symbol::new('&').unwrap(), "B");
    fa.add_transition("B", Symbol::new('a').unwrap(), "B");
    fa.set_accepting("B").unwrap();

    let stripped = fa.remove_epsilon_transitions();
    assert!(stripped.alphabet().iter().all(|s| !s.is_epsilon()));
}

// Exact-length sentence enumeration matches evaluation.
#[test]
fn property_enumeration_matches_evaluation() {
    let n = ends_in_b();
    let generated = n.gen_sentences(3);
    assert!(!generated.is_empty());
    for sentence in &generated {
        assert!(n.evaluate(sentence));
        assert_eq!(sentence.symbols().len(), 3);
    }
}

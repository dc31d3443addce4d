mod support;

use relang::grammar::RegularGrammar;
use support::sentence;

// S -> aS | bA, A -> bA | &.
#[test]
fn scenario_grammar_evaluation() {
    let rg = RegularGrammar::parse("S -> aS | bA\nA -> bA | &").unwrap();
    let fa = rg.to_fa().determinize();
    assert!(fa.evaluate(&sentence("abb")));
    assert!(!fa.evaluate(&sentence("ba")));
    assert!(!fa.evaluate(&sentence("")));
}

// Grammar <-> NFA round trip.
#[test]
fn property_grammar_nfa_round_trip() {
    let rg = RegularGrammar::parse("S -> aS | bA\nA -> bA | &").unwrap();
    let fa = rg.to_fa();
    let rg2 = RegularGrammar::from_fa(&fa).unwrap();
    assert!(fa.is_equivalent(&rg2.to_fa()));
}

//! Shared helpers for the integration test suite.
//!
//! Not every test file uses every helper; each `tests/*.rs` file is its own
//! crate, so per-file dead-code warnings here are expected noise.
#![allow(dead_code)]

use relang::automaton::FiniteAutomaton;
use relang::symbol::Symbol;

pub fn sym(c: char) -> Symbol {
    Symbol::new(c).unwrap()
}

pub fn sentence(s: &str) -> relang::Sentence {
    s.parse().unwrap()
}

pub fn single_symbol_automaton(c: char) -> FiniteAutomaton {
    let mut fa = FiniteAutomaton::new("Q0");
    fa.add_transition("Q0", sym(c), "Q1");
    fa.set_accepting("Q1").unwrap();
    fa
}

pub fn ends_in_b() -> FiniteAutomaton {
    let mut fa = FiniteAutomaton::new("A");
    fa.add_transition("A", sym('a'), "A");
    fa.add_transition("A", sym('b'), "B");
    fa.add_transition("B", sym('a'), "A");
    fa.add_transition("B", sym('b'), "B");
    fa.set_accepting("B").unwrap();
    fa
}

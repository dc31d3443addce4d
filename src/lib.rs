//! A toolkit for constructing and analyzing regular languages through
//! three equivalent representations: regular grammars, finite automata
//! (with explicit NFA/ε-transition support), and regular expressions with
//! extended operators (`|`, `.`, `*`, `?`).
//!
//! The three representations interconvert ([`grammar::RegularGrammar`] ↔
//! [`automaton::FiniteAutomaton`] ↔ regex), and the automaton carries the
//! full suite of closure operations (union, concatenation, Kleene star,
//! reversal, completion, complement, intersection, difference),
//! determinization, Hopcroft minimization, and equivalence testing.

pub mod automaton;
pub mod error;
pub mod grammar;
pub mod regex;
pub mod symbol;

pub use automaton::FiniteAutomaton;
pub use error::AutomataError;
pub use grammar::RegularGrammar;
pub use symbol::{Sentence, Symbol};

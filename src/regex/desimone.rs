//! De Simone's construction: building a deterministic automaton directly
//! from a [`StitchedTree`], without an intermediate NFA.
//!
//! Each DFA state is a *composition*: the set of leaves (and possibly λ,
//! the acceptance marker) reachable from some starting point. The initial
//! composition is `reachable_symbols(root, DOWN)`. From a composition,
//! reading symbol `c` moves to the union, over every leaf in the
//! composition labelled `c`, of `reachable_symbols(leaf, UP)`. Compositions
//! containing λ are accepting.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use indexmap::IndexMap;

use crate::automaton::FiniteAutomaton;
use crate::symbol::Symbol;

use super::stitch::{Direction, Reachable, StitchedTree};

type Composition = BTreeSet<Reachable>;

/// Compiles a stitched parse tree into a deterministic [`FiniteAutomaton`].
#[must_use]
pub fn build(tree: &StitchedTree) -> FiniteAutomaton {
    let alphabet = tree.alphabet();
    let initial = tree.reachable_symbols(tree.root(), Direction::Down);

    let mut names: IndexMap<Composition, String> = IndexMap::new();
    names.insert(initial.clone(), "Q0".to_string());

    let mut transitions: BTreeMap<(String, Symbol), BTreeSet<String>> = BTreeMap::new();
    let mut accept_states: BTreeSet<String> = BTreeSet::new();
    if initial.contains(&None) {
        accept_states.insert("Q0".to_string());
    }

    let mut worklist = VecDeque::from([initial]);
    while let Some(composition) = worklist.pop_front() {
        let from_name = names.get(&composition).expect("enqueued with a name").clone();
        for &symbol in &alphabet {
            let next = step(tree, &composition, symbol);
            if next.is_empty() {
                continue;
            }
            let to_name = if let Some(existing) = names.get(&next) {
                existing.clone()
            } else {
                let name = format!("Q{}", names.len());
                names.insert(next.clone(), name.clone());
                if next.contains(&None) {
                    accept_states.insert(name.clone());
                }
                worklist.push_back(next.clone());
                name
            };
            transitions
                .entry((from_name.clone(), symbol))
                .or_default()
                .insert(to_name);
        }
    }

    FiniteAutomaton::from_transitions(
        "Q0",
        accept_states,
        transitions
            .into_iter()
            .flat_map(|((from, sym), tos)| tos.into_iter().map(move |to| (from.clone(), sym, to))),
    )
}

fn step(tree: &StitchedTree, composition: &Composition, symbol: Symbol) -> Composition {
    let mut next = BTreeSet::new();
    for leaf in composition.iter().filter_map(|r| *r) {
        if tree.symbol_of(leaf) == Some(symbol) {
            next.extend(tree.reachable_symbols(leaf, Direction::Up));
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regex::{ast::Ast, parser::parse, lexer::lex};
    use crate::symbol::Sentence;

    fn automaton(src: &str) -> FiniteAutomaton {
        let ast: Ast = parse(&lex(src).unwrap()).unwrap();
        let tree = StitchedTree::build(&ast);
        build(&tree)
    }

    fn sentence(src: &str) -> Sentence {
        src.parse().unwrap()
    }

    #[test]
    fn single_symbol_accepts_exactly_that_symbol() {
        let fa = automaton("a");
        assert!(fa.evaluate(&sentence("a")));
        assert!(!fa.evaluate(&sentence("")));
        assert!(!fa.evaluate(&sentence("aa")));
    }

    #[test]
    fn union_accepts_either_branch() {
        let fa = automaton("a|b");
        assert!(fa.evaluate(&sentence("a")));
        assert!(fa.evaluate(&sentence("b")));
        assert!(!fa.evaluate(&sentence("c")));
    }

    #[test]
    fn concatenation_accepts_exactly_the_sequence() {
        let fa = automaton("a.b");
        assert!(fa.evaluate(&sentence("ab")));
        assert!(!fa.evaluate(&sentence("a")));
        assert!(!fa.evaluate(&sentence("ba")));
    }

    #[test]
    fn kleene_star_accepts_empty_and_repetition() {
        let fa = automaton("a*");
        assert!(fa.evaluate(&sentence("")));
        assert!(fa.evaluate(&sentence("aaaa")));
        assert!(!fa.evaluate(&sentence("aab")));
    }

    #[test]
    fn option_accepts_empty_and_one() {
        let fa = automaton("a?");
        assert!(fa.evaluate(&sentence("")));
        assert!(fa.evaluate(&sentence("a")));
        assert!(!fa.evaluate(&sentence("aa")));
    }

    #[test]
    fn spec_example_regex_accepts_expected_language() {
        let fa = automaton("a*.(b?.c|d)*");
        for accepted in ["", "c", "d", "bc", "aaac", "dcd", "bcd", "ac"] {
            assert!(fa.evaluate(&sentence(accepted)), "expected {accepted:?} accepted");
        }
        for rejected in ["b", "ab", "cb"] {
            assert!(!fa.evaluate(&sentence(rejected)), "expected {rejected:?} rejected");
        }
    }

    #[test]
    fn result_is_deterministic_by_construction() {
        let fa = automaton("a*.(b?.c|d)*");
        assert!(fa.is_deterministic());
    }
}

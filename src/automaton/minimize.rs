//! Minimization by Hopcroft-style partition refinement.

use std::collections::BTreeSet;

use crate::error::AutomataError;

use super::{FiniteAutomaton, State};

type Block = BTreeSet<State>;

impl FiniteAutomaton {
    /// Minimizes a deterministic automaton. Fails with
    /// [`AutomataError::MustBeDeterministic`] if `self` is not deterministic.
    ///
    /// Pipeline: remove unreachable states, remove dead states (returning the
    /// canonical empty-language automaton if `q0` is discarded), complete the
    /// result, then refine partitions until stable. Does not mutate `self`.
    pub fn minimize(&self) -> Result<Self, AutomataError> {
        if !self.is_deterministic() {
            return Err(AutomataError::MustBeDeterministic);
        }

        let pruned = self.remove_unreachable_states().remove_dead_states();
        if pruned.initial_state().is_none() {
            return Ok(pruned);
        }
        let complete = pruned.complete();
        Ok(refine(&complete))
    }
}

fn refine(fa: &FiniteAutomaton) -> FiniteAutomaton {
    let accepting: Block = fa.accept_states().clone();
    let rejecting: Block = fa
        .states()
        .iter()
        .filter(|q| !accepting.contains(*q))
        .cloned()
        .collect();

    let mut partitions: Vec<Block> = Vec::new();
    if !accepting.is_empty() {
        partitions.push(accepting.clone());
    }
    if !rejecting.is_empty() {
        partitions.push(rejecting);
    }

    let mut worklist: Vec<Block> = Vec::new();
    if !accepting.is_empty() {
        worklist.push(accepting);
    }

    while let Some(a) = worklist.pop() {
        for sym in fa.alphabet().iter().copied() {
            let x: Block = fa
                .states()
                .iter()
                .filter(|q| !fa.transitate(q, sym).is_disjoint(&a))
                .cloned()
                .collect();
            if x.is_empty() {
                continue;
            }

            let mut next_partitions = Vec::with_capacity(partitions.len() + 1);
            for y in partitions.drain(..) {
                let in_x: Block = y.intersection(&x).cloned().collect();
                let out_x: Block = y.difference(&x).cloned().collect();
                if in_x.is_empty() || out_x.is_empty() {
                    next_partitions.push(y);
                    continue;
                }
                if let Some(pos) = worklist.iter().position(|w| *w == y) {
                    worklist.remove(pos);
                    worklist.push(in_x.clone());
                    worklist.push(out_x.clone());
                } else if in_x.len() <= out_x.len() {
                    worklist.push(in_x.clone());
                } else {
                    worklist.push(out_x.clone());
                }
                next_partitions.push(in_x);
                next_partitions.push(out_x);
            }
            partitions = next_partitions;
        }
    }

    merge_partitions(fa, partitions)
}

fn block_name(block: &Block) -> State {
    format!("{{{}}}", block.iter().cloned().collect::<Vec<_>>().join(","))
}

fn merge_partitions(fa: &FiniteAutomaton, partitions: Vec<Block>) -> FiniteAutomaton {
    let owner = |q: &str| -> State {
        partitions
            .iter()
            .find(|block| block.contains(q))
            .map(block_name)
            .expect("every state belongs to exactly one partition block")
    };

    let start = owner(fa.initial_state().expect("caller checked initial_state"));
    let mut result = FiniteAutomaton::new(start);

    for block in &partitions {
        let name = block_name(block);
        let representative = block.iter().next().expect("blocks are never empty");
        if fa.is_accepting(representative) {
            result.accept_states.insert(name.clone());
            result.states.insert(name);
        } else {
            result.states.insert(name);
        }
    }

    for block in &partitions {
        let representative = block.iter().next().expect("blocks are never empty");
        let from = block_name(block);
        for sym in fa.alphabet().iter().copied() {
            for dst in fa.transitate(representative, sym) {
                result.add_transition(from.clone(), sym, owner(&dst));
            }
        }
    }

    result.reset_state_names();
    result
}

//! The JSON data-model boundary: `{initial_state, accept_states,
//! transitions}` where each transition is `{previous_state, symbol,
//! next_states}`.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::AutomataError;
use crate::symbol::Symbol;

use super::{FiniteAutomaton, State};

#[derive(Debug, Serialize, Deserialize)]
struct TransitionDto {
    previous_state: State,
    symbol: char,
    next_states: Vec<State>,
}

/// Serializable data-transfer shape for a [`FiniteAutomaton`], matching the
/// wire format external collaborators (CLI, GUI) exchange with the core.
#[derive(Debug, Serialize, Deserialize)]
pub struct AutomatonDto {
    initial_state: State,
    accept_states: Vec<State>,
    transitions: Vec<TransitionDto>,
}

impl TryFrom<&FiniteAutomaton> for AutomatonDto {
    type Error = AutomataError;

    /// Fails only if `q0` is undefined (the transient post-`discard_state`
    /// empty-language state has no canonical JSON form).
    fn try_from(fa: &FiniteAutomaton) -> Result<Self, Self::Error> {
        let initial_state = fa
            .initial_state()
            .cloned()
            .ok_or_else(|| AutomataError::UnknownState("<none>".to_string()))?;

        let transitions = fa
            .transitions()
            .map(|(src, sym, dsts)| TransitionDto {
                previous_state: src.clone(),
                symbol: sym.value(),
                next_states: dsts.iter().cloned().collect(),
            })
            .collect();

        Ok(AutomatonDto {
            initial_state,
            accept_states: fa.accept_states().iter().cloned().collect(),
            transitions,
        })
    }
}

impl TryFrom<AutomatonDto> for FiniteAutomaton {
    type Error = AutomataError;

    /// Rejects a transition naming a symbol outside the alphabet (surfaced
    /// as [`AutomataError::InvalidSymbol`]) and rejects an `accept_states`
    /// entry that names a state not otherwise declared as `initial_state`
    /// or as a `previous_state`/`next_states` entry of some transition
    /// (surfaced as [`AutomataError::UnknownState`]) — per the invariant
    /// `F ⊆ Q`, an accept state must actually be a state of the automaton.
    fn try_from(dto: AutomatonDto) -> Result<Self, Self::Error> {
        let mut declared: BTreeSet<State> = BTreeSet::new();
        declared.insert(dto.initial_state.clone());
        for transition in &dto.transitions {
            declared.insert(transition.previous_state.clone());
            declared.extend(transition.next_states.iter().cloned());
        }
        if let Some(dangling) = dto.accept_states.iter().find(|s| !declared.contains(*s)) {
            return Err(AutomataError::UnknownState(dangling.clone()));
        }

        let mut fa = FiniteAutomaton::new(dto.initial_state);
        for state in dto.accept_states {
            fa.states.insert(state.clone());
            fa.accept_states.insert(state);
        }
        for transition in dto.transitions {
            let symbol = Symbol::new(transition.symbol)?;
            for next in transition.next_states {
                fa.add_transition(transition.previous_state.clone(), symbol, next);
            }
        }
        Ok(fa)
    }
}

impl FiniteAutomaton {
    /// Serializes this automaton to JSON via [`AutomatonDto`].
    pub fn to_json(&self) -> Result<String, AutomataError> {
        let dto = AutomatonDto::try_from(self)?;
        serde_json::to_string_pretty(&dto)
            .map_err(|e| AutomataError::MalformedGrammar(e.to_string()))
    }

    /// Deserializes an automaton from JSON via [`AutomatonDto`].
    pub fn from_json(json: &str) -> Result<Self, AutomataError> {
        let dto: AutomatonDto = serde_json::from_str(json)
            .map_err(|e| AutomataError::MalformedGrammar(e.to_string()))?;
        FiniteAutomaton::try_from(dto)
    }
}

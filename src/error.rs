//! Error types returned at the boundary of every fallible operation.
//!
//! The core never logs; failures are always surfaced as one of the variants
//! below, carrying the offending fragment.

use thiserror::Error;

/// Errors produced while constructing or operating on the data model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AutomataError {
    /// A character outside `{a-z, 0-9, &}` was used as a symbol.
    #[error("invalid symbol '{0}': must be one of a-z, 0-9, or '&' (epsilon)")]
    InvalidSymbol(char),

    /// The regex source failed to lex or parse.
    #[error("invalid regex: {0}")]
    InvalidRegex(String),

    /// The grammar text failed to parse.
    #[error("malformed grammar: {0}")]
    MalformedGrammar(String),

    /// An operation that requires a deterministic automaton was called on
    /// one that still has nondeterminism or epsilon-transitions.
    #[error("automaton must be deterministic for this operation")]
    MustBeDeterministic,

    /// An operation referenced a state that is not in `Q`.
    #[error("unknown state: {0}")]
    UnknownState(String),
}

//! Regular expressions: lexing, parsing, and direct-to-DFA construction.

pub mod ast;
pub mod desimone;
pub mod lexer;
pub mod parser;
pub mod stitch;
pub mod tokens;

pub use ast::Ast;
pub use stitch::StitchedTree;

use crate::automaton::FiniteAutomaton;
use crate::error::AutomataError;

/// Parses a regex source string into an [`Ast`].
pub fn parse(src: &str) -> Result<Ast, AutomataError> {
    let tokens = lexer::lex(src)?;
    parser::parse(&tokens)
}

/// Parses a regex and compiles it directly to a deterministic automaton via
/// De Simone's construction, bypassing an intermediate NFA.
pub fn to_automaton(src: &str) -> Result<FiniteAutomaton, AutomataError> {
    let ast = parse(src)?;
    let tree = StitchedTree::build(&ast);
    Ok(desimone::build(&tree))
}

//! The regex abstract syntax tree.

use crate::symbol::Symbol;

/// A node in a parsed regular expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ast {
    /// A leaf holding a single symbol.
    Symbol(Symbol),
    /// Binary union `lhs | rhs`.
    Union(Box<Ast>, Box<Ast>),
    /// Binary concatenation `lhs . rhs`.
    Concatenation(Box<Ast>, Box<Ast>),
    /// Unary Kleene star `inner*`.
    KleeneStar(Box<Ast>),
    /// Unary option `inner?`.
    Option(Box<Ast>),
}

impl Ast {
    #[must_use]
    pub fn union(lhs: Ast, rhs: Ast) -> Ast {
        Ast::Union(Box::new(lhs), Box::new(rhs))
    }

    #[must_use]
    pub fn concatenation(lhs: Ast, rhs: Ast) -> Ast {
        Ast::Concatenation(Box::new(lhs), Box::new(rhs))
    }

    #[must_use]
    pub fn kleene_star(inner: Ast) -> Ast {
        Ast::KleeneStar(Box::new(inner))
    }

    #[must_use]
    pub fn option(inner: Ast) -> Ast {
        Ast::Option(Box::new(inner))
    }
}

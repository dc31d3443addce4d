//! Right-linear regular grammars, and their compilation to and from finite
//! automata.

use std::collections::BTreeMap;

use crate::automaton::{FiniteAutomaton, State};
use crate::error::AutomataError;
use crate::symbol::{Symbol, EPSILON};

/// A single production `head -> terminal tail` (or `head -> &` when `tail`
/// is `None` and `terminal` is epsilon, recording that `head` derives the
/// empty string).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub head: String,
    pub terminal: Symbol,
    pub tail: Option<String>,
}

/// A right-linear grammar: an ordered list of productions plus a
/// distinguished start non-terminal (the first production's head, unless
/// overridden).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegularGrammar {
    productions: Vec<Production>,
    start: String,
}

impl RegularGrammar {
    /// Builds a grammar from explicit productions, taking the first
    /// production's head as the start symbol unless `start` overrides it.
    pub fn new(productions: Vec<Production>, start: Option<String>) -> Result<Self, AutomataError> {
        let start = match start {
            Some(s) => s,
            None => productions
                .first()
                .map(|p| p.head.clone())
                .ok_or_else(|| AutomataError::MalformedGrammar("no productions".to_string()))?,
        };
        Ok(Self { productions, start })
    }

    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    #[must_use]
    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    /// Parses the line-oriented text format:
    /// `Head -> body1 | body2 | ...`, `Head` matching `[A-Z]'*`, each body
    /// either `terminal Nonterminal?` or `&`. The first line's head becomes
    /// the start symbol. Whitespace around tokens is tolerated.
    pub fn parse(text: &str) -> Result<Self, AutomataError> {
        let mut productions = Vec::new();
        let mut start = None;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (head, bodies) = line
                .split_once("->")
                .ok_or_else(|| AutomataError::MalformedGrammar(line.to_string()))?;
            let head = head.trim();
            validate_nonterminal(head)?;
            if start.is_none() {
                start = Some(head.to_string());
            }

            for body in bodies.split('|') {
                let body = body.trim();
                productions.push(parse_body(head, body)?);
            }
        }

        if productions.is_empty() {
            return Err(AutomataError::MalformedGrammar(
                "grammar has no productions".to_string(),
            ));
        }

        Self::new(productions, start)
    }

    /// Renders the grammar back to the line-oriented text format, grouping
    /// productions by head in the order heads were first introduced:
    /// `Head -> body1 | body2 | ...`, sorted so `start` comes first and
    /// epsilon-productions come last within their group.
    #[must_use]
    pub fn to_string_form(&self) -> String {
        let mut heads: Vec<&str> = Vec::new();
        for p in &self.productions {
            if !heads.contains(&p.head.as_str()) {
                heads.push(&p.head);
            }
        }
        if let Some(pos) = heads.iter().position(|h| *h == self.start) {
            heads.remove(pos);
            heads.insert(0, &self.start);
        }

        heads
            .into_iter()
            .map(|head| {
                let mut bodies: Vec<&Production> = self
                    .productions
                    .iter()
                    .filter(|p| p.head == head)
                    .collect();
                bodies.sort_by_key(|p| p.terminal.is_epsilon());

                let rendered = bodies
                    .iter()
                    .map(|p| match &p.tail {
                        Some(tail) => format!("{}{}", p.terminal, tail),
                        None => format!("{}", p.terminal),
                    })
                    .collect::<Vec<_>>()
                    .join(" | ");
                format!("{head} -> {rendered}")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Compiles this grammar to an NFA: each production `(A, a, B)` becomes
    /// `δ(A, a) ∋ B`; a production `(A, ε, —)` makes `A`
    /// accepting. A terminal production with no tail (`A -> a`, derivation
    /// ends here) transitions into a shared, accepting, outgoing-free sink
    /// state rather than a named non-terminal. The start state is the
    /// grammar's start symbol.
    #[must_use]
    pub fn to_fa(&self) -> FiniteAutomaton {
        let mut fa = FiniteAutomaton::new(self.start.clone());
        for p in &self.productions {
            if p.terminal.is_epsilon() {
                fa.set_accepting(&p.head)
                    .expect("head was just inserted into Q");
                continue;
            }
            match &p.tail {
                Some(tail) => fa.add_transition(p.head.clone(), p.terminal, tail.clone()),
                None => fa.add_transition(p.head.clone(), p.terminal, DERIVATION_END),
            }
        }
        if fa.states().contains(DERIVATION_END) {
            fa.set_accepting(DERIVATION_END)
                .expect("derivation-end sink was just inserted into Q");
        }
        fa
    }

    /// Recovers a grammar from an NFA (the inverse of [`Self::to_fa`]):
    /// `S` names `q0`, reachable states are otherwise named
    /// `A, B, C, ..., A', B', ...` in deterministic iteration order. For
    /// each transition `(q, a, q')`, emits `(name(q), a, name(q'))` if `q'`
    /// has outgoing transitions, plus `(name(q), a, —)` if `q'` is
    /// accepting. If `q0` is accepting, emits `(S, ε, —)`. Productions sort
    /// with `S` first and epsilon-productions last.
    pub fn from_fa(fa: &FiniteAutomaton) -> Result<Self, AutomataError> {
        let start = fa
            .initial_state()
            .ok_or_else(|| AutomataError::UnknownState("<none>".to_string()))?
            .clone();

        let mut names: BTreeMap<State, String> = BTreeMap::new();
        names.insert(start.clone(), "S".to_string());
        let mut letters = nonterminal_sequence();
        for q in fa.states() {
            if *q != start {
                names.insert(q.clone(), letters.next().expect("infinite sequence"));
            }
        }

        let has_outgoing = |q: &str| fa.transitions_from(q).next().is_some();

        let mut productions = Vec::new();
        for (src, sym, dst) in fa.transitions() {
            let src_name = names[src].clone();
            for d in dst {
                let dst_name = names[d].clone();
                if has_outgoing(d) {
                    productions.push(Production {
                        head: src_name.clone(),
                        terminal: sym,
                        tail: Some(dst_name.clone()),
                    });
                }
                if fa.is_accepting(d) {
                    productions.push(Production {
                        head: src_name.clone(),
                        terminal: sym,
                        tail: None,
                    });
                }
            }
        }
        if fa.is_accepting(&start) {
            let epsilon = Symbol::new(EPSILON).expect("epsilon is always valid");
            productions.push(Production {
                head: "S".to_string(),
                terminal: epsilon,
                tail: None,
            });
        }

        productions.sort_by_key(|p| (p.head != "S", p.terminal.is_epsilon()));
        RegularGrammar::new(productions, Some("S".to_string()))
    }
}

/// The shared accepting, outgoing-free state that `to_fa` targets for
/// terminal productions with no tail (`A -> a`, "derivation ends here").
const DERIVATION_END: &str = "#";

fn nonterminal_sequence() -> impl Iterator<Item = String> {
    let mut round = 0usize;
    std::iter::from_fn(move || {
        let letter = (b'A' + (round % 26) as u8) as char;
        let primes = "'".repeat(round / 26);
        round += 1;
        Some(format!("{letter}{primes}"))
    })
}

fn validate_nonterminal(s: &str) -> Result<(), AutomataError> {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => {}
        _ => return Err(AutomataError::MalformedGrammar(s.to_string())),
    }
    if !chars.all(|c| c == '\'') {
        return Err(AutomataError::MalformedGrammar(s.to_string()));
    }
    Ok(())
}

fn parse_body(head: &str, body: &str) -> Result<Production, AutomataError> {
    if body == EPSILON.to_string() {
        return Ok(Production {
            head: head.to_string(),
            terminal: Symbol::new(EPSILON)?,
            tail: None,
        });
    }

    let mut chars = body.chars();
    let terminal_ch = chars
        .next()
        .ok_or_else(|| AutomataError::MalformedGrammar(body.to_string()))?;
    let terminal = Symbol::new(terminal_ch)?;
    if terminal.is_epsilon() {
        return Err(AutomataError::MalformedGrammar(body.to_string()));
    }

    let rest: String = chars.collect();
    let tail = if rest.is_empty() {
        None
    } else {
        validate_nonterminal(&rest)?;
        Some(rest)
    };

    Ok(Production {
        head: head.to_string(),
        terminal,
        tail,
    })
}

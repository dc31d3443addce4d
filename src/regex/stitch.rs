//! The stitched tree: the parse tree augmented with a per-node "seam"
//! back-pointer to its in-order successor, and the direction-aware
//! reachable-symbols traversal used by De Simone's construction.
//!
//! Seams are stored as back-indices into an arena (`Vec<Node>`), not
//! reference-counted pointers, so cycles induced by UP traversals cannot
//! leak or double-free; traversals are guarded by `visited_down`/
//! `visited_up` sets keyed by node index.

use std::collections::BTreeSet;

use crate::symbol::Symbol;

use super::ast::Ast;

pub type NodeId = usize;

/// `None` is the λ (Lambda) sentinel: "no seam", i.e. end of the in-order
/// traversal. `Some(id)` points at the in-order successor node.
pub type Seam = Option<NodeId>;

/// A reachable item: either a concrete leaf node, or λ.
pub type Reachable = Option<NodeId>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
}

#[derive(Debug, Clone)]
enum NodeKind {
    Symbol(Symbol),
    Union { left: NodeId, right: NodeId },
    Concatenation { left: NodeId, right: NodeId },
    KleeneStar { left: NodeId },
    Option { left: NodeId },
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    seam: Seam,
}

/// An arena-backed parse tree with seam back-pointers.
#[derive(Debug, Clone)]
pub struct StitchedTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl StitchedTree {
    /// Builds the tree from a parsed [`Ast`] and computes every seam.
    #[must_use]
    pub fn build(ast: &Ast) -> Self {
        let mut nodes = Vec::new();
        let root = insert(ast, &mut nodes);
        let mut tree = Self { nodes, root };
        tree.sew();
        tree
    }

    /// Returns the symbol held by a leaf node, if any.
    #[must_use]
    pub fn symbol_of(&self, id: NodeId) -> Option<Symbol> {
        match self.nodes[id].kind {
            NodeKind::Symbol(s) => Some(s),
            _ => None,
        }
    }

    fn inorder(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.inorder_from(self.root, &mut out);
        out
    }

    fn inorder_from(&self, id: NodeId, out: &mut Vec<NodeId>) {
        match self.nodes[id].kind {
            NodeKind::Union { left, right } | NodeKind::Concatenation { left, right } => {
                self.inorder_from(left, out);
                out.push(id);
                self.inorder_from(right, out);
            }
            NodeKind::KleeneStar { left } | NodeKind::Option { left } => {
                self.inorder_from(left, out);
                out.push(id);
            }
            NodeKind::Symbol(_) => out.push(id),
        }
    }

    /// Walks the tree in-order, assigning `seam(n)` to the in-order
    /// successor (or λ) for every node whose label is not UNION or
    /// CONCATENATION.
    fn sew(&mut self) {
        let order = self.inorder();
        for (idx, &id) in order.iter().enumerate() {
            let eligible = !matches!(
                self.nodes[id].kind,
                NodeKind::Union { .. } | NodeKind::Concatenation { .. }
            );
            if eligible {
                self.nodes[id].seam = order.get(idx + 1).copied();
            }
        }
    }

    fn rightmost_descendant_seam(&self, id: NodeId) -> Seam {
        let mut current = id;
        loop {
            match self.nodes[current].kind {
                NodeKind::Union { right, .. } | NodeKind::Concatenation { right, .. } => {
                    current = right;
                }
                _ => return self.nodes[current].seam,
            }
        }
    }

    /// Computes the set of leaves (plus possibly λ) reachable from `node`
    /// under `direction`. Each `(node, direction)` pair is visited at most
    /// once, guarding cycles induced by UNION's rightmost-descendant-seam
    /// walk and KLEENESTAR/OPTION's self-referencing seams.
    #[must_use]
    pub fn reachable_symbols(&self, node: NodeId, direction: Direction) -> BTreeSet<Reachable> {
        let mut reachable = BTreeSet::new();
        let mut visited_down = BTreeSet::new();
        let mut visited_up = BTreeSet::new();
        self.reachable_symbols_into(node, direction, &mut reachable, &mut visited_down, &mut visited_up);
        reachable
    }

    fn reachable_symbols_into(
        &self,
        node: NodeId,
        direction: Direction,
        reachable: &mut BTreeSet<Reachable>,
        visited_down: &mut BTreeSet<NodeId>,
        visited_up: &mut BTreeSet<NodeId>,
    ) {
        match direction {
            Direction::Down => {
                if !visited_down.insert(node) {
                    return;
                }
                match self.nodes[node].kind {
                    NodeKind::Union { left, right } => {
                        self.reachable_symbols_into(left, Direction::Down, reachable, visited_down, visited_up);
                        self.reachable_symbols_into(right, Direction::Down, reachable, visited_down, visited_up);
                    }
                    NodeKind::Concatenation { left, .. } => {
                        self.reachable_symbols_into(left, Direction::Down, reachable, visited_down, visited_up);
                    }
                    NodeKind::Option { left } | NodeKind::KleeneStar { left } => {
                        self.reachable_symbols_into(left, Direction::Down, reachable, visited_down, visited_up);
                        match self.nodes[node].seam {
                            Some(next) => {
                                self.reachable_symbols_into(next, Direction::Up, reachable, visited_down, visited_up);
                            }
                            None => {
                                reachable.insert(None);
                            }
                        }
                    }
                    NodeKind::Symbol(_) => {
                        reachable.insert(Some(node));
                    }
                }
            }
            Direction::Up => {
                if !visited_up.insert(node) {
                    return;
                }
                match self.nodes[node].kind {
                    NodeKind::Union { right, .. } => match self.rightmost_descendant_seam(right) {
                        Some(next) => {
                            self.reachable_symbols_into(next, Direction::Up, reachable, visited_down, visited_up);
                        }
                        None => {
                            reachable.insert(None);
                        }
                    },
                    NodeKind::Concatenation { right, .. } => {
                        self.reachable_symbols_into(right, Direction::Down, reachable, visited_down, visited_up);
                    }
                    NodeKind::Option { .. } => match self.nodes[node].seam {
                        Some(next) => {
                            self.reachable_symbols_into(next, Direction::Up, reachable, visited_down, visited_up);
                        }
                        None => {
                            reachable.insert(None);
                        }
                    },
                    NodeKind::KleeneStar { left } => {
                        self.reachable_symbols_into(left, Direction::Down, reachable, visited_down, visited_up);
                        match self.nodes[node].seam {
                            Some(next) => {
                                self.reachable_symbols_into(next, Direction::Up, reachable, visited_down, visited_up);
                            }
                            None => {
                                reachable.insert(None);
                            }
                        }
                    }
                    NodeKind::Symbol(_) => match self.nodes[node].seam {
                        Some(next) => {
                            self.reachable_symbols_into(next, Direction::Up, reachable, visited_down, visited_up);
                        }
                        None => {
                            reachable.insert(None);
                        }
                    },
                }
            }
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Every symbol appearing at a leaf, in ascending order.
    #[must_use]
    pub fn alphabet(&self) -> BTreeSet<Symbol> {
        self.nodes
            .iter()
            .filter_map(|n| match n.kind {
                NodeKind::Symbol(s) => Some(s),
                _ => None,
            })
            .collect()
    }
}

fn insert(ast: &Ast, nodes: &mut Vec<Node>) -> NodeId {
    let kind = match ast {
        Ast::Symbol(s) => NodeKind::Symbol(*s),
        Ast::Union(l, r) => {
            let left = insert(l, nodes);
            let right = insert(r, nodes);
            NodeKind::Union { left, right }
        }
        Ast::Concatenation(l, r) => {
            let left = insert(l, nodes);
            let right = insert(r, nodes);
            NodeKind::Concatenation { left, right }
        }
        Ast::KleeneStar(inner) => {
            let left = insert(inner, nodes);
            NodeKind::KleeneStar { left }
        }
        Ast::Option(inner) => {
            let left = insert(inner, nodes);
            NodeKind::Option { left }
        }
    };
    nodes.push(Node { kind, seam: None });
    nodes.len() - 1
}

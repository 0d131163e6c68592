use std::ops::Neg;

use super::NodeIndex;

/// The side of the declared bipartition a node belongs to.
///
/// Categories are supplied by the caller when the node is added and never change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    A,
    B,
}

impl Neg for Category {
    type Output = Category;
    fn neg(self) -> Self::Output {
        match self {
            Category::A => Category::B,
            Category::B => Category::A,
        }
    }
}

impl From<bool> for Category {
    fn from(value: bool) -> Self {
        if value {
            Category::B
        } else {
            Category::A
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::A => write!(f, "A"),
            Category::B => write!(f, "B"),
        }
    }
}

/// One half of an undirected edge, stored in the adjacency list of `from`.
///
/// Every logical edge `u - v` is two half-edges: `{from: u, to: v}` in `u`'s list
/// and its involved twin `{from: v, to: u}` in `v`'s list. Both carry the same weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfEdge {
    pub from: NodeIndex,
    pub to: NodeIndex,
    pub weight: f64,
}

impl HalfEdge {
    pub fn new(from: NodeIndex, to: NodeIndex, weight: f64) -> Self {
        HalfEdge { from, to, weight }
    }

    /// Gives the twin half-edge, pointing back from `to` to `from`.
    /// For a self-loop the twin equals the half-edge itself.
    pub fn inv(&self) -> Self {
        HalfEdge {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

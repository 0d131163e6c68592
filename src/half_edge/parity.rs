use bitvec::prelude::*;

use super::NodeIndex;

/// The set of odd-degree nodes, one bit per node.
///
/// The number of set bits is cached so that its cardinality is O(1).
/// Invariant: bit `i` is set iff the degree last reported for node `i` is odd.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OddNodes {
    set: BitVec<usize, Lsb0>,
    count: usize,
}

impl OddNodes {
    pub fn new() -> Self {
        OddNodes {
            set: BitVec::<usize, Lsb0>::new(),
            count: 0,
        }
    }

    pub fn with_capacity(nodes: usize) -> Self {
        OddNodes {
            set: BitVec::<usize, Lsb0>::with_capacity(nodes),
            count: 0,
        }
    }

    /// Registers a fresh node. It has degree zero, so it starts even.
    pub fn push_node(&mut self) {
        self.set.push(false);
    }

    /// Records the current degree of `node`, toggling its membership if the parity changed.
    pub fn update(&mut self, node: NodeIndex, degree: usize) {
        let odd = degree % 2 == 1;
        if self.set[node.0] == odd {
            return;
        }
        self.set.set(node.0, odd);
        if odd {
            self.count += 1;
        } else {
            self.count -= 1;
        }
    }

    pub fn contains(&self, node: NodeIndex) -> bool {
        self.set.get(node.0).is_some_and(|b| *b)
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of nodes tracked, odd or not.
    pub fn n_nodes(&self) -> usize {
        self.set.len()
    }

    /// Odd nodes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.set.iter_ones().map(NodeIndex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_and_counts() {
        let mut odd = OddNodes::new();
        for _ in 0..4 {
            odd.push_node();
        }
        assert!(odd.is_empty());

        odd.update(NodeIndex(1), 1);
        odd.update(NodeIndex(3), 3);
        assert_eq!(odd.len(), 2);
        assert_eq!(odd.iter().collect::<Vec<_>>(), vec![NodeIndex(1), NodeIndex(3)]);

        // same parity again is a no-op
        odd.update(NodeIndex(1), 5);
        assert_eq!(odd.len(), 2);

        odd.update(NodeIndex(1), 2);
        assert_eq!(odd.len(), 1);
        assert!(!odd.contains(NodeIndex(1)));
        assert!(odd.contains(NodeIndex(3)));
        assert!(!odd.contains(NodeIndex(17)));
        assert_eq!(odd.n_nodes(), 4);
    }
}

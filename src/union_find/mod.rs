#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParentPointer(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SetIndex(pub usize);

use std::{cell::Cell, ops::Index};

/// A node in the union–find forest.
///
/// - `Root { set_data_idx, rank }` is a representative, owning a slot in the set data.
/// - `Child(parent)` points towards its representative.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UFNode {
    Root { set_data_idx: SetIndex, rank: usize },
    Child(ParentPointer),
}

/// A growable union–find that keeps one value of `U` per live set.
///
/// Elements are appended with [`UnionFind::push`] and only ever merged, never split.
/// The set data is kept compact: a merge swap-removes the losing slot, so
/// [`UnionFind::n_sets`] is the length of that storage.
///
/// Parent pointers live in `Cell`s so that `find` can compress paths through `&self`.
#[derive(Debug, Clone, Default)]
pub struct UnionFind<U> {
    nodes: Vec<Cell<UFNode>>,
    /// Data for roots only. `Option` lets a merge take both values out without `U: Clone`.
    set_data: Vec<Option<U>>,
    /// For each slot in `set_data`, the root that owns it.
    data_to_node: Vec<ParentPointer>,
}

impl<U> UnionFind<U> {
    pub fn new() -> Self {
        UnionFind {
            nodes: Vec::new(),
            set_data: Vec::new(),
            data_to_node: Vec::new(),
        }
    }

    pub fn with_capacity(n: usize) -> Self {
        UnionFind {
            nodes: Vec::with_capacity(n),
            set_data: Vec::with_capacity(n),
            data_to_node: Vec::with_capacity(n),
        }
    }

    /// Adds a new singleton set holding `data` and returns its element.
    pub fn push(&mut self, data: U) -> ParentPointer {
        let x = ParentPointer(self.nodes.len());
        self.nodes.push(Cell::new(UFNode::Root {
            set_data_idx: SetIndex(self.set_data.len()),
            rank: 0,
        }));
        self.set_data.push(Some(data));
        self.data_to_node.push(x);
        x
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn n_sets(&self) -> usize {
        self.set_data.len()
    }

    /// Finds the representative of the set containing `x`, compressing the path on the way.
    pub fn find(&self, x: ParentPointer) -> ParentPointer {
        match self[&x].get() {
            UFNode::Root { .. } => x,
            UFNode::Child(parent) => {
                let root = self.find(parent);
                self[&x].set(UFNode::Child(root));
                root
            }
        }
    }

    pub fn same_set(&self, x: ParentPointer, y: ParentPointer) -> bool {
        self.find(x) == self.find(y)
    }

    pub fn find_data_index(&self, x: ParentPointer) -> SetIndex {
        let root = self.find(x);
        match self[&root].get() {
            UFNode::Root { set_data_idx, .. } => set_data_idx,
            UFNode::Child(_) => unreachable!("find() should always return a root"),
        }
    }

    pub fn find_data(&self, x: ParentPointer) -> &U {
        &self[self.find_data_index(x)]
    }

    /// Merges the sets of `x` and `y`, combining their data with `merge(winner, loser)`.
    ///
    /// The winner is picked by rank. Returns the new representative.
    pub fn union<F>(&mut self, x: ParentPointer, y: ParentPointer, merge: F) -> ParentPointer
    where
        F: FnOnce(U, U) -> U,
    {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return root_x;
        }

        let (rank_x, data_idx_x) = self.root_info(root_x);
        let (rank_y, data_idx_y) = self.root_info(root_y);

        let (winner, loser, winner_data_idx, loser_data_idx) = if rank_x < rank_y {
            (root_y, root_x, data_idx_y, data_idx_x)
        } else {
            (root_x, root_y, data_idx_x, data_idx_y)
        };

        let winner_rank = if rank_x == rank_y {
            rank_x + 1
        } else {
            rank_x.max(rank_y)
        };

        self[&loser].set(UFNode::Child(winner));

        let (Some(winner_data), Some(loser_data)) = (
            self.set_data[winner_data_idx.0].take(),
            self.set_data[loser_data_idx.0].take(),
        ) else {
            unreachable!("roots always own their set data")
        };
        self.set_data[winner_data_idx.0] = Some(merge(winner_data, loser_data));

        // Compact: move the last slot into the loser's hole.
        let last_idx = self.set_data.len() - 1;
        let mut winner_data_idx = winner_data_idx;
        if loser_data_idx.0 != last_idx {
            self.set_data.swap(loser_data_idx.0, last_idx);
            self.data_to_node.swap(loser_data_idx.0, last_idx);
            let moved = self.data_to_node[loser_data_idx.0];
            let (moved_rank, _) = self.root_info(moved);
            self[&moved].set(UFNode::Root {
                set_data_idx: loser_data_idx,
                rank: moved_rank,
            });
            if winner_data_idx.0 == last_idx {
                winner_data_idx = loser_data_idx;
            }
        }
        self.set_data.pop();
        self.data_to_node.pop();

        self[&winner].set(UFNode::Root {
            set_data_idx: winner_data_idx,
            rank: winner_rank,
        });

        winner
    }

    fn root_info(&self, root: ParentPointer) -> (usize, SetIndex) {
        match self[&root].get() {
            UFNode::Root { rank, set_data_idx } => (rank, set_data_idx),
            UFNode::Child(_) => unreachable!("expected a root"),
        }
    }

    /// Iterates over the data of every live set.
    pub fn iter_set_data(&self) -> impl Iterator<Item = &U> {
        self.set_data.iter().flatten()
    }
}

impl<U> Index<SetIndex> for UnionFind<U> {
    type Output = U;
    fn index(&self, index: SetIndex) -> &Self::Output {
        match &self.set_data[index.0] {
            Some(data) => data,
            None => unreachable!("set data is only vacated during a merge"),
        }
    }
}

impl<U> Index<&ParentPointer> for UnionFind<U> {
    type Output = Cell<UFNode>;
    fn index(&self, index: &ParentPointer) -> &Self::Output {
        &self.nodes[index.0]
    }
}

#[cfg(test)]
mod test;

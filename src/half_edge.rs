use itertools::Itertools;
use log::{debug, trace};
use thiserror::Error;

use crate::union_find::{ParentPointer, UnionFind};

pub mod typed_vec;

crate::define_indexed_vec!(
    /// Identity of a node: its position in insertion order, starting at 0.
    pub struct NodeIndex;

    /// A vector with one entry per node, indexed by [`NodeIndex`].
    pub struct NodeVec;
);

pub mod builder;
pub mod classify;
pub mod involution;
pub mod parity;

use classify::GraphClass;
use involution::{Category, HalfEdge};
use parity::OddNodes;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Invalid node {node}: graph has {n_nodes} nodes")]
    InvalidNode { node: NodeIndex, n_nodes: usize },
}

/// An undirected, weighted graph that classifies itself as it grows.
///
/// Nodes and edges are only ever appended. Each edge is stored as a pair of
/// [`HalfEdge`]s, one in the adjacency list of each endpoint, so the degree of a
/// node is the length of its list (self-loops count twice, duplicates count again).
///
/// On every edge insertion the graph updates, touching only the two endpoints:
/// - the set of odd-degree nodes, which answers the Eulerian queries in O(1),
/// - a bipartite flag that is cleared for good once an edge joins two nodes
///   of the same declared [`Category`],
/// - the connected components, used by the `*_connected_*` variants.
///
/// Mutation goes through `&mut self`. The component forest compresses paths
/// through `Cell`s, so the graph is `Send` but not `Sync`: share it behind a lock.
#[derive(Clone, Debug)]
pub struct UndirectedGraph {
    nodes: NodeVec<Category>,
    adjacency: NodeVec<Vec<HalfEdge>>,
    odd: OddNodes,
    bipartite: bool,
    components: UnionFind<usize>,
    n_hedges: usize,
}

impl Default for UndirectedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl UndirectedGraph {
    pub fn new() -> Self {
        UndirectedGraph {
            nodes: NodeVec::new(),
            adjacency: NodeVec::new(),
            odd: OddNodes::new(),
            bipartite: true,
            components: UnionFind::new(),
            n_hedges: 0,
        }
    }

    /// An empty graph with room for `nodes` nodes before reallocating.
    pub fn with_capacity(nodes: usize) -> Self {
        UndirectedGraph {
            nodes: NodeVec::with_capacity(nodes),
            adjacency: NodeVec::with_capacity(nodes),
            odd: OddNodes::with_capacity(nodes),
            bipartite: true,
            components: UnionFind::with_capacity(nodes),
            n_hedges: 0,
        }
    }

    /// Appends a node of the given category and returns its identity,
    /// which is the number of nodes before the call.
    pub fn add_node(&mut self, category: Category) -> NodeIndex {
        let id = self.nodes.push(category);
        self.adjacency.push(Vec::new());
        self.odd.push_node();
        self.components.push(1);
        trace!("added node {id} ({category})");
        id
    }

    /// Adds the undirected edge `src - dest` as two half-edges.
    ///
    /// Both endpoints must already exist, otherwise [`GraphError::InvalidNode`] is
    /// returned and the graph is left untouched. The weight is stored as given.
    ///
    /// A self-loop appends both half-edges to the same list: the degree grows by
    /// two, parity is unchanged, and the graph stops being bipartite since a node
    /// always shares its own category.
    pub fn add_edge(
        &mut self,
        src: NodeIndex,
        dest: NodeIndex,
        weight: f64,
    ) -> Result<(), GraphError> {
        self.check_node(src)?;
        self.check_node(dest)?;

        let hedge = HalfEdge::new(src, dest, weight);
        self.adjacency[src].push(hedge);
        self.adjacency[dest].push(hedge.inv());
        self.n_hedges += 2;
        trace!("added edge {src} - {dest} (weight {weight})");

        self.update_parity(src);
        self.update_parity(dest);
        self.update_bipartite(src, dest);
        self.components.union(
            ParentPointer(src.0),
            ParentPointer(dest.0),
            |a, b| a + b,
        );
        Ok(())
    }

    fn check_node(&self, node: NodeIndex) -> Result<(), GraphError> {
        if self.nodes.contains_index(node) {
            Ok(())
        } else {
            debug!("rejecting edge endpoint {node}: only {} nodes", self.n_nodes());
            Err(GraphError::InvalidNode {
                node,
                n_nodes: self.n_nodes(),
            })
        }
    }

    fn update_parity(&mut self, node: NodeIndex) {
        let degree = self.adjacency[node].len();
        self.odd.update(node, degree);
    }

    fn update_bipartite(&mut self, src: NodeIndex, dest: NodeIndex) {
        if self.bipartite && self.nodes[src] == self.nodes[dest] {
            debug!(
                "edge {src} - {dest} joins two nodes of category {}: no longer bipartite",
                self.nodes[src]
            );
            self.bipartite = false;
        }
    }

    /// Whether every node has even degree. Connectivity is not checked:
    /// two disjoint even cycles still answer `true`.
    pub fn has_eulerian_cycle(&self) -> bool {
        self.odd.is_empty()
    }

    /// Whether zero or two nodes have odd degree. Connectivity is not checked.
    pub fn has_eulerian_path(&self) -> bool {
        matches!(self.odd.len(), 0 | 2)
    }

    /// Whether every node has degree `n_nodes - 1`.
    ///
    /// This counts half-edges, it does not look at who the neighbours are, so
    /// duplicate edges and self-loops can make an incomplete graph pass.
    /// The empty graph is complete.
    pub fn is_complete(&self) -> bool {
        let target = self.n_nodes().saturating_sub(1);
        self.adjacency.values().all(|hedges| hedges.len() == target)
    }

    /// Whether no edge added so far joins two nodes of the same category.
    ///
    /// The categories are the ones declared in [`add_node`](Self::add_node); no
    /// colouring is computed. Once `false` this never becomes `true` again.
    pub fn is_bipartite(&self) -> bool {
        self.bipartite
    }

    /// Number of connected components, isolated nodes included.
    pub fn n_components(&self) -> usize {
        self.components.n_sets()
    }

    pub fn is_connected(&self) -> bool {
        self.n_components() <= 1
    }

    /// Number of nodes in the component containing `node`.
    pub fn component_size(&self, node: NodeIndex) -> Option<usize> {
        self.nodes
            .contains_index(node)
            .then(|| *self.components.find_data(ParentPointer(node.0)))
    }

    /// Whether all nodes that have at least one edge lie in a single component.
    pub fn edges_connected(&self) -> bool {
        self.adjacency
            .iter()
            .filter(|(_, hedges)| !hedges.is_empty())
            .map(|(node, _)| self.components.find(ParentPointer(node.0)))
            .all_equal()
    }

    /// [`has_eulerian_cycle`](Self::has_eulerian_cycle), additionally requiring
    /// the edges to form one connected piece.
    pub fn has_connected_eulerian_cycle(&self) -> bool {
        self.has_eulerian_cycle() && self.edges_connected()
    }

    /// [`has_eulerian_path`](Self::has_eulerian_path), additionally requiring
    /// the edges to form one connected piece.
    pub fn has_connected_eulerian_path(&self) -> bool {
        self.has_eulerian_path() && self.edges_connected()
    }

    /// Evaluates every predicate at once.
    pub fn classify(&self) -> GraphClass {
        GraphClass {
            eulerian_cycle: self.has_eulerian_cycle(),
            eulerian_path: self.has_eulerian_path(),
            complete: self.is_complete(),
            bipartite: self.is_bipartite(),
            connected: self.is_connected(),
            edges_connected: self.edges_connected(),
        }
    }

    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of logical edges, i.e. half the number of half-edges.
    pub fn n_edges(&self) -> usize {
        self.n_hedges / 2
    }

    pub fn n_hedges(&self) -> usize {
        self.n_hedges
    }

    pub fn category(&self, node: NodeIndex) -> Option<Category> {
        self.nodes.get(node).copied()
    }

    pub fn degree(&self, node: NodeIndex) -> Option<usize> {
        self.adjacency.get(node).map(Vec::len)
    }

    /// The half-edges leaving `node`, in insertion order.
    pub fn neighbors(&self, node: NodeIndex) -> Option<&[HalfEdge]> {
        self.adjacency.get(node).map(Vec::as_slice)
    }

    pub fn iter_nodes(&self) -> impl Iterator<Item = (NodeIndex, Category)> + '_ {
        self.nodes.iter().map(|(id, c)| (id, *c))
    }

    /// Odd-degree nodes in ascending order.
    pub fn odd_nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.odd.iter()
    }

    pub fn n_odd_nodes(&self) -> usize {
        self.odd.len()
    }

    pub fn is_odd(&self, node: NodeIndex) -> bool {
        self.odd.contains(node)
    }
}

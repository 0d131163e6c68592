//! # Parigraph
//!
//! Parigraph is a small undirected, weighted graph built out of half-edges that
//! keeps its own classification up to date while it grows.
//!
//! Nodes carry one of two declared [`Category`](half_edge::involution::Category)
//! values. Every edge insertion updates the set of odd-degree nodes and a
//! bipartite flag, touching only the two endpoints, so that the Eulerian and
//! bipartite queries never have to rescan the graph. Completeness is a single
//! pass over the degrees.
//!
//! ```
//! use parigraph::prelude::*;
//!
//! let mut graph = UndirectedGraph::new();
//! let a = graph.add_node(Category::A);
//! let b = graph.add_node(Category::B);
//! let c = graph.add_node(Category::B);
//! graph.add_edge(a, b, 1.0).unwrap();
//! graph.add_edge(a, c, 1.0).unwrap();
//!
//! assert!(graph.has_eulerian_path());
//! assert!(!graph.has_eulerian_cycle());
//! assert!(graph.is_bipartite());
//! ```

pub mod half_edge;
pub mod union_find;

pub mod prelude {
    pub use crate::half_edge::{
        builder::UndirectedGraphBuilder,
        classify::GraphClass,
        involution::{Category, HalfEdge},
        GraphError, NodeIndex, UndirectedGraph,
    };
}

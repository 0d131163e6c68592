use super::{involution::Category, GraphError, NodeIndex, UndirectedGraph};

#[derive(Clone, Debug)]
struct EdgeBuilder {
    source: NodeIndex,
    sink: NodeIndex,
    weight: f64,
}

/// Collects nodes and edges, then replays them into an [`UndirectedGraph`].
///
/// Nodes are added first and edges after, so the graph sees the same sequence of
/// insertions as direct construction and ends up with the same derived state.
/// Endpoints are checked in [`build`](Self::build), since a [`NodeIndex`] from another
/// builder could point past the end.
#[derive(Clone, Debug)]
pub struct UndirectedGraphBuilder {
    nodes: Vec<Category>,
    edges: Vec<EdgeBuilder>,
}

impl UndirectedGraphBuilder {
    pub fn new() -> Self {
        UndirectedGraphBuilder {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_capacity(nodes: usize) -> Self {
        UndirectedGraphBuilder {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::new(),
        }
    }

    pub fn build(self) -> Result<UndirectedGraph, GraphError> {
        self.try_into()
    }

    pub fn add_node(&mut self, category: Category) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(category);
        NodeIndex(index)
    }

    pub fn add_edge(&mut self, source: NodeIndex, sink: NodeIndex, weight: f64) {
        self.edges.push(EdgeBuilder {
            source,
            sink,
            weight,
        });
    }
}

impl Default for UndirectedGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<UndirectedGraphBuilder> for UndirectedGraph {
    type Error = GraphError;

    fn try_from(builder: UndirectedGraphBuilder) -> Result<Self, Self::Error> {
        let mut graph = UndirectedGraph::with_capacity(builder.nodes.len());
        for category in builder.nodes {
            graph.add_node(category);
        }
        for EdgeBuilder {
            source,
            sink,
            weight,
        } in builder.edges
        {
            graph.add_edge(source, sink, weight)?;
        }
        Ok(graph)
    }
}

/// A snapshot of every structural predicate of an [`UndirectedGraph`](super::UndirectedGraph).
///
/// `eulerian_cycle` and `eulerian_path` are the degree conditions only;
/// the two connectivity fields are reported separately and do not feed into them.
///
/// `connected` counts isolated nodes as components of their own, while
/// `edges_connected` only asks whether the nodes with edges form one piece,
/// which is the condition the `has_connected_eulerian_*` methods use.
/// A triangle next to an isolated node is `edges_connected` but not `connected`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GraphClass {
    pub eulerian_cycle: bool,
    pub eulerian_path: bool,
    pub complete: bool,
    pub bipartite: bool,
    pub connected: bool,
    pub edges_connected: bool,
}

impl std::fmt::Display for GraphClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "eulerian_cycle={} eulerian_path={} complete={} bipartite={} connected={} edges_connected={}",
            self.eulerian_cycle, self.eulerian_path, self.complete, self.bipartite, self.connected,
            self.edges_connected
        )
    }
}

use crate::graph::Graph;
use crate::search::edge_set::EdgeSet;
use crate::search::engine::{Commit, SelectionPolicy};

/** classical 2-approximation: takes any uncovered edge and adds both of its endpoints.
The selected edges form a matching, thus the cover is at most twice the size of an optimal one.
*/
#[derive(Debug, Clone, Copy, Default)]
pub struct ArbitraryEdge;

impl SelectionPolicy for ArbitraryEdge {
    fn name(&self) -> &'static str { "arbitrary_edge" }

    fn select(&mut self, _graph:&Graph, edges:&EdgeSet) -> Option<Commit> {
        edges.first().map(|(u,v)| Commit::Pair(u,v))
    }
}

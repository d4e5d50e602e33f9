use std::cmp::Reverse;

use priority_queue::PriorityQueue;

use crate::cover::VertexId;
use crate::graph::Graph;
use crate::search::edge_set::EdgeSet;
use crate::search::engine::{Commit, SelectionPolicy};

/** greedy by maximum degree: among the uncovered edges (u,v), selects the one maximizing the
degree of u in the original graph and adds u to the cover.
Ties are broken by the smallest vertex id.

Since both (u,v) and (v,u) stay in the working set until the edge is covered, the selected u is
the maximum degree vertex that still has an uncovered edge. Vertices are kept in a priority queue
and dropped lazily once they have no uncovered edge left.
*/
#[derive(Debug, Default)]
pub struct MaxDegreeVertex {
    /// candidates prioritized by (degree, smallest id first)
    queue: PriorityQueue<VertexId, (usize, Reverse<VertexId>)>,
}

impl MaxDegreeVertex {
    /// creates the policy
    pub fn new() -> Self { Self::default() }
}

impl SelectionPolicy for MaxDegreeVertex {
    fn name(&self) -> &'static str { "max_degree" }

    fn init(&mut self, graph:&Graph) {
        self.queue.clear();
        for (u,l) in graph.iter() {
            self.queue.push(u, (l.len(), Reverse(u)));
        }
    }

    fn select(&mut self, _graph:&Graph, edges:&EdgeSet) -> Option<Commit> {
        loop {
            let u = *self.queue.peek()?.0;
            match edges.leaving(u) {
                Some(_) => return Some(Commit::Single(u)),
                None => { self.queue.pop(); } // all edges of u are covered
            }
        }
    }
}

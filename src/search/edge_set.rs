use std::collections::BTreeSet;

use crate::cover::VertexId;
use crate::graph::Graph;

/** working set of uncovered edges.
Each undirected edge {u,v} is stored twice, as (u,v) and (v,u), so that the entries
leaving a vertex can be found with a range query.
*/
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    /// directed entries
    edges: BTreeSet<(VertexId, VertexId)>,
}

impl EdgeSet {

    /// builds the set of directed entries (u,v) for every v adjacent to u
    pub fn from_graph(graph:&Graph) -> Self {
        let mut edges = BTreeSet::new();
        for (u,l) in graph.iter() {
            for v in l {
                edges.insert((u,*v));
            }
        }
        Self { edges }
    }

    /// number of directed entries
    pub fn len(&self) -> usize { self.edges.len() }

    /// true iff every edge is covered
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// true iff the entry (u,v) is still uncovered
    pub fn contains(&self, u:VertexId, v:VertexId) -> bool { self.edges.contains(&(u,v)) }

    /// first entry in iteration order
    pub fn first(&self) -> Option<(VertexId, VertexId)> { self.edges.iter().next().copied() }

    /// i-th entry in iteration order
    pub fn nth(&self, i:usize) -> Option<(VertexId, VertexId)> { self.edges.iter().nth(i).copied() }

    /// some uncovered entry leaving u
    pub fn leaving(&self, u:VertexId) -> Option<(VertexId, VertexId)> {
        self.edges.range((u, VertexId::MIN)..=(u, VertexId::MAX)).next().copied()
    }

    /// iterates over the uncovered entries
    pub fn iter(&self) -> impl Iterator<Item=(VertexId, VertexId)> + '_ {
        self.edges.iter().copied()
    }

    /** removes (w,x) and (x,w) for every x in neighbors.
    returns the number of entries removed.
    */
    pub fn remove_incident<'a, I>(&mut self, w:VertexId, neighbors:I) -> usize
    where I: IntoIterator<Item=&'a VertexId> {
        let mut nb_removed = 0;
        for x in neighbors {
            if self.edges.remove(&(w,*x)) { nb_removed += 1; }
            if self.edges.remove(&(*x,w)) { nb_removed += 1; }
        }
        nb_removed
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_edge_stored_twice() {
        let g = Graph::from_edges(vec![(1,2), (2,3)]);
        let e = EdgeSet::from_graph(&g);
        assert_eq!(e.len(), 4);
        assert!(e.contains(1,2) && e.contains(2,1));
        assert!(e.contains(2,3) && e.contains(3,2));
        assert!(!e.contains(1,3));
    }

    #[test]
    fn test_remove_incident() {
        let g = Graph::from_edges(vec![(1,2), (2,3), (3,4)]);
        let mut e = EdgeSet::from_graph(&g);
        let removed = e.remove_incident(2, g.neighbors(2).unwrap());
        assert_eq!(removed, 4);
        assert_eq!(e.iter().collect::<Vec<_>>(), vec![(3,4), (4,3)]);
        // already purged: nothing left to remove
        assert_eq!(e.remove_incident(2, g.neighbors(2).unwrap()), 0);
    }

    #[test]
    fn test_nth() {
        let g = Graph::from_edges(vec![(1,2), (2,3)]);
        let e = EdgeSet::from_graph(&g);
        assert_eq!(e.nth(0), e.first());
        assert_eq!(e.nth(3), Some((3,2)));
        assert_eq!(e.nth(4), None);
    }

    #[test]
    fn test_leaving() {
        let g = Graph::from_edges(vec![(1,2), (2,3)]);
        let mut e = EdgeSet::from_graph(&g);
        assert_eq!(e.leaving(3), Some((3,2)));
        e.remove_incident(3, g.neighbors(3).unwrap());
        assert_eq!(e.leaving(3), None);
        assert_eq!(e.leaving(2), Some((2,1)));
    }
}

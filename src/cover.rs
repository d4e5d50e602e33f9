use std::collections::BTreeSet;

use crate::graph::Graph;

/** Vertex Id */
pub type VertexId = usize;

/** Solution of a vertex cover problem (set of covering vertices, iterated in increasing order) */
pub type Cover = BTreeSet<VertexId>;

/** result of the checker */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckerResult {
    /// valid cover, contains its size
    Ok(usize),
    /// the edge (u,v) has no endpoint in the cover
    UncoveredEdge(VertexId, VertexId),
    /// the cover contains a vertex that does not belong to the graph
    UnknownVertex(VertexId),
}

/**
checks that a cover is valid for the graph:
 - every vertex of the cover appears in the graph
 - every edge (u,v) of the graph has u or v in the cover
*/
pub fn checker(graph:&Graph, cover:&Cover) -> CheckerResult {
    if let Some(v) = cover.iter().find(|v| !graph.contains_vertex(**v)) {
        return CheckerResult::UnknownVertex(*v);
    }
    match graph.edges().find(|(u,v)| !cover.contains(u) && !cover.contains(v)) {
        Some((u,v)) => CheckerResult::UncoveredEdge(u, v),
        None => CheckerResult::Ok(cover.len()),
    }
}

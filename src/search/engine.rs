use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::cover::{Cover, VertexId};
use crate::graph::Graph;
use crate::search::edge_set::EdgeSet;

/** vertices a policy commits to the cover for the edge it selected */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// both endpoints of the selected edge
    Pair(VertexId, VertexId),
    /// one endpoint of the selected edge
    Single(VertexId),
}

impl Commit {
    /// committed vertices (a pair may contain the same vertex twice on a self-loop)
    pub fn vertices(&self) -> Vec<VertexId> {
        match *self {
            Commit::Pair(u,v) => vec![u,v],
            Commit::Single(w) => vec![w],
        }
    }
}

/** rule deciding which uncovered edge is handled next and which of its endpoints join the cover */
pub trait SelectionPolicy {
    /// name used in reports and statistics
    fn name(&self) -> &'static str;

    /// called at the beginning of each run, before the first selection
    fn init(&mut self, _graph:&Graph) {}

    /** selects an uncovered edge of `edges` and returns the vertices to commit.
    Returns None iff `edges` is empty.
    */
    fn select(&mut self, graph:&Graph, edges:&EdgeSet) -> Option<Commit>;
}

/** statistics of a single run */
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    /// policy used
    pub policy: String,
    /// number of select/commit/purge iterations
    pub nb_iterations: usize,
    /// number of directed entries in the initial working set
    pub nb_initial_entries: usize,
    /// size of the cover found
    pub cover_size: usize,
    /// time spent in the run (seconds)
    pub time_searched: f32,
}

/** computes a vertex cover of the graph by edge elimination.
    1. build the working set of uncovered edges (both directions of each edge)
    2. ask the policy which vertices to commit for some uncovered edge
    3. add them to the cover and purge every entry incident to them
    4. repeat until no uncovered edge remains

Each iteration removes at least the two entries of the selected edge, thus the number of
iterations is bounded by the initial size of the working set.

# Panics
 - if the policy commits a vertex that does not belong to the graph
*/
pub fn run<P:SelectionPolicy + ?Sized>(graph:&Graph, policy:&mut P) -> Cover {
    run_with_stats(graph, policy).0
}

/** same as [`run`], also returns the run statistics */
pub fn run_with_stats<P:SelectionPolicy + ?Sized>(graph:&Graph, policy:&mut P) -> (Cover, RunStats) {
    let t_start = Instant::now();
    let mut edges = EdgeSet::from_graph(graph);
    let nb_initial_entries = edges.len();
    let mut cover = Cover::new();
    let mut nb_iterations:usize = 0;
    policy.init(graph);
    while let Some(commit) = policy.select(graph, &edges) {
        nb_iterations += 1;
        for w in commit.vertices() {
            cover.insert(w);
            let neighbors = graph.neighbors(w).unwrap_or_else(|e|
                panic!("{}: policy {} committed an unknown vertex", e, policy.name())
            );
            edges.remove_incident(w, neighbors);
        }
        if nb_iterations % 1000 == 0 {
            debug!("{}: {} iterations, {} entries left", policy.name(), nb_iterations, edges.len());
        }
    }
    debug_assert!(edges.is_empty(), "{} stopped with uncovered edges", policy.name());
    let stats = RunStats {
        policy: policy.name().to_string(),
        nb_iterations,
        nb_initial_entries,
        cover_size: cover.len(),
        time_searched: t_start.elapsed().as_secs_f32(),
    };
    info!(
        "{} found a cover of size {} in {} iterations",
        stats.policy, stats.cover_size, stats.nb_iterations
    );
    (cover, stats)
}

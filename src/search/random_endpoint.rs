use fastrand::Rng;

use crate::graph::Graph;
use crate::search::edge_set::EdgeSet;
use crate::search::engine::{Commit, SelectionPolicy};

/** randomized 2-approximation (in expectation): takes an uncovered edge uniformly at random and
adds one of its endpoints, chosen uniformly at random.
*/
#[derive(Debug)]
pub struct RandomEndpoint {
    /// random number generator
    rng: Rng,
}

impl RandomEndpoint {
    /// creates the policy with a generator seeded from the system entropy
    pub fn new() -> Self { Self { rng: Rng::new() } }

    /// creates the policy with a seeded generator (reproducible runs)
    pub fn with_seed(seed:u64) -> Self { Self { rng: Rng::with_seed(seed) } }
}

impl Default for RandomEndpoint {
    fn default() -> Self { Self::new() }
}

impl SelectionPolicy for RandomEndpoint {
    fn name(&self) -> &'static str { "random_endpoint" }

    fn select(&mut self, _graph:&Graph, edges:&EdgeSet) -> Option<Commit> {
        if edges.is_empty() { return None; }
        let (u,v) = edges.nth(self.rng.usize(..edges.len()))?;
        Some(Commit::Single(if self.rng.bool() { u } else { v }))
    }
}

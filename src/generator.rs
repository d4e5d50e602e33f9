use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::cover::VertexId;
use crate::graph::Graph;

/** random graph G(n,p): every pair {u,v} of 0..n is an edge with probability p.
Isolated vertices are not represented (they belong to no edge).
*/
pub fn gnp(n:usize, p:f64, seed:u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let proba = p.max(0.).min(1.);
    let mut res = Graph::new();
    for u in 0..n {
        for v in u+1..n {
            if rng.gen_bool(proba) {
                res.add_edge(u, v);
            }
        }
    }
    res
}

/// star with center 0 and leaves 1..=k
pub fn star(k:usize) -> Graph {
    Graph::from_edges((1..=k).map(|v| (0,v)))
}

/// cycle 1 - 2 - ... - n - 1 (n >= 3)
pub fn cycle(n:usize) -> Graph {
    Graph::from_edges((1..=n).map(|u| (u, u % n + 1)))
}

/// complete graph over 0..n
pub fn complete(n:usize) -> Graph {
    Graph::from_edges((0..n).flat_map(|u| (u+1..n).map(move |v:VertexId| (u,v))))
}

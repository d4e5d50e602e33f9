//! exhaustive oracles for small graphs (tests only)

use std::cmp::{max, min};

use crate::cover::VertexId;
use crate::graph::Graph;

/// size of a minimum vertex cover, by enumerating every subset of vertices
pub fn optimal_cover_size(graph:&Graph) -> usize {
    let vertices:Vec<VertexId> = graph.vertices().collect();
    assert!(vertices.len() < 20, "oracle limited to small graphs");
    let edges:Vec<(usize,usize)> = graph.edges().map(|(u,v)| {
        let pos = |x:VertexId| vertices.binary_search(&x).unwrap();
        (pos(u), pos(v))
    }).collect();
    let mut res = vertices.len();
    for mask in 0u32..(1 << vertices.len()) {
        let size = mask.count_ones() as usize;
        if size < res && edges.iter().all(|(a,b)| mask & (1 << a) != 0 || mask & (1 << b) != 0) {
            res = min(res, size);
        }
    }
    res
}

/// size of a maximum matching, by branching on each edge
pub fn maximum_matching_size(graph:&Graph) -> usize {
    let edges:Vec<(VertexId,VertexId)> = graph.edges().filter(|(u,v)| u != v).collect();
    matching(&edges, &mut Vec::new())
}

fn matching(edges:&[(VertexId,VertexId)], used:&mut Vec<VertexId>) -> usize {
    match edges.split_first() {
        None => 0,
        Some((&(u,v), rest)) => {
            let skip = matching(rest, used);
            if used.contains(&u) || used.contains(&v) { return skip; }
            used.push(u);
            used.push(v);
            let take = 1 + matching(rest, used);
            used.truncate(used.len() - 2);
            max(skip, take)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::generator;

    #[test]
    fn test_oracles_on_known_graphs() {
        assert_eq!(optimal_cover_size(&generator::cycle(4)), 2);
        assert_eq!(optimal_cover_size(&generator::cycle(5)), 3);
        assert_eq!(optimal_cover_size(&generator::star(6)), 1);
        assert_eq!(optimal_cover_size(&generator::complete(5)), 4);
        assert_eq!(maximum_matching_size(&generator::cycle(5)), 2);
        assert_eq!(maximum_matching_size(&generator::star(6)), 1);
        assert_eq!(maximum_matching_size(&generator::complete(6)), 3);
        assert_eq!(optimal_cover_size(&Graph::new()), 0);
    }
}

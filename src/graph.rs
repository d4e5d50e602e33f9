use std::collections::{BTreeMap, BTreeSet};

use tracing::info;

use crate::cover::VertexId;
use crate::error::CoverError;

/** counts declared on the first line of an instance file (never validated against the content) */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// declared number of vertices
    pub nb_vertices: usize,
    /// declared number of edges
    pub nb_edges: usize,
}

/** models a Vertex Cover instance (undirected graph).
Vertex ids do not need to be contiguous: only vertices appearing in an edge are stored.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// adj_list[u]: vertices adjacent to u (symmetric)
    adj_list: BTreeMap<VertexId, BTreeSet<VertexId>>,
    /// header read from the instance file, if any
    header: Option<Header>,
}

impl Graph {

    /// creates an empty graph
    pub fn new() -> Self { Self::default() }

    /** constructor using a list of (undirected) edges */
    pub fn from_edges<I>(edges:I) -> Self where I: IntoIterator<Item=(VertexId,VertexId)> {
        let mut res = Self::new();
        for (u,v) in edges {
            res.add_edge(u, v);
        }
        res
    }

    /// adds the edge {u,v}. Adding an existing edge does nothing.
    pub fn add_edge(&mut self, u:VertexId, v:VertexId) {
        self.adj_list.entry(u).or_default().insert(v);
        self.adj_list.entry(v).or_default().insert(u);
    }

    /// vertices adjacent to v
    pub fn neighbors(&self, v:VertexId) -> Result<&BTreeSet<VertexId>, CoverError> {
        self.adj_list.get(&v).ok_or(CoverError::NotFound(v))
    }

    /// degree of v in the graph
    pub fn degree(&self, v:VertexId) -> Result<usize, CoverError> {
        self.neighbors(v).map(|n| n.len())
    }

    /// true iff v appears in some edge
    pub fn contains_vertex(&self, v:VertexId) -> bool { self.adj_list.contains_key(&v) }

    /// number of distinct vertices appearing in at least one edge
    pub fn vertex_count(&self) -> usize { self.adj_list.len() }

    /// number of distinct undirected edges
    pub fn nb_edges(&self) -> usize { self.edges().count() }

    /// vertices of the graph (increasing order)
    pub fn vertices(&self) -> impl Iterator<Item=VertexId> + '_ {
        self.adj_list.keys().copied()
    }

    /// iterates over (vertex, neighbors)
    pub fn iter(&self) -> impl Iterator<Item=(VertexId, &BTreeSet<VertexId>)> + '_ {
        self.adj_list.iter().map(|(u,l)| (*u, l))
    }

    /// undirected edges, each one reported once as (u,v) with u <= v
    pub fn edges(&self) -> impl Iterator<Item=(VertexId,VertexId)> + '_ {
        self.iter().flat_map(|(u,l)| {
            l.range(u..).map(move |v| (u,*v))
        })
    }

    /// header declared in the instance file
    pub fn header(&self) -> Option<Header> { self.header }

    /// sets the declared header
    pub fn set_header(&mut self, header:Header) { self.header = Some(header); }

    /// logs statistics of the instance
    pub fn display_statistics(&self) {
        info!("{} \t vertices", self.vertex_count());
        info!("{} \t edges", self.nb_edges());
        let degrees = self.adj_list.values().map(|l| l.len());
        if let (Some(min), Some(max)) = (degrees.clone().min(), degrees.max()) {
            info!("{} \t min degree", min);
            info!("{} \t max degree", max);
        }
        if let Some(h) = self.header {
            info!("{} {} \t declared (vertices, edges)", h.nb_vertices, h.nb_edges);
        }
    }
}

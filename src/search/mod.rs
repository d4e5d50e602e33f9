//! Edge elimination engine and selection policies for the vertex cover problem.

/// working set of uncovered edges
pub mod edge_set;

/// generic select / commit / purge loop
pub mod engine;

/// takes both endpoints of any uncovered edge (2-approximation)
pub mod arbitrary_edge;

/// takes the uncovered vertex with the largest degree
pub mod max_degree;

/// takes a random endpoint of any uncovered edge
pub mod random_endpoint;

#[cfg(test)]
pub(crate) mod test_oracle;

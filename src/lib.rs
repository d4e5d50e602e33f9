//! Greedy approximations of the Minimum Vertex Cover problem

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// vertex cover solutions and checker
pub mod cover;

/// undirected graph (vertex cover instance)
pub mod graph;

/// errors raised by the crate
pub mod error;

/// read/write graph and vertex cover files
pub mod format;

/// synthetic instances
pub mod generator;

/// helper and utility methods for executables
pub mod util;

/// edge elimination engine and its selection policies
pub mod search;

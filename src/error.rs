use thiserror::Error;

use crate::cover::VertexId;

/** errors raised while reading instances, exporting covers or parsing parameters */
#[derive(Debug, Error)]
pub enum CoverError {
    /// a line of an instance or cover file does not follow the expected format
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput {
        /// 1-based line number
        line: usize,
        /// what was expected
        reason: String,
    },
    /// the vertex does not appear in any edge of the graph
    #[error("vertex {0} not found in the graph")]
    NotFound(VertexId),
    /// unreadable source or unwritable sink
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// statistics export failure
    #[error("unable to serialize statistics: {0}")]
    Json(#[from] serde_json::Error),
    /// the cover rejected by the checker
    #[error("invalid cover: {0}")]
    InvalidCover(String),
    /// command line value that cannot be parsed
    #[error("invalid value `{value}` for argument `{name}`")]
    InvalidArgument {
        /// argument name
        name: &'static str,
        /// raw value given by the user
        value: String,
    },
}

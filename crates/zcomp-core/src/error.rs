//! Error types for zcomp-core

use thiserror::Error;

/// Failure while producing a completion script.
///
/// Building the script text cannot fail; only handing it to the sink can.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write completion script: {0}")]
    Write(#[from] std::io::Error),
}

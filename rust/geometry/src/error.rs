use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while laying out or building a sinter box
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] sinterbox_core::Error),

    #[error("Cannot recommend a gap: no bodies were supplied")]
    EmptyBodySet,

    #[error("Triangulation failed: {0}")]
    TriangulationError(String),

    #[error("Solid kernel failure: {0}")]
    Kernel(String),
}

//! Crate error type

use thiserror::Error as ThisError;

/// Errors surfaced while preparing tag index pages.
///
/// A build with zero tags is not an error; it simply produces zero pages.
#[derive(ThisError, Debug)]
pub enum Error {
    /// The guard layout is not registered with the host renderer, so tag
    /// pages cannot be rendered. Non-fatal: the generator skips the whole
    /// step when it hits this.
    #[error("Layout not registered: {0}")]
    MissingLayout(String),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

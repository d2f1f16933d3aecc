use thiserror::Error;

/// Errors returned by map lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested key is not present in the map.
    #[error("key not found")]
    KeyNotFound,
}

pub type Result<T> = std::result::Result<T, Error>;

//! Catalog error type.

use std::io;

/// Errors raised while talking to the database catalog.
///
/// These are propagated unchanged up to the caller; there is no retry.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to open the TCP connection or the TDS session.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The server rejected the supplied credentials.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// A catalog query failed.
    #[error("catalog query failed: {0}")]
    Query(#[from] tiberius::error::Error),

    /// Network-level failure.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

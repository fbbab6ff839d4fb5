use std::io;
use thiserror::Error;

/// Top-level connection error. Every variant is fatal to its connection
/// only; nothing propagates across connections.
#[derive(Debug, Error)]
pub enum ScgiError {
    #[error("request error: {source}")]
    RequestError {
        #[from]
        source: ParseError,
    },

    #[error("response error: {source}")]
    ResponseError {
        #[from]
        source: SendError,
    },
}

/// Errors on the read path: framing violations, configured-limit violations
/// and transport failures.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("head too large, current: {current_size} exceed the limit {max_size}")]
    TooLargeHead { current_size: usize, max_size: usize },

    #[error("body too large, current: {current_size} exceed the limit {max_size}")]
    TooLargeBody { current_size: usize, max_size: usize },

    #[error("invalid netstring length: {reason}")]
    InvalidLength { reason: String },

    #[error("invalid head framing: {reason}")]
    InvalidHead { reason: String },

    #[error("peer closed the connection before the request completed")]
    UnexpectedEof,

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ParseError {
    pub fn too_large_head(current_size: usize, max_size: usize) -> Self {
        Self::TooLargeHead { current_size, max_size }
    }

    pub fn too_large_body(current_size: usize, max_size: usize) -> Self {
        Self::TooLargeBody { current_size, max_size }
    }

    pub fn invalid_length<S: ToString>(str: S) -> Self {
        Self::InvalidLength { reason: str.to_string() }
    }

    pub fn invalid_head<S: ToString>(str: S) -> Self {
        Self::InvalidHead { reason: str.to_string() }
    }
}

/// Errors on the write path.
#[derive(Error, Debug)]
pub enum SendError {
    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl SendError {
    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}

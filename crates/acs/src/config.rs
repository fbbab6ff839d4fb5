//! Server configuration.
//!
//! Configuration is a small JSON document; every field is optional and
//! falls back to the defaults below, so an empty file (or no file at all)
//! yields a working server.
//!
//! ```json
//! {
//!     "listen": "127.0.0.1:4000",
//!     "max_head_bytes": 4096,
//!     "max_body_bytes": 61440
//! }
//! ```

use std::fs::File;
use std::io;
use std::io::BufReader;
use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use acs_scgi::codec::Limits;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the SCGI listener binds to
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,

    /// Maximum header block size per request, in bytes
    #[serde(default = "default_max_head_bytes")]
    pub max_head_bytes: usize,

    /// Maximum body size per request, in bytes
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_head_bytes: default_max_head_bytes(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

fn default_listen() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 4000))
}

fn default_max_head_bytes() -> usize {
    Limits::default().max_head_bytes
}

fn default_max_body_bytes() -> usize {
    Limits::default().max_body_bytes
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("can't read config file: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    #[error("can't parse config file: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

impl ServerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// The engine-facing size limits.
    pub fn limits(&self) -> Limits {
        Limits { max_head_bytes: self.max_head_bytes, max_body_bytes: self.max_body_bytes }
    }
}

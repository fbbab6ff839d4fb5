//! SCGI front-end server for a CWMP/TR-069 auto-configuration server.
//!
//! This crate wires the [`acs_scgi`] connection engine to a TCP listener
//! and a placeholder CWMP responder. A front-end web server forwards each
//! device-management request over SCGI; every connection carries exactly
//! one request and is closed after the response.
//!
//! - [`config`]: listener address and per-connection size limits
//! - [`responder`]: the placeholder response logic
//! - [`Server`]: listener lifecycle and the accept loop

pub mod config;
pub mod responder;

mod server;
pub use server::Server;
pub use server::ServerBuilder;

//! An asynchronous SCGI connection engine
//!
//! This crate implements the front-end half of an SCGI application server:
//! it accepts one request per connection, incrementally tokenizes the
//! netstring-framed header block and the length-bounded body as bytes
//! arrive, and emits exactly one response once the request is complete.
//! Response generation is left to a [`handler::Handler`] implementation.
//!
//! # Example
//!
//! ```no_run
//! use std::convert::Infallible;
//! use std::sync::Arc;
//! use tokio::net::TcpListener;
//! use tracing::{error, info, warn};
//! use acs_scgi::codec::Limits;
//! use acs_scgi::connection::ScgiConnection;
//! use acs_scgi::handler::make_handler;
//! use acs_scgi::protocol::{ScgiRequest, ScgiResponse};
//!
//! #[tokio::main]
//! async fn main() {
//!     let tcp_listener = match TcpListener::bind("127.0.0.1:4000").await {
//!         Ok(tcp_listener) => tcp_listener,
//!         Err(e) => {
//!             error!(cause = %e, "bind server error");
//!             return;
//!         }
//!     };
//!
//!     let handler = Arc::new(make_handler(hello_world));
//!
//!     loop {
//!         let (tcp_stream, _remote_addr) = match tcp_listener.accept().await {
//!             Ok(stream_and_addr) => stream_and_addr,
//!             Err(e) => {
//!                 warn!(cause = %e, "failed to accept");
//!                 continue;
//!             }
//!         };
//!
//!         let handler = handler.clone();
//!
//!         tokio::spawn(async move {
//!             let (reader, writer) = tcp_stream.into_split();
//!             let connection = ScgiConnection::new(reader, writer, Limits::default());
//!             match connection.process(handler).await {
//!                 Ok(()) => info!("finished process, connection shutdown"),
//!                 Err(e) => error!("connection has error, cause {}, connection shutdown", e),
//!             }
//!         });
//!     }
//! }
//!
//! async fn hello_world(request: ScgiRequest) -> Result<ScgiResponse, Infallible> {
//!     info!(content_length = request.body().len(), "receiving request body");
//!     Ok(ScgiResponse::ok("hello world\n"))
//! }
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: request/response types, parse events and errors
//! - [`codec`]: the wire tokenizer, request decoder and response encoder
//! - [`connection`]: per-connection lifecycle, from first byte to teardown
//! - [`handler`]: the seam where the application computes a response
//!
//! # Limitations
//!
//! - One request per connection, no keep-alive (SCGI semantics)
//! - No TLS
//! - Header block and body sizes are bounded by [`codec::Limits`]

pub mod codec;
pub mod connection;
pub mod handler;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;

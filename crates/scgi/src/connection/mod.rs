//! SCGI connection handling.
//!
//! [`ScgiConnection`] owns one accepted transport for its whole life:
//! it reads and decodes the single request, invokes the handler, sends the
//! response and shuts the transport down. Teardown happens exactly once on
//! every path, error or not, because everything the connection owns is
//! released when it is dropped.

mod scgi_connection;

pub use scgi_connection::ScgiConnection;

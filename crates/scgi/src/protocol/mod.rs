//! Core SCGI protocol abstractions.
//!
//! This module provides the building blocks the rest of the engine is made
//! of:
//!
//! - **Parse events** ([`event`]): the tagged event enumeration the wire
//!   tokenizer produces and the request decoder consumes
//!   - [`ScgiEvent`]: one tokenized span or boundary marker
//!   - [`TokenizerState`]: coarse tokenizer progress
//!
//! - **Requests** ([`request`]): the fully received request
//!   - [`ScgiRequest`]: headers, metadata and complete body
//!   - [`ScgiHeaders`]: ordered, case-sensitive header table
//!   - [`RequestMeta`] / [`Method`]: typed facts extracted from the headers
//!
//! - **Responses** ([`response`]): the fixed-shape response payload
//!   - [`ScgiResponse`]: status line, content type and body
//!
//! - **Errors** ([`error`]): the connection-fatal error taxonomy
//!   - [`ScgiError`]: top-level error type
//!   - [`ParseError`]: transport, framing and limit errors on the read path
//!   - [`SendError`]: errors on the write path

mod event;
pub use event::ScgiEvent;
pub use event::TokenizerState;

mod request;
pub use request::Method;
pub use request::RequestMeta;
pub use request::ScgiHeaders;
pub use request::ScgiRequest;

mod response;
pub use response::ScgiResponse;

mod error;
pub use error::ParseError;
pub use error::ScgiError;
pub use error::SendError;

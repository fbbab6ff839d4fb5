//! SCGI codec: wire tokenization, request decoding and response encoding.
//!
//! The read path is layered:
//!
//! - [`ScgiTokenizer`]: classifies raw bytes into [`ScgiEvent`]s per the
//!   netstring/SCGI grammar, enforcing the configured [`Limits`]
//! - [`RequestDecoder`]: consumes the events, buffers the header block and
//!   body, runs header extraction when the block closes, and yields one
//!   complete request per connection
//!
//! The write path is a single [`ResponseEncoder`] that serializes the
//! fixed-shape response in one pass.
//!
//! All three implement the `tokio_util` codec traits, so they can be driven
//! by `FramedRead`/`FramedWrite` or fed `BytesMut` buffers directly in
//! tests.
//!
//! [`ScgiEvent`]: crate::protocol::ScgiEvent

mod head;
mod request_decoder;
mod response_encoder;
mod tokenizer;

pub use request_decoder::RequestDecoder;
pub use response_encoder::ResponseEncoder;
pub use tokenizer::Limits;
pub use tokenizer::ScgiTokenizer;

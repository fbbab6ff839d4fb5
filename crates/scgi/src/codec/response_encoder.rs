//! Response encoder.
//!
//! Serializes the fixed-shape response — CGI status line, `Content-Type`,
//! blank-line separator, body — into the outbound buffer in one pass. The
//! engine never streams or chunks responses, so there is no state to carry
//! between calls.

use bytes::{BufMut, BytesMut};
use tokio_util::codec::Encoder;

use crate::protocol::{ScgiResponse, SendError};

#[derive(Debug, Default)]
pub struct ResponseEncoder;

impl ResponseEncoder {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Encoder<ScgiResponse> for ResponseEncoder {
    type Error = SendError;

    fn encode(&mut self, item: ScgiResponse, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let status = item.status();
        let content_type = item.content_type();
        let body = item.body();

        dst.reserve(status.len() + content_type.len() + body.len() + 28);

        dst.put_slice(b"Status: ");
        dst.put_slice(status.as_bytes());
        dst.put_slice(b"\r\n");
        dst.put_slice(b"Content-Type: ");
        dst.put_slice(content_type.as_bytes());
        dst.put_slice(b"\r\n\r\n");
        dst.put_slice(body);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_contiguous_response() {
        let mut dst = BytesMut::new();
        let mut encoder = ResponseEncoder::new();

        encoder.encode(ScgiResponse::ok("hello world\n"), &mut dst).unwrap();

        assert_eq!(
            &dst[..],
            b"Status: 200 OK\r\nContent-Type: text/plain\r\n\r\nhello world\n"
        );
    }

    #[test]
    fn error_response_has_empty_body() {
        let mut dst = BytesMut::new();
        let mut encoder = ResponseEncoder::new();

        encoder.encode(ScgiResponse::internal_error(), &mut dst).unwrap();

        assert_eq!(
            &dst[..],
            b"Status: 500 Internal Server Error\r\nContent-Type: text/plain\r\n\r\n"
        );
    }
}

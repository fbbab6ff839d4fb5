//! Placeholder CWMP response logic.
//!
//! A real ACS would parse the CWMP envelope out of the request body and run
//! the TR-069 session state machine here. Until that exists, every request
//! is answered with a fixed payload so the connection engine can be
//! exercised end to end.

use std::convert::Infallible;

use async_trait::async_trait;
use tracing::{info, warn};

use acs_scgi::handler::Handler;
use acs_scgi::protocol::{Method, ScgiRequest, ScgiResponse};

#[derive(Debug, Default)]
pub struct CwmpResponder;

#[async_trait]
impl Handler for CwmpResponder {
    type Error = Infallible;

    async fn call(&self, request: ScgiRequest) -> Result<ScgiResponse, Self::Error> {
        if request.meta().method != Method::Post {
            // CWMP sessions are POST-only; answered anyway until the real
            // session logic lands
            warn!("request method is not POST");
        }

        info!(body_size = request.body().len(), "answering with the placeholder response");

        Ok(ScgiResponse::ok("hello world\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use acs_scgi::codec::{Limits, RequestDecoder};
    use bytes::BytesMut;
    use tokio_util::codec::Decoder;

    fn decode_request(pairs: &[(&str, &str)], body: &[u8]) -> ScgiRequest {
        let mut head = Vec::new();
        for (name, value) in pairs {
            head.extend_from_slice(name.as_bytes());
            head.push(0);
            head.extend_from_slice(value.as_bytes());
            head.push(0);
        }
        let mut wire = format!("{}:", head.len()).into_bytes();
        wire.extend_from_slice(&head);
        wire.push(b',');
        wire.extend_from_slice(body);

        let mut src = BytesMut::from(&wire[..]);
        RequestDecoder::new(Limits::default()).decode(&mut src).unwrap().unwrap()
    }

    #[tokio::test]
    async fn answers_every_request_with_the_placeholder() {
        let body = b"<cwmp:Inform/>";
        let request = decode_request(
            &[("CONTENT_LENGTH", "14"), ("REQUEST_METHOD", "POST")],
            body,
        );

        let response = CwmpResponder.call(request).await.unwrap();

        assert_eq!(response.status(), "200 OK");
        assert_eq!(response.content_type(), "text/plain");
        assert_eq!(response.body().as_ref(), b"hello world\n");
    }

    #[tokio::test]
    async fn non_post_requests_are_still_answered() {
        let request = decode_request(&[("CONTENT_LENGTH", "0"), ("REQUEST_METHOD", "GET")], b"");

        let response = CwmpResponder.call(request).await.unwrap();
        assert_eq!(response.status(), "200 OK");
    }
}

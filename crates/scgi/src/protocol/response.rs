use bytes::Bytes;

/// The response payload written back over SCGI.
///
/// A response is a fixed shape: a CGI status line, a `Content-Type` header,
/// a blank-line separator and the body, written as one contiguous byte
/// sequence. The engine does not stream or chunk responses.
#[derive(Debug, Clone)]
pub struct ScgiResponse {
    status: String,
    content_type: String,
    body: Bytes,
}

impl ScgiResponse {
    pub fn new(status: impl Into<String>, content_type: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self { status: status.into(), content_type: content_type.into(), body: body.into() }
    }

    /// A `200 OK` plain-text response with the given body.
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::new("200 OK", "text/plain", body)
    }

    /// The empty-bodied response sent when the handler fails.
    pub fn internal_error() -> Self {
        Self::new("500 Internal Server Error", "text/plain", Bytes::new())
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

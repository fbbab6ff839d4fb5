//! SCGI request decoder.
//!
//! This is the bridge between the wire tokenizer and the rest of the
//! engine: it drains tokenizer events, routes them into the head and body
//! buffers, runs header extraction exactly once when the header block
//! closes, and declares completion the instant the buffered body reaches
//! the declared content length.
//!
//! # State machine
//!
//! The decoder tracks its progress through two fields:
//! - `headers: None` — still buffering the header block
//! - `headers: Some(_)` — header block extracted, buffering the body
//! - `done: true` — the single request was yielded; the decoder refuses
//!   further work (SCGI is one request per connection)

use bytes::{BufMut, BytesMut};
use tokio_util::codec::Decoder;
use tracing::trace;

use crate::codec::head;
use crate::codec::tokenizer::{Limits, ScgiTokenizer};
use crate::ensure;
use crate::protocol::{ParseError, RequestMeta, ScgiEvent, ScgiHeaders, ScgiRequest, TokenizerState};

/// A decoder yielding at most one complete [`ScgiRequest`] per connection.
///
/// The head buffer grows only by append and is interpreted exactly once,
/// after the tokenizer signals the header block closed. The body buffer
/// never exceeds the extracted content length, because the length is
/// clamped against the configured limit before any body byte is buffered.
#[derive(Debug)]
pub struct RequestDecoder {
    tokenizer: ScgiTokenizer,
    limits: Limits,
    head: BytesMut,
    body: BytesMut,
    meta: RequestMeta,
    headers: Option<ScgiHeaders>,
    started: bool,
    done: bool,
}

impl RequestDecoder {
    pub fn new(limits: Limits) -> Self {
        Self {
            tokenizer: ScgiTokenizer::new(limits),
            limits,
            head: BytesMut::new(),
            body: BytesMut::new(),
            meta: RequestMeta::default(),
            headers: None,
            started: false,
            done: false,
        }
    }

    /// Runs header extraction over the frozen head buffer, then clamps the
    /// declared content length against the body limit. Oversized
    /// declarations are fatal before a single body byte is buffered.
    fn finish_head(&mut self) -> Result<(), ParseError> {
        let head = self.head.split().freeze();
        let headers = head::extract(&head, &mut self.meta);

        trace!(
            header_count = headers.len(),
            content_length = self.meta.content_length,
            "head extracted"
        );

        ensure!(
            self.meta.content_length <= self.limits.max_body_bytes as u64,
            ParseError::too_large_body(self.meta.content_length as usize, self.limits.max_body_bytes)
        );

        self.headers = Some(headers);
        Ok(())
    }

    /// Completion holds the instant the buffered body length equals the
    /// declared content length, including the `content_length == 0` case.
    fn body_complete(&self) -> bool {
        self.headers.is_some()
            && self.tokenizer.state() == TokenizerState::Body
            && self.body.len() as u64 == self.meta.content_length
    }

    fn finish_request(&mut self) -> Option<ScgiRequest> {
        let headers = self.headers.take()?;
        self.done = true;
        let body = self.body.split().freeze();
        trace!(body_size = body.len(), "request complete");
        Some(ScgiRequest::new(headers, self.meta, body))
    }
}

impl Decoder for RequestDecoder {
    type Item = ScgiRequest;
    type Error = ParseError;

    /// Forwards all currently available bytes through the tokenizer.
    ///
    /// The completion check runs after every drained event, not only once,
    /// because completion may occur mid-span or exactly on a span boundary.
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if self.done {
            return Ok(None);
        }

        if !src.is_empty() {
            self.started = true;
        }

        loop {
            match self.tokenizer.decode(src)? {
                Some(ScgiEvent::FieldBytes(bytes)) | Some(ScgiEvent::ValueBytes(bytes)) => {
                    self.head.extend_from_slice(&bytes);
                }
                Some(ScgiEvent::FieldEnd) | Some(ScgiEvent::ValueEnd) => {
                    // delimiter inserted here, independent of the wire framing
                    self.head.put_u8(0);
                }
                Some(ScgiEvent::HeadEnd) => self.finish_head()?,
                Some(ScgiEvent::BodyBytes(bytes)) => self.body.extend_from_slice(&bytes),
                None => return Ok(None),
            }

            if self.body_complete() {
                return Ok(self.finish_request());
            }
        }
    }

    /// EOF before the request completed loses that connection's work; EOF
    /// on a connection that never sent a byte is a clean close.
    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(request) = self.decode(buf)? {
            return Ok(Some(request));
        }
        ensure!(self.done || !self.started, ParseError::UnexpectedEof);
        Ok(None)
    }
}

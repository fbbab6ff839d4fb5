//! Wire-level SCGI/netstring tokenizer.
//!
//! The SCGI wire format is a netstring-framed header block followed by the
//! raw body:
//!
//! ```text
//! <head-length>:<name>\0<value>\0<name>\0<value>\0...,<body bytes...>
//! ```
//!
//! The tokenizer turns raw bytes into [`ScgiEvent`]s and knows nothing about
//! header semantics; in particular it cannot tell where the body ends, since
//! the expected length is carried inside the header block it does not
//! interpret. It only enforces the configured size limits and the framing
//! grammar. Any violation is terminal: the tokenizer moves to
//! [`TokenizerState::Errored`] and keeps failing.

use std::cmp;

use bytes::{Buf, BytesMut};
use tokio_util::codec::Decoder;
use tracing::trace;

use crate::protocol::{ParseError, ScgiEvent, TokenizerState};

/// Per-connection size limits enforced by the tokenizer.
///
/// Each buffer is bounded by its own limit. The defaults match a small
/// device-management request profile: 4 KiB of headers, 60 KiB of body.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum netstring-declared header block size in bytes
    pub max_head_bytes: usize,
    /// Maximum body size in bytes
    pub max_body_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_head_bytes: 4 * 1024, max_body_bytes: 60 * 1024 }
    }
}

/// Incremental tokenizer for one SCGI request.
///
/// Implements [`Decoder`] yielding one [`ScgiEvent`] per call, so callers
/// pull events instead of registering callbacks. State advances
/// `Length → Field ⇄ Value → Comma → Body`; the header block must end
/// exactly after a value's NUL terminator.
#[derive(Debug)]
pub struct ScgiTokenizer {
    limits: Limits,
    state: State,
    body_size: usize,
}

#[derive(Debug, Copy, Clone)]
enum State {
    /// Reading the decimal netstring length, up to the `:` separator
    Length { size: usize, seen_digit: bool },
    /// Inside a header name; `remaining` counts head-block bytes left
    Field { remaining: usize },
    /// Inside a header value
    Value { remaining: usize },
    /// Expecting the `,` netstring terminator
    Comma,
    /// Header block done, all further bytes are body
    Body,
    Errored,
}

impl ScgiTokenizer {
    pub fn new(limits: Limits) -> Self {
        Self { limits, state: State::Length { size: 0, seen_digit: false }, body_size: 0 }
    }

    /// Coarse progress, for completion checks by the request decoder.
    pub fn state(&self) -> TokenizerState {
        match self.state {
            State::Length { .. } | State::Field { .. } | State::Value { .. } | State::Comma => TokenizerState::Head,
            State::Body => TokenizerState::Body,
            State::Errored => TokenizerState::Errored,
        }
    }

    /// Running count of body bytes seen so far.
    pub fn body_size(&self) -> usize {
        self.body_size
    }

    fn fail(&mut self, error: ParseError) -> ParseError {
        self.state = State::Errored;
        error
    }
}

impl Decoder for ScgiTokenizer {
    type Item = ScgiEvent;
    type Error = ParseError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        loop {
            match self.state {
                State::Length { mut size, mut seen_digit } => loop {
                    let Some(&byte) = src.first() else {
                        self.state = State::Length { size, seen_digit };
                        return Ok(None);
                    };
                    src.advance(1);
                    match byte {
                        b'0'..=b'9' => {
                            size = size * 10 + usize::from(byte - b'0');
                            seen_digit = true;
                            if size > self.limits.max_head_bytes {
                                return Err(self.fail(ParseError::too_large_head(size, self.limits.max_head_bytes)));
                            }
                        }
                        b':' => {
                            if !seen_digit {
                                return Err(self.fail(ParseError::invalid_length("no digits before ':'")));
                            }
                            trace!(head_size = size, "netstring length parsed");
                            self.state = if size == 0 { State::Comma } else { State::Field { remaining: size } };
                            break;
                        }
                        other => {
                            return Err(self.fail(ParseError::invalid_length(format!("unexpected byte {other:#04x}"))));
                        }
                    }
                },

                State::Field { remaining } => {
                    if remaining == 0 {
                        return Err(self.fail(ParseError::invalid_head("head ended inside a header name")));
                    }
                    if src.is_empty() {
                        return Ok(None);
                    }
                    let window = cmp::min(remaining, src.len());
                    match src[..window].iter().position(|&b| b == 0) {
                        Some(0) => {
                            src.advance(1);
                            self.state = State::Value { remaining: remaining - 1 };
                            return Ok(Some(ScgiEvent::FieldEnd));
                        }
                        Some(at) => {
                            let bytes = src.split_to(at).freeze();
                            self.state = State::Field { remaining: remaining - at };
                            return Ok(Some(ScgiEvent::FieldBytes(bytes)));
                        }
                        None => {
                            let bytes = src.split_to(window).freeze();
                            self.state = State::Field { remaining: remaining - window };
                            return Ok(Some(ScgiEvent::FieldBytes(bytes)));
                        }
                    }
                }

                State::Value { remaining } => {
                    if remaining == 0 {
                        // a name was terminated but its value was not
                        return Err(self.fail(ParseError::invalid_head("head ended inside a header value")));
                    }
                    if src.is_empty() {
                        return Ok(None);
                    }
                    let window = cmp::min(remaining, src.len());
                    match src[..window].iter().position(|&b| b == 0) {
                        Some(0) => {
                            src.advance(1);
                            let remaining = remaining - 1;
                            self.state = if remaining == 0 { State::Comma } else { State::Field { remaining } };
                            return Ok(Some(ScgiEvent::ValueEnd));
                        }
                        Some(at) => {
                            let bytes = src.split_to(at).freeze();
                            self.state = State::Value { remaining: remaining - at };
                            return Ok(Some(ScgiEvent::ValueBytes(bytes)));
                        }
                        None => {
                            let bytes = src.split_to(window).freeze();
                            self.state = State::Value { remaining: remaining - window };
                            return Ok(Some(ScgiEvent::ValueBytes(bytes)));
                        }
                    }
                }

                State::Comma => {
                    let Some(&byte) = src.first() else {
                        return Ok(None);
                    };
                    if byte != b',' {
                        return Err(self.fail(ParseError::invalid_head(format!("expected ',' after head, got {byte:#04x}"))));
                    }
                    src.advance(1);
                    self.state = State::Body;
                    return Ok(Some(ScgiEvent::HeadEnd));
                }

                State::Body => {
                    if src.is_empty() {
                        return Ok(None);
                    }
                    let size = self.body_size + src.len();
                    if size > self.limits.max_body_bytes {
                        return Err(self.fail(ParseError::too_large_body(size, self.limits.max_body_bytes)));
                    }
                    let bytes = src.split().freeze();
                    self.body_size += bytes.len();
                    return Ok(Some(ScgiEvent::BodyBytes(bytes)));
                }

                State::Errored => {
                    return Err(ParseError::invalid_head("tokenizer already failed"));
                }
            }
        }
    }
}

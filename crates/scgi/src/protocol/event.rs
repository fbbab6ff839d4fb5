use bytes::Bytes;

/// A parse event produced by the wire-level SCGI tokenizer.
///
/// The tokenizer classifies raw bytes into this enumeration; the request
/// decoder consumes the events without ever touching the wire framing
/// itself. Byte-carrying variants hold spans, not single bytes, so a large
/// chunk costs one event rather than one per byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScgiEvent {
    /// A span of header name bytes
    FieldBytes(Bytes),
    /// The current header name is complete
    FieldEnd,
    /// A span of header value bytes
    ValueBytes(Bytes),
    /// The current header value is complete
    ValueEnd,
    /// The whole header block is complete; body bytes follow
    HeadEnd,
    /// A span of body bytes
    BodyBytes(Bytes),
}

/// Coarse tokenizer progress, exposed alongside the running body byte count.
///
/// There is no `Done` state here: the tokenizer cannot know where the body
/// ends, because the expected length comes out of the header block it does
/// not interpret. Completion is declared by the request decoder.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenizerState {
    /// Reading the netstring length or the header block
    Head,
    /// The header block is complete, reading body bytes
    Body,
    /// A framing violation was reported; the tokenizer is unusable
    Errored,
}

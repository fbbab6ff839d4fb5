use bytes::Bytes;

/// An ordered table of SCGI header name/value pairs.
///
/// SCGI header names are matched case-sensitively and byte-exactly, unlike
/// HTTP header names, so this is a plain ordered list rather than a
/// case-folding map. Lookup returns the first occurrence; later duplicates
/// stay visible through iteration.
#[derive(Debug, Clone, Default)]
pub struct ScgiHeaders {
    pairs: Vec<(Bytes, Bytes)>,
}

impl ScgiHeaders {
    pub(crate) fn new() -> Self {
        Default::default()
    }

    pub(crate) fn push(&mut self, name: Bytes, value: Bytes) {
        self.pairs.push((name, value));
    }

    /// Returns the value of the first header with the given name, if any.
    pub fn get(&self, name: &[u8]) -> Option<&Bytes> {
        self.pairs.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Iterates over all pairs in the order they appeared on the wire.
    pub fn iter(&self) -> impl Iterator<Item = (&Bytes, &Bytes)> {
        self.pairs.iter().map(|(n, v)| (n, v))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// The request method as far as this engine cares about it.
///
/// Only `POST` is specially recognized; the extractor leaves anything else
/// at the prior value, so a non-POST request reads as `Unknown`. `Other` is
/// part of the model for callers that classify methods themselves.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Unknown,
    Post,
    Other,
}

/// Typed facts extracted from the header block.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RequestMeta {
    /// Declared body length in bytes; 0 when the header is absent
    pub content_length: u64,
    /// Recognized request method
    pub method: Method,
}

/// A fully received SCGI request: header table, extracted metadata and the
/// complete body.
#[derive(Debug, Clone)]
pub struct ScgiRequest {
    headers: ScgiHeaders,
    meta: RequestMeta,
    body: Bytes,
}

impl ScgiRequest {
    pub(crate) fn new(headers: ScgiHeaders, meta: RequestMeta, body: Bytes) -> Self {
        Self { headers, meta, body }
    }

    pub fn headers(&self) -> &ScgiHeaders {
        &self.headers
    }

    pub fn meta(&self) -> RequestMeta {
        self.meta
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consumes the request and returns the body.
    pub fn into_body(self) -> Bytes {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins_on_lookup() {
        let mut headers = ScgiHeaders::new();
        headers.push(Bytes::from_static(b"X"), Bytes::from_static(b"1"));
        headers.push(Bytes::from_static(b"X"), Bytes::from_static(b"2"));

        assert_eq!(headers.get(b"X"), Some(&Bytes::from_static(b"1")));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut headers = ScgiHeaders::new();
        headers.push(Bytes::from_static(b"CONTENT_LENGTH"), Bytes::from_static(b"5"));

        assert!(headers.get(b"content_length").is_none());
        assert_eq!(headers.get(b"CONTENT_LENGTH"), Some(&Bytes::from_static(b"5")));
    }
}

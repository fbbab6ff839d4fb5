//! Header extraction over a completed, NUL-delimited head buffer.
//!
//! The request decoder inserts a NUL after every name and value it buffers,
//! so by the time the header block closes the head buffer is a flat sequence
//! of back-to-back NUL-terminated segments: name, value, name, value. This
//! module scans that buffer once, producing the ordered header table and the
//! typed request metadata.

use bytes::Bytes;
use tracing::trace;

use crate::protocol::{Method, RequestMeta, ScgiHeaders};

const CONTENT_LENGTH: &[u8] = b"CONTENT_LENGTH";
const REQUEST_METHOD: &[u8] = b"REQUEST_METHOD";
const POST: &[u8] = b"POST";

/// Scans the head buffer for NUL-delimited name/value pairs, in order.
///
/// Recognized names are matched byte-exactly and case-sensitively:
///
/// - the first `CONTENT_LENGTH` sets `meta.content_length` (empty or
///   non-numeric values count as 0); later duplicates are ignored
/// - `REQUEST_METHOD` with the exact value `POST` sets `meta.method`; any
///   other value leaves the method untouched
///
/// A dangling name with no terminated value stops the scan at the last
/// complete pair. That is not an error here: completeness of the header
/// block is the tokenizer's responsibility.
pub(crate) fn extract(head: &Bytes, meta: &mut RequestMeta) -> ScgiHeaders {
    let mut headers = ScgiHeaders::new();
    let mut content_length_seen = false;
    let mut at = 0;

    loop {
        let Some(name_end) = find_nul(head, at) else { break };
        let Some(value_end) = find_nul(head, name_end + 1) else { break };

        let name = head.slice(at..name_end);
        let value = head.slice(name_end + 1..value_end);
        at = value_end + 1;

        trace!(
            name = %String::from_utf8_lossy(&name),
            value = %String::from_utf8_lossy(&value),
            "extracted header"
        );

        if name == CONTENT_LENGTH {
            if !content_length_seen {
                content_length_seen = true;
                meta.content_length = parse_decimal(&value);
            }
        } else if name == REQUEST_METHOD && value == POST {
            meta.method = Method::Post;
        }

        headers.push(name, value);
    }

    headers
}

fn find_nul(bytes: &[u8], from: usize) -> Option<usize> {
    bytes.get(from..)?.iter().position(|&b| b == 0).map(|at| from + at)
}

fn parse_decimal(value: &[u8]) -> u64 {
    std::str::from_utf8(value).ok().and_then(|s| s.parse::<u64>().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn head_of(pairs: &[(&str, &str)]) -> Bytes {
        let mut head = Vec::new();
        for (name, value) in pairs {
            head.extend_from_slice(name.as_bytes());
            head.push(0);
            head.extend_from_slice(value.as_bytes());
            head.push(0);
        }
        Bytes::from(head)
    }

    #[test]
    fn yields_pairs_in_wire_order() {
        let head = head_of(&[("B", "2"), ("A", "1"), ("C", "3")]);
        let mut meta = RequestMeta::default();

        let headers = extract(&head, &mut meta);

        let pairs: Vec<_> = headers.iter().map(|(n, v)| (n.as_ref().to_vec(), v.as_ref().to_vec())).collect();
        assert_eq!(
            pairs,
            vec![
                (b"B".to_vec(), b"2".to_vec()),
                (b"A".to_vec(), b"1".to_vec()),
                (b"C".to_vec(), b"3".to_vec()),
            ]
        );
    }

    #[test]
    fn content_length_is_parsed() {
        let head = head_of(&[("CONTENT_LENGTH", "42")]);
        let mut meta = RequestMeta::default();

        extract(&head, &mut meta);
        assert_eq!(meta.content_length, 42);
    }

    #[test]
    fn absent_content_length_defaults_to_zero() {
        let head = head_of(&[("REQUEST_METHOD", "POST")]);
        let mut meta = RequestMeta::default();

        extract(&head, &mut meta);
        assert_eq!(meta.content_length, 0);
    }

    #[test]
    fn duplicate_content_length_is_ignored() {
        let head = head_of(&[("CONTENT_LENGTH", "42"), ("CONTENT_LENGTH", "7")]);
        let mut meta = RequestMeta::default();

        extract(&head, &mut meta);
        assert_eq!(meta.content_length, 42);
    }

    #[test]
    fn non_numeric_content_length_counts_as_zero() {
        let head = head_of(&[("CONTENT_LENGTH", "forty-two"), ("CONTENT_LENGTH", "")]);
        let mut meta = RequestMeta::default();

        extract(&head, &mut meta);
        assert_eq!(meta.content_length, 0);
    }

    #[test]
    fn post_method_is_recognized() {
        let head = head_of(&[("REQUEST_METHOD", "POST")]);
        let mut meta = RequestMeta::default();

        extract(&head, &mut meta);
        assert_eq!(meta.method, Method::Post);
    }

    #[test]
    fn non_post_method_leaves_prior_value() {
        // pins the engine behavior: GET is indistinguishable from unset
        let head = head_of(&[("REQUEST_METHOD", "GET")]);
        let mut meta = RequestMeta::default();

        extract(&head, &mut meta);
        assert_eq!(meta.method, Method::Unknown);

        let mut meta = RequestMeta { method: Method::Post, ..Default::default() };
        extract(&head, &mut meta);
        assert_eq!(meta.method, Method::Post);
    }

    #[test]
    fn method_name_is_case_sensitive() {
        let head = head_of(&[("request_method", "POST")]);
        let mut meta = RequestMeta::default();

        extract(&head, &mut meta);
        assert_eq!(meta.method, Method::Unknown);
    }

    #[test]
    fn dangling_name_stops_at_last_complete_pair() {
        let mut head = head_of(&[("A", "1")]).as_ref().to_vec();
        head.extend_from_slice(b"DANGLING");
        let head = Bytes::from(head);
        let mut meta = RequestMeta::default();

        let headers = extract(&head, &mut meta);
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get(b"A"), Some(&Bytes::from_static(b"1")));
    }

    #[test]
    fn empty_buffer_yields_nothing() {
        let mut meta = RequestMeta::default();
        let headers = extract(&Bytes::new(), &mut meta);

        assert!(headers.is_empty());
        assert_eq!(meta, RequestMeta::default());
    }
}

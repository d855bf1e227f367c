//! Percent-encoding for Atlas admin API path segments.
//!
//! Project ids, cluster names, database names and collection names are all
//! interpolated into the request path. Collection names in particular may
//! contain spaces, dots and other punctuation, so every segment is encoded
//! before it is joined into the URL.
//!
//! ```
//! use atlas_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("my movies"), "my%20movies");
//! assert_eq!(encode_path_segment("a/b"), "a%2Fb");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in a URL path segment.
///
/// RFC 3986 section 3.3 plus characters that would otherwise change the
/// request shape: `/` (path traversal), `?` and `#` (query/fragment) and
/// `%` (double decoding).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

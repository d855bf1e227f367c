//! REST API endpoint implementations.

mod request;
mod search_indexes;
pub mod url_encoding;

pub use request::{RetryPolicy, send_request_with_retry};
pub use search_indexes::{list_search_indexes, search_indexes_path};
pub use url_encoding::encode_path_segment;

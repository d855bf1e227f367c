//! Data models for Atlas admin API responses.

pub mod common;
pub mod search_indexes;

pub use common::AtlasErrorBody;
pub use search_indexes::{
    CustomAnalyzer, IndexMapping, ListSearchIndexesParams, SearchIndex, search_indexes_from_json,
};

//! Atlas Search indexes data source.
//!
//! Reads the Atlas Search index definitions of one collection and projects
//! them into flat, primitive-typed records that a declarative configuration
//! engine can store and diff.
//!
//! The read runs as a single pass:
//!
//! 1. [`query::build_query`] validates the configured attributes.
//! 2. A [`lister::SearchIndexLister`] fetches the raw records.
//! 3. [`flatten::flatten_search_indexes`] projects them into flat records.
//! 4. [`assemble::assemble`] packages the outputs, which are then committed to
//!    the caller's [`resource_data::ResourceData`].
//!
//! The lister is always passed in by the caller; nothing is resolved from
//! global state and nothing is cached between reads.

pub mod assemble;
pub mod error;
pub mod flatten;
pub mod lister;
pub mod query;
mod read;
pub mod resource_data;
pub mod schema;

pub use assemble::{SearchIndexesResult, assemble};
pub use error::DataSourceError;
pub use flatten::{FlatAnalyzer, FlatIndexRecord, flatten_search_indexes};
pub use lister::SearchIndexLister;
pub use query::{SearchIndexQuery, build_query};
pub use read::read_search_indexes;
pub use resource_data::ResourceData;
pub use schema::{Attribute, AttributeKind, AttributeMode, search_indexes_schema};

pub use atlas_client::{CustomAnalyzer, IndexMapping, SearchIndex as SearchIndexRecord};

pub mod cache;
pub mod models;
pub mod query;

pub use cache::QueryCache;
pub use models::{Invalidation, QueryKey};
pub use query::QueryState;

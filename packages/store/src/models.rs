//! # Cache keys and invalidation events
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`QueryKey`] | The name of a cached read, e.g. `"users"`. Cheap to clone and compare. |
//! | [`Invalidation`] | The event published by [`crate::QueryCache::invalidate`]: which key went stale and the generation it moved to. |
//!
//! Subscribers treat every [`Invalidation`] for a key they display as a request
//! to refetch that key exactly once.

use std::borrow::Cow;
use std::fmt;

/// Name of a cached query.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey(Cow<'static, str>);

impl QueryKey {
    /// Key for a statically known query name.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A key was marked stale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invalidation {
    /// The query that must be refetched.
    pub key: QueryKey,
    /// Generation of the key after invalidation (first invalidation is 1).
    pub generation: u64,
}

impl Invalidation {
    /// Whether this event concerns `key`.
    pub fn is_for(&self, key: &QueryKey) -> bool {
        &self.key == key
    }
}

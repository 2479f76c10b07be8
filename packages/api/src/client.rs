//! # UserDirectoryClient: list/create with invalidate-on-success
//!
//! Wraps a [`UserDirectory`] together with a [`store::QueryCache`]. The only
//! cache rule is the one the form needs: a successful create invalidates the
//! [`USERS_KEY`] query, and every view watching that key refetches once.
//!
//! ```text
//! create_user ──Ok──▶ cache.invalidate("users") ──event──▶ UsersWatch::changed ──▶ list_users
//!             └─Err─▶ logged, cache untouched
//! ```
//!
//! Failures are returned as [`DirectoryError`] and logged here, so callers that
//! only fire-and-forget a create still leave a trace.

use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, error, info, warn};

use store::{Invalidation, QueryCache, QueryKey};

use crate::directory::UserDirectory;
use crate::error::DirectoryError;
use crate::models::{NewUser, UserRecord};

/// Cache key of the user list.
pub const USERS_KEY: QueryKey = QueryKey::from_static("users");

#[derive(Clone, Debug)]
pub struct UserDirectoryClient<D> {
    directory: D,
    cache: QueryCache,
}

impl<D> PartialEq for UserDirectoryClient<D> {
    /// Two clients are equal when they share a cache, which is what decides
    /// whether views built on them see the same invalidations.
    fn eq(&self, other: &Self) -> bool {
        self.cache.same_cache(&other.cache)
    }
}

impl<D: UserDirectory> UserDirectoryClient<D> {
    pub fn new(directory: D) -> Self {
        Self::with_cache(directory, QueryCache::new())
    }

    pub fn with_cache(directory: D, cache: QueryCache) -> Self {
        Self { directory, cache }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Fetch the full user list in server order.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, DirectoryError> {
        match self.directory.list_users().await {
            Ok(users) => {
                debug!(count = users.len(), "fetched users");
                Ok(users)
            }
            Err(e) => {
                error!(error = %e, "failed to fetch users");
                Err(e)
            }
        }
    }

    /// Create a user from the three form fields, as entered.
    pub async fn create_user(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        bio: impl Into<String>,
    ) -> Result<(), DirectoryError> {
        self.submit(NewUser::new(name, email, bio)).await
    }

    /// Create `user` and, only if the service accepted it, invalidate the list.
    pub async fn submit(&self, user: NewUser) -> Result<(), DirectoryError> {
        match self.directory.create_user(&user).await {
            Ok(()) => {
                let event = self.cache.invalidate(&USERS_KEY);
                info!(
                    name = %user.name,
                    generation = event.generation,
                    "user created, list invalidated"
                );
                Ok(())
            }
            Err(e) => {
                error!(error = %e, name = %user.name, "failed to create user");
                Err(e)
            }
        }
    }

    /// Start watching the user list for invalidations.
    pub fn watch_users(&self) -> UsersWatch {
        UsersWatch {
            events: self.cache.subscribe(),
        }
    }
}

/// Receiver of user-list invalidations, filtered to [`USERS_KEY`].
pub struct UsersWatch {
    events: broadcast::Receiver<Invalidation>,
}

impl UsersWatch {
    /// Wait until the user list goes stale.
    ///
    /// Returns `false` once the cache has been dropped and no more events can
    /// arrive. Missed events after a lag collapse into one refetch.
    pub async fn changed(&mut self) -> bool {
        loop {
            match self.events.recv().await {
                Ok(event) if event.is_for(&USERS_KEY) => return true,
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "user list watcher lagged");
                    return true;
                }
                Err(RecvError::Closed) => return false,
            }
        }
    }

    /// Non-blocking variant of [`changed`](Self::changed): whether an
    /// invalidation of the user list is already queued.
    #[cfg(test)]
    pub fn has_changed(&mut self) -> bool {
        use tokio::sync::broadcast::error::TryRecvError;

        loop {
            match self.events.try_recv() {
                Ok(event) if event.is_for(&USERS_KEY) => return true,
                Ok(_) => continue,
                Err(TryRecvError::Lagged(_)) => return true,
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return false,
            }
        }
    }
}

//! # API crate: client for the user directory service
//!
//! Everything the frontends need to talk to the external directory service:
//! the wire model, typed errors, configuration, and the client that couples
//! the create call to cache invalidation.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | `UserRecord`, `NewUser`, and the opaque `UserId` |
//! | [`error`] | [`DirectoryError`]: transport, status, and decode failures |
//! | [`config`] | [`DirectoryConfig`]: base URL, `USER_DIRECTORY_URL` override |
//! | [`directory`] | The [`UserDirectory`] trait and its HTTP implementation |
//! | [`client`] | [`UserDirectoryClient`]: list/create plus invalidate-on-success |
//!
//! ## Endpoints
//!
//! - `GET {base}/user` → JSON array of user records
//! - `POST {base}/user` with `{name, email, bio}` → response body ignored

pub mod client;
pub mod config;
pub mod directory;
pub mod error;
pub mod models;

#[cfg(test)]
mod memory;

pub use client::{UserDirectoryClient, UsersWatch, USERS_KEY};
pub use config::DirectoryConfig;
pub use directory::{HttpDirectory, UserDirectory};
pub use error::DirectoryError;
pub use models::{NewUser, UserId, UserRecord};

/// Client over the real HTTP transport, as used by the frontends.
pub type HttpUserDirectory = UserDirectoryClient<HttpDirectory>;

impl HttpUserDirectory {
    /// HTTP client configured from the environment.
    pub fn from_env() -> Self {
        UserDirectoryClient::new(HttpDirectory::new(DirectoryConfig::from_env()))
    }
}

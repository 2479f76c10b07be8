//! Data models for the directory service.

mod user;

pub use user::{NewUser, UserId, UserRecord};

//! # User records exchanged with the directory service
//!
//! ## [`UserRecord`]
//!
//! One element of the `GET /user` array: `{id, name, email, bio}`. The record is
//! created and owned by the server; the client only ever reads it.
//!
//! ## [`UserId`]
//!
//! The server-assigned identifier is opaque. Depending on the backend it arrives
//! as any JSON scalar (integer, float, string, bool), so it is kept as an
//! untagged enum and only ever displayed or used as a render key.
//!
//! Decoding is lenient per record: `name`, `email` and `bio` read a missing or
//! `null` value as `""` and any other scalar as its JSON text, so one odd
//! record does not fail the whole list.
//!
//! ## [`NewUser`]
//!
//! The `POST /user` payload. Field order is part of the wire format:
//! `{"name":…,"email":…,"bio":…}`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Opaque server-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(serde_json::Number),
    Text(String),
    Bool(bool),
}

impl From<i64> for UserId {
    fn from(n: i64) -> Self {
        UserId::Number(n.into())
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId::Text(s.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{n}"),
            UserId::Text(s) => f.write_str(s),
            UserId::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// `null` → `""`, strings as-is, anything else as its JSON text.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// A user as stored by the directory service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub bio: String,
}

/// Fields submitted to create a user. Not validated client-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub bio: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            bio: bio.into(),
        }
    }

    /// Attach a server-assigned id, producing the stored record.
    pub fn into_record(self, id: UserId) -> UserRecord {
        UserRecord {
            id,
            name: self.name,
            email: self.email,
            bio: self.bio,
        }
    }
}

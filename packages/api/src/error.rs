use thiserror::Error;

/// Why a call to the directory service failed.
///
/// Stores messages rather than source errors so it can be cloned into UI state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("directory service unreachable: {0}")]
    Transport(String),
    #[error("directory service returned status {0}")]
    Status(u16),
    #[error("malformed user list: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for DirectoryError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            DirectoryError::Decode(e.to_string())
        } else {
            DirectoryError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(e: serde_json::Error) -> Self {
        DirectoryError::Decode(e.to_string())
    }
}

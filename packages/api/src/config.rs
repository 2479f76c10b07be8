//! Directory service configuration.

/// Base URL used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable overriding the base URL.
pub const BASE_URL_VAR: &str = "USER_DIRECTORY_URL";

/// Where the directory service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    pub base_url: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl DirectoryConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read `USER_DIRECTORY_URL` (after loading `.env`), falling back to the default.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        match std::env::var(BASE_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// The browser has no process environment; use the value baked in at build time.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        match option_env!("USER_DIRECTORY_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Endpoint for both listing and creating users.
    pub fn users_url(&self) -> String {
        format!("{}/user", self.base_url)
    }
}

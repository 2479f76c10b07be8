//! # Directory transport: the two calls the client makes
//!
//! [`UserDirectory`] is the seam between the client logic and the wire. It has
//! exactly two operations, mirroring the service's two endpoints:
//!
//! | Method | Request |
//! |--------|---------|
//! | [`list_users`](UserDirectory::list_users) | `GET {base}/user`, body decoded as a JSON array of [`UserRecord`] |
//! | [`create_user`](UserDirectory::create_user) | `POST {base}/user` with a JSON [`NewUser`] body; the response body is ignored |
//!
//! [`HttpDirectory`] is the real implementation over `reqwest` (which uses
//! `fetch` when compiled to wasm). Unit tests swap in an in-memory double.
//!
//! Any non-success status is a failure for both calls. Nothing is retried.

use tracing::debug;

use crate::config::DirectoryConfig;
use crate::error::DirectoryError;
use crate::models::{NewUser, UserRecord};

/// Async access to a user directory.
pub trait UserDirectory {
    fn list_users(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<UserRecord>, DirectoryError>>;
    fn create_user(
        &self,
        user: &NewUser,
    ) -> impl std::future::Future<Output = Result<(), DirectoryError>>;
}

/// Directory service reached over HTTP.
#[derive(Clone, Debug)]
pub struct HttpDirectory {
    http: reqwest::Client,
    config: DirectoryConfig,
}

impl HttpDirectory {
    pub fn new(config: DirectoryConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }
}

impl UserDirectory for HttpDirectory {
    async fn list_users(&self) -> Result<Vec<UserRecord>, DirectoryError> {
        let url = self.config.users_url();
        debug!(%url, "fetching users");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let users: Vec<UserRecord> = serde_json::from_str(&body)?;
        Ok(users)
    }

    async fn create_user(&self, user: &NewUser) -> Result<(), DirectoryError> {
        let url = self.config.users_url();
        debug!(%url, name = %user.name, "creating user");

        // `.json()` sets `Content-Type: application/json`.
        let response = self.http.post(&url).json(user).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status.as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::State,
        http::{header, HeaderMap, StatusCode},
        routing::get,
        Json, Router,
    };
    use serde_json::json;
    use tokio::net::TcpListener;

    use super::*;
    use crate::models::UserId;

    type Captured = Arc<Mutex<Vec<(Option<String>, String)>>>;

    async fn serve(router: Router) -> DirectoryConfig {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        DirectoryConfig::new(format!("http://{addr}"))
    }

    async fn capture_post(
        State(captured): State<Captured>,
        headers: HeaderMap,
        body: String,
    ) -> StatusCode {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        captured.lock().unwrap().push((content_type, body));
        StatusCode::CREATED
    }

    #[tokio::test]
    async fn test_list_users_preserves_server_order() {
        let router = Router::new().route(
            "/user",
            get(|| async {
                Json(json!([
                    {"id": 3, "name": "Cy", "email": "c@x.com", "bio": "third"},
                    {"id": 1, "name": "Ann", "email": "a@x.com", "bio": "first"},
                    {"id": "b-2", "name": "Bob", "email": "b@x.com", "bio": "second"},
                ]))
            }),
        );
        let directory = HttpDirectory::new(serve(router).await);

        let users = directory.list_users().await.unwrap();

        assert_eq!(users.len(), 3);
        let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Cy", "Ann", "Bob"]);
        assert_eq!(users[2].id, UserId::from("b-2"));
    }

    #[tokio::test]
    async fn test_list_users_tolerates_null_bio() {
        let router = Router::new().route(
            "/user",
            get(|| async {
                Json(json!([
                    {"id": 1, "name": "Ann", "email": "a@x.com", "bio": null},
                    {"id": 1.5, "name": "Bob", "email": "b@x.com"},
                ]))
            }),
        );
        let directory = HttpDirectory::new(serve(router).await);

        let users = directory.list_users().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].bio, "");
        assert_eq!(users[1].bio, "");
        assert_eq!(users[1].id.to_string(), "1.5");
    }

    #[tokio::test]
    async fn test_list_users_empty_array() {
        let router = Router::new().route("/user", get(|| async { Json(json!([])) }));
        let directory = HttpDirectory::new(serve(router).await);

        assert_eq!(directory.list_users().await, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_list_users_malformed_json() {
        let router = Router::new().route(
            "/user",
            get(|| async { ([(header::CONTENT_TYPE, "application/json")], "[{\"id\": 1,") }),
        );
        let directory = HttpDirectory::new(serve(router).await);

        let result = directory.list_users().await;
        assert!(matches!(result, Err(DirectoryError::Decode(_))));
    }

    #[tokio::test]
    async fn test_list_users_non_array_body() {
        let router = Router::new().route(
            "/user",
            get(|| async { Json(json!({"users": []})) }),
        );
        let directory = HttpDirectory::new(serve(router).await);

        let result = directory.list_users().await;
        assert!(matches!(result, Err(DirectoryError::Decode(_))));
    }

    #[tokio::test]
    async fn test_list_users_server_error() {
        let router = Router::new().route(
            "/user",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let directory = HttpDirectory::new(serve(router).await);

        assert_eq!(
            directory.list_users().await,
            Err(DirectoryError::Status(500))
        );
    }

    #[tokio::test]
    async fn test_list_users_connection_refused() {
        // Bind then drop to get a port nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let directory = HttpDirectory::new(DirectoryConfig::new(format!("http://{addr}")));

        let result = directory.list_users().await;
        assert!(matches!(result, Err(DirectoryError::Transport(_))));
    }

    #[tokio::test]
    async fn test_create_user_sends_exact_json_body() {
        let captured: Captured = Arc::default();
        let router = Router::new()
            .route("/user", axum::routing::post(capture_post))
            .with_state(captured.clone());
        let directory = HttpDirectory::new(serve(router).await);

        directory
            .create_user(&NewUser::new("Ann", "a@x.com", "hi"))
            .await
            .unwrap();

        let requests = captured.lock().unwrap().clone();
        assert_eq!(requests.len(), 1);
        let (content_type, body) = &requests[0];
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, r#"{"name":"Ann","email":"a@x.com","bio":"hi"}"#);
    }

    #[tokio::test]
    async fn test_create_user_ignores_response_body() {
        let router = Router::new().route(
            "/user",
            axum::routing::post(|| async { "not json at all" }),
        );
        let directory = HttpDirectory::new(serve(router).await);

        let result = directory.create_user(&NewUser::default()).await;
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_create_user_rejected_status() {
        let router = Router::new().route(
            "/user",
            axum::routing::post(|| async { StatusCode::BAD_REQUEST }),
        );
        let directory = HttpDirectory::new(serve(router).await);

        let result = directory.create_user(&NewUser::new("", "", "")).await;
        assert_eq!(result, Err(DirectoryError::Status(400)));
    }
}

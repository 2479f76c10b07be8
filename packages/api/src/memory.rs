use std::sync::{Arc, Mutex};

use crate::directory::UserDirectory;
use crate::error::DirectoryError;
use crate::models::{NewUser, UserId, UserRecord};

/// In-memory UserDirectory for unit tests.
///
/// Assigns sequential numeric ids and counts every call, so tests can assert
/// how often the list was fetched.
#[derive(Clone, Debug, Default)]
pub struct MemoryDirectory {
    users: Arc<Mutex<Vec<UserRecord>>>,
    failure: Arc<Mutex<Option<DirectoryError>>>,
    list_calls: Arc<Mutex<usize>>,
    created: Arc<Mutex<Vec<NewUser>>>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory pre-populated with `users`, in order.
    pub fn with_users(users: Vec<UserRecord>) -> Self {
        let directory = Self::default();
        *directory.users.lock().unwrap() = users;
        directory
    }

    /// Make every subsequent call fail with `error`, or succeed again with `None`.
    pub fn set_failure(&self, error: Option<DirectoryError>) {
        *self.failure.lock().unwrap() = error;
    }

    /// Number of `list_users` calls so far, failed ones included.
    pub fn list_calls(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }

    /// Payloads of every successful `create_user`, in order.
    pub fn created(&self) -> Vec<NewUser> {
        self.created.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), DirectoryError> {
        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl UserDirectory for MemoryDirectory {
    async fn list_users(&self) -> Result<Vec<UserRecord>, DirectoryError> {
        *self.list_calls.lock().unwrap() += 1;
        self.check_failure()?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn create_user(&self, user: &NewUser) -> Result<(), DirectoryError> {
        self.check_failure()?;
        let mut users = self.users.lock().unwrap();
        let id = UserId::from(users.len() as i64 + 1);
        users.push(user.clone().into_record(id));
        self.created.lock().unwrap().push(user.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_list() {
        let directory = MemoryDirectory::new();
        assert!(directory.list_users().await.unwrap().is_empty());

        directory
            .create_user(&NewUser::new("Ann", "a@x.com", "hi"))
            .await
            .unwrap();
        directory
            .create_user(&NewUser::new("Bob", "b@x.com", ""))
            .await
            .unwrap();

        let users = directory.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, UserId::from(1));
        assert_eq!(users[1].name, "Bob");
        assert_eq!(directory.list_calls(), 2);
        assert_eq!(directory.created().len(), 2);
    }

    #[tokio::test]
    async fn test_failure_mode() {
        let directory = MemoryDirectory::new();
        directory.set_failure(Some(DirectoryError::Status(503)));

        assert_eq!(
            directory.list_users().await,
            Err(DirectoryError::Status(503))
        );
        assert!(directory.create_user(&NewUser::default()).await.is_err());
        assert!(directory.created().is_empty());
        assert_eq!(directory.list_calls(), 1);

        directory.set_failure(None);
        assert!(directory.list_users().await.is_ok());
    }
}

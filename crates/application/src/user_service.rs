use std::sync::Arc;

use teamroles_core::{AppError, AppResult};
use teamroles_domain::{User, UserId};

use crate::UserDirectory;

/// Application service for read-through user lookups.
#[derive(Clone)]
pub struct UserService {
    directory: Arc<dyn UserDirectory>,
}

impl UserService {
    /// Creates a new service from the user directory port.
    #[must_use]
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    /// Returns one user or `NotFound` when the directory has none.
    pub async fn get_user(&self, user_id: UserId) -> AppResult<User> {
        self.directory
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found_with_id("User", user_id))
    }

    /// Returns every user known to the directory.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.directory.list_users().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use teamroles_core::AppError;
    use teamroles_domain::{User, UserId};

    use super::UserService;
    use crate::test_support::FakeUserDirectory;

    #[tokio::test]
    async fn get_user_returns_known_user() {
        let user_id = UserId::new();
        let mut user = User::new(user_id);
        user.display_name = Some("gianniwehner".to_owned());
        let service = UserService::new(Arc::new(FakeUserDirectory::with_users(vec![user.clone()])));

        assert_eq!(service.get_user(user_id).await, Ok(user));
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let service = UserService::new(Arc::new(FakeUserDirectory::default()));
        let user_id = UserId::new();

        assert_eq!(
            service.get_user(user_id).await,
            Err(AppError::not_found_with_id("User", user_id))
        );
    }

    #[tokio::test]
    async fn list_users_passes_directory_result_through() {
        let users = vec![User::new(UserId::new()), User::new(UserId::new())];
        let service = UserService::new(Arc::new(FakeUserDirectory::with_users(users.clone())));

        assert_eq!(service.list_users().await, Ok(users));
    }
}

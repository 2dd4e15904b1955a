use async_trait::async_trait;

use teamroles_core::AppResult;
use teamroles_domain::{Team, TeamId, User, UserId};

/// Port for the external team directory.
///
/// A missing team is `Ok(None)`; transport failures are errors.
#[async_trait]
pub trait TeamDirectory: Send + Sync {
    /// Fetches one team by identifier.
    async fn get_team(&self, team_id: TeamId) -> AppResult<Option<Team>>;

    /// Fetches every team known to the directory.
    async fn list_teams(&self) -> AppResult<Vec<Team>>;
}

/// Port for the external user directory.
///
/// A missing user is `Ok(None)`; transport failures are errors.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetches one user by identifier.
    async fn get_user(&self, user_id: UserId) -> AppResult<Option<User>>;

    /// Fetches every user known to the directory.
    async fn list_users(&self) -> AppResult<Vec<User>>;
}

use std::sync::Arc;

use teamroles_core::{AppError, AppResult};
use teamroles_domain::{Team, TeamId, UserId};

use crate::TeamDirectory;

/// Application service for read-through team lookups.
#[derive(Clone)]
pub struct TeamService {
    directory: Arc<dyn TeamDirectory>,
}

impl TeamService {
    /// Creates a new service from the team directory port.
    #[must_use]
    pub fn new(directory: Arc<dyn TeamDirectory>) -> Self {
        Self { directory }
    }

    /// Returns one team or `NotFound` when the directory has none.
    pub async fn get_team(&self, team_id: TeamId) -> AppResult<Team> {
        self.directory
            .get_team(team_id)
            .await?
            .ok_or_else(|| AppError::not_found_with_id("Team", team_id))
    }

    /// Returns every team known to the directory.
    pub async fn list_teams(&self) -> AppResult<Vec<Team>> {
        self.directory.list_teams().await
    }

    /// Returns whether the user leads or belongs to the team.
    ///
    /// The team is fetched fresh on every call.
    pub async fn is_member_of_team(&self, team_id: TeamId, user_id: UserId) -> AppResult<bool> {
        let team = self.get_team(team_id).await?;
        Ok(team.includes(user_id))
    }
}

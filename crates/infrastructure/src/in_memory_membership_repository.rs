use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use teamroles_application::{MembershipRepository, RoleRepository};
use teamroles_core::{AppError, AppResult};
use teamroles_domain::{Membership, RoleId, TeamId, UserId};

use crate::InMemoryRoleRepository;

/// In-memory membership repository implementation.
///
/// Role references are checked against the shared role repository the same
/// way the Postgres foreign key does.
#[derive(Debug)]
pub struct InMemoryMembershipRepository {
    roles: Arc<InMemoryRoleRepository>,
    memberships: RwLock<Vec<Membership>>,
}

impl InMemoryMembershipRepository {
    /// Creates an empty repository referencing the given role repository.
    #[must_use]
    pub fn new(roles: Arc<InMemoryRoleRepository>) -> Self {
        Self {
            roles,
            memberships: RwLock::new(Vec::new()),
        }
    }
}

fn same_triple(membership: &Membership, role_id: RoleId, user_id: UserId, team_id: TeamId) -> bool {
    membership.role().id() == role_id
        && membership.user_id() == user_id
        && membership.team_id() == team_id
}

#[async_trait]
impl MembershipRepository for InMemoryMembershipRepository {
    async fn save_membership(&self, membership: Membership) -> AppResult<Membership> {
        let role_id = membership.role().id();
        if self.roles.find_role(role_id).await?.is_none() {
            return Err(AppError::not_found_with_id("Role", role_id));
        }

        let mut memberships = self.memberships.write().await;
        if memberships.iter().any(|stored| {
            same_triple(
                stored,
                role_id,
                membership.user_id(),
                membership.team_id(),
            )
        }) {
            return Err(AppError::already_exists("Membership"));
        }

        memberships.push(membership.clone());
        Ok(membership)
    }

    async fn find_membership(
        &self,
        role_id: RoleId,
        user_id: UserId,
        team_id: TeamId,
    ) -> AppResult<Option<Membership>> {
        Ok(self
            .memberships
            .read()
            .await
            .iter()
            .find(|membership| same_triple(membership, role_id, user_id, team_id))
            .cloned())
    }

    async fn list_memberships_for_role(&self, role_id: RoleId) -> AppResult<Vec<Membership>> {
        Ok(self
            .memberships
            .read()
            .await
            .iter()
            .filter(|membership| membership.role().id() == role_id)
            .cloned()
            .collect())
    }

    async fn list_memberships_for_user_in_team(
        &self,
        user_id: UserId,
        team_id: TeamId,
    ) -> AppResult<Vec<Membership>> {
        Ok(self
            .memberships
            .read()
            .await
            .iter()
            .filter(|membership| membership.user_id() == user_id && membership.team_id() == team_id)
            .cloned()
            .collect())
    }
}

use std::sync::Arc;

use tracing::info;

use teamroles_core::{AppError, AppResult};
use teamroles_domain::{Role, RoleId, TeamId, UserId};

use crate::{CreateRoleInput, MembershipService, RoleRepository};

/// Application service for role definitions.
#[derive(Clone)]
pub struct RoleService {
    repository: Arc<dyn RoleRepository>,
    membership_service: MembershipService,
}

impl RoleService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(repository: Arc<dyn RoleRepository>, membership_service: MembershipService) -> Self {
        Self {
            repository,
            membership_service,
        }
    }

    /// Creates a role with a unique, non-blank name.
    pub async fn create_role(&self, input: CreateRoleInput) -> AppResult<Role> {
        let name = input
            .name
            .ok_or_else(|| AppError::invalid_object("Role"))?;
        let role = Role::new(RoleId::new(), name)?;

        if self
            .repository
            .find_role_by_name(role.name())
            .await?
            .is_some()
        {
            return Err(AppError::already_exists("Role"));
        }

        let role = self.repository.save_role(role).await?;
        info!(role_id = %role.id(), role = role.name(), "role created");

        Ok(role)
    }

    /// Returns one role or `NotFound`.
    pub async fn get_role(&self, role_id: RoleId) -> AppResult<Role> {
        self.repository
            .find_role(role_id)
            .await?
            .ok_or_else(|| AppError::not_found_with_id("Role", role_id))
    }

    /// Returns all roles.
    pub async fn list_roles(&self) -> AppResult<Vec<Role>> {
        self.repository.list_roles().await
    }

    /// Returns the role names a user holds within a team.
    ///
    /// Unlike membership listing, an empty result is reported as `NotFound`.
    pub async fn get_roles_for(&self, user_id: UserId, team_id: TeamId) -> AppResult<Vec<String>> {
        let role_names = self
            .membership_service
            .resolve_role_names(user_id, team_id)
            .await?;

        if role_names.is_empty() {
            return Err(AppError::not_found("Role"));
        }

        Ok(role_names)
    }
}

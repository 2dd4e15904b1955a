use std::sync::Arc;

use tracing::info;

use teamroles_core::{AppError, AppResult};
use teamroles_domain::{Membership, MembershipId, RoleId, TeamId, UserId};

use crate::{AssignMembershipInput, MembershipRepository, RoleRepository, TeamService};

const USER_NOT_IN_TEAM: &str = "The provided user doesn't belong to the provided team.";

/// Application service validating and resolving role memberships.
#[derive(Clone)]
pub struct MembershipService {
    role_repository: Arc<dyn RoleRepository>,
    membership_repository: Arc<dyn MembershipRepository>,
    team_service: TeamService,
}

impl MembershipService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        role_repository: Arc<dyn RoleRepository>,
        membership_repository: Arc<dyn MembershipRepository>,
        team_service: TeamService,
    ) -> Self {
        Self {
            role_repository,
            membership_repository,
            team_service,
        }
    }

    /// Validates and persists a role assignment.
    ///
    /// Checks run in order and stop at the first failure: role reference
    /// present, no existing membership for the triple, role exists, team
    /// exists, user belongs to the team. The duplicate check runs before any
    /// lookup so a resubmitted membership never reaches the team directory.
    ///
    /// The duplicate check and the insert are not atomic. Two concurrent
    /// requests for the same triple can both pass the check; the store's
    /// unique constraint then rejects the second insert with `AlreadyExists`.
    pub async fn assign_role_to_membership(
        &self,
        input: AssignMembershipInput,
    ) -> AppResult<Membership> {
        let role_id = input
            .role_id
            .ok_or_else(|| AppError::invalid_object("Membership"))?;

        if self
            .membership_repository
            .find_membership(role_id, input.user_id, input.team_id)
            .await?
            .is_some()
        {
            return Err(AppError::already_exists("Membership"));
        }

        let role = self
            .role_repository
            .find_role(role_id)
            .await?
            .ok_or_else(|| AppError::not_found_with_id("Role", role_id))?;

        if !self
            .team_service
            .is_member_of_team(input.team_id, input.user_id)
            .await?
        {
            return Err(AppError::invalid_object_with("Membership", USER_NOT_IN_TEAM));
        }

        let membership = self
            .membership_repository
            .save_membership(Membership::new(
                MembershipId::new(),
                role,
                input.user_id,
                input.team_id,
            ))
            .await?;

        info!(
            membership_id = %membership.id(),
            role = membership.role().name(),
            user_id = %membership.user_id(),
            team_id = %membership.team_id(),
            "role assigned"
        );

        Ok(membership)
    }

    /// Returns every membership granting the role. An empty list is not an
    /// error here.
    pub async fn get_memberships(&self, role_id: RoleId) -> AppResult<Vec<Membership>> {
        self.membership_repository
            .list_memberships_for_role(role_id)
            .await
    }

    /// Returns the names of the roles a user holds within a team, in
    /// membership insertion order.
    pub async fn resolve_role_names(
        &self,
        user_id: UserId,
        team_id: TeamId,
    ) -> AppResult<Vec<String>> {
        Ok(self
            .membership_repository
            .list_memberships_for_user_in_team(user_id, team_id)
            .await?
            .into_iter()
            .map(|membership| membership.role().name().to_owned())
            .collect())
    }
}

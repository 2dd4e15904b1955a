use async_trait::async_trait;

use teamroles_core::AppResult;
use teamroles_domain::{Membership, Role, RoleId, TeamId, UserId};

/// Input payload for creating roles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateRoleInput {
    /// Requested role name. Absent and blank names are rejected.
    pub name: Option<String>,
}

/// Input payload for assigning a role to a user within a team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignMembershipInput {
    /// Referenced role. Absent references are rejected.
    pub role_id: Option<RoleId>,
    /// User receiving the role.
    pub user_id: UserId,
    /// Team the role applies to.
    pub team_id: TeamId,
}

/// Repository port for role definitions.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Persists a new role and returns the stored record.
    ///
    /// Implementations must reject duplicate names with `AlreadyExists`.
    async fn save_role(&self, role: Role) -> AppResult<Role>;

    /// Finds a role by identifier.
    async fn find_role(&self, role_id: RoleId) -> AppResult<Option<Role>>;

    /// Finds a role by its exact name.
    async fn find_role_by_name(&self, name: &str) -> AppResult<Option<Role>>;

    /// Lists all roles in a stable order.
    async fn list_roles(&self) -> AppResult<Vec<Role>>;
}

/// Repository port for membership records.
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Persists a new membership and returns the stored record.
    ///
    /// Implementations must reject a duplicate `(role, user, team)` triple
    /// with `AlreadyExists`.
    async fn save_membership(&self, membership: Membership) -> AppResult<Membership>;

    /// Finds the membership for an exact `(role, user, team)` triple.
    async fn find_membership(
        &self,
        role_id: RoleId,
        user_id: UserId,
        team_id: TeamId,
    ) -> AppResult<Option<Membership>>;

    /// Lists memberships granting a role, in insertion order.
    async fn list_memberships_for_role(&self, role_id: RoleId) -> AppResult<Vec<Membership>>;

    /// Lists memberships of a user within a team, in insertion order.
    async fn list_memberships_for_user_in_team(
        &self,
        user_id: UserId,
        team_id: TeamId,
    ) -> AppResult<Vec<Membership>>;
}

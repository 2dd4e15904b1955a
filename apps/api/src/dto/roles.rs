use serde::{Deserialize, Serialize};
use teamroles_domain::{Role, RoleId, TeamId, UserId};

/// Incoming payload for role creation.
#[derive(Debug, Deserialize)]
pub struct CreateRoleRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// API representation of a role.
#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub id: RoleId,
    pub name: String,
}

impl From<Role> for RoleResponse {
    fn from(value: Role) -> Self {
        Self {
            id: value.id(),
            name: value.name().to_owned(),
        }
    }
}

/// Role name resolved for a user within a team.
#[derive(Debug, Serialize)]
pub struct RoleNameResponse {
    pub name: String,
}

/// Query filter for `GET /roles`. Both values go together or not at all.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolesQuery {
    pub user_id: Option<UserId>,
    pub team_id: Option<TeamId>,
}

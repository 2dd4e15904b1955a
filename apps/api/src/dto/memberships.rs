use serde::{Deserialize, Serialize};
use teamroles_domain::{Membership, MembershipId, RoleId, TeamId, UserId};

/// Incoming payload for assigning a role within a team.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMembershipRequest {
    #[serde(default)]
    pub role_id: Option<RoleId>,
    pub user_id: UserId,
    pub team_id: TeamId,
}

/// API representation of a membership.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipResponse {
    pub id: MembershipId,
    pub role_id: RoleId,
    pub user_id: UserId,
    pub team_id: TeamId,
}

impl From<Membership> for MembershipResponse {
    fn from(value: Membership) -> Self {
        Self {
            id: value.id(),
            role_id: value.role().id(),
            user_id: value.user_id(),
            team_id: value.team_id(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipsQuery {
    pub role_id: RoleId,
}

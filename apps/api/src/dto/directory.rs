use serde::Serialize;
use teamroles_domain::{Team, TeamId, User, UserId};

/// API representation of a directory team.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub id: TeamId,
    pub name: Option<String>,
    pub team_lead_id: Option<UserId>,
    pub team_member_ids: Vec<UserId>,
}

impl From<Team> for TeamResponse {
    fn from(value: Team) -> Self {
        Self {
            id: value.id(),
            name: value.name().map(ToOwned::to_owned),
            team_lead_id: value.team_lead_id(),
            team_member_ids: value.member_ids().to_vec(),
        }
    }
}

/// API representation of a directory user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            display_name: value.display_name,
            avatar_url: value.avatar_url,
            location: value.location,
        }
    }
}

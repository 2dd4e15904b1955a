//! Team composition as reported by the external team directory.

use std::collections::HashSet;

use crate::UserId;
use crate::identifier::uuid_identifier;

uuid_identifier!(
    /// Unique identifier for a team owned by the team directory.
    TeamId
);

/// Read-only view of a team: its lead and its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: TeamId,
    name: Option<String>,
    team_lead_id: Option<UserId>,
    member_ids: Vec<UserId>,
}

impl Team {
    /// Creates a team view. Duplicate member ids are collapsed, keeping the
    /// first occurrence.
    #[must_use]
    pub fn new(
        id: TeamId,
        name: Option<String>,
        team_lead_id: Option<UserId>,
        member_ids: impl IntoIterator<Item = UserId>,
    ) -> Self {
        let mut seen = HashSet::new();
        let unique_member_ids: Vec<UserId> = member_ids
            .into_iter()
            .filter(|member_id| seen.insert(*member_id))
            .collect();

        Self {
            id,
            name,
            team_lead_id,
            member_ids: unique_member_ids,
        }
    }

    /// Returns the team identifier.
    #[must_use]
    pub fn id(&self) -> TeamId {
        self.id
    }

    /// Returns the display name, if the directory provided one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the team lead, if the directory provided one.
    #[must_use]
    pub fn team_lead_id(&self) -> Option<UserId> {
        self.team_lead_id
    }

    /// Returns the team members in directory order.
    #[must_use]
    pub fn member_ids(&self) -> &[UserId] {
        self.member_ids.as_slice()
    }

    /// Returns whether the user leads the team or is one of its members.
    #[must_use]
    pub fn includes(&self, user_id: UserId) -> bool {
        self.team_lead_id == Some(user_id) || self.member_ids.contains(&user_id)
    }
}

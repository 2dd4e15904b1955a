use crate::identifier::uuid_identifier;
use crate::{Role, TeamId, UserId};

uuid_identifier!(
    /// Unique identifier for a membership record.
    MembershipId
);

/// Assignment of one role to one user within one team.
///
/// At most one membership exists per `(role, user, team)` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    id: MembershipId,
    role: Role,
    user_id: UserId,
    team_id: TeamId,
}

impl Membership {
    /// Creates a membership from its persisted parts.
    #[must_use]
    pub fn new(id: MembershipId, role: Role, user_id: UserId, team_id: TeamId) -> Self {
        Self {
            id,
            role,
            user_id,
            team_id,
        }
    }

    /// Returns the membership identifier.
    #[must_use]
    pub fn id(&self) -> MembershipId {
        self.id
    }

    /// Returns the assigned role.
    #[must_use]
    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Returns the user holding the role.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the team the role applies to.
    #[must_use]
    pub fn team_id(&self) -> TeamId {
        self.team_id
    }
}

use crate::identifier::uuid_identifier;

uuid_identifier!(
    /// Unique identifier for a user owned by the user directory.
    UserId
);

/// User profile as reported by the external user directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Stable user identifier.
    pub id: UserId,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Preferred display name.
    pub display_name: Option<String>,
    /// Profile picture location.
    pub avatar_url: Option<String>,
    /// Free-form location.
    pub location: Option<String>,
}

impl User {
    /// Creates a profile with only the identifier populated.
    #[must_use]
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            first_name: None,
            last_name: None,
            display_name: None,
            avatar_url: None,
            location: None,
        }
    }
}

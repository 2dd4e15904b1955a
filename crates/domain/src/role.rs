use teamroles_core::{AppError, AppResult, NonEmptyString};

use crate::identifier::uuid_identifier;

uuid_identifier!(
    /// Unique identifier for a role definition.
    RoleId
);

/// Named designation that can be assigned to users within teams.
///
/// Roles are immutable once created: there is no rename or delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    id: RoleId,
    name: NonEmptyString,
}

impl Role {
    /// Creates a role, rejecting blank names as an invalid `Role` object.
    pub fn new(id: RoleId, name: impl Into<String>) -> AppResult<Self> {
        let name = NonEmptyString::new(name).map_err(|_| AppError::invalid_object("Role"))?;
        Ok(Self { id, name })
    }

    /// Returns the role identifier.
    #[must_use]
    pub fn id(&self) -> RoleId {
        self.id
    }

    /// Returns the unique role name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

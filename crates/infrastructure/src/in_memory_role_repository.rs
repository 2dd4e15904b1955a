use async_trait::async_trait;
use tokio::sync::RwLock;

use teamroles_application::RoleRepository;
use teamroles_core::{AppError, AppResult};
use teamroles_domain::{Role, RoleId};

/// In-memory role repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryRoleRepository {
    roles: RwLock<Vec<Role>>,
}

impl InMemoryRoleRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn save_role(&self, role: Role) -> AppResult<Role> {
        let mut roles = self.roles.write().await;
        if roles.iter().any(|stored| stored.name() == role.name()) {
            return Err(AppError::already_exists("Role"));
        }

        roles.push(role.clone());
        Ok(role)
    }

    async fn find_role(&self, role_id: RoleId) -> AppResult<Option<Role>> {
        Ok(self
            .roles
            .read()
            .await
            .iter()
            .find(|role| role.id() == role_id)
            .cloned())
    }

    async fn find_role_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        Ok(self
            .roles
            .read()
            .await
            .iter()
            .find(|role| role.name() == name)
            .cloned())
    }

    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        let mut roles = self.roles.read().await.clone();
        roles.sort_by(|left, right| {
            left.name()
                .cmp(right.name())
                .then_with(|| left.id().cmp(&right.id()))
        });
        Ok(roles)
    }
}

#[cfg(test)]
mod tests {
    use teamroles_application::RoleRepository;
    use teamroles_core::AppError;
    use teamroles_domain::{Role, RoleId};

    use super::InMemoryRoleRepository;

    fn role(name: &str) -> Role {
        Role::new(RoleId::new(), name).unwrap_or_else(|_| unreachable!())
    }

    #[tokio::test]
    async fn roles_are_listed_by_name() {
        let repository = InMemoryRoleRepository::new();
        for name in ["Tester", "Developer", "Product Owner"] {
            assert!(repository.save_role(role(name)).await.is_ok());
        }

        let names: Vec<String> = repository
            .list_roles()
            .await
            .unwrap_or_default()
            .iter()
            .map(|role| role.name().to_owned())
            .collect();

        assert_eq!(names, vec!["Developer", "Product Owner", "Tester"]);
    }

    #[tokio::test]
    async fn duplicate_role_name_is_rejected() {
        let repository = InMemoryRoleRepository::new();
        assert!(repository.save_role(role("Developer")).await.is_ok());

        let duplicate = repository.save_role(role("Developer")).await;

        assert_eq!(duplicate, Err(AppError::already_exists("Role")));
    }
}

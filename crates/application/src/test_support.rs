//! Port fakes shared by service tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use teamroles_core::{AppError, AppResult};
use teamroles_domain::{Membership, Role, RoleId, Team, TeamId, User, UserId};

use crate::{MembershipRepository, RoleRepository, TeamDirectory, UserDirectory};

#[derive(Default)]
pub(crate) struct FakeRoleRepository {
    pub(crate) roles: Mutex<Vec<Role>>,
}

impl FakeRoleRepository {
    pub(crate) fn with_roles(roles: Vec<Role>) -> Self {
        Self {
            roles: Mutex::new(roles),
        }
    }
}

#[async_trait]
impl RoleRepository for FakeRoleRepository {
    async fn save_role(&self, role: Role) -> AppResult<Role> {
        let mut roles = self.roles.lock().await;
        if roles.iter().any(|stored| stored.name() == role.name()) {
            return Err(AppError::already_exists("Role"));
        }
        roles.push(role.clone());
        Ok(role)
    }

    async fn find_role(&self, role_id: RoleId) -> AppResult<Option<Role>> {
        Ok(self
            .roles
            .lock()
            .await
            .iter()
            .find(|role| role.id() == role_id)
            .cloned())
    }

    async fn find_role_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        Ok(self
            .roles
            .lock()
            .await
            .iter()
            .find(|role| role.name() == name)
            .cloned())
    }

    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        Ok(self.roles.lock().await.clone())
    }
}

#[derive(Default)]
pub(crate) struct FakeMembershipRepository {
    pub(crate) memberships: Mutex<Vec<Membership>>,
}

#[async_trait]
impl MembershipRepository for FakeMembershipRepository {
    async fn save_membership(&self, membership: Membership) -> AppResult<Membership> {
        let mut memberships = self.memberships.lock().await;
        if memberships.iter().any(|stored| {
            stored.role().id() == membership.role().id()
                && stored.user_id() == membership.user_id()
                && stored.team_id() == membership.team_id()
        }) {
            return Err(AppError::already_exists("Membership"));
        }
        memberships.push(membership.clone());
        Ok(membership)
    }

    async fn find_membership(
        &self,
        role_id: RoleId,
        user_id: UserId,
        team_id: TeamId,
    ) -> AppResult<Option<Membership>> {
        Ok(self
            .memberships
            .lock()
            .await
            .iter()
            .find(|membership| {
                membership.role().id() == role_id
                    && membership.user_id() == user_id
                    && membership.team_id() == team_id
            })
            .cloned())
    }

    async fn list_memberships_for_role(&self, role_id: RoleId) -> AppResult<Vec<Membership>> {
        Ok(self
            .memberships
            .lock()
            .await
            .iter()
            .filter(|membership| membership.role().id() == role_id)
            .cloned()
            .collect())
    }

    async fn list_memberships_for_user_in_team(
        &self,
        user_id: UserId,
        team_id: TeamId,
    ) -> AppResult<Vec<Membership>> {
        Ok(self
            .memberships
            .lock()
            .await
            .iter()
            .filter(|membership| membership.user_id() == user_id && membership.team_id() == team_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub(crate) struct FakeTeamDirectory {
    teams: Vec<Team>,
    pub(crate) lookups: AtomicUsize,
}

impl FakeTeamDirectory {
    pub(crate) fn with_teams(teams: Vec<Team>) -> Self {
        Self {
            teams,
            lookups: AtomicUsize::new(0),
        }
    }

    pub(crate) fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TeamDirectory for FakeTeamDirectory {
    async fn get_team(&self, team_id: TeamId) -> AppResult<Option<Team>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.teams.iter().find(|team| team.id() == team_id).cloned())
    }

    async fn list_teams(&self) -> AppResult<Vec<Team>> {
        Ok(self.teams.clone())
    }
}

#[derive(Default)]
pub(crate) struct FakeUserDirectory {
    users: Vec<User>,
}

impl FakeUserDirectory {
    pub(crate) fn with_users(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserDirectory for FakeUserDirectory {
    async fn get_user(&self, user_id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.iter().find(|user| user.id == user_id).cloned())
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.users.clone())
    }
}

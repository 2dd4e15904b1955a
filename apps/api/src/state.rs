use sqlx::PgPool;
use teamroles_application::{MembershipService, RoleService, TeamService, UserService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub role_service: RoleService,
    pub membership_service: MembershipService,
    pub team_service: TeamService,
    pub user_service: UserService,
    /// Pool probed by the health endpoint; absent when running on in-memory
    /// repositories.
    pub postgres_pool: Option<PgPool>,
}

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use teamroles_application::MembershipRepository;
use teamroles_core::{AppError, AppResult};
use teamroles_domain::{Membership, MembershipId, Role, RoleId, TeamId, UserId};

use crate::postgres_errors::{is_foreign_key_violation, is_unique_violation};

/// PostgreSQL-backed repository for role memberships.
///
/// The `(role_id, user_id, team_id)` unique constraint is the authoritative
/// duplicate guard; violations surface as `AlreadyExists`.
#[derive(Clone)]
pub struct PostgresMembershipRepository {
    pool: PgPool,
}

impl PostgresMembershipRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MembershipRow {
    membership_id: uuid::Uuid,
    role_id: uuid::Uuid,
    role_name: String,
    user_id: uuid::Uuid,
    team_id: uuid::Uuid,
}

impl TryFrom<MembershipRow> for Membership {
    type Error = AppError;

    fn try_from(row: MembershipRow) -> AppResult<Self> {
        let role = Role::new(RoleId::from_uuid(row.role_id), row.role_name)?;
        Ok(Membership::new(
            MembershipId::from_uuid(row.membership_id),
            role,
            UserId::from_uuid(row.user_id),
            TeamId::from_uuid(row.team_id),
        ))
    }
}

fn into_memberships(rows: Vec<MembershipRow>) -> AppResult<Vec<Membership>> {
    rows.into_iter().map(Membership::try_from).collect()
}

#[async_trait]
impl MembershipRepository for PostgresMembershipRepository {
    async fn save_membership(&self, membership: Membership) -> AppResult<Membership> {
        sqlx::query(
            r#"
            INSERT INTO memberships (id, role_id, user_id, team_id)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(membership.id().as_uuid())
        .bind(membership.role().id().as_uuid())
        .bind(membership.user_id().as_uuid())
        .bind(membership.team_id().as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|error| {
            if is_unique_violation(&error) {
                return AppError::already_exists("Membership");
            }
            if is_foreign_key_violation(&error) {
                return AppError::not_found_with_id("Role", membership.role().id());
            }
            AppError::Internal(format!("failed to create membership: {error}"))
        })?;

        Ok(membership)
    }

    async fn find_membership(
        &self,
        role_id: RoleId,
        user_id: UserId,
        team_id: TeamId,
    ) -> AppResult<Option<Membership>> {
        sqlx::query_as::<_, MembershipRow>(
            r#"
            SELECT
                memberships.id AS membership_id,
                roles.id AS role_id,
                roles.name AS role_name,
                memberships.user_id,
                memberships.team_id
            FROM memberships
            INNER JOIN roles
                ON roles.id = memberships.role_id
            WHERE memberships.role_id = $1
                AND memberships.user_id = $2
                AND memberships.team_id = $3
            "#,
        )
        .bind(role_id.as_uuid())
        .bind(user_id.as_uuid())
        .bind(team_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find membership: {error}")))?
        .map(Membership::try_from)
        .transpose()
    }

    async fn list_memberships_for_role(&self, role_id: RoleId) -> AppResult<Vec<Membership>> {
        let rows = sqlx::query_as::<_, MembershipRow>(
            r#"
            SELECT
                memberships.id AS membership_id,
                roles.id AS role_id,
                roles.name AS role_name,
                memberships.user_id,
                memberships.team_id
            FROM memberships
            INNER JOIN roles
                ON roles.id = memberships.role_id
            WHERE memberships.role_id = $1
            ORDER BY memberships.position
            "#,
        )
        .bind(role_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to list memberships for role: {error}"))
        })?;

        into_memberships(rows)
    }

    async fn list_memberships_for_user_in_team(
        &self,
        user_id: UserId,
        team_id: TeamId,
    ) -> AppResult<Vec<Membership>> {
        let rows = sqlx::query_as::<_, MembershipRow>(
            r#"
            SELECT
                memberships.id AS membership_id,
                roles.id AS role_id,
                roles.name AS role_name,
                memberships.user_id,
                memberships.team_id
            FROM memberships
            INNER JOIN roles
                ON roles.id = memberships.role_id
            WHERE memberships.user_id = $1
                AND memberships.team_id = $2
            ORDER BY memberships.position
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(team_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to list memberships for user in team: {error}"
            ))
        })?;

        into_memberships(rows)
    }
}

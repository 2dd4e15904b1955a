use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use teamroles_application::CreateRoleInput;
use teamroles_core::AppError;
use teamroles_domain::RoleId;

use crate::dto::{CreateRoleRequest, RoleNameResponse, RoleResponse, RolesQuery};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn create_role_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateRoleRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RoleResponse>)> {
    let Json(payload) = payload?;

    let role = state
        .role_service
        .create_role(CreateRoleInput { name: payload.name })
        .await?;

    Ok((StatusCode::CREATED, Json(RoleResponse::from(role))))
}

/// Lists every role, or the names of the roles a user holds in a team when
/// both `userId` and `teamId` are given.
pub async fn list_roles_handler(
    State(state): State<AppState>,
    query: Result<Query<RolesQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query?;

    match (query.user_id, query.team_id) {
        (Some(user_id), Some(team_id)) => {
            let names: Vec<RoleNameResponse> = state
                .role_service
                .get_roles_for(user_id, team_id)
                .await?
                .into_iter()
                .map(|name| RoleNameResponse { name })
                .collect();

            Ok(Json(names).into_response())
        }
        (None, None) => {
            let roles: Vec<RoleResponse> = state
                .role_service
                .list_roles()
                .await?
                .into_iter()
                .map(RoleResponse::from)
                .collect();

            Ok(Json(roles).into_response())
        }
        _ => Err(AppError::InvalidArgument(
            "userId and teamId must be provided together".to_owned(),
        )
        .into()),
    }
}

pub async fn get_role_handler(
    State(state): State<AppState>,
    role_id: Result<Path<RoleId>, PathRejection>,
) -> ApiResult<Json<RoleResponse>> {
    let Path(role_id) = role_id?;

    let role = state.role_service.get_role(role_id).await?;

    Ok(Json(RoleResponse::from(role)))
}

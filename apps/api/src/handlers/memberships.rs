use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;

use teamroles_application::AssignMembershipInput;

use crate::dto::{CreateMembershipRequest, MembershipResponse, MembershipsQuery};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn assign_membership_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateMembershipRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MembershipResponse>)> {
    let Json(payload) = payload?;

    let membership = state
        .membership_service
        .assign_role_to_membership(AssignMembershipInput {
            role_id: payload.role_id,
            user_id: payload.user_id,
            team_id: payload.team_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(MembershipResponse::from(membership))))
}

pub async fn list_memberships_handler(
    State(state): State<AppState>,
    query: Result<Query<MembershipsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<MembershipResponse>>> {
    let Query(query) = query?;

    let memberships = state
        .membership_service
        .get_memberships(query.role_id)
        .await?
        .into_iter()
        .map(MembershipResponse::from)
        .collect();

    Ok(Json(memberships))
}

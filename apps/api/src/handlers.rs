use teamroles_core::AppError;

use crate::error::ApiError;

pub mod directory;
pub mod health;
pub mod memberships;
pub mod roles;


/// Answers requests that match no route.
pub async fn route_not_found_handler() -> ApiError {
    ApiError(AppError::NotFound("Not Found".to_owned()))
}

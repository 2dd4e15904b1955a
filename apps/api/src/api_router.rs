use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route(
            "/roles",
            get(handlers::roles::list_roles_handler).post(handlers::roles::create_role_handler),
        )
        .route("/roles/{role_id}", get(handlers::roles::get_role_handler))
        .route(
            "/memberships",
            get(handlers::memberships::list_memberships_handler)
                .post(handlers::memberships::assign_membership_handler),
        )
        .route("/teams", get(handlers::directory::list_teams_handler))
        .route(
            "/teams/{team_id}",
            get(handlers::directory::get_team_handler),
        )
        .route("/users", get(handlers::directory::list_users_handler))
        .route(
            "/users/{user_id}",
            get(handlers::directory::get_user_handler),
        )
        .fallback(handlers::route_not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

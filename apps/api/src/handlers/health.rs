use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::{HealthResponse, PostgresStatus};
use crate::state::AppState;

pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let postgres = check_postgres(state.postgres_pool.as_ref()).await;

    let ready = postgres.status != "error";
    let (http_status, status) = if ready {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (http_status, Json(HealthResponse { status, postgres }))
}

async fn check_postgres(pool: Option<&sqlx::PgPool>) -> PostgresStatus {
    let Some(pool) = pool else {
        return PostgresStatus {
            status: "disabled",
            detail: None,
        };
    };

    match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await {
        Ok(_) => PostgresStatus {
            status: "ok",
            detail: None,
        },
        Err(error) => PostgresStatus {
            status: "error",
            detail: Some(format!("postgres check failed: {error}")),
        },
    }
}

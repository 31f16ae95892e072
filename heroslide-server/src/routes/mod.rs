pub mod admin;
pub mod store;

use axum::http::StatusCode;
use axum::{Json, Router};

use crate::AppState;

#[derive(serde::Serialize, utoipa::ToSchema)]
pub(crate) struct ApiError {
    error: String,
}

pub(crate) fn err(status: StatusCode, msg: &str) -> (StatusCode, Json<ApiError>) {
    (
        status,
        Json(ApiError {
            error: msg.to_string(),
        }),
    )
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .nest("/admin/sliders", admin::router())
        .nest("/store/sliders", store::router())
        .with_state(state)
}

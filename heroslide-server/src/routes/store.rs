use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};

use crate::models::slide::{SlideResponse, SlideRow, SlidesResponse};
use crate::routes::{err, ApiError};
use crate::AppState;

/// Revalidation hint consumed by the storefront fetcher.
const CACHE_CONTROL_VALUE: &str = "public, max-age=60";

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_active_slides))
}

#[utoipa::path(
    get,
    path = "/store/sliders",
    responses(
        (status = 200, description = "Active slides ordered by position", body = SlidesResponse),
    ),
    tag = "Store"
)]
pub(crate) async fn list_active_slides(
    State(state): State<AppState>,
) -> Result<(HeaderMap, Json<SlidesResponse>), (StatusCode, Json<ApiError>)> {
    let rows = sqlx::query_as::<_, SlideRow>(
        "SELECT id, title, image_url, link, \"position\", is_active, created_at, updated_at
         FROM slide WHERE is_active = TRUE AND deleted_at IS NULL
         ORDER BY \"position\" ASC, created_at ASC, id ASC",
    )
    .fetch_all(&state.db)
    .await
    .map_err(|e| {
        tracing::error!("Failed to list active slides: {e}");
        err(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(CACHE_CONTROL_VALUE),
    );

    Ok((
        headers,
        Json(SlidesResponse {
            slides: rows.into_iter().map(SlideResponse::from).collect(),
        }),
    ))
}

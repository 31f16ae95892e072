use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::models::slide::{
    CreateSlideRequest, DeleteSlideResponse, SlideEnvelope, SlideResponse, SlideRow,
    SlidesResponse, UpdateSlideRequest,
};
use crate::routes::{err, ApiError};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_slides).post(create_slide))
        .route("/{id}", get(get_slide).post(update_slide).delete(delete_slide))
}

#[utoipa::path(
    get,
    path = "/admin/sliders",
    responses(
        (status = 200, description = "All slides, active or not, ordered by position", body = SlidesResponse),
    ),
    tag = "Admin"
)]
pub(crate) async fn list_slides(
    State(state): State<AppState>,
) -> Result<Json<SlidesResponse>, (StatusCode, Json<ApiError>)> {
    let rows = sqlx::query_as::<_, SlideRow>(
        "SELECT id, title, image_url, link, \"position\", is_active, created_at, updated_at
         FROM slide WHERE deleted_at IS NULL
         ORDER BY \"position\" ASC, created_at ASC, id ASC",
    )
    .fetch_all(&state.db)
    .await
    .map_err(|e| {
        tracing::error!("Failed to list slides: {e}");
        err(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
    })?;

    Ok(Json(SlidesResponse {
        slides: rows.into_iter().map(SlideResponse::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/admin/sliders",
    request_body = CreateSlideRequest,
    responses(
        (status = 200, description = "Slide created", body = SlideEnvelope),
        (status = 400, description = "Missing image_url"),
    ),
    tag = "Admin"
)]
pub(crate) async fn create_slide(
    State(state): State<AppState>,
    Json(req): Json<CreateSlideRequest>,
) -> Result<Json<SlideEnvelope>, (StatusCode, Json<ApiError>)> {
    if req.image_url.trim().is_empty() {
        return Err(err(StatusCode::BAD_REQUEST, "image_url must not be empty"));
    }

    let row = sqlx::query_as::<_, SlideRow>(
        "INSERT INTO slide (id, title, image_url, link, \"position\", is_active)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id, title, image_url, link, \"position\", is_active, created_at, updated_at",
    )
    .bind(Uuid::new_v4())
    .bind(&req.title)
    .bind(&req.image_url)
    .bind(&req.link)
    .bind(req.position.unwrap_or(0))
    .bind(req.is_active.unwrap_or(true))
    .fetch_one(&state.db)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create slide: {e}");
        err(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create slide")
    })?;

    Ok(Json(SlideEnvelope { slide: row.into() }))
}

#[utoipa::path(
    get,
    path = "/admin/sliders/{id}",
    params(("id" = Uuid, Path, description = "Slide UUID")),
    responses(
        (status = 200, description = "Slide found", body = SlideEnvelope),
        (status = 404, description = "Not found"),
    ),
    tag = "Admin"
)]
pub(crate) async fn get_slide(
    State(state): State<AppState>,
    Path(slide_id): Path<Uuid>,
) -> Result<Json<SlideEnvelope>, (StatusCode, Json<ApiError>)> {
    let row = sqlx::query_as::<_, SlideRow>(
        "SELECT id, title, image_url, link, \"position\", is_active, created_at, updated_at
         FROM slide WHERE id = $1 AND deleted_at IS NULL",
    )
    .bind(slide_id)
    .fetch_optional(&state.db)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch slide {slide_id}: {e}");
        err(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
    })?
    .ok_or_else(|| err(StatusCode::NOT_FOUND, "Slide not found"))?;

    Ok(Json(SlideEnvelope { slide: row.into() }))
}

#[utoipa::path(
    post,
    path = "/admin/sliders/{id}",
    params(("id" = Uuid, Path, description = "Slide UUID")),
    request_body = UpdateSlideRequest,
    responses(
        (status = 200, description = "Slide updated", body = SlideEnvelope),
        (status = 404, description = "Not found"),
    ),
    tag = "Admin"
)]
pub(crate) async fn update_slide(
    State(state): State<AppState>,
    Path(slide_id): Path<Uuid>,
    Json(req): Json<UpdateSlideRequest>,
) -> Result<Json<SlideEnvelope>, (StatusCode, Json<ApiError>)> {
    // Absent fields keep their stored value
    let row = sqlx::query_as::<_, SlideRow>(
        "UPDATE slide SET
             title = COALESCE($2, title),
             image_url = COALESCE($3, image_url),
             link = COALESCE($4, link),
             \"position\" = COALESCE($5, \"position\"),
             is_active = COALESCE($6, is_active),
             updated_at = NOW()
         WHERE id = $1 AND deleted_at IS NULL
         RETURNING id, title, image_url, link, \"position\", is_active, created_at, updated_at",
    )
    .bind(slide_id)
    .bind(&req.title)
    .bind(&req.image_url)
    .bind(&req.link)
    .bind(req.position)
    .bind(req.is_active)
    .fetch_optional(&state.db)
    .await
    .map_err(|e| {
        tracing::error!("Failed to update slide {slide_id}: {e}");
        err(StatusCode::INTERNAL_SERVER_ERROR, "Failed to update slide")
    })?
    .ok_or_else(|| err(StatusCode::NOT_FOUND, "Slide not found"))?;

    Ok(Json(SlideEnvelope { slide: row.into() }))
}

#[utoipa::path(
    delete,
    path = "/admin/sliders/{id}",
    params(("id" = Uuid, Path, description = "Slide UUID")),
    responses(
        (status = 200, description = "Slide deleted", body = DeleteSlideResponse),
        (status = 404, description = "Not found"),
    ),
    tag = "Admin"
)]
pub(crate) async fn delete_slide(
    State(state): State<AppState>,
    Path(slide_id): Path<Uuid>,
) -> Result<Json<DeleteSlideResponse>, (StatusCode, Json<ApiError>)> {
    let result = sqlx::query(
        "UPDATE slide SET deleted_at = NOW(), updated_at = NOW()
         WHERE id = $1 AND deleted_at IS NULL",
    )
    .bind(slide_id)
    .execute(&state.db)
    .await
    .map_err(|e| {
        tracing::error!("Failed to delete slide {slide_id}: {e}");
        err(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
    })?;

    if result.rows_affected() == 0 {
        return Err(err(StatusCode::NOT_FOUND, "Slide not found"));
    }

    Ok(Json(DeleteSlideResponse {
        id: slide_id,
        deleted: true,
    }))
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// ── Database rows ────────────────────────────────────────────────────────────

#[derive(Debug, sqlx::FromRow)]
#[allow(dead_code)]
pub struct SlideRow {
    pub id: Uuid,
    pub title: Option<String>,
    pub image_url: String,
    pub link: Option<String>,
    pub position: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ── API types ────────────────────────────────────────────────────────────────

/// Wire shape of one slide. `title` and `link` serialize as explicit nulls
/// when absent so the storefront sees a stable set of keys.
#[derive(Debug, Serialize, ToSchema)]
pub struct SlideResponse {
    pub id: Uuid,
    pub title: Option<String>,
    pub image_url: String,
    pub link: Option<String>,
    pub position: i32,
    pub is_active: bool,
}

impl From<SlideRow> for SlideResponse {
    fn from(row: SlideRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            image_url: row.image_url,
            link: row.link,
            position: row.position,
            is_active: row.is_active,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SlidesResponse {
    pub slides: Vec<SlideResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SlideEnvelope {
    pub slide: SlideResponse,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSlideRequest {
    pub title: Option<String>,
    pub image_url: String,
    pub link: Option<String>,
    /// Sort key; duplicates allowed, ties resolve by creation order
    pub position: Option<i32>,
    pub is_active: Option<bool>,
}

/// Partial update: absent fields keep their current value.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSlideRequest {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub position: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteSlideResponse {
    pub id: Uuid,
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_response_serializes_nulls() {
        let resp = SlideResponse {
            id: Uuid::nil(),
            title: None,
            image_url: "https://cdn.example.com/hero.jpg".to_string(),
            link: None,
            position: 0,
            is_active: true,
        };

        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["title"], serde_json::Value::Null);
        assert_eq!(json["link"], serde_json::Value::Null);
        assert_eq!(json["image_url"], "https://cdn.example.com/hero.jpg");
        assert_eq!(json["position"], 0);
        assert_eq!(json["is_active"], true);
        assert!(json["id"].is_string());
    }

    #[test]
    fn test_create_request_minimal_body() {
        let req: CreateSlideRequest =
            serde_json::from_str(r#"{"image_url":"https://cdn.example.com/a.jpg"}"#).unwrap();
        assert_eq!(req.image_url, "https://cdn.example.com/a.jpg");
        assert!(req.title.is_none());
        assert!(req.link.is_none());
        assert!(req.position.is_none());
        assert!(req.is_active.is_none());
    }

    #[test]
    fn test_update_request_all_fields_optional() {
        let req: UpdateSlideRequest = serde_json::from_str("{}").unwrap();
        assert!(req.title.is_none());
        assert!(req.image_url.is_none());
        assert!(req.link.is_none());
        assert!(req.position.is_none());
        assert!(req.is_active.is_none());
    }
}

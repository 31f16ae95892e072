use serde::{Deserialize, Serialize};

/// One carousel entry. Mirrors the server's slide wire shape; the id is
/// opaque to the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    pub title: Option<String>,
    pub image_url: String,
    pub link: Option<String>,
    pub position: i32,
    pub is_active: bool,
}

impl Slide {
    /// Outbound link, when present and non-empty. A slide with an href is
    /// rendered as a full-surface hyperlink region; otherwise it is inert.
    pub fn href(&self) -> Option<&str> {
        self.link.as_deref().filter(|l| !l.is_empty())
    }

    /// Caption text overlaid on the image, when present and non-empty.
    pub fn caption(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct SlidesResponse {
    #[serde(default)]
    pub slides: Vec<Slide>,
}

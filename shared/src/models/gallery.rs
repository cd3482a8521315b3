//! Gallery Records

use serde::{Deserialize, Serialize};

/// What a gallery entry depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    Interior,
    Dish,
    Event,
}

impl std::fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GalleryCategory::Interior => "Interior",
            GalleryCategory::Dish => "Dish",
            GalleryCategory::Event => "Event",
        };
        write!(f, "{}", label)
    }
}

/// Gallery entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: i64,
    pub category: GalleryCategory,
    pub title: String,
    pub description: String,
}

impl GalleryItem {
    pub fn new(id: i64, category: GalleryCategory, title: &str, description: &str) -> Self {
        Self {
            id,
            category,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

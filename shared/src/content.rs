//! Content registry
//!
//! The immutable set of descriptive records the page views render: store
//! info, the menu, the gallery, awards, and press reviews. Built once at
//! process start from the compiled-in records, or loaded from a JSON file
//! so the catalog can be swapped without touching any rendering code.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    Award, GalleryCategory, GalleryItem, MenuCategory, MenuItem, OpeningHours, Review, StoreInfo,
};

/// Error loading a content catalog from disk
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid content file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// All static records, grouped the way the pages consume them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRegistry {
    pub store: StoreInfo,
    /// Menu categories in service order (starters before mains before
    /// desserts), which is also the render order.
    pub menu: Vec<MenuCategory>,
    pub gallery: Vec<GalleryItem>,
    pub awards: Vec<Award>,
    pub reviews: Vec<Review>,
}

impl ContentRegistry {
    /// The compiled-in catalog.
    pub fn builtin() -> Self {
        Self {
            store: StoreInfo {
                name: "Café Fausse".to_string(),
                address: "1234 Culinary Ave, Suite 100".to_string(),
                city: "Washington, DC 20002".to_string(),
                phone: "(202) 555-4567".to_string(),
                hours: vec![
                    OpeningHours::new("Monday–Saturday", "5:00 PM – 11:00 PM"),
                    OpeningHours::new("Sunday", "5:00 PM – 9:00 PM"),
                ],
            },
            menu: vec![
                MenuCategory {
                    name: "Starters".to_string(),
                    items: vec![
                        MenuItem::new(
                            "Bruschetta",
                            "Fresh tomatoes, basil, olive oil, and toasted baguette slices",
                            Decimal::new(850, 2),
                        ),
                        MenuItem::new(
                            "Caesar Salad",
                            "Crisp romaine with homemade Caesar dressing",
                            Decimal::new(900, 2),
                        ),
                    ],
                },
                MenuCategory {
                    name: "Main Courses".to_string(),
                    items: vec![
                        MenuItem::new(
                            "Grilled Salmon",
                            "Served with lemon butter sauce and seasonal vegetables",
                            Decimal::new(2200, 2),
                        ),
                        MenuItem::new(
                            "Ribeye Steak",
                            "12 oz prime cut with garlic mashed potatoes",
                            Decimal::new(2800, 2),
                        ),
                        MenuItem::new(
                            "Vegetable Risotto",
                            "Creamy Arborio rice with wild mushrooms",
                            Decimal::new(1800, 2),
                        ),
                    ],
                },
                MenuCategory {
                    name: "Desserts".to_string(),
                    items: vec![
                        MenuItem::new(
                            "Tiramisu",
                            "Classic Italian dessert with mascarpone",
                            Decimal::new(750, 2),
                        ),
                        MenuItem::new(
                            "Cheesecake",
                            "Creamy cheesecake with berry compote",
                            Decimal::new(700, 2),
                        ),
                    ],
                },
                MenuCategory {
                    name: "Beverages".to_string(),
                    items: vec![
                        MenuItem::new(
                            "Red Wine (Glass)",
                            "A selection of Italian reds",
                            Decimal::new(1000, 2),
                        ),
                        MenuItem::new(
                            "White Wine (Glass)",
                            "Crisp and refreshing",
                            Decimal::new(900, 2),
                        ),
                        MenuItem::new("Craft Beer", "Local artisan brews", Decimal::new(600, 2)),
                        MenuItem::new("Espresso", "Strong and aromatic", Decimal::new(300, 2)),
                    ],
                },
            ],
            gallery: vec![
                GalleryItem::new(
                    1,
                    GalleryCategory::Interior,
                    "Main Dining Room",
                    "Our elegant main dining area",
                ),
                GalleryItem::new(
                    2,
                    GalleryCategory::Interior,
                    "Private Booth",
                    "Intimate dining experience",
                ),
                GalleryItem::new(
                    3,
                    GalleryCategory::Interior,
                    "Wine Cellar",
                    "Extensive wine selection",
                ),
                GalleryItem::new(
                    4,
                    GalleryCategory::Dish,
                    "Grilled Salmon",
                    "Our signature grilled salmon dish",
                ),
                GalleryItem::new(
                    5,
                    GalleryCategory::Dish,
                    "Ribeye Steak",
                    "Prime cut with garlic mashed potatoes",
                ),
                GalleryItem::new(
                    6,
                    GalleryCategory::Dish,
                    "Tiramisu",
                    "Classic Italian dessert",
                ),
                GalleryItem::new(
                    7,
                    GalleryCategory::Event,
                    "Wine Tasting",
                    "Monthly wine tasting events",
                ),
                GalleryItem::new(
                    8,
                    GalleryCategory::Event,
                    "Chef Table",
                    "Exclusive chef table experience",
                ),
            ],
            awards: vec![
                Award::new("Culinary Excellence Award", "2022"),
                Award::new("Restaurant of the Year", "2023"),
                Award::new("Best Fine Dining Experience", "Foodie Magazine, 2023"),
            ],
            reviews: vec![
                Review::new(
                    "Exceptional ambiance and unforgettable flavors. Every visit is a culinary journey!",
                    "Gourmet Review",
                ),
                Review::new(
                    "A must-visit restaurant for food enthusiasts. The attention to detail is remarkable.",
                    "The Daily Bite",
                ),
                Review::new(
                    "The perfect blend of traditional Italian and modern innovation. Simply outstanding!",
                    "Food & Wine Magazine",
                ),
            ],
        }
    }

    /// Load a catalog from a JSON file with the same shape as the built-in
    /// records.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Look up a gallery item by id.
    pub fn gallery_item(&self, id: i64) -> Option<&GalleryItem> {
        self.gallery.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_categories_keep_insertion_order() {
        let registry = ContentRegistry::builtin();
        let names: Vec<&str> = registry.menu.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Starters", "Main Courses", "Desserts", "Beverages"]
        );
    }

    #[test]
    fn test_gallery_ids_are_unique() {
        let registry = ContentRegistry::builtin();
        let mut ids: Vec<i64> = registry.gallery.iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), registry.gallery.len());
    }

    #[test]
    fn test_registry_round_trips_through_json() {
        let registry = ContentRegistry::builtin();
        let json = serde_json::to_string(&registry).unwrap();
        let reparsed: ContentRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed, registry);
    }

    #[test]
    fn test_catalog_loads_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.json");
        let json = serde_json::to_string_pretty(&ContentRegistry::builtin()).unwrap();
        std::fs::write(&path, json).unwrap();

        let loaded = ContentRegistry::from_json_file(&path).unwrap();
        assert_eq!(loaded, ContentRegistry::builtin());

        assert!(ContentRegistry::from_json_file(dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_gallery_item_lookup() {
        let registry = ContentRegistry::builtin();
        assert_eq!(registry.gallery_item(3).unwrap().title, "Wine Cellar");
        assert!(registry.gallery_item(99).is_none());
    }
}

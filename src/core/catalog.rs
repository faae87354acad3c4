//! # Catalog Store
//!
//! The read-only collection of items the app browses. Built once at startup
//! (from the built-in seed list or a catalog file) and shared by `Arc`.
//!
//! Lookups that miss return `ItemNotFound`. That is an expected outcome:
//! screens render a placeholder instead of failing.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Unique positive identifier of a catalog item.
pub type ItemId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Opaque locator handed to the image fetcher.
    pub image_url: String,
    pub category: String,
    /// Seed value for the session's favorites set.
    #[serde(default)]
    pub favorite: bool,
}

// ============================================================================
// Errors
// ============================================================================

/// Lookup miss. Not exceptional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemNotFound(pub ItemId);

impl fmt::Display for ItemNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item {} not found", self.0)
    }
}

impl std::error::Error for ItemNotFound {}

#[derive(Debug)]
pub enum CatalogError {
    /// Ids must be positive.
    InvalidId,
    DuplicateId(ItemId),
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::InvalidId => write!(f, "catalog item ids must be positive"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate catalog item id {id}"),
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {}

// ============================================================================
// Store
// ============================================================================

#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

/// On-disk shape of a catalog file: a list of `[[items]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, rejecting zero ids and duplicates. Order is kept.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id == 0 {
                return Err(CatalogError::InvalidId);
            }
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    /// The built-in catalog.
    pub fn seed() -> Self {
        Self { items: seed_items() }
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(contents).map_err(CatalogError::Parse)?;
        Self::new(file.items)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
        Self::from_toml(&contents)
    }

    /// All items in insertion order.
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Result<&Item, ItemNotFound> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(ItemNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn item(
    id: ItemId,
    title: &str,
    subtitle: &str,
    description: &str,
    category: &str,
) -> Item {
    Item {
        id,
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        description: description.to_string(),
        image_url: format!("https://picsum.photos/id/{}/800/450.jpg", id + 9),
        category: category.to_string(),
        favorite: false,
    }
}

fn seed_items() -> Vec<Item> {
    vec![
        item(
            1,
            "Mountain Adventure",
            "Explore the peaks",
            "Experience the thrill of mountain climbing with our expert guides. \
             This adventure takes you through breathtaking landscapes and challenging trails. \
             Perfect for nature lovers and adventure seekers alike.",
            "Adventure",
        ),
        item(
            2,
            "Ocean Paradise",
            "Dive into blue",
            "Discover the wonders of the ocean with our diving expeditions. \
             Swim alongside colorful marine life and explore coral reefs. \
             An unforgettable underwater experience awaits you.",
            "Travel",
        ),
        item(
            3,
            "Urban Exploration",
            "City lights",
            "Navigate through bustling city streets and discover hidden gems. \
             From rooftop bars to underground art scenes, experience the city like never before. \
             A perfect blend of culture, cuisine, and nightlife.",
            "City",
        ),
        item(
            4,
            "Forest Retreat",
            "Peaceful escape",
            "Reconnect with nature in our serene forest retreat. \
             Wake up to birdsong and fall asleep under a canopy of stars. \
             Ideal for meditation, yoga, and digital detox.",
            "Nature",
        ),
        item(
            5,
            "Desert Safari",
            "Golden dunes",
            "Ride across golden sand dunes and witness stunning sunsets. \
             Experience Bedouin hospitality and traditional desert culture. \
             A magical journey through the heart of the desert.",
            "Adventure",
        ),
        item(
            6,
            "Arctic Wonders",
            "Ice and snow",
            "Witness the northern lights and explore icy landscapes. \
             From glacier hiking to dog sledding, discover the Arctic's unique beauty. \
             An expedition to the edge of the world.",
            "Adventure",
        ),
        item(
            7,
            "Tropical Island",
            "Paradise found",
            "Relax on pristine beaches with crystal clear waters. \
             Snorkel in vibrant coral gardens and enjoy fresh tropical fruits. \
             The ultimate beach getaway for relaxation and rejuvenation.",
            "Beach",
        ),
        item(
            8,
            "Historic Journey",
            "Time travel",
            "Walk through ancient ruins and historic landmarks. \
             Learn about civilizations that shaped our world. \
             A fascinating journey through time and history.",
            "Culture",
        ),
        item(
            9,
            "Wildlife Safari",
            "Big five",
            "Spot the big five in their natural habitat. \
             Our experienced rangers ensure safe and respectful wildlife encounters. \
             An authentic African safari experience.",
            "Wildlife",
        ),
        item(
            10,
            "Northern Lights",
            "Aurora borealis",
            "Chase the magical aurora borealis across the Arctic sky. \
             Stay in cozy glass igloos and watch nature's light show. \
             A bucket-list experience you'll never forget.",
            "Adventure",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_ten_items_in_order() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.len(), 10);
        let ids: Vec<ItemId> = catalog.all().iter().map(|i| i.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_lookup_round_trips_every_item() {
        let catalog = Catalog::seed();
        for item in catalog.all() {
            assert_eq!(catalog.get(item.id), Ok(item));
        }
    }

    #[test]
    fn test_lookup_miss_is_not_found() {
        let catalog = Catalog::seed();
        assert_eq!(catalog.get(11), Err(ItemNotFound(11)));
        assert_eq!(catalog.get(0), Err(ItemNotFound(0)));
        assert_eq!(ItemNotFound(11).to_string(), "item 11 not found");
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let mut items = Catalog::seed().all().to_vec();
        items.push(items[2].clone());
        assert!(matches!(
            Catalog::new(items),
            Err(CatalogError::DuplicateId(3))
        ));
    }

    #[test]
    fn test_new_rejects_zero_id() {
        let mut items = Catalog::seed().all().to_vec();
        items[0].id = 0;
        assert!(matches!(Catalog::new(items), Err(CatalogError::InvalidId)));
    }

    #[test]
    fn test_from_toml() {
        let toml_str = r#"
[[items]]
id = 42
title = "Lighthouse"
subtitle = "Coastal walk"
description = "A long walk."
image_url = "https://example.com/42.jpg"
category = "Coast"
favorite = true

[[items]]
id = 7
title = "Harbor"
subtitle = "Boats"
description = "Boats everywhere."
image_url = "https://example.com/7.jpg"
category = "Coast"
"#;
        let catalog = Catalog::from_toml(toml_str).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.all()[0].id, 42);
        assert!(catalog.all()[0].favorite);
        assert!(!catalog.get(7).unwrap().favorite);
    }

    #[test]
    fn test_from_toml_malformed() {
        assert!(matches!(
            Catalog::from_toml("[[items]]\nid = \"x\""),
            Err(CatalogError::Parse(_))
        ));
    }
}

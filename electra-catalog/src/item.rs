use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

/// Variant-specific payload of an inventory item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    Television {
        screen_size_inches: u32,
        /// Expected one of LED, QLED, OLED, QNED; not validated
        screen_type: String,
    },
    Mobile {
        ram_gb: u32,
        /// Expected one of Android, iOS; not validated
        operating_system: String,
    },
}

/// An inventory item. The brand is referenced by name and must already be
/// registered in the catalog when the item is added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub brand_name: String,
    pub price: f64,
    pub kind: ItemKind,
    pub registered_at: DateTime<Utc>,
}

impl Item {
    pub fn television(
        name: String,
        brand_name: String,
        price: f64,
        screen_size_inches: u32,
        screen_type: String,
    ) -> Self {
        Self::new(
            name,
            brand_name,
            price,
            ItemKind::Television {
                screen_size_inches,
                screen_type,
            },
        )
    }

    pub fn mobile(
        name: String,
        brand_name: String,
        price: f64,
        ram_gb: u32,
        operating_system: String,
    ) -> Self {
        Self::new(
            name,
            brand_name,
            price,
            ItemKind::Mobile {
                ram_gb,
                operating_system,
            },
        )
    }

    fn new(name: String, brand_name: String, price: f64, kind: ItemKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            brand_name,
            price,
            kind,
            registered_at: Utc::now(),
        }
    }

    /// Listing order: brand name, then price ascending, then item name
    pub fn listing_cmp(&self, other: &Item) -> Ordering {
        self.brand_name
            .cmp(&other.brand_name)
            .then_with(|| self.price.total_cmp(&other.price))
            .then_with(|| self.name.cmp(&other.name))
    }

    pub fn is_television(&self) -> bool {
        matches!(self.kind, ItemKind::Television { .. })
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self.kind, ItemKind::Mobile { .. })
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ItemKind::Television {
                screen_size_inches,
                screen_type,
            } => write!(
                f,
                "Television: {}, Brand: {}, Price: {}, Inches: {}, Screen Type: {}",
                self.name, self.brand_name, self.price, screen_size_inches, screen_type
            ),
            ItemKind::Mobile {
                ram_gb,
                operating_system,
            } => write!(
                f,
                "Mobile: {}, Brand: {}, Price: {}, RAM: {}GB, Operating System: {}",
                self.name, self.brand_name, self.price, ram_gb, operating_system
            ),
        }
    }
}

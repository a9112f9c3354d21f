//! # Catalog Service - Domain Model
//!
//! Core domain entities and value objects for the product catalog.
//! These types are the single source of truth across all layers:
//! persistence, coordinator, and API.

use serde::{Deserialize, Serialize};

// =============================================================================
// ENTITIES
// =============================================================================

/// A catalog item.
///
/// `id` is assigned by the durable store on creation and immutable
/// thereafter. `price` is non-negative by convention; the core does
/// not enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

impl Product {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// VALUE OBJECTS
// =============================================================================

/// Where a list read was served from.
///
/// Carried on every list response as an observability signal for
/// operators validating cache behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Cache,
    Database,
}

impl Origin {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::Database => "database",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Origin::Database).unwrap(),
            "\"database\""
        );
        assert_eq!(Origin::Cache.as_str(), "cache");
    }

    #[test]
    fn product_json_field_names() {
        let p = Product::new(1, "Widget", 9.99);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Widget");
        assert_eq!(json["price"], 9.99);
    }
}

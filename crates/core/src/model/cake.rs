use serde::{Deserialize, Serialize};

use crate::types::Id;

/// Fallback image path assigned when the chef does not provide one.
pub const DEFAULT_IMAGE: &str = "images/cake1.jpg";

/// A sellable item published by the chef.
///
/// Immutable once created except through chef edit/delete. Price is a
/// positive integer in the minor currency unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cake {
    pub id: Id,
    pub name: String,
    pub price: u32,
    pub image: String,
    pub description: String,
}

/// Validate cake fields shared by create and update.
pub fn validate_cake(name: &str, price: u32) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Cake name must not be empty".to_string());
    }
    if price == 0 {
        return Err("Cake price must be a positive integer".to_string());
    }
    Ok(())
}

// Rust guideline compliant 2026-10-18

//! Core data models for Satchel.

use serde::{Deserialize, Serialize};

/// Maximum length of an item name, in characters.
pub const MAX_NAME_LEN: usize = 49;

/// Maximum length of an item category, in characters.
pub const MAX_CATEGORY_LEN: usize = 29;

/// Lowest priority rank.
pub const MIN_PRIORITY: u8 = 1;

/// Highest priority rank.
pub const MAX_PRIORITY: u8 = 5;

/// A single item carried in the inventory.
///
/// The name is the lookup key for removal and search. Duplicates are allowed;
/// lookups return the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item name, used as the search key.
    pub name: String,
    /// Free-form category ("type") of the item.
    pub category: String,
    /// Number of units held.
    pub quantity: u32,
    /// Priority rank, 1 (lowest) to 5 (highest).
    pub priority: u8,
}

impl Item {
    /// Creates a new Item.
    ///
    /// No validation is performed here; see [`Item::validate`].
    ///
    /// # Arguments
    ///
    /// * `name` - The item name
    /// * `category` - The item category
    /// * `quantity` - Units held
    /// * `priority` - Priority rank (1-5)
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: u32,
        priority: u8,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity,
            priority,
        }
    }

    /// Validates the Item data.
    ///
    /// # Returns
    ///
    /// Ok if the Item is valid, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Name is empty or only whitespace
    /// - Name is longer than [`MAX_NAME_LEN`]
    /// - Category is longer than [`MAX_CATEGORY_LEN`]
    /// - Priority is out of range (1-5)
    pub fn validate(&self) -> crate::Result<()> {
        if self.name.trim().is_empty() {
            return Err(crate::Error::InvalidItem(
                "Name cannot be empty".to_string(),
            ));
        }

        let name_len = self.name.chars().count();
        if name_len > MAX_NAME_LEN {
            return Err(crate::Error::InvalidItem(format!(
                "Name must be at most {} characters, got {}",
                MAX_NAME_LEN, name_len
            )));
        }

        let category_len = self.category.chars().count();
        if category_len > MAX_CATEGORY_LEN {
            return Err(crate::Error::InvalidItem(format!(
                "Category must be at most {} characters, got {}",
                MAX_CATEGORY_LEN, category_len
            )));
        }

        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&self.priority) {
            return Err(crate::Error::InvalidItem(format!(
                "Priority must be {}-{}, got {}",
                MIN_PRIORITY, MAX_PRIORITY, self.priority
            )));
        }

        Ok(())
    }
}

// Rust guideline compliant 2026-10-18

//! Command model and input parsing.
//!
//! The menu front end collects raw text; everything here turns that text into
//! typed commands or rejects it with `AppError::InvalidInput`.

use crate::error::{AppError, Result};
use satchel_core::{Item, SortCriterion};
use std::fmt;

/// A request against the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append an item.
    Add(Item),
    /// Remove the first item with this name.
    Remove {
        /// Exact item name.
        name: String,
    },
    /// Show all items in current order.
    List,
    /// Linear search by name.
    Search {
        /// Exact item name.
        name: String,
    },
    /// Sort by the given criterion.
    Sort(SortCriterion),
    /// Binary search by name; requires a prior sort by name.
    BinarySearch {
        /// Exact item name.
        name: String,
    },
}

impl Command {
    /// Returns a short label for logging.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::Remove { .. } => "remove",
            Command::List => "list",
            Command::Search { .. } => "search",
            Command::Sort(_) => "sort",
            Command::BinarySearch { .. } => "binary_search",
        }
    }
}

/// Entries of the main menu, keyed by their menu number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// 1 - add an item.
    AddItem,
    /// 2 - remove an item by name.
    RemoveItem,
    /// 3 - list items.
    ListItems,
    /// 4 - linear search by name.
    SearchByName,
    /// 5 - sort the inventory.
    Sort,
    /// 6 - binary search by name.
    BinarySearch,
    /// 0 - leave the program.
    Exit,
}

impl MenuOption {
    /// All options in display order.
    pub const ALL: [MenuOption; 7] = [
        MenuOption::AddItem,
        MenuOption::RemoveItem,
        MenuOption::ListItems,
        MenuOption::SearchByName,
        MenuOption::Sort,
        MenuOption::BinarySearch,
        MenuOption::Exit,
    ];

    /// Returns the number typed to select the option.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            MenuOption::AddItem => 1,
            MenuOption::RemoveItem => 2,
            MenuOption::ListItems => 3,
            MenuOption::SearchByName => 4,
            MenuOption::Sort => 5,
            MenuOption::BinarySearch => 6,
            MenuOption::Exit => 0,
        }
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuOption::AddItem => "Add item",
            MenuOption::RemoveItem => "Remove item",
            MenuOption::ListItems => "List items",
            MenuOption::SearchByName => "Search item by name",
            MenuOption::Sort => "Sort items",
            MenuOption::BinarySearch => "Binary search by name",
            MenuOption::Exit => "Exit",
        };
        f.write_str(label)
    }
}

/// Parses a main menu selection.
///
/// # Errors
///
/// Returns an error if the value is not one of the listed menu numbers.
pub fn parse_menu_option(value: &str) -> Result<MenuOption> {
    let trimmed = value.trim();
    MenuOption::ALL
        .into_iter()
        .find(|option| trimmed.parse::<u8>().ok() == Some(option.number()))
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid menu option: {}", trimmed)))
}

/// Parses a sort criterion from a menu number or name.
///
/// # Errors
///
/// Returns `InvalidCriterion` if the value names no criterion.
pub fn parse_criterion(value: &str) -> Result<SortCriterion> {
    Ok(value.parse::<SortCriterion>()?)
}

/// Parses a quantity (non-negative integer).
///
/// # Errors
///
/// Returns an error if the value is not a non-negative integer.
pub fn parse_quantity(value: &str) -> Result<u32> {
    let trimmed = value.trim();
    trimmed.parse().map_err(|_| {
        AppError::InvalidInput(format!(
            "Quantity must be a non-negative whole number, got '{}'",
            trimmed
        ))
    })
}

/// Parses a priority. The 1-5 range is enforced by item validation.
///
/// # Errors
///
/// Returns an error if the value is not an integer.
pub fn parse_priority(value: &str) -> Result<u8> {
    let trimmed = value.trim();
    trimmed.parse().map_err(|_| {
        AppError::InvalidInput(format!("Priority must be a number 1-5, got '{}'", trimmed))
    })
}

/// Builds and validates an item from raw field values.
///
/// Name and category lose surrounding whitespace, the way a line read from a
/// prompt loses its newline.
///
/// # Errors
///
/// Returns an error if a numeric field does not parse or the item fails validation.
pub fn parse_item(name: &str, category: &str, quantity: &str, priority: &str) -> Result<Item> {
    let item = Item::new(
        name.trim(),
        category.trim(),
        parse_quantity(quantity)?,
        parse_priority(priority)?,
    );
    item.validate()?;
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;

    #[test]
    fn test_parse_menu_option() {
        assert_eq!(parse_menu_option("1").unwrap(), MenuOption::AddItem);
        assert_eq!(parse_menu_option(" 6 ").unwrap(), MenuOption::BinarySearch);
        assert_eq!(parse_menu_option("0").unwrap(), MenuOption::Exit);
        assert!(parse_menu_option("7").is_err());
        assert!(parse_menu_option("add").is_err());
        assert!(parse_menu_option("").is_err());
    }

    #[test]
    fn test_parse_criterion_rejects_unknown() {
        assert_eq!(parse_criterion("3").unwrap(), SortCriterion::Priority);
        let error = parse_criterion("4").unwrap_err();
        assert_eq!(error.code(), ErrorCode::InvalidCriterion);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(" 12 ").unwrap(), 12);
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert!(parse_quantity("-1").is_err());
        assert!(parse_quantity("many").is_err());
    }

    #[test]
    fn test_parse_item_trims_and_validates() {
        let item = parse_item("  Rope ", "Tool\n", "1", "3").unwrap();
        assert_eq!(item, Item::new("Rope", "Tool", 1, 3));

        let error = parse_item("Rope", "Tool", "1", "9").unwrap_err();
        assert_eq!(error.code(), ErrorCode::ValidationError);

        let error = parse_item("Rope", "Tool", "x", "3").unwrap_err();
        assert_eq!(error.code(), ErrorCode::InvalidInput);
    }

    #[test]
    fn test_menu_numbers_are_unique() {
        for option in MenuOption::ALL {
            assert_eq!(
                parse_menu_option(&option.number().to_string()).unwrap(),
                option
            );
        }
    }
}

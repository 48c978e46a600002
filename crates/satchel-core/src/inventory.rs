// Rust guideline compliant 2026-10-18

//! Fixed-capacity item store.
//!
//! The inventory owns its items together with the record of the last sort.
//! Any insertion or removal clears that record, which is what gates binary
//! search: it only runs right after a sort by name.

use crate::search::{binary_search_by_name, linear_search_by_name, SearchReport};
use crate::sort::{insertion_sort, SortCriterion, SortReport};
use crate::{Error, InventoryState, Item, Result};

/// Default number of item slots.
pub const DEFAULT_CAPACITY: usize = 10;

/// Largest capacity an inventory may be created with.
pub const MAX_CAPACITY: usize = 100;

/// Ordered, capacity-bounded collection of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
    sorted_by: Option<SortCriterion>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            items: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
            sorted_by: None,
        }
    }
}

impl Inventory {
    /// Creates an empty inventory with a fixed capacity.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of items (1 to [`MAX_CAPACITY`])
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the capacity is zero or above [`MAX_CAPACITY`].
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 || capacity > MAX_CAPACITY {
            return Err(Error::Config(format!(
                "capacity must be 1-{}, got {}",
                MAX_CAPACITY, capacity
            )));
        }

        Ok(Self {
            items: Vec::with_capacity(capacity),
            capacity,
            sorted_by: None,
        })
    }

    /// Returns the fixed capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of items held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no items are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if no further item can be inserted.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Returns the number of free slots.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity - self.items.len()
    }

    /// Returns the items in their current order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns a copy of the items in their current order.
    #[must_use]
    pub fn list(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Returns the criterion of the last sort, if no insert or remove happened since.
    #[must_use]
    pub fn sorted_by(&self) -> Option<SortCriterion> {
        self.sorted_by
    }

    /// Returns true if the items are known to be ordered by name.
    #[must_use]
    pub fn is_sorted_by_name(&self) -> bool {
        self.sorted_by == Some(SortCriterion::Name)
    }

    /// Returns the current state of the inventory.
    #[must_use]
    pub fn state(&self) -> InventoryState {
        InventoryState::derive(self.items.len(), self.sorted_by)
    }

    /// Appends an item at the end.
    ///
    /// # Arguments
    ///
    /// * `item` - The item to insert
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The inventory is full (checked first)
    /// - The item fails validation
    ///
    /// The inventory is unchanged on error.
    pub fn insert(&mut self, item: Item) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        item.validate()?;

        self.items.push(item);
        self.sorted_by = None;
        Ok(())
    }

    /// Removes the first item whose name matches exactly.
    ///
    /// Later items shift one slot toward the front, keeping their relative order.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the item to remove
    ///
    /// # Returns
    ///
    /// The removed item.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no item has that name.
    pub fn remove_by_name(&mut self, name: &str) -> Result<Item> {
        let position = linear_search_by_name(&self.items, name)
            .index
            .ok_or_else(|| Error::NotFound(name.to_string()))?;

        let removed = self.items.remove(position);
        self.sorted_by = None;
        Ok(removed)
    }

    /// Sorts the items in place with insertion sort.
    ///
    /// Marks the inventory as sorted by `criterion`, which enables binary
    /// search only for [`SortCriterion::Name`].
    ///
    /// # Arguments
    ///
    /// * `criterion` - The ordering key
    pub fn sort(&mut self, criterion: SortCriterion) -> SortReport {
        let comparisons = insertion_sort(&mut self.items, criterion);
        self.sorted_by = Some(criterion);
        SortReport {
            criterion,
            comparisons,
        }
    }

    /// Finds the first item with `name` by scanning from the front.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no item has that name.
    pub fn linear_search(&self, name: &str) -> Result<(&Item, SearchReport)> {
        let report = linear_search_by_name(&self.items, name);
        self.hit(name, report)
    }

    /// Finds an item with `name` by binary search.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The inventory is not sorted by name (`PreconditionFailed`, nothing is searched)
    /// - No item has that name (`NotFound`)
    pub fn binary_search(&self, name: &str) -> Result<(&Item, SearchReport)> {
        if !self.state().allows_binary_search() {
            return Err(Error::PreconditionFailed(
                "items must be sorted by name before a binary search".to_string(),
            ));
        }

        let report = binary_search_by_name(&self.items, name);
        self.hit(name, report)
    }

    fn hit(&self, name: &str, report: SearchReport) -> Result<(&Item, SearchReport)> {
        report
            .index
            .and_then(|index| self.items.get(index))
            .map(|item| (item, report))
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }
}

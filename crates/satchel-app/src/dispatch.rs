// Rust guideline compliant 2026-10-18

//! Command dispatch against a caller-owned inventory.

use crate::command::Command;
use crate::error::Result;
use satchel_core::{Inventory, Item, SearchReport, SortReport};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// An item was appended.
    Added {
        /// The stored item.
        item: Item,
        /// Free slots left afterwards.
        remaining: usize,
    },
    /// An item was removed.
    Removed {
        /// The removed item.
        item: Item,
    },
    /// Current contents.
    Listed {
        /// Items in current order.
        items: Vec<Item>,
        /// Fixed capacity of the inventory.
        capacity: usize,
    },
    /// A search matched.
    Found {
        /// The matching item.
        item: Item,
        /// How it was found.
        search: SearchReport,
    },
    /// The inventory was sorted.
    Sorted {
        /// Criterion and comparison count.
        report: SortReport,
        /// Items in their new order.
        items: Vec<Item>,
    },
}

/// Executes `command` against `inventory`.
///
/// # Arguments
///
/// * `inventory` - The inventory to read or mutate
/// * `command` - The command to run
///
/// # Returns
///
/// The outcome to render.
///
/// # Errors
///
/// Returns the core error of the failed operation. The inventory is unchanged
/// on error.
pub fn execute(inventory: &mut Inventory, command: Command) -> Result<Outcome> {
    debug!(command = command.label(), items = inventory.len(), "executing command");

    let outcome = match command {
        Command::Add(item) => {
            let stored = item.clone();
            inventory.insert(item).inspect_err(|err| {
                warn!(name = %stored.name, error = %err, "insert rejected");
            })?;
            info!(name = %stored.name, count = inventory.len(), "item added");
            Outcome::Added {
                item: stored,
                remaining: inventory.remaining(),
            }
        }
        Command::Remove { name } => {
            let item = inventory.remove_by_name(&name).inspect_err(|err| {
                warn!(name = %name, error = %err, "remove rejected");
            })?;
            info!(name = %item.name, count = inventory.len(), "item removed");
            Outcome::Removed { item }
        }
        Command::List => Outcome::Listed {
            items: inventory.list(),
            capacity: inventory.capacity(),
        },
        Command::Search { name } => {
            let (item, search) = inventory.linear_search(&name)?;
            debug!(name = %name, probes = search.probes, "linear search hit");
            Outcome::Found {
                item: item.clone(),
                search,
            }
        }
        Command::Sort(criterion) => {
            let report = inventory.sort(criterion);
            info!(
                criterion = %report.criterion,
                comparisons = report.comparisons,
                "inventory sorted"
            );
            Outcome::Sorted {
                report,
                items: inventory.list(),
            }
        }
        Command::BinarySearch { name } => {
            let (item, search) = inventory.binary_search(&name).inspect_err(|err| {
                debug!(name = %name, state = ?inventory.state(), error = %err, "binary search miss");
            })?;
            debug!(name = %name, probes = search.probes, "binary search hit");
            Outcome::Found {
                item: item.clone(),
                search,
            }
        }
    };

    Ok(outcome)
}

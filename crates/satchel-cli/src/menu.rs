// Rust guideline compliant 2026-10-18

//! Interactive menu session.
//!
//! Reads menu selections and field values line by line, turns them into
//! commands, dispatches them against the session's inventory, and renders the
//! outcome. Per-command errors are reported and the loop continues; only I/O
//! failures end the session early. End of input behaves like choosing exit.

use crate::output::{summarize, OutputFormatter};
use crate::terminal::{write_error, write_info, write_success, write_warning};
use satchel_app::{
    execute, parse_criterion, parse_item, parse_menu_option, AppError, Command, MenuOption,
};
use satchel_core::{Error as CoreError, Inventory, SortCriterion};
use std::io::{self, BufRead, Write};
use termcolor::WriteColor;
use tracing::{debug, info};

/// Result of prompting for the fields of a command.
enum Prompted {
    /// A complete command, ready to dispatch.
    Ready(Command),
    /// Nothing to dispatch; back to the main menu.
    Skip,
    /// Input ended.
    Eof,
}

/// A single interactive session over one inventory.
pub struct MenuSession<'a, R, W> {
    inventory: Inventory,
    input: R,
    out: W,
    formatter: &'a dyn OutputFormatter,
}

impl<'a, R: BufRead, W: WriteColor> MenuSession<'a, R, W> {
    /// Creates a session.
    ///
    /// # Arguments
    /// * `inventory` - The inventory the session owns
    /// * `input` - Line source for selections and field values
    /// * `out` - Destination for menus, prompts, and results
    /// * `formatter` - Renders outcomes and errors
    pub fn new(inventory: Inventory, input: R, out: W, formatter: &'a dyn OutputFormatter) -> Self {
        Self {
            inventory,
            input,
            out,
            formatter,
        }
    }

    /// Consumes the session, returning the inventory and the output writer.
    pub fn into_parts(self) -> (Inventory, W) {
        (self.inventory, self.out)
    }

    /// Runs the menu loop until exit or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<()> {
        info!(capacity = self.inventory.capacity(), "session started");

        loop {
            self.write_menu()?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                break;
            };

            let option = match parse_menu_option(&line) {
                Ok(option) => option,
                Err(err) => {
                    self.report_error(&err)?;
                    continue;
                }
            };
            debug!(option = option.number(), "menu option selected");

            if option == MenuOption::Exit {
                break;
            }

            match self.prepare(option)? {
                Prompted::Ready(command) => self.dispatch(command)?,
                Prompted::Skip => {}
                Prompted::Eof => break,
            }
        }

        if self.formatter.is_interactive() {
            writeln!(self.out, "Goodbye.")?;
        }
        info!(items = self.inventory.len(), "session ended");
        self.out.flush()
    }

    fn prepare(&mut self, option: MenuOption) -> io::Result<Prompted> {
        match option {
            MenuOption::AddItem => self.prepare_add(),
            MenuOption::RemoveItem => {
                if self.inventory.is_empty() {
                    self.notice("Inventory is empty.")?;
                    return Ok(Prompted::Skip);
                }
                Ok(self
                    .prompt("Name of the item to remove: ")?
                    .map_or(Prompted::Eof, |name| {
                        Prompted::Ready(Command::Remove {
                            name: name.trim().to_string(),
                        })
                    }))
            }
            MenuOption::ListItems => Ok(Prompted::Ready(Command::List)),
            MenuOption::SearchByName => {
                if self.inventory.is_empty() {
                    self.notice("Inventory is empty.")?;
                    return Ok(Prompted::Skip);
                }
                Ok(self
                    .prompt("Name of the item to search: ")?
                    .map_or(Prompted::Eof, |name| {
                        Prompted::Ready(Command::Search {
                            name: name.trim().to_string(),
                        })
                    }))
            }
            MenuOption::Sort => self.prepare_sort(),
            MenuOption::BinarySearch => {
                // The sortedness check comes first so an unsorted inventory
                // never prompts for a name.
                if !self.inventory.is_sorted_by_name() {
                    let err = AppError::from(CoreError::PreconditionFailed(
                        "sort the items by name before a binary search".to_string(),
                    ));
                    self.report_error(&err)?;
                    return Ok(Prompted::Skip);
                }
                Ok(self
                    .prompt("Name of the item to search (binary): ")?
                    .map_or(Prompted::Eof, |name| {
                        Prompted::Ready(Command::BinarySearch {
                            name: name.trim().to_string(),
                        })
                    }))
            }
            MenuOption::Exit => Ok(Prompted::Eof),
        }
    }

    fn prepare_add(&mut self) -> io::Result<Prompted> {
        if self.inventory.is_full() {
            let err = AppError::from(CoreError::CapacityExceeded {
                capacity: self.inventory.capacity(),
            });
            self.report_error(&err)?;
            return Ok(Prompted::Skip);
        }

        let Some(name) = self.prompt("Item name: ")? else {
            return Ok(Prompted::Eof);
        };
        let Some(category) = self.prompt("Item category: ")? else {
            return Ok(Prompted::Eof);
        };
        let Some(quantity) = self.prompt("Quantity: ")? else {
            return Ok(Prompted::Eof);
        };
        let Some(priority) = self.prompt("Priority (1-5): ")? else {
            return Ok(Prompted::Eof);
        };

        match parse_item(&name, &category, &quantity, &priority) {
            Ok(item) => Ok(Prompted::Ready(Command::Add(item))),
            Err(err) => {
                self.report_error(&err)?;
                Ok(Prompted::Skip)
            }
        }
    }

    fn prepare_sort(&mut self) -> io::Result<Prompted> {
        if self.inventory.is_empty() {
            self.notice("Inventory is empty. Nothing to sort.")?;
            return Ok(Prompted::Skip);
        }

        if self.formatter.is_interactive() {
            writeln!(self.out)?;
            writeln!(self.out, "===== SORT ITEMS =====")?;
            for criterion in SortCriterion::ALL {
                writeln!(self.out, "{} - By {}", criterion.menu_number(), criterion)?;
            }
        }

        let Some(choice) = self.prompt("Choose a criterion: ")? else {
            return Ok(Prompted::Eof);
        };

        match parse_criterion(&choice) {
            Ok(criterion) => Ok(Prompted::Ready(Command::Sort(criterion))),
            Err(err) => {
                self.report_error(&err)?;
                Ok(Prompted::Skip)
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> io::Result<()> {
        match execute(&mut self.inventory, command) {
            Ok(outcome) => {
                if self.formatter.is_interactive() {
                    write_success(&mut self.out, &summarize(&outcome))?;
                }
                let body = self.formatter.format_outcome(&outcome);
                if !body.is_empty() {
                    writeln!(self.out, "{}", body)?;
                }
                Ok(())
            }
            Err(err) => self.report_error(&err),
        }
    }

    fn report_error(&mut self, err: &AppError) -> io::Result<()> {
        let message = self.formatter.format_error(err);
        if !self.formatter.is_interactive() {
            return writeln!(self.out, "{}", message);
        }

        if err.is_informational() {
            write_warning(&mut self.out, &message)
        } else {
            write_error(&mut self.out, &message)
        }
    }

    fn notice(&mut self, message: &str) -> io::Result<()> {
        let message = self.formatter.format_notice(message);
        if self.formatter.is_interactive() {
            write_info(&mut self.out, &message)
        } else {
            writeln!(self.out, "{}", message)
        }
    }

    fn write_menu(&mut self) -> io::Result<()> {
        if !self.formatter.is_interactive() {
            return Ok(());
        }

        writeln!(self.out)?;
        writeln!(
            self.out,
            "===== SATCHEL ({}/{}) =====",
            self.inventory.len(),
            self.inventory.capacity()
        )?;
        for option in MenuOption::ALL {
            writeln!(self.out, "{} - {}", option.number(), option)?;
        }
        Ok(())
    }

    /// Writes `label` (interactive formats only) and reads one line.
    ///
    /// Returns `None` at end of input. The trailing newline is stripped.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        if self.formatter.is_interactive() {
            write!(self.out, "{}", label)?;
            self.out.flush()?;
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::PlainFormatter;
    use std::io::Cursor;
    use termcolor::NoColor;

    fn run_script(script: &str) -> (Inventory, String) {
        let formatter = PlainFormatter;
        let mut session = MenuSession::new(
            Inventory::default(),
            Cursor::new(script.to_string()),
            NoColor::new(Vec::new()),
            &formatter,
        );
        session.run().unwrap();
        let (inventory, out) = session.into_parts();
        (inventory, String::from_utf8(out.into_inner()).unwrap())
    }

    #[test]
    fn test_exit_immediately() {
        let (inventory, output) = run_script("0\n");
        assert!(inventory.is_empty());
        assert!(output.contains("Goodbye."));
    }

    #[test]
    fn test_eof_ends_session() {
        let (_, output) = run_script("");
        assert!(output.contains("Goodbye."));
    }

    #[test]
    fn test_eof_mid_prompt_adds_nothing() {
        let (inventory, _) = run_script("1\nRope\nTool\n");
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_windows_line_endings() {
        let (inventory, _) = run_script("1\r\nRope\r\nTool\r\n1\r\n3\r\n0\r\n");
        assert_eq!(inventory.items()[0].category, "Tool");
    }

    #[test]
    fn test_invalid_option_is_reported() {
        let (_, output) = run_script("9\n0\n");
        assert!(output.contains("Invalid menu option: 9"));
    }
}

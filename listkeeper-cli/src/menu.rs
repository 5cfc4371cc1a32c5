use anyhow::bail;
use listkeeper_core::utils::{Pattern, Sanitize, Terminal};
use std::io::{BufRead, Write};
use std::slice;
use std::str::FromStr;
use tracing::{debug, info};

const CHOICE_PATTERN: &str = "[AaDdPpQq]";

const MENU_LINES: [&str; 5] = [
    "Menu:",
    "A - Add an item to the list",
    "D - Delete an item from the list",
    "P - Print the list",
    "Q - Quit the program",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Delete,
    Print,
    Quit,
}

impl FromStr for MenuChoice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::Add),
            "D" => Ok(Self::Delete),
            "P" => Ok(Self::Print),
            "Q" => Ok(Self::Quit),
            other => bail!("unknown menu choice {:?}", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Running,
    Terminating,
}

/// The item list and the loop that edits it.
#[derive(Debug)]
pub struct Menu {
    items: Vec<String>,
    state: MenuState,
    choice_filter: Sanitize,
}

impl Menu {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            items: Vec::new(),
            state: MenuState::Running,
            choice_filter: Sanitize::Matches(Pattern::new(CHOICE_PATTERN)?),
        })
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Runs menu rounds until a quit is confirmed.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        terminal: &mut Terminal<R, W>,
    ) -> anyhow::Result<()> {
        while self.state() == MenuState::Running {
            self.step(terminal)?;
        }
        terminal.print_line("Exiting program...")?;
        Ok(())
    }

    /// One round: show the menu, read a choice, dispatch it.
    pub fn step<R: BufRead, W: Write>(
        &mut self,
        terminal: &mut Terminal<R, W>,
    ) -> anyhow::Result<MenuState> {
        for line in MENU_LINES {
            terminal.print_line(line)?;
        }

        let choice: MenuChoice = terminal
            .ask("Enter your choice", slice::from_ref(&self.choice_filter))?
            .parse()?;
        debug!(?choice, "menu choice");

        match choice {
            MenuChoice::Add => self.add_item(terminal)?,
            MenuChoice::Delete => self.delete_item(terminal)?,
            MenuChoice::Print => self.print_list(terminal)?,
            MenuChoice::Quit => {
                if terminal.read_yes_no("Are you sure you want to quit")? {
                    self.state = MenuState::Terminating;
                }
            }
        }
        Ok(self.state)
    }

    fn add_item<R: BufRead, W: Write>(
        &mut self,
        terminal: &mut Terminal<R, W>,
    ) -> anyhow::Result<()> {
        let item = terminal.read_line("Enter the item to add")?;
        self.items.push(item);
        info!(len = self.items.len(), "item added");
        terminal.print_line("Item added successfully.")?;
        Ok(())
    }

    fn delete_item<R: BufRead, W: Write>(
        &mut self,
        terminal: &mut Terminal<R, W>,
    ) -> anyhow::Result<()> {
        if self.items.is_empty() {
            terminal.print_line("List is empty. Nothing to delete.")?;
            return Ok(());
        }

        terminal.print_line("Select the number of the item to delete:")?;
        self.print_numbered(terminal)?;

        let size = i64::try_from(self.items.len())?;
        let index = terminal.read_ranged_int("Enter item number", 1, size)?;
        let removed = self.items.remove(usize::try_from(index - 1)?);
        info!(index, len = self.items.len(), "item deleted");
        terminal.print_line(format!("Item \"{}\" deleted successfully.", removed))?;
        Ok(())
    }

    fn print_list<R: BufRead, W: Write>(
        &self,
        terminal: &mut Terminal<R, W>,
    ) -> anyhow::Result<()> {
        if self.items.is_empty() {
            terminal.print_line("List is empty.")?;
        } else {
            terminal.print_line("Items in the list:")?;
            self.print_numbered(terminal)?;
        }
        Ok(())
    }

    fn print_numbered<R: BufRead, W: Write>(
        &self,
        terminal: &mut Terminal<R, W>,
    ) -> anyhow::Result<()> {
        for (i, item) in self.items.iter().enumerate() {
            terminal.print_line(format!("{}. {}", i + 1, item))?;
        }
        Ok(())
    }
}

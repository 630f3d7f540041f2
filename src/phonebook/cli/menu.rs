//! Interactive menu.
//!
//! Reads answers line by line from any `BufRead` and writes to any `Write`, so
//! the same loop drives a terminal session or a scripted test. End of input
//! ends the session cleanly at any prompt.
//!
//! Validation and index errors are shown in red and the loop continues. Any
//! other error (a corrupt phonebook file, an I/O failure) ends the session and
//! is returned to the caller.

use super::print::{failure, heading, info, render_table, success};
use phonebook::api::ContactStore;
use phonebook::error::Result;
use phonebook::model::ContactField;
use phonebook::store::DataStore;
use std::io::{BufRead, Write};

const WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    ShowContacts,
    CreateContact,
    FindContact,
    ChangeContact,
    DeleteContact,
    Exit,
}

impl MenuItem {
    const ALL: [MenuItem; 6] = [
        MenuItem::ShowContacts,
        MenuItem::CreateContact,
        MenuItem::FindContact,
        MenuItem::ChangeContact,
        MenuItem::DeleteContact,
        MenuItem::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuItem::ShowContacts => "Show contacts",
            MenuItem::CreateContact => "Create contact",
            MenuItem::FindContact => "Find contact",
            MenuItem::ChangeContact => "Change contact",
            MenuItem::DeleteContact => "Delete contact",
            MenuItem::Exit => "Exit",
        }
    }

    fn parse(input: &str) -> Option<Self> {
        input
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Whether the session goes on after an action.
enum Flow {
    Continue,
    Exit,
}

pub(super) struct Menu<'a, S: DataStore, R: BufRead, W: Write> {
    api: &'a mut ContactStore<S>,
    input: R,
    out: W,
    clear_screen: bool,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub(super) fn new(api: &'a mut ContactStore<S>, input: R, out: W) -> Self {
        Self {
            api,
            input,
            out,
            clear_screen: false,
        }
    }

    pub(super) fn with_screen_clearing(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub(super) fn run(&mut self) -> Result<()> {
        self.api.init()?;

        loop {
            self.clear();
            writeln!(self.out, "{}", heading("Menu", WIDTH))?;
            for (i, item) in MenuItem::ALL.iter().enumerate() {
                writeln!(self.out, "{}: {}", i, item.label())?;
            }
            writeln!(self.out, "---")?;

            let Some(choice) = self.prompt("Choose a menu item: ")? else {
                return Ok(());
            };
            let Some(item) = MenuItem::parse(&choice) else {
                continue;
            };
            if item == MenuItem::Exit {
                return Ok(());
            }

            self.clear();
            match self.dispatch(item) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) if e.is_recoverable() => {
                    writeln!(self.out, "{}", failure(&e.to_string()))?;
                }
                Err(e) => return Err(e),
            }

            writeln!(self.out, "---")?;
            if self.prompt("Press Enter to return to the menu.")?.is_none() {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, item: MenuItem) -> Result<Flow> {
        match item {
            MenuItem::ShowContacts => self.show_contacts(),
            MenuItem::CreateContact => self.create_contact(),
            MenuItem::FindContact => self.find_contact(),
            MenuItem::ChangeContact => self.change_contact(),
            MenuItem::DeleteContact => self.delete_contact(),
            MenuItem::Exit => Ok(Flow::Exit),
        }
    }

    fn clear(&self) {
        if self.clear_screen {
            let _ = console::Term::stdout().clear_screen();
        }
    }

    /// Prints `label` and reads one line. `None` on end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Reads a contact number. Prints a message and returns `None` when the
    /// answer is not a number.
    fn prompt_index(&mut self, label: &str) -> Result<Option<usize>> {
        let Some(answer) = self.prompt(label)? else {
            return Ok(None);
        };
        match answer.trim().parse::<usize>() {
            Ok(index) => Ok(Some(index)),
            Err(_) => {
                writeln!(self.out, "{}", failure("Invalid contact number."))?;
                Ok(None)
            }
        }
    }

    fn show_contacts(&mut self) -> Result<Flow> {
        let records = self.api.load()?;
        writeln!(self.out, "{}", heading("Contacts", WIDTH))?;
        if records.is_empty() {
            writeln!(self.out, "{}", info("No contacts!"))?;
        } else {
            write!(self.out, "{}", render_table(&records, true))?;
        }
        Ok(Flow::Continue)
    }

    fn create_contact(&mut self) -> Result<Flow> {
        writeln!(self.out, "{}", heading("New contact", WIDTH))?;

        let Some(name) = self.prompt("Name (required): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(phone) = self.prompt("Phone number (9-12 digits): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(comment) = self.prompt("Comment (optional): ")? else {
            return Ok(Flow::Exit);
        };

        self.api.create(&name, &phone, &comment)?;
        writeln!(self.out, "{}", success("Contact created!"))?;
        Ok(Flow::Continue)
    }

    fn find_contact(&mut self) -> Result<Flow> {
        writeln!(self.out, "{}", heading("Search", WIDTH))?;

        let Some(query) = self.prompt("Search for: ")? else {
            return Ok(Flow::Exit);
        };

        if self.api.load()?.is_empty() {
            writeln!(self.out, "{}", failure("No contacts. Nothing to search."))?;
            return Ok(Flow::Continue);
        }

        let found = self.api.find(&query)?;
        if found.is_empty() {
            writeln!(self.out, "{}", failure("No matches."))?;
        } else {
            writeln!(self.out, "{}", success("Found contacts:"))?;
            write!(self.out, "{}", render_table(&found, false))?;
        }
        Ok(Flow::Continue)
    }

    fn change_contact(&mut self) -> Result<Flow> {
        let records = self.api.load()?;
        if records.is_empty() {
            writeln!(self.out, "{}", failure("No contacts. Nothing to change."))?;
            return Ok(Flow::Continue);
        }
        write!(self.out, "{}", render_table(&records, true))?;

        let Some(index) = self.prompt_index("Number of the contact to change: ")? else {
            return Ok(Flow::Continue);
        };
        let Some(current) = records.get(index) else {
            writeln!(self.out, "{}", failure("Invalid contact number."))?;
            return Ok(Flow::Continue);
        };

        writeln!(self.out)?;
        writeln!(self.out, "Current contact:")?;
        writeln!(self.out, "Name: {}", current.name)?;
        writeln!(self.out, "Phone: {}", current.phone)?;
        writeln!(self.out, "Comment: {}", current.comment)?;
        writeln!(self.out)?;

        let Some(answer) = self.prompt("What to change (0 - Name, 1 - Phone, 2 - Comment): ")?
        else {
            return Ok(Flow::Exit);
        };
        let field = answer
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|i| ContactField::ALL.get(i).copied());
        let Some(field) = field else {
            writeln!(self.out, "{}", failure("Invalid field number!"))?;
            return Ok(Flow::Continue);
        };

        let label = match field {
            ContactField::Name => "New name: ",
            ContactField::Phone => "New phone (9-12 digits): ",
            ContactField::Comment => "New comment: ",
        };
        let Some(value) = self.prompt(label)? else {
            return Ok(Flow::Exit);
        };

        self.api.update(index, field, &value)?;
        writeln!(self.out, "{}", success("Contact updated!"))?;
        Ok(Flow::Continue)
    }

    fn delete_contact(&mut self) -> Result<Flow> {
        let records = self.api.load()?;
        if records.is_empty() {
            writeln!(self.out, "{}", failure("No contacts. Nothing to delete."))?;
            return Ok(Flow::Continue);
        }
        write!(self.out, "{}", render_table(&records, true))?;

        let Some(index) = self.prompt_index("Number of the contact to delete: ")? else {
            return Ok(Flow::Continue);
        };

        let removed = self.api.delete(index)?;
        writeln!(
            self.out,
            "{}",
            success(&format!("Contact \"{}\" deleted!", removed.name))
        )?;
        Ok(Flow::Continue)
    }
}

//! Interactive numbered menu driving a [`DirectoryService`]
//!
//! Reads choices and field values line by line, runs one directory
//! operation per round and redisplays the menu until Quit or end of input.

use std::fmt;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, instrument};

use crate::application::services::DirectoryService;
use crate::application::ApplicationError;
use crate::cli::error::error_chain;
use crate::cli::output;
use crate::domain::Contact;
use crate::infrastructure::{InfraError, InfraResult};

const MENU_TEXT: &str = "
*************  Welcome to Telephone_Directory *************

1. Add Person Contact
2. Add Business Contact
3. Search Contact
4. Display Contacts
5. Delete Contact
6. Save Contacts to File
7. Load Contacts from File
8. Quit";

/// One entry of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddPerson,
    AddBusiness,
    Search,
    Display,
    Delete,
    Save,
    Load,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid menu choice: {0:?}")]
pub struct InvalidChoice(pub String);

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u8>() {
            Ok(1) => Ok(MenuChoice::AddPerson),
            Ok(2) => Ok(MenuChoice::AddBusiness),
            Ok(3) => Ok(MenuChoice::Search),
            Ok(4) => Ok(MenuChoice::Display),
            Ok(5) => Ok(MenuChoice::Delete),
            Ok(6) => Ok(MenuChoice::Save),
            Ok(7) => Ok(MenuChoice::Load),
            Ok(8) => Ok(MenuChoice::Quit),
            _ => Err(InvalidChoice(s.to_string())),
        }
    }
}

/// Console session over a directory.
///
/// `out` receives the menu, prompts and every directory outcome line.
/// `err` receives file errors, which do not end the session.
pub struct Menu<'a, R, W, E> {
    directory: &'a mut DirectoryService,
    input: R,
    out: W,
    err: E,
    default_file: Option<PathBuf>,
}

impl<'a, R: BufRead, W: Write, E: Write> Menu<'a, R, W, E> {
    pub fn new(directory: &'a mut DirectoryService, input: R, out: W, err: E) -> Self {
        Self {
            directory,
            input,
            out,
            err,
            default_file: None,
        }
    }

    /// File used when a file name prompt is answered with an empty line.
    pub fn with_default_file(mut self, default_file: Option<PathBuf>) -> Self {
        self.default_file = default_file;
        self
    }

    /// Run until Quit or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> InfraResult<()> {
        loop {
            self.say(MENU_TEXT)?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                debug!("menu: end of input");
                break;
            };
            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Quit) => {
                    self.say("Exiting the program.")?;
                    break;
                }
                Ok(choice) => {
                    debug!("menu: {:?}", choice);
                    if self.dispatch(choice)?.is_break() {
                        debug!("menu: end of input");
                        break;
                    }
                }
                Err(e) => {
                    debug!("menu: {}", e);
                    self.say("Invalid choice. Please try again.")?;
                }
            }
        }
        Ok(())
    }

    /// Run one operation. Breaks when input ends while collecting fields.
    fn dispatch(&mut self, choice: MenuChoice) -> InfraResult<ControlFlow<()>> {
        match choice {
            MenuChoice::AddPerson | MenuChoice::AddBusiness => {
                let Some(name) = self.prompt("Enter name: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                let Some(phone) = self.prompt("Enter phone number: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                let phone = phone.trim().to_string();
                let contact = if choice == MenuChoice::AddPerson {
                    let Some(address) = self.prompt("Enter address: ")? else {
                        return Ok(ControlFlow::Break(()));
                    };
                    Contact::person(name, phone, address)
                } else {
                    let Some(company) = self.prompt("Enter company name: ")? else {
                        return Ok(ControlFlow::Break(()));
                    };
                    Contact::business(name, phone, company)
                };
                self.directory.add_contact(contact, &mut self.out)?;
            }
            MenuChoice::Search => {
                let Some(name) = self.prompt("Enter name to search: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                self.directory.search_contact(&name, &mut self.out)?;
            }
            MenuChoice::Display => {
                self.directory.display_contacts(&mut self.out)?;
            }
            MenuChoice::Delete => {
                let Some(name) = self.prompt("Enter name to delete: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                self.directory.delete_contact(&name, &mut self.out)?;
            }
            MenuChoice::Save => {
                let Some(path) = self.file_prompt("Enter file name to save contacts: ")? else {
                    return Ok(ControlFlow::Break(()));
                };
                let result = self.directory.save_contacts_to_file(&path, &mut self.out);
                self.report_file_error(result.map(|_| ()))?;
            }
            MenuChoice::Load => {
                let Some(path) = self.file_prompt("Enter file name to load contacts from: ")?
                else {
                    return Ok(ControlFlow::Break(()));
                };
                let result = self.directory.load_contacts_from_file(&path, &mut self.out);
                self.report_file_error(result.map(|_| ()))?;
            }
            MenuChoice::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    /// File errors are shown and the session goes on; anything else ends it.
    fn report_file_error(&mut self, result: Result<(), ApplicationError>) -> InfraResult<()> {
        match result {
            Err(e @ ApplicationError::FileUnavailable { .. }) => {
                writeln!(self.err, "{}", output::error_line(&error_chain(&e)))
                    .map_err(|io| InfraError::terminal("write error output", io))
            }
            other => Ok(other?),
        }
    }

    /// Ask for a file name, falling back to the configured default on an empty answer.
    fn file_prompt(&mut self, label: &str) -> InfraResult<Option<PathBuf>> {
        let Some(answer) = self.prompt(label)? else {
            return Ok(None);
        };
        match (&self.default_file, answer.is_empty()) {
            (Some(default), true) => {
                debug!("file_prompt: using default {}", default.display());
                Ok(Some(default.clone()))
            }
            _ => Ok(Some(PathBuf::from(answer))),
        }
    }

    /// Print a label and read one line without its terminator. `None` at end of input.
    fn prompt(&mut self, label: &str) -> InfraResult<Option<String>> {
        write!(self.out, "{label}").map_err(|e| InfraError::terminal("write prompt", e))?;
        self.out
            .flush()
            .map_err(|e| InfraError::terminal("flush prompt", e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| InfraError::terminal("read menu input", e))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn say(&mut self, msg: impl fmt::Display) -> InfraResult<()> {
        writeln!(self.out, "{msg}").map_err(|e| InfraError::terminal("write menu output", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", MenuChoice::AddPerson)]
    #[case(" 4 ", MenuChoice::Display)]
    #[case("7", MenuChoice::Load)]
    #[case("8", MenuChoice::Quit)]
    fn given_number_when_parsing_choice_then_maps_to_entry(
        #[case] input: &str,
        #[case] expected: MenuChoice,
    ) {
        assert_eq!(input.parse::<MenuChoice>(), Ok(expected));
    }

    #[rstest]
    #[case("0")]
    #[case("9")]
    #[case("")]
    #[case("quit")]
    #[case("-1")]
    fn given_other_input_when_parsing_choice_then_invalid(#[case] input: &str) {
        assert_eq!(
            input.parse::<MenuChoice>(),
            Err(InvalidChoice(input.to_string()))
        );
    }
}

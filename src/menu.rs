//! The interactive numbered menu.
//!
//! Each option is a straight-line script over the generator, the store and
//! the client. Errors end the current option only; the loop keeps going until
//! input runs out.

use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use chrono_tz::Tz;
use tracing::warn;

use crate::generator::{generate_password, generate_username, is_valid_username};
use crate::time::format_timestamp;
use crate::{Client, CredentialStore, Error, MessageDetails, Record, Result};

/// Outcome of reading a list selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The user typed `b`.
    Back,
    /// Zero-based index of a listed entry.
    Item(usize),
    /// Input was not a number.
    NotANumber,
    /// A number outside `1..=len`.
    OutOfRange,
}

/// Interpret `input` as a 1-based choice among `len` entries.
pub fn parse_selection(input: &str, len: usize) -> Selection {
    let input = input.trim();
    if input.eq_ignore_ascii_case("b") {
        return Selection::Back;
    }
    match input.parse::<i64>() {
        Ok(n) if n >= 1 && (n as u64) <= len as u64 => Selection::Item(n as usize - 1),
        Ok(_) => Selection::OutOfRange,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Selection::OutOfRange
        }
        Err(_) => Selection::NotANumber,
    }
}

/// Menu state: where to talk to, where to store, and the terminal.
pub struct Menu<'a, R, W> {
    client: &'a Client,
    store: &'a CredentialStore,
    display_tz: Tz,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a menu reading choices from `input` and printing to `output`.
    pub fn new(
        client: &'a Client,
        store: &'a CredentialStore,
        display_tz: Tz,
        input: R,
        output: W,
    ) -> Self {
        Self {
            client,
            store,
            display_tz,
            input,
            output,
        }
    }

    /// Run until the input is exhausted.
    ///
    /// Failures inside an option are printed; only failing to read or write
    /// the terminal itself ends the loop.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.display_menu()?;
            let Some(choice) = self.prompt("Select an option: ")? else {
                return Ok(());
            };
            writeln!(self.output)?;

            let outcome = match choice.as_str() {
                "1" => self.create_email().await,
                "2" => self.check_inbox().await,
                "3" => self.delete_saved_email().await,
                "4" => self.view_saved_emails().await,
                _ => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Ok(())
                }
            };

            if let Err(err) = outcome {
                warn!(error = %err, option = %choice, "menu option aborted");
                writeln!(self.output, "Error: {err}")?;
            }
        }
    }

    fn display_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Mail.tm Email Generator ---")?;
        writeln!(self.output, "[1] Generate New Email")?;
        writeln!(self.output, "[2] Check Inbox of a Saved Email")?;
        writeln!(self.output, "[3] Delete a Saved Email")?;
        writeln!(self.output, "[4] View Saved Emails")?;
        Ok(())
    }

    async fn create_email(&mut self) -> Result<()> {
        let Some(custom) =
            self.prompt("Enter a username, or leave blank to randomly generate: ")?
        else {
            return Ok(());
        };
        let username = if custom.is_empty() {
            generate_username()
        } else if is_valid_username(&custom) {
            custom
        } else {
            writeln!(
                self.output,
                "Invalid username. Use letters, digits, '.', '_' or '-'."
            )?;
            return Ok(());
        };
        let password = generate_password();

        let domain = self.client.first_domain().await?;
        let address = format!("{username}@{}", domain.domain);

        let account = match self.client.create_account(&address, &password).await {
            Ok(account) => account,
            Err(Error::Status { body, .. }) => {
                writeln!(self.output, "Failed to create email. Response: {body}")?;
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        writeln!(self.output, "Generated Email: {}", account.address)?;
        writeln!(self.output, "Password: {password}")?;

        // The account exists remotely now, so it is saved even without a note.
        let note = self
            .prompt("Enter a note for this email address: ")?
            .unwrap_or_default();
        writeln!(self.output)?;
        self.store
            .append(&Record::new(account.address, password, Some(note)))?;
        Ok(())
    }

    async fn check_inbox(&mut self) -> Result<()> {
        let records = self.store.records()?;
        if !self.show_saved(&records, false)? {
            return Ok(());
        }
        let Some(index) =
            self.choose("Select an email to check (or type 'b' to go back): ", records.len())?
        else {
            return Ok(());
        };
        writeln!(self.output)?;

        let email = &records[index].email;
        let Some(password) = self
            .store
            .find_password_for(email)?
            .filter(|password| !password.is_empty())
        else {
            writeln!(self.output, "No password saved for {email}.")?;
            return Ok(());
        };

        let client = self.client;
        let session = client.login(email, &password).await?;
        writeln!(self.output, "Checking inbox for {email}...\n")?;

        let messages = session.messages().await?;
        if messages.is_empty() {
            writeln!(self.output, "No emails.\n")?;
            return Ok(());
        }
        writeln!(self.output, "You have {} message(s):\n", messages.len())?;
        for (i, msg) in messages.iter().enumerate() {
            writeln!(self.output, "[{}] {}: {}", i + 1, msg.from.address, msg.subject)?;
        }

        loop {
            let Some(input) = self
                .prompt("\nEnter the number of the email to view (or type 'b' to go back): ")?
            else {
                return Ok(());
            };
            match parse_selection(&input, messages.len()) {
                Selection::Back => return Ok(()),
                Selection::Item(i) => {
                    writeln!(self.output)?;
                    let details = session.message(&messages[i].id).await?;
                    self.print_message(&details)?;
                }
                Selection::NotANumber | Selection::OutOfRange => {
                    writeln!(self.output, "Please enter a valid number.")?;
                }
            }
        }
    }

    fn print_message(&mut self, details: &MessageDetails) -> Result<()> {
        writeln!(self.output, "From: {}", details.from.address)?;
        writeln!(self.output, "Subject: {}", details.subject)?;
        match details.body_text() {
            Some(content) => writeln!(self.output, "Content: {content}")?,
            None => writeln!(self.output, "No content available for this email.")?,
        }
        Ok(())
    }

    async fn delete_saved_email(&mut self) -> Result<()> {
        let records = self.store.records()?;
        if !self.show_saved(&records, false)? {
            return Ok(());
        }
        let Some(index) =
            self.choose("Select an email to delete (or type 'b' to go back): ", records.len())?
        else {
            return Ok(());
        };
        let record = &records[index];

        let question = format!(
            "Are you sure you want to delete the email '{}'? (y/n): ",
            record.email
        );
        let confirmed = self
            .prompt(&question)?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("y"));
        if !confirmed {
            writeln!(self.output, "Email deletion canceled.")?;
            return Ok(());
        }

        let client = self.client;
        let session = client.login(&record.email, &record.password).await?;
        let account = session.me().await?;

        match session.delete_account(&account.id).await {
            Ok(()) => {
                self.store.remove_at(index)?;
                writeln!(self.output, "Successfully deleted email: {}", record.email)?;
            }
            Err(Error::Status { body, .. }) => {
                writeln!(self.output, "Failed to delete email. Response: {body}")?;
            }
            Err(err) => return Err(err),
        }
        Ok(())
    }

    async fn view_saved_emails(&mut self) -> Result<()> {
        let records = self.store.records()?;
        if !self.show_saved(&records, true)? {
            return Ok(());
        }
        let Some(index) = self.choose(
            "Enter a number to see more info about the email ('b' to go back): ",
            records.len(),
        )?
        else {
            return Ok(());
        };

        let record = &records[index];
        if record.password.is_empty() {
            writeln!(self.output, "No password saved for {}.", record.email)?;
            return Ok(());
        }

        let client = self.client;
        let session = client.login(&record.email, &record.password).await?;
        let account = session.me().await?;

        writeln!(self.output, "\n--- Email Details ---")?;
        writeln!(self.output, "Email Address: {}", account.address)?;
        writeln!(self.output, "Account ID: {}", account.id)?;
        writeln!(self.output, "Quota: {} bytes", account.quota)?;
        writeln!(self.output, "Used: {} bytes", account.used)?;
        writeln!(
            self.output,
            "Created At: {}",
            format_timestamp(&account.created_at, self.display_tz)
        )?;
        writeln!(
            self.output,
            "Updated At: {}",
            format_timestamp(&account.updated_at, self.display_tz)
        )?;
        Ok(())
    }

    /// Print the saved list. Returns `false` when there is nothing to choose from.
    fn show_saved(&mut self, records: &[Record], show_passwords: bool) -> Result<bool> {
        writeln!(self.output, "--- Saved Emails ---")?;
        if records.is_empty() {
            writeln!(self.output, "No saved emails available.")?;
            return Ok(false);
        }
        for (i, record) in records.iter().enumerate() {
            let mut line = format!("[{}] {}", i + 1, record.email);
            if show_passwords {
                line.push(':');
                line.push_str(&record.password);
            }
            if let Some(note) = &record.note {
                line.push_str(" | ");
                line.push_str(note);
            }
            writeln!(self.output, "{line}")?;
        }
        Ok(true)
    }

    fn choose(&mut self, message: &str, len: usize) -> Result<Option<usize>> {
        let Some(input) = self.prompt(message)? else {
            return Ok(None);
        };
        match parse_selection(&input, len) {
            Selection::Back => Ok(None),
            Selection::Item(index) => Ok(Some(index)),
            Selection::NotANumber => {
                writeln!(self.output, "Please enter a valid number.")?;
                Ok(None)
            }
            Selection::OutOfRange => {
                writeln!(self.output, "The number you entered is out of range.")?;
                Ok(None)
            }
        }
    }

    /// Print `message` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        // Undecodable bytes become U+FFFD and fall through as a bad choice.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }
}

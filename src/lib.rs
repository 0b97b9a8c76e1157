//! mail.tm Email Generator
//!
//! Create disposable mail.tm accounts, keep their credentials in a local
//! text file, read their inboxes and delete them again.
//!
//! # Example
//! ```no_run
//! use mailtm_generator::{generate_password, generate_username, Client, CredentialStore, Record};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), mailtm_generator::Error> {
//!     let client = Client::new()?;
//!     let domain = client.first_domain().await?;
//!     let password = generate_password();
//!     let address = format!("{}@{}", generate_username(), domain.domain);
//!     let account = client.create_account(&address, &password).await?;
//!
//!     let store = CredentialStore::new("emails.txt");
//!     store.append(&Record::new(account.address.clone(), password.clone(), Some("demo")))?;
//!
//!     let session = client.login(&account.address, &password).await?;
//!     for msg in session.messages().await? {
//!         println!("From: {}, Subject: {}", msg.from.address, msg.subject);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
pub mod generator;
mod menu;
mod models;
mod record;
mod store;
pub mod time;

pub use client::{Client, ClientBuilder, Session};
pub use config::Config;
pub use error::Error;
pub use generator::{generate_password, generate_username};
pub use menu::{Menu, Selection, parse_selection};
pub use models::{Account, Address, Domain, MessageDetails, MessageSummary, Token};
pub use record::Record;
pub use store::CredentialStore;

/// Result type alias for this crate.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

//! Payload models for the mail.tm API.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A list response.
///
/// mail.tm answers `application/ld+json` requests with a Hydra collection and
/// plain `application/json` requests with a bare array; both are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Collection<T> {
    Hydra {
        #[serde(rename = "hydra:member")]
        member: Vec<T>,
    },
    Plain(Vec<T>),
}

impl<T> Collection<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Collection::Hydra { member } => member,
            Collection::Plain(items) => items,
        }
    }
}

/// A mail domain accounts can be created under.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// Domain identifier.
    pub id: String,
    /// Domain name, e.g. `example.com`.
    pub domain: String,
    /// Whether new accounts are accepted.
    #[serde(default)]
    pub is_active: bool,
}

/// Account metadata as returned by `POST /accounts` and `GET /me`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account identifier, used for deletion.
    pub id: String,
    /// Full email address.
    pub address: String,
    /// Mailbox quota in bytes.
    #[serde(default)]
    pub quota: u64,
    /// Bytes used.
    #[serde(default)]
    pub used: u64,
    /// Creation time (UTC).
    pub created_at: DateTime<Utc>,
    /// Last update time (UTC).
    pub updated_at: DateTime<Utc>,
}

/// Bearer token returned by `POST /token`.
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    /// Account identifier the token belongs to.
    #[serde(default)]
    pub id: String,
    /// The bearer token itself.
    pub token: String,
}

/// Sender or recipient of a message.
#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    /// Email address.
    pub address: String,
    /// Display name, often empty.
    #[serde(default)]
    pub name: String,
}

/// An inbox entry from `GET /messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageSummary {
    /// Message identifier.
    pub id: String,
    /// Sender.
    pub from: Address,
    /// Subject line.
    #[serde(default)]
    pub subject: String,
    /// Short preview of the body.
    #[serde(default)]
    pub intro: String,
}

/// A full message from `GET /messages/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageDetails {
    /// Message identifier.
    pub id: String,
    /// Sender.
    pub from: Address,
    /// Subject line.
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    body: Option<String>,
}

impl MessageDetails {
    /// The readable body of the message.
    ///
    /// Looks at `content`, then `text`, then `body`, and skips empty values.
    pub fn body_text(&self) -> Option<&str> {
        [&self.content, &self.text, &self.body]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .find(|value| !value.is_empty())
    }
}

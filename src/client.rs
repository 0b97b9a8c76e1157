//! mail.tm async client implementation.
//!
//! This module provides an async [`Client`], its [`ClientBuilder`], and the
//! bearer-authenticated [`Session`] for interacting with the mail.tm
//! temporary email service.
//!
//! Typical flow:
//! 1) Build a client (`Client::new` or `Client::builder().build()`)
//! 2) Pick a domain via [`Client::first_domain`]
//! 3) Register an address via [`Client::create_account`]
//! 4) Log in via [`Client::login`] to obtain a [`Session`]
//! 5) Read the inbox via [`Session::messages`] and [`Session::message`]
//! 6) Optionally remove the account via [`Session::delete_account`]
//!
//! Every call is a single request/response cycle. Nothing is retried; a
//! non-success status surfaces as [`Error::Status`] carrying the raw body.

use crate::models::Collection;
use crate::{Account, Domain, Error, MessageDetails, MessageSummary, Result, Token};
#[cfg(feature = "debug_responses")]
use regex::Regex;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

/// Async client for the mail.tm temporary email service.
///
/// This type is `Clone`; clones share the underlying `reqwest` connection pool.
/// Unauthenticated endpoints live here, bearer-authenticated ones on [`Session`].
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    proxy: Option<String>,
    user_agent: String,
    base_url: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("http", &"<reqwest::Client>")
            .field("proxy", &self.proxy)
            .field("user_agent", &self.user_agent)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Client {
    /// Create a [`ClientBuilder`] for configuring a new client.
    ///
    /// Use this when you need to set a proxy, a timeout, or a different base URL.
    ///
    /// # Examples
    /// ```no_run
    /// # use mailtm_generator::Client;
    /// # fn main() -> Result<(), mailtm_generator::Error> {
    /// let client = Client::builder()
    ///     .user_agent("my-app/1.0")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new mail.tm client using default settings.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /// Get the proxy URL configured for this client (if any).
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Base URL all endpoint paths are joined onto.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List the domains accounts can currently be created under.
    ///
    /// # Errors
    /// Returns an error if the request fails or the listing cannot be parsed.
    pub async fn domains(&self) -> Result<Vec<Domain>> {
        let list: Collection<Domain> = self
            .request(ApiMethod::Get, "/domains", None, None)
            .await?;
        Ok(list.into_vec())
    }

    /// The first listed domain, which is what new accounts are created under.
    ///
    /// # Errors
    /// Returns [`Error::NoDomains`] if the listing is empty.
    pub async fn first_domain(&self) -> Result<Domain> {
        self.domains()
            .await?
            .into_iter()
            .next()
            .ok_or(Error::NoDomains)
    }

    /// Register `address` with `password`.
    ///
    /// mail.tm answers `201 Created` with the new account. Taken addresses and
    /// invalid local parts come back as 4xx and surface as [`Error::Status`].
    ///
    /// # Examples
    /// ```no_run
    /// # use mailtm_generator::Client;
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() -> Result<(), mailtm_generator::Error> {
    /// let client = Client::new()?;
    /// let domain = client.first_domain().await?;
    /// let address = format!("quietotter@{}", domain.domain);
    /// let account = client.create_account(&address, "s3cret!pass").await?;
    /// println!("{}", account.address);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_account(&self, address: &str, password: &str) -> Result<Account> {
        let payload = json!({ "address": address, "password": password });
        let account: Account = self
            .request(ApiMethod::Post, "/accounts", Some(&payload), None)
            .await?;
        info!(address = %account.address, "account created");
        Ok(account)
    }

    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    /// Returns [`Error::Status`] on bad credentials (mail.tm answers 401).
    pub async fn token(&self, address: &str, password: &str) -> Result<Token> {
        let payload = json!({ "address": address, "password": password });
        let token: Token = self
            .request(ApiMethod::Post, "/token", Some(&payload), None)
            .await?;
        if token.token.trim().is_empty() {
            return Err(Error::ResponseParseContext {
                msg: "empty `token` in login response".to_string(),
            });
        }
        Ok(token)
    }

    /// Log in and return a [`Session`] for the authorized endpoints.
    ///
    /// # Examples
    /// ```no_run
    /// # use mailtm_generator::Client;
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() -> Result<(), mailtm_generator::Error> {
    /// let client = Client::new()?;
    /// let session = client.login("quietotter@example.com", "s3cret!pass").await?;
    /// for msg in session.messages().await? {
    ///     println!("{}: {}", msg.from.address, msg.subject);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn login(&self, address: &str, password: &str) -> Result<Session<'_>> {
        let token = self.token(address, password).await?;
        let auth = HeaderValue::from_str(&format!("Bearer {}", token.token))?;
        Ok(Session {
            client: self,
            auth,
            address: address.to_string(),
        })
    }

    async fn request<T>(
        &self,
        method: ApiMethod,
        path: &str,
        body: Option<&serde_json::Value>,
        auth: Option<&HeaderValue>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let (_status, bytes) = self.execute_request(method, path, body, auth).await?;
        let parsed = serde_json::from_slice::<T>(&bytes)?;
        Ok(parsed)
    }

    async fn request_status(
        &self,
        method: ApiMethod,
        path: &str,
        auth: Option<&HeaderValue>,
    ) -> Result<StatusCode> {
        let (status, _bytes) = self.execute_request(method, path, None, auth).await?;
        Ok(status)
    }

    async fn execute_request(
        &self,
        method: ApiMethod,
        path: &str,
        body: Option<&serde_json::Value>,
        auth: Option<&HeaderValue>,
    ) -> Result<(StatusCode, Vec<u8>)> {
        let url = self.endpoint(path);

        let mut headers = self.headers();
        if let Some(value) = auth {
            headers.insert(AUTHORIZATION, value.clone());
        }

        #[cfg(feature = "debug_responses")]
        self.log_request(method, &url, body);

        let mut request = match method {
            ApiMethod::Get => self.http.get(&url),
            ApiMethod::Post => self.http.post(&url),
            ApiMethod::Delete => self.http.delete(&url),
        };
        if let Some(payload) = body {
            request = request.json(payload);
        }

        let response = request.headers(headers).send().await?;
        let status = response.status();
        debug!(?method, %url, status = status.as_u16(), "mail.tm response");

        if !status.is_success() {
            // Keep a bounded snippet of the body for diagnostics.
            let body_snippet = response
                .text()
                .await
                .unwrap_or_else(|_| "<unavailable>".to_string())
                .chars()
                .take(512)
                .collect::<String>();

            return Err(Error::Status {
                status: status.as_u16(),
                url,
                body: body_snippet,
            });
        }

        let bytes = response.bytes().await?;

        #[cfg(feature = "debug_responses")]
        self.log_response(status, &bytes);

        Ok((status, bytes.to_vec()))
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Headers sent with every request.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Ok(value) = HeaderValue::from_str(&self.user_agent) {
            headers.insert(USER_AGENT, value);
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/ld+json, application/json;q=0.9"),
        );

        headers
    }

    #[cfg(feature = "debug_responses")]
    fn log_request(&self, method: ApiMethod, url: &str, body: Option<&serde_json::Value>) {
        debug!("mail.tm API request: {:?} {}", method, url);
        if let Some(payload) = body {
            let mut payload = payload.clone();
            Self::redact_secrets_in_value(&mut payload);
            debug!("Body: {}", payload);
        }
    }

    #[cfg(feature = "debug_responses")]
    fn log_response(&self, status: StatusCode, body: &[u8]) {
        debug!("mail.tm API response (status={}):", status.as_str());

        if let Ok(mut value) = serde_json::from_slice::<serde_json::Value>(body) {
            Self::redact_secrets_in_value(&mut value);
            if let Ok(pretty) = serde_json::to_string_pretty(&value) {
                debug!("{pretty}");
                return;
            }
        }

        let body_text = String::from_utf8_lossy(body);
        debug!("{}", Self::redact_secrets_in_text(&body_text));
    }

    #[cfg(feature = "debug_responses")]
    fn redact_secrets_in_value(value: &mut serde_json::Value) {
        match value {
            serde_json::Value::Object(map) => {
                for (key, val) in map.iter_mut() {
                    let key = key.to_lowercase();
                    if key.contains("token") || key.contains("password") {
                        *val = serde_json::Value::String("<redacted>".to_string());
                    } else {
                        Self::redact_secrets_in_value(val);
                    }
                }
            }
            serde_json::Value::Array(items) => {
                for item in items {
                    Self::redact_secrets_in_value(item);
                }
            }
            _ => {}
        }
    }

    #[cfg(feature = "debug_responses")]
    fn redact_secrets_in_text(raw: &str) -> String {
        let mut redacted = raw.to_string();

        let patterns = [
            r#"(?i)("token"\s*:\s*")[^"]*(")"#,
            r#"(?i)("password"\s*:\s*")[^"]*(")"#,
            r#"(?i)(Bearer\s+)[A-Za-z0-9._\-]+"#,
        ];

        for pattern in patterns {
            if let Ok(re) = Regex::new(pattern) {
                redacted = re
                    .replace_all(&redacted, |caps: &regex::Captures<'_>| {
                        if caps.len() >= 3 {
                            format!("{}<redacted>{}", &caps[1], &caps[2])
                        } else {
                            format!("{}<redacted>", &caps[1])
                        }
                    })
                    .to_string();
            }
        }

        redacted
    }
}

/// An authenticated view of a single mail.tm account.
///
/// Obtained from [`Client::login`]; every request carries the bearer token.
pub struct Session<'a> {
    client: &'a Client,
    auth: HeaderValue,
    address: String,
}

impl fmt::Debug for Session<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("client", self.client)
            .field("auth", &"<redacted>")
            .field("address", &self.address)
            .finish()
    }
}

impl Session<'_> {
    /// Address this session is logged in as.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// List the first page of inbox messages.
    pub async fn messages(&self) -> Result<Vec<MessageSummary>> {
        let list: Collection<MessageSummary> = self
            .client
            .request(ApiMethod::Get, "/messages", None, Some(&self.auth))
            .await?;
        Ok(list.into_vec())
    }

    /// Fetch one full message.
    pub async fn message(&self, id: &str) -> Result<MessageDetails> {
        if id.trim().is_empty() {
            return Err(Error::ResponseParseContext {
                msg: "missing message id".to_string(),
            });
        }
        self.client
            .request(
                ApiMethod::Get,
                &format!("/messages/{id}"),
                None,
                Some(&self.auth),
            )
            .await
    }

    /// Account metadata for the logged-in address.
    pub async fn me(&self) -> Result<Account> {
        self.client
            .request(ApiMethod::Get, "/me", None, Some(&self.auth))
            .await
    }

    /// Delete the account with `account_id`.
    ///
    /// mail.tm answers `204 No Content`; any non-2xx is an error.
    pub async fn delete_account(&self, account_id: &str) -> Result<()> {
        if account_id.trim().is_empty() {
            return Err(Error::ResponseParseContext {
                msg: "missing account id for deletion".to_string(),
            });
        }
        let status = self
            .client
            .request_status(
                ApiMethod::Delete,
                &format!("/accounts/{account_id}"),
                Some(&self.auth),
            )
            .await?;
        info!(address = %self.address, status = status.as_u16(), "account deleted");
        Ok(())
    }
}

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.mail.tm";
const USER_AGENT_VALUE: &str = concat!("mailtm-generator/", env!("CARGO_PKG_VERSION"));
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for configuring a mail.tm [`Client`].
///
/// # Defaults
/// - No proxy
/// - A crate-identifying user agent
/// - `https://api.mail.tm` as base URL
/// - 30 second request timeout
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    proxy: Option<String>,
    user_agent: String,
    base_url: String,
    timeout: Duration,
}

#[derive(Copy, Clone, Debug)]
enum ApiMethod {
    Get,
    Post,
    Delete,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// See [`ClientBuilder`] for the list of defaults.
    pub fn new() -> Self {
        Self {
            proxy: None,
            user_agent: USER_AGENT_VALUE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a proxy URL (e.g. `"http://127.0.0.1:8080"`).
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the mail.tm base URL.
    ///
    /// This is primarily useful for testing.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the timeout applied to every request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the [`Client`].
    ///
    /// No request is made here.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed (e.g. an invalid proxy URL).
    pub fn build(self) -> Result<Client> {
        let mut builder = reqwest::Client::builder().timeout(self.timeout);

        if let Some(proxy_url) = &self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        let http = builder.build()?;

        Ok(Client {
            http,
            proxy: self.proxy,
            user_agent: self.user_agent,
            base_url: self.base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::{DELETE, GET, POST};
    use httpmock::MockServer;

    fn client_for(server: &MockServer) -> Client {
        ClientBuilder::new()
            .base_url(server.base_url())
            .build()
            .expect("test client build failed")
    }

    fn account_json(id: &str, address: &str) -> serde_json::Value {
        json!({
            "id": id,
            "address": address,
            "quota": 40000000,
            "used": 0,
            "isDisabled": false,
            "createdAt": "2024-01-15T17:30:00+00:00",
            "updatedAt": "2024-01-15T17:30:00+00:00"
        })
    }

    #[tokio::test]
    async fn first_domain_reads_hydra_member_list() {
        let server = MockServer::start_async().await;
        let domains_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/domains");
                then.status(200).json_body(json!({
                    "hydra:member": [
                        { "id": "d1", "domain": "first.test", "isActive": true },
                        { "id": "d2", "domain": "second.test", "isActive": true }
                    ]
                }));
            })
            .await;

        let domain = client_for(&server).first_domain().await.unwrap();

        assert_eq!(domain.domain, "first.test");
        domains_mock.assert_async().await;
    }

    #[tokio::test]
    async fn first_domain_errors_when_listing_is_empty() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/domains");
                then.status(200).json_body(json!({ "hydra:member": [] }));
            })
            .await;

        let result = client_for(&server).first_domain().await;
        assert!(matches!(result, Err(Error::NoDomains)));
    }

    #[tokio::test]
    async fn create_account_posts_address_and_password() {
        let server = MockServer::start_async().await;
        let create_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/accounts")
                    .json_body(json!({ "address": "quietotter@first.test", "password": "pw" }));
                then.status(201)
                    .json_body(account_json("acc-1", "quietotter@first.test"));
            })
            .await;

        let account = client_for(&server)
            .create_account("quietotter@first.test", "pw")
            .await
            .unwrap();

        assert_eq!(account.id, "acc-1");
        assert_eq!(account.address, "quietotter@first.test");
        create_mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_account_surfaces_raw_body_on_rejection() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/accounts");
                then.status(422)
                    .body(r#"{"detail":"address: This value is already used."}"#);
            })
            .await;

        let err = client_for(&server)
            .create_account("taken@first.test", "pw")
            .await
            .unwrap_err();

        match err {
            Error::Status { status, body, .. } => {
                assert_eq!(status, 422);
                assert!(body.contains("already used"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn login_attaches_bearer_token_to_inbox_requests() {
        let server = MockServer::start_async().await;
        let token_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/token")
                    .json_body(json!({ "address": "a@first.test", "password": "pw" }));
                then.status(200)
                    .json_body(json!({ "id": "acc-1", "token": "tok123" }));
            })
            .await;
        let messages_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/messages")
                    .header("authorization", "Bearer tok123");
                then.status(200).json_body(json!({
                    "hydra:member": [{
                        "id": "m1",
                        "from": { "address": "sender@else.test", "name": "Sender" },
                        "subject": "Welcome",
                        "intro": "Hello"
                    }]
                }));
            })
            .await;

        let client = client_for(&server);
        let session = client.login("a@first.test", "pw").await.unwrap();
        let messages = session.messages().await.unwrap();

        assert_eq!(session.address(), "a@first.test");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].from.address, "sender@else.test");
        assert_eq!(messages[0].subject, "Welcome");
        token_mock.assert_async().await;
        messages_mock.assert_async().await;
    }

    #[tokio::test]
    async fn login_fails_on_bad_credentials() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/token");
                then.status(401).json_body(json!({ "message": "Invalid credentials." }));
            })
            .await;

        let client = client_for(&server);
        let result = client.login("a@first.test", "wrong").await;
        assert!(matches!(result, Err(Error::Status { status: 401, .. })));
    }

    #[tokio::test]
    async fn message_and_me_use_session_token() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/token");
                then.status(200).json_body(json!({ "id": "acc-1", "token": "tok" }));
            })
            .await;
        let message_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/messages/m1")
                    .header("authorization", "Bearer tok");
                then.status(200).json_body(json!({
                    "id": "m1",
                    "from": { "address": "sender@else.test" },
                    "subject": "Code",
                    "text": "Your code is 1234"
                }));
            })
            .await;
        let me_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/me")
                    .header("authorization", "Bearer tok");
                then.status(200).json_body(account_json("acc-1", "a@first.test"));
            })
            .await;

        let client = client_for(&server);
        let session = client.login("a@first.test", "pw").await.unwrap();
        let details = session.message("m1").await.unwrap();
        let account = session.me().await.unwrap();

        assert_eq!(details.body_text(), Some("Your code is 1234"));
        assert_eq!(account.id, "acc-1");
        message_mock.assert_async().await;
        me_mock.assert_async().await;
    }

    #[tokio::test]
    async fn delete_account_accepts_no_content() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/token");
                then.status(200).json_body(json!({ "id": "acc-1", "token": "tok" }));
            })
            .await;
        let delete_mock = server
            .mock_async(|when, then| {
                when.method(DELETE)
                    .path("/accounts/acc-1")
                    .header("authorization", "Bearer tok");
                then.status(204);
            })
            .await;

        let client = client_for(&server);
        let session = client.login("a@first.test", "pw").await.unwrap();
        session.delete_account("acc-1").await.unwrap();

        delete_mock.assert_async().await;
    }

    #[tokio::test]
    async fn delete_account_propagates_error_on_non_success_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/token");
                then.status(200).json_body(json!({ "id": "acc-1", "token": "tok" }));
            })
            .await;
        let delete_mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/accounts/acc-1");
                then.status(500).body("boom");
            })
            .await;

        let client = client_for(&server);
        let session = client.login("a@first.test", "pw").await.unwrap();
        let result = session.delete_account("acc-1").await;

        assert!(result.is_err(), "expected error on non-2xx delete_account");
        delete_mock.assert_async().await;
    }

    #[tokio::test]
    async fn blank_account_id_is_rejected_without_a_request() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/token");
                then.status(200).json_body(json!({ "id": "acc-1", "token": "tok" }));
            })
            .await;
        let delete_mock = server
            .mock_async(|when, then| {
                when.method(DELETE);
                then.status(204);
            })
            .await;

        let client = client_for(&server);
        let session = client.login("a@first.test", "pw").await.unwrap();
        let result = session.delete_account("  ").await;

        assert!(matches!(result, Err(Error::ResponseParseContext { .. })));
        delete_mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn user_agent_header_is_sent() {
        let server = MockServer::start_async().await;
        let domains_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/domains")
                    .header("user-agent", "my-app/1.0");
                then.status(200).json_body(json!([]));
            })
            .await;

        let client = ClientBuilder::new()
            .base_url(server.base_url())
            .user_agent("my-app/1.0")
            .build()
            .unwrap();
        let domains = client.domains().await.unwrap();

        assert!(domains.is_empty());
        domains_mock.assert_async().await;
    }

    #[test]
    fn builder_defaults() {
        let builder = ClientBuilder::default();
        let rendered = format!("{builder:?}");
        assert!(rendered.contains("timeout: 30s"));
        assert!(!rendered.contains("certs"));

        let client = builder.build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.proxy(), None);
    }

    #[test]
    fn debug_output_names_base_url_only() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:1")
            .build()
            .unwrap();
        let rendered = format!("{client:?}");
        assert!(rendered.contains("http://localhost:1"));
        assert!(rendered.contains("<reqwest::Client>"));
    }

    #[cfg(feature = "debug_responses")]
    #[test]
    fn redaction_masks_tokens_and_passwords() {
        let mut value = json!({ "token": "abc", "nested": { "password": "pw" }, "id": "x" });
        Client::redact_secrets_in_value(&mut value);
        assert_eq!(value["token"], "<redacted>");
        assert_eq!(value["nested"]["password"], "<redacted>");
        assert_eq!(value["id"], "x");

        let text = Client::redact_secrets_in_text(r#"{"token":"abc"} Bearer xyz.123"#);
        assert!(!text.contains("abc"));
        assert!(!text.contains("xyz.123"));
    }
}

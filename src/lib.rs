//! Client SDK for the onDemand translation-commerce HTTP/XML API.
//!
//! Provides a high-level blocking client for account management, file and
//! product submission, quote generation, and project lifecycle calls.
//! Requests are signed with the account's access key pair and exchanged as
//! XML; responses map into plain domain entities.
//!
//! # Quick start
//!
//! ```no_run
//! use ondemand_sdk::models::TranslationOptions;
//! use ondemand_sdk::OnDemandClient;
//!
//! let client = OnDemandClient::builder()
//!     .endpoint("https://developer-sandbox.example.com")
//!     .credentials("aZqpaIZkYRfPFrtUWiyq", "pfnjPvrGvmdNLSABtQmarrJcKeFtovQBeVXyzWjW")
//!     .default_currency("USD")
//!     .build()
//!     .unwrap();
//!
//! // Pick a file-based service and quote an upload against it.
//! let service = client.services().get(54).unwrap();
//! let options = TranslationOptions::new("en-gb", Some(&["fr-fr"]), None).unwrap();
//! let quote = client
//!     .quotes()
//!     .generate_from_uploads(&service, &[("readme.txt", b"Hello".as_slice())], options, &[])
//!     .unwrap();
//! println!("quote {} is {}", quote.quote_id, quote.status);
//! ```

pub mod api;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod xml;

mod http;

pub use cache::TranslationCache;
pub use error::{ApiError, OnDemandError, Result};

use url::Url;

// ---------------------------------------------------------------------------
// OnDemandClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`OnDemandClient`].
///
/// Use [`OnDemandClient::builder()`] to obtain a builder, chain
/// configuration methods, and call [`build()`](OnDemandClientBuilder::build)
/// to create the client.
#[derive(Debug, Default)]
pub struct OnDemandClientBuilder {
    endpoint: Option<String>,
    key_id: Option<String>,
    secret_key: Option<String>,
    default_currency: Option<String>,
}

impl OnDemandClientBuilder {
    /// Base URL of the API instance to communicate with.
    pub fn endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.to_string());
        self
    }

    /// The account's access key ID and secret access key.
    pub fn credentials(mut self, key_id: &str, secret_key: &str) -> Self {
        self.key_id = Some(key_id.to_string());
        self.secret_key = Some(secret_key.to_string());
        self
    }

    /// Default currency for transactions. Without one, quote generation
    /// fails unless each request names a currency itself.
    pub fn default_currency(mut self, currency: &str) -> Self {
        self.default_currency = Some(currency.to_string());
        self
    }

    /// Build the client.
    ///
    /// Requires the endpoint and credentials to have been supplied; nothing
    /// is contacted over the network.
    pub fn build(self) -> Result<OnDemandClient> {
        let endpoint = self.endpoint.ok_or_else(|| {
            OnDemandError::InvalidArgument("an endpoint is required".to_string())
        })?;
        let key_id = self.key_id.filter(|k| !k.is_empty()).ok_or_else(|| {
            OnDemandError::InvalidArgument("an access key ID is required".to_string())
        })?;
        let secret_key = self.secret_key.filter(|k| !k.is_empty()).ok_or_else(|| {
            OnDemandError::InvalidArgument("a secret access key is required".to_string())
        })?;

        // Relative API paths resolve against the endpoint, so its path must
        // end with a slash.
        let mut endpoint = Url::parse(&endpoint)?;
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }

        Ok(OnDemandClient {
            transport: http::Transport::new(endpoint, key_id, secret_key)?,
            default_currency: self.default_currency,
        })
    }
}

// ---------------------------------------------------------------------------
// OnDemandClient
// ---------------------------------------------------------------------------

/// The main entry point of the SDK.
///
/// Owns the signed HTTP transport and exposes the per-domain API interfaces
/// as lightweight borrowing wrappers. Every call is synchronous and issues
/// exactly one request, except the compound upload-then-submit operations,
/// which issue a documented fixed sequence.
#[derive(Debug)]
pub struct OnDemandClient {
    pub(crate) transport: http::Transport,
    pub(crate) default_currency: Option<String>,
}

impl OnDemandClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> OnDemandClientBuilder {
        OnDemandClientBuilder::default()
    }

    // -- API interfaces ----------------------------------------------------

    /// Account operations: creation, summary, prepaid balance.
    pub fn accounts(&self) -> api::AccountApi<'_> {
        api::AccountApi::new(self)
    }

    /// Quote operations: generation, authorization, rejection, polling.
    pub fn quotes(&self) -> api::QuoteApi<'_> {
        api::QuoteApi::new(self)
    }

    /// File operations: uploads, listing, content, translations.
    pub fn files(&self) -> api::FileApi<'_> {
        api::FileApi::new(self)
    }

    /// Project operations: creation, listing, polling.
    pub fn projects(&self) -> api::ProjectApi<'_> {
        api::ProjectApi::new(self)
    }

    /// Product operations: listing, retrieval, translations.
    pub fn products(&self) -> api::ProductApi<'_> {
        api::ProductApi::new(self)
    }

    /// Service discovery and estimates.
    pub fn services(&self) -> api::ServiceApi<'_> {
        api::ServiceApi::new(self)
    }

    /// Locale discovery.
    pub fn locales(&self) -> api::LocaleApi<'_> {
        api::LocaleApi::new(self)
    }

    // -- Miscellaneous -----------------------------------------------------

    /// The current terms and conditions, as an XHTML document.
    pub fn terms(&self) -> Result<String> {
        self.transport.get_text("api/terms")
    }

    /// The default currency the client was configured with.
    pub fn default_currency(&self) -> Option<&str> {
        self.default_currency.as_deref()
    }
}

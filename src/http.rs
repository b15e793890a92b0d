//! Signed HTTP transport.
//!
//! One blocking request per call: build the URL, attach the signed headers,
//! send, then branch on the status code. Documented success statuses hand
//! the body to the XML layer; anything else is parsed opportunistically for
//! an `<Error>` envelope and surfaced as [`ApiError`]. There are no retries
//! and no timeouts beyond the platform defaults.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{Method, StatusCode};
use tracing::debug;
use url::Url;

use crate::auth;
use crate::config::{API_VERSION, CONTENT_TYPE_XML};
use crate::error::{ApiError, OnDemandError, Result};
use crate::xml::{Element, XmlError};

/// Escape set matching standard data-string escaping: everything but
/// unreserved characters is percent-encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode one path segment (e.g. an uploaded file name).
pub(crate) fn escape_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

pub(crate) struct Transport {
    http: Client,
    endpoint: Url,
    key_id: String,
    secret_key: String,
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The secret key never goes into debug output.
        f.debug_struct("Transport")
            .field("endpoint", &self.endpoint.as_str())
            .field("key_id", &self.key_id)
            .finish_non_exhaustive()
    }
}

impl Transport {
    pub(crate) fn new(endpoint: Url, key_id: String, secret_key: String) -> Result<Transport> {
        let http = Client::builder().build()?;
        Ok(Transport {
            http,
            endpoint,
            key_id,
            secret_key,
        })
    }

    /// Resolve a relative API path against the endpoint.
    fn url_for(&self, path: &str) -> Result<Url> {
        Ok(self.endpoint.join(path)?)
    }

    /// Build a request with the signed header set attached.
    ///
    /// The signature covers the percent-encoded URL path, the timestamp, the
    /// API version, and the fixed `text/xml` content type -- even when the
    /// transmitted Content-Type is later overridden for a raw file upload.
    fn signed(&self, method: Method, url: &Url) -> RequestBuilder {
        let timestamp = auth::timestamp_now();
        let authorization = auth::authorization_header(
            &self.key_id,
            &self.secret_key,
            method.as_str(),
            url.path(),
            &timestamp,
            API_VERSION,
        );

        self.http
            .request(method, url.clone())
            .header("x-lod-timestamp", timestamp)
            .header("x-lod-version", API_VERSION)
            .header("Authorization", authorization)
            .header("Content-Type", CONTENT_TYPE_XML)
            .header("Accept", CONTENT_TYPE_XML)
    }

    // -- Verb helpers ------------------------------------------------------

    /// GET, expecting 200, parsed into the root element.
    pub(crate) fn get_element(&self, path: &str) -> Result<Element> {
        let url = self.url_for(path)?;
        debug!(%url, "GET");
        let response = self.signed(Method::GET, &url).send()?;
        self.read_element(response, &[StatusCode::OK])
    }

    /// GET, expecting 200, returning the raw body bytes.
    pub(crate) fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.url_for(path)?;
        debug!(%url, "GET (bytes)");
        let response = self.signed(Method::GET, &url).send()?;

        if response.status() == StatusCode::OK {
            Ok(response.bytes()?.to_vec())
        } else {
            Err(self.error_from(response))
        }
    }

    /// GET, expecting 200, returning the raw body text.
    pub(crate) fn get_text(&self, path: &str) -> Result<String> {
        let url = self.url_for(path)?;
        debug!(%url, "GET (text)");
        let response = self.signed(Method::GET, &url).send()?;

        if response.status() == StatusCode::OK {
            Ok(response.text()?)
        } else {
            Err(self.error_from(response))
        }
    }

    /// POST an optional XML body, accepting any of the given statuses.
    ///
    /// Returns the status alongside the parsed root so callers with more
    /// than one documented success status (quote authorization's 202/402)
    /// can branch on it.
    pub(crate) fn post_element(
        &self,
        path: &str,
        body: Option<String>,
        accept: &[StatusCode],
    ) -> Result<(StatusCode, Element)> {
        let url = self.url_for(path)?;
        debug!(%url, "POST");
        let request = self.signed(Method::POST, &url);
        let request = match body {
            Some(body) => request.body(body),
            None => request.body(""),
        };

        let response = request.send()?;
        let status = response.status();
        let element = self.read_element(response, accept)?;
        Ok((status, element))
    }

    /// POST raw file bytes with a per-extension Content-Type, expecting 201.
    ///
    /// The Content-Type override happens after signing; the canonical string
    /// always says `text/xml`.
    pub(crate) fn post_upload(
        &self,
        path: &str,
        content_type: &'static str,
        data: Vec<u8>,
    ) -> Result<Element> {
        let url = self.url_for(path)?;
        debug!(%url, content_type, "POST (upload)");
        let response = self
            .signed(Method::POST, &url)
            .header("Content-Type", content_type)
            .body(data)
            .send()?;

        self.read_element(response, &[StatusCode::CREATED])
    }

    // -- Response handling -------------------------------------------------

    /// Parse a successful body into its root element, or map a non-success
    /// status into an error.
    fn read_element(
        &self,
        response: reqwest::blocking::Response,
        accept: &[StatusCode],
    ) -> Result<Element> {
        let status = response.status();
        if !accept.contains(&status) {
            return Err(self.error_from(response));
        }

        let body = response.text()?;
        Ok(Element::parse(&body)?)
    }

    /// Build the typed error for a non-success response.
    ///
    /// The body is parsed opportunistically: the first `<Error>` descendant
    /// supplies reason code and messages; an absent or unparsable envelope
    /// synthesizes a message from the status alone.
    fn error_from(&self, response: reqwest::blocking::Response) -> OnDemandError {
        let status = response.status();
        let body = response.text().unwrap_or_default();

        let envelope = if body.trim().is_empty() {
            None
        } else {
            Element::parse(&body)
                .ok()
                .and_then(|root| find_error_element(&root).cloned())
        };

        OnDemandError::Api(ApiError::from_envelope(status, envelope.as_ref()))
    }
}

/// Depth-first search for the first `<Error>` element in a document.
fn find_error_element(element: &Element) -> Option<&Element> {
    if element.name() == "Error" {
        return Some(element);
    }
    element.child_elements().find_map(find_error_element)
}

/// Require the response root to carry the expected element name.
pub(crate) fn expect_root(element: Element, name: &str) -> Result<Element> {
    if element.name() == name {
        Ok(element)
    } else {
        Err(OnDemandError::Xml(XmlError::MissingElement(
            name.to_string(),
        )))
    }
}

//! Request signing.
//!
//! Every request carries an `Authorization` header of the form:
//!
//! ```text
//! LOD1-BASE64-SHA256 KeyID=<key>,Signature=<sig>,SignedHeaders=x-lod-timestamp;x-lod-version;accept
//! ```
//!
//! Where `<sig> = Base64(SHA-256(StringToSign))` and:
//!
//! ```text
//! StringToSign = METHOD ":" RESOURCE ":" SECRET ":" TIMESTAMP ":" VERSION ":" "text/xml"
//! ```
//!
//! Note that this is not HMAC: the shared secret is concatenated directly
//! into the hashed string. That construction is weaker than a keyed hash,
//! but it is what the server verifies, so it must be reproduced exactly.
//! Signing cannot fail; a wrong or missing secret simply produces a
//! signature the server rejects with 401.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Timelike, Utc};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::config::{AUTH_SCHEME, CONTENT_TYPE_XML, SIGNED_HEADERS};

/// Format a timestamp the way the `x-lod-timestamp` header and the canonical
/// string expect: UTC, ISO-8601-like, exactly seven fractional-second digits.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    format!(
        "{}.{:07}",
        at.format("%Y-%m-%dT%H:%M:%S"),
        at.nanosecond() / 100
    )
}

/// The current time in wire timestamp format.
pub fn timestamp_now() -> String {
    format_timestamp(Utc::now())
}

/// Build the `Authorization` header value for one request.
///
/// `resource` is the absolute URL path, leading slash included, in its
/// percent-encoded form. The output is fully determined by its inputs.
pub fn authorization_header(
    key_id: &str,
    secret_key: &str,
    method: &str,
    resource: &str,
    timestamp: &str,
    version: &str,
) -> String {
    let string_to_sign = build_string_to_sign(method, resource, secret_key, timestamp, version);

    debug!(method, resource, timestamp, "signing request");

    let digest = Sha256::digest(string_to_sign.as_bytes());
    let signature = BASE64.encode(digest);

    format!("{AUTH_SCHEME} KeyID={key_id},Signature={signature},SignedHeaders={SIGNED_HEADERS}")
}

/// Colon-join the canonical fields in their fixed order. No escaping.
fn build_string_to_sign(
    method: &str,
    resource: &str,
    secret_key: &str,
    timestamp: &str,
    version: &str,
) -> String {
    format!("{method}:{resource}:{secret_key}:{timestamp}:{version}:{CONTENT_TYPE_XML}")
}

//! Unit tests for request signing.

use chrono::{TimeZone, Utc};
use ondemand_sdk::auth::{authorization_header, format_timestamp};

const SECRET: &str = "pfnjPvrGvmdNLSABtQmarrJcKeFtovQBeVXyzWjW";

// ---------------------------------------------------------------------------
// Timestamp format
// ---------------------------------------------------------------------------

#[test]
fn timestamp_has_seven_fractional_digits() {
    let at = Utc.with_ymd_and_hms(2015, 2, 23, 10, 32, 2).unwrap();
    assert_eq!("2015-02-23T10:32:02.0000000", format_timestamp(at));
}

#[test]
fn timestamp_truncates_to_hundred_nanosecond_ticks() {
    let at = Utc
        .with_ymd_and_hms(2015, 2, 23, 10, 32, 2)
        .unwrap()
        .checked_add_signed(chrono::Duration::nanoseconds(123_456_789))
        .unwrap();
    assert_eq!("2015-02-23T10:32:02.1234567", format_timestamp(at));
}

// ---------------------------------------------------------------------------
// Authorization header
// ---------------------------------------------------------------------------

#[test]
fn header_is_deterministic_for_fixed_inputs() {
    let first = authorization_header(
        "aZqpaIZkYRfPFrtUWiyq",
        SECRET,
        "GET",
        "/api/account/info",
        "2015-02-23T10:32:02.0000000",
        "2015-02-23",
    );
    let second = authorization_header(
        "aZqpaIZkYRfPFrtUWiyq",
        SECRET,
        "GET",
        "/api/account/info",
        "2015-02-23T10:32:02.0000000",
        "2015-02-23",
    );

    assert_eq!(first, second);
}

#[test]
fn header_matches_known_answer() {
    let header = authorization_header(
        "aZqpaIZkYRfPFrtUWiyq",
        SECRET,
        "GET",
        "/api/account/info",
        "2015-02-23T10:32:02.0000000",
        "2015-02-23",
    );

    assert_eq!(
        "LOD1-BASE64-SHA256 KeyID=aZqpaIZkYRfPFrtUWiyq,\
         Signature=f5kEIN01/JgLtVTiFWPxJ5I6N0PqXuAauX9Q4nJTjhk=,\
         SignedHeaders=x-lod-timestamp;x-lod-version;accept",
        header
    );
}

#[test]
fn header_changes_with_the_secret() {
    let args = (
        "aZqpaIZkYRfPFrtUWiyq",
        "GET",
        "/api/account/info",
        "2015-02-23T10:32:02.0000000",
        "2015-02-23",
    );

    let with_secret = authorization_header(args.0, SECRET, args.1, args.2, args.3, args.4);
    let with_other = authorization_header(args.0, "other-secret", args.1, args.2, args.3, args.4);

    assert_ne!(with_secret, with_other);
}

#[test]
fn header_changes_with_the_resource_path() {
    let with_info = authorization_header(
        "key",
        SECRET,
        "GET",
        "/api/account/info",
        "2015-02-23T10:32:02.0000000",
        "2015-02-23",
    );
    let with_quote = authorization_header(
        "key",
        SECRET,
        "GET",
        "/api/quote",
        "2015-02-23T10:32:02.0000000",
        "2015-02-23",
    );

    assert_ne!(with_info, with_quote);
}

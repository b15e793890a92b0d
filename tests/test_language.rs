//! Language code validation and serialization tests.

use ondemand_sdk::models::{SourceLanguage, TargetLanguage};

// ---------------------------------------------------------------------------
// Code validation: exactly five characters, hyphen in the middle
// ---------------------------------------------------------------------------

#[test]
fn well_formed_codes_are_accepted() {
    assert_eq!(Some("en-gb"), SourceLanguage::new("en-gb").unwrap().code());
    assert_eq!(Some("fr-fr"), TargetLanguage::new("fr-fr").unwrap().code());
}

#[test]
fn wrong_length_is_rejected() {
    assert!(SourceLanguage::new("en").is_err());
    assert!(SourceLanguage::new("english").is_err());
    assert!(TargetLanguage::new("fr-fr-ca").is_err());
}

#[test]
fn missing_hyphen_at_position_two_is_rejected() {
    assert!(SourceLanguage::new("engbx").is_err());
    assert!(SourceLanguage::new("e-ngb").is_err());
    assert!(TargetLanguage::new("fr_fr").is_err());
}

#[test]
fn an_unset_code_is_a_legal_sentinel() {
    let unset = SourceLanguage::unset();
    assert!(unset.code().is_none());

    let default_target = TargetLanguage::default();
    assert!(default_target.code().is_none());
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn source_language_wraps_its_code() {
    let language = SourceLanguage::new("en-gb").unwrap();
    assert_eq!(
        "<SourceLanguage><LanguageCode>en-gb</LanguageCode></SourceLanguage>",
        language.to_xml()
    );
}

#[test]
fn target_language_wraps_its_code() {
    let language = TargetLanguage::new("fr-fr").unwrap();
    assert_eq!(
        "<TargetLanguage><LanguageCode>fr-fr</LanguageCode></TargetLanguage>",
        language.to_xml()
    );
}

#[test]
fn unset_codes_serialize_as_empty_elements() {
    assert_eq!(
        "<SourceLanguage><LanguageCode></LanguageCode></SourceLanguage>",
        SourceLanguage::unset().to_xml()
    );
}

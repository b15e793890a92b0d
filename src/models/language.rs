//! Source and target language value types.
//!
//! Both share one validated constructor path: a locale code must be exactly
//! five characters in the `xx-yy` form. An unset code is legal and acts as
//! the "use the default" sentinel. Codes arriving in server responses are
//! taken as-is -- response parsing is lenient throughout the mapper layer.

use url::Url;

use crate::error::{OnDemandError, Result};
use crate::xml::{Element, XmlBuilder};

/// Check that a locale code is in the `xx-yy` form: five characters with a
/// hyphen in the middle.
pub(crate) fn validate_code(code: &str) -> Result<()> {
    if code.len() != 5 || code.as_bytes().get(2) != Some(&b'-') {
        return Err(OnDemandError::InvalidArgument(format!(
            "language codes use the xx-yy locale format: {code:?}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// SourceLanguage
// ---------------------------------------------------------------------------

/// The language translation work originates in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLanguage {
    code: Option<String>,
}

impl SourceLanguage {
    /// Create a source language from a validated locale code.
    pub fn new(code: &str) -> Result<SourceLanguage> {
        validate_code(code)?;
        Ok(SourceLanguage {
            code: Some(code.to_string()),
        })
    }

    /// A source language with no code set.
    pub fn unset() -> SourceLanguage {
        SourceLanguage::default()
    }

    /// The locale code, if one is set.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Build from a `<SourceLanguage>` element, leniently. A missing element
    /// or empty `LanguageCode` yields the unset sentinel.
    pub fn from_element(element: Option<&Element>) -> SourceLanguage {
        let code = element
            .map(|e| e.child_text("LanguageCode"))
            .filter(|code| !code.is_empty());
        SourceLanguage { code }
    }

    pub fn to_xml(&self) -> String {
        let mut xml = XmlBuilder::new();
        xml.open("SourceLanguage");
        xml.element("LanguageCode", self.code.as_deref().unwrap_or(""));
        xml.close("SourceLanguage");
        xml.finish()
    }
}

// ---------------------------------------------------------------------------
// TargetLanguage
// ---------------------------------------------------------------------------

/// Per-language translation state reported for files and products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslatedFileStatus {
    /// No translation exists yet.
    #[default]
    None,
    /// Translation has begun but is not complete.
    Started,
    /// Translation is complete.
    Complete,
}

impl TranslatedFileStatus {
    fn parse(s: &str) -> TranslatedFileStatus {
        match s {
            "Started" => TranslatedFileStatus::Started,
            "Complete" => TranslatedFileStatus::Complete,
            _ => TranslatedFileStatus::None,
        }
    }
}

/// A language translation work is directed into.
///
/// Outbound, only the code is serialized. Inbound, the server may attach the
/// translation status and the project/download URLs for that language.
#[derive(Debug, Clone, Default)]
pub struct TargetLanguage {
    code: Option<String>,
    /// Number of items translated into this language.
    pub count: i32,
    /// Translation progress for this language.
    pub status: TranslatedFileStatus,
    /// URL of the project that produced the translation.
    pub project_url: Option<Url>,
    /// URL to download the translated content.
    pub download_url: Option<Url>,
}

impl TargetLanguage {
    /// Create a target language from a validated locale code.
    pub fn new(code: &str) -> Result<TargetLanguage> {
        validate_code(code)?;
        Ok(TargetLanguage {
            code: Some(code.to_string()),
            ..TargetLanguage::default()
        })
    }

    /// The locale code, if one is set.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Wrap a code that already came from the server without re-validating.
    pub(crate) fn lenient(code: &str) -> TargetLanguage {
        TargetLanguage {
            code: Some(code.to_string()).filter(|c| !c.is_empty()),
            ..TargetLanguage::default()
        }
    }

    /// Build from a `<TargetLanguage>` element, leniently.
    ///
    /// `DownloadURL` falls back to the legacy `URL` element name.
    pub fn from_element(element: &Element) -> TargetLanguage {
        let code = Some(element.child_text("LanguageCode")).filter(|code| !code.is_empty());
        let download_url = element
            .child_url("DownloadURL")
            .or_else(|| element.child_url("URL"));

        TargetLanguage {
            code,
            count: element.child_i32("Count"),
            status: TranslatedFileStatus::parse(&element.child_text("Status")),
            project_url: element.child_url("ProjectURL"),
            download_url,
        }
    }

    /// Map each `<TargetLanguage>` child of a container into an instance.
    /// A missing container yields an empty list.
    pub fn parse_list(container: Option<&Element>) -> Vec<TargetLanguage> {
        container
            .map(|c| c.children("TargetLanguage").map(TargetLanguage::from_element).collect())
            .unwrap_or_default()
    }

    pub fn to_xml(&self) -> String {
        let mut xml = XmlBuilder::new();
        xml.open("TargetLanguage");
        xml.element("LanguageCode", self.code.as_deref().unwrap_or(""));
        xml.close("TargetLanguage");
        xml.finish()
    }
}

//! File assets: uploaded source documents and their translation state.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use url::Url;

use crate::models::language::{SourceLanguage, TargetLanguage};
use crate::xml::{Element, XmlBuilder};

// ---------------------------------------------------------------------------
// FileStatus
// ---------------------------------------------------------------------------

/// Server-driven position of a file in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileStatus {
    /// Not yet created, or no state reported.
    #[default]
    None,
    /// Recently uploaded; analysis in progress. Quotes containing the file
    /// cannot be authorized yet.
    Analyzing,
    /// Analysis finished; the file can be priced and quotes authorized.
    Analyzed,
    /// The file could not be parsed and cannot be used in a project.
    AnalysisFailed,
    /// Attached to a project that is being worked on.
    InTranslation,
    /// Attached to a project that has completed.
    Translated,
    New,
}

impl FileStatus {
    /// Parse the wire status, tolerating embedded spaces
    /// (`"In Translation"` and `InTranslation` are the same status).
    pub(crate) fn parse(s: &str) -> FileStatus {
        match s.replace(' ', "").as_str() {
            "Analyzing" => FileStatus::Analyzing,
            "Analyzed" => FileStatus::Analyzed,
            "AnalysisFailed" => FileStatus::AnalysisFailed,
            "InTranslation" => FileStatus::InTranslation,
            "Translated" => FileStatus::Translated,
            "New" => FileStatus::New,
            _ => FileStatus::None,
        }
    }
}

// ---------------------------------------------------------------------------
// File
// ---------------------------------------------------------------------------

/// An uploaded file asset.
///
/// The asset ID is the identity: files compare and hash by it. The same
/// entity serializes as `<File>` or `<ReferenceFile>` depending on whether
/// the call site is attaching it for translation or for translator context.
#[derive(Debug, Clone, Default)]
pub struct File {
    /// Server-assigned identifier of the asset.
    pub asset_id: i32,
    pub status: FileStatus,
    /// Project the asset is associated with, 0 when unassociated.
    pub project_id: i32,
    /// Original name of the file.
    pub name: String,
    /// URL to download the file.
    pub url: Option<Url>,
    pub upload_date: Option<DateTime<Utc>>,
    pub source_language: SourceLanguage,
    pub target_languages: Vec<TargetLanguage>,
}

impl File {
    /// Reference an already-uploaded asset by ID, e.g. for quote requests.
    pub fn with_asset_id(asset_id: i32) -> File {
        File {
            asset_id,
            ..File::default()
        }
    }

    pub fn from_element(element: &Element) -> File {
        let mut file = File::default();
        file.update_from_element(element);
        file
    }

    /// Re-populate from a `<File>` element; used both at construction and by
    /// the polling update call. `Name` falls back to `FileName`.
    pub fn update_from_element(&mut self, element: &Element) {
        self.asset_id = element.child_i32("AssetID");
        self.status = FileStatus::parse(&element.child_text("Status"));
        self.url = element.child_url("URL");
        self.project_id = element.child_i32("ProjectID");

        let name = element.child_text("Name");
        self.name = if name.is_empty() {
            element.child_text("FileName")
        } else {
            name
        };

        self.upload_date = element.child_datetime("UploadDate");
        self.source_language = SourceLanguage::from_element(element.child("SourceLanguage"));

        if let Some(container) = element.child("TargetLanguages") {
            self.target_languages = TargetLanguage::parse_list(Some(container));
        }
    }

    /// Map `<File>` and `<ReferenceFile>` children of a container into
    /// instances. A missing container yields an empty list.
    pub fn parse_list(container: Option<&Element>) -> Vec<File> {
        container
            .map(|c| {
                c.child_elements()
                    .filter(|e| e.name() == "File" || e.name() == "ReferenceFile")
                    .map(File::from_element)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Minimal wire form: the asset reference only.
    pub fn to_xml(&self) -> String {
        let mut xml = XmlBuilder::new();
        xml.open("File");
        xml.element("AssetID", &self.asset_id.to_string());
        xml.close("File");
        xml.finish()
    }

    /// Extended wire form under a context-dependent element name.
    ///
    /// Reference files and translatable files are the same entity; only the
    /// element name differs. With `extended` set, the name, URL, project
    /// association and target-language container are included as well
    /// (the container is always present, even when empty).
    pub fn to_xml_named(&self, as_reference: bool, extended: bool) -> String {
        let tag = if as_reference { "ReferenceFile" } else { "File" };

        let mut xml = XmlBuilder::new();
        xml.open(tag);
        xml.element("AssetID", &self.asset_id.to_string());

        if extended {
            xml.element("FileName", &self.name);
            xml.element(
                "URL",
                self.url.as_ref().map(Url::as_str).unwrap_or(""),
            );
            if self.project_id != 0 {
                xml.element("ProjectID", &self.project_id.to_string());
            }
            xml.open("TargetLanguages");
            for language in &self.target_languages {
                xml.raw(&language.to_xml());
            }
            xml.close("TargetLanguages");
        }

        xml.close(tag);
        xml.finish()
    }

    /// Wire form of an add-by-reference upload: the external URL the server
    /// should fetch the content from.
    pub(crate) fn xml_for_url(url: &Url) -> String {
        let mut xml = XmlBuilder::new();
        xml.open("File");
        xml.element("URL", url.as_str());
        xml.close("File");
        xml.finish()
    }
}

impl PartialEq for File {
    fn eq(&self, other: &File) -> bool {
        self.asset_id == other.asset_id
    }
}

impl Eq for File {}

impl Hash for File {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.asset_id.hash(state);
    }
}

// ---------------------------------------------------------------------------
// FileRejection
// ---------------------------------------------------------------------------

/// Reason for rejecting a translated file.
#[derive(Debug, Clone)]
pub struct FileRejection {
    pub reason_code: i32,
    pub reason_description: String,
}

impl FileRejection {
    pub fn new(reason_code: i32, reason_description: &str) -> FileRejection {
        FileRejection {
            reason_code,
            reason_description: reason_description.to_string(),
        }
    }

    /// Serialize to the wire XML form.
    pub fn to_xml(&self) -> String {
        let mut xml = XmlBuilder::new();
        xml.open("RejectFile");
        xml.element("ReasonCode", &self.reason_code.to_string());
        xml.element("ReasonDescription", &self.reason_description);
        xml.close("RejectFile");
        xml.finish()
    }
}

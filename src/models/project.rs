//! Projects: committed units of translation work.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use url::Url;

use crate::error::Result;
use crate::models::file::File;
use crate::models::product::Product;
use crate::xml::{Element, XmlBuilder};

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// A unit of translation work, in progress or completed.
///
/// Inside quote and project responses the languages appear as bare locale
/// codes (`SourceLanguage`/`TargetLanguages` wrap `LanguageCode` children).
/// Reference files are attached for translator context only and are excluded
/// from translation billing.
#[derive(Debug, Clone, Default)]
pub struct Project {
    pub project_id: i32,
    pub name: String,
    /// URL to retrieve the project information.
    pub url: Option<Url>,
    pub due_date: Option<DateTime<Utc>>,
    pub price: Decimal,
    pub currency: String,
    pub creation_date: Option<DateTime<Utc>>,
    pub completion_date: Option<DateTime<Utc>>,
    pub service_id: i32,
    /// Source locale code, "" when not reported.
    pub source_language: String,
    /// Target locale codes.
    pub target_languages: Vec<String>,
    pub products: Vec<Product>,
    pub files: Vec<File>,
    /// Context-only attachments; not translated.
    pub reference_files: Vec<File>,
}

impl Project {
    /// Reference an existing project by ID, e.g. for quote requests.
    pub fn with_project_id(project_id: i32) -> Project {
        Project {
            project_id,
            ..Project::default()
        }
    }

    pub fn from_element(element: &Element) -> Project {
        let mut project = Project::default();
        project.update_from_element(element);
        project
    }

    /// Re-populate from a `<Project>` element; used both at construction and
    /// by the polling update call. The due date arrives as `ProjectDueDate`
    /// in most payloads and as `DueDate` in some.
    pub fn update_from_element(&mut self, element: &Element) {
        self.project_id = element.child_i32("ProjectID");
        self.name = element.child_text("ProjectName");
        self.url = element.child_url("ProjectURL");
        self.due_date = element
            .child_datetime("ProjectDueDate")
            .or_else(|| element.child_datetime("DueDate"));
        self.price = element.child_decimal("Price");
        self.currency = element.child_text("Currency");
        self.creation_date = element.child_datetime("CreationDate");
        self.completion_date = element.child_datetime("CompletionDate");
        self.service_id = element.child_i32("ServiceID");

        self.source_language = element
            .child("SourceLanguage")
            .map(|e| e.child_text("LanguageCode"))
            .unwrap_or_default();

        self.target_languages = language_codes(element.child("TargetLanguages"));

        self.products = Product::parse_list(element.child("Products"));
        self.files = File::parse_list(element.child("Files"));
        self.reference_files = File::parse_list(element.child("ReferenceFiles"));
    }

    /// Map each `<Project>` child of a container into an instance. A missing
    /// container yields an empty list.
    pub fn parse_list(container: Option<&Element>) -> Vec<Project> {
        container
            .map(|c| c.children("Project").map(Project::from_element).collect())
            .unwrap_or_default()
    }

    /// Reduced wire form used in project-based quote requests: the project
    /// reference alone.
    pub fn to_xml_simple(&self) -> String {
        let mut xml = XmlBuilder::new();
        xml.open("Project");
        xml.element("ProjectID", &self.project_id.to_string());
        xml.close("Project");
        xml.finish()
    }
}

/// Collect the `LanguageCode` texts nested anywhere under a container.
fn language_codes(container: Option<&Element>) -> Vec<String> {
    fn collect(element: &Element, out: &mut Vec<String>) {
        for child in element.child_elements() {
            if child.name() == "LanguageCode" {
                out.push(child.text());
            } else {
                collect(child, out);
            }
        }
    }

    let mut codes = Vec::new();
    if let Some(container) = container {
        collect(container, &mut codes);
    }
    codes
}

// ---------------------------------------------------------------------------
// ProjectNotification
// ---------------------------------------------------------------------------

/// Payload of a project webhook notification.
///
/// The server posts a `<Project>` document to the notify URL registered on
/// the quote; this parses one out of the raw body.
#[derive(Debug, Clone, Default)]
pub struct ProjectNotification {
    pub project_id: i32,
    pub status: String,
    pub url: Option<Url>,
    pub creation_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    pub completion_date: Option<DateTime<Utc>>,
    /// Errors reported for the project's creation.
    pub errors: Vec<String>,
    pub source_language: String,
    pub target_languages: Vec<String>,
    pub products: Vec<Product>,
    pub files: Vec<File>,
}

impl ProjectNotification {
    /// Parse a notification from the raw XML body.
    pub fn from_xml(xml: &str) -> Result<ProjectNotification> {
        let root = Element::parse(xml)?;
        Ok(ProjectNotification::from_element(&root))
    }

    pub fn from_element(element: &Element) -> ProjectNotification {
        let errors = element
            .child("Errors")
            .map(|container| container.children("Error").map(|e| e.text()).collect())
            .unwrap_or_default();

        ProjectNotification {
            project_id: element.child_i32("ProjectID"),
            status: element.child_text("Status"),
            url: element.child_url("URL"),
            creation_date: element.child_datetime("CreationDate"),
            due_date: element.child_datetime("DueDate"),
            completion_date: element.child_datetime("CompletionDate"),
            errors,
            source_language: element
                .child("SourceLanguage")
                .map(|e| e.child_text("LanguageCode"))
                .unwrap_or_default(),
            target_languages: language_codes(element.child("TargetLanguages")),
            products: Product::parse_list(element.child("Products")),
            files: File::parse_list(element.child("Files")),
        }
    }
}

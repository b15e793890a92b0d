//! Translation services and price estimates.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::xml::Element;

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// A translation service offered through the API.
///
/// The valid-inputs block gates which request shapes the service accepts:
/// file-based operations require `accepts_files`, product-based operations
/// `accepts_products`. File-based services also restrict the acceptable file
/// extensions.
#[derive(Debug, Clone, Default)]
pub struct Service {
    pub service_id: i32,
    pub name: String,
    pub description: String,
    /// Human-readable description of how the service is priced.
    pub price_description: String,
    /// Source locale codes the service translates from.
    pub source_languages: Vec<String>,
    /// Target locale codes the service translates into.
    pub target_languages: Vec<String>,
    pub accepts_files: bool,
    pub accepts_products: bool,
    /// Extensions (without the dot) accepted by a file-based service.
    pub file_extensions: Vec<String>,
}

impl Service {
    pub fn from_element(element: &Element) -> Service {
        let mut service = Service {
            service_id: element.child_i32("ServiceID"),
            name: element.child_text("Name"),
            description: element.child_text("Description"),
            price_description: element.child_text("PriceDescription"),
            ..Service::default()
        };

        if let Some(inputs) = element.child("ValidInputs") {
            if let Some(files) = inputs.child("Files") {
                service.accepts_files = true;
                service.file_extensions = files
                    .children("FileExtension")
                    .map(|e| e.text())
                    .collect();
            }
            service.accepts_products = inputs.child("Products").is_some();
        }

        service.source_languages = codes_under(element.child("SourceLanguages"));
        service.target_languages = codes_under(element.child("TargetLanguages"));

        service
    }

    /// Map each `<Service>` child of a container into an instance. A missing
    /// container yields an empty list.
    pub fn parse_list(container: Option<&Element>) -> Vec<Service> {
        container
            .map(|c| c.children("Service").map(Service::from_element).collect())
            .unwrap_or_default()
    }

    /// Whether the service accepts files with the given extension. A leading
    /// dot is ignored.
    pub fn accepts_extension(&self, extension: &str) -> bool {
        let extension = extension.trim_start_matches('.');
        self.file_extensions.iter().any(|e| e == extension)
    }
}

/// Collect the `LanguageCode` texts nested anywhere under a container.
fn codes_under(container: Option<&Element>) -> Vec<String> {
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
// Estimate
// ---------------------------------------------------------------------------

/// A rough price estimate for a prospective project.
///
/// Useful for clients that count their own units and want to show an
/// approximate price; the real quote may differ when the server's own unit
/// counting disagrees.
#[derive(Debug, Clone, Default)]
pub struct Estimate {
    /// Service the estimate was computed for.
    pub service_id: i32,
    /// Currency the price is in.
    pub currency: String,
    /// Total price excluding translation credit.
    pub total_cost: Decimal,
    /// When the project would complete if purchased now.
    pub due_date: Option<DateTime<Utc>>,
}

impl Estimate {
    pub fn from_element(element: &Element) -> Estimate {
        Estimate {
            service_id: element
                .child("Service")
                .map(|service| service.child_i32("ServiceID"))
                .unwrap_or(0),
            currency: element.child_text("Currency"),
            total_cost: element.child_decimal("TotalCost"),
            due_date: element.child_datetime("DueDate"),
        }
    }
}

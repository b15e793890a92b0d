//! Quotes: priced, not-yet-committed bundles of translation work, plus the
//! request bodies that create them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use url::Url;

use crate::error::{OnDemandError, Result};
use crate::models::file::File;
use crate::models::language::{SourceLanguage, TargetLanguage};
use crate::models::product::Product;
use crate::models::project::Project;
use crate::models::service::Service;
use crate::xml::{Element, XmlBuilder};

// ---------------------------------------------------------------------------
// TranslationOptions
// ---------------------------------------------------------------------------

/// Options governing a quote, project, or estimate request.
///
/// Unset fields are filled at dispatch time: the currency from the client
/// default, the service ID from the service the request targets, and the
/// target languages from the service's full target list.
#[derive(Debug, Clone, Default)]
pub struct TranslationOptions {
    /// Currency for the transaction; falls back to the client default.
    pub currency: Option<String>,
    /// Notification URL invoked when the work completes.
    pub notify_complete_url: Option<Url>,
    /// Notification URL invoked when the quote is priced.
    pub notify_quote_ready_url: Option<Url>,
    /// Notification URL invoked when the quote is paid.
    pub notify_quote_paid_url: Option<Url>,
    pub(crate) service_id: i32,
    pub source_language: Option<SourceLanguage>,
    /// When `None`, every target language the service offers is requested.
    pub target_languages: Option<Vec<TargetLanguage>>,
}

impl TranslationOptions {
    /// Options for content-based quotes and projects.
    ///
    /// `target_languages` of `None` requests all of the service's targets;
    /// `currency` of `None` uses the client default.
    pub fn new(
        source_language: &str,
        target_languages: Option<&[&str]>,
        currency: Option<&str>,
    ) -> Result<TranslationOptions> {
        let targets = match target_languages {
            Some(codes) => Some(
                codes
                    .iter()
                    .map(|code| TargetLanguage::new(code))
                    .collect::<Result<Vec<_>>>()?,
            ),
            None => None,
        };

        Ok(TranslationOptions {
            currency: currency.map(str::to_string),
            source_language: Some(SourceLanguage::new(source_language)?),
            target_languages: targets,
            ..TranslationOptions::default()
        })
    }

    /// Options for quotes over already-created projects, which carry no
    /// language selection of their own.
    pub fn for_projects(currency: Option<&str>) -> TranslationOptions {
        TranslationOptions {
            currency: currency.map(str::to_string),
            ..TranslationOptions::default()
        }
    }

    /// Fill defaults from the client and validate against the service's
    /// language lists. Runs before any network call.
    pub(crate) fn initialize(
        &mut self,
        default_currency: Option<&str>,
        service: &Service,
    ) -> Result<()> {
        self.initialize_currency(default_currency);
        self.service_id = service.service_id;

        if self.target_languages.is_none() {
            self.target_languages = Some(
                service
                    .target_languages
                    .iter()
                    .map(|code| TargetLanguage::lenient(code))
                    .collect(),
            );
        }

        let source_code = self
            .source_language
            .as_ref()
            .and_then(|language| language.code())
            .unwrap_or("");
        if !service.source_languages.iter().any(|code| code == source_code) {
            return Err(OnDemandError::InvalidArgument(format!(
                "source language {source_code:?} is not in the service's source language list"
            )));
        }

        let targets = self.target_languages.as_ref().expect("set above");
        if targets.is_empty() {
            return Err(OnDemandError::InvalidArgument(
                "must include at least one target language".to_string(),
            ));
        }
        for target in targets {
            let code = target.code().unwrap_or("");
            if !service.target_languages.iter().any(|c| c == code) {
                return Err(OnDemandError::InvalidArgument(format!(
                    "target language {code:?} is not in the service's target language list"
                )));
            }
        }

        Ok(())
    }

    /// The project-quote variant of initialization: only the currency
    /// default applies.
    pub(crate) fn initialize_currency(&mut self, default_currency: Option<&str>) {
        if self.currency.is_none() {
            self.currency = default_currency.map(str::to_string);
        }
    }

    /// Element order: Currency, the three notify URLs (each optional),
    /// ServiceID (when set), SourceLanguage (when set), the TargetLanguages
    /// container (present whenever a target list exists, even empty).
    pub fn to_xml(&self) -> String {
        let mut xml = XmlBuilder::new();
        xml.open("TranslationOptions");

        xml.element("Currency", self.currency.as_deref().unwrap_or(""));
        xml.element_opt(
            "NotifyCompleteURL",
            self.notify_complete_url.as_ref().map(Url::as_str),
        );
        xml.element_opt(
            "NotifyQuoteReadyURL",
            self.notify_quote_ready_url.as_ref().map(Url::as_str),
        );
        xml.element_opt(
            "NotifyQuotePaidURL",
            self.notify_quote_paid_url.as_ref().map(Url::as_str),
        );

        if self.service_id != 0 {
            xml.element("ServiceID", &self.service_id.to_string());
        }

        if let Some(source) = &self.source_language {
            xml.raw(&source.to_xml());
        }

        if let Some(targets) = &self.target_languages {
            xml.open("TargetLanguages");
            for target in targets {
                xml.raw(&target.to_xml());
            }
            xml.close("TargetLanguages");
        }

        xml.close("TranslationOptions");
        xml.finish()
    }
}

// ---------------------------------------------------------------------------
// GenerateQuote / AddProject (request bodies)
// ---------------------------------------------------------------------------

/// Body of a generate-quote request. Exactly one of the content collections
/// is populated per request shape (products, files, or project references).
///
/// Element order: TranslationOptions, Products|Files, ReferenceFiles,
/// Projects.
#[derive(Debug)]
pub(crate) struct GenerateQuote<'a> {
    pub options: &'a TranslationOptions,
    pub products: &'a [Product],
    pub files: &'a [File],
    pub reference_files: &'a [File],
    pub projects: &'a [Project],
}

impl GenerateQuote<'_> {
    pub(crate) fn to_xml(&self) -> String {
        let mut xml = XmlBuilder::new();
        xml.open("GenerateQuote");
        xml.raw(&self.options.to_xml());
        write_content(&mut xml, self.products, self.files, self.reference_files);

        if !self.projects.is_empty() {
            xml.open("Projects");
            for project in self.projects {
                xml.raw(&project.to_xml_simple());
            }
            xml.close("Projects");
        }

        xml.close("GenerateQuote");
        xml.finish()
    }
}

/// Body of an add-project request.
///
/// Element order: ProjectName, TranslationOptions, Products|Files,
/// ReferenceFiles.
#[derive(Debug)]
pub(crate) struct AddProject<'a> {
    pub project_name: &'a str,
    pub options: &'a TranslationOptions,
    pub products: &'a [Product],
    pub files: &'a [File],
    pub reference_files: &'a [File],
}

impl AddProject<'_> {
    pub(crate) fn to_xml(&self) -> String {
        let mut xml = XmlBuilder::new();
        xml.open("AddProject");
        xml.element("ProjectName", self.project_name);
        xml.raw(&self.options.to_xml());
        write_content(&mut xml, self.products, self.files, self.reference_files);
        xml.close("AddProject");
        xml.finish()
    }
}

fn write_content(xml: &mut XmlBuilder, products: &[Product], files: &[File], references: &[File]) {
    if !products.is_empty() {
        xml.open("Products");
        for product in products {
            xml.raw(&product.to_xml());
        }
        xml.close("Products");
    }

    if !files.is_empty() {
        xml.open("Files");
        for file in files {
            xml.raw(&file.to_xml());
        }
        xml.close("Files");
    }

    if !references.is_empty() {
        xml.open("ReferenceFiles");
        for reference in references {
            xml.raw(&reference.to_xml_named(true, false));
        }
        xml.close("ReferenceFiles");
    }
}

// ---------------------------------------------------------------------------
// Payment
// ---------------------------------------------------------------------------

/// How an authorized quote was paid.
#[derive(Debug, Clone)]
pub struct Payment {
    /// Funding instrument, e.g. `PayPal`, `Prepaid`, `Translation Credit`.
    pub payment_type: String,
    /// Description of the funding source.
    pub description: String,
    pub amount: Decimal,
    /// Three-letter currency code of the transaction.
    pub currency: String,
}

impl Payment {
    pub fn from_element(element: &Element) -> Payment {
        Payment {
            payment_type: element.child_text("PaymentType"),
            description: element.child_text("PaymentDescription"),
            amount: element.child_decimal("PaymentAmount"),
            currency: element.child_text("PaymentCurrency"),
        }
    }

    pub fn parse_list(container: Option<&Element>) -> Vec<Payment> {
        container
            .map(|c| c.children("Payment").map(Payment::from_element).collect())
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Quote
// ---------------------------------------------------------------------------

/// A priced, not-yet-committed bundle of translation work.
///
/// The status is an open string set (`New`, `Calculating`, `Pending`,
/// `Authorized`, ...); only `Pending` quotes can be authorized. Numeric
/// fields default to zero while the server is still calculating the price.
#[derive(Debug, Clone, Default)]
pub struct Quote {
    pub quote_id: i32,
    pub creation_date: Option<DateTime<Utc>>,
    pub status: String,
    pub authorize_url: String,
    pub reject_url: String,
    pub payment_url: String,
    pub total_translations: i32,
    pub translation_credit: i32,
    pub total_cost: Decimal,
    pub prepaid_credit: Decimal,
    pub amount_due: Decimal,
    pub currency: String,
    pub projects: Vec<Project>,
    pub payments: Vec<Payment>,
}

impl Quote {
    pub fn from_element(element: &Element) -> Quote {
        let mut quote = Quote::default();
        quote.update_from_element(element);
        quote
    }

    /// Re-populate from a `<Quote>` element; used both at construction and
    /// by the polling update call.
    pub fn update_from_element(&mut self, element: &Element) {
        self.quote_id = element.child_i32("QuoteID");
        self.creation_date = element.child_datetime("CreationDate");
        self.status = element.child_text("Status");
        self.authorize_url = element.child_text("AuthorizeURL");
        self.reject_url = element.child_text("RejectURL");
        self.payment_url = element.child_text("PaymentURL");
        self.total_translations = element.child_i32("TotalTranslations");
        self.translation_credit = element.child_i32("TranslationCredit");
        self.total_cost = element.child_decimal("TotalCost");
        self.prepaid_credit = element.child_decimal("PrepaidCredit");
        self.amount_due = element.child_decimal("AmountDue");
        self.currency = element.child_text("Currency");
        self.projects = Project::parse_list(element.child("Projects"));
        self.payments = Payment::parse_list(element.child("Payments"));
    }

    /// Map each `<Quote>` child of a container into an instance. A missing
    /// container yields an empty list.
    pub fn parse_list(container: Option<&Element>) -> Vec<Quote> {
        container
            .map(|c| c.children("Quote").map(Quote::from_element).collect())
            .unwrap_or_default()
    }

    /// Wire form sent when authorizing: the quote reference alone.
    pub fn to_xml(&self) -> String {
        let mut xml = XmlBuilder::new();
        xml.open("Quote");
        xml.element("QuoteID", &self.quote_id.to_string());
        xml.close("Quote");
        xml.finish()
    }
}

// ---------------------------------------------------------------------------
// QuoteAuthorization
// ---------------------------------------------------------------------------

/// Result of authorizing a quote.
///
/// When payment is still required the server responds 402 and supplies the
/// payment URL the user must visit.
#[derive(Debug, Clone, Default)]
pub struct QuoteAuthorization {
    pub status: String,
    pub quote_url: String,
    pub payment_url: String,
    pub projects: Vec<Project>,
}

impl QuoteAuthorization {
    pub fn from_element(element: &Element) -> QuoteAuthorization {
        QuoteAuthorization {
            status: element.child_text("Status"),
            quote_url: element.child_text("QuoteURL"),
            payment_url: element.child_text("PaymentURL"),
            projects: Project::parse_list(element.child("Projects")),
        }
    }
}

// ---------------------------------------------------------------------------
// RejectQuoteStatus
// ---------------------------------------------------------------------------

/// Outcome of rejecting a quote.
///
/// The server reports this as a numeric `status` text child of the
/// `<RejectQuote>` body, separately from the HTTP status of the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectQuoteStatus {
    /// The quote was rejected and deleted.
    Success,
    BadRequest,
    /// Authentication failed or the customer is not an enterprise member.
    Unauthorized,
    /// The quote cannot be rejected, typically because its projects have
    /// already started.
    Conflict,
    /// A successful HTTP response carried an unrecognized body status.
    Unknown,
}

impl RejectQuoteStatus {
    pub fn from_body_status(status: &str) -> RejectQuoteStatus {
        match status {
            "200" => RejectQuoteStatus::Success,
            "400" => RejectQuoteStatus::BadRequest,
            "401" => RejectQuoteStatus::Unauthorized,
            "409" => RejectQuoteStatus::Conflict,
            _ => RejectQuoteStatus::Unknown,
        }
    }
}

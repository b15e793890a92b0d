//! Quote operations: generation in its several input shapes, authorization,
//! rejection, listing, and polling.

use reqwest::StatusCode;
use url::Url;

use crate::error::{OnDemandError, Result};
use crate::http::expect_root;
use crate::models::quote::GenerateQuote;
use crate::models::{
    File, Product, Project, Quote, QuoteAuthorization, RejectQuoteStatus, Service,
    TranslationOptions,
};

/// Quote operations bound to a client.
pub struct QuoteApi<'a> {
    client: &'a crate::OnDemandClient,
}

impl<'a> QuoteApi<'a> {
    pub(crate) fn new(client: &'a crate::OnDemandClient) -> Self {
        QuoteApi { client }
    }

    // -- Generation --------------------------------------------------------

    /// Generate a quote from products. The service must accept products.
    ///
    /// Reference files, when given, are attached for translator context and
    /// are not translated.
    pub fn generate_from_products(
        &self,
        service: &Service,
        products: &[Product],
        mut options: TranslationOptions,
        reference_files: &[File],
    ) -> Result<Quote> {
        if !service.accepts_products {
            return Err(OnDemandError::InvalidArgument(
                "this service does not accept products; generate the quote from files".to_string(),
            ));
        }
        if products.is_empty() {
            return Err(OnDemandError::InvalidArgument(
                "must supply at least one product to quote".to_string(),
            ));
        }

        options.initialize(self.client.default_currency.as_deref(), service)?;

        self.post_generate(&GenerateQuote {
            options: &options,
            products,
            files: &[],
            reference_files,
            projects: &[],
        })
    }

    /// Generate a quote from files already uploaded through the file API.
    /// The service must accept files.
    pub fn generate_from_files(
        &self,
        service: &Service,
        files: &[File],
        mut options: TranslationOptions,
        reference_files: &[File],
    ) -> Result<Quote> {
        if !service.accepts_files {
            return Err(OnDemandError::InvalidArgument(
                "this service does not accept files; generate the quote from products".to_string(),
            ));
        }
        if files.is_empty() {
            return Err(OnDemandError::InvalidArgument(
                "must supply at least one file to quote".to_string(),
            ));
        }

        options.initialize(self.client.default_currency.as_deref(), service)?;

        self.post_generate(&GenerateQuote {
            options: &options,
            products: &[],
            files,
            reference_files,
            projects: &[],
        })
    }

    /// Upload in-memory documents, then generate a quote from them.
    ///
    /// Each document is `(file name, contents)`; names must carry an
    /// extension the service accepts. Uploads happen one at a time and are
    /// not rolled back if a later step fails -- files uploaded before the
    /// failure remain on the server.
    pub fn generate_from_uploads(
        &self,
        service: &Service,
        documents: &[(&str, &[u8])],
        mut options: TranslationOptions,
        reference_documents: &[(&str, &[u8])],
    ) -> Result<Quote> {
        if !service.accepts_files {
            return Err(OnDemandError::InvalidArgument(
                "this service does not accept files; generate the quote from products".to_string(),
            ));
        }
        if documents.is_empty() {
            return Err(OnDemandError::InvalidArgument(
                "must supply at least one document to quote".to_string(),
            ));
        }

        options.initialize(self.client.default_currency.as_deref(), service)?;

        for (name, _) in documents.iter().chain(reference_documents) {
            if !service.accepts_extension(extension_of(name)) {
                return Err(OnDemandError::InvalidArgument(format!(
                    "service does not accept files with the extension of {name:?}"
                )));
            }
        }

        let language = options
            .source_language
            .as_ref()
            .and_then(|l| l.code())
            .map(str::to_string);

        let files = self.upload_all(language.as_deref(), documents)?;
        let reference_files = self.upload_all(language.as_deref(), reference_documents)?;

        self.post_generate(&GenerateQuote {
            options: &options,
            products: &[],
            files: &files,
            reference_files: &reference_files,
            projects: &[],
        })
    }

    /// Register externally hosted files by URL, then generate a quote from
    /// them. A good alternative to uploading when the files are large.
    pub fn generate_from_urls(
        &self,
        service: &Service,
        files: &[(&str, &Url)],
        mut options: TranslationOptions,
        reference_files: &[File],
    ) -> Result<Quote> {
        if !service.accepts_files {
            return Err(OnDemandError::InvalidArgument(
                "this service does not accept files; generate the quote from products".to_string(),
            ));
        }
        if files.is_empty() {
            return Err(OnDemandError::InvalidArgument(
                "must supply the file names and URLs".to_string(),
            ));
        }

        options.initialize(self.client.default_currency.as_deref(), service)?;

        for (name, _) in files {
            if !service.accepts_extension(extension_of(name)) {
                return Err(OnDemandError::InvalidArgument(format!(
                    "service does not accept files with the extension of {name:?}"
                )));
            }
        }

        let language = options
            .source_language
            .as_ref()
            .and_then(|l| l.code())
            .map(str::to_string);

        let mut added = Vec::with_capacity(files.len());
        for (name, url) in files {
            added.push(
                self.client
                    .files()
                    .add_by_reference(language.as_deref(), name, url)?,
            );
        }

        self.post_generate(&GenerateQuote {
            options: &options,
            products: &[],
            files: &added,
            reference_files,
            projects: &[],
        })
    }

    /// Generate a quote over projects already created through the project
    /// API. Only the currency default applies to the options.
    pub fn generate_from_projects(
        &self,
        projects: &[Project],
        mut options: TranslationOptions,
    ) -> Result<Quote> {
        if projects.is_empty() {
            return Err(OnDemandError::InvalidArgument(
                "must supply at least one project to quote".to_string(),
            ));
        }

        options.initialize_currency(self.client.default_currency.as_deref());

        self.post_generate(&GenerateQuote {
            options: &options,
            products: &[],
            files: &[],
            reference_files: &[],
            projects,
        })
    }

    // -- Lifecycle ---------------------------------------------------------

    /// Authorize a quote. Only quotes with status `Pending` can be
    /// authorized; the check happens locally before any network call.
    ///
    /// A 402 response still carries a `QuoteAuthorization` -- its payment
    /// URL leads to the payment page.
    pub fn authorize(&self, quote: &Quote) -> Result<QuoteAuthorization> {
        if quote.status != "Pending" {
            return Err(OnDemandError::InvalidArgument(
                "only quotes with a status of Pending can be authorized".to_string(),
            ));
        }

        let path = format!("api/quote/{}/authorize", quote.quote_id);
        let (_, root) = self.client.transport.post_element(
            &path,
            Some(quote.to_xml()),
            &[StatusCode::ACCEPTED, StatusCode::PAYMENT_REQUIRED],
        )?;

        Ok(QuoteAuthorization::from_element(&expect_root(
            root,
            "QuoteAuthorization",
        )?))
    }

    /// Reject (and thereby delete) a quote.
    ///
    /// The outcome arrives as a numeric status inside the response body,
    /// distinct from the HTTP status.
    pub fn reject(&self, quote_id: i32) -> Result<RejectQuoteStatus> {
        let path = format!("api/quote/{quote_id}/reject");
        let (_, root) =
            self.client
                .transport
                .post_element(&path, None, &[StatusCode::OK])?;

        let root = expect_root(root, "RejectQuote")?;
        Ok(RejectQuoteStatus::from_body_status(
            &root.child_text("status"),
        ))
    }

    /// All quotes owned by the authenticated user.
    pub fn list(&self) -> Result<Vec<Quote>> {
        let root = self.client.transport.get_element("api/quote")?;
        Ok(Quote::parse_list(Some(&expect_root(root, "Quotes")?)))
    }

    /// Fetch one quote by ID.
    pub fn get(&self, quote_id: i32) -> Result<Quote> {
        let path = format!("api/quote/{quote_id}");
        let root = self.client.transport.get_element(&path)?;
        Ok(Quote::from_element(&expect_root(root, "Quote")?))
    }

    /// Re-fetch a quote and update it in place. Useful for polling while
    /// the server calculates the price.
    pub fn update(&self, quote: &mut Quote) -> Result<()> {
        let path = format!("api/quote/{}", quote.quote_id);
        let root = self.client.transport.get_element(&path)?;
        quote.update_from_element(&expect_root(root, "Quote")?);
        Ok(())
    }

    // -- Helpers -----------------------------------------------------------

    fn post_generate(&self, request: &GenerateQuote<'_>) -> Result<Quote> {
        let (_, root) = self.client.transport.post_element(
            "api/quote/generate",
            Some(request.to_xml()),
            &[StatusCode::CREATED],
        )?;

        Ok(Quote::from_element(&expect_root(root, "Quote")?))
    }

    fn upload_all(&self, language: Option<&str>, documents: &[(&str, &[u8])]) -> Result<Vec<File>> {
        let mut files = Vec::with_capacity(documents.len());
        for (name, data) in documents {
            files.push(self.client.files().add(language, name, data.to_vec())?);
        }
        Ok(files)
    }
}

/// The extension of a file name, without the dot; "" when there is none.
pub(crate) fn extension_of(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((_, extension)) => extension,
        None => "",
    }
}

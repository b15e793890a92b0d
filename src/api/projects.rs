//! Project operations: creation in its input shapes, listing, and polling.
//!
//! Adding a project is normally paired with a project-based quote to make a
//! purchase.

use reqwest::StatusCode;

use crate::api::quotes::extension_of;
use crate::error::{OnDemandError, Result};
use crate::http::expect_root;
use crate::models::quote::AddProject;
use crate::models::{File, Product, Project, Service, TranslationOptions};

/// Project operations bound to a client.
pub struct ProjectApi<'a> {
    client: &'a crate::OnDemandClient,
}

impl<'a> ProjectApi<'a> {
    pub(crate) fn new(client: &'a crate::OnDemandClient) -> Self {
        ProjectApi { client }
    }

    // -- Creation ----------------------------------------------------------

    /// Add a project over files already uploaded through the file API.
    /// The service must accept files.
    pub fn add_from_files(
        &self,
        project_name: &str,
        service: &Service,
        files: &[File],
        mut options: TranslationOptions,
        reference_files: &[File],
    ) -> Result<Project> {
        require_name(project_name)?;
        if !service.accepts_files {
            return Err(OnDemandError::InvalidArgument(
                "this service does not accept files; add the project from products".to_string(),
            ));
        }
        if files.is_empty() {
            return Err(OnDemandError::InvalidArgument(
                "must supply at least one file for the project".to_string(),
            ));
        }

        options.initialize(self.client.default_currency.as_deref(), service)?;

        self.post_add(&AddProject {
            project_name,
            options: &options,
            products: &[],
            files,
            reference_files,
        })
    }

    /// Add a project over products. The service must accept products.
    pub fn add_from_products(
        &self,
        project_name: &str,
        service: &Service,
        products: &[Product],
        mut options: TranslationOptions,
        reference_files: &[File],
    ) -> Result<Project> {
        require_name(project_name)?;
        if !service.accepts_products {
            return Err(OnDemandError::InvalidArgument(
                "this service does not accept products; add the project from files".to_string(),
            ));
        }
        if products.is_empty() {
            return Err(OnDemandError::InvalidArgument(
                "must supply at least one product for the project".to_string(),
            ));
        }

        options.initialize(self.client.default_currency.as_deref(), service)?;

        self.post_add(&AddProject {
            project_name,
            options: &options,
            products,
            files: &[],
            reference_files: &[],
        })
    }

    /// Upload in-memory documents, then add a project over them.
    ///
    /// Sequential single-shot uploads with no rollback: documents uploaded
    /// before a failure remain on the server.
    pub fn add_from_uploads(
        &self,
        project_name: &str,
        service: &Service,
        documents: &[(&str, &[u8])],
        mut options: TranslationOptions,
        reference_documents: &[(&str, &[u8])],
    ) -> Result<Project> {
        require_name(project_name)?;
        if !service.accepts_files {
            return Err(OnDemandError::InvalidArgument(
                "this service does not accept files; add the project from products".to_string(),
            ));
        }
        if documents.is_empty() {
            return Err(OnDemandError::InvalidArgument(
                "must supply at least one document for the project".to_string(),
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

        let mut files = Vec::with_capacity(documents.len());
        for (name, data) in documents {
            files.push(
                self.client
                    .files()
                    .add(language.as_deref(), name, data.to_vec())?,
            );
        }

        let mut reference_files = Vec::with_capacity(reference_documents.len());
        for (name, data) in reference_documents {
            reference_files.push(
                self.client
                    .files()
                    .add(language.as_deref(), name, data.to_vec())?,
            );
        }

        self.post_add(&AddProject {
            project_name,
            options: &options,
            products: &[],
            files: &files,
            reference_files: &reference_files,
        })
    }

    // -- Retrieval ---------------------------------------------------------

    /// All projects owned by the authenticated user.
    pub fn list(&self) -> Result<Vec<Project>> {
        let root = self.client.transport.get_element("api/projects")?;
        Ok(Project::parse_list(Some(&expect_root(root, "Projects")?)))
    }

    /// Fetch one project by ID.
    pub fn get(&self, project_id: i32) -> Result<Project> {
        let path = format!("api/projects/{project_id}");
        let root = self.client.transport.get_element(&path)?;
        Ok(Project::from_element(&expect_root(root, "Project")?))
    }

    /// Re-fetch a project and update it in place. Useful for polling
    /// completion.
    pub fn update(&self, project: &mut Project) -> Result<()> {
        let path = format!("api/projects/{}", project.project_id);
        let root = self.client.transport.get_element(&path)?;
        project.update_from_element(&expect_root(root, "Project")?);
        Ok(())
    }

    // -- Helpers -----------------------------------------------------------

    fn post_add(&self, request: &AddProject<'_>) -> Result<Project> {
        let (_, root) = self.client.transport.post_element(
            "api/projects/add",
            Some(request.to_xml()),
            &[StatusCode::CREATED],
        )?;

        Ok(Project::from_element(&expect_root(root, "Project")?))
    }
}

fn require_name(project_name: &str) -> Result<()> {
    if project_name.is_empty() {
        return Err(OnDemandError::InvalidArgument(
            "project_name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

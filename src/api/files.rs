//! File operations: uploads, listing, polling, content retrieval, and
//! translation acceptance.
//!
//! Uploaded files that are not used in a quote within an hour are deleted
//! server-side; files can only ever be associated with one project. To
//! translate the same file into further languages, upload it again.

use reqwest::StatusCode;
use url::Url;

use crate::config::{content_type_for, DETECT_LANGUAGE};
use crate::error::{OnDemandError, Result};
use crate::http::{escape_segment, expect_root};
use crate::models::{File, FileRejection};

/// File operations bound to a client.
pub struct FileApi<'a> {
    client: &'a crate::OnDemandClient,
}

impl<'a> FileApi<'a> {
    pub(crate) fn new(client: &'a crate::OnDemandClient) -> Self {
        FileApi { client }
    }

    /// Upload a file's bytes.
    ///
    /// With no `language_code` the server detects the source language. The
    /// transmitted Content-Type follows the file extension.
    pub fn add(&self, language_code: Option<&str>, file_name: &str, data: Vec<u8>) -> Result<File> {
        require_nonempty(file_name, "file_name")?;

        let language = language_code.unwrap_or(DETECT_LANGUAGE);
        let path = format!("api/files/add/{language}/{}", escape_segment(file_name));

        let root = self
            .client
            .transport
            .post_upload(&path, content_type_for(file_name), data)?;

        Ok(File::from_element(&expect_root(root, "File")?))
    }

    /// Register an externally hosted file by URL.
    ///
    /// The URL must be publicly accessible (http, https, ftp, or ftps, with
    /// any credentials embedded in the URL).
    pub fn add_by_reference(
        &self,
        language_code: Option<&str>,
        file_name: &str,
        file_url: &Url,
    ) -> Result<File> {
        require_nonempty(file_name, "file_name")?;

        let language = language_code.unwrap_or(DETECT_LANGUAGE);
        let path = format!(
            "api/files/add_by_reference/{language}/{}",
            escape_segment(file_name)
        );

        let (_, root) = self.client.transport.post_element(
            &path,
            Some(File::xml_for_url(file_url)),
            &[StatusCode::CREATED],
        )?;

        Ok(File::from_element(&expect_root(root, "File")?))
    }

    /// All files submitted by the authenticated user.
    pub fn list(&self) -> Result<Vec<File>> {
        let root = self.client.transport.get_element("api/files")?;
        Ok(File::parse_list(Some(&expect_root(root, "Files")?)))
    }

    /// Details of one file asset.
    pub fn details(&self, asset_id: &str) -> Result<File> {
        require_nonempty(asset_id, "asset_id")?;

        let path = format!("api/files/{asset_id}/details");
        let root = self.client.transport.get_element(&path)?;
        Ok(File::from_element(&expect_root(root, "File")?))
    }

    /// Re-fetch a file's details and update it in place. Useful for polling
    /// the analysis status.
    pub fn update(&self, file: &mut File) -> Result<()> {
        let path = format!("api/files/{}/details", file.asset_id);
        let root = self.client.transport.get_element(&path)?;
        file.update_from_element(&expect_root(root, "File")?);
        Ok(())
    }

    /// The source content of a file.
    pub fn content(&self, asset_id: &str) -> Result<Vec<u8>> {
        require_nonempty(asset_id, "asset_id")?;

        self.client
            .transport
            .get_bytes(&format!("api/files/{asset_id}"))
    }

    /// The translated content of a file for one target language.
    pub fn translation(&self, asset_id: &str, language_code: &str) -> Result<Vec<u8>> {
        require_nonempty(asset_id, "asset_id")?;
        require_nonempty(language_code, "language_code")?;

        self.client
            .transport
            .get_bytes(&format!("api/files/{asset_id}/{language_code}"))
    }

    /// Accept the translation of a file for one target language.
    pub fn accept_translation(&self, asset_id: &str, language_code: &str) -> Result<()> {
        require_nonempty(asset_id, "asset_id")?;
        require_nonempty(language_code, "language_code")?;

        let path = format!("api/files/{asset_id}/{language_code}/accept");
        self.client
            .transport
            .post_element(&path, None, &[StatusCode::OK])?;
        Ok(())
    }

    /// Reject the translation of a file for one target language, sending
    /// the translators the reason. Returns the refreshed file.
    pub fn reject_translation(
        &self,
        asset_id: &str,
        language_code: &str,
        rejection: &FileRejection,
    ) -> Result<File> {
        require_nonempty(asset_id, "asset_id")?;
        require_nonempty(language_code, "language_code")?;

        let path = format!("api/files/{asset_id}/{language_code}/reject");
        let (_, root) = self.client.transport.post_element(
            &path,
            Some(rejection.to_xml()),
            &[StatusCode::OK, StatusCode::CREATED],
        )?;

        Ok(File::from_element(&expect_root(root, "File")?))
    }
}

fn require_nonempty(value: &str, name: &str) -> Result<()> {
    if value.is_empty() {
        return Err(OnDemandError::InvalidArgument(format!(
            "{name} cannot be empty"
        )));
    }
    Ok(())
}

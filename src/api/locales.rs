//! Locale discovery.

use crate::error::Result;
use crate::http::expect_root;
use crate::models::Locale;

/// Locale operations bound to a client.
pub struct LocaleApi<'a> {
    client: &'a crate::OnDemandClient,
}

impl<'a> LocaleApi<'a> {
    pub(crate) fn new(client: &'a crate::OnDemandClient) -> Self {
        LocaleApi { client }
    }

    /// All locales the service supports.
    pub fn list(&self) -> Result<Vec<Locale>> {
        let root = self.client.transport.get_element("api/locales")?;
        Ok(Locale::parse_list(Some(&expect_root(root, "Locales")?)))
    }
}

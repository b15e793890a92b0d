//! Service discovery and price estimates.

use crate::error::{OnDemandError, Result};
use crate::http::expect_root;
use crate::models::{Estimate, Service, TranslationOptions};

/// Service operations bound to a client.
pub struct ServiceApi<'a> {
    client: &'a crate::OnDemandClient,
}

impl<'a> ServiceApi<'a> {
    pub(crate) fn new(client: &'a crate::OnDemandClient) -> Self {
        ServiceApi { client }
    }

    /// All translation services available through the API.
    pub fn list(&self) -> Result<Vec<Service>> {
        let root = self.client.transport.get_element("api/services")?;
        Ok(Service::parse_list(Some(&expect_root(root, "Services")?)))
    }

    /// Detailed information about one service.
    pub fn get(&self, service_id: i32) -> Result<Service> {
        let path = format!("api/services/{service_id}");
        let root = self.client.transport.get_element(&path)?;
        Ok(Service::from_element(&expect_root(root, "Service")?))
    }

    /// A rough price estimate for `unit_count` units of work.
    ///
    /// For clients that count words themselves and want to show an
    /// approximate price before generating a real quote. The actual quote
    /// may differ when the server's unit counting disagrees.
    pub fn estimate(
        &self,
        service: &Service,
        unit_count: i32,
        mut options: TranslationOptions,
    ) -> Result<Estimate> {
        options.initialize(self.client.default_currency.as_deref(), service)?;

        let source = options
            .source_language
            .as_ref()
            .and_then(|l| l.code())
            .unwrap_or("");

        let targets = options
            .target_languages
            .as_ref()
            .map(|targets| {
                targets
                    .iter()
                    .filter_map(|t| t.code())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .ok_or_else(|| {
                OnDemandError::InvalidArgument(
                    "must include at least one target language".to_string(),
                )
            })?;

        let path = format!(
            "api/estimate?service_id={}&unit_count={}&currency={}&source_lang={}&target_lang={}",
            service.service_id,
            unit_count,
            options.currency.as_deref().unwrap_or(""),
            source,
            targets,
        );

        let root = self.client.transport.get_element(&path)?;
        Ok(Estimate::from_element(&expect_root(root, "Estimate")?))
    }
}

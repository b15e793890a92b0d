//! Product operations: listing, retrieval, and translations.

use crate::error::{OnDemandError, Result};
use crate::http::expect_root;
use crate::models::{Product, ProductTranslation};

/// Product operations bound to a client.
pub struct ProductApi<'a> {
    client: &'a crate::OnDemandClient,
}

impl<'a> ProductApi<'a> {
    pub(crate) fn new(client: &'a crate::OnDemandClient) -> Self {
        ProductApi { client }
    }

    /// All products submitted from the user account.
    pub fn list(&self) -> Result<Vec<Product>> {
        let root = self.client.transport.get_element("api/products")?;
        Ok(Product::parse_list(Some(&expect_root(root, "Products")?)))
    }

    /// Fetch one product by ID.
    pub fn get(&self, product_id: i32) -> Result<Product> {
        let path = format!("api/products/{product_id}");
        let root = self.client.transport.get_element(&path)?;
        Ok(Product::from_element(&expect_root(root, "Product")?))
    }

    /// The translation of a product into one target language.
    pub fn translation(&self, asset_id: i32, language_code: &str) -> Result<ProductTranslation> {
        if language_code.is_empty() {
            return Err(OnDemandError::InvalidArgument(
                "language_code cannot be empty".to_string(),
            ));
        }

        let path = format!("api/products/{asset_id}/{language_code}");
        let root = self.client.transport.get_element(&path)?;
        Ok(ProductTranslation::from_element(&expect_root(
            root,
            "Translation",
        )?))
    }
}

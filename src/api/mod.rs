//! Per-domain API interfaces.
//!
//! Each module provides a lightweight struct borrowing the
//! [`OnDemandClient`](crate::OnDemandClient) and exposing one method per API
//! operation. Methods validate their arguments locally before any network
//! call, issue exactly one blocking request (or a documented fixed sequence
//! for the compound upload-then-submit operations), and map the response
//! into domain entities.

pub mod accounts;
pub mod files;
pub mod locales;
pub mod products;
pub mod projects;
pub mod quotes;
pub mod services;

pub use accounts::AccountApi;
pub use files::FileApi;
pub use locales::LocaleApi;
pub use products::ProductApi;
pub use projects::ProjectApi;
pub use quotes::QuoteApi;
pub use services::ServiceApi;

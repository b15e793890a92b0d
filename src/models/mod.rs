pub mod account;
pub mod file;
pub mod language;
pub mod locale;
pub mod product;
pub mod project;
pub mod quote;
pub mod service;

pub use account::*;
pub use file::*;
pub use language::*;
pub use locale::*;
pub use product::*;
pub use project::*;
pub use quote::*;
pub use service::*;

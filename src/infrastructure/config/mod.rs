//! Infrastructure configuration modules.

pub mod http;
pub mod logging;
pub mod retail;
pub mod settings;

pub use http::HttpConfig;
pub use logging::LoggingConfig;
pub use retail::{CatalogConfig, ComparisonConfig, RetailerConfig, SearchConfig, StorageConfig};
pub use settings::Config;

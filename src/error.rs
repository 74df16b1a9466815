use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Key-value storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage contents are not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Errors raised while fetching retailer catalogs or the product feed.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog endpoint reported failure")]
    Unsuccessful,

    #[error("catalog response has no list for retailer '{key}'")]
    MissingRetailer { key: String },

    #[error("failed to decode catalog response: {0}")]
    Decode(String),
}

/// Comparison engine errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("a price comparison is already running")]
    InProgress,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Comparison(#[from] ComparisonError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialoguer_errors_surface_as_io() {
        let err: Error = dialoguer::Error::IO(std::io::Error::other("tty gone")).into();

        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("tty gone"));
    }

    #[test]
    fn busy_comparison_converts_into_crate_error() {
        let err: Error = ComparisonError::InProgress.into();
        assert_eq!(err.to_string(), "a price comparison is already running");
    }
}

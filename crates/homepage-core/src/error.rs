//! Error types for the family homepage

use thiserror::Error;

/// Errors raised while loading or validating the site configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for [`crate::SiteConfig`]
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A gallery item names a category no tab can select
    #[error("Gallery item '{title}' uses unknown category: {category}")]
    UnknownCategory { title: String, category: String },

    /// The category tab strip is empty
    #[error("Config defines no category tabs")]
    NoTabs,
}

/// Errors raised by the contact form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// At least one of the four required fields is empty
    #[error("⚠️ Please fill in all fields before submitting.")]
    IncompleteForm,
}

/// Main error type for homepage operations
#[derive(Error, Debug)]
pub enum HomepageError {
    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using HomepageError
pub type HomepageResult<T> = Result<T, HomepageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_form_display() {
        let err = ContactError::IncompleteForm;
        assert_eq!(
            format!("{}", err),
            "⚠️ Please fill in all fields before submitting."
        );
    }

    #[test]
    fn test_unknown_category_display() {
        let err = ConfigError::UnknownCategory {
            title: "Beach".to_string(),
            category: "holiday".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Gallery item 'Beach' uses unknown category: holiday"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HomepageError = ConfigError::from(io_err).into();
        assert!(matches!(err, HomepageError::Config(ConfigError::Io(_))));
    }
}

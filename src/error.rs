use thiserror::Error;

use crate::category::Category;

pub type Result<T> = std::result::Result<T, ExtractorError>;

#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("invalid pattern for {category}: {source}")]
    InvalidPattern {
        category: Category,
        #[source]
        source: regex::Error,
    },

    #[error("invalid script sanitizer pattern: {0}")]
    InvalidSanitizer(#[source] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("API base URL is empty")]
    MissingBaseUrl,

    #[error("API base URL must start with http:// or https://, got '{value}'")]
    InvalidBaseUrl { value: String },
}

/// Browser storage failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage operation failed: {key} - {source}")]
    OperationFailed {
        key: String,
        #[source]
        source: gloo_storage::errors::StorageError,
    },
}

impl StorageError {
    pub fn for_key(key: &str, source: gloo_storage::errors::StorageError) -> Self {
        StorageError::OperationFailed {
            key: key.to_string(),
            source,
        }
    }
}

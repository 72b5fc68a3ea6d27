use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaperError {
    #[error("Instance '{0}' has no service label")]
    MissingLabel(String),

    #[error("Instance '{instance}' has an invalid creation timestamp: {value}")]
    InvalidTimestamp { instance: String, value: String },

    #[error("Error during {operation}: [Code: {code}]: {message}")]
    Operation {
        operation: String,
        code: String,
        message: String,
    },

    #[error("{operation} did not complete within {timeout:?}")]
    Timeout { operation: String, timeout: Duration },

    #[error("Compute Engine request failed: {0}")]
    Provider(#[from] google_cloud_gax::error::Error),

    #[error("Failed to build Compute Engine client: {0}")]
    ClientBuilder(#[from] google_cloud_gax::client_builder::Error),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ReaperError>;

// Long-running provider operations
pub mod wait;

use crate::Result;
use async_trait::async_trait;
use std::time::Duration;

pub use wait::wait_for_operation;

/// Label used in log lines when the caller gives none.
pub const DEFAULT_OPERATION_LABEL: &str = "operation";

/// How long a wait may block before it gives up.
pub const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(300);

/// A non-fatal notice attached to a finished operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationWarning {
    pub code: String,
    pub message: String,
}

/// Final state of a provider operation.
///
/// `R` is whatever the provider hands back on completion; it is passed
/// through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationStatus<R> {
    pub error_code: Option<String>,
    pub error_message: Option<String>,
    pub warnings: Vec<OperationWarning>,
    pub result: R,
}

impl<R> OperationStatus<R> {
    pub fn succeeded(result: R) -> Self {
        Self {
            error_code: None,
            error_message: None,
            warnings: Vec::new(),
            result,
        }
    }

    pub fn failed(result: R, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: Some(code.into()),
            error_message: Some(message.into()),
            warnings: Vec::new(),
            result,
        }
    }

    pub fn with_warning(mut self, code: impl Into<String>, message: impl Into<String>) -> Self {
        self.warnings.push(OperationWarning {
            code: code.into(),
            message: message.into(),
        });
        self
    }

    pub fn is_error(&self) -> bool {
        self.error_code.is_some()
    }
}

/// Handle to an operation running on the provider side.
///
/// `result` resolves once the provider reports the operation as done. It does
/// not apply any deadline itself; see [`wait_for_operation`].
#[async_trait(?Send)]
pub trait OperationHandle {
    type Output;

    async fn result(&mut self) -> Result<OperationStatus<Self::Output>>;
}

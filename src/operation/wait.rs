use super::{OperationHandle, OperationStatus};
use crate::{ReaperError, Result};
use std::time::Duration;

/// Wait for `operation` to finish and turn its final state into a result.
///
/// Warnings are logged one per line. An operation that finishes with an error
/// code fails with [`ReaperError::Operation`]; one that is still pending after
/// `timeout` fails with [`ReaperError::Timeout`].
pub async fn wait_for_operation<H>(
    operation: &mut H,
    label: &str,
    timeout: Duration,
) -> Result<OperationStatus<H::Output>>
where
    H: OperationHandle + ?Sized,
{
    tracing::debug!("Waiting up to {:?} for {}", timeout, label);

    let status = match tokio::time::timeout(timeout, operation.result()).await {
        Ok(status) => status?,
        Err(_) => {
            tracing::error!("{} did not complete within {:?}", label, timeout);
            return Err(ReaperError::Timeout {
                operation: label.to_string(),
                timeout,
            });
        }
    };

    for warning in &status.warnings {
        tracing::warn!(
            "Warning during {}: {}: {}",
            label,
            warning.code,
            warning.message
        );
    }

    if let Some(code) = &status.error_code {
        let message = status.error_message.clone().unwrap_or_default();
        tracing::error!("Error during {}: [Code: {}]: {}", label, code, message);
        return Err(ReaperError::Operation {
            operation: label.to_string(),
            code: code.clone(),
            message,
        });
    }

    Ok(status)
}

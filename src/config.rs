use crate::{ReaperError, Result};
use std::time::Duration;

/// Everything one reaping pass needs to know about its target.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaperConfig {
    pub project: String,
    pub zone: String,
    pub service_label: String,
    pub operation_timeout: Duration,
}

fn default_operation_timeout() -> Duration {
    crate::operation::DEFAULT_OPERATION_TIMEOUT
}

impl ReaperConfig {
    pub fn new(
        project: impl Into<String>,
        zone: impl Into<String>,
        service_label: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            zone: zone.into(),
            service_label: service_label.into(),
            operation_timeout: default_operation_timeout(),
        }
    }

    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// Reject blank targets before any request reaches the provider.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("project", &self.project),
            ("zone", &self.zone),
            ("service label", &self.service_label),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ReaperError::InvalidConfig(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }
        Ok(())
    }
}

use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceStatus {
    Provisioning,
    Staging,
    Running,
    Stopping,
    Stopped,
    Suspending,
    Suspended,
    Repairing,
    Terminated,
    Deprovisioning,
    Pending,
    Unknown(String),
}

impl InstanceStatus {
    /// Parse the upper-case state name Compute Engine reports.
    pub fn from_api_name(name: &str) -> Self {
        match name {
            "PROVISIONING" => InstanceStatus::Provisioning,
            "STAGING" => InstanceStatus::Staging,
            "RUNNING" => InstanceStatus::Running,
            "STOPPING" => InstanceStatus::Stopping,
            "STOPPED" => InstanceStatus::Stopped,
            "SUSPENDING" => InstanceStatus::Suspending,
            "SUSPENDED" => InstanceStatus::Suspended,
            "REPAIRING" => InstanceStatus::Repairing,
            "TERMINATED" => InstanceStatus::Terminated,
            "DEPROVISIONING" => InstanceStatus::Deprovisioning,
            "PENDING" => InstanceStatus::Pending,
            other => InstanceStatus::Unknown(other.to_string()),
        }
    }
}

impl std::fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceStatus::Provisioning => write!(f, "PROVISIONING"),
            InstanceStatus::Staging => write!(f, "STAGING"),
            InstanceStatus::Running => write!(f, "RUNNING"),
            InstanceStatus::Stopping => write!(f, "STOPPING"),
            InstanceStatus::Stopped => write!(f, "STOPPED"),
            InstanceStatus::Suspending => write!(f, "SUSPENDING"),
            InstanceStatus::Suspended => write!(f, "SUSPENDED"),
            InstanceStatus::Repairing => write!(f, "REPAIRING"),
            InstanceStatus::Terminated => write!(f, "TERMINATED"),
            InstanceStatus::Deprovisioning => write!(f, "DEPROVISIONING"),
            InstanceStatus::Pending => write!(f, "PENDING"),
            InstanceStatus::Unknown(name) => write!(f, "{}", name),
        }
    }
}

/// A VM as reported by the provider's listing call.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceDescriptor {
    pub name: String,
    pub zone: String,
    pub status: InstanceStatus,
    pub labels: HashMap<String, String>,
    pub creation_timestamp: String,
}

impl InstanceDescriptor {
    pub fn new(name: impl Into<String>, status: InstanceStatus, creation_timestamp: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            zone: String::new(),
            status,
            labels: HashMap::new(),
            creation_timestamp: creation_timestamp.into(),
        }
    }

    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = zone.into();
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn is_running(&self) -> bool {
        matches!(self.status, InstanceStatus::Running)
    }

    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.creation_timestamp).ok()
    }
}

/// Best match found so far during a selection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    /// Zone the instance reported; empty if the provider left it out.
    pub zone: String,
    pub created_at: Option<DateTime<FixedOffset>>,
}

impl Candidate {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_found(&self) -> bool {
        self.created_at.is_some()
    }
}

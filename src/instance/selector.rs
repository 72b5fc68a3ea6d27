use super::{Candidate, InstanceDescriptor};
use crate::{ReaperError, Result};

/// Label key that records which service owns an instance.
pub const SERVICE_LABEL_KEY: &str = "service";

/// Guarded label lookup; instances without the key are not an error for the caller.
fn service_label(instance: &InstanceDescriptor) -> Result<&str> {
    instance
        .labels
        .get(SERVICE_LABEL_KEY)
        .map(String::as_str)
        .ok_or_else(|| ReaperError::MissingLabel(instance.name.clone()))
}

fn matches(instance: &InstanceDescriptor, label: &str) -> bool {
    match service_label(instance) {
        Ok(service) => service == label && instance.is_running(),
        Err(e) => {
            tracing::debug!("Skipping VM: {}", e);
            false
        }
    }
}

/// Find the running instance labelled `service=<label>` with the earliest
/// creation timestamp.
///
/// Returns [`Candidate::none`] when nothing matches. On equal timestamps the
/// instance seen first wins.
pub fn select_oldest_running<'a, I>(instances: I, label: &str) -> Candidate
where
    I: IntoIterator<Item = &'a InstanceDescriptor>,
{
    let mut oldest = Candidate::none();

    for instance in instances {
        tracing::info!("Looking at VM: {} {}", instance.name, instance.status);

        if !matches(instance, label) {
            continue;
        }

        let Some(created_at) = instance.created_at() else {
            let e = ReaperError::InvalidTimestamp {
                instance: instance.name.clone(),
                value: instance.creation_timestamp.clone(),
            };
            tracing::warn!("Skipping VM: {}", e);
            continue;
        };

        let replace = match oldest.created_at {
            None => true,
            Some(current) => created_at < current,
        };
        if replace {
            oldest = Candidate {
                name: instance.name.clone(),
                zone: instance.zone.clone(),
                created_at: Some(created_at),
            };
        }
    }

    match oldest.created_at {
        Some(created_at) => tracing::info!(
            "Oldest VM for {} service is {} created at {}",
            label,
            oldest.name,
            created_at
        ),
        None => tracing::info!("No running VM found for {} service", label),
    }

    oldest
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod selector_tests;

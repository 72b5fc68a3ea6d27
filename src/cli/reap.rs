use crate::{
    compute::InstanceProvider,
    instance::select_oldest_running,
    operation::wait_for_operation,
    ReaperConfig,
};
use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};

/// Log label for the delete operation.
pub const DELETE_OPERATION_LABEL: &str = "Delete instance";

/// What a single pass did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReapOutcome {
    /// No running instance carries the service label.
    NothingToDo,
    Deleted {
        name: String,
        zone: String,
        created_at: DateTime<FixedOffset>,
    },
}

pub async fn execute<P>(config: &ReaperConfig, provider: &P) -> Result<ReapOutcome>
where
    P: InstanceProvider + ?Sized,
{
    config.validate()?;

    let instances = provider
        .list_instances(&config.project, &config.zone)
        .await
        .with_context(|| format!("Failed to list instances in {}/{}", config.project, config.zone))?;

    let oldest = select_oldest_running(&instances, &config.service_label);
    let Some(created_at) = oldest.created_at else {
        tracing::info!("There is no running VM for the {} service", config.service_label);
        return Ok(ReapOutcome::NothingToDo);
    };

    let zone = if oldest.zone.is_empty() {
        config.zone.clone()
    } else {
        oldest.zone.clone()
    };

    tracing::info!("Attempting to terminate oldest VM {}", oldest.name);

    let mut operation = provider
        .delete_instance(&config.project, &zone, &oldest.name)
        .await
        .with_context(|| format!("Failed to request deletion of {}", oldest.name))?;

    wait_for_operation(&mut operation, DELETE_OPERATION_LABEL, config.operation_timeout).await?;

    tracing::info!(
        "Deleting oldest VM {} in zone {} started at {} success",
        oldest.name,
        zone,
        created_at
    );

    Ok(ReapOutcome::Deleted {
        name: oldest.name,
        zone,
        created_at,
    })
}

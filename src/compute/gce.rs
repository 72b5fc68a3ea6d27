use super::InstanceProvider;
use crate::{
    instance::{InstanceDescriptor, InstanceStatus},
    operation::{OperationHandle, OperationStatus, OperationWarning},
    ReaperError, Result,
};
use async_trait::async_trait;
use google_cloud_compute_v1::client::{Instances, ZoneOperations};
use google_cloud_compute_v1::model;
use google_cloud_gax::paginator::ItemPaginator as _;

/// Compute Engine backed [`InstanceProvider`].
///
/// Credentials come from Application Default Credentials, as resolved by the
/// client builders.
pub struct ComputeProvider {
    instances: Instances,
    operations: ZoneOperations,
}

impl ComputeProvider {
    pub async fn new() -> Result<Self> {
        let instances = Instances::builder().build().await?;
        let operations = ZoneOperations::builder().build().await?;

        Ok(Self {
            instances,
            operations,
        })
    }
}

#[async_trait(?Send)]
impl InstanceProvider for ComputeProvider {
    type Operation = ZoneOperation;

    async fn list_instances(&self, project: &str, zone: &str) -> Result<Vec<InstanceDescriptor>> {
        tracing::debug!("Listing instances in {}/{}", project, zone);

        let mut items = self
            .instances
            .list()
            .set_project(project)
            .set_zone(zone)
            .by_item();

        let mut found = Vec::new();
        while let Some(instance) = items.next().await.transpose()? {
            found.push(to_descriptor(instance));
        }

        tracing::debug!("Found {} instances", found.len());
        Ok(found)
    }

    async fn delete_instance(
        &self,
        project: &str,
        zone: &str,
        name: &str,
    ) -> Result<ZoneOperation> {
        tracing::debug!("Sending delete for {} in {}/{}", name, project, zone);

        let operation = self
            .instances
            .delete()
            .set_project(project)
            .set_zone(zone)
            .set_instance(name)
            .send()
            .await?;

        Ok(ZoneOperation {
            client: self.operations.clone(),
            project: project.to_string(),
            zone: zone.to_string(),
            operation,
        })
    }
}

/// A zonal Compute Engine operation, polled through `zoneOperations.wait`.
pub struct ZoneOperation {
    client: ZoneOperations,
    project: String,
    zone: String,
    operation: model::Operation,
}

#[async_trait(?Send)]
impl OperationHandle for ZoneOperation {
    type Output = model::Operation;

    async fn result(&mut self) -> Result<OperationStatus<model::Operation>> {
        while !is_done(&self.operation) {
            let name = operation_name(&self.operation)?;

            tracing::debug!("Polling operation {}", name);
            self.operation = self
                .client
                .wait()
                .set_project(&self.project)
                .set_zone(&self.zone)
                .set_operation(name)
                .send()
                .await?;
        }

        Ok(to_status(self.operation.clone()))
    }
}

fn is_done(operation: &model::Operation) -> bool {
    operation.status == Some(model::operation::Status::Done)
}

/// Pending operations can only be polled by name.
fn operation_name(operation: &model::Operation) -> Result<String> {
    operation.name.clone().ok_or_else(|| {
        ReaperError::InvalidOperation(format!("operation has no name: {:?}", operation))
    })
}

fn to_status(operation: model::Operation) -> OperationStatus<model::Operation> {
    let first_error = operation
        .error
        .as_ref()
        .and_then(|error| error.errors.first());

    let failed = operation.error.is_some()
        || operation.http_error_status_code.is_some()
        || operation.http_error_message.is_some();

    let (error_code, error_message) = if failed {
        let code = first_error
            .and_then(|e| e.code.clone())
            .or_else(|| operation.http_error_status_code.map(|c| c.to_string()))
            .unwrap_or_else(|| "UNKNOWN".to_string());
        let message = first_error
            .and_then(|e| e.message.clone())
            .or_else(|| operation.http_error_message.clone())
            .unwrap_or_default();
        (Some(code), Some(message))
    } else {
        (None, None)
    };

    let warnings = operation
        .warnings
        .iter()
        .map(|warning| OperationWarning {
            code: warning
                .code
                .as_ref()
                .and_then(|code| code.name())
                .unwrap_or_default()
                .to_string(),
            message: warning.message.clone().unwrap_or_default(),
        })
        .collect();

    OperationStatus {
        error_code,
        error_message,
        warnings,
        result: operation,
    }
}

fn to_instance_status(status: Option<&model::instance::Status>) -> InstanceStatus {
    match status {
        Some(model::instance::Status::Running) => InstanceStatus::Running,
        Some(other) => other
            .name()
            .map(InstanceStatus::from_api_name)
            .unwrap_or_else(|| InstanceStatus::Unknown(String::new())),
        None => InstanceStatus::Unknown(String::new()),
    }
}

fn to_descriptor(instance: model::Instance) -> InstanceDescriptor {
    let status = to_instance_status(instance.status.as_ref());
    let zone = instance
        .zone
        .as_deref()
        .map(zone_name)
        .unwrap_or_default()
        .to_string();

    InstanceDescriptor {
        name: instance.name.unwrap_or_default(),
        zone,
        status,
        labels: instance.labels.into_iter().collect(),
        creation_timestamp: instance.creation_timestamp.unwrap_or_default(),
    }
}

/// Instances report their zone as a full resource URL.
fn zone_name(zone: &str) -> &str {
    zone.rsplit('/').next().unwrap_or(zone)
}

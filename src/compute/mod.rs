// Provider access: listing and deleting instances
pub mod gce;

use crate::{instance::InstanceDescriptor, operation::OperationHandle, Result};
use async_trait::async_trait;

pub use gce::{ComputeProvider, ZoneOperation};

/// The two calls a reaping pass makes against the cloud provider.
#[async_trait(?Send)]
pub trait InstanceProvider {
    type Operation: OperationHandle;

    /// List every instance in `project`/`zone`, in whatever order the provider returns them.
    async fn list_instances(&self, project: &str, zone: &str) -> Result<Vec<InstanceDescriptor>>;

    /// Start deleting `name` and return a handle to the provider-side operation.
    async fn delete_instance(&self, project: &str, zone: &str, name: &str)
        -> Result<Self::Operation>;
}

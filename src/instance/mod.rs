// Instance descriptors and oldest-instance selection
pub mod selector;
pub mod state;

pub use selector::{select_oldest_running, SERVICE_LABEL_KEY};
pub use state::{Candidate, InstanceDescriptor, InstanceStatus};

pub mod cli;
pub mod compute;
pub mod config;
pub mod error;
pub mod instance;
pub mod operation;

pub use config::ReaperConfig;
pub use error::{ReaperError, Result};

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod store;
pub mod ui;

pub use domain::{bump, BumpLevel, Version};
pub use error::{Result, VersioningError};
pub use store::{ensure_version_file, read_version, version_file, write_version};

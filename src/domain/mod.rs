//! Domain logic - pure version rules independent of file storage

pub mod version;

pub use version::{bump, BumpLevel, Version};

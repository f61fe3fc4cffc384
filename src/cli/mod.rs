//! Command-line workflows, independent of argument parsing

pub mod orchestration;

pub use orchestration::{run, run_bump_workflow, BumpOutcome, BumpWorkflowArgs};

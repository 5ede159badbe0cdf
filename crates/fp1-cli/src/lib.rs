//! Driver components for the `fp1gen` command.

pub mod commands;
pub mod logging;
pub mod pipeline;
pub mod types;

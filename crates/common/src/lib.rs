//! Shared plumbing for the workspace: logging initialization and the few
//! response types every service exposes.

pub mod types;
pub mod utils;

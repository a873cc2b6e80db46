//! Service registry data model.
//!
//! This crate provides the types shared by the registry compiler:
//! - [`ServiceRecord`]: one (service, provider, priority) registration
//! - [`Registry`]: the process-wide merge accumulator
//! - [`artifact`]: the persisted line format and its parse errors

pub mod artifact;
pub mod record;
pub mod registry;

pub use artifact::{ArtifactError, parse_line, render_artifact};
pub use record::{DeclId, ServiceRecord};
pub use registry::Registry;

//! Multi-pass service registry compiler.
//!
//! The host build tool drives a [`Session`] once per compilation round and
//! finalizes it exactly once when no further rounds will occur. Everything
//! the compiler knows about the program under compilation arrives through
//! the collaborator traits in [`host`] and [`diag`]: a marker lookup, a
//! type-relationship oracle, an artifact store, and a diagnostic sink.
//!
//! Data-level failures (unresolvable markers, assignability violations,
//! malformed persisted state, rejected writes) degrade gracefully through
//! the diagnostic sink; only usage-contract violations surface as
//! [`SessionError`].

pub mod diag;
pub mod emit;
pub mod existing;
pub mod host;
pub mod layout;
pub mod scan;
pub mod session;
pub mod store;
pub mod validate;

pub use diag::{CollectedDiagnostics, Diagnostic, DiagnosticSink, Severity, TracingSink};
pub use host::{ArtifactStore, Marker, MarkerLookup, TypeId, TypeOracle, TypeRef};
pub use layout::Layout;
pub use provreg_registry::{DeclId, Registry, ServiceRecord};
pub use scan::Candidate;
pub use session::{FlushStats, RoundStats, Session, SessionError};
pub use store::FsStore;

#[cfg(test)]
mod tests;

//! Previously persisted registry state.

use provreg_registry::{Registry, ServiceRecord, artifact};
use rustc_hash::FxHashSet;

use crate::diag::{Diagnostic, DiagnosticSink};
use crate::host::ArtifactStore;
use crate::layout::Layout;

/// Memoized reader for persisted registry artifacts.
///
/// Each service's artifact is read at most once per compilation session, the
/// first time the service is seen; later rounds reuse the state already
/// merged into the registry.
#[derive(Debug, Default)]
pub struct ExistingReader {
	seen: FxHashSet<Box<str>>,
}

impl ExistingReader {
	pub fn new() -> Self {
		Self::default()
	}

	/// Merges the persisted records for `service` into `registry`.
	///
	/// An absent artifact is the normal first-run state and merges nothing.
	/// A failed read or a malformed line surfaces a diagnostic and abandons
	/// the rest of that one artifact; records parsed before the failure stay
	/// merged, and other services are unaffected.
	pub fn load(
		&mut self,
		service: &str,
		store: &dyn ArtifactStore,
		layout: &Layout,
		registry: &mut Registry,
		diags: &mut dyn DiagnosticSink,
	) {
		if !self.seen.insert(service.into()) {
			return;
		}
		let path = layout.path_for(service);
		let text = match store.read(&path) {
			Ok(Some(text)) => text,
			Ok(None) => return,
			Err(e) => {
				diags.report(Diagnostic::error(format!(
					"error reading existing registry artifact for {service}: {e}"
				)));
				return;
			}
		};

		let mut merged = 0usize;
		for (idx, raw) in text.lines().enumerate() {
			match artifact::parse_line(idx + 1, raw) {
				Ok(Some((provider, priority))) => {
					registry.add(ServiceRecord::persisted(service, provider, priority));
					merged += 1;
				}
				Ok(None) => {}
				Err(e) => {
					// Remaining lines of this artifact are unavailable.
					diags.report(Diagnostic::error(format!(
						"malformed registry artifact for {service}: {e}"
					)));
					break;
				}
			}
		}
		tracing::debug!(service, merged, "merged persisted registry state");
	}
}

//! Artifact emission.

use provreg_registry::{Registry, artifact};

use crate::diag::{Diagnostic, DiagnosticSink};
use crate::host::ArtifactStore;
use crate::layout::Layout;
use crate::session::FlushStats;

/// Writes one artifact per service, fully replacing prior contents.
///
/// Groups are emitted in ascending priority order; equal priorities keep
/// their merge order. One service's write failure does not prevent the
/// remaining services from being written.
pub(crate) fn flush(
	registry: &Registry,
	layout: &Layout,
	store: &mut dyn ArtifactStore,
	diags: &mut dyn DiagnosticSink,
) -> FlushStats {
	let mut stats = FlushStats::default();
	for service in registry.services() {
		let body = artifact::render_artifact(registry.sorted_group(service));
		let path = layout.path_for(service);
		match store.write(&path, &body) {
			Ok(()) => {
				tracing::debug!(service, path = %path, "registry artifact written");
				stats.written += 1;
			}
			Err(e) => {
				diags.report(Diagnostic::error(format!(
					"error writing registry artifact for {service}: {e}"
				)));
				stats.failed += 1;
			}
		}
	}
	stats
}

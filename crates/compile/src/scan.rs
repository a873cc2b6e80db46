//! Declaration scanning.

use provreg_registry::DeclId;

use crate::diag::{Diagnostic, DiagnosticSink};
use crate::host::{MarkerLookup, TypeId, TypeOracle};

/// A scanned declaration whose marker resolved to a declared service type.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
	pub decl: DeclId,
	pub service: TypeId,
	pub priority: i32,
}

/// Extracts candidates from one round's declarations.
///
/// Declarations without a marker are ignored. A marker whose service
/// reference does not resolve to a declared type yields a diagnostic and no
/// candidate; scanning continues with the remaining declarations. The host
/// hands each declaration to exactly one round, so nothing here is ever
/// scanned twice.
pub fn scan_round(
	decls: &[DeclId],
	markers: &dyn MarkerLookup,
	oracle: &dyn TypeOracle,
	diags: &mut dyn DiagnosticSink,
) -> Vec<Candidate> {
	let mut candidates = Vec::new();
	for &decl in decls {
		let Some(marker) = markers.provider_marker(decl) else {
			continue;
		};
		let Some(service) = oracle.resolve(marker.service) else {
			diags.report(Diagnostic::error_at(
				decl,
				"service type is not a declared type",
			));
			continue;
		};
		candidates.push(Candidate {
			decl,
			service,
			priority: marker.priority,
		});
	}
	candidates
}

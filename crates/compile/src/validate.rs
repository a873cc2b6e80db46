//! Provider/service constraint validation.

use provreg_registry::ServiceRecord;

use crate::diag::{Diagnostic, DiagnosticSink};
use crate::host::TypeOracle;
use crate::scan::Candidate;

/// Checks that a candidate's provider satisfies its declared service type.
///
/// On success the canonical names are resolved to stable string form and a
/// record is built with the declared priority. On failure a diagnostic is
/// attributed to the offending declaration and `None` is returned; the
/// caller moves on to the next candidate.
pub fn validate(
	candidate: Candidate,
	oracle: &dyn TypeOracle,
	diags: &mut dyn DiagnosticSink,
) -> Option<ServiceRecord> {
	let provider = oracle.declared_type(candidate.decl);
	if !oracle.is_assignable(provider, candidate.service) {
		diags.report(Diagnostic::error_at(
			candidate.decl,
			"provider does not satisfy its declared service type",
		));
		return None;
	}
	// TODO: also reject providers the host cannot instantiate, once the
	// oracle exposes visibility and constructibility.
	Some(ServiceRecord::scanned(
		oracle.canonical_name(candidate.service),
		oracle.canonical_name(provider),
		candidate.priority,
		candidate.decl,
	))
}

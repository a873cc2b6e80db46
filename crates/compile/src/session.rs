//! Compilation session driver.

use provreg_registry::{DeclId, Registry, ServiceRecord};
use thiserror::Error;

use crate::diag::DiagnosticSink;
use crate::emit;
use crate::existing::ExistingReader;
use crate::host::{ArtifactStore, MarkerLookup, TypeOracle};
use crate::layout::Layout;
use crate::scan;
use crate::validate;

/// Usage-contract violations.
///
/// Unlike the data-level diagnostics, which degrade gracefully, these
/// indicate a driver bug and are fatal to the session.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
	#[error("record added after finalization began")]
	RecordAfterFinalize,
	#[error("scan round started after finalization began")]
	ScanAfterFinalize,
	#[error("session finalized twice")]
	DoubleFinalize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
	Idle,
	Scanning,
	Finalizing,
	Done,
}

/// Counters for one scan round.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RoundStats {
	/// Marker-carrying declarations whose service reference resolved.
	pub candidates: usize,
	/// Records merged into the registry this round.
	pub registered: usize,
}

/// Counters for the final flush.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FlushStats {
	/// Artifacts written.
	pub written: usize,
	/// Artifacts that failed to write.
	pub failed: usize,
}

/// One multi-pass compilation session.
///
/// The host calls [`Session::scan_round`] once per compilation round and
/// [`Session::finalize`] exactly once, when no further rounds will occur.
/// The session owns all state accumulated across rounds; collaborators are
/// supplied per call, matching the host's callback model.
#[derive(Debug)]
pub struct Session {
	phase: Phase,
	layout: Layout,
	registry: Registry,
	existing: ExistingReader,
}

impl Session {
	/// A session using the default artifact layout.
	pub fn new() -> Self {
		Self::with_layout(Layout::default())
	}

	/// A session with a custom artifact layout.
	pub fn with_layout(layout: Layout) -> Self {
		Self {
			phase: Phase::Idle,
			layout,
			registry: Registry::new(),
			existing: ExistingReader::new(),
		}
	}

	/// Processes one compilation round.
	///
	/// Scans `decls` for provider markers, validates each candidate against
	/// the oracle, merges persisted state for every service seen for the
	/// first time, then records the surviving candidates so they win over
	/// the persisted entries. Data-level failures are reported through
	/// `diags` and never abort the round.
	pub fn scan_round(
		&mut self,
		decls: &[DeclId],
		markers: &dyn MarkerLookup,
		oracle: &dyn TypeOracle,
		store: &dyn ArtifactStore,
		diags: &mut dyn DiagnosticSink,
	) -> Result<RoundStats, SessionError> {
		match self.phase {
			Phase::Idle | Phase::Scanning => self.phase = Phase::Scanning,
			Phase::Finalizing | Phase::Done => return Err(SessionError::ScanAfterFinalize),
		}

		let mut stats = RoundStats::default();
		if decls.is_empty() {
			return Ok(stats);
		}

		let candidates = scan::scan_round(decls, markers, oracle, diags);
		stats.candidates = candidates.len();
		for candidate in candidates {
			let Some(record) = validate::validate(candidate, oracle, diags) else {
				continue;
			};
			// Persisted state merges first so the fresh record wins.
			self.existing.load(
				&record.service,
				store,
				&self.layout,
				&mut self.registry,
				diags,
			);
			self.add_record(record)?;
			stats.registered += 1;
		}

		tracing::debug!(
			candidates = stats.candidates,
			registered = stats.registered,
			"scan round complete"
		);
		Ok(stats)
	}

	/// Merges one record into the registry.
	///
	/// The registry's single de-duplication path applies; see
	/// [`Registry::add`]. Fails once finalization has begun.
	pub fn add_record(&mut self, record: ServiceRecord) -> Result<(), SessionError> {
		match self.phase {
			Phase::Finalizing | Phase::Done => Err(SessionError::RecordAfterFinalize),
			Phase::Idle | Phase::Scanning => {
				self.phase = Phase::Scanning;
				self.registry.add(record);
				Ok(())
			}
		}
	}

	/// Flushes every service's merged record set and ends the session.
	///
	/// Called exactly once, when the host signals that no further rounds
	/// will occur. A failed write skips that one service and continues; the
	/// failure is reported through `diags`.
	pub fn finalize(
		&mut self,
		store: &mut dyn ArtifactStore,
		diags: &mut dyn DiagnosticSink,
	) -> Result<FlushStats, SessionError> {
		match self.phase {
			Phase::Finalizing | Phase::Done => return Err(SessionError::DoubleFinalize),
			Phase::Idle | Phase::Scanning => self.phase = Phase::Finalizing,
		}

		let stats = emit::flush(&self.registry, &self.layout, store, diags);
		self.phase = Phase::Done;

		tracing::debug!(
			written = stats.written,
			failed = stats.failed,
			"registry flushed"
		);
		Ok(stats)
	}

	/// The accumulated registry.
	pub fn registry(&self) -> &Registry {
		&self.registry
	}
}

impl Default for Session {
	fn default() -> Self {
		Self::new()
	}
}

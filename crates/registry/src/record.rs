//! Service provider records.

/// Opaque handle to a host declaration.
///
/// Handles are assigned by the host build tool and are only ever echoed back
/// through diagnostics; the compiler never interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeclId(pub u32);

impl DeclId {
	/// Returns the underlying u32 value.
	#[inline]
	pub fn as_u32(self) -> u32 {
		self.0
	}
}

/// One service registration: `provider` implements `service` at `priority`.
#[derive(Debug, Clone)]
pub struct ServiceRecord {
	/// Canonical identifier of the service type.
	pub service: String,
	/// Canonical identifier of the concrete provider type.
	pub provider: String,
	/// Emission order within the service group. Lower values sort first.
	pub priority: i32,
	/// Declaration that produced this record, for diagnostics. `None` for
	/// records reconstructed from a persisted artifact.
	pub origin: Option<DeclId>,
}

impl ServiceRecord {
	/// A record produced by scanning a declaration in the current run.
	pub fn scanned(
		service: impl Into<String>,
		provider: impl Into<String>,
		priority: i32,
		origin: DeclId,
	) -> Self {
		Self {
			service: service.into(),
			provider: provider.into(),
			priority,
			origin: Some(origin),
		}
	}

	/// A record reconstructed from a persisted artifact.
	pub fn persisted(service: impl Into<String>, provider: impl Into<String>, priority: i32) -> Self {
		Self {
			service: service.into(),
			provider: provider.into(),
			priority,
			origin: None,
		}
	}
}

// `origin` is diagnostic metadata, never part of a record's identity.
impl PartialEq for ServiceRecord {
	fn eq(&self, other: &Self) -> bool {
		self.service == other.service
			&& self.provider == other.provider
			&& self.priority == other.priority
	}
}

impl Eq for ServiceRecord {}

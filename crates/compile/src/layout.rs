//! Artifact location convention.

/// Maps a service identifier to the relative path of its artifact.
///
/// Artifacts live under a single namespace directory, one file per service,
/// named by the service's canonical identifier.
#[derive(Debug, Clone)]
pub struct Layout {
	namespace: String,
}

impl Layout {
	pub const DEFAULT_NAMESPACE: &'static str = "services";

	pub fn new() -> Self {
		Self::with_namespace(Self::DEFAULT_NAMESPACE)
	}

	/// Uses a custom namespace directory.
	pub fn with_namespace(namespace: impl Into<String>) -> Self {
		Self {
			namespace: namespace.into(),
		}
	}

	/// Relative path of the artifact for `service`.
	pub fn path_for(&self, service: &str) -> String {
		format!("{}/{service}", self.namespace)
	}
}

impl Default for Layout {
	fn default() -> Self {
		Self::new()
	}
}

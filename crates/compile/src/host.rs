//! Host collaborator traits.
//!
//! The compiler never inspects host declarations directly; the host build
//! tool supplies these capabilities alongside each round's declarations.

use std::io;

use provreg_registry::DeclId;

/// Opaque handle to a declared type in the host program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(pub u32);

/// Unresolved reference to a type, as written in a provider marker.
///
/// A reference is not guaranteed to name a declared type;
/// [`TypeOracle::resolve`] decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeRef(pub u32);

/// The two fields of a service-provider marker.
#[derive(Debug, Clone, Copy)]
pub struct Marker {
	/// The service type the declaration claims to provide.
	pub service: TypeRef,
	/// Emission priority. Lower values sort first.
	pub priority: i32,
}

impl Marker {
	/// A marker with the default priority of 0.
	pub fn new(service: TypeRef) -> Self {
		Self {
			service,
			priority: 0,
		}
	}

	pub fn with_priority(service: TypeRef, priority: i32) -> Self {
		Self { service, priority }
	}
}

/// The host's declaration-marker facility.
pub trait MarkerLookup {
	/// Returns the service-provider marker on `decl`, if it carries one.
	fn provider_marker(&self, decl: DeclId) -> Option<Marker>;
}

/// Type-relationship oracle backed by the host's type system.
pub trait TypeOracle {
	/// Resolves a marker's service reference to a declared type.
	fn resolve(&self, service: TypeRef) -> Option<TypeId>;

	/// The declared type of a declaration.
	fn declared_type(&self, decl: DeclId) -> TypeId;

	/// True when `provider` satisfies the capability contract of `service`.
	fn is_assignable(&self, provider: TypeId, service: TypeId) -> bool;

	/// Stable canonical identifier for a declared type.
	fn canonical_name(&self, ty: TypeId) -> String;
}

/// Artifact storage keyed by relative path.
pub trait ArtifactStore {
	/// Reads the artifact at `path`. Absence is `Ok(None)`, not an error.
	fn read(&self, path: &str) -> io::Result<Option<String>>;

	/// Replaces the artifact at `path` with `contents` in full.
	fn write(&mut self, path: &str, contents: &str) -> io::Result<()>;
}

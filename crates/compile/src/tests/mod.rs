//! Test harness: an in-memory host program and artifact store.


use std::cell::Cell;
use std::collections::BTreeMap;
use std::io;

use provreg_registry::DeclId;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::host::{ArtifactStore, Marker, MarkerLookup, TypeId, TypeOracle, TypeRef};

/// Scriptable host program for pipeline tests.
#[derive(Default)]
pub(crate) struct FakeHost {
	type_names: Vec<String>,
	refs: FxHashMap<u32, TypeId>,
	next_ref: u32,
	markers: FxHashMap<u32, Marker>,
	decl_types: FxHashMap<u32, TypeId>,
	next_decl: u32,
	assignable: FxHashSet<(TypeId, TypeId)>,
}

impl FakeHost {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	/// Declares a type with the given canonical name.
	pub(crate) fn declare_type(&mut self, name: &str) -> TypeId {
		let id = TypeId(self.type_names.len() as u32);
		self.type_names.push(name.to_string());
		id
	}

	/// A reference that resolves to `ty`.
	pub(crate) fn reference(&mut self, ty: TypeId) -> TypeRef {
		let r = TypeRef(self.next_ref);
		self.next_ref += 1;
		self.refs.insert(r.0, ty);
		r
	}

	/// A reference that does not resolve to any declared type.
	pub(crate) fn dangling_reference(&mut self) -> TypeRef {
		let r = TypeRef(self.next_ref);
		self.next_ref += 1;
		r
	}

	/// Marks `provider` assignable to `service`.
	pub(crate) fn implements(&mut self, provider: TypeId, service: TypeId) {
		self.assignable.insert((provider, service));
	}

	/// A declaration of type `ty` carrying `marker`.
	pub(crate) fn provider_decl(&mut self, ty: TypeId, marker: Marker) -> DeclId {
		let decl = DeclId(self.next_decl);
		self.next_decl += 1;
		self.markers.insert(decl.0, marker);
		self.decl_types.insert(decl.0, ty);
		decl
	}

	/// Declares `provider_name` as a valid provider of `service`.
	pub(crate) fn provider(
		&mut self,
		provider_name: &str,
		service: TypeId,
		priority: i32,
	) -> DeclId {
		let ty = self.declare_type(provider_name);
		self.implements(ty, service);
		let service_ref = self.reference(service);
		self.provider_decl(ty, Marker::with_priority(service_ref, priority))
	}
}

impl MarkerLookup for FakeHost {
	fn provider_marker(&self, decl: DeclId) -> Option<Marker> {
		self.markers.get(&decl.0).copied()
	}
}

impl TypeOracle for FakeHost {
	fn resolve(&self, service: TypeRef) -> Option<TypeId> {
		self.refs.get(&service.0).copied()
	}

	fn declared_type(&self, decl: DeclId) -> TypeId {
		self.decl_types[&decl.0]
	}

	fn is_assignable(&self, provider: TypeId, service: TypeId) -> bool {
		provider == service || self.assignable.contains(&(provider, service))
	}

	fn canonical_name(&self, ty: TypeId) -> String {
		self.type_names[ty.0 as usize].clone()
	}
}

/// In-memory artifact store that counts underlying reads.
#[derive(Default)]
pub(crate) struct MemStore {
	files: BTreeMap<String, String>,
	reads: Cell<usize>,
	rejected: FxHashSet<String>,
}

impl MemStore {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn put(&mut self, path: &str, contents: &str) {
		self.files.insert(path.to_string(), contents.to_string());
	}

	pub(crate) fn get(&self, path: &str) -> Option<&str> {
		self.files.get(path).map(String::as_str)
	}

	/// Makes every write to `path` fail.
	pub(crate) fn reject_writes(&mut self, path: &str) {
		self.rejected.insert(path.to_string());
	}

	/// Number of underlying reads performed, absent artifacts included.
	pub(crate) fn reads(&self) -> usize {
		self.reads.get()
	}
}

impl ArtifactStore for MemStore {
	fn read(&self, path: &str) -> io::Result<Option<String>> {
		self.reads.set(self.reads.get() + 1);
		Ok(self.files.get(path).cloned())
	}

	fn write(&mut self, path: &str, contents: &str) -> io::Result<()> {
		if self.rejected.contains(path) {
			return Err(io::Error::other("storage rejected write"));
		}
		self.files.insert(path.to_string(), contents.to_string());
		Ok(())
	}
}

//! The process-wide merge accumulator.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use crate::record::ServiceRecord;

/// Accumulates records across compilation rounds, one group per service.
///
/// [`Registry::add`] is the single insertion path: freshly scanned and
/// persisted records both pass through it, so the `(service, provider)`
/// uniqueness invariant holds regardless of where a record came from. The
/// registry owns every record handed to it.
#[derive(Debug, Default)]
pub struct Registry {
	groups: FxHashMap<Box<str>, Vec<ServiceRecord>>,
	/// Services in first-seen order, for deterministic flushing.
	service_order: Vec<Box<str>>,
}

impl Registry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Merges a record, discarding any earlier record for the same
	/// `(service, provider)` pair. Newest wins.
	pub fn add(&mut self, record: ServiceRecord) {
		let group = match self.groups.entry(record.service.as_str().into()) {
			Entry::Occupied(entry) => entry.into_mut(),
			Entry::Vacant(entry) => {
				self.service_order.push(entry.key().clone());
				entry.insert(Vec::new())
			}
		};
		group.retain(|r| r.provider != record.provider);
		group.push(record);
	}

	/// Services in the order they were first seen.
	pub fn services(&self) -> impl Iterator<Item = &str> {
		self.service_order.iter().map(|s| s.as_ref())
	}

	/// The record group for `service`, in merge order.
	pub fn group(&self, service: &str) -> &[ServiceRecord] {
		self.groups.get(service).map_or(&[], Vec::as_slice)
	}

	/// The record group for `service`, sorted by ascending priority.
	///
	/// The sort is stable: equal priorities keep their merge order.
	pub fn sorted_group(&self, service: &str) -> Vec<&ServiceRecord> {
		let mut records: Vec<_> = self.group(service).iter().collect();
		records.sort_by_key(|r| r.priority);
		records
	}

	/// Total number of records across all services.
	pub fn len(&self) -> usize {
		self.groups.values().map(Vec::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.groups.is_empty()
	}
}

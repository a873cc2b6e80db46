//! Filesystem-backed artifact store.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::host::ArtifactStore;

/// Stores artifacts as files under a root directory.
///
/// Reads and writes are whole-file operations, so file handles are released
/// before each call returns on every path, including errors.
#[derive(Debug)]
pub struct FsStore {
	root: PathBuf,
}

impl FsStore {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	fn resolve(&self, path: &str) -> PathBuf {
		self.root.join(path)
	}
}

impl ArtifactStore for FsStore {
	fn read(&self, path: &str) -> io::Result<Option<String>> {
		match fs::read_to_string(self.resolve(path)) {
			Ok(text) => Ok(Some(text)),
			Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
			Err(e) => Err(e),
		}
	}

	fn write(&mut self, path: &str, contents: &str) -> io::Result<()> {
		let target = self.resolve(path);
		if let Some(parent) = target.parent() {
			fs::create_dir_all(parent)?;
		}
		fs::write(target, contents)
	}
}

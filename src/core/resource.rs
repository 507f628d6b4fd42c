//! Bundled resource location and reading.
//!
//! Resources are files embedded into the binaries at build time, resolved at
//! runtime by their path relative to the `resources/` directory. The bundled
//! table is generated by the build script; see `build.rs`.

use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::sync::OnceLock;

use crate::error::{Error, Result};

include!(concat!(env!("OUT_DIR"), "/generated_resources.rs"));

/// Immutable index from logical resource path to payload bytes.
#[derive(Debug, Clone)]
pub struct ResourceStore<'a> {
    entries: HashMap<&'a str, &'a [u8]>,
}

impl<'a> ResourceStore<'a> {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [u8])>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Open a readable byte stream over the resource at `path`.
    ///
    /// A single leading `/` is ignored, so absolute-style resource paths
    /// resolve the same entry as relative ones.
    pub fn open(&self, path: &str) -> Result<Cursor<&'a [u8]>> {
        let key = path.strip_prefix('/').unwrap_or(path);
        match self.entries.get(key).copied() {
            Some(payload) => Ok(Cursor::new(payload)),
            None => Err(self.not_found(path)),
        }
    }

    /// Read the resource at `path` fully into memory.
    ///
    /// The stream is opened and dropped inside this call, so it is released
    /// before the caller produces any output.
    pub fn read_all(&self, path: &str) -> Result<Vec<u8>> {
        let mut stream = self.open(path)?;
        let mut buffer = Vec::new();
        stream
            .read_to_end(&mut buffer)
            .map_err(|e| Error::internal_io(e.to_string(), Some(format!("read {}", path))))?;
        Ok(buffer)
    }

    /// Logical paths of every stored resource, sorted.
    pub fn paths(&self) -> Vec<&'a str> {
        let mut paths: Vec<&str> = self.entries.keys().copied().collect();
        paths.sort_unstable();
        paths
    }

    fn not_found(&self, path: &str) -> Error {
        let err = Error::resource_not_found(path);
        if self.entries.is_empty() {
            err.with_hint("No resources are bundled in this binary")
        } else {
            err.with_hint(format!("Bundled resources: {}", self.paths().join(", ")))
        }
    }
}

/// Store over the resources embedded at build time.
pub fn bundled() -> &'static ResourceStore<'static> {
    static BUNDLED: OnceLock<ResourceStore<'static>> = OnceLock::new();

    BUNDLED.get_or_init(|| ResourceStore::new(BUNDLED_RESOURCES.iter().copied()))
}

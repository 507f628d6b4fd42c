//! Resource dumping.
//!
//! Emits a located resource as a `Content-Length` header line followed by
//! the raw payload bytes.

use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::resource::ResourceStore;

/// Write the resource at `path` to `out` as `Content-Length: <N>\n` followed
/// by the `N` payload bytes, verbatim. Returns `N`.
///
/// The resource is read fully into memory (and its stream released) before
/// the first byte of output; nothing is written when location or the read
/// fails. A writer that reports `BrokenPipe` ends the dump early but still
/// counts as success.
pub fn write_resource<W: Write>(store: &ResourceStore, path: &str, out: &mut W) -> Result<usize> {
    let buffer = store.read_all(path)?;

    if let Err(e) = emit(out, &buffer) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(buffer.len()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some(format!("write {}", path)),
        ));
    }

    Ok(buffer.len())
}

fn emit<W: Write>(out: &mut W, buffer: &[u8]) -> io::Result<()> {
    out.write_all(format!("Content-Length: {}\n", buffer.len()).as_bytes())?;
    out.write_all(buffer)
}

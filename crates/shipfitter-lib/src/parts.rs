//! Parts list loading.
//!
//! A parts file is plain text with one part name per line. Content is not
//! validated: bytes are decoded lossily so binary or malformed input still
//! loads, and empty lines are kept as empty part names.

use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// Load an ordered list of part lines from a file path.
///
/// Fails with [`Error::PartsFileNotFound`] when the path does not exist and
/// [`Error::PartsFileUnreadable`] when it exists but cannot be opened. The
/// file handle is scoped to this call and released on every exit path.
pub fn load_parts(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(Error::PartsFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = fs::File::open(path).map_err(|source| Error::PartsFileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let parts = read_parts(file)?;
    tracing::debug!(path = %path.display(), lines = parts.len(), "parts file loaded");
    Ok(parts)
}

/// Read part lines from any reader (e.g. file or in-memory buffer).
///
/// Lines are split on `\n` with a trailing `\r` stripped, and decoded
/// lossily so the loader never fails on non-UTF-8 content.
pub fn read_parts<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut reader = BufReader::new(reader);
    let mut parts = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        parts.push(String::from_utf8_lossy(&buf).into_owned());
    }

    Ok(parts)
}

//! JSON file helpers shared by every tool.
//!
//! A path of `-` reads from stdin or writes to stdout.

use crate::error::{PoiError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Whether `path` is the `-` stdio placeholder.
pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> PoiError + '_ {
    move |source| PoiError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Read and deserialize a JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = if is_stdio(path) {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).map_err(io_err(path))?;
        buf
    } else {
        std::fs::read(path).map_err(io_err(path))?
    };
    debug!(path = %path.display(), bytes = raw.len(), "read input");
    serde_json::from_slice(&raw).map_err(|source| PoiError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize `value` as JSON, UTF-8 text left unescaped.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let encoded = if pretty {
        serde_json::to_vec_pretty(value)
    } else {
        serde_json::to_vec(value)
    }
    .map_err(|source| PoiError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    if is_stdio(path) {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&encoded).map_err(io_err(path))?;
        stdout.write_all(b"\n").map_err(io_err(path))?;
    } else {
        std::fs::write(path, &encoded).map_err(io_err(path))?;
    }
    debug!(path = %path.display(), bytes = encoded.len(), "wrote output");
    Ok(())
}

//! Capture of raw response bodies for offline tests.
//!
//! Enabled per process with `IG_RECORD=1`; files land in `IG_FIXDIR`, or
//! `tests/fixtures` of this crate when that is unset.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::net::Origin;

/// The capture directory, or `None` when recording is off.
pub(crate) fn recording_dir() -> Option<PathBuf> {
    if env::var("IG_RECORD").ok().as_deref() != Some("1") {
        return None;
    }
    Some(env::var_os("IG_FIXDIR").map_or_else(
        || Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"),
        PathBuf::from,
    ))
}

/// Writes `body` to `dir`, creating it if needed, and returns the file path.
pub(crate) fn save(dir: &Path, origin: Origin<'_>, body: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(origin.file_name());
    fs::write(&path, body)?;
    tracing::debug!(path = %path.display(), "IG_RECORD: saved body");
    Ok(path)
}

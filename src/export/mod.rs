//! JSON / CSV export of a merged record.

use std::ffi::OsString;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Local};

use crate::core::record::{is_scalar, scalar_text};
use crate::core::{IgError, ProfileRecord};

/// Prefix of generated file names.
pub const FILE_PREFIX: &str = "instagram";

/// CSV header row.
pub const CSV_HEADER: [&str; 2] = ["field", "value"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Indented JSON of the full record, non-ASCII kept literal.
    #[default]
    Json,
    /// Two-column `field,value` table of the scalar fields only.
    Csv,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = IgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(IgError::InvalidInput(format!(
                "unknown export format '{other}' (expected json or csv)"
            ))),
        }
    }
}

/// `instagram_<username>_<YYYYmmdd_HHMMSS>`; `unknown` stands in for a missing username.
pub fn default_file_stem(record: &ProfileRecord, now: DateTime<Local>) -> String {
    let username: String = record
        .username()
        .filter(|u| !u.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!(
        "{FILE_PREFIX}_{username}_{}",
        now.format("%Y%m%d_%H%M%S")
    )
}

/// Where an export will be written.
///
/// Without `filename` the default stem is used in the current directory. A
/// given name gets the format's extension appended unless it already ends
/// with it.
pub fn target_path(
    record: &ProfileRecord,
    format: ExportFormat,
    filename: Option<&Path>,
    now: DateTime<Local>,
) -> PathBuf {
    let ext = format.extension();
    match filename {
        Some(name)
            if name
                .extension()
                .is_some_and(|e| e.eq_ignore_ascii_case(ext)) =>
        {
            name.to_path_buf()
        }
        Some(name) => {
            let mut s = OsString::from(name.as_os_str());
            s.push(".");
            s.push(ext);
            PathBuf::from(s)
        }
        None => PathBuf::from(format!("{}.{ext}", default_file_stem(record, now))),
    }
}

/// Writes the whole record as indented JSON.
pub fn write_json<W: Write>(record: &ProfileRecord, mut w: W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut w, record)?;
    w.write_all(b"\n")?;
    w.flush()
}

/// Writes a `field,value` table. Objects and arrays are skipped; `null` is an empty cell.
pub fn write_csv<W: Write>(record: &ProfileRecord, w: W) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(CSV_HEADER)?;
    for (key, value) in record.iter().filter(|(_, v)| is_scalar(v)) {
        let text = scalar_text(value).unwrap_or_default();
        wtr.write_record([key.as_str(), text.as_str()])?;
    }
    wtr.flush()
}

/// Writes through a temporary sibling of `path` and renames it into place.
///
/// On any error the temporary file is removed and `path` is left as it was.
fn write_atomically<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(BufWriter<&mut File>) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    write(BufWriter::new(tmp.as_file_mut()))?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Serializes `record` to a file and returns the path written.
///
/// # Errors
///
/// Returns [`IgError::Export`] if the file cannot be created or written.
/// A failed export never leaves a partial file behind.
pub fn export(
    record: &ProfileRecord,
    format: ExportFormat,
    filename: Option<&Path>,
) -> Result<PathBuf, IgError> {
    let path = target_path(record, format, filename, Local::now());
    tracing::debug!(path = %path.display(), %format, "exporting record");

    let written = write_atomically(&path, |w| match format {
        ExportFormat::Json => write_json(record, w),
        ExportFormat::Csv => write_csv(record, w),
    });

    match written {
        Ok(()) => Ok(path),
        Err(source) => Err(IgError::Export { path, source }),
    }
}

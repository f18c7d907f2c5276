//! Report directory persistence: write/read/verify a [`SearchRunReport`].
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   report.json    canonical JSON of the run report
//!   trace.json     canonical JSON of the fringe trace (only if captured)
//!   digests.txt    one `<filename> <sha256:...>` line per file above
//! ```
//!
//! # Fail-closed reads
//!
//! - Missing `report.json` or `digests.txt` → error
//! - A file listed in `digests.txt` that is absent, or a file present but
//!   not listed → error
//! - Content hash mismatch → error
//! - `trace.json` digest differing from the report's `trace_digest` → error

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;

use crate::canon::{canonical_hash, CanonError, ContentHash, HashDomain};
use crate::runner::SearchRunReport;

const REPORT_FILENAME: &str = "report.json";
const TRACE_FILENAME: &str = "trace.json";
const DIGESTS_FILENAME: &str = "digests.txt";

/// Error writing or reading a report directory.
#[derive(Debug)]
pub enum ReportDirError {
    Io { detail: String },
    MissingFile { filename: String },
    /// A file exists that `digests.txt` does not list.
    ExtraFile { filename: String },
    DigestMismatch {
        filename: String,
        stored: String,
        recomputed: String,
    },
    /// `digests.txt` or a JSON file is malformed.
    Parse { detail: String },
    Canon(CanonError),
}

impl std::fmt::Display for ReportDirError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::MissingFile { filename } => write!(f, "missing file: {filename}"),
            Self::ExtraFile { filename } => write!(f, "unlisted extra file: {filename}"),
            Self::DigestMismatch {
                filename,
                stored,
                recomputed,
            } => write!(
                f,
                "digest mismatch for {filename}: stored={stored}, recomputed={recomputed}"
            ),
            Self::Parse { detail } => write!(f, "parse error: {detail}"),
            Self::Canon(e) => write!(f, "canonical JSON error: {e}"),
        }
    }
}

impl std::error::Error for ReportDirError {}

impl From<CanonError> for ReportDirError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

/// A report directory whose digests have been verified.
#[derive(Debug, Clone)]
pub struct VerifiedReportDir {
    pub report: serde_json::Value,
    pub trace: Option<serde_json::Value>,
    pub report_digest: ContentHash,
    pub trace_digest: Option<ContentHash>,
}

fn file_domain(filename: &str) -> HashDomain {
    if filename == TRACE_FILENAME {
        HashDomain::SearchTrace
    } else {
        HashDomain::RunReport
    }
}

/// Write `report` (and its trace, if captured) to `dir`.
///
/// Creates the directory if it does not exist. A `trace.json` left by an
/// earlier write is removed when `report` carries no trace.
///
/// # Errors
///
/// Returns [`ReportDirError`] on I/O failure or canonical JSON error.
pub fn write_report_dir(report: &SearchRunReport, dir: &Path) -> Result<(), ReportDirError> {
    std::fs::create_dir_all(dir).map_err(|e| ReportDirError::Io {
        detail: format!("create_dir_all: {e}"),
    })?;

    let mut files: Vec<(&str, Vec<u8>)> = vec![(REPORT_FILENAME, report.to_canonical_json_bytes()?)];
    if let Some(trace) = &report.trace {
        files.push((TRACE_FILENAME, trace.to_canonical_json_bytes()?));
    }

    let mut digests = String::new();
    for (filename, bytes) in &files {
        write_atomic(&dir.join(filename), bytes)?;
        let hash = canonical_hash(file_domain(filename), bytes);
        let _ = writeln!(digests, "{filename} {hash}");
    }
    if report.trace.is_none() {
        remove_if_present(&dir.join(TRACE_FILENAME))?;
    }
    write_atomic(&dir.join(DIGESTS_FILENAME), digests.as_bytes())?;

    debug!(dir = %dir.display(), files = files.len(), "report directory written");
    Ok(())
}

/// Read `dir` back, verifying every listed digest.
///
/// # Errors
///
/// Returns [`ReportDirError`] on any validation failure.
pub fn read_report_dir(dir: &Path) -> Result<VerifiedReportDir, ReportDirError> {
    let digests_bytes = read_required(dir, DIGESTS_FILENAME)?;
    let listed = parse_digests(&digests_bytes)?;

    if !listed.contains_key(REPORT_FILENAME) {
        return Err(ReportDirError::MissingFile {
            filename: REPORT_FILENAME.into(),
        });
    }

    for filename in list_files(dir)? {
        if filename != DIGESTS_FILENAME && !listed.contains_key(&filename) {
            return Err(ReportDirError::ExtraFile { filename });
        }
    }

    let mut verified = BTreeMap::new();
    for (filename, stored) in &listed {
        let bytes = read_required(dir, filename)?;
        let recomputed = canonical_hash(file_domain(filename), &bytes);
        if &recomputed != stored {
            return Err(ReportDirError::DigestMismatch {
                filename: filename.clone(),
                stored: stored.to_string(),
                recomputed: recomputed.to_string(),
            });
        }
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| ReportDirError::Parse {
                detail: format!("{filename}: {e}"),
            })?;
        verified.insert(filename.as_str(), (value, recomputed));
    }

    let (report, report_digest) =
        verified
            .remove(REPORT_FILENAME)
            .ok_or_else(|| ReportDirError::MissingFile {
                filename: REPORT_FILENAME.into(),
            })?;
    let (trace, trace_digest) = match verified.remove(TRACE_FILENAME) {
        Some((value, hash)) => (Some(value), Some(hash)),
        None => (None, None),
    };

    let declared = report["trace_digest"].as_str();
    let actual = trace_digest.as_ref().map(ContentHash::as_str);
    if declared != actual {
        return Err(ReportDirError::DigestMismatch {
            filename: TRACE_FILENAME.into(),
            stored: declared.unwrap_or("none").into(),
            recomputed: actual.unwrap_or("none").into(),
        });
    }

    Ok(VerifiedReportDir {
        report,
        trace,
        report_digest,
        trace_digest,
    })
}

fn parse_digests(bytes: &[u8]) -> Result<BTreeMap<String, ContentHash>, ReportDirError> {
    let text = std::str::from_utf8(bytes).map_err(|e| ReportDirError::Parse {
        detail: format!("{DIGESTS_FILENAME}: {e}"),
    })?;
    let mut listed = BTreeMap::new();
    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        let (filename, hash) = line.split_once(' ').ok_or_else(|| ReportDirError::Parse {
            detail: format!("{DIGESTS_FILENAME}: malformed line {line:?}"),
        })?;
        if filename != REPORT_FILENAME && filename != TRACE_FILENAME {
            return Err(ReportDirError::Parse {
                detail: format!("{DIGESTS_FILENAME}: unknown file {filename:?}"),
            });
        }
        let hash = ContentHash::parse(hash.trim()).ok_or_else(|| ReportDirError::Parse {
            detail: format!("{DIGESTS_FILENAME}: bad hash for {filename}"),
        })?;
        listed.insert(filename.to_string(), hash);
    }
    Ok(listed)
}

/// Write bytes via temp file + rename.
fn write_atomic(path: &Path, content: &[u8]) -> Result<(), ReportDirError> {
    let dir = path.parent().ok_or_else(|| ReportDirError::Io {
        detail: "no parent directory".into(),
    })?;
    let temp_name = format!(
        ".tmp_{}",
        path.file_name().unwrap_or_default().to_string_lossy()
    );
    let temp_path = dir.join(temp_name);

    std::fs::write(&temp_path, content).map_err(|e| ReportDirError::Io {
        detail: format!("write {}: {e}", temp_path.display()),
    })?;
    std::fs::rename(&temp_path, path).map_err(|e| ReportDirError::Io {
        detail: format!("rename {} → {}: {e}", temp_path.display(), path.display()),
    })
}

fn remove_if_present(path: &Path) -> Result<(), ReportDirError> {
    match std::fs::remove_file(path) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(ReportDirError::Io {
            detail: format!("remove {}: {e}", path.display()),
        }),
        _ => Ok(()),
    }
}

fn read_required(dir: &Path, filename: &str) -> Result<Vec<u8>, ReportDirError> {
    std::fs::read(dir.join(filename)).map_err(|_| ReportDirError::MissingFile {
        filename: filename.to_string(),
    })
}

/// Regular files in `dir`, skipping `write_atomic` leftovers.
fn list_files(dir: &Path) -> Result<BTreeSet<String>, ReportDirError> {
    let io = |e: std::io::Error| ReportDirError::Io {
        detail: format!("read_dir: {e}"),
    };
    let mut files = BTreeSet::new();
    for entry in std::fs::read_dir(dir).map_err(io)? {
        let entry = entry.map_err(io)?;
        if !entry.file_type().map_err(io)?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if !name.starts_with(".tmp_") {
                files.insert(name.to_string());
            }
        }
    }
    Ok(files)
}

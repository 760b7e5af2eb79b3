//! Batch writer behind `aidocs generate`.
//!
//! Writes every [`TemplateEntry`] of a [`Flavor`] below a base directory:
//! ```text
//! Mode::Direct        →  <target>/README.md, <target>/docs/...
//! Mode::Subdirectory  →  <target>/universal-ai-docs/README.md, ...
//! ```
//!
//! Each file is independent. A failure on one entry is recorded in the
//! [`WriteReport`] and the remaining entries are still attempted. Existing files are
//! skipped unless the request asks to [`OverwritePolicy::Overwrite`] them. Files are
//! staged in a temporary file and renamed into place, so an output path either holds
//! the complete template or nothing written by this run.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{AiDocsError, Result};
use crate::templates::{Flavor, TemplateEntry};

/// Staging directory used when the caller does not ask for direct mode.
pub const STAGING_DIR: &str = "universal-ai-docs";

/// Where the documents land relative to the target directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Directly under the target directory.
    Direct,
    /// Under [`STAGING_DIR`] inside the target, to be merged by hand.
    #[default]
    Subdirectory,
}

/// What to do when an output file already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Leave the file alone and report it as skipped.
    #[default]
    Skip,
    /// Replace the file with the template content.
    Overwrite,
}

/// One invocation of the materializer.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub target_directory: PathBuf,
    pub mode: Mode,
    pub flavor: Flavor,
    pub overwrite: OverwritePolicy,
}

impl GenerationRequest {
    pub fn new(target_directory: impl Into<PathBuf>, mode: Mode) -> Self {
        Self {
            target_directory: target_directory.into(),
            mode,
            flavor: Flavor::default(),
            overwrite: OverwritePolicy::default(),
        }
    }

    pub fn with_flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self
    }

    pub fn with_overwrite(mut self, overwrite: OverwritePolicy) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Directory every relative template path is joined onto.
    pub fn base_dir(&self) -> PathBuf {
        base_dir(&self.target_directory, self.mode)
    }
}

/// Resolve the base directory for `target` under `mode`.
pub fn base_dir(target: &Path, mode: Mode) -> PathBuf {
    match mode {
        Mode::Direct => target.to_path_buf(),
        Mode::Subdirectory => target.join(STAGING_DIR),
    }
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub base_dir: PathBuf,
    /// Files created or replaced, in catalog order.
    pub written: Vec<PathBuf>,
    /// Files that already existed and were kept.
    pub skipped: Vec<PathBuf>,
    /// Files that could not be written, with the reason.
    pub failed: Vec<(PathBuf, AiDocsError)>,
}

impl WriteReport {
    /// True when no entry failed. Skips do not count as failures.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len() + self.failed.len()
    }
}

/// Write all documents of the requested flavor.
///
/// Fails with [`AiDocsError::PathNotWritable`] before writing anything when the base
/// directory cannot be created or is not a directory. Per-file problems are collected
/// in the returned report instead.
pub fn generate(request: &GenerationRequest) -> Result<WriteReport> {
    let base = request.base_dir();
    prepare_base_dir(&base)?;

    let mut report = WriteReport {
        base_dir: base.clone(),
        ..WriteReport::default()
    };

    for entry in request.flavor.entries() {
        let path = base.join(entry.relative_path);
        match write_entry(&path, entry, request.overwrite) {
            Ok(()) => {
                tracing::debug!("wrote {}", path.display());
                report.written.push(path);
            }
            Err(AiDocsError::FileAlreadyExists(path)) => {
                tracing::debug!("skipped existing {}", path.display());
                report.skipped.push(path);
            }
            Err(e) => {
                tracing::warn!("failed to write {}: {e}", path.display());
                report.failed.push((path, e));
            }
        }
    }

    tracing::info!(
        "generated {} flavor into {}: {} written, {} skipped, {} failed",
        request.flavor,
        base.display(),
        report.written.len(),
        report.skipped.len(),
        report.failed.len()
    );

    Ok(report)
}

fn prepare_base_dir(base: &Path) -> Result<()> {
    if base.exists() && !base.is_dir() {
        return Err(AiDocsError::PathNotWritable {
            path: base.to_path_buf(),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "exists and is not a directory"),
        });
    }

    fs::create_dir_all(base).map_err(|e| AiDocsError::PathNotWritable {
        path: base.to_path_buf(),
        source: e,
    })
}

/// Write a single entry, creating its parent directories first.
///
/// Content goes to a temporary file next to the destination and is moved into place
/// only once it is complete, so a failed write never leaves a partial file behind.
fn write_entry(path: &Path, entry: &TemplateEntry, overwrite: OverwritePolicy) -> Result<()> {
    let not_writable = |source: io::Error| AiDocsError::PathNotWritable {
        path: path.to_path_buf(),
        source,
    };

    if overwrite == OverwritePolicy::Skip && path.exists() {
        // Only an existing file counts as kept; anything else means nothing usable is there.
        if path.is_dir() {
            return Err(not_writable(io::Error::other("a directory is in the way")));
        }
        return Err(AiDocsError::FileAlreadyExists(path.to_path_buf()));
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| AiDocsError::DirectoryCreationFailed {
        path: parent.to_path_buf(),
        source: e,
    })?;

    let mut staged = tempfile::Builder::new()
        .prefix(STAGED_PREFIX)
        .tempfile_in(parent)
        .map_err(not_writable)?;
    staged
        .write_all(entry.content.as_bytes())
        .map_err(not_writable)?;
    set_mode(staged.as_file(), entry.executable).map_err(not_writable)?;

    let persisted = match overwrite {
        OverwritePolicy::Skip => staged.persist_noclobber(path),
        OverwritePolicy::Overwrite => staged.persist(path),
    };
    match persisted {
        Ok(_) => Ok(()),
        // Lost a race with another writer; the temporary file is dropped with the error.
        Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
            Err(AiDocsError::FileAlreadyExists(path.to_path_buf()))
        }
        Err(e) => Err(not_writable(e.error)),
    }
}

/// Temporary files are hidden and named so they are easy to spot if a process dies.
const STAGED_PREFIX: &str = ".aidocs-";

#[cfg(unix)]
fn set_mode(file: &fs::File, executable: bool) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = if executable { 0o755 } else { 0o644 };
    file.set_permissions(fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_file: &fs::File, _executable: bool) -> io::Result<()> {
    Ok(())
}

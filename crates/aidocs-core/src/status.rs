//! Compare generated documents on disk with the embedded templates.
//!
//! Each entry is hashed with SHA-256 on both sides; equal digests mean the file is
//! exactly what `generate` wrote.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::templates::{Flavor, TemplateEntry};

/// State of one document relative to its template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileState {
    Missing,
    /// Byte-for-byte identical to the template.
    Pristine,
    /// Present but edited (or customized).
    Modified,
}

impl FileState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Pristine => "pristine",
            Self::Modified => "modified",
        }
    }
}

#[derive(Debug, Clone)]
pub struct EntryStatus {
    pub entry: &'static TemplateEntry,
    pub path: PathBuf,
    pub state: FileState,
    /// Hex SHA-256 of the file on disk, when it exists.
    pub digest: Option<String>,
}

/// Hex SHA-256 of `bytes`.
pub fn digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Report the state of every entry of `flavor` under `base_dir`.
pub fn inspect(base_dir: &Path, flavor: Flavor) -> Result<Vec<EntryStatus>> {
    flavor
        .entries()
        .iter()
        .map(|entry| inspect_entry(base_dir, entry))
        .collect()
}

fn inspect_entry(base_dir: &Path, entry: &'static TemplateEntry) -> Result<EntryStatus> {
    let path = base_dir.join(entry.relative_path);
    if !path.is_file() {
        return Ok(EntryStatus {
            entry,
            path,
            state: FileState::Missing,
            digest: None,
        });
    }

    let on_disk = digest(&std::fs::read(&path)?);
    let state = if on_disk == digest(entry.content.as_bytes()) {
        FileState::Pristine
    } else {
        FileState::Modified
    };

    Ok(EntryStatus {
        entry,
        path,
        state,
        digest: Some(on_disk),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materializer::{generate, GenerationRequest, Mode};

    #[test]
    fn test_digest_known_value() {
        assert_eq!(
            digest(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_empty_dir_all_missing() {
        let dir = tempfile::tempdir().unwrap();
        let statuses = inspect(dir.path(), Flavor::Ready).unwrap();
        assert_eq!(statuses.len(), Flavor::Ready.entries().len());
        assert!(statuses.iter().all(|s| s.state == FileState::Missing));
        assert!(statuses.iter().all(|s| s.digest.is_none()));
    }

    #[test]
    fn test_fresh_generation_is_pristine() {
        let dir = tempfile::tempdir().unwrap();
        generate(&GenerationRequest::new(dir.path(), Mode::Direct)).unwrap();

        let statuses = inspect(dir.path(), Flavor::Ready).unwrap();
        assert!(statuses.iter().all(|s| s.state == FileState::Pristine));
    }

    #[test]
    fn test_edit_is_modified() {
        let dir = tempfile::tempdir().unwrap();
        generate(&GenerationRequest::new(dir.path(), Mode::Direct)).unwrap();
        std::fs::write(dir.path().join("README.md"), "# Acme\n").unwrap();

        let statuses = inspect(dir.path(), Flavor::Ready).unwrap();
        let readme = statuses
            .iter()
            .find(|s| s.entry.relative_path == "README.md")
            .unwrap();
        assert_eq!(readme.state, FileState::Modified);
        assert_eq!(readme.digest.as_deref(), Some(digest(b"# Acme\n").as_str()));
    }

    #[test]
    fn test_other_flavor_reports_differences() {
        let dir = tempfile::tempdir().unwrap();
        generate(&GenerationRequest::new(dir.path(), Mode::Direct)).unwrap();

        let statuses = inspect(dir.path(), Flavor::Universal).unwrap();
        let rules = statuses
            .iter()
            .find(|s| s.entry.relative_path == ".cursor/rules/implementation_patterns.mdc")
            .unwrap();
        assert_eq!(rules.state, FileState::Missing);
    }
}

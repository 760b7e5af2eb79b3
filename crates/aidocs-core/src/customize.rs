//! Fill placeholder tokens in documents that were already generated.
//!
//! Only entries marked [`EntryKind::Customizable`](crate::templates::EntryKind) are
//! touched. The file on disk is the input, not the embedded template, so edits the
//! user made before running `customize` are kept.

use std::path::{Path, PathBuf};

use crate::config::ProjectValues;
use crate::error::{AiDocsError, Result};
use crate::templates::renderer::{self, PlaceholderRenderer};
use crate::templates::Flavor;

/// Outcome of a customization run.
#[derive(Debug, Default)]
pub struct CustomizeReport {
    /// Files whose content changed.
    pub customized: Vec<PathBuf>,
    /// Files present but with nothing to replace.
    pub unchanged: Vec<PathBuf>,
    /// Customizable files that do not exist under the base directory.
    pub missing: Vec<PathBuf>,
    /// Catalog tokens still present after substitution, per file.
    pub remaining: Vec<(PathBuf, Vec<&'static str>)>,
}

impl CustomizeReport {
    pub fn has_remaining(&self) -> bool {
        !self.remaining.is_empty()
    }
}

/// Substitute `values` into every customizable document of `flavor` under `base_dir`.
///
/// With `strict`, the first document that would keep a catalog token fails the run
/// with [`AiDocsError::UnresolvedPlaceholders`]; documents are checked before any of
/// them is rewritten, so a strict failure leaves the directory untouched.
pub fn customize(
    base_dir: &Path,
    flavor: Flavor,
    values: &ProjectValues,
    strict: bool,
) -> Result<CustomizeReport> {
    let mut renderer = PlaceholderRenderer::new(values.replacements());
    if strict {
        renderer = renderer.strict();
    }

    let mut report = CustomizeReport::default();
    let mut pending = Vec::new();

    for entry in flavor.entries().iter().filter(|e| e.is_customizable()) {
        let path = base_dir.join(entry.relative_path);
        if !path.is_file() {
            tracing::debug!("customizable file missing: {}", path.display());
            report.missing.push(path);
            continue;
        }

        let original = std::fs::read_to_string(&path).map_err(|e| AiDocsError::ReadFailed {
            path: path.clone(),
            source: e,
        })?;
        let rendered = renderer.render(Path::new(entry.relative_path), &original)?;
        pending.push((path, original, rendered));
    }

    for (path, original, rendered) in pending {
        let left = renderer::unresolved(&rendered);
        if !left.is_empty() {
            report.remaining.push((path.clone(), left));
        }

        if rendered == original {
            report.unchanged.push(path);
            continue;
        }

        std::fs::write(&path, rendered).map_err(|e| AiDocsError::PathNotWritable {
            path: path.clone(),
            source: e,
        })?;
        tracing::debug!("customized {}", path.display());
        report.customized.push(path);
    }

    Ok(report)
}

use std::path::Path;

use anyhow::Result;

use aidocs_core::materializer::{self, Mode};
use aidocs_core::status::{self, FileState};
use aidocs_core::templates::Flavor;

use crate::output;

/// Length of the digest prefix shown next to each file.
const SHORT_DIGEST: usize = 12;

/// Report which documents are missing, pristine or modified under `target`.
pub fn run(target: &Path, mode: Mode, flavor: Flavor) -> Result<()> {
    output::print_header("aidocs status");

    let base_dir = materializer::base_dir(target, mode);
    output::print_key_value("Flavor", flavor.as_str());
    output::print_key_value("Directory", &base_dir.display().to_string());
    println!();

    let statuses = status::inspect(&base_dir, flavor)?;
    for entry in &statuses {
        let digest = entry
            .digest
            .as_deref()
            .map(|d| &d[..SHORT_DIGEST.min(d.len())])
            .unwrap_or("-");
        let line = format!(
            "{:<42} {:<9} {}",
            entry.entry.relative_path,
            entry.state.as_str(),
            digest
        );
        match entry.state {
            FileState::Pristine => output::print_success(&line),
            FileState::Modified => output::print_skip(&line),
            FileState::Missing => output::print_warning(&line),
        }
    }

    let missing = statuses
        .iter()
        .filter(|s| s.state == FileState::Missing)
        .count();
    println!();
    if missing > 0 {
        output::print_warning(&format!(
            "{missing} of {} document(s) missing, run `aidocs generate` to restore them",
            statuses.len()
        ));
    } else {
        output::print_success("All documents present");
    }
    println!();

    Ok(())
}

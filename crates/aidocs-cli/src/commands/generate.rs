use std::path::Path;

use anyhow::Result;

use aidocs_core::materializer::{self, GenerationRequest, Mode, OverwritePolicy};
use aidocs_core::templates::Flavor;

use crate::output;

/// Write the documentation templates into `target`.
///
/// Existing files are kept and reported unless `force` is set. Every file is
/// attempted; the command fails afterwards if any of them could not be written.
pub fn run(target: &Path, mode: Mode, flavor: Flavor, force: bool) -> Result<()> {
    output::print_header("aidocs generate");

    let overwrite = if force {
        OverwritePolicy::Overwrite
    } else {
        OverwritePolicy::Skip
    };
    let request = GenerationRequest::new(target, mode)
        .with_flavor(flavor)
        .with_overwrite(overwrite);

    output::print_key_value("Flavor", flavor.as_str());
    output::print_key_value(
        "Mode",
        match mode {
            Mode::Direct => "direct",
            Mode::Subdirectory => "subdirectory",
        },
    );

    output::print_step(
        1,
        2,
        &format!("Writing documents to {}", request.base_dir().display()),
    );
    let report = materializer::generate(&request)?;

    for path in &report.written {
        output::print_success(&format!(
            "Created: {}",
            output::relative(path, &report.base_dir).display()
        ));
    }
    for path in &report.skipped {
        output::print_skip(&format!(
            "Exists, kept: {}",
            output::relative(path, &report.base_dir).display()
        ));
    }
    for (path, err) in &report.failed {
        output::print_error(&format!(
            "{}: {}",
            output::relative(path, &report.base_dir).display(),
            output::error_chain(err)
        ));
    }

    output::print_step(2, 2, "Summary");
    output::print_key_value("Written", &report.written.len().to_string());
    output::print_key_value("Skipped", &report.skipped.len().to_string());
    output::print_key_value("Failed", &report.failed.len().to_string());

    if !report.skipped.is_empty() {
        output::print_warning(
            "Some files already existed and were left unchanged (use --force to replace them)",
        );
    }

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} file(s) could not be written",
            report.failed.len(),
            report.total()
        );
    }

    println!();
    println!("  Documents:");
    for entry in flavor.entries() {
        println!("    {:<42} {}", entry.relative_path, entry.description);
    }
    println!();
    println!("  Next steps:");
    for step in next_steps(target, &report.base_dir, mode, flavor) {
        println!("    {step}");
    }
    println!();

    Ok(())
}

/// Follow-up commands for the user, spelled out for `target` so they work from any
/// working directory.
fn next_steps(target: &Path, base_dir: &Path, mode: Mode, flavor: Flavor) -> Vec<String> {
    let mut customize = format!("aidocs customize {} --direct", shell_path(target));
    if flavor != Flavor::default() {
        customize.push_str(&format!(" --flavor {flavor}"));
    }

    match mode {
        Mode::Direct => vec![
            "Start using docs/PROJECT_CONTEXT_PRIMING.md with AI agents".to_string(),
            customize,
        ],
        // `<dir>/.` copies dot-directories such as `.cursor/` that a `*` glob would miss.
        Mode::Subdirectory => vec![
            format!(
                "cp -r {} {}",
                shell_path(&base_dir.join(".")),
                shell_path(&target.join("")),
            ),
            format!("rm -rf {}", shell_path(base_dir)),
            customize,
        ],
    }
}

/// Single-quote a path for a POSIX shell when it contains anything unusual.
fn shell_path(path: &Path) -> String {
    let text = path.display().to_string();
    let plain = !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "/._-+:@%".contains(c));
    if plain {
        text
    } else {
        format!("'{}'", text.replace('\'', "'\\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_failed_write_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("docs"), "in the way").unwrap();

        let err = run(dir.path(), Mode::Direct, Flavor::Ready, false).unwrap_err();
        assert!(err.to_string().contains("could not be written"), "{err}");
        assert!(dir.path().join("README.md").exists());
    }

    #[test]
    fn test_all_skipped_rerun_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), Mode::Direct, Flavor::Ready, false).unwrap();
        run(dir.path(), Mode::Direct, Flavor::Ready, false).unwrap();
    }

    #[test]
    fn test_uncreatable_target_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        assert!(run(&file, Mode::Subdirectory, Flavor::Ready, false).is_err());
    }

    #[test]
    fn test_merge_steps_use_target_and_copy_hidden_entries() {
        let target = PathBuf::from("/work/proj");
        let base = materializer::base_dir(&target, Mode::Subdirectory);
        let steps = next_steps(&target, &base, Mode::Subdirectory, Flavor::Universal);

        assert_eq!(
            steps,
            vec![
                "cp -r /work/proj/universal-ai-docs/. /work/proj/".to_string(),
                "rm -rf /work/proj/universal-ai-docs".to_string(),
                "aidocs customize /work/proj --direct --flavor universal".to_string(),
            ]
        );
    }

    #[test]
    fn test_merge_steps_keep_universal_cursor_rules() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path();
        run(target, Mode::Subdirectory, Flavor::Universal, false).unwrap();

        let base = materializer::base_dir(target, Mode::Subdirectory);
        let steps = next_steps(target, &base, Mode::Subdirectory, Flavor::Universal);
        assert!(steps[0].starts_with("cp -r "));
        assert!(steps[0].contains("universal-ai-docs/. "));
        assert!(base
            .join(".")
            .join(".cursor/rules/implementation_patterns.mdc")
            .exists());
    }

    #[test]
    fn test_direct_steps_name_the_target() {
        let target = PathBuf::from("my docs");
        let steps = next_steps(&target, &target, Mode::Direct, Flavor::Ready);
        assert_eq!(steps[1], "aidocs customize 'my docs' --direct");
    }

    #[test]
    fn test_shell_path_quotes_single_quotes() {
        assert_eq!(shell_path(Path::new("it's")), "'it'\\''s'");
        assert_eq!(shell_path(Path::new("./a-b_c")), "./a-b_c");
    }
}

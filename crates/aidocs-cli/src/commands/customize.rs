use std::path::Path;

use anyhow::Result;
use dialoguer::Input;

use aidocs_core::config::{DocsConfig, ProjectValues};
use aidocs_core::customize;
use aidocs_core::materializer::{self, Mode};
use aidocs_core::templates::Flavor;

use crate::output;

pub struct CustomizeOptions {
    /// Ask for values that neither the flags nor the config provide.
    pub interactive: bool,
    pub strict: bool,
    /// Write the final values back to the config file.
    pub save: bool,
}

/// Fill the placeholder tokens of the customizable documents under `target`.
///
/// Values come from the command line first, then the config file, then
/// interactive prompts for whatever is still missing.
pub fn run(
    config_path: &Path,
    config: &DocsConfig,
    target: &Path,
    mode: Mode,
    flavor: Flavor,
    values: ProjectValues,
    options: &CustomizeOptions,
) -> Result<()> {
    output::print_header("aidocs customize");

    let base_dir = materializer::base_dir(target, mode);
    output::print_key_value("Flavor", flavor.as_str());
    output::print_key_value("Directory", &base_dir.display().to_string());

    let total = if options.save { 3 } else { 2 };

    output::print_step(1, total, "Collecting project details");
    let mut values = values.merge(&config.project);
    if options.interactive {
        values = prompt_missing(values)?;
    }

    output::print_step(2, total, "Replacing placeholders");
    let report = customize::customize(&base_dir, flavor, &values, options.strict)?;

    for path in &report.customized {
        output::print_success(&format!(
            "Customized: {}",
            output::relative(path, &base_dir).display()
        ));
    }
    for path in &report.unchanged {
        output::print_skip(&format!(
            "Nothing to replace: {}",
            output::relative(path, &base_dir).display()
        ));
    }
    for path in &report.missing {
        output::print_warning(&format!(
            "Not found: {} (run `aidocs generate` first)",
            output::relative(path, &base_dir).display()
        ));
    }
    for (path, tokens) in &report.remaining {
        output::print_warning(&format!(
            "{} still contains {}",
            output::relative(path, &base_dir).display(),
            tokens.join(", ")
        ));
    }

    if options.save {
        output::print_step(3, total, &format!("Saving answers to {}", config_path.display()));
        let updated = DocsConfig {
            flavor,
            project: values,
        };
        updated.save(config_path)?;
        output::print_success(&format!("Saved {}", config_path.display()));
    }

    println!();
    Ok(())
}

/// Prompt for each value that is still unset. Empty answers leave the token in place.
fn prompt_missing(mut values: ProjectValues) -> Result<ProjectValues> {
    let questions: [(&str, &mut Option<String>); 10] = [
        ("Project Name", &mut values.name),
        ("Brief Description", &mut values.description),
        ("Target Users/Market", &mut values.audience),
        ("Main Business Objective", &mut values.goal),
        ("Frontend Technology (e.g., React, Streamlit)", &mut values.frontend),
        ("Backend Technology (e.g., Python, Node.js)", &mut values.backend),
        ("Database Technology (e.g., PostgreSQL, SQLite)", &mut values.database),
        (
            "Architecture Pattern (e.g., Vertical Slice, Microservices)",
            &mut values.architecture,
        ),
        (
            "Domain Focus (e.g., compliance-focused, performance-critical)",
            &mut values.domain,
        ),
        ("Project Timeline/Deadline", &mut values.timeline),
    ];

    for (prompt, slot) in questions {
        if slot.as_deref().is_some_and(|v| !v.trim().is_empty()) {
            continue;
        }
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        let answer = answer.trim();
        if !answer.is_empty() {
            *slot = Some(answer.to_string());
        }
    }

    Ok(values)
}

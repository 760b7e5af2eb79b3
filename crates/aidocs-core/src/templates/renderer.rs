//! Literal placeholder substitution for customizable documents.
//!
//! Customizable templates carry bracketed tokens such as `[PROJECT_NAME]`. The
//! [`PlaceholderRenderer`] replaces every known token that has a value and leaves the
//! rest untouched, so a partially answered questionnaire still produces a readable
//! document. In **strict mode**, any catalog token left after substitution is an
//! error instead.
//!
//! Only tokens listed in [`PLACEHOLDERS`] are considered. Other bracketed text in the
//! templates (`[Description]`, `[Reason]`, markdown links) is free-form guidance for
//! the reader and is never reported as unresolved.
//!
//! ## Usage
//!
//! ```ignore
//! use aidocs_core::templates::renderer::PlaceholderRenderer;
//!
//! let renderer = PlaceholderRenderer::new(vec![("[PROJECT_NAME]", "Acme".into())]);
//! let output = renderer.render(Path::new("README.md"), "# [PROJECT_NAME]")?;
//! ```

use std::path::Path;

use crate::error::{AiDocsError, Result};

/// The project fact a placeholder token stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderField {
    Name,
    Description,
    Audience,
    Goal,
    /// Frontend, backend and database joined with `", "`.
    Technology,
    Architecture,
    Domain,
    Timeline,
    Date,
}

/// A known token and the field that fills it.
#[derive(Debug, Clone, Copy)]
pub struct Placeholder {
    pub token: &'static str,
    pub field: PlaceholderField,
}

const fn placeholder(token: &'static str, field: PlaceholderField) -> Placeholder {
    Placeholder { token, field }
}

/// Every token the customizer knows how to fill.
///
/// Several tokens map to the same field: the universal context primer and
/// architecture overview spell some of them differently from the README.
pub const PLACEHOLDERS: &[Placeholder] = &[
    placeholder("[PROJECT_NAME]", PlaceholderField::Name),
    placeholder("[project_description]", PlaceholderField::Description),
    placeholder("[target_description]", PlaceholderField::Audience),
    placeholder("[TARGET_AUDIENCE]", PlaceholderField::Audience),
    placeholder("[target_users_or_market]", PlaceholderField::Audience),
    placeholder("[measurable_goal]", PlaceholderField::Goal),
    placeholder("[MAIN_BUSINESS_OBJECTIVE]", PlaceholderField::Goal),
    placeholder("[specific_measurable_business_goal]", PlaceholderField::Goal),
    placeholder("[Technology]", PlaceholderField::Technology),
    placeholder("[architectural_pattern]", PlaceholderField::Architecture),
    placeholder("[domain_focus]", PlaceholderField::Domain),
    placeholder("[project_timeline_or_deadline]", PlaceholderField::Timeline),
    placeholder("[PROJECT_DEADLINE_OR_MILESTONES]", PlaceholderField::Timeline),
    placeholder("[DATE]", PlaceholderField::Date),
];

/// List the catalog tokens still present in `text`, in catalog order.
pub fn unresolved(text: &str) -> Vec<&'static str> {
    PLACEHOLDERS
        .iter()
        .map(|p| p.token)
        .filter(|token| text.contains(token))
        .collect()
}

/// Replaces placeholder tokens with project values.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderRenderer {
    replacements: Vec<(&'static str, String)>,
    strict: bool,
}

impl PlaceholderRenderer {
    /// Create a lenient renderer. Empty values are ignored so their tokens survive.
    pub fn new(replacements: Vec<(&'static str, String)>) -> Self {
        let replacements = replacements
            .into_iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .collect();
        Self {
            replacements,
            strict: false,
        }
    }

    /// Fail rendering when any catalog token survives substitution.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Render `template`; `path` only names the document in errors.
    pub fn render(&self, path: &Path, template: &str) -> Result<String> {
        let mut output = template.to_string();
        for (token, value) in &self.replacements {
            if output.contains(token) {
                output = output.replace(token, value);
            }
        }

        if self.strict {
            let left = unresolved(&output);
            if !left.is_empty() {
                return Err(AiDocsError::UnresolvedPlaceholders {
                    path: path.to_path_buf(),
                    tokens: left.into_iter().map(String::from).collect(),
                });
            }
        }

        Ok(output)
    }
}

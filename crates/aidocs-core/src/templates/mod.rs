//! Template system for aidocs documentation scaffolding.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, grouped into per-flavor tables by [`catalog`], and filled in
//! at customization time by the [`renderer::PlaceholderRenderer`].
//!
//! ## Placeholder tokens
//!
//! Customizable templates carry literal bracketed tokens rather than a template
//! language, so a freshly generated document is readable as-is:
//! - `[PROJECT_NAME]`: project name
//! - `[project_description]`: one-line description
//! - `[DATE]`: generation date (`YYYY-MM-DD`)
//!
//! The full list lives in [`renderer::PLACEHOLDERS`].
//!
//! ## Adding a new template
//!
//! 1. Place the file under `templates/` (or `templates/shared/` when both flavors use it)
//! 2. Add a `pub const` with `include_str!` in [`embedded`]
//! 3. Add a [`catalog::TemplateEntry`] row to the flavor tables in [`catalog`]
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to this file and checked at compile-time.

pub mod catalog;
pub mod embedded;
pub mod renderer;

pub use catalog::{EntryKind, Flavor, TemplateEntry};

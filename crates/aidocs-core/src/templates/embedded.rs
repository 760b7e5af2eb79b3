//! Compile-time embedded templates for documentation scaffolding.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/aidocs-core/src/templates/embedded.rs`).
//!
//! ## Warning
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.
//! Do NOT edit the placeholder tokens in customizable templates without checking
//! [`super::renderer::PLACEHOLDERS`].

// -------------------------------------------------------
// Shared by both flavors
// -------------------------------------------------------

pub const IMPLEMENTATION_PATTERNS: &str = include_str!("../../../../templates/shared/implementation_patterns.mdc");
pub const SETUP_SCRIPT: &str = include_str!("../../../../templates/shared/setup_new_project.py");

// -------------------------------------------------------
// Ready-to-use flavor
// -------------------------------------------------------

pub const READY_CONTEXT_PRIMING: &str = include_str!("../../../../templates/ready/PROJECT_CONTEXT_PRIMING.md");
pub const READY_ARCHITECTURE: &str = include_str!("../../../../templates/ready/architecture_overview.md");
pub const READY_README: &str = include_str!("../../../../templates/ready/README.md");
pub const READY_USAGE_GUIDE: &str = include_str!("../../../../templates/ready/USAGE_GUIDE.md");

// -------------------------------------------------------
// Universal (placeholder) flavor
// -------------------------------------------------------

pub const UNIVERSAL_CONTEXT_PRIMING: &str = include_str!("../../../../templates/universal/PROJECT_CONTEXT_PRIMING.md");
pub const UNIVERSAL_ARCHITECTURE: &str = include_str!("../../../../templates/universal/architecture_overview.md");
pub const UNIVERSAL_README: &str = include_str!("../../../../templates/universal/README.md");
pub const UNIVERSAL_USAGE_GUIDE: &str = include_str!("../../../../templates/universal/USAGE_GUIDE.md");

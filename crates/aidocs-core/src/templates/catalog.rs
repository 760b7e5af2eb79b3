//! Static per-flavor tables of the documents aidocs writes.
//!
//! ## Output layout
//!
//! Both flavors produce the same six documents:
//! ```text
//! <base>/
//! ├── README.md                           # Project overview (customizable)
//! ├── USAGE_GUIDE.md                      # How to use the documents
//! ├── docs/
//! │   ├── PROJECT_CONTEXT_PRIMING.md      # AI agent context primer
//! │   └── architecture_overview.md        # Architecture guide
//! ├── cursor/rules/                       # `.cursor/rules/` for the universal flavor
//! │   └── implementation_patterns.mdc     # Three-phase methodology
//! └── scripts/
//!     └── setup_new_project.py            # Executable project setup script
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::embedded;

/// Whether a document is meant to be used verbatim or edited after generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Usable as written.
    ReadyToUse,
    /// Carries placeholder tokens for the user to replace.
    Customizable,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadyToUse => "ready",
            Self::Customizable => "customizable",
        }
    }
}

/// A fixed (path, content) pair bundled with the tool.
#[derive(Debug, Clone, Copy)]
pub struct TemplateEntry {
    /// Output path relative to the base directory, `/`-separated.
    pub relative_path: &'static str,
    pub content: &'static str,
    pub kind: EntryKind,
    /// Set the executable bit on Unix after writing.
    pub executable: bool,
    /// One-line description for listings and summaries.
    pub description: &'static str,
}

impl TemplateEntry {
    pub fn is_customizable(&self) -> bool {
        self.kind == EntryKind::Customizable
    }
}

/// Which bundled template set to materialize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// Ready-to-use primers; only the README needs editing.
    #[default]
    Ready,
    /// Placeholder-heavy templates for a fresh project.
    Universal,
}

impl Flavor {
    pub const ALL: [Flavor; 2] = [Flavor::Ready, Flavor::Universal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Universal => "universal",
        }
    }

    /// The documents written for this flavor, in generation order.
    pub fn entries(&self) -> &'static [TemplateEntry] {
        match self {
            Self::Ready => &READY_ENTRIES,
            Self::Universal => &UNIVERSAL_ENTRIES,
        }
    }

    /// Look up an entry by its relative path.
    pub fn entry(&self, relative_path: &str) -> Option<&'static TemplateEntry> {
        self.entries()
            .iter()
            .find(|e| e.relative_path == relative_path)
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const CONTEXT_PRIMING_PATH: &str = "docs/PROJECT_CONTEXT_PRIMING.md";
const ARCHITECTURE_PATH: &str = "docs/architecture_overview.md";
const README_PATH: &str = "README.md";
const USAGE_GUIDE_PATH: &str = "USAGE_GUIDE.md";
const SETUP_SCRIPT_PATH: &str = "scripts/setup_new_project.py";

const SETUP_SCRIPT: TemplateEntry = TemplateEntry {
    relative_path: SETUP_SCRIPT_PATH,
    content: embedded::SETUP_SCRIPT,
    kind: EntryKind::ReadyToUse,
    executable: true,
    description: "Quick project setup script",
};

static READY_ENTRIES: [TemplateEntry; 6] = [
    TemplateEntry {
        relative_path: CONTEXT_PRIMING_PATH,
        content: embedded::READY_CONTEXT_PRIMING,
        kind: EntryKind::ReadyToUse,
        executable: false,
        description: "Ready-to-use AI agent context",
    },
    TemplateEntry {
        relative_path: "cursor/rules/implementation_patterns.mdc",
        content: embedded::IMPLEMENTATION_PATTERNS,
        kind: EntryKind::ReadyToUse,
        executable: false,
        description: "Development methodology",
    },
    TemplateEntry {
        relative_path: ARCHITECTURE_PATH,
        content: embedded::READY_ARCHITECTURE,
        kind: EntryKind::ReadyToUse,
        executable: false,
        description: "Complete architecture guide",
    },
    TemplateEntry {
        relative_path: README_PATH,
        content: embedded::READY_README,
        kind: EntryKind::Customizable,
        executable: false,
        description: "Project overview template",
    },
    TemplateEntry {
        relative_path: USAGE_GUIDE_PATH,
        content: embedded::READY_USAGE_GUIDE,
        kind: EntryKind::ReadyToUse,
        executable: false,
        description: "How to use these documents",
    },
    SETUP_SCRIPT,
];

static UNIVERSAL_ENTRIES: [TemplateEntry; 6] = [
    TemplateEntry {
        relative_path: CONTEXT_PRIMING_PATH,
        content: embedded::UNIVERSAL_CONTEXT_PRIMING,
        kind: EntryKind::Customizable,
        executable: false,
        description: "AI agent context template",
    },
    TemplateEntry {
        relative_path: ".cursor/rules/implementation_patterns.mdc",
        content: embedded::IMPLEMENTATION_PATTERNS,
        kind: EntryKind::ReadyToUse,
        executable: false,
        description: "Development methodology",
    },
    TemplateEntry {
        relative_path: ARCHITECTURE_PATH,
        content: embedded::UNIVERSAL_ARCHITECTURE,
        kind: EntryKind::Customizable,
        executable: false,
        description: "Architecture documentation template",
    },
    TemplateEntry {
        relative_path: README_PATH,
        content: embedded::UNIVERSAL_README,
        kind: EntryKind::Customizable,
        executable: false,
        description: "Project overview template",
    },
    TemplateEntry {
        relative_path: USAGE_GUIDE_PATH,
        content: embedded::UNIVERSAL_USAGE_GUIDE,
        kind: EntryKind::ReadyToUse,
        executable: false,
        description: "How to use these templates",
    },
    SETUP_SCRIPT,
];

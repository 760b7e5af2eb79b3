//! Optional `aidocs.config.json` and the project values used by `customize`.
//!
//! ```json
//! {
//!   "flavor": "universal",
//!   "project": {
//!     "name": "Acme Portal",
//!     "description": "customer self-service portal",
//!     "frontend": "React",
//!     "backend": "FastAPI"
//!   }
//! }
//! ```
//!
//! Every field is optional. A missing file means defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AiDocsError, Result};
use crate::templates::renderer::{PlaceholderField, PLACEHOLDERS};
use crate::templates::Flavor;

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "aidocs.config.json";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Template set used when `--flavor` is not given.
    pub flavor: Flavor,
    /// Answers for the customizable documents.
    pub project: ProjectValues,
}

impl DocsConfig {
    /// Load from `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| AiDocsError::ConfigNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| AiDocsError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| AiDocsError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json + "\n")?;
        Ok(())
    }
}

/// Project facts substituted into placeholder tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Target users or market.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    /// Main business objective.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Architecture pattern, e.g. "Vertical Slice".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    /// Domain focus, e.g. "compliance-focused".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    /// Overrides today's date for `[DATE]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ProjectValues {
    /// Fill unset fields from `other`. Values already set here win.
    pub fn merge(mut self, other: &ProjectValues) -> Self {
        fn pick(slot: &mut Option<String>, fallback: &Option<String>) {
            if slot.as_deref().map_or(true, |v| v.trim().is_empty()) {
                slot.clone_from(fallback);
            }
        }
        pick(&mut self.name, &other.name);
        pick(&mut self.description, &other.description);
        pick(&mut self.audience, &other.audience);
        pick(&mut self.goal, &other.goal);
        pick(&mut self.frontend, &other.frontend);
        pick(&mut self.backend, &other.backend);
        pick(&mut self.database, &other.database);
        pick(&mut self.architecture, &other.architecture);
        pick(&mut self.domain, &other.domain);
        pick(&mut self.timeline, &other.timeline);
        pick(&mut self.date, &other.date);
        self
    }

    /// The value for one placeholder field, if known.
    pub fn value(&self, field: PlaceholderField) -> Option<String> {
        let non_empty = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        };
        match field {
            PlaceholderField::Name => non_empty(&self.name),
            PlaceholderField::Description => non_empty(&self.description),
            PlaceholderField::Audience => non_empty(&self.audience),
            PlaceholderField::Goal => non_empty(&self.goal),
            PlaceholderField::Technology => {
                let parts: Vec<String> = [&self.frontend, &self.backend, &self.database]
                    .into_iter()
                    .filter_map(non_empty)
                    .collect();
                (!parts.is_empty()).then(|| parts.join(", "))
            }
            PlaceholderField::Architecture => non_empty(&self.architecture),
            PlaceholderField::Domain => non_empty(&self.domain),
            PlaceholderField::Timeline => non_empty(&self.timeline),
            PlaceholderField::Date => Some(
                non_empty(&self.date)
                    .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string()),
            ),
        }
    }

    /// Token/value pairs for every catalog placeholder that has a value.
    pub fn replacements(&self) -> Vec<(&'static str, String)> {
        PLACEHOLDERS
            .iter()
            .filter_map(|p| self.value(p.field).map(|v| (p.token, v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> ProjectValues {
        ProjectValues {
            name: Some("Acme Portal".into()),
            frontend: Some("React".into()),
            database: Some("PostgreSQL".into()),
            date: Some("2024-01-31".into()),
            ..ProjectValues::default()
        }
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = DocsConfig {
            flavor: Flavor::Universal,
            project: acme(),
        };
        config.save(&path).unwrap();
        assert_eq!(DocsConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = DocsConfig::load_or_default(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, DocsConfig::default());
        assert_eq!(config.flavor, Flavor::Ready);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        let err = DocsConfig::load_or_default(&path).unwrap_err();
        assert!(matches!(err, AiDocsError::ConfigParse { .. }));
    }

    #[test]
    fn test_unknown_flavor_in_config_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "flavor": "fancy" }"#).unwrap();
        assert!(DocsConfig::load(&path).is_err());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "project": { "name": "Acme" } }"#).unwrap();
        let config = DocsConfig::load(&path).unwrap();
        assert_eq!(config.flavor, Flavor::Ready);
        assert_eq!(config.project.name.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_technology_joins_known_parts() {
        let values = acme();
        assert_eq!(
            values.value(PlaceholderField::Technology).as_deref(),
            Some("React, PostgreSQL")
        );
        assert!(ProjectValues::default()
            .value(PlaceholderField::Technology)
            .is_none());
    }

    #[test]
    fn test_date_defaults_to_today() {
        let date = ProjectValues::default()
            .value(PlaceholderField::Date)
            .unwrap();
        assert_eq!(date.len(), 10);
        assert_eq!(&date[4..5], "-");
    }

    #[test]
    fn test_replacements_skip_unknown_fields() {
        let replacements = acme().replacements();
        let tokens: Vec<_> = replacements.iter().map(|(t, _)| *t).collect();
        assert!(tokens.contains(&"[PROJECT_NAME]"));
        assert!(tokens.contains(&"[Technology]"));
        assert!(tokens.contains(&"[DATE]"));
        assert!(!tokens.contains(&"[domain_focus]"));
    }

    #[test]
    fn test_merge_prefers_self() {
        let cli = ProjectValues {
            name: Some("From CLI".into()),
            ..ProjectValues::default()
        };
        let merged = cli.merge(&acme());
        assert_eq!(merged.name.as_deref(), Some("From CLI"));
        assert_eq!(merged.frontend.as_deref(), Some("React"));
    }

    #[test]
    fn test_blank_values_not_serialized() {
        let json = serde_json::to_string(&ProjectValues::default()).unwrap();
        assert_eq!(json, "{}");
    }
}

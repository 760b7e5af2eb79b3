//! Core library for the aidocs toolkit.
//!
//! Bundles a fixed catalog of AI agent documentation templates (context primer,
//! architecture overview, implementation methodology, README, usage guide and a
//! project setup script) and writes them into a target directory.
//!
//! - [`materializer`]: the batch writer behind `aidocs generate`
//! - [`customize`]: fills placeholder tokens in generated documents
//! - [`status`]: compares files on disk with the embedded templates
//! - [`config`]: optional `aidocs.config.json`
//! - [`templates`]: the embedded catalog and the placeholder renderer

pub mod config;
pub mod customize;
pub mod error;
pub mod materializer;
pub mod status;
pub mod templates;

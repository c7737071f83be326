//! Spec layer: JSON input shape + validation into a typed document.
//!
//! This module is intentionally separate from the config model and the
//! renderer. It owns the doc.json schema and the structural checks that
//! turn caller-supplied JSON into a ConfigDocument.

pub mod doc;

pub use doc::{DirectiveSpec, DocSpec, SectionSpec};

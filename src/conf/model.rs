//! Document model for the agent's config syntax.
//!
//! A config is an ordered list of bracketed sections, each holding an ordered
//! list of key/value directives. Keys may repeat within a section (the agent
//! accepts duplicate directives), so directives are a Vec of pairs, never a
//! uniqueness-enforcing map. The settings file variant has no section headers
//! at all; we model that as a distinct document mode rather than a section
//! with a fake name.

use serde::{Deserialize, Serialize};

/// A single key/value line. Values are rendered verbatim; an empty value is
/// legal (toggle-style directives).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    pub key: String,
    pub value: String,
}

impl Directive {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A named `[SECTION]` block and its directives, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub directives: Vec<Directive>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directives: Vec::new(),
        }
    }

    /// Append a directive, builder-style.
    pub fn directive(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.directives.push(Directive::new(key, value));
        self
    }
}

/// A full document. Section and directive order is significant: the agent
/// applies pipeline stages in file order, so nothing may be reordered or
/// deduplicated between construction and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigDocument {
    /// Regular agent config: ordered `[SECTION]` blocks.
    Sections(Vec<Section>),
    /// Header-less settings file: bare directive lines.
    Bare(Vec<Directive>),
}

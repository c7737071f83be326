//! Document spec (doc.json): raw serde shape + validation.
//!
//! JSON shape for a regular agent config:
//! {
//!   "sections": [
//!     {
//!       "name": "SERVICE",
//!       "directives": [["Flush", "1"], ["Daemon", "Off"]]
//!     },
//!     ...
//!   ]
//! }
//!
//! JSON shape for a header-less settings file:
//! {
//!   "directives": [["Enable", "1"]]
//! }
//!
//! A document supplies one of the two shapes, never both. Invariants on the
//! content itself (non-empty section names and keys) belong to the renderer;
//! this layer only enforces the structural shape.

use crate::conf::{ConfigDocument, Directive, Section};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DocSpec {
    #[serde(default)]
    pub sections: Vec<SectionSpec>,

    #[serde(default)]
    pub directives: Vec<DirectiveSpec>,
}

/// Raw section shape as it appears in doc.json.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionSpec {
    pub name: String,

    #[serde(default)]
    pub directives: Vec<DirectiveSpec>,
}

/// Directive entries in doc.json.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DirectiveSpec {
    // Compact shape: ["Key", "Value"]
    Pair([String; 2]),
    // Explicit shape: { "key": "Key", "value": "Value" }; value may be omitted.
    Explicit {
        key: String,
        #[serde(default)]
        value: String,
    },
}

impl DirectiveSpec {
    fn into_directive(self) -> Directive {
        match self {
            DirectiveSpec::Pair([key, value]) => Directive { key, value },
            DirectiveSpec::Explicit { key, value } => Directive { key, value },
        }
    }
}

impl DocSpec {
    /// Check the structural shape and build the typed document.
    pub fn validate_and_build(self) -> anyhow::Result<ConfigDocument> {
        use anyhow::bail;

        if !self.sections.is_empty() && !self.directives.is_empty() {
            bail!("doc.json mixes sectioned and bare directives; supply one or the other");
        }
        if self.sections.is_empty() && self.directives.is_empty() {
            bail!("doc.json contained no sections or directives");
        }

        if self.sections.is_empty() {
            let directives = self
                .directives
                .into_iter()
                .map(DirectiveSpec::into_directive)
                .collect();
            return Ok(ConfigDocument::Bare(directives));
        }

        let sections = self
            .sections
            .into_iter()
            .map(|s| Section {
                name: s.name,
                directives: s
                    .directives
                    .into_iter()
                    .map(DirectiveSpec::into_directive)
                    .collect(),
            })
            .collect();
        Ok(ConfigDocument::Sections(sections))
    }
}

//! Config layer: document model + text rendering + re-parsing.
//!
//! This module is intentionally separate from the input spec layer.
//! It owns:
//! - the ConfigDocument/Section/Directive model
//! - rendering into the agent's `[SECTION]` / `Key Value` syntax
//! - parsing rendered text back (used by `check` and round-trip tests)

pub mod model;
pub mod parse;
pub mod render;

pub use model::{ConfigDocument, Directive, Section};
pub use parse::{ParseError, parse};
pub use render::{RenderError, render};

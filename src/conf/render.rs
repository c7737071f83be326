//! Render a ConfigDocument into the agent's text syntax.
//!
//! Layout:
//! - `[NAME]` header per section, name upper-cased
//! - directive lines: 4-space indent, key padded to the section's widest key
//!   plus one space, value verbatim
//! - one blank line between sections
//! - bare (settings) mode: directive lines only, no indent, no headers
//!
//! Alignment is cosmetic (the agent splits on whitespace); what matters is
//! that the same document always renders to the same bytes.

use crate::conf::model::{ConfigDocument, Directive};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

/// Render `doc` to config text. Pure: no I/O, no partial output on error.
pub fn render(doc: &ConfigDocument) -> Result<String, RenderError> {
    match doc {
        ConfigDocument::Sections(sections) => {
            if sections.is_empty() {
                return Err(RenderError::InvalidDocument(
                    "document has no sections".to_string(),
                ));
            }

            let mut out = String::new();
            for (i, section) in sections.iter().enumerate() {
                if section.name.is_empty() {
                    return Err(RenderError::InvalidDocument(format!(
                        "section {} has an empty name",
                        i + 1
                    )));
                }
                if i > 0 {
                    out.push('\n');
                }
                out.push_str(&format!("[{}]\n", section.name.to_ascii_uppercase()));
                render_directives(&mut out, &section.directives, "    ")?;
            }
            Ok(out)
        }
        ConfigDocument::Bare(directives) => {
            if directives.is_empty() {
                return Err(RenderError::InvalidDocument(
                    "document has no directives".to_string(),
                ));
            }
            let mut out = String::new();
            render_directives(&mut out, directives, "")?;
            Ok(out)
        }
    }
}

fn render_directives(
    out: &mut String,
    directives: &[Directive],
    indent: &str,
) -> Result<(), RenderError> {
    let width = directives.iter().map(|d| d.key.len()).max().unwrap_or(0);

    for d in directives {
        if d.key.is_empty() {
            return Err(RenderError::InvalidDocument(
                "directive has an empty key".to_string(),
            ));
        }
        out.push_str(indent);
        if d.value.is_empty() {
            // No trailing padding after a bare key.
            out.push_str(&d.key);
        } else {
            out.push_str(&format!("{:<width$} {}", d.key, d.value));
        }
        out.push('\n');
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::model::{ConfigDocument, Directive, Section};
    use pretty_assertions::assert_eq;

    fn sample() -> ConfigDocument {
        ConfigDocument::Sections(vec![
            Section::new("SERVICE").directive("Flush", "1"),
            Section::new("INPUT")
                .directive("Name", "tail")
                .directive("Tag", "kube.*"),
        ])
    }

    #[test]
    fn deterministic_across_calls() {
        let doc = sample();
        assert_eq!(render(&doc).unwrap(), render(&doc).unwrap());
    }

    #[test]
    fn sections_and_directives_keep_input_order() {
        let text = render(&sample()).unwrap();
        let service = text.find("[SERVICE]").unwrap();
        let input = text.find("[INPUT]").unwrap();
        assert!(service < input);

        let name = text.find("Name").unwrap();
        let tag = text.find("Tag").unwrap();
        assert!(name < tag);
    }

    #[test]
    fn duplicate_keys_render_both_lines() {
        let doc = ConfigDocument::Sections(vec![
            Section::new("INPUT")
                .directive("Path", "/var/log/a.log")
                .directive("Path", "/var/log/b.log"),
        ]);
        let text = render(&doc).unwrap();
        assert_eq!(text.matches("Path").count(), 2);
        assert!(text.contains("/var/log/a.log"));
        assert!(text.contains("/var/log/b.log"));
    }

    #[test]
    fn keys_align_to_widest_key_in_section() {
        let doc = ConfigDocument::Sections(vec![
            Section::new("SERVICE")
                .directive("Flush", "1")
                .directive("Parsers_File", "parsers.conf"),
        ]);
        let text = render(&doc).unwrap();
        assert_eq!(
            text,
            "[SERVICE]\n    Flush        1\n    Parsers_File parsers.conf\n"
        );
    }

    #[test]
    fn section_name_is_upper_cased() {
        let doc = ConfigDocument::Sections(vec![Section::new("service").directive("Flush", "1")]);
        let text = render(&doc).unwrap();
        assert!(text.starts_with("[SERVICE]\n"));
    }

    #[test]
    fn empty_value_emits_key_without_trailing_whitespace() {
        let doc = ConfigDocument::Sections(vec![
            Section::new("OUTPUT")
                .directive("Match", "*")
                .directive("Retry_Limit", ""),
        ]);
        let text = render(&doc).unwrap();
        assert!(text.contains("\n    Retry_Limit\n"));
    }

    #[test]
    fn empty_section_name_is_invalid() {
        let doc = ConfigDocument::Sections(vec![
            Section::new("SERVICE").directive("Flush", "1"),
            Section::new("").directive("Name", "tail"),
        ]);
        let err = render(&doc).unwrap_err();
        assert_eq!(
            err,
            RenderError::InvalidDocument("section 2 has an empty name".to_string())
        );
    }

    #[test]
    fn empty_directive_key_is_invalid() {
        let doc = ConfigDocument::Sections(vec![Section::new("SERVICE").directive("", "1")]);
        assert!(matches!(
            render(&doc),
            Err(RenderError::InvalidDocument(_))
        ));
    }

    #[test]
    fn empty_documents_are_invalid() {
        assert!(render(&ConfigDocument::Sections(vec![])).is_err());
        assert!(render(&ConfigDocument::Bare(vec![])).is_err());
    }

    #[test]
    fn bare_mode_has_no_headers_and_no_indent() {
        let doc = ConfigDocument::Bare(vec![Directive::new("Enable", "1")]);
        let text = render(&doc).unwrap();
        assert_eq!(text, "Enable 1\n");
        assert!(!text.contains('['));
    }
}

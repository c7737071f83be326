//! Parse rendered agent config text back into a ConfigDocument.
//!
//! Used by the `check` subcommand and by round-trip tests: rendering a
//! document and parsing the result must recover the same ordered sections
//! and directives. Blank lines are ignored; whether a file is sectioned or
//! bare (settings-style) is decided by whether any header appears.

use crate::conf::model::{ConfigDocument, Directive, Section};
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: {msg}")]
    Malformed { line: usize, msg: String },
    #[error("config text contained no directives")]
    Empty,
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

pub fn parse(text: &str) -> Result<ConfigDocument, ParseError> {
    // Header: [NAME], no whitespace inside the brackets.
    // Directive: key token, then the rest of the line as the value.
    let header_re = Regex::new(r"^\[([^\[\]\s]+)\]$")?;
    let directive_re = Regex::new(r"^(\S+)(?:\s+(.*\S))?$")?;

    let mut sections: Vec<Section> = Vec::new();
    let mut bare: Vec<Directive> = Vec::new();
    let mut current: Option<Section> = None;

    for (lineno, raw) in text.lines().enumerate() {
        let lno = lineno + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            let caps = header_re.captures(line).ok_or_else(|| ParseError::Malformed {
                line: lno,
                msg: format!("malformed section header: {:?}", line),
            })?;
            if !bare.is_empty() {
                return Err(ParseError::Malformed {
                    line: lno,
                    msg: "section header after bare directives".to_string(),
                });
            }
            if let Some(done) = current.take() {
                sections.push(done);
            }
            current = Some(Section::new(caps.get(1).unwrap().as_str()));
            continue;
        }

        let caps = directive_re.captures(line).ok_or_else(|| ParseError::Malformed {
            line: lno,
            msg: format!("cannot parse directive line: {:?}", line),
        })?;
        let key = caps.get(1).unwrap().as_str();
        let value = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        let directive = Directive::new(key, value);

        match current.as_mut() {
            Some(section) => section.directives.push(directive),
            None => bare.push(directive),
        }
    }

    if let Some(done) = current.take() {
        sections.push(done);
    }

    if !sections.is_empty() {
        Ok(ConfigDocument::Sections(sections))
    } else if !bare.is_empty() {
        Ok(ConfigDocument::Bare(bare))
    } else {
        Err(ParseError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::render;
    use crate::defaults;
    use pretty_assertions::assert_eq;

    #[test]
    fn round_trips_the_default_agent_document() {
        let doc = defaults::agent_document();
        let text = render(&doc).unwrap();
        assert_eq!(parse(&text).unwrap(), doc);
    }

    #[test]
    fn round_trips_the_default_settings_document() {
        let doc = defaults::settings_document();
        let text = render(&doc).unwrap();
        assert_eq!(parse(&text).unwrap(), doc);
    }

    #[test]
    fn value_keeps_internal_whitespace() {
        let doc = parse("[SERVICE]\n    Log_File /var/log/my agent.log\n").unwrap();
        let ConfigDocument::Sections(sections) = doc else {
            panic!("expected sectioned document");
        };
        assert_eq!(
            sections[0].directives[0],
            Directive::new("Log_File", "/var/log/my agent.log")
        );
    }

    #[test]
    fn missing_value_parses_as_empty() {
        let doc = parse("Enable\n").unwrap();
        assert_eq!(doc, ConfigDocument::Bare(vec![Directive::new("Enable", "")]));
    }

    #[test]
    fn rejects_malformed_header() {
        let err = parse("[BAD SECTION]\n").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { line: 1, .. }));
    }

    #[test]
    fn rejects_header_after_bare_directives() {
        let err = parse("Enable 1\n[SERVICE]\n").unwrap_err();
        assert!(matches!(err, ParseError::Malformed { line: 2, .. }));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(parse("\n\n").unwrap_err(), ParseError::Empty));
    }
}

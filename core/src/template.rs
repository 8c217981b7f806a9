//! Path templates.
//!
//! Projects carry `work` and `publish` path templates with placeholders
//! such as `{root}/{project}/{silo}/{asset}/{subset}/v{version:0>3}`.
//! Formatting a template against resolved values is the only wire format
//! of the pipeline; it is a filesystem path convention, not a protocol.
use crate::error::{Error, Result, Template as TemplateError};
use indexmap::IndexMap;
use std::str::FromStr;

/// Values a template is formatted against.
pub type TemplateData = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),

    /// `{key}` or `{key:0>width}`.
    Placeholder { key: String, pad: Option<usize> },
}

/// A parse-once path template.
#[derive(Debug, Clone, PartialEq)]
pub struct PathTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    pub fn parse(source: impl Into<String>) -> Result<PathTemplate> {
        let source = source.into();
        let mut segments = Vec::new();
        let mut literal = String::new();

        let mut chars = source.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '{' {
                literal.push(c);
                continue;
            }

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }

            let mut body = String::new();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '}' {
                    closed = true;
                    break;
                }
                body.push(c);
            }

            if !closed {
                return Err(Error::Template(TemplateError::Unclosed(source.clone())));
            }

            segments.push(parse_placeholder(&body)?);
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(PathTemplate { source, segments })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholder keys referenced by the template.
    pub fn keys(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder { key, .. } => Some(key.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Formats the template against the given values.
    ///
    /// # Errors
    /// + If the template references a key with no value.
    pub fn format(&self, data: &TemplateData) -> Result<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder { key, pad } => {
                    let Some(value) = data.get(key) else {
                        return Err(Error::Template(TemplateError::MissingValue(key.clone())));
                    };

                    match pad {
                        Some(width) => out.push_str(&format!("{value:0>width$}")),
                        None => out.push_str(value),
                    }
                }
            }
        }

        Ok(out)
    }
}

impl FromStr for PathTemplate {
    type Err = Error;

    fn from_str(s: &str) -> Result<PathTemplate> {
        PathTemplate::parse(s)
    }
}

fn parse_placeholder(body: &str) -> Result<Segment> {
    let Some((key, spec)) = body.split_once(':') else {
        return Ok(Segment::Placeholder {
            key: body.to_string(),
            pad: None,
        });
    };

    // only the zero-pad spec of the publish convention is recognized
    let Some(width) = spec.strip_prefix("0>") else {
        return Err(Error::Template(TemplateError::UnsupportedSpec(
            spec.to_string(),
        )));
    };

    let Ok(width) = width.parse::<usize>() else {
        return Err(Error::Template(TemplateError::UnsupportedSpec(
            spec.to_string(),
        )));
    };

    Ok(Segment::Placeholder {
        key: key.to_string(),
        pad: Some(width),
    })
}

#[cfg(test)]
#[path = "./template_test.rs"]
mod template_test;

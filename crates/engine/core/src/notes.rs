//! Parser for the free-text note field of a map.
//!
//! Map authors configure extensions through two line forms:
//!
//! ```text
//! SHADOW_REGIONS 5,6,7          directive: NAME, then comma-separated values
//! <rbacks 3:cave1,cave2>        tag: <name id:comma-separated values>
//! ```
//!
//! Everything else in the note is prose and ignored. A line that looks like
//! a tag but fails to parse is skipped and recorded, never fatal: a broken
//! note line must degrade to "no configuration", not break map loading.

use thiserror::Error;

/// Errors produced while parsing individual note lines.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NoteError {
    #[error("unterminated tag: {0}")]
    UnterminatedTag(String),

    #[error("tag is missing the `:` separator: {0}")]
    MissingSeparator(String),

    #[error("tag is missing an id: {0}")]
    MissingId(String),

    #[error("invalid id `{value}` in tag: {line}")]
    InvalidId { line: String, value: String },
}

/// A `NAME a,b,c` line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    pub name: String,
    pub values: Vec<String>,
}

/// A `<name id:a,b>` line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub id: u16,
    pub values: Vec<String>,
}

/// All recognized entries of one map note, parsed in a single pass.
#[derive(Clone, Debug, Default)]
pub struct MapNotes {
    directives: Vec<Directive>,
    tags: Vec<Tag>,
    skipped: Vec<NoteError>,
}

impl MapNotes {
    pub fn parse(note: &str) -> Self {
        let mut notes = Self::default();
        for line in note.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('<') {
                match parse_tag(line) {
                    Ok(tag) => notes.tags.push(tag),
                    Err(err) => notes.skipped.push(err),
                }
            } else if let Some(directive) = parse_directive(line) {
                notes.directives.push(directive);
            }
        }
        notes
    }

    /// All directives with the given name, in note order. A note may repeat
    /// a directive; every occurrence counts.
    pub fn directives<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Directive> {
        self.directives.iter().filter(move |d| d.name == name)
    }

    /// First tag matching name and id, if any.
    pub fn tag(&self, name: &str, id: u16) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name == name && t.id == id)
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Lines that looked like tags but failed to parse. Callers may log
    /// these; parsing itself never fails.
    pub fn skipped(&self) -> &[NoteError] {
        &self.skipped
    }
}

/// A directive name is an all-caps token of at least two characters, e.g.
/// `SHADOW_REGIONS`. Prose lines never start with one.
fn is_directive_name(token: &str) -> bool {
    token.len() >= 2
        && token.chars().any(|c| c.is_ascii_uppercase())
        && token
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

fn parse_directive(line: &str) -> Option<Directive> {
    let (name, rest) = line.split_once(char::is_whitespace)?;
    if !is_directive_name(name) {
        return None;
    }
    Some(Directive {
        name: name.to_owned(),
        values: split_values(rest),
    })
}

fn parse_tag(line: &str) -> Result<Tag, NoteError> {
    let body = line
        .strip_prefix('<')
        .and_then(|rest| rest.split_once('>'))
        .map(|(body, _)| body)
        .ok_or_else(|| NoteError::UnterminatedTag(line.to_owned()))?;

    let (head, values) = body
        .split_once(':')
        .ok_or_else(|| NoteError::MissingSeparator(line.to_owned()))?;

    let mut head = head.split_whitespace();
    let name = head
        .next()
        .ok_or_else(|| NoteError::MissingId(line.to_owned()))?;
    let id = head
        .next()
        .ok_or_else(|| NoteError::MissingId(line.to_owned()))?;
    let id = id.parse::<u16>().map_err(|_| NoteError::InvalidId {
        line: line.to_owned(),
        value: id.to_owned(),
    })?;

    Ok(Tag {
        name: name.to_owned(),
        id,
        values: split_values(values),
    })
}

fn split_values(csv: &str) -> Vec<String> {
    csv.split(',').map(|v| v.trim().to_owned()).collect()
}

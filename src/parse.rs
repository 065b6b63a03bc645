//! Field extraction for a single record line.

use crate::error::ParseError;
use crate::layout::LayoutSpec;
use crate::record::Record;

/// Slice each of `layout`'s fields out of `line` and assemble a [`Record`].
///
/// Ranges are end-inclusive byte offsets: field `(s, e)` yields
/// `line[s..=e]`. Values are taken verbatim, padding included; trimming is
/// the caller's business. The input line is never mutated or padded, and a
/// line too short for any field is a deterministic error rather than a
/// truncated record.
pub fn parse(line: &str, layout: &LayoutSpec) -> Result<Record, ParseError> {
    let mut fields = Vec::with_capacity(layout.fields.len());
    for spec in &layout.fields {
        // Re-checked here because `parse` accepts layouts that never went
        // through registration.
        if spec.start > spec.end {
            return Err(ParseError::MalformedRange {
                field: spec.name.clone(),
                start: spec.start,
                end: spec.end,
            });
        }
        if spec.end >= line.len() {
            return Err(ParseError::LineTooShort {
                field: spec.name.clone(),
                needed: spec.required_len(),
                actual: line.len(),
            });
        }
        let value =
            line.get(spec.start..=spec.end)
                .ok_or_else(|| ParseError::SplitCharacter {
                    field: spec.name.clone(),
                    start: spec.start,
                    end: spec.end,
                })?;
        fields.push((spec.name.clone(), value.to_string()));
    }
    Ok(Record::new(layout.tag.clone(), fields))
}

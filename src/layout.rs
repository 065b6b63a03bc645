//! Declarative column layouts for fixed-width records.
//!
//! A layout describes one record type: the tag prefix that identifies it
//! and the byte ranges its fields occupy. Layouts derive serde traits so a
//! whole table can be loaded from a JSON config file.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};

/// One field extraction rule: an end-inclusive byte range and a name.
///
/// Offsets are 0-indexed bytes into the line. `usize` offsets rule out
/// negative values at the type level; inverted ranges are caught by
/// [`LayoutSpec::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub start: usize,
    pub end: usize,
    pub name: String,
}

impl FieldSpec {
    pub fn new(start: usize, end: usize, name: impl Into<String>) -> Self {
        Self {
            start,
            end,
            name: name.into(),
        }
    }

    /// Number of bytes a line must have for this field to be extractable.
    ///
    /// Saturating: an `end` of `usize::MAX` still yields a reportable
    /// length rather than overflowing.
    pub(crate) fn required_len(&self) -> usize {
        self.end.saturating_add(1)
    }
}

/// Column layout for one record type.
///
/// Field ranges need not be contiguous or cover the whole line, and their
/// order never affects the extracted values, but names must be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub tag: String,
    pub fields: Vec<FieldSpec>,
}

impl LayoutSpec {
    pub fn new(tag: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            tag: tag.into(),
            fields,
        }
    }

    /// Check field ranges and name uniqueness.
    ///
    /// Called at registration so configuration defects surface once, up
    /// front, rather than on every parsed line.
    pub fn validate(&self) -> Result<(), ParseError> {
        for (i, field) in self.fields.iter().enumerate() {
            if field.start > field.end {
                return Err(ParseError::MalformedRange {
                    field: field.name.clone(),
                    start: field.start,
                    end: field.end,
                });
            }
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(ParseError::DuplicateField(field.name.clone()));
            }
        }
        Ok(())
    }
}

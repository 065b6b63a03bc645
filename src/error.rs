//! Error types for layout registration and record parsing.

use thiserror::Error;

/// Errors raised while registering layouts or parsing record lines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line's tag prefix has no registered layout.
    #[error("unknown record tag `{0}`")]
    UnknownTag(String),

    /// The line ends before a required field (or before the tag itself).
    #[error("line is {actual} bytes but field `{field}` needs {needed}")]
    LineTooShort {
        field: String,
        needed: usize,
        actual: usize,
    },

    /// A field's byte range is inverted.
    #[error("field `{field}` has malformed range [{start},{end}]")]
    MalformedRange {
        field: String,
        start: usize,
        end: usize,
    },

    /// A field's byte range cuts through a multi-byte character.
    #[error("field `{field}` range [{start},{end}] splits a multi-byte character")]
    SplitCharacter {
        field: String,
        start: usize,
        end: usize,
    },

    /// Two fields in one layout share a name.
    #[error("duplicate field name `{0}` in layout")]
    DuplicateField(String),

    /// A layout's tag length differs from the registry's.
    #[error("tag `{tag}` is {actual} bytes but the registry uses {expected}-byte tags")]
    TagLengthMismatch {
        tag: String,
        expected: usize,
        actual: usize,
    },
}

/// Errors raised while loading a layout table from JSON.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Layout(#[from] ParseError),
}

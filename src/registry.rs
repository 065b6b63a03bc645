//! Tag → layout lookup table and record dispatch.

use std::collections::HashMap;

use crate::error::{LoadError, ParseError};
use crate::layout::{FieldSpec, LayoutSpec};
use crate::parse::parse;
use crate::record::Record;

/// Registry of record layouts keyed by their tag prefix.
///
/// Populated once at startup, then read-only: every parsing entry point
/// takes `&self`, so a registry can be shared across threads once
/// registration is done. Concurrent registration during active parsing is
/// not supported and must be synchronized externally.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    layouts: HashMap<String, LayoutSpec>,
    tag_len: Option<usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and insert a layout.
    ///
    /// Re-registering a tag replaces the previous layout (last write wins).
    /// The first registration fixes the tag length; later layouts must use
    /// the same length, since dispatch reads a single fixed-length prefix.
    pub fn register(&mut self, layout: LayoutSpec) -> Result<(), ParseError> {
        layout.validate()?;
        match self.tag_len {
            None => self.tag_len = Some(layout.tag.len()),
            Some(expected) if expected != layout.tag.len() => {
                return Err(ParseError::TagLengthMismatch {
                    tag: layout.tag.clone(),
                    expected,
                    actual: layout.tag.len(),
                });
            }
            Some(_) => {}
        }
        self.layouts.insert(layout.tag.clone(), layout);
        Ok(())
    }

    /// Exact-match layout lookup.
    pub fn resolve(&self, tag: &str) -> Result<&LayoutSpec, ParseError> {
        self.layouts
            .get(tag)
            .ok_or_else(|| ParseError::UnknownTag(tag.to_string()))
    }

    /// Read the tag prefix from `line`, resolve its layout, and parse.
    ///
    /// The unknown-tag error from resolution propagates unchanged; callers
    /// decide whether to skip the line or abort.
    pub fn dispatch(&self, line: &str) -> Result<Record, ParseError> {
        let Some(tag_len) = self.tag_len else {
            // No layouts registered: no prefix length to read, so every
            // line is an unknown tag.
            return Err(ParseError::UnknownTag(line.to_string()));
        };
        if line.len() < tag_len {
            return Err(ParseError::LineTooShort {
                field: "tag".to_string(),
                needed: tag_len,
                actual: line.len(),
            });
        }
        let tag = line.get(..tag_len).ok_or_else(|| ParseError::SplitCharacter {
            field: "tag".to_string(),
            start: 0,
            end: tag_len - 1,
        })?;
        let layout = self.resolve(tag)?;
        parse(line, layout)
    }

    /// The tag length shared by all registered layouts, if any.
    pub fn tag_len(&self) -> Option<usize> {
        self.tag_len
    }

    /// Number of registered layouts.
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }

    /// Iterate the registered tags (in no particular order).
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.layouts.keys().map(String::as_str)
    }

    /// Build a registry from a JSON array of layouts.
    ///
    /// Layouts are registered in array order, so a duplicated tag resolves
    /// to the last entry, matching [`Registry::register`] semantics.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let layouts: Vec<LayoutSpec> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for layout in layouts {
            registry.register(layout)?;
        }
        Ok(registry)
    }

    /// The SVCL/USGE layout table from the sample billing data.
    ///
    /// Used by tests and the documentation examples; real deployments load
    /// their table from JSON via [`Registry::from_json`].
    pub fn reference() -> Self {
        let mut registry = Self::new();
        registry
            .register(LayoutSpec::new(
                "SVCL",
                vec![
                    FieldSpec::new(4, 18, "customer-name"),
                    FieldSpec::new(19, 23, "customer-id"),
                    FieldSpec::new(24, 27, "call-type-code"),
                    FieldSpec::new(28, 35, "date-of-call-string"),
                ],
            ))
            .unwrap();
        registry
            .register(LayoutSpec::new(
                "USGE",
                vec![
                    FieldSpec::new(4, 8, "customer-id"),
                    FieldSpec::new(9, 22, "customer-name"),
                    FieldSpec::new(30, 30, "cycle"),
                    FieldSpec::new(31, 36, "read-date"),
                ],
            ))
            .unwrap();
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_register_resolve_roundtrip() {
        let layout = LayoutSpec::new("SVCL", vec![FieldSpec::new(4, 18, "customer-name")]);
        let mut registry = Registry::new();
        registry.register(layout.clone()).unwrap();
        assert_eq!(registry.resolve("SVCL").unwrap(), &layout);
        assert_eq!(registry.tag_len(), Some(4));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_resolve_unknown_tag() {
        let registry = Registry::reference();
        assert_eq!(
            registry.resolve("ZZZZ").unwrap_err(),
            ParseError::UnknownTag("ZZZZ".to_string())
        );
    }

    #[test]
    fn test_tags_lists_registered_layouts() {
        let registry = Registry::reference();
        let mut tags: Vec<&str> = registry.tags().collect();
        tags.sort_unstable();
        assert_eq!(tags, vec!["SVCL", "USGE"]);
    }

    #[test]
    fn test_register_rejects_invalid_layout() {
        let mut registry = Registry::new();
        let err = registry
            .register(LayoutSpec::new("BAD ", vec![FieldSpec::new(8, 4, "x")]))
            .unwrap_err();
        assert!(matches!(err, ParseError::MalformedRange { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_rejects_mismatched_tag_length() {
        let mut registry = Registry::reference();
        let err = registry
            .register(LayoutSpec::new("LONGTAG", vec![FieldSpec::new(7, 9, "x")]))
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::TagLengthMismatch {
                tag: "LONGTAG".to_string(),
                expected: 4,
                actual: 7,
            }
        );
    }

    #[test]
    fn test_dispatch_reference_svcl() {
        let registry = Registry::reference();
        let record = registry
            .dispatch("SVCLFOWLER         10101MS0120050313.........................")
            .unwrap();
        assert_eq!(record.tag(), "SVCL");
        assert_eq!(record.get("customer-name"), Some("FOWLER         "));
        assert_eq!(record.get("customer-id"), Some("10101"));
        assert_eq!(record.get("call-type-code"), Some("MS01"));
        assert_eq!(record.get("date-of-call-string"), Some("20050313"));
    }

    #[test]
    fn test_dispatch_reference_usge() {
        // offsets taken against the literal line content: byte 30 is '7',
        // bytes 31..=36 are "050329"
        let registry = Registry::reference();
        let record = registry
            .dispatch("USGE10301TWO          x50214..7050329...............................")
            .unwrap();
        assert_eq!(record.tag(), "USGE");
        assert_eq!(record.get("customer-id"), Some("10301"));
        assert_eq!(record.get("customer-name"), Some("TWO          x"));
        assert_eq!(record.get("cycle"), Some("7"));
        assert_eq!(record.get("read-date"), Some("050329"));
    }

    #[test]
    fn test_dispatch_unknown_tag() {
        let registry = Registry::reference();
        let err = registry.dispatch("ZZZZsome other record").unwrap_err();
        assert_eq!(err, ParseError::UnknownTag("ZZZZ".to_string()));
    }

    #[test]
    fn test_dispatch_line_shorter_than_tag() {
        let registry = Registry::reference();
        assert_eq!(
            registry.dispatch("SV").unwrap_err(),
            ParseError::LineTooShort {
                field: "tag".to_string(),
                needed: 4,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_dispatch_on_empty_registry() {
        let registry = Registry::new();
        assert!(matches!(
            registry.dispatch("SVCL...").unwrap_err(),
            ParseError::UnknownTag(_)
        ));
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = Registry::reference();
        registry
            .register(LayoutSpec::new(
                "SVCL",
                vec![FieldSpec::new(4, 9, "customer-prefix")],
            ))
            .unwrap();

        let record = registry
            .dispatch("SVCLFOWLER         10101MS0120050313.........................")
            .unwrap();
        assert_eq!(record.get("customer-prefix"), Some("FOWLER"));
        assert_eq!(record.get("customer-name"), None);
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_dispatch_is_deterministic() {
        let registry = Registry::reference();
        let line = "USGE10301TWO          x50214..7050329...............................";
        assert_eq!(
            registry.dispatch(line).unwrap(),
            registry.dispatch(line).unwrap()
        );
    }

    #[test]
    fn test_from_json_matches_hardcoded_table() {
        let json = r#"[
            {"tag": "SVCL", "fields": [
                {"start": 4,  "end": 18, "name": "customer-name"},
                {"start": 19, "end": 23, "name": "customer-id"},
                {"start": 24, "end": 27, "name": "call-type-code"},
                {"start": 28, "end": 35, "name": "date-of-call-string"}
            ]},
            {"tag": "USGE", "fields": [
                {"start": 4,  "end": 8,  "name": "customer-id"},
                {"start": 9,  "end": 22, "name": "customer-name"},
                {"start": 30, "end": 30, "name": "cycle"},
                {"start": 31, "end": 36, "name": "read-date"}
            ]}
        ]"#;
        let loaded = Registry::from_json(json).unwrap();
        let reference = Registry::reference();

        let line = "SVCLFOWLER         10101MS0120050313.........................";
        assert_eq!(
            loaded.dispatch(line).unwrap(),
            reference.dispatch(line).unwrap()
        );
        assert_eq!(loaded.resolve("USGE").unwrap(), reference.resolve("USGE").unwrap());
    }

    #[test]
    fn test_from_json_rejects_bad_json() {
        assert!(matches!(
            Registry::from_json("not json").unwrap_err(),
            LoadError::Json(_)
        ));
    }

    #[test]
    fn test_from_json_rejects_invalid_layout() {
        let json = r#"[{"tag": "BAD ", "fields": [{"start": 9, "end": 2, "name": "x"}]}]"#;
        assert!(matches!(
            Registry::from_json(json).unwrap_err(),
            LoadError::Layout(ParseError::MalformedRange { .. })
        ));
    }

    #[test]
    fn test_from_json_duplicate_tag_last_wins() {
        let json = r#"[
            {"tag": "SVCL", "fields": [{"start": 4, "end": 8, "name": "old"}]},
            {"tag": "SVCL", "fields": [{"start": 4, "end": 8, "name": "new"}]}
        ]"#;
        let registry = Registry::from_json(json).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve("SVCL").unwrap().fields[0].name, "new");
    }
}

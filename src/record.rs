//! Parsed record values.

/// A parsed fixed-width record: its tag plus the extracted field values.
///
/// Values are the raw untrimmed substrings of the input line; trailing
/// padding is preserved so records can round-trip back to fixed-width
/// form. Fields keep the layout's declaration order for deterministic
/// iteration, but lookup is by name and order never affects the values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    tag: String,
    fields: Vec<(String, String)>,
}

impl Record {
    pub(crate) fn new(tag: String, fields: Vec<(String, String)>) -> Self {
        Self { tag, fields }
    }

    /// The tag of the layout this record was parsed with.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate `(name, value)` pairs in layout order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of fields in this record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record::new(
            "SVCL".to_string(),
            vec![
                ("customer-name".to_string(), "FOWLER         ".to_string()),
                ("customer-id".to_string(), "10101".to_string()),
            ],
        )
    }

    #[test]
    fn test_get_by_name() {
        let record = sample();
        assert_eq!(record.tag(), "SVCL");
        assert_eq!(record.get("customer-id"), Some("10101"));
        // padding is preserved verbatim
        assert_eq!(record.get("customer-name"), Some("FOWLER         "));
    }

    #[test]
    fn test_get_unknown_name() {
        assert_eq!(sample().get("no-such-field"), None);
    }

    #[test]
    fn test_fields_iterate_in_layout_order() {
        let record = sample();
        let names: Vec<&str> = record.fields().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["customer-name", "customer-id"]);
    }
}

//! Editable key/value rows for params and headers

use serde::{Deserialize, Serialize};

/// One key/value row in a params or headers table.
///
/// Editors keep a trailing blank placeholder row; blank rows are filtered
/// out when the request is assembled, never stored on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FormRow {
    /// The key side of the row.
    pub key: String,
    /// The value side of the row.
    pub value: String,
}

impl FormRow {
    /// Creates a new row.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns true when both sides are empty after trimming.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.key.trim().is_empty() && self.value.trim().is_empty()
    }

    /// Drops blank placeholder rows, preserving order of the rest.
    #[must_use]
    pub fn filled(rows: &[Self]) -> Vec<Self> {
        rows.iter().filter(|r| !r.is_blank()).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(FormRow::default().is_blank());
        assert!(FormRow::new("  ", "").is_blank());
        assert!(!FormRow::new("Accept", "").is_blank());
        assert!(!FormRow::new("", "application/json").is_blank());
    }

    #[test]
    fn test_filled_preserves_order() {
        let rows = vec![
            FormRow::new("a", "1"),
            FormRow::default(),
            FormRow::new("b", "2"),
            FormRow::new(" ", " "),
        ];
        let filled = FormRow::filled(&rows);
        assert_eq!(filled, vec![FormRow::new("a", "1"), FormRow::new("b", "2")]);
    }
}

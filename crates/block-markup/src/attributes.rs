//! Block attribute types and JSON decoding.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AttributesError;

/// Horizontal text alignment of the block content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Align text to the left edge.
    Left,
    /// Centre the text.
    #[default]
    Center,
    /// Align text to the right edge.
    Right,
}

impl Alignment {
    /// Returns the attribute value used in stored block JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    /// Returns the CSS class that applies this alignment.
    ///
    /// # Example
    ///
    /// ```
    /// use block_markup::Alignment;
    ///
    /// assert_eq!(Alignment::Right.css_class(), "has-text-align-right");
    /// ```
    #[must_use]
    pub fn css_class(self) -> String {
        format!("has-text-align-{}", self.as_str())
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes stored with each block instance.
///
/// Missing attributes fall back to an empty paragraph, centred.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlockAttributes {
    /// Rich-text HTML of the paragraph.
    pub content: String,
    /// Text alignment of the paragraph.
    pub alignment: Alignment,
    /// Extra CSS classes added from the editor's advanced panel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl BlockAttributes {
    /// Decodes attributes from the JSON stored in the block delimiter.
    ///
    /// # Errors
    ///
    /// Returns [`AttributesError::ParseError`] when the JSON is malformed or
    /// an attribute has an unexpected value.
    ///
    /// # Example
    ///
    /// ```
    /// use block_markup::{Alignment, BlockAttributes};
    ///
    /// let attributes = BlockAttributes::from_json("{}").expect("valid attributes");
    /// assert_eq!(attributes.alignment, Alignment::Center);
    /// assert!(attributes.content.is_empty());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, AttributesError> {
        serde_json::from_str(json).map_err(|e| AttributesError::ParseError {
            message: e.to_string(),
        })
    }

    /// Returns the extra class names when any were set.
    #[must_use]
    pub fn extra_classes(&self) -> Option<&str> {
        self.class_name
            .as_deref()
            .filter(|classes| !classes.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn decodes_all_attributes() {
        let attributes = BlockAttributes::from_json(
            r#"{"content": "<strong>Hi</strong>", "alignment": "right", "className": "is-style-bold"}"#,
        )
        .expect("valid attributes");

        assert_eq!(attributes.content, "<strong>Hi</strong>");
        assert_eq!(attributes.alignment, Alignment::Right);
        assert_eq!(attributes.extra_classes(), Some("is-style-bold"));
    }

    #[rstest]
    #[case("not json")]
    #[case(r#"{"alignment": "justify"}"#)]
    #[case(r#"{"content": 42}"#)]
    fn rejects_invalid_attributes(#[case] json: &str) {
        assert!(matches!(
            BlockAttributes::from_json(json),
            Err(AttributesError::ParseError { .. })
        ));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(String::new()))]
    #[case(Some("   ".to_owned()))]
    fn blank_class_names_are_ignored(#[case] class_name: Option<String>) {
        let attributes = BlockAttributes {
            class_name,
            ..BlockAttributes::default()
        };
        assert_eq!(attributes.extra_classes(), None);
    }

    #[test]
    fn serialises_with_camel_case_keys() {
        let attributes = BlockAttributes {
            content: "Hi".to_owned(),
            alignment: Alignment::Left,
            class_name: Some("extra".to_owned()),
        };
        let json = serde_json::to_value(&attributes).expect("serialise attributes");

        assert_eq!(
            json,
            serde_json::json!({"content": "Hi", "alignment": "left", "className": "extra"})
        );
    }
}

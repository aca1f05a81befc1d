//! The field-update request accepted by the proxy route.

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Wire shape of a field-update request.
///
/// Every field is optional at this layer so a partial body can be parsed and
/// then rejected with [`ValidationError::MissingParameters`] instead of a
/// deserializer error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_value: Option<String>,
}

/// A validated field update: `item_id` and `field_name` are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub item_id: String,
    pub field_name: String,
    /// Passed through unchanged; `None` means the caller sent no value.
    pub field_value: Option<String>,
}

impl FieldUpdateRequest {
    pub fn new(
        item_id: impl Into<String>,
        field_name: impl Into<String>,
        field_value: impl Into<String>,
    ) -> Self {
        Self {
            item_id: Some(item_id.into()),
            field_name: Some(field_name.into()),
            field_value: Some(field_value.into()),
        }
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::MissingParameters`] when `itemId` or
    /// `fieldName` is absent or empty.
    pub fn validate(self) -> Result<FieldUpdate, ValidationError> {
        let item_id = self
            .item_id
            .filter(|v| !v.is_empty())
            .ok_or(ValidationError::MissingParameters)?;
        let field_name = self
            .field_name
            .filter(|v| !v.is_empty())
            .ok_or(ValidationError::MissingParameters)?;

        Ok(FieldUpdate {
            item_id,
            field_name,
            field_value: self.field_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_complete_request() {
        let update = FieldUpdateRequest::new("{ITEM}", "title", "Dallas")
            .validate()
            .expect("valid");
        assert_eq!(update.item_id, "{ITEM}");
        assert_eq!(update.field_name, "title");
        assert_eq!(update.field_value.as_deref(), Some("Dallas"));
    }

    #[test]
    fn validate_allows_missing_or_empty_value() {
        let missing = FieldUpdateRequest {
            item_id: Some("item".into()),
            field_name: Some("title".into()),
            field_value: None,
        };
        assert_eq!(missing.validate().expect("valid").field_value, None);

        let empty = FieldUpdateRequest::new("item", "title", "");
        assert_eq!(empty.validate().expect("valid").field_value.as_deref(), Some(""));
    }

    #[test]
    fn validate_rejects_missing_item_id() {
        let request = FieldUpdateRequest {
            item_id: None,
            field_name: Some("title".into()),
            field_value: None,
        };
        assert_eq!(request.validate(), Err(ValidationError::MissingParameters));
    }

    #[test]
    fn validate_rejects_empty_field_name() {
        let request = FieldUpdateRequest::new("item", "", "value");
        assert_eq!(request.validate(), Err(ValidationError::MissingParameters));
    }

    #[test]
    fn request_deserializes_from_camel_case() {
        let request: FieldUpdateRequest =
            serde_json::from_str(r#"{"itemId":"a","fieldName":"title"}"#).expect("parse");
        assert_eq!(request.item_id.as_deref(), Some("a"));
        assert_eq!(request.field_value, None);
    }
}

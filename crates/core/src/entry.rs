use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One catalog item: an API with identity, display fields and a docs link.
///
/// Deserialization is lenient field by field: a missing or `null` field becomes
/// the empty string, numbers and booleans keep their textual form, and nested
/// arrays/objects collapse to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    /// Opaque link target, never validated.
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
}

impl Entry {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            description: description.into(),
            url: url.into(),
        }
    }

    /// Build an entry from one element of a catalog array.
    ///
    /// Returns `None` when the element is not a JSON object.
    #[must_use]
    pub fn from_json_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        // Every field is lenient, so an object never fails to convert.
        serde_json::from_value(value).ok()
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_complete_record() {
        let entry: Entry = serde_json::from_value(json!({
            "id": "cat-facts",
            "name": "Cat Facts",
            "category": "Animals",
            "description": "Daily cat facts",
            "url": "https://catfact.ninja"
        }))
        .unwrap();
        assert_eq!(
            entry,
            Entry::new("cat-facts", "Cat Facts", "Animals", "Daily cat facts", "https://catfact.ninja")
        );
    }

    #[test]
    fn missing_and_null_fields_become_empty() {
        let entry: Entry =
            serde_json::from_value(json!({"id": "x", "name": null})).unwrap();
        assert_eq!(entry.id, "x");
        assert_eq!(entry.name, "");
        assert_eq!(entry.category, "");
        assert_eq!(entry.description, "");
        assert_eq!(entry.url, "");
    }

    #[test]
    fn scalar_fields_keep_text_form() {
        let entry: Entry = serde_json::from_value(json!({
            "id": 42,
            "name": true,
            "category": ["nested"],
            "description": {"deep": 1}
        }))
        .unwrap();
        assert_eq!(entry.id, "42");
        assert_eq!(entry.name, "true");
        assert_eq!(entry.category, "");
        assert_eq!(entry.description, "");
    }

    #[test]
    fn from_json_value_rejects_non_objects() {
        assert!(Entry::from_json_value(json!("just a string")).is_none());
        assert!(Entry::from_json_value(json!(7)).is_none());
        assert!(Entry::from_json_value(json!([1, 2])).is_none());
        assert!(Entry::from_json_value(json!({})).is_some());
    }
}

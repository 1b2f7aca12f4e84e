//! Reshaping of reply multiplicity.
//!
//! The transport cannot tell a one-element list from a single element, so a
//! repeated field may arrive as an object, an array, or not at all. These
//! helpers turn such fields into the shape each operation promises. They
//! perform no business validation.

use indexmap::IndexSet;
use promostandards_types::{MediaEntry, ServiceMessage};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{ClientError, Result};

/// Follow `path` through nested objects. `null` counts as absent.
pub fn dig<'v>(value: &'v Value, path: &[&str]) -> Option<&'v Value> {
    path.iter()
        .try_fold(value, |current, key| current.get(key))
        .filter(|found| !found.is_null())
}

/// Like [`dig`], but a missing value is a malformed reply.
pub fn require<'v>(value: &'v Value, path: &[&str]) -> Result<&'v Value> {
    dig(value, path).ok_or_else(|| ClientError::malformed(format!("reply has no {}", path.join("."))))
}

/// Items of a repeated field: an array as-is, a single value as a list of one,
/// an absent value as an empty list.
pub fn records(value: Option<&Value>) -> Vec<Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().filter(|item| !item.is_null()).cloned().collect(),
        Some(single) => vec![single.clone()],
    }
}

/// Scalar text of a leaf value.
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Text values of `field` across `items`, first occurrence wins.
pub fn unique_texts(items: &[Value], field: &str) -> Vec<String> {
    let unique: IndexSet<String> = items.iter().filter_map(|item| item.get(field)).filter_map(text).collect();
    unique.into_iter().collect()
}

/// Join `record[field]` into one string when it is a list of strings, with
/// empty (`null`) parts dropped. Parts are separated by a line feed
/// character, not the two-character sequence `\n`. Any other shape is left
/// untouched.
pub fn join_text_list(record: &mut Value, field: &str) {
    let Some(slot) = record.get_mut(field) else {
        return;
    };
    let joined = match slot {
        Value::Array(parts) if parts.iter().all(|part| part.is_string() || part.is_null()) => {
            parts.iter().filter_map(Value::as_str).collect::<Vec<_>>().join("\n")
        }
        _ => return,
    };
    *slot = Value::String(joined);
}

/// Decode a single record.
pub fn decode<T: DeserializeOwned>(value: Value, what: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|error| ClientError::malformed(format!("invalid {what}: {error}")))
}

/// Decode every item of a repeated field.
pub fn decode_records<T: DeserializeOwned>(value: Option<&Value>, what: &str) -> Result<Vec<T>> {
    records(value).into_iter().map(|item| decode(item, what)).collect()
}

/// Build a [`MediaEntry`], collecting class codes from
/// `class_type_array.class_type[].class_type_id` in reply order.
pub fn media_entry(value: Value) -> Result<MediaEntry> {
    if !value.is_object() {
        return Err(ClientError::malformed("media content entry is not a record"));
    }
    let class_codes: IndexSet<String> = records(dig(&value, &["class_type_array", "class_type"]))
        .iter()
        .filter_map(|class_type| class_type.get("class_type_id"))
        .filter_map(text)
        .collect();
    let mut entry: MediaEntry = decode(value, "media content")?;
    entry.class_codes = class_codes;
    Ok(entry)
}

/// First service message found at `value`, if any.
pub fn service_message(value: Option<&Value>) -> Result<Option<ServiceMessage>> {
    records(value)
        .into_iter()
        .next()
        .map(|message| decode(message, "error message"))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use serde_json::json;

    #[test]
    fn dig_treats_null_as_absent() {
        let reply = json!({ "response": { "array": null, "value": "x" } });
        assert_eq!(dig(&reply, &["response", "value"]), Some(&json!("x")));
        assert_eq!(dig(&reply, &["response", "array"]), None);
        assert_eq!(dig(&reply, &["response", "missing", "deeper"]), None);
    }

    #[test]
    fn require_reports_the_missing_path() {
        let err = require(&json!({}), &["get_product_response", "product"]).expect_err("missing");
        assert_eq!(err.kind(), ErrorKind::MalformedReply);
        assert!(err.to_string().contains("get_product_response.product"));
    }

    #[test]
    fn records_normalizes_single_and_absent_values() {
        assert_eq!(records(None), Vec::<Value>::new());
        assert_eq!(records(Some(&json!({ "id": 1 }))), vec![json!({ "id": 1 })]);
        assert_eq!(records(Some(&json!([{ "id": 1 }, { "id": 2 }]))).len(), 2);
    }

    #[test]
    fn unique_texts_keeps_first_occurrence_order() {
        let items = vec![
            json!({ "product_id": "B" }),
            json!({ "product_id": "A" }),
            json!({ "product_id": "B" }),
            json!({ "other": "x" }),
            json!({ "product_id": "C" }),
        ];
        assert_eq!(unique_texts(&items, "product_id"), vec!["B", "A", "C"]);
    }

    #[test]
    fn join_text_list_flattens_string_lists_only() {
        let mut record = json!({ "description": ["Foo", "Bar"] });
        join_text_list(&mut record, "description");
        assert_eq!(record["description"], json!("Foo\nBar"));

        let mut single = json!({ "description": "Foo" });
        join_text_list(&mut single, "description");
        assert_eq!(single["description"], json!("Foo"));

        let mut mixed = json!({ "description": ["Foo", { "lang": "fr" }] });
        join_text_list(&mut mixed, "description");
        assert_eq!(mixed["description"], json!(["Foo", { "lang": "fr" }]));
    }

    #[test]
    fn join_text_list_skips_empty_parts() {
        let mut record = json!({ "description": ["Foo", null, "Bar"] });
        join_text_list(&mut record, "description");
        assert_eq!(record["description"], json!("Foo\nBar"));

        let mut blank = json!({ "description": [null, null] });
        join_text_list(&mut blank, "description");
        assert_eq!(blank["description"], json!(""));
    }

    #[test]
    fn media_entry_collects_class_codes_in_order() {
        let entry = media_entry(json!({
            "product_id": "PEN-100",
            "url": "https://cdn.example.com/pen.jpg",
            "media_type": "Image",
            "class_type_array": {
                "class_type": [
                    { "class_type_id": "1007", "class_type_name": "Front" },
                    { "class_type_id": "1001", "class_type_name": "Blank" },
                    { "class_type_id": "1007", "class_type_name": "Front" }
                ]
            }
        }))
        .expect("media entry");

        assert_eq!(entry.class_codes.iter().collect::<Vec<_>>(), vec!["1007", "1001"]);
        assert_eq!(entry.url.as_deref(), Some("https://cdn.example.com/pen.jpg"));
        assert!(entry.attributes.contains_key("class_type_array"));
    }

    #[test]
    fn media_entry_with_single_class_type() {
        let entry = media_entry(json!({
            "class_type_array": { "class_type": { "class_type_id": "1006" } }
        }))
        .expect("media entry");
        assert!(entry.has_class_code("1006"));
    }

    #[test]
    fn service_message_reads_first_message() {
        let message = service_message(Some(&json!({ "code": "406", "description": "Not supported" })))
            .expect("decode")
            .expect("message present");
        assert_eq!(message.code.as_deref(), Some("406"));
        assert_eq!(service_message(None).expect("decode"), None);
    }
}

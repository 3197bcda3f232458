use chrono::{DateTime, Utc};
use mongodb::bson::{self, doc, Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::DEFAULT_DURATION_SECS;
use crate::error::ValidationError;

/// One finished typing session as submitted by a client.
#[derive(Clone, Debug, PartialEq)]
pub struct TypingResult {
    pub wpm: f64,
    pub accuracy: f64,
    pub mistakes: i64,
    pub duration: i64,
    pub user_id: Option<String>,
}

impl TypingResult {
    /// Coerce a raw JSON body into a result.
    ///
    /// Numbers may arrive as JSON numbers or numeric strings; integer fields also accept floats
    /// without a fractional part. Booleans and nulls never coerce. Unknown keys, including any
    /// client-sent `created_at`, are ignored.
    pub fn from_json(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(Self {
            wpm: coerce_float("wpm", required(body, "wpm")?)?,
            accuracy: coerce_float("accuracy", required(body, "accuracy")?)?,
            mistakes: coerce_int("mistakes", required(body, "mistakes")?)?,
            duration: coerce_int("duration", required(body, "duration")?)?,
            user_id: coerce_optional_string("user_id", body.get("user_id"))?,
        })
    }

    /// The document persisted for this result, stamped with the server-side insertion time.
    pub fn to_document(&self, created_at: DateTime<Utc>) -> Document {
        let mut document = doc! {
            "wpm": self.wpm,
            "accuracy": self.accuracy,
            "mistakes": self.mistakes,
            "duration": self.duration,
            "created_at": bson::DateTime::from_chrono(created_at),
        };
        if let Some(user_id) = &self.user_id {
            document.insert("user_id", user_id.as_str());
        }
        document
    }
}

fn required<'a>(body: &'a Map<String, Value>, field: &str) -> Result<&'a Value, ValidationError> {
    body.get(field)
        .ok_or_else(|| ValidationError::new(field, "field required"))
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn coerce_float(field: &str, value: &Value) -> Result<f64, ValidationError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::new(
            field,
            format!("expected a number, got {}", describe(value)),
        )),
    }
}

fn coerce_int(field: &str, value: &Value) -> Result<i64, ValidationError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|v| v.fract() == 0.0 && v.abs() < i64::MAX as f64)
                .map(|v| v as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        ValidationError::new(
            field,
            format!("expected an integer, got {}", describe(value)),
        )
    })
}

fn coerce_optional_string(
    field: &str,
    value: Option<&Value>,
) -> Result<Option<String>, ValidationError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ValidationError::new(
            field,
            format!("expected a string, got {}", describe(other)),
        )),
    }
}

/// Response body of a successful save.
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResultResponse {
    pub id: String,
    pub status: String,
}

impl SaveResultResponse {
    pub fn ok(id: String) -> Self {
        Self {
            id,
            status: "ok".to_string(),
        }
    }
}

/// A stored result as returned by the list endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: String,
    pub wpm: f64,
    pub accuracy: f64,
    pub mistakes: i64,
    pub duration: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A stored document decoded field by field, every field optional.
///
/// Historical or partially written documents must still render, so decoding never fails.
/// [`ResultDocument::into_record`] fills the gaps:
///
/// | field        | default                 |
/// |--------------|-------------------------|
/// | `wpm`        | `0.0`                   |
/// | `accuracy`   | `0.0`                   |
/// | `mistakes`   | `0`                     |
/// | `duration`   | `60`                    |
/// | `created_at` | the `now` passed in     |
/// | `id`         | empty string            |
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultDocument {
    pub id: Option<String>,
    pub wpm: Option<f64>,
    pub accuracy: Option<f64>,
    pub mistakes: Option<i64>,
    pub duration: Option<i64>,
    pub user_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ResultDocument {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.get("_id").map(|id| match id {
                Bson::ObjectId(oid) => oid.to_hex(),
                Bson::String(s) => s.clone(),
                other => other.to_string(),
            }),
            wpm: lenient_float(doc, "wpm"),
            accuracy: lenient_float(doc, "accuracy"),
            mistakes: lenient_int(doc, "mistakes"),
            duration: lenient_int(doc, "duration"),
            user_id: match doc.get("user_id") {
                Some(Bson::String(s)) => Some(s.clone()),
                _ => None,
            },
            created_at: lenient_datetime(doc, "created_at"),
        }
    }

    pub fn into_record(self, now: DateTime<Utc>) -> ResultRecord {
        ResultRecord {
            id: self.id.unwrap_or_default(),
            wpm: self.wpm.unwrap_or(0.0),
            accuracy: self.accuracy.unwrap_or(0.0),
            mistakes: self.mistakes.unwrap_or(0),
            duration: self.duration.unwrap_or(DEFAULT_DURATION_SECS),
            user_id: self.user_id,
            created_at: self.created_at.unwrap_or(now),
        }
    }
}

fn lenient_float(doc: &Document, key: &str) -> Option<f64> {
    let value = match doc.get(key) {
        None | Some(Bson::Null) => return None,
        Some(Bson::Double(v)) => Some(*v),
        Some(Bson::Int32(v)) => Some(f64::from(*v)),
        Some(Bson::Int64(v)) => Some(*v as f64),
        Some(Bson::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    if value.is_none() {
        tracing::warn!(field = key, "unreadable stored value, using default");
    }
    value
}

fn lenient_int(doc: &Document, key: &str) -> Option<i64> {
    let value = match doc.get(key) {
        None | Some(Bson::Null) => return None,
        Some(Bson::Int32(v)) => Some(i64::from(*v)),
        Some(Bson::Int64(v)) => Some(*v),
        Some(Bson::Double(v)) if v.is_finite() => Some(v.trunc() as i64),
        Some(Bson::String(s)) => s.trim().parse::<i64>().ok(),
        Some(_) => None,
    };
    if value.is_none() {
        tracing::warn!(field = key, "unreadable stored value, using default");
    }
    value
}

fn lenient_datetime(doc: &Document, key: &str) -> Option<DateTime<Utc>> {
    match doc.get(key) {
        Some(Bson::DateTime(dt)) => Some(dt.to_chrono()),
        Some(Bson::String(s)) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mongodb::bson::oid::ObjectId;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn parses_plain_payload() {
        let result = TypingResult::from_json(&body(json!({
            "wpm": 85.5, "accuracy": 97.2, "mistakes": 3, "duration": 60
        })))
        .unwrap();

        assert_eq!(
            result,
            TypingResult {
                wpm: 85.5,
                accuracy: 97.2,
                mistakes: 3,
                duration: 60,
                user_id: None,
            }
        );
    }

    #[test]
    fn coerces_numeric_strings_and_whole_floats() {
        let result = TypingResult::from_json(&body(json!({
            "wpm": "72", "accuracy": " 88.5 ", "mistakes": 4.0, "duration": "30",
            "user_id": "anna"
        })))
        .unwrap();

        assert_eq!(result.wpm, 72.0);
        assert_eq!(result.accuracy, 88.5);
        assert_eq!(result.mistakes, 4);
        assert_eq!(result.duration, 30);
        assert_eq!(result.user_id.as_deref(), Some("anna"));
    }

    #[test]
    fn rejects_non_numeric_wpm() {
        let err = TypingResult::from_json(&body(json!({
            "wpm": "fast", "accuracy": 90, "mistakes": 1, "duration": 60
        })))
        .unwrap_err();

        assert_eq!(err.field, "wpm");
        assert_eq!(err.reason, "expected a number, got string");
    }

    #[test]
    fn rejects_fractional_mistakes_and_booleans() {
        let err = TypingResult::from_json(&body(json!({
            "wpm": 50, "accuracy": 90, "mistakes": 1.5, "duration": 60
        })))
        .unwrap_err();
        assert_eq!(err.field, "mistakes");

        let err = TypingResult::from_json(&body(json!({
            "wpm": true, "accuracy": 90, "mistakes": 1, "duration": 60
        })))
        .unwrap_err();
        assert_eq!(err.field, "wpm");
        assert_eq!(err.reason, "expected a number, got boolean");
    }

    #[test]
    fn rejects_missing_field_and_non_string_user() {
        let err = TypingResult::from_json(&body(json!({
            "wpm": 50, "accuracy": 90, "mistakes": 1
        })))
        .unwrap_err();
        assert_eq!(err, ValidationError::new("duration", "field required"));

        let err = TypingResult::from_json(&body(json!({
            "wpm": 50, "accuracy": 90, "mistakes": 1, "duration": 60, "user_id": 7
        })))
        .unwrap_err();
        assert_eq!(err.field, "user_id");
    }

    #[test]
    fn document_carries_server_timestamp_only() {
        let result = TypingResult::from_json(&body(json!({
            "wpm": 60, "accuracy": 99, "mistakes": 0, "duration": 15,
            "created_at": "1999-01-01T00:00:00Z"
        })))
        .unwrap();
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();

        let document = result.to_document(now);
        assert_eq!(
            document.get_datetime("created_at").unwrap().to_chrono(),
            now
        );
        assert_eq!(document.get_i64("mistakes").unwrap(), 0);
        assert!(!document.contains_key("user_id"));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let oid = ObjectId::new();
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let record = ResultDocument::from_document(&doc! { "_id": oid, "wpm": 40.0 })
            .into_record(now);

        assert_eq!(record.id, oid.to_hex());
        assert_eq!(record.wpm, 40.0);
        assert_eq!(record.accuracy, 0.0);
        assert_eq!(record.mistakes, 0);
        assert_eq!(record.duration, DEFAULT_DURATION_SECS);
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn mixed_numeric_encodings_are_read() {
        let created = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let decoded = ResultDocument::from_document(&doc! {
            "wpm": 70_i32,
            "accuracy": "95.5",
            "mistakes": 2.9,
            "duration": 30_i64,
            "user_id": "kim",
            "created_at": bson::DateTime::from_chrono(created),
        });

        assert_eq!(decoded.wpm, Some(70.0));
        assert_eq!(decoded.accuracy, Some(95.5));
        assert_eq!(decoded.mistakes, Some(2));
        assert_eq!(decoded.duration, Some(30));
        assert_eq!(decoded.user_id.as_deref(), Some("kim"));
        assert_eq!(decoded.created_at, Some(created));
    }

    #[test]
    fn garbage_values_fall_back_to_defaults() {
        let now = Utc::now();
        let record = ResultDocument::from_document(&doc! {
            "wpm": "n/a",
            "mistakes": [1, 2],
            "duration": Bson::Null,
            "created_at": "yesterday",
        })
        .into_record(now);

        assert_eq!(record.wpm, 0.0);
        assert_eq!(record.mistakes, 0);
        assert_eq!(record.duration, DEFAULT_DURATION_SECS);
        assert_eq!(record.created_at, now);
    }
}

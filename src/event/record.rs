//! DynamoDB stream event and change record types.

use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use serde_dynamo::AttributeValue;
use serde_json::{Map, Value};

/// The event handed to the function by a DynamoDB stream trigger.
///
/// Records are kept as raw JSON and decoded one at a time with
/// [`ChangeRecord::decode`], so that a malformed record only fails once
/// every record before it has been handled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamEvent {
    /// Change records in stream order.
    #[serde(rename = "Records")]
    pub records: Vec<Value>,
}

impl StreamEvent {
    /// Number of records in the event.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the event carries no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One row-level change from the stream.
///
/// Only the path down to the new image is typed. Record metadata is kept as
/// raw JSON for logging, and image attributes are decoded on lookup, so a
/// field nobody reads can't reject the record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChangeRecord {
    #[serde(rename = "eventID", default)]
    event_id: Option<Value>,

    #[serde(rename = "eventName", default)]
    event_name: Option<Value>,

    #[serde(default)]
    dynamodb: Option<StreamRecord>,
}

/// Images and metadata of a single change.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StreamRecord {
    #[serde(default)]
    new_image: Option<Map<String, Value>>,

    #[serde(default)]
    sequence_number: Option<Value>,
}

impl StreamRecord {
    /// Position of the change within its shard, when sent as a string.
    pub fn sequence_number(&self) -> Option<&str> {
        self.sequence_number.as_ref().and_then(Value::as_str)
    }
}

impl ChangeRecord {
    /// Decode a raw stream record.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Decode` if the record, its `dynamodb` member or
    /// its `NewImage` is present but not a JSON object.
    pub fn decode(raw: &Value) -> Result<Self, RecordError> {
        Self::deserialize(raw).map_err(|e| RecordError::Decode(e.to_string()))
    }

    /// Unique id of the stream record, when sent as a string.
    pub fn event_id(&self) -> Option<&str> {
        self.event_id.as_ref().and_then(Value::as_str)
    }

    /// `INSERT`, `MODIFY` or `REMOVE`, when sent as a string.
    pub fn event_name(&self) -> Option<&str> {
        self.event_name.as_ref().and_then(Value::as_str)
    }

    /// The change payload, if present.
    pub fn stream_record(&self) -> Option<&StreamRecord> {
        self.dynamodb.as_ref()
    }

    /// The post-change image, attributes still undecoded.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingField` naming the first absent level.
    pub fn new_image(&self) -> Result<&Map<String, Value>, RecordError> {
        let stream = self
            .dynamodb
            .as_ref()
            .ok_or_else(|| RecordError::MissingField("dynamodb".to_string()))?;

        stream
            .new_image
            .as_ref()
            .ok_or_else(|| RecordError::MissingField("dynamodb.NewImage".to_string()))
    }

    /// The string value of `attribute` in the new image.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::MissingField` if the image or attribute is absent,
    /// `RecordError::InvalidAttribute` if it is not a DynamoDB attribute value,
    /// or `RecordError::UnexpectedType` if it is not tagged `S`.
    pub fn new_image_string(&self, attribute: &str) -> Result<String, RecordError> {
        let path = || format!("dynamodb.NewImage.{attribute}");

        let raw = self
            .new_image()?
            .get(attribute)
            .ok_or_else(|| RecordError::MissingField(path()))?;

        let value =
            AttributeValue::deserialize(raw).map_err(|e| RecordError::InvalidAttribute {
                path: path(),
                reason: e.to_string(),
            })?;

        match value {
            AttributeValue::S(s) => Ok(s),
            other => Err(RecordError::UnexpectedType {
                path: path(),
                expected: "S",
                found: type_tag(&other),
            }),
        }
    }
}

fn type_tag(value: &AttributeValue) -> &'static str {
    match value {
        AttributeValue::S(_) => "S",
        AttributeValue::N(_) => "N",
        AttributeValue::Bool(_) => "BOOL",
        AttributeValue::Null(_) => "NULL",
        AttributeValue::M(_) => "M",
        AttributeValue::L(_) => "L",
        _ => "binary or set",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn insert_record(name: &str) -> Value {
        json!({
            "eventID": "c4ca4238a0b923820dcc509a6f75849b",
            "eventName": "INSERT",
            "eventSource": "aws:dynamodb",
            "awsRegion": "us-east-1",
            "dynamodb": {
                "Keys": {"id": {"N": "101"}},
                "NewImage": {
                    "id": {"N": "101"},
                    "dogName": {"S": name}
                },
                "SequenceNumber": "111",
                "SizeBytes": 26,
                "StreamViewType": "NEW_IMAGE"
            },
            "eventSourceARN": "arn:aws:dynamodb:us-east-1:123456789012:table/Dogs/stream/2024"
        })
    }

    #[test]
    fn test_decode_full_record() {
        let record = ChangeRecord::decode(&insert_record("Rex")).unwrap();
        assert_eq!(record.event_id(), Some("c4ca4238a0b923820dcc509a6f75849b"));
        assert_eq!(record.event_name(), Some("INSERT"));
        assert_eq!(
            record.stream_record().unwrap().sequence_number(),
            Some("111")
        );
        assert_eq!(record.new_image_string("dogName").unwrap(), "Rex");
    }

    #[test]
    fn test_decode_minimal_record() {
        let raw = json!({"dynamodb": {"NewImage": {"dogName": {"S": "Bella"}}}});
        let record = ChangeRecord::decode(&raw).unwrap();
        assert_eq!(record.new_image_string("dogName").unwrap(), "Bella");
        assert!(record.event_id().is_none());
    }

    #[test]
    fn test_unread_fields_are_not_validated() {
        // Odd metadata and malformed sibling attributes don't matter.
        let raw = json!({
            "eventID": 7,
            "eventName": ["INSERT"],
            "eventSourceARN": null,
            "dynamodb": {
                "Keys": "not a key map",
                "SequenceNumber": 111,
                "NewImage": {
                    "dogName": {"S": "Rex"},
                    "age": {"N": 5},
                    "mystery": {"X": "?"}
                }
            }
        });

        let record = ChangeRecord::decode(&raw).unwrap();
        assert_eq!(record.new_image_string("dogName").unwrap(), "Rex");
        assert!(record.event_id().is_none());
        assert!(record.event_name().is_none());
        assert!(record.stream_record().unwrap().sequence_number().is_none());
    }

    #[test]
    fn test_missing_dynamodb() {
        let record = ChangeRecord::decode(&json!({"eventName": "INSERT"})).unwrap();
        assert_eq!(
            record.new_image_string("dogName").unwrap_err(),
            RecordError::MissingField("dynamodb".to_string())
        );
    }

    #[test]
    fn test_missing_new_image() {
        // REMOVE events on a NEW_IMAGE stream carry no new image.
        let raw = json!({"eventName": "REMOVE", "dynamodb": {"Keys": {"id": {"N": "1"}}}});
        let record = ChangeRecord::decode(&raw).unwrap();
        assert_eq!(
            record.new_image_string("dogName").unwrap_err(),
            RecordError::MissingField("dynamodb.NewImage".to_string())
        );
    }

    #[test]
    fn test_missing_attribute() {
        let raw = json!({"dynamodb": {"NewImage": {"id": {"N": "1"}}}});
        let record = ChangeRecord::decode(&raw).unwrap();
        assert_eq!(
            record.new_image_string("dogName").unwrap_err(),
            RecordError::MissingField("dynamodb.NewImage.dogName".to_string())
        );
    }

    #[test]
    fn test_attribute_wrong_type() {
        let raw = json!({"dynamodb": {"NewImage": {"dogName": {"N": "7"}}}});
        let record = ChangeRecord::decode(&raw).unwrap();
        assert_eq!(
            record.new_image_string("dogName").unwrap_err(),
            RecordError::UnexpectedType {
                path: "dynamodb.NewImage.dogName".to_string(),
                expected: "S",
                found: "N",
            }
        );
    }

    #[test]
    fn test_attribute_not_an_attribute_value() {
        let raw = json!({"dynamodb": {"NewImage": {"dogName": "Rex"}}});
        let record = ChangeRecord::decode(&raw).unwrap();
        assert!(matches!(
            record.new_image_string("dogName").unwrap_err(),
            RecordError::InvalidAttribute { .. }
        ));
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let err = ChangeRecord::decode(&json!({"dynamodb": "not an object"})).unwrap_err();
        assert!(matches!(err, RecordError::Decode(_)));

        let err = ChangeRecord::decode(&json!(42)).unwrap_err();
        assert!(matches!(err, RecordError::Decode(_)));
    }

    #[test]
    fn test_stream_event_keeps_order() {
        let event: StreamEvent = serde_json::from_value(json!({
            "Records": [insert_record("A"), insert_record("B")]
        }))
        .unwrap();
        assert_eq!(event.len(), 2);

        let names: Vec<String> = event
            .records
            .iter()
            .map(|raw| {
                ChangeRecord::decode(raw)
                    .unwrap()
                    .new_image_string("dogName")
                    .unwrap()
            })
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_stream_event_requires_records() {
        let result: Result<StreamEvent, _> = serde_json::from_value(json!({}));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_event() {
        let event: StreamEvent = serde_json::from_value(json!({"Records": []})).unwrap();
        assert!(event.is_empty());
    }
}

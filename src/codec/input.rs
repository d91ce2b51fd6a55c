//! Decoded request payloads
//!
//! JSON bodies arrive as a list holding one mapping, XML bodies as one element
//! with a child per field. Both are reduced to a [`DecodedInput`] and read
//! through the same typed accessors, which apply the ingestion normalization.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde_json::{Map, Value};

use super::MediaType;
use super::xml;
use crate::domain::DomainError;

/// Canonical stored form of every string field
pub fn normalize(raw: &str) -> String {
    raw.trim_end().to_lowercase()
}

/// Outcome of reading one field from a payload
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Absent,
    /// Explicit JSON `null`
    Null,
    /// Present but not coercible to the field type
    Invalid,
    Present(T),
}

impl<T> Field<T> {
    /// Value of a required field
    pub fn required(self) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Value of a nullable field; `None` only when the field is malformed
    pub fn optional(self) -> Option<Option<T>> {
        match self {
            Field::Present(value) => Some(Some(value)),
            Field::Absent | Field::Null => Some(None),
            Field::Invalid => None,
        }
    }

    /// Overwrite `slot` when the field is present. Returns whether it was.
    pub fn assign(self, slot: &mut T) -> bool {
        match self {
            Field::Present(value) => {
                *slot = value;
                true
            }
            _ => false,
        }
    }

    /// Like [`Field::assign`] for nullable slots; an explicit null clears it
    pub fn assign_nullable(self, slot: &mut Option<T>) -> bool {
        match self {
            Field::Present(value) => {
                *slot = Some(value);
                true
            }
            Field::Null => {
                *slot = None;
                true
            }
            Field::Absent | Field::Invalid => false,
        }
    }
}

/// A request body reduced to its field set
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedInput {
    Json(Map<String, Value>),
    Xml(HashMap<String, String>),
}

impl DecodedInput {
    /// Decode a body whose root element (XML) must be `element`
    pub fn decode(media: MediaType, element: &str, body: &[u8]) -> Result<Self, DomainError> {
        match media {
            MediaType::Json => {
                let value: Value = serde_json::from_slice(body)
                    .map_err(|e| DomainError::Validation(format!("JSON not valid: {}", e)))?;
                match value {
                    // The first mapping of the list carries the record
                    Value::Array(items) => match items.into_iter().next() {
                        Some(Value::Object(fields)) => Ok(DecodedInput::Json(fields)),
                        _ => Err(DomainError::missing_data()),
                    },
                    Value::Object(fields) => Ok(DecodedInput::Json(fields)),
                    _ => Err(DomainError::missing_data()),
                }
            }
            MediaType::Xml => xml::parse_record(body, element)
                .map(DecodedInput::Xml)
                .map_err(|e| DomainError::Validation(e.to_string())),
        }
    }

    /// Decode for a partial update: an undecodable body yields no fields
    pub fn decode_lenient(media: MediaType, element: &str, body: &[u8]) -> Self {
        Self::decode(media, element, body).unwrap_or_else(|e| {
            tracing::debug!("Ignoring undecodable {} update body: {}", element, e);
            Self::empty(media)
        })
    }

    pub fn empty(media: MediaType) -> Self {
        match media {
            MediaType::Json => DecodedInput::Json(Map::new()),
            MediaType::Xml => DecodedInput::Xml(HashMap::new()),
        }
    }

    /// String field, normalized
    pub fn text(&self, name: &str) -> Field<String> {
        match self {
            DecodedInput::Json(fields) => match fields.get(name) {
                None => Field::Absent,
                Some(Value::Null) => Field::Null,
                Some(Value::String(s)) => Field::Present(normalize(s)),
                Some(_) => Field::Invalid,
            },
            DecodedInput::Xml(fields) => match fields.get(name) {
                None => Field::Absent,
                Some(s) => Field::Present(normalize(s)),
            },
        }
    }

    /// Integer field. JSON requires a number; XML text is parsed.
    pub fn integer(&self, name: &str) -> Field<i32> {
        match self {
            DecodedInput::Json(fields) => match fields.get(name) {
                None => Field::Absent,
                Some(Value::Null) => Field::Null,
                Some(Value::Number(n)) => n
                    .as_i64()
                    .and_then(|n| i32::try_from(n).ok())
                    .map_or(Field::Invalid, Field::Present),
                Some(_) => Field::Invalid,
            },
            DecodedInput::Xml(_) => match self.text(name) {
                Field::Present(s) => s.trim().parse().map_or(Field::Invalid, Field::Present),
                _ => Field::Absent,
            },
        }
    }

    /// Calendar date field in `YYYY-MM-DD` form
    pub fn date(&self, name: &str) -> Field<NaiveDate> {
        match self.text(name) {
            Field::Present(s) => parse_date(&s).map_or(Field::Invalid, Field::Present),
            Field::Absent => Field::Absent,
            Field::Null => Field::Null,
            Field::Invalid => Field::Invalid,
        }
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn json_input(value: Value) -> DecodedInput {
        DecodedInput::decode(MediaType::Json, "Piece", value.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn normalize_strips_trailing_space_and_lowercases() {
        assert_eq!(normalize("Piece 1  \n"), "piece 1");
        assert_eq!(normalize("  Lead"), "  lead");
    }

    #[test]
    fn json_list_uses_first_mapping() {
        let input = json_input(json!([{"piece_name": "First"}, {"piece_name": "Second"}]));
        assert_eq!(input.text("piece_name"), Field::Present("first".to_string()));
    }

    #[test]
    fn empty_json_list_is_missing_data() {
        let err = DecodedInput::decode(MediaType::Json, "Piece", b"[]").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn json_numbers_keep_their_type() {
        let input = json_input(json!([{"studio": 3, "note": "4", "summary": null}]));
        assert_eq!(input.integer("studio"), Field::Present(3));
        assert_eq!(input.integer("note"), Field::Invalid);
        assert_eq!(input.integer("missing"), Field::Absent);
        assert_eq!(input.text("summary"), Field::Null);
    }

    #[test]
    fn xml_numbers_are_parsed_from_text() {
        let body = b"<Evaluation><piece_id> 2 </piece_id><note>five</note></Evaluation>";
        let input = DecodedInput::decode(MediaType::Xml, "Evaluation", body).unwrap();
        assert_eq!(input.integer("piece_id"), Field::Present(2));
        assert_eq!(input.integer("note"), Field::Invalid);
    }

    #[test]
    fn dates_must_be_calendar_dates() {
        let input = json_input(json!([{"date": "2020-01-01", "bad": "2020-13-45"}]));
        assert_eq!(
            input.date("date"),
            Field::Present(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
        );
        assert_eq!(input.date("bad"), Field::Invalid);
    }

    #[test]
    fn assign_only_overwrites_present_fields() {
        let mut name = "old".to_string();
        assert!(!Field::<String>::Absent.assign(&mut name));
        assert!(!Field::<String>::Invalid.assign(&mut name));
        assert_eq!(name, "old");
        assert!(Field::Present("new".to_string()).assign(&mut name));
        assert_eq!(name, "new");

        let mut studio = Some(1);
        assert!(Field::<i32>::Null.assign_nullable(&mut studio));
        assert_eq!(studio, None);
    }

    #[test]
    fn lenient_decode_swallows_garbage() {
        let input = DecodedInput::decode_lenient(MediaType::Xml, "Studio", b"<Studio>");
        assert_eq!(input, DecodedInput::empty(MediaType::Xml));
    }
}

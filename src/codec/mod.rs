//! Representation codec
//!
//! Maps catalog records to and from their two wire forms. Every record type
//! implements [`Representation`]; the HTTP layer only picks a [`MediaType`]
//! and asks the record to render itself.

pub mod input;
pub mod xml;

pub use input::{DecodedInput, Field, normalize};

use serde_json::Value;

/// Prefix under which every resource route is mounted
pub const API_PREFIX: &str = "/api";

/// The two supported wire formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Xml,
    Json,
}

impl MediaType {
    /// Select a codec from a declared `Content-Type` value.
    ///
    /// Only the essence is compared (`application/json; charset=utf-8` selects
    /// JSON). Anything else, including an absent header, selects nothing.
    pub fn from_content_type(value: Option<&str>) -> Option<Self> {
        let essence = value?.split(';').next()?.trim();
        if essence.eq_ignore_ascii_case("application/xml") {
            Some(MediaType::Xml)
        } else if essence.eq_ignore_ascii_case("application/json") {
            Some(MediaType::Json)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Xml => "application/xml",
            MediaType::Json => "application/json",
        }
    }
}

/// Wire contract shared by pieces, studios and evaluations
pub trait Representation: Sized + Send + 'static {
    /// XML element wrapping a single record
    const ELEMENT: &'static str;
    /// XML element wrapping a collection
    const COLLECTION: &'static str;
    /// Route segment under [`API_PREFIX`]
    const ROUTE: &'static str;

    fn id(&self) -> Option<i32>;

    /// Business fields in wire order, rendered as XML text
    fn xml_fields(&self) -> Vec<(&'static str, String)>;

    fn to_json(&self) -> Value;

    /// Build a new record (no id) from decoded input. `None` when a required
    /// field is absent or malformed.
    fn from_input(input: &DecodedInput) -> Option<Self>;

    /// Best-effort partial update: only present, well-formed fields overwrite
    fn merge(&mut self, input: &DecodedInput);

    /// How conflict messages name this record
    fn label(&self) -> String;

    /// Canonical fetch-by-id path, computed from the current id
    fn url(&self) -> String {
        match self.id() {
            Some(id) => format!("{}/{}/{}", API_PREFIX, Self::ROUTE, id),
            None => format!("{}/{}", API_PREFIX, Self::ROUTE),
        }
    }

    fn to_xml(&self) -> String {
        let mut fields = vec![
            ("uri", self.url()),
            ("id", self.id().map(|id| id.to_string()).unwrap_or_default()),
        ];
        fields.extend(self.xml_fields());
        xml::element(Self::ELEMENT, &fields)
    }
}

/// Render a single record in the negotiated format
pub fn encode_one<R: Representation>(media: MediaType, record: &R) -> String {
    match media {
        MediaType::Xml => record.to_xml(),
        MediaType::Json => record.to_json().to_string(),
    }
}

/// Render a collection: a wrapper element for XML, an array for JSON
pub fn encode_many<R: Representation>(media: MediaType, records: &[R]) -> String {
    match media {
        MediaType::Xml => {
            let inner: String = records.iter().map(R::to_xml).collect();
            xml::wrap(R::COLLECTION, &inner)
        }
        MediaType::Json => {
            Value::Array(records.iter().map(R::to_json).collect()).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_selects_codec() {
        assert_eq!(
            MediaType::from_content_type(Some("application/xml")),
            Some(MediaType::Xml)
        );
        assert_eq!(
            MediaType::from_content_type(Some("application/json; charset=utf-8")),
            Some(MediaType::Json)
        );
        assert_eq!(MediaType::from_content_type(Some("text/plain")), None);
        assert_eq!(MediaType::from_content_type(Some("")), None);
        assert_eq!(MediaType::from_content_type(None), None);
    }
}

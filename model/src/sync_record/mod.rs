mod normalizer;
mod source_type;

pub use normalizer::{normalize, normalize_record};
pub use source_type::SourceType;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Partition key attribute of the IVR configuration tables.
pub const PARTITION_KEY_ATTRIBUTE: &str = "Typing";
/// Sort key attribute of the IVR configuration tables.
pub const SORT_KEY_ATTRIBUTE: &str = "Indexing";

const ATTRIBUTES_FIELD: &str = "attributes";
const TYPE_FIELD: &str = "type";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error(r#"record of type "{source_type}" has no {attribute} key"#)]
    MissingKey {
        source_type: String,
        attribute: &'static str,
    },
}

/// A Salesforce sObject as sent in a change notification.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The sObject api name found in `attributes.type`, if any.
    pub fn object_type(&self) -> Option<&str> {
        self.0
            .get(ATTRIBUTES_FIELD)
            .and_then(|attributes| attributes.get(TYPE_FIELD))
            .and_then(Value::as_str)
    }

    pub fn source_type(&self) -> SourceType {
        SourceType::from_api_name(self.object_type().unwrap_or_default())
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Primary key of a record in the IVR configuration tables.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RecordKey {
    #[serde(rename = "Typing")]
    pub partition_key: String,
    #[serde(rename = "Indexing")]
    pub sort_key: String,
}

/// A record flattened into the single wide schema shared by every source type.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    #[serde(skip)]
    source_type: SourceType,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl NormalizedRecord {
    pub(crate) fn new(source_type: SourceType, fields: Map<String, Value>) -> Self {
        Self {
            source_type,
            fields,
        }
    }

    pub fn source_type(&self) -> &SourceType {
        &self.source_type
    }

    pub fn partition_key(&self) -> Option<&str> {
        self.key_attribute(PARTITION_KEY_ATTRIBUTE)
    }

    pub fn sort_key(&self) -> Option<&str> {
        self.key_attribute(SORT_KEY_ATTRIBUTE)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    /// The primary key, provided both key attributes were derived.
    pub fn key(&self) -> Result<RecordKey, RecordError> {
        let missing = |attribute| RecordError::MissingKey {
            source_type: self.source_type.api_name().to_owned(),
            attribute,
        };

        let partition_key = self
            .partition_key()
            .ok_or_else(|| missing(PARTITION_KEY_ATTRIBUTE))?;
        let sort_key = self
            .sort_key()
            .ok_or_else(|| missing(SORT_KEY_ATTRIBUTE))?;

        Ok(RecordKey {
            partition_key: partition_key.to_owned(),
            sort_key: sort_key.to_owned(),
        })
    }

    fn key_attribute(&self, attribute: &str) -> Option<&str> {
        self.fields
            .get(attribute)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }
}

impl From<NormalizedRecord> for RawRecord {
    fn from(record: NormalizedRecord) -> Self {
        Self(record.fields)
    }
}

//! The contact record.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::fields;
use crate::store::{Document, Fields, Query, StoreError};

/// A single address book entry.
///
/// The pair (`first_name`, `last_name`) is the record's natural key; the
/// persistence layer refuses to store two records sharing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
}

impl User {
    /// Create a record with only a name; phone number and address are empty.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    /// Create a fully populated record.
    pub fn with_contact(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            address: address.into(),
        }
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Query selecting the stored document with this record's natural key.
    pub fn natural_key(&self) -> Query {
        Query::new()
            .eq(fields::FIRST_NAME, self.first_name.as_str())
            .eq(fields::LAST_NAME, self.last_name.as_str())
    }

    /// Flat field mapping written to the store on insert.
    pub fn to_fields(&self) -> Fields {
        let mut out = Fields::new();
        out.insert(fields::FIRST_NAME.into(), self.first_name.clone().into());
        out.insert(fields::LAST_NAME.into(), self.last_name.clone().into());
        out.insert(fields::PHONE_NUMBER.into(), self.phone_number.clone().into());
        out.insert(fields::ADDRESS.into(), self.address.clone().into());
        out
    }

    /// Rebuild a record from a stored document.
    ///
    /// Both name fields are required; phone number and address default to
    /// empty. Unknown fields are ignored.
    pub fn from_document(doc: &Document) -> Result<Self, StoreError> {
        serde_json::from_value(serde_json::Value::Object(doc.fields.clone())).map_err(|e| {
            StoreError::InvalidDocument {
                id: doc.id,
                reason: e.to_string(),
            }
        })
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n{}", self.full_name(), self.phone_number, self.address)
    }
}

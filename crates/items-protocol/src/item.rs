use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A persisted item. `id` and `created_at` are always assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned identifier.
    pub id: i64,
    /// Display name, never empty.
    pub name: String,
    /// Free-form description (serialized as `null` when absent).
    pub description: Option<String>,
    /// Store-assigned creation time, the listing sort key.
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /items`.
///
/// Every field is optional on the wire so that a missing `name` surfaces as a
/// [`ValidationError`] rather than a deserialization failure. Unknown fields
/// (including any client-supplied `id` or `created_at`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CreateItemRequest {
    /// Read a request from an already-parsed JSON body, reporting which field
    /// has the wrong type instead of a generic decode failure.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        let Value::Object(mut fields) = value else {
            return Err(ValidationError::NotAnObject);
        };
        Ok(Self {
            name: string_field(&mut fields, "name")?,
            description: string_field(&mut fields, "description")?,
        })
    }

    /// Validate into an insertable [`NewItem`].
    pub fn validate(self) -> Result<NewItem, ValidationError> {
        NewItem::new(self.name.unwrap_or_default(), self.description)
    }
}

fn string_field(
    fields: &mut Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    match fields.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(ValidationError::NotAString { field }),
    }
}

/// Validated insert payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    name: String,
    description: Option<String>,
}

impl NewItem {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        Ok(Self { name, description })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Client input rejected before any store access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    MissingName,

    #[error("Request body must be a JSON object")]
    NotAnObject,

    #[error("{field} must be a string")]
    NotAString { field: &'static str },
}

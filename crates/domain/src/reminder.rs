use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Fields every `Reminder` must carry when it is created
const REQUIRED_FIELDS: [&str; 4] = ["title", "day", "month", "year"];

/// The full ordered set of `Reminder`s. This is the unit of persistence.
pub type Collection = Vec<Reminder>;

/// A `Reminder` is an open JSON object owned by the client application.
///
/// Only `id`, `title`, `day`, `month` and `year` have a meaning for the
/// server, every other field is stored and returned as it was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reminder {
    fields: Map<String, Value>,
}

#[derive(Error, Debug, PartialEq)]
pub enum ShapeError {
    #[error("A reminder must be a JSON object")]
    NotAnObject,
    #[error("The reminder is missing the required field: `{0}`")]
    MissingField(&'static str),
    #[error("The reminder id must be a string")]
    InvalidId,
}

impl Reminder {
    /// Validates the shape of a candidate `Reminder` received from a client.
    ///
    /// Presence of the required fields is checked, not their content.
    pub fn from_value(value: Value) -> Result<Self, ShapeError> {
        let fields = match value {
            Value::Object(fields) => fields,
            _ => return Err(ShapeError::NotAnObject),
        };

        for &field in REQUIRED_FIELDS.iter() {
            if !is_present(field, fields.get(field)) {
                return Err(ShapeError::MissingField(field));
            }
        }

        match fields.get("id") {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(_) => return Err(ShapeError::InvalidId),
        }

        Ok(Self { fields })
    }

    /// The identifier of this `Reminder`, if it has a non empty one
    pub fn id(&self) -> Option<&str> {
        match self.fields.get("id") {
            Some(Value::String(id)) if !id.is_empty() => Some(id),
            _ => None,
        }
    }

    pub fn set_id(&mut self, id: String) {
        self.fields.insert("id".into(), Value::String(id));
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

// An empty title counts as absent, calendar fields only need a non-null value
fn is_present(field: &str, value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) if field == "title" => !s.is_empty(),
        Some(_) => true,
    }
}

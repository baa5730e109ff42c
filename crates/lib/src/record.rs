//! The record node: a named set of fields.
//!
//! A [`Record`] owns its state exclusively. Fields may hold scalars, plain containers, or
//! nested nodes; nested nodes are transparent to serialization, so a record holding
//! another record flattens into one plain mapping.

use std::collections::BTreeMap;

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    BindingError, HydrateOptions, PlainValue, Result, Value,
    hydrator,
    navigator::{self, Slot},
    path::PathBuf,
    serializer,
};

/// A record node.
///
/// `kind` names the node type, which is how a [`Collection`](crate::Collection) tells
/// whether an element was already produced by its factory.
///
/// # Examples
///
/// ```
/// # use treebind::Record;
/// # use serde_json::json;
/// let mut todo = Record::new("Todo").with("title", "write docs").with("done", false);
/// todo.set_state([("done".to_string(), true.into())]);
///
/// assert_eq!(todo.to_plain(), json!({"title": "write docs", "done": true}));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    kind: String,
    state: BTreeMap<String, Value>,
}

impl Record {
    /// Creates an empty record of the given kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            state: BTreeMap::new(),
        }
    }

    /// Creates a record whose fields are the entries of a plain mapping.
    ///
    /// # Errors
    /// Returns [`BindingError::TypeMismatch`] if `plain` is not a mapping.
    pub fn from_plain(kind: impl Into<String>, plain: PlainValue) -> Result<Self> {
        match plain {
            PlainValue::Object(map) => Ok(Self {
                kind: kind.into(),
                state: map
                    .into_iter()
                    .map(|(key, value)| (key, Value::from_plain(value)))
                    .collect(),
            }),
            other => Err(BindingError::mismatch("map", plain_type_name(&other)).into()),
        }
    }

    /// Creates a record from any serializable struct.
    pub fn from_serialize<T: Serialize>(kind: impl Into<String>, value: &T) -> Result<Self> {
        Self::from_plain(kind, serde_json::to_value(value)?)
    }

    /// Deserializes this record's plain representation into an application type.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.to_plain())?)
    }

    /// Returns the node type name
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub(crate) fn set_kind(&mut self, kind: &str) {
        if self.kind != kind {
            self.kind = kind.to_string();
        }
    }

    /// Records are never collection-kind.
    pub fn is_collection(&self) -> bool {
        false
    }

    /// Returns the raw state.
    pub fn get(&self) -> &BTreeMap<String, Value> {
        &self.state
    }

    /// Replaces the raw state wholesale.
    pub fn set(&mut self, state: BTreeMap<String, Value>) {
        self.state = state;
    }

    /// Merges the given fields into the state, overwriting only those fields.
    pub fn set_state<I, K>(&mut self, partial: I)
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        for (key, value) in partial {
            self.state.insert(key.into(), value);
        }
    }

    /// Gets a field by name
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.state.get(key)
    }

    /// Gets a mutable reference to a field by name
    pub fn field_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.state.get_mut(key)
    }

    /// Sets one field, returning the previous value if present
    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.state.insert(key.into(), value.into())
    }

    /// Removes one field, returning it if present
    pub fn remove_field(&mut self, key: &str) -> Option<Value> {
        self.state.remove(key)
    }

    /// Builder method to set a field and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_field(key, value);
        self
    }

    /// Returns the number of fields
    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Resolves a path inside this record.
    pub fn resolve(&self, path: impl Into<PathBuf>) -> Result<Slot<'_>> {
        navigator::resolve(self, &path.into())
    }

    /// Flattens this record into a plain mapping.
    pub fn to_plain(&self) -> PlainValue {
        serializer::to_plain(self)
    }

    /// Applies a plain value onto this record.
    pub fn hydrate(&mut self, plain: &PlainValue) -> Result<()> {
        hydrator::hydrate(plain, self)
    }

    /// Applies a plain value onto this record with explicit limits.
    pub fn hydrate_with(&mut self, plain: &PlainValue, options: &HydrateOptions) -> Result<()> {
        hydrator::hydrate_with(plain, self, options)
    }
}

pub(crate) fn plain_type_name(plain: &PlainValue) -> &'static str {
    match plain {
        PlainValue::Null => "null",
        PlainValue::Bool(_) => "bool",
        PlainValue::Number(_) => "number",
        PlainValue::String(_) => "text",
        PlainValue::Array(_) => "list",
        PlainValue::Object(_) => "map",
    }
}

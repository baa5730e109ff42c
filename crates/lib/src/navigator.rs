//! Path resolution against a live tree.
//!
//! Resolution walks segments left to right. A record looks the segment up as a field
//! name, a collection or plain list reads it as a position, and a plain map reads it as
//! a key. Walking into a missing value or through a scalar is an error.

use crate::{
    BindingError, Collection, Result, Value,
    node::Node,
    path::{PathBuf, as_index},
    record::Record,
};

/// A borrowed position in a tree, classified once.
///
/// [`Slot::Value`] never holds a node: record and collection values are always lifted
/// into their own variants.
#[derive(Debug, Clone, Copy)]
pub enum Slot<'a> {
    Record(&'a Record),
    Collection(&'a Collection),
    Value(&'a Value),
}

/// A mutable position in a tree, classified once.
#[derive(Debug)]
pub enum SlotMut<'a> {
    Record(&'a mut Record),
    Collection(&'a mut Collection),
    Value(&'a mut Value),
}

impl<'a> Slot<'a> {
    /// Classifies a value, lifting nodes into their own variants.
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Record(record) => Slot::Record(record),
            Value::Collection(collection) => Slot::Collection(collection),
            other => Slot::Value(other),
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, Slot::Collection(_))
    }

    pub fn as_record(&self) -> Option<&'a Record> {
        match self {
            Slot::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&'a Collection> {
        match self {
            Slot::Collection(collection) => Some(collection),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&'a Value> {
        match self {
            Slot::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Slot::Record(_) => "record",
            Slot::Collection(_) => "collection",
            Slot::Value(value) => value.type_name(),
        }
    }

    /// Flattens whatever this slot holds.
    pub fn to_plain(&self) -> crate::PlainValue {
        crate::serializer::to_plain(*self)
    }

    fn child(self, segment: &str, at: &PathBuf) -> Result<Slot<'a>> {
        let found = match self {
            Slot::Record(record) => record.field(segment).map(Slot::of),
            Slot::Collection(collection) => collection
                .get_at(parse_index(segment, at)?)
                .map(Slot::Record),
            Slot::Value(Value::List(list)) => list.get(parse_index(segment, at)?).map(Slot::of),
            Slot::Value(Value::Map(map)) => map.get(segment).map(Slot::of),
            Slot::Value(other) => {
                return Err(BindingError::unresolved(
                    at,
                    format!("cannot descend into {}", other.type_name()),
                )
                .into());
            }
        };
        found.ok_or_else(|| BindingError::unresolved(at, "no value at this path").into())
    }
}

impl<'a> SlotMut<'a> {
    /// Classifies a value, lifting nodes into their own variants.
    pub fn of(value: &'a mut Value) -> Self {
        match value {
            Value::Record(record) => SlotMut::Record(record),
            Value::Collection(collection) => SlotMut::Collection(collection),
            other => SlotMut::Value(other),
        }
    }

    /// Reborrows this slot for a shorter lifetime.
    pub fn reborrow(&mut self) -> SlotMut<'_> {
        match self {
            SlotMut::Record(record) => SlotMut::Record(&mut **record),
            SlotMut::Collection(collection) => SlotMut::Collection(&mut **collection),
            SlotMut::Value(value) => SlotMut::Value(&mut **value),
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, SlotMut::Collection(_))
    }

    fn child(self, segment: &str, at: &PathBuf) -> Result<SlotMut<'a>> {
        let found = match self {
            SlotMut::Record(record) => record.field_mut(segment).map(SlotMut::of),
            SlotMut::Collection(collection) => collection
                .get_at_mut(parse_index(segment, at)?)
                .map(SlotMut::Record),
            SlotMut::Value(Value::List(list)) => {
                list.get_mut(parse_index(segment, at)?).map(SlotMut::of)
            }
            SlotMut::Value(Value::Map(map)) => map.get_mut(segment).map(SlotMut::of),
            SlotMut::Value(other) => {
                return Err(BindingError::unresolved(
                    at,
                    format!("cannot descend into {}", other.type_name()),
                )
                .into());
            }
        };
        found.ok_or_else(|| BindingError::unresolved(at, "no value at this path").into())
    }
}

impl<'a> From<&'a Record> for Slot<'a> {
    fn from(record: &'a Record) -> Self {
        Slot::Record(record)
    }
}

impl<'a> From<&'a Collection> for Slot<'a> {
    fn from(collection: &'a Collection) -> Self {
        Slot::Collection(collection)
    }
}

impl<'a> From<&'a Value> for Slot<'a> {
    fn from(value: &'a Value) -> Self {
        Slot::of(value)
    }
}

impl<'a> From<&'a Node> for Slot<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::Record(record) => Slot::Record(record),
            Node::Collection(collection) => Slot::Collection(collection),
        }
    }
}

impl<'a> From<&'a mut Record> for SlotMut<'a> {
    fn from(record: &'a mut Record) -> Self {
        SlotMut::Record(record)
    }
}

impl<'a> From<&'a mut Collection> for SlotMut<'a> {
    fn from(collection: &'a mut Collection) -> Self {
        SlotMut::Collection(collection)
    }
}

impl<'a> From<&'a mut Value> for SlotMut<'a> {
    fn from(value: &'a mut Value) -> Self {
        SlotMut::of(value)
    }
}

impl<'a> From<&'a mut Node> for SlotMut<'a> {
    fn from(node: &'a mut Node) -> Self {
        match node {
            Node::Record(record) => SlotMut::Record(record),
            Node::Collection(collection) => SlotMut::Collection(collection),
        }
    }
}

pub(crate) fn parse_index(segment: &str, at: &PathBuf) -> Result<usize> {
    as_index(segment).ok_or_else(|| {
        BindingError::unresolved(at, format!("'{segment}' is not a list index")).into()
    })
}

/// Resolves `path` against `root`. The empty path resolves to the root itself.
///
/// # Errors
/// Returns [`BindingError::PathResolution`] when a segment is missing, is not a valid
/// index for a list, or would descend into a scalar.
pub fn resolve<'a>(root: impl Into<Slot<'a>>, path: &PathBuf) -> Result<Slot<'a>> {
    let mut current = root.into();
    let mut walked = PathBuf::new();
    for segment in path.components() {
        walked = walked.child(segment);
        current = current.child(segment, &walked)?;
    }
    Ok(current)
}

/// Mutable counterpart of [`resolve`].
pub fn resolve_mut<'a>(root: impl Into<SlotMut<'a>>, path: &PathBuf) -> Result<SlotMut<'a>> {
    let mut current = root.into();
    let mut walked = PathBuf::new();
    for segment in path.components() {
        walked = walked.child(segment);
        current = current.child(segment, &walked)?;
    }
    Ok(current)
}

//! Value types for live node trees.
//!
//! [`Value`] is the closed set of things a record field can hold. Leaf values and plain
//! containers mirror JSON; the two node variants hold live [`Record`] and [`Collection`]
//! nodes. Every traversal in this crate branches on this enum once per step.

use std::{collections::BTreeMap, fmt};

use serde_json::Number;

use crate::{Collection, PlainValue, Record, node::Node, serializer};

/// Values that can be stored in a record field.
///
/// # Value Types
///
/// ## Leaf Values
/// - [`Value::Null`], [`Value::Bool`], [`Value::Number`], [`Value::Text`]
///
/// ## Plain Containers
/// - [`Value::List`] - Ordered sequence of values
/// - [`Value::Map`] - String-keyed mapping of values
///
/// ## Nodes
/// - [`Value::Record`] - Nested record node
/// - [`Value::Collection`] - Nested collection node
///
/// ```
/// # use treebind::Value;
/// # use serde_json::json;
/// let value = Value::from_plain(json!({"tags": ["a", "b"], "count": 2}));
/// assert!(value.is_map());
/// assert_eq!(value.to_plain(), json!({"tags": ["a", "b"], "count": 2}));
///
/// assert!(Value::from("hello") == "hello");
/// assert!(Value::from(42) == 42);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Null/empty value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Numeric value, integer or float
    Number(Number),
    /// Text string value
    Text(String),
    /// Plain ordered list
    List(Vec<Value>),
    /// Plain string-keyed mapping
    Map(BTreeMap<String, Value>),
    /// Nested record node
    Record(Record),
    /// Nested collection node
    Collection(Collection),
}

impl Value {
    /// Converts a plain value into a field value. Never promotes anything to a node.
    pub fn from_plain(plain: PlainValue) -> Self {
        match plain {
            PlainValue::Null => Value::Null,
            PlainValue::Bool(b) => Value::Bool(b),
            PlainValue::Number(n) => Value::Number(n),
            PlainValue::String(s) => Value::Text(s),
            PlainValue::Array(items) => {
                Value::List(items.into_iter().map(Value::from_plain).collect())
            }
            PlainValue::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from_plain(value)))
                    .collect(),
            ),
        }
    }

    /// Flattens this value into its plain representation.
    pub fn to_plain(&self) -> PlainValue {
        serializer::to_plain(self)
    }

    /// Returns true for null, bool, number and text values
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Text(_)
        )
    }

    /// Returns true for a plain list
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns true for a plain map
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Returns true for a record node
    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Returns true for a collection node
    pub fn is_collection(&self) -> bool {
        matches!(self, Value::Collection(_))
    }

    /// Returns true for either kind of node
    pub fn is_node(&self) -> bool {
        self.is_record() || self.is_collection()
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Record(_) => "record",
            Value::Collection(_) => "collection",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            Value::Collection(collection) => Some(collection),
            _ => None,
        }
    }

    pub fn as_collection_mut(&mut self) -> Option<&mut Collection> {
        match self {
            Value::Collection(collection) => Some(collection),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{s}"),
            other => write!(f, "{}", other.to_plain()),
        }
    }
}

impl From<PlainValue> for Value {
    fn from(plain: PlainValue) -> Self {
        Value::from_plain(plain)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value.into())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        // NaN and infinities have no JSON form
        Number::from_f64(value).map_or(Value::Null, Value::Number)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Value::Map(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl From<Collection> for Value {
    fn from(value: Collection) -> Self {
        Value::Collection(value)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Record(record) => Value::Record(record),
            Node::Collection(collection) => Value::Collection(collection),
        }
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.as_i64() == Some(i64::from(*other))
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

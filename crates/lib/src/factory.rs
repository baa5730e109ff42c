//! Node factories: the declared constructor of a collection's elements.

use std::{fmt, sync::Arc};

use crate::{PlainValue, Record, Result, Value};

type BuildFn = dyn Fn(PlainValue) -> Result<Record> + Send + Sync;

/// Builds records of one kind from plain values.
///
/// Every record a factory returns is stamped with the factory's kind, so
/// [`NodeFactory::wrap`] can recognise its own output and pass it through untouched.
///
/// ```
/// # use treebind::{NodeFactory, Record, Value};
/// # use serde_json::json;
/// let factory = NodeFactory::new("Todo", |plain| {
///     let mut record = Record::from_plain("Todo", plain)?;
///     if record.field("done").is_none() {
///         record.set_field("done", false);
///     }
///     Ok(record)
/// });
///
/// let todo = factory.build(json!({"title": "x"}))?;
/// assert_eq!(todo.to_plain(), json!({"title": "x", "done": false}));
///
/// // Already-typed records pass through as-is
/// let same = factory.wrap(Value::Record(todo.clone()))?;
/// assert_eq!(same, todo);
/// # Ok::<(), treebind::Error>(())
/// ```
#[derive(Clone)]
pub struct NodeFactory {
    kind: String,
    build: Arc<BuildFn>,
}

impl NodeFactory {
    /// Creates a factory from a constructor function.
    pub fn new<F>(kind: impl Into<String>, build: F) -> Self
    where
        F: Fn(PlainValue) -> Result<Record> + Send + Sync + 'static,
    {
        Self {
            kind: kind.into(),
            build: Arc::new(build),
        }
    }

    /// Creates a factory whose records take their fields straight from a plain mapping.
    pub fn record(kind: impl Into<String>) -> Self {
        let kind = kind.into();
        let record_kind = kind.clone();
        Self::new(kind, move |plain| Record::from_plain(record_kind.as_str(), plain))
    }

    /// Returns the kind of record this factory produces
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns true if the record was produced by this factory's type.
    pub fn produces(&self, record: &Record) -> bool {
        record.kind() == self.kind
    }

    /// Constructs a new record from a plain value.
    pub fn build(&self, plain: PlainValue) -> Result<Record> {
        let mut record = (self.build)(plain)?;
        record.set_kind(&self.kind);
        Ok(record)
    }

    /// Wraps one element: records of this factory's kind pass through, anything else is
    /// flattened to plain and rebuilt.
    pub fn wrap(&self, value: Value) -> Result<Record> {
        match value {
            Value::Record(record) if self.produces(&record) => Ok(record),
            other => self.build(other.to_plain()),
        }
    }
}

impl fmt::Debug for NodeFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeFactory")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl PartialEq for NodeFactory {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

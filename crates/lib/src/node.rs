//! Root handle over the two node kinds.

use crate::{
    Collection, HydrateOptions, PlainValue, Record, Result, hydrator,
    navigator::{self, Slot},
    path::PathBuf,
    serializer,
};

/// A tree root: either a record or a collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Record(Record),
    Collection(Collection),
}

impl Node {
    /// Capability query distinguishing collection-kind from record-kind nodes.
    pub fn is_collection(&self) -> bool {
        matches!(self, Node::Collection(_))
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Node::Record(record) => Some(record),
            Node::Collection(_) => None,
        }
    }

    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            Node::Collection(collection) => Some(collection),
            Node::Record(_) => None,
        }
    }

    /// Resolves a path inside this node.
    pub fn resolve(&self, path: impl Into<PathBuf>) -> Result<Slot<'_>> {
        navigator::resolve(self, &path.into())
    }

    /// Flattens the node. An empty collection yields `[]`.
    pub fn to_plain(&self) -> PlainValue {
        serializer::to_plain(self)
    }

    pub fn hydrate(&mut self, plain: &PlainValue) -> Result<()> {
        hydrator::hydrate(plain, self)
    }

    pub fn hydrate_with(&mut self, plain: &PlainValue, options: &HydrateOptions) -> Result<()> {
        hydrator::hydrate_with(plain, self, options)
    }
}

impl From<Record> for Node {
    fn from(record: Record) -> Self {
        Node::Record(record)
    }
}

impl From<Collection> for Node {
    fn from(collection: Collection) -> Self {
        Node::Collection(collection)
    }
}

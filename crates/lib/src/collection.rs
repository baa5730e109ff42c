//! Ordered, homogeneously-typed sequences of records.
//!
//! A [`Collection`] owns its elements and the [`NodeFactory`] that made them. Anything
//! entering the collection goes through [`NodeFactory::wrap`], so every element is always
//! of the factory's kind.
//!
//! The list algebra (`order_by`, `filter`, `find`, ...) works on the plain snapshot of
//! the elements and re-wraps results through the factory, so results are fresh nodes
//! and never alias live elements. Membership (`get_index`, `delete`) compares plain
//! representations, not identity.

use std::cmp::Ordering;

use tracing::debug;

use crate::{
    BindingError, HydrateOptions, NodeFactory, PlainValue, Record, Result, Value, hydrator,
    navigator::{self, Slot},
    path::PathBuf,
    query::{self, Direction, KeySelector},
    record::plain_type_name,
    serializer,
};

/// An ordered sequence of records produced by one factory.
///
/// # Examples
///
/// ```
/// # use treebind::{Collection, Direction, KeySelector, NodeFactory};
/// # use serde_json::json;
/// let todos = Collection::from_plain(
///     json!([{"id": "a", "n": 3}, {"id": "b", "n": 1}, {"id": "c", "n": 2}]),
///     NodeFactory::record("Todo"),
/// )?;
///
/// let sorted = todos.order_by(&[KeySelector::path("n")], &[Direction::Asc])?;
/// let ids: Vec<_> = sorted.iter().map(|t| t.field("id").unwrap().to_string()).collect();
/// assert_eq!(ids, ["b", "c", "a"]);
///
/// let found = todos.find(|t| t["id"] == "c")?.unwrap();
/// assert_eq!(found.to_plain(), json!({"id": "c", "n": 2}));
/// # Ok::<(), treebind::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    factory: NodeFactory,
    elements: Vec<Record>,
}

impl Collection {
    /// Creates an empty collection.
    pub fn new(factory: NodeFactory) -> Self {
        Self {
            factory,
            elements: Vec::new(),
        }
    }

    /// Creates a collection, wrapping each initial element through the factory.
    pub fn with_elements<I>(initial: I, factory: NodeFactory) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut collection = Self::new(factory);
        collection.elements = collection.wrap(initial)?;
        Ok(collection)
    }

    /// Creates a collection from a plain list.
    pub fn from_plain(list: PlainValue, factory: NodeFactory) -> Result<Self> {
        let mut collection = Self::new(factory);
        collection.elements = collection.wrap_plain(list)?;
        Ok(collection)
    }

    /// Returns the factory every element comes from
    pub fn factory(&self) -> &NodeFactory {
        &self.factory
    }

    /// Collections are always collection-kind.
    pub fn is_collection(&self) -> bool {
        true
    }

    /// Returns the number of elements
    pub fn count(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the raw element sequence.
    pub fn get(&self) -> &[Record] {
        &self.elements
    }

    /// Replaces the element sequence, wrapping each element.
    pub fn set<I>(&mut self, list: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.elements = self.wrap(list)?;
        Ok(())
    }

    pub fn get_at(&self, index: usize) -> Option<&Record> {
        self.elements.get(index)
    }

    pub fn get_at_mut(&mut self, index: usize) -> Option<&mut Record> {
        self.elements.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.elements.iter()
    }

    /// Wraps a list through the factory. Records already of the factory's kind pass
    /// through unchanged; everything else is rebuilt from its plain form.
    pub fn wrap<I>(&self, list: I) -> Result<Vec<Record>>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        list.into_iter()
            .map(|element| self.factory.wrap(element.into()))
            .collect()
    }

    /// Wraps a plain list through the factory.
    ///
    /// # Errors
    /// Returns [`BindingError::TypeMismatch`] if `list` is not a list.
    pub fn wrap_plain(&self, list: PlainValue) -> Result<Vec<Record>> {
        match list {
            PlainValue::Array(items) => items
                .into_iter()
                .map(|item| self.factory.build(item))
                .collect(),
            other => Err(BindingError::mismatch("list", plain_type_name(&other)).into()),
        }
    }

    /// Replaces the contents with a plain list wrapped through the factory.
    ///
    /// This is what hydration does when it writes a list onto a field holding a
    /// collection. On error the contents are left untouched.
    pub fn replace_from_plain(&mut self, list: PlainValue) -> Result<()> {
        let elements = self.wrap_plain(list)?;
        debug!(
            kind = self.factory.kind(),
            from = self.elements.len(),
            to = elements.len(),
            "Replacing collection contents"
        );
        self.elements = elements;
        Ok(())
    }

    /// Appends an element.
    pub fn post(&mut self, node: impl Into<Value>) -> Result<()> {
        let record = self.factory.wrap(node.into())?;
        self.elements.push(record);
        debug!(kind = self.factory.kind(), count = self.elements.len(), "Posted element");
        Ok(())
    }

    /// Overwrites the element at `index`, or appends if there is none.
    pub fn put(&mut self, node: impl Into<Value>, index: usize) -> Result<()> {
        let record = self.factory.wrap(node.into())?;
        match self.elements.get_mut(index) {
            Some(slot) => {
                *slot = record;
                debug!(kind = self.factory.kind(), index, "Replaced element");
            }
            None => {
                self.elements.push(record);
                debug!(
                    kind = self.factory.kind(),
                    index,
                    count = self.elements.len(),
                    "No element at index, appended instead"
                );
            }
        }
        Ok(())
    }

    /// Flattens the collection. An empty collection yields `[]`.
    pub fn to_plain(&self) -> PlainValue {
        serializer::to_plain(self)
    }

    /// Plain representation of each element, in order.
    pub fn snapshot(&self) -> Vec<PlainValue> {
        self.elements.iter().map(Record::to_plain).collect()
    }

    fn rewrap(&self, plains: impl IntoIterator<Item = PlainValue>) -> Result<Vec<Record>> {
        plains
            .into_iter()
            .map(|plain| self.factory.build(plain))
            .collect()
    }

    /// Returns the elements sorted by several keys.
    ///
    /// Each key uses the direction at the same position in `directions`, defaulting to
    /// ascending. The sort is stable: elements with equal keys keep their relative order.
    pub fn order_by(&self, keys: &[KeySelector], directions: &[Direction]) -> Result<Vec<Record>> {
        let mut keyed: Vec<(Vec<PlainValue>, PlainValue)> = self
            .snapshot()
            .into_iter()
            .map(|plain| (keys.iter().map(|key| key.select(&plain)).collect(), plain))
            .collect();

        keyed.sort_by(|(a, _), (b, _)| {
            a.iter()
                .zip(b)
                .enumerate()
                .map(|(i, (x, y))| {
                    let direction = directions.get(i).copied().unwrap_or_default();
                    direction.apply(query::compare(x, y))
                })
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        });

        self.rewrap(keyed.into_iter().map(|(_, plain)| plain))
    }

    /// Returns the elements whose plain form satisfies `predicate`, in order.
    pub fn filter<P>(&self, predicate: P) -> Result<Vec<Record>>
    where
        P: Fn(&PlainValue) -> bool,
    {
        self.rewrap(self.snapshot().into_iter().filter(|plain| predicate(plain)))
    }

    /// Returns a new node for the first element satisfying `predicate`.
    pub fn find<P>(&self, predicate: P) -> Result<Option<Record>>
    where
        P: Fn(&PlainValue) -> bool,
    {
        self.snapshot()
            .into_iter()
            .find(|plain| predicate(plain))
            .map(|plain| self.factory.build(plain))
            .transpose()
    }

    /// Returns the index of the first element satisfying `predicate`.
    pub fn find_index<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(&PlainValue) -> bool,
    {
        self.elements
            .iter()
            .position(|element| predicate(&element.to_plain()))
    }

    /// Removes every element satisfying `predicate` and returns the removed nodes.
    pub fn delete_all<P>(&mut self, predicate: P) -> Vec<Record>
    where
        P: Fn(&PlainValue) -> bool,
    {
        let (removed, kept): (Vec<Record>, Vec<Record>) = std::mem::take(&mut self.elements)
            .into_iter()
            .partition(|element| predicate(&element.to_plain()));
        self.elements = kept;
        debug!(
            kind = self.factory.kind(),
            removed = removed.len(),
            remaining = self.elements.len(),
            "Deleted matching elements"
        );
        removed
    }

    /// Removes the first element equal to `node`. Returns whether anything was removed.
    pub fn delete(&mut self, node: &Record) -> bool {
        match self.get_index(node) {
            Some(index) => {
                self.elements.remove(index);
                debug!(kind = self.factory.kind(), index, "Deleted element");
                true
            }
            None => false,
        }
    }

    /// Returns the index of the first element whose plain form deep-equals `node`'s.
    pub fn get_index(&self, node: &Record) -> Option<usize> {
        let target = node.to_plain();
        self.elements
            .iter()
            .position(|element| query::plain_eq(&element.to_plain(), &target))
    }

    /// Resolves a path inside this collection; the first segment is an element index.
    pub fn resolve(&self, path: impl Into<PathBuf>) -> Result<Slot<'_>> {
        navigator::resolve(self, &path.into())
    }

    /// Applies a plain mapping onto existing elements, e.g. `{"0": {"done": true}}`.
    ///
    /// A plain list at the root is a no-op, like any root write; use
    /// [`Collection::replace_from_plain`] to swap the contents.
    pub fn hydrate(&mut self, plain: &PlainValue) -> Result<()> {
        hydrator::hydrate(plain, self)
    }

    pub fn hydrate_with(&mut self, plain: &PlainValue, options: &HydrateOptions) -> Result<()> {
        hydrator::hydrate_with(plain, self, options)
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

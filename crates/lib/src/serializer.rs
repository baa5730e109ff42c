//! Flattening a live tree into its plain representation.
//!
//! The walk accumulates a path from the root. Non-empty maps and lists extend the path
//! per entry; a nested node continues in the *same* path namespace as its parent, so
//! node boundaries never show up in the output. Scalars and empty containers are
//! leaves and are written into the output at their accumulated path.

use serde_json::Map as PlainMap;

use crate::{PlainValue, Record, Value, navigator::Slot, path::PathBuf};

/// One step of an accumulated path, remembering which kind of container it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Key(String),
    Index(usize),
}

impl Step {
    fn as_segment(&self) -> String {
        match self {
            Step::Key(key) => key.clone(),
            Step::Index(index) => index.to_string(),
        }
    }
}

/// Flattens a node (or any value) into a plain value.
///
/// A collection root that produced no leaves yields `[]`; anything else yields what was
/// written under the root path.
///
/// ```
/// # use treebind::{Collection, NodeFactory, Record, Value, serializer};
/// # use serde_json::json;
/// let inner = Record::new("Profile").with("name", "Ann");
/// let user = Record::new("User").with("profile", inner).with("tags", Value::List(Vec::new()));
/// assert_eq!(serializer::to_plain(&user), json!({"profile": {"name": "Ann"}, "tags": []}));
///
/// let empty = Collection::new(NodeFactory::record("User"));
/// assert_eq!(serializer::to_plain(&empty), json!([]));
/// ```
pub fn to_plain<'a>(node: impl Into<Slot<'a>>) -> PlainValue {
    let slot = node.into();
    let mut out: Option<PlainValue> = None;
    let mut trail = Vec::new();
    visit_slot(slot, &mut trail, &mut |steps, leaf| place(&mut out, steps, leaf));

    match out {
        Some(plain) => plain,
        None if slot.is_collection() => PlainValue::Array(Vec::new()),
        None => PlainValue::Object(PlainMap::new()),
    }
}

/// Lists every leaf of a node with its accumulated path, in traversal order.
///
/// ```
/// # use treebind::{PathBuf, Record, Value, serializer};
/// # use serde_json::json;
/// let user = Record::new("User").with("name", "Ann").with("langs", Value::List(vec![Value::from("en")]));
/// let leaves = serializer::leaves(&user);
/// assert_eq!(
///     leaves,
///     vec![
///         (PathBuf::parse("langs.0"), json!("en")),
///         (PathBuf::parse("name"), json!("Ann")),
///     ]
/// );
/// ```
pub fn leaves<'a>(node: impl Into<Slot<'a>>) -> Vec<(PathBuf, PlainValue)> {
    let mut found = Vec::new();
    let mut trail = Vec::new();
    visit_slot(node.into(), &mut trail, &mut |steps, leaf| {
        let path = steps.iter().map(Step::as_segment).collect();
        found.push((path, leaf));
    });
    found
}

type Sink<'s> = dyn FnMut(&[Step], PlainValue) + 's;

fn visit_slot(slot: Slot<'_>, trail: &mut Vec<Step>, sink: &mut Sink<'_>) {
    match slot {
        Slot::Record(record) => visit_record(record, trail, sink),
        Slot::Collection(collection) => visit_records(collection.get(), trail, sink),
        Slot::Value(value) => visit(value, trail, sink),
    }
}

fn visit(value: &Value, trail: &mut Vec<Step>, sink: &mut Sink<'_>) {
    match value {
        Value::Map(map) if !map.is_empty() => {
            for (key, child) in map {
                trail.push(Step::Key(key.clone()));
                visit(child, trail, sink);
                trail.pop();
            }
        }
        Value::List(list) if !list.is_empty() => {
            for (index, child) in list.iter().enumerate() {
                trail.push(Step::Index(index));
                visit(child, trail, sink);
                trail.pop();
            }
        }
        Value::Record(record) => visit_record(record, trail, sink),
        Value::Collection(collection) => visit_records(collection.get(), trail, sink),
        leaf => sink(trail, leaf_plain(leaf)),
    }
}

fn visit_record(record: &Record, trail: &mut Vec<Step>, sink: &mut Sink<'_>) {
    if record.is_empty() {
        sink(trail, PlainValue::Object(PlainMap::new()));
        return;
    }
    for (key, child) in record.get() {
        trail.push(Step::Key(key.clone()));
        visit(child, trail, sink);
        trail.pop();
    }
}

fn visit_records(records: &[Record], trail: &mut Vec<Step>, sink: &mut Sink<'_>) {
    if records.is_empty() {
        sink(trail, PlainValue::Array(Vec::new()));
        return;
    }
    for (index, record) in records.iter().enumerate() {
        trail.push(Step::Index(index));
        visit_record(record, trail, sink);
        trail.pop();
    }
}

fn leaf_plain(leaf: &Value) -> PlainValue {
    match leaf {
        Value::Null => PlainValue::Null,
        Value::Bool(b) => PlainValue::Bool(*b),
        Value::Number(n) => PlainValue::Number(n.clone()),
        Value::Text(s) => PlainValue::String(s.clone()),
        Value::List(_) => PlainValue::Array(Vec::new()),
        Value::Map(_) | Value::Record(_) | Value::Collection(_) => {
            PlainValue::Object(PlainMap::new())
        }
    }
}

/// Writes `leaf` into `out` at `steps`, creating intermediate containers of the kind
/// each step came from.
fn place(out: &mut Option<PlainValue>, steps: &[Step], leaf: PlainValue) {
    match steps.first() {
        None => *out = Some(leaf),
        Some(first) => {
            let root = out.get_or_insert_with(|| empty_container(first));
            place_in(root, steps, leaf);
        }
    }
}

fn place_in(target: &mut PlainValue, steps: &[Step], leaf: PlainValue) {
    let Some((step, rest)) = steps.split_first() else {
        *target = leaf;
        return;
    };
    let child = match step {
        Step::Key(key) => {
            if !target.is_object() {
                *target = PlainValue::Object(PlainMap::new());
            }
            match target {
                PlainValue::Object(map) => map.entry(key.clone()).or_insert(PlainValue::Null),
                _ => unreachable!("target was just made an object"),
            }
        }
        Step::Index(index) => {
            if !target.is_array() {
                *target = PlainValue::Array(Vec::new());
            }
            match target {
                PlainValue::Array(items) => {
                    if items.len() <= *index {
                        items.resize(*index + 1, PlainValue::Null);
                    }
                    &mut items[*index]
                }
                _ => unreachable!("target was just made an array"),
            }
        }
    };
    place_in(child, rest, leaf);
}

fn empty_container(step: &Step) -> PlainValue {
    match step {
        Step::Key(_) => PlainValue::Object(PlainMap::new()),
        Step::Index(_) => PlainValue::Array(Vec::new()),
    }
}

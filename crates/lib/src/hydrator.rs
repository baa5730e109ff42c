//! Applying plain data onto a live tree.
//!
//! Hydration walks the plain input and turns every addressable leaf into one
//! path-addressed [`write`]. Lists are leaves: a list is written as a whole and never
//! descended into. Non-empty mappings are descended into key by key, so a mapping only
//! overwrites the fields it names.
//!
//! Writes are blind and not transactional. If a later write fails, earlier writes from
//! the same call stay applied; clone the destination beforehand if you need rollback.

use tracing::{debug, trace, warn};

use crate::{
    BindingError, HydrateOptions, PlainValue, Result, Value,
    navigator::{self, SlotMut, parse_index},
    path::PathBuf,
};

/// Hydrates `root` from `plain` with default options.
///
/// ```
/// # use treebind::{Record, hydrator};
/// # use serde_json::json;
/// let mut user = Record::new("User")
///     .with("name", "Ann")
///     .with("profile", Record::new("Profile").with("bio", "-"));
///
/// hydrator::hydrate(&json!({"profile": {"bio": "Hello"}, "langs": ["en"]}), &mut user)?;
///
/// assert_eq!(
///     user.to_plain(),
///     json!({"name": "Ann", "profile": {"bio": "Hello"}, "langs": ["en"]})
/// );
/// # Ok::<(), treebind::Error>(())
/// ```
pub fn hydrate<'a>(plain: &PlainValue, root: impl Into<SlotMut<'a>>) -> Result<()> {
    hydrate_with(plain, root, &HydrateOptions::default())
}

/// Hydrates `root` from `plain`, enforcing the given limits.
///
/// # Errors
/// - [`BindingError::PathResolution`] if a write's parent path cannot be resolved
/// - [`BindingError::TypeMismatch`] if a write lands in a scalar, or a collection is
///   replaced with something other than a list of mappings
/// - [`BindingError::DepthExceeded`] if `plain` nests mappings deeper than allowed
pub fn hydrate_with<'a>(
    plain: &PlainValue,
    root: impl Into<SlotMut<'a>>,
    options: &HydrateOptions,
) -> Result<()> {
    let mut root = root.into();
    debug!(
        collection = root.is_collection(),
        max_depth = options.max_depth,
        "Hydrating tree"
    );
    visit(plain, &PathBuf::new(), 0, &mut root, options)
}

fn visit(
    plain: &PlainValue,
    path: &PathBuf,
    depth: usize,
    root: &mut SlotMut<'_>,
    options: &HydrateOptions,
) -> Result<()> {
    match plain {
        PlainValue::Object(map) if !map.is_empty() => {
            if depth >= options.max_depth {
                return Err(BindingError::DepthExceeded {
                    path: path.to_string(),
                    limit: options.max_depth,
                }
                .into());
            }
            for (key, child) in map {
                visit(child, &path.child(key.as_str()), depth + 1, root, options)?;
            }
            Ok(())
        }
        leaf => write(root.reborrow(), path, leaf.clone()).inspect_err(|err| {
            warn!(path = %path, error = %err, "Hydration write failed");
        }),
    }
}

/// Writes one plain value at `path` inside `root`.
///
/// The parent of `path` is resolved first, then the write branches on what the addressed
/// slot holds:
///
/// - a collection node: its contents are replaced by wrapping `value` (a list) through
///   the collection's factory
/// - a record parent: only that field is overwritten
/// - a collection parent: the element at that index is replaced through the factory
/// - a plain map or list parent: the entry is assigned directly
///
/// Writing at the empty path is a no-op.
pub fn write<'a>(root: impl Into<SlotMut<'a>>, path: &PathBuf, value: PlainValue) -> Result<()> {
    let Some((last_key, parent_path)) = path.split_last() else {
        trace!("Ignoring write at the root path");
        return Ok(());
    };
    trace!(path = %path, "Writing value");

    match navigator::resolve_mut(root, &parent_path)? {
        SlotMut::Record(record) => match record.field_mut(last_key) {
            Some(Value::Collection(collection)) => collection.replace_from_plain(value),
            _ => {
                record.set_state([(last_key, Value::from_plain(value))]);
                Ok(())
            }
        },
        SlotMut::Collection(collection) => {
            let index = parse_index(last_key, path)?;
            if index >= collection.count() {
                return Err(BindingError::unresolved(
                    path,
                    format!("no element {index} in a collection of {}", collection.count()),
                )
                .into());
            }
            collection.put(Value::from_plain(value), index)
        }
        SlotMut::Value(Value::Map(map)) => match map.get_mut(last_key) {
            Some(Value::Collection(collection)) => collection.replace_from_plain(value),
            _ => {
                map.insert(last_key.to_string(), Value::from_plain(value));
                Ok(())
            }
        },
        SlotMut::Value(Value::List(list)) => {
            let index = parse_index(last_key, path)?;
            let len = list.len();
            match list.get_mut(index) {
                Some(Value::Collection(collection)) => collection.replace_from_plain(value),
                Some(slot) => {
                    *slot = Value::from_plain(value);
                    Ok(())
                }
                None if index == len => {
                    list.push(Value::from_plain(value));
                    Ok(())
                }
                None => Err(BindingError::unresolved(
                    path,
                    format!("index {index} is past the end of a list of {len}"),
                )
                .into()),
            }
        }
        SlotMut::Value(other) => {
            Err(BindingError::mismatch("container", other.type_name()).into())
        }
    }
}

//! Ordering and matching helpers over plain values.
//!
//! These back the collection algebra: [`KeySelector`] picks sort keys out of an element's
//! plain form, [`compare`] gives plain values a total order, and [`matches`] /
//! [`property_eq`] build predicates for `filter`, `find` and friends.

use std::{cmp::Ordering, fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
    PlainValue,
    path::{PathBuf, as_index},
};

/// Sort direction for one key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Applies this direction to an ascending comparison.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            other => Err(format!("unknown sort direction '{other}'")),
        }
    }
}

type SelectFn = dyn Fn(&PlainValue) -> PlainValue + Send + Sync;

/// Extracts a sort key from an element's plain representation.
#[derive(Clone)]
pub enum KeySelector {
    /// A (possibly nested) property path; missing properties select `null`
    Path(PathBuf),
    /// An arbitrary function of the element
    Func(Arc<SelectFn>),
}

impl KeySelector {
    pub fn path(path: &str) -> Self {
        KeySelector::Path(PathBuf::parse(path))
    }

    pub fn func<F>(select: F) -> Self
    where
        F: Fn(&PlainValue) -> PlainValue + Send + Sync + 'static,
    {
        KeySelector::Func(Arc::new(select))
    }

    /// Selects the key for one element.
    pub fn select(&self, element: &PlainValue) -> PlainValue {
        match self {
            KeySelector::Path(path) => lookup(element, path).cloned().unwrap_or(PlainValue::Null),
            KeySelector::Func(select) => select(element),
        }
    }
}

impl From<&str> for KeySelector {
    fn from(path: &str) -> Self {
        KeySelector::path(path)
    }
}

impl fmt::Debug for KeySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySelector::Path(path) => f.debug_tuple("Path").field(path).finish(),
            KeySelector::Func(_) => f.write_str("Func(..)"),
        }
    }
}

/// Looks a path up inside a plain value. Segments index lists and key maps.
pub fn lookup<'a>(plain: &'a PlainValue, path: &PathBuf) -> Option<&'a PlainValue> {
    path.components().try_fold(plain, |current, segment| match current {
        PlainValue::Object(map) => map.get(segment),
        PlainValue::Array(items) => items.get(as_index(segment)?),
        _ => None,
    })
}

fn kind_rank(plain: &PlainValue) -> u8 {
    match plain {
        PlainValue::Number(_) => 0,
        PlainValue::String(_) => 1,
        PlainValue::Bool(_) => 2,
        PlainValue::Array(_) => 3,
        PlainValue::Object(_) => 4,
        PlainValue::Null => 5,
    }
}

/// Total ascending order over plain values.
///
/// Values of the same kind compare naturally (lists lexicographically, maps as equal).
/// Different kinds order as numbers, text, bools, lists, maps, then null, so missing
/// keys sort last in ascending order.
///
/// ```
/// # use treebind::query::compare;
/// # use serde_json::json;
/// # use std::cmp::Ordering;
/// assert_eq!(compare(&json!(1), &json!(2.5)), Ordering::Less);
/// assert_eq!(compare(&json!("b"), &json!("a")), Ordering::Greater);
/// assert_eq!(compare(&json!(null), &json!(0)), Ordering::Greater);
/// ```
pub fn compare(a: &PlainValue, b: &PlainValue) -> Ordering {
    match (a, b) {
        (PlainValue::Number(x), PlainValue::Number(y)) => match (x.as_i64(), y.as_i64()) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => {
                let x = x.as_f64().unwrap_or(f64::NAN);
                let y = y.as_f64().unwrap_or(f64::NAN);
                x.total_cmp(&y)
            }
        },
        (PlainValue::String(x), PlainValue::String(y)) => x.cmp(y),
        (PlainValue::Bool(x), PlainValue::Bool(y)) => x.cmp(y),
        (PlainValue::Array(x), PlainValue::Array(y)) => x
            .iter()
            .zip(y)
            .map(|(x, y)| compare(x, y))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| x.len().cmp(&y.len())),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

/// Structural equality that treats `1` and `1.0` as the same number.
pub fn plain_eq(a: &PlainValue, b: &PlainValue) -> bool {
    match (a, b) {
        (PlainValue::Number(x), PlainValue::Number(y)) => {
            x == y || matches!((x.as_f64(), y.as_f64()), (Some(x), Some(y)) if x == y)
        }
        (PlainValue::Array(x), PlainValue::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| plain_eq(x, y))
        }
        (PlainValue::Object(x), PlainValue::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(key, x)| y.get(key).is_some_and(|y| plain_eq(x, y)))
        }
        _ => a == b,
    }
}

/// Partial deep match: every entry in `pattern` must be present in `value`.
///
/// Maps match when each pattern key matches; lists match when every pattern element
/// matches some element of the value; anything else must be equal.
pub fn is_match(value: &PlainValue, pattern: &PlainValue) -> bool {
    match (value, pattern) {
        (PlainValue::Object(value), PlainValue::Object(pattern)) => pattern
            .iter()
            .all(|(key, expected)| value.get(key).is_some_and(|actual| is_match(actual, expected))),
        (PlainValue::Array(value), PlainValue::Array(pattern)) => pattern
            .iter()
            .all(|expected| value.iter().any(|actual| is_match(actual, expected))),
        _ => plain_eq(value, pattern),
    }
}

/// Builds a predicate that partially matches elements against `pattern`.
///
/// ```
/// # use treebind::query::matches;
/// # use serde_json::json;
/// let open = matches(json!({"done": false}));
/// assert!(open(&json!({"id": "a", "done": false})));
/// assert!(!open(&json!({"id": "b", "done": true})));
/// ```
pub fn matches(pattern: PlainValue) -> impl Fn(&PlainValue) -> bool + Send + Sync + 'static {
    move |value| is_match(value, &pattern)
}

/// Builds a predicate comparing the property at `path` with `expected`.
///
/// ```
/// # use treebind::query::property_eq;
/// # use serde_json::json;
/// let by_city = property_eq("address.city", "Oslo");
/// assert!(by_city(&json!({"address": {"city": "Oslo"}})));
/// assert!(!by_city(&json!({"address": {}})));
/// ```
pub fn property_eq(
    path: &str,
    expected: impl Into<PlainValue>,
) -> impl Fn(&PlainValue) -> bool + Send + Sync + 'static {
    let path = PathBuf::parse(path);
    let expected = expected.into();
    move |value| lookup(value, &path).is_some_and(|actual| plain_eq(actual, &expected))
}

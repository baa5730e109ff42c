//! Collection list algebra tests

use serde_json::json;
use treebind::{
    Collection, Direction, KeySelector, Record, Value,
    query::{matches, property_eq},
};

use crate::helpers::*;

#[test]
fn test_construct_wraps_non_conforming_elements() {
    let already = defaulting_todo_factory().build(json!({"id": "a"})).unwrap();
    let foreign = Record::new("Draft").with("id", "b");

    let collection = Collection::with_elements(
        vec![Value::from(already.clone()), Value::from(foreign), Value::from_plain(json!({"id": "c"}))],
        defaulting_todo_factory(),
    )
    .unwrap();

    assert_eq!(collection.count(), 3);
    assert_eq!(collection.get_at(0), Some(&already));
    assert!(collection.iter().all(|todo| todo.kind() == "Todo"));
    assert_eq!(
        collection.to_plain(),
        json!([
            {"id": "a", "done": false},
            {"id": "b", "done": false},
            {"id": "c", "done": false}
        ])
    );
}

#[test]
fn test_wrapping_twice_is_identity() {
    let collection = todos(json!([{"id": "a"}, {"id": "b"}]));
    let rewrapped = collection.wrap(collection.get().iter().cloned()).unwrap();
    assert_eq!(rewrapped.as_slice(), collection.get());
}

#[test]
fn test_wrap_plain_requires_list() {
    let collection = Collection::new(todo_factory());
    assert!(collection.wrap_plain(json!({"id": "a"})).unwrap_err().is_type_error());
    assert!(Collection::from_plain(json!("nope"), todo_factory()).is_err());
}

#[test]
fn test_post_appends_exactly_one() {
    let mut collection = todos(json!([{"id": "a"}]));

    collection.post(Value::from_plain(json!({"id": "b"}))).unwrap();
    assert_eq!(collection.count(), 2);

    let prewrapped = todo_factory().build(json!({"id": "c"})).unwrap();
    collection.post(prewrapped.clone()).unwrap();
    assert_eq!(collection.count(), 3);
    assert_eq!(collection.get().last(), Some(&prewrapped));
}

#[test]
fn test_put_overwrites_in_range() {
    let mut collection = todos(json!([{"id": "a"}, {"id": "b"}, {"id": "c"}]));
    collection
        .put(Value::from_plain(json!({"id": "B"})), 1)
        .unwrap();
    assert_eq!(collection.to_plain(), json!([{"id": "a"}, {"id": "B"}, {"id": "c"}]));
}

#[test]
fn test_put_out_of_range_posts() {
    let mut collection = todos(json!([{"id": "a"}, {"id": "b"}, {"id": "c"}]));
    collection
        .put(Value::from_plain(json!({"id": "d"})), 5)
        .unwrap();
    assert_eq!(collection.count(), 4);
    assert_eq!(collection.to_plain()[3], json!({"id": "d"}));
}

#[test]
fn test_order_by_single_key() {
    let collection = todos(json!([{"n": 3}, {"n": 1}, {"n": 2}]));

    let asc = collection.order_by(&["n".into()], &[Direction::Asc]).unwrap();
    assert_eq!(plains(&asc), vec![json!({"n": 1}), json!({"n": 2}), json!({"n": 3})]);

    let desc = collection.order_by(&["n".into()], &[Direction::Desc]).unwrap();
    assert_eq!(plains(&desc), vec![json!({"n": 3}), json!({"n": 2}), json!({"n": 1})]);

    // The live sequence is untouched
    assert_eq!(collection.to_plain(), json!([{"n": 3}, {"n": 1}, {"n": 2}]));
}

#[test]
fn test_order_by_is_stable() {
    let collection = todos(json!([
        {"n": 1, "id": "first"},
        {"n": 0, "id": "zero"},
        {"n": 1, "id": "second"},
        {"n": 1, "id": "third"}
    ]));

    let sorted = collection.order_by(&["n".into()], &[]).unwrap();
    let ids: Vec<_> = sorted.iter().map(|r| r.to_plain()["id"].clone()).collect();
    assert_eq!(ids, vec![json!("zero"), json!("first"), json!("second"), json!("third")]);
}

#[test]
fn test_order_by_multiple_keys_and_directions() {
    let collection = todos(json!([
        {"group": "b", "n": 1},
        {"group": "a", "n": 1},
        {"group": "b", "n": 2},
        {"group": "a", "n": 2}
    ]));

    let sorted = collection
        .order_by(
            &[KeySelector::path("group"), KeySelector::path("n")],
            &[Direction::Asc, Direction::Desc],
        )
        .unwrap();

    assert_eq!(
        plains(&sorted),
        vec![
            json!({"group": "a", "n": 2}),
            json!({"group": "a", "n": 1}),
            json!({"group": "b", "n": 2}),
            json!({"group": "b", "n": 1}),
        ]
    );
}

#[test]
fn test_order_by_function_and_missing_keys() {
    let collection = todos(json!([{"name": "ccc"}, {}, {"name": "a"}]));

    let by_len = KeySelector::func(|plain| json!(plain["name"].as_str().map(str::len)));
    let sorted = collection.order_by(&[by_len], &[Direction::Asc]).unwrap();

    // Missing keys select null, which sorts last ascending
    assert_eq!(
        plains(&sorted),
        vec![json!({"name": "a"}), json!({"name": "ccc"}), json!({})]
    );
}

#[test]
fn test_filter_preserves_order() {
    let collection = todos(json!([{"id": "a"}, {"id": "b", "n": 1}, {"id": "b", "n": 2}]));

    let bs = collection.filter(|todo| todo["id"] == "b").unwrap();
    assert_eq!(
        plains(&bs),
        vec![json!({"id": "b", "n": 1}), json!({"id": "b", "n": 2})]
    );
    assert!(bs.iter().all(|todo| todo.kind() == "Todo"));
}

#[test]
fn test_filter_with_shorthands() {
    let collection = todos(json!([
        {"id": "a", "done": true, "owner": {"name": "ann"}},
        {"id": "b", "done": false, "owner": {"name": "bob"}}
    ]));

    let done = collection.filter(matches(json!({"done": true}))).unwrap();
    assert_eq!(done.len(), 1);

    let bobs = collection.filter(property_eq("owner.name", "bob")).unwrap();
    assert_eq!(bobs[0].to_plain()["id"], json!("b"));
}

#[test]
fn test_find_and_find_index() {
    let collection = todos(json!([{"id": "a"}, {"id": "b"}]));

    let found = collection.find(|todo| todo["id"] == "b").unwrap().unwrap();
    assert_eq!(found.to_plain(), json!({"id": "b"}));
    assert_eq!(found.kind(), "Todo");

    assert!(collection.find(|todo| todo["id"] == "z").unwrap().is_none());

    assert_eq!(collection.find_index(|todo| todo["id"] == "b"), Some(1));
    assert_eq!(collection.find_index(|todo| todo["id"] == "z"), None);
}

#[test]
fn test_results_do_not_alias_live_elements() {
    let collection = todos(json!([{"id": "a"}]));
    let mut found = collection.find(|_| true).unwrap().unwrap();
    found.set_field("id", "changed");
    assert_eq!(collection.to_plain(), json!([{"id": "a"}]));
}

#[test]
fn test_delete_all_removes_from_live_sequence() {
    let mut collection = todos(json!([
        {"id": "a", "done": true},
        {"id": "b", "done": false},
        {"id": "c", "done": true}
    ]));

    let removed = collection.delete_all(matches(json!({"done": true})));

    assert_eq!(removed.len(), 2);
    assert_eq!(collection.to_plain(), json!([{"id": "b", "done": false}]));

    assert!(collection.delete_all(|_| false).is_empty());
    assert_eq!(collection.count(), 1);
}

#[test]
fn test_delete_is_idempotent() {
    let mut collection = todos(json!([{"id": "a"}, {"id": "b"}, {"id": "a"}]));
    let target = todo_factory().build(json!({"id": "a"})).unwrap();

    assert!(collection.delete(&target));
    assert_eq!(collection.to_plain(), json!([{"id": "b"}, {"id": "a"}]));

    assert!(collection.delete(&target));
    assert!(!collection.delete(&target));
    assert_eq!(collection.to_plain(), json!([{"id": "b"}]));
}

#[test]
fn test_get_index_uses_structural_equality() {
    let collection = todos(json!([{"id": "a", "n": 1}, {"id": "b", "n": 2}]));

    // A record of a different kind with the same plain form still matches
    let lookalike = Record::new("Other").with("id", "b").with("n", 2);
    assert_eq!(collection.get_index(&lookalike), Some(1));

    let partial = Record::new("Todo").with("id", "b");
    assert_eq!(collection.get_index(&partial), None);
}

#[test]
fn test_set_replaces_sequence() {
    let mut collection = todos(json!([{"id": "a"}]));
    collection
        .set(vec![Value::from_plain(json!({"id": "x"})), Value::from_plain(json!({"id": "y"}))])
        .unwrap();
    assert_eq!(collection.count(), 2);
    assert!(collection.iter().all(|todo| todo.kind() == "Todo"));
}

#[test]
fn test_empty_collection() {
    let collection = Collection::new(todo_factory());
    assert!(collection.is_empty());
    assert_eq!(collection.to_plain(), json!([]));
    assert!(collection.order_by(&["n".into()], &[]).unwrap().is_empty());
    assert!(collection.find(|_| true).unwrap().is_none());
}

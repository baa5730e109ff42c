//! Flattening tests

use serde_json::json;
use treebind::{Collection, PathBuf, Record, Value, serializer};

use crate::helpers::*;

#[test]
fn test_nested_nodes_collapse_into_parent_namespace() {
    let profile = Record::new("Profile").with("bio", "hi");
    let user = Record::new("User")
        .with("name", "Ann")
        .with("profile", profile)
        .with("todos", todos(json!([{"id": "a"}])));

    assert_eq!(
        user.to_plain(),
        json!({"name": "Ann", "profile": {"bio": "hi"}, "todos": [{"id": "a"}]})
    );
}

#[test]
fn test_empty_collection_serializes_to_list() {
    let empty = Collection::new(todo_factory());
    assert_eq!(empty.to_plain(), json!([]));

    let holder = Record::new("Holder").with("todos", empty);
    assert_eq!(holder.to_plain(), json!({"todos": []}));
}

#[test]
fn test_nested_plain_containers() {
    let record = Record::new("R").with(
        "grid",
        Value::from_plain(json!([[1, 2], [], [{"x": null}]])),
    );
    assert_eq!(record.to_plain(), json!({"grid": [[1, 2], [], [{"x": null}]]}));
}

#[test]
fn test_leaves_list_every_addressable_value() {
    let mut list = todo_list_template();
    list.hydrate(&sample_todo_list()).unwrap();

    let leaves = serializer::leaves(&list);
    assert!(leaves.contains(&(PathBuf::parse("owner.langs.1"), json!("nb"))));
    assert!(leaves.contains(&(PathBuf::parse("todos.1.done"), json!(true))));
    assert!(leaves.contains(&(PathBuf::parse("title"), json!("chores"))));
}

#[test]
fn test_serialize_typed_record() {
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Todo {
        id: String,
        done: bool,
    }

    let todo = Todo {
        id: "a".to_string(),
        done: true,
    };
    let record = Record::from_serialize("Todo", &todo).unwrap();
    assert_eq!(record.to_plain(), json!({"id": "a", "done": true}));
    assert_eq!(record.deserialize_into::<Todo>().unwrap(), todo);
}

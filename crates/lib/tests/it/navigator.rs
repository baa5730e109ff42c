//! Path resolution tests against hydrated trees

use serde_json::json;
use treebind::{Node, PathBuf, Slot, SlotMut, Value, navigator};

use crate::helpers::*;

#[test]
fn test_resolve_through_nested_nodes() {
    let mut list = todo_list_template();
    list.hydrate(&sample_todo_list()).unwrap();

    let owner = list.resolve("owner").unwrap();
    assert_eq!(owner.as_record().map(|r| r.kind()), Some("User"));

    let lang = list.resolve("owner.langs.1").unwrap();
    assert_eq!(lang.as_value(), Some(&Value::from("nb")));

    let done = list.resolve("|todos.1.done|").unwrap();
    assert_eq!(done.to_plain(), json!(true));

    let todos = list.resolve("todos").unwrap();
    assert!(todos.is_collection());
    assert_eq!(todos.type_name(), "collection");
}

#[test]
fn test_resolve_on_collection_root() {
    let todos = todos(json!([{"id": "a"}, {"id": "b"}]));
    let second = todos.resolve("1.id").unwrap();
    assert_eq!(second.to_plain(), json!("b"));

    let node = Node::from(todos);
    assert!(matches!(node.resolve("0").unwrap(), Slot::Record(_)));
}

#[test]
fn test_resolve_errors_report_the_walked_path() {
    let list = todo_list_template();
    let err = list.resolve("owner.address.city").unwrap_err();
    assert!(err.is_path_error());
    assert!(err.to_string().contains("owner.address"));
}

#[test]
fn test_resolve_mut_reaches_collection_element() {
    let mut list = todo_list_template();
    list.hydrate(&sample_todo_list()).unwrap();

    if let SlotMut::Record(todo) =
        navigator::resolve_mut(&mut list, &PathBuf::parse("todos.0")).unwrap()
    {
        todo.set_field("done", true);
    }
    assert_eq!(list.to_plain()["todos"][0]["done"], json!(true));
}

#[test]
fn test_non_canonical_indexes_do_not_resolve() {
    let todos = todos(json!([{"id": "a"}, {"id": "b"}]));

    assert_eq!(todos.resolve("1.id").unwrap().to_plain(), json!("b"));
    assert_eq!(todos.resolve("0.id").unwrap().to_plain(), json!("a"));
    for path in ["+1.id", "01.id", "-0.id"] {
        let err = todos.resolve(path).unwrap_err();
        assert!(err.is_path_error(), "Path '{path}'");
    }
}

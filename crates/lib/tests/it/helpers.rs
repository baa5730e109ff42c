use serde_json::json;
use treebind::{Collection, NodeFactory, PlainValue, Record, Value};

/// Factory for plain todo records
pub fn todo_factory() -> NodeFactory {
    NodeFactory::record("Todo")
}

/// Factory that fills in `done: false` when the input omits it
pub fn defaulting_todo_factory() -> NodeFactory {
    NodeFactory::new("Todo", |plain| {
        let mut record = Record::from_plain("Todo", plain)?;
        if record.field("done").is_none() {
            record.set_field("done", false);
        }
        Ok(record)
    })
}

/// Create a collection of todos from a plain list
pub fn todos(plain: PlainValue) -> Collection {
    Collection::from_plain(plain, todo_factory()).expect("Failed to build todo collection")
}

/// Create a todo list template: a title, an owner record and an empty todo collection
pub fn todo_list_template() -> Record {
    Record::new("TodoList")
        .with("title", "")
        .with("owner", Record::new("User").with("name", "").with("langs", Value::List(vec![])))
        .with("todos", Collection::new(todo_factory()))
}

/// A plain value matching the shape of [`todo_list_template`]
pub fn sample_todo_list() -> PlainValue {
    json!({
        "title": "chores",
        "owner": {"name": "Ann", "langs": ["en", "nb"]},
        "todos": [
            {"id": "a", "title": "dishes", "done": false},
            {"id": "b", "title": "laundry", "done": true}
        ]
    })
}

/// Collect the plain form of every record in a slice
pub fn plains(records: &[Record]) -> Vec<PlainValue> {
    records.iter().map(Record::to_plain).collect()
}

//! Path parsing and construction tests

use treebind::{PathBuf, path, path::split};

#[test]
fn test_split_basic() {
    assert_eq!(split("a.b.c"), vec!["a", "b", "c"]);
    assert_eq!(split("todos.0.done"), vec!["todos", "0", "done"]);
}

#[test]
fn test_split_trims_pipe_and_dot_runs() {
    assert_eq!(split("|a.b|"), vec!["a", "b"]);
    assert_eq!(split("..|a.b|.."), vec!["a", "b"]);
    assert_eq!(split("a..b"), vec!["a", "b"]);
}

#[test]
fn test_split_empty_inputs() {
    assert!(split("").is_empty());
    assert!(split("...").is_empty());
    assert!(split("|").is_empty());
}

#[test]
fn test_pathbuf_builders_agree() {
    let parsed: PathBuf = "owner.name".parse().unwrap();
    assert_eq!(parsed, PathBuf::new().push("owner").push("name"));
    assert_eq!(parsed, path!("owner", "name"));
    assert_eq!(parsed, ["owner", "name"].into_iter().collect::<PathBuf>());
    assert_eq!(parsed.to_string(), "owner.name");
}

#[test]
fn test_child_keeps_dotted_segment() {
    let path = PathBuf::parse("headers").child("content.type");
    assert_eq!(path.len(), 2);
    assert_eq!(path.last(), Some("content.type"));
}

#[test]
fn test_child_keeps_empty_segment() {
    let path = PathBuf::parse("meta").child("");
    assert_eq!(path.len(), 2);
    assert_eq!(path.last(), Some(""));
    assert_eq!(path.parent(), Some(PathBuf::parse("meta")));
}

#[test]
fn test_path_macro_single_number() {
    assert_eq!(path!(3), PathBuf::parse("3"));
    assert_eq!(path!("todos"), PathBuf::parse("todos"));
}

#[test]
fn test_split_last() {
    let path = PathBuf::parse("todos.1.done");
    let (last, parent) = path.split_last().unwrap();
    assert_eq!(last, "done");
    assert_eq!(parent, PathBuf::parse("todos.1"));
    assert!(PathBuf::new().split_last().is_none());
}

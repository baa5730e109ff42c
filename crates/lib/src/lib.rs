//!
//! Treebind: a path-addressable data-binding core.
//! This library keeps a live tree of typed nodes and converts it to and from a
//! JSON-compatible plain representation.
//!
//! ## Core Concepts
//!
//! * **Records (`record::Record`)**: Nodes holding named fields. A field can be a scalar,
//!   a plain list or map, or another node.
//! * **Collections (`collection::Collection`)**: Ordered sequences of records that all come
//!   from one [`NodeFactory`]. They provide list algebra (sort, filter, find, delete, insert)
//!   computed over their plain snapshot.
//! * **Paths (`path::PathBuf`)**: Dot (or pipe) delimited addresses into a tree.
//! * **Plain values (`PlainValue`)**: The `serde_json::Value` boundary type used for all
//!   data interchange.
//! * **Serialization (`serializer`)**: Flattens a live tree into a plain value, with node
//!   boundaries transparent to the output.
//! * **Hydration (`hydrator`)**: Applies a plain value onto a live tree as a sequence of
//!   path-addressed writes.
//!
//! ```
//! use treebind::{Collection, NodeFactory, Record};
//! use serde_json::json;
//!
//! let mut list = Record::new("TodoList");
//! list.set_field("todos", Collection::new(NodeFactory::record("Todo")));
//!
//! list.hydrate(&json!({"title": "chores", "todos": [{"id": "a", "done": false}]}))?;
//!
//! let todos = list.field("todos").and_then(|v| v.as_collection()).unwrap();
//! assert_eq!(todos.count(), 1);
//! assert_eq!(todos.get_at(0).unwrap().kind(), "Todo");
//! assert_eq!(
//!     list.to_plain(),
//!     json!({"title": "chores", "todos": [{"id": "a", "done": false}]})
//! );
//! # Ok::<(), treebind::Error>(())
//! ```

pub mod collection;
pub mod config;
pub mod errors;
pub mod factory;
pub mod hydrator;
pub mod navigator;
pub mod node;
pub mod path;
pub mod query;
pub mod record;
pub mod serializer;
pub mod value;

pub use collection::Collection;
pub use config::HydrateOptions;
pub use errors::BindingError;
pub use factory::NodeFactory;
pub use navigator::{Slot, SlotMut};
pub use node::Node;
pub use path::PathBuf;
pub use query::{Direction, KeySelector};
pub use record::Record;
pub use value::Value;

/// The JSON-compatible boundary type for all input and output.
pub type PlainValue = serde_json::Value;

/// Result type used throughout the Treebind library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Treebind library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured path and shape errors from tree traversal and writes
    #[error(transparent)]
    Binding(errors::BindingError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Binding(_) => "binding",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error came from resolving a path.
    pub fn is_path_error(&self) -> bool {
        match self {
            Error::Binding(err) => err.is_path_error(),
            _ => false,
        }
    }

    /// Check if this error indicates a container was expected but a scalar was found.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Binding(err) => err.is_type_error(),
            _ => false,
        }
    }
}

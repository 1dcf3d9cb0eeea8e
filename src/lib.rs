pub mod api;
pub mod classify;
pub mod error;
pub mod options;
pub mod parser;
pub mod scanner;
pub mod tree;
pub mod utils;

pub use api::{delete, get, parse, parse_with_options};
pub use error::{ErrorKind, JsonError};
pub use options::{ParseOptions, DEFAULT_MAX_DEPTH};
pub use tree::{Document, Node, NodeType, Sibling, Value};

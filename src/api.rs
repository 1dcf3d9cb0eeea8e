use crate::error::JsonError;
use crate::options::ParseOptions;
use crate::parser::Parser;
use crate::tree::{Document, Node};

/// Parses a JSON document whose root is an object.
///
/// Anything before the first `{` is skipped. On failure nothing is left for
/// the caller to clean up: every node built so far has already been released.
///
/// # Errors
///
/// Returns a [`JsonError`] describing the first production that rejected the
/// input, with its byte offset and a renderable diagnostic.
///
/// # Example
///
/// ```
/// let doc = jsontree::parse(r#"{"name": "demo", "tags": ["a", "b"]}"#).unwrap();
/// assert_eq!(doc.get("name").and_then(|n| n.as_str()), Some("demo"));
/// assert_eq!(doc.get("tags").map(|t| t.len()), Some(2));
/// ```
pub fn parse(source: &str) -> Result<Document, JsonError> {
    Parser::new(source).parse_document()
}

/// [`parse`] with explicit [`ParseOptions`].
///
/// # Errors
///
/// Same as [`parse`], plus [`ErrorKind::DepthLimitExceeded`](crate::ErrorKind::DepthLimitExceeded)
/// when nesting goes past `options.max_depth`.
pub fn parse_with_options(source: &str, options: ParseOptions) -> Result<Document, JsonError> {
    Parser::with_options(source, options).parse_document()
}

/// Looks `key` up among the immediate members of an object node.
///
/// Accepts `None` so that lookups can be chained; a missing node, a node
/// that is not an object and a key with no match all yield `None`. With
/// duplicate keys the first member wins.
pub fn get<'a>(node: impl Into<Option<&'a Node>>, key: &str) -> Option<&'a Node> {
    node.into()?.get(key)
}

/// Releases a document, returning how many nodes were released.
///
/// Passing `None` is a no-op that returns `0`.
pub fn delete(document: impl Into<Option<Document>>) -> usize {
    document.into().map_or(0, Document::delete)
}

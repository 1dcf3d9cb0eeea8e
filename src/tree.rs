use std::fmt;
use std::mem;

/// The type tag of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Null,
    Bool,
    Array,
    Object,
    Integer,
    Double,
    String,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeType::Null => "null",
            NodeType::Bool => "bool",
            NodeType::Array => "array",
            NodeType::Object => "object",
            NodeType::Integer => "integer",
            NodeType::Double => "double",
            NodeType::String => "string",
        };
        f.write_str(name)
    }
}

/// The payload of a [`Node`]. Containers own their children in encounter order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Double(f64),
    /// Raw text between the quotes, escapes left undecoded.
    String(String),
    Array(Vec<Node>),
    Object(Vec<Node>),
}

impl Value {
    #[must_use]
    pub fn node_type(&self) -> NodeType {
        match self {
            Value::Null => NodeType::Null,
            Value::Bool(_) => NodeType::Bool,
            Value::Integer(_) => NodeType::Integer,
            Value::Double(_) => NodeType::Double,
            Value::String(_) => NodeType::String,
            Value::Array(_) => NodeType::Array,
            Value::Object(_) => NodeType::Object,
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Value::Array(children) | Value::Object(children) => Some(children),
            _ => None,
        }
    }
}

/// One parsed JSON value.
///
/// A node carries a key exactly when its parent is an object. Nodes are only
/// built by the parser, so that invariant cannot be broken from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    key: Option<String>,
    value: Value,
}

impl Node {
    pub(crate) fn element(value: Value) -> Self {
        Self { key: None, value }
    }

    pub(crate) fn member(key: String, value: Value) -> Self {
        Self {
            key: Some(key),
            value,
        }
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[must_use]
    pub fn node_type(&self) -> NodeType {
        self.value.node_type()
    }

    /// Finds the first immediate child whose key equals `key` byte for byte.
    ///
    /// Returns `None` when this node is not an object or no member matches.
    /// Nested containers are not searched.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.members().iter().find(|m| m.key() == Some(key))
    }

    /// Every immediate child keyed `key`, in encounter order. Objects keep
    /// duplicate keys, so this is how later duplicates are reached.
    #[must_use]
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.members().iter().filter(move |m| m.key() == Some(key))
    }

    /// The `index`-th child of an array or object.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Node> {
        self.child_slice().get(index)
    }

    /// Children of an array or object, in order. Empty for scalars.
    pub fn children(&self) -> std::slice::Iter<'_, Node> {
        self.child_slice().iter()
    }

    /// A cursor on the first child of the sibling chain, if there is one.
    #[must_use]
    pub fn first_child(&self) -> Option<Sibling<'_>> {
        Sibling::new(self.child_slice(), 0)
    }

    /// A cursor on the last child of the sibling chain, if there is one.
    #[must_use]
    pub fn last_child(&self) -> Option<Sibling<'_>> {
        let chain = self.child_slice();
        Sibling::new(chain, chain.len().checked_sub(1)?)
    }

    /// Number of children. Zero for scalars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.child_slice().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.child_slice().is_empty()
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self.value, Value::Null)
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self.value {
            Value::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Doubles as-is, integers widened.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self.value {
            Value::Double(n) => Some(n),
            Value::Integer(n) => Some(n as f64),
            _ => None,
        }
    }

    /// The raw string text, escapes undecoded.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    fn members(&self) -> &[Node] {
        match &self.value {
            Value::Object(members) => members,
            _ => &[],
        }
    }

    fn child_slice(&self) -> &[Node] {
        match &self.value {
            Value::Array(children) | Value::Object(children) => children,
            _ => &[],
        }
    }

    /// Releases every descendant of this node without recursing, returning
    /// how many were released.
    pub(crate) fn teardown(&mut self) -> usize {
        let mut pending = match self.value.children_mut() {
            Some(children) => mem::take(children),
            None => return 0,
        };
        let mut released = 0;
        while let Some(mut node) = pending.pop() {
            if let Some(children) = node.value.children_mut() {
                pending.append(children);
            }
            released += 1;
            // `node` is childless now, so its own drop does not recurse.
        }
        released
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// A position in a sibling chain, able to step to either neighbor.
#[derive(Debug, Clone, Copy)]
pub struct Sibling<'a> {
    chain: &'a [Node],
    index: usize,
}

impl<'a> Sibling<'a> {
    fn new(chain: &'a [Node], index: usize) -> Option<Self> {
        (index < chain.len()).then_some(Self { chain, index })
    }

    #[must_use]
    pub fn node(&self) -> &'a Node {
        &self.chain[self.index]
    }

    /// Position within the chain, starting at zero.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> Option<Sibling<'a>> {
        Sibling::new(self.chain, self.index + 1)
    }

    #[must_use]
    pub fn prev(&self) -> Option<Sibling<'a>> {
        Sibling::new(self.chain, self.index.checked_sub(1)?)
    }
}

/// A parsed JSON document. The root is always a keyless object node.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub(crate) root: Node,
}

impl Document {
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Looks `key` up among the root object's members.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.root.get(key)
    }

    /// Releases the whole tree, returning the number of nodes released,
    /// the root included.
    pub fn delete(mut self) -> usize {
        let released = self.root.teardown() + 1;
        log::debug!("released {released} nodes");
        released
    }
}

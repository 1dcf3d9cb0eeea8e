use crate::classify::{is_dec_digit, is_whitespace};
use crate::error::{ErrorKind, JsonError, ScanError};
use crate::options::ParseOptions;
use crate::scanner::{scan_bool, scan_null, scan_number, scan_string, Number, Scan};
use crate::tree::{Document, Node, Value};
use log::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrayState {
    ExpectOpenBracket,
    ExpectValueOrClose,
    ExpectCommaOrClose,
    /// After a comma: a value is mandatory.
    ExpectValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ObjectState {
    ExpectOpenBrace,
    ExpectKeyOrClose,
    /// After a comma: a member is mandatory.
    ExpectKey,
    ExpectColon(String),
    ExpectValue(String),
    ExpectCommaOrClose,
}

/// A recursive descent JSON parser over one in-memory input.
///
/// Scalars are recognized by the state machines in [`crate::scanner`]; arrays
/// and objects are state machines of their own that recurse through
/// `parse_value`. The first failure aborts the whole parse, and any
/// partially built containers are dropped on the way out.
#[derive(Debug)]
pub struct Parser<'a> {
    source: &'a str,
    options: ParseOptions,
    position: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    pub fn new_with_name(source: &'a str, name: String) -> Self {
        Self::with_options(source, ParseOptions::default().with_source_name(name))
    }

    pub fn with_options(source: &'a str, options: ParseOptions) -> Self {
        Self {
            source,
            options,
            position: 0,
            depth: 0,
        }
    }

    // === Main Parsing Methods ===

    /// Document ::= { any byte but "{" } Object [ trailing input ]
    ///
    /// # Errors
    /// Returns the first [`JsonError`] hit anywhere in the document. No `{` at
    /// all is a [`ErrorKind::MalformedObject`].
    pub fn parse_document(&mut self) -> Result<Document, JsonError> {
        self.position = 0;
        self.depth = 0;
        debug!(
            "parsing {} ({} bytes)",
            self.options.source_name,
            self.source.len()
        );

        let result = self.parse_root();
        match &result {
            Ok(doc) => debug!(
                "parsed {}: {} root members",
                self.options.source_name,
                doc.root().len()
            ),
            Err(err) => debug!(
                "failed to parse {}: {} (code {}) at byte {}",
                self.options.source_name,
                err.kind(),
                err.kind().code(),
                err.offset()
            ),
        }
        result
    }

    fn parse_root(&mut self) -> Result<Document, JsonError> {
        let Some(start) = self.source.bytes().position(|b| b == b'{') else {
            return Err(self.fail(ErrorKind::MalformedObject, self.source.len()));
        };
        if start > 0 {
            trace!("skipped {start} bytes before the root object");
        }
        self.position = start;

        let root = Node::element(self.parse_object()?);

        if self.options.reject_trailing_content {
            self.skip_whitespace();
            if self.position < self.source.len() {
                return Err(self.fail(ErrorKind::MalformedObject, self.position));
            }
        }
        Ok(Document { root })
    }

    /// Value ::= String | Number | Bool | Null | Array | Object
    ///
    /// The first byte alone decides the production.
    fn parse_value(&mut self) -> Result<Value, JsonError> {
        let Some(b) = self.peek() else {
            return Err(self.fail(ErrorKind::MalformedValue, self.position));
        };
        match b {
            b'"' => self
                .scan(scan_string)
                .map(|text| Value::String(text.to_owned())),
            b't' | b'f' => self.scan(scan_bool).map(Value::Bool),
            b'n' => self.scan(scan_null).map(|()| Value::Null),
            b'[' => self.parse_array(),
            b'{' => self.parse_object(),
            b'-' => self.parse_number(),
            b if is_dec_digit(b) => self.parse_number(),
            _ => Err(self.fail(ErrorKind::MalformedValue, self.position)),
        }
    }

    fn parse_number(&mut self) -> Result<Value, JsonError> {
        Ok(match self.scan(scan_number)? {
            Number::Integer(n) => Value::Integer(n),
            Number::Double(n) => Value::Double(n),
        })
    }

    /// Array ::= "[" [ Value { "," Value } ] "]"
    fn parse_array(&mut self) -> Result<Value, JsonError> {
        use ArrayState::*;

        let start = self.position;
        self.enter(start)?;
        let mut elements = Vec::new();
        let mut state = ExpectOpenBracket;
        loop {
            let Some(b) = self.peek() else {
                return Err(self.fail(ErrorKind::MalformedArray, self.position));
            };
            state = match state {
                ExpectOpenBracket if b == b'[' => {
                    self.position += 1;
                    ExpectValueOrClose
                }
                ExpectOpenBracket => {
                    return Err(self.fail(ErrorKind::MalformedArray, self.position));
                }
                s if is_whitespace(b) => {
                    self.position += 1;
                    s
                }
                ExpectValueOrClose if b == b']' => {
                    self.position += 1;
                    break;
                }
                // trailing comma
                ExpectValue if b == b']' => {
                    return Err(self.fail(ErrorKind::MalformedArray, self.position));
                }
                ExpectValueOrClose | ExpectValue => {
                    elements.push(Node::element(self.parse_value()?));
                    ExpectCommaOrClose
                }
                ExpectCommaOrClose => match b {
                    b',' => {
                        self.position += 1;
                        ExpectValue
                    }
                    b']' => {
                        self.position += 1;
                        break;
                    }
                    _ => return Err(self.fail(ErrorKind::MalformedArray, self.position)),
                },
            };
        }
        self.leave(start, "array", elements.len());
        Ok(Value::Array(elements))
    }

    /// Object ::= "{" [ Member { "," Member } ] "}"
    /// Member ::= String ":" Value
    fn parse_object(&mut self) -> Result<Value, JsonError> {
        use ObjectState::*;

        let start = self.position;
        self.enter(start)?;
        let mut members = Vec::new();
        let mut state = ExpectOpenBrace;
        loop {
            let Some(b) = self.peek() else {
                return Err(self.fail(ErrorKind::MalformedObject, self.position));
            };
            state = match state {
                ExpectOpenBrace if b == b'{' => {
                    self.position += 1;
                    ExpectKeyOrClose
                }
                ExpectOpenBrace => {
                    return Err(self.fail(ErrorKind::MalformedObject, self.position));
                }
                s if is_whitespace(b) => {
                    self.position += 1;
                    s
                }
                ExpectKeyOrClose if b == b'}' => {
                    self.position += 1;
                    break;
                }
                ExpectKeyOrClose | ExpectKey if b == b'"' => {
                    ExpectColon(self.scan(scan_string)?.to_owned())
                }
                ExpectKeyOrClose | ExpectKey => {
                    return Err(self.fail(ErrorKind::MalformedObject, self.position));
                }
                ExpectColon(key) if b == b':' => {
                    self.position += 1;
                    ExpectValue(key)
                }
                ExpectColon(_) => {
                    return Err(self.fail(ErrorKind::MalformedObject, self.position));
                }
                ExpectValue(key) => {
                    let value = self.parse_value()?;
                    members.push(Node::member(key, value));
                    ExpectCommaOrClose
                }
                ExpectCommaOrClose => match b {
                    b',' => {
                        self.position += 1;
                        ExpectKey
                    }
                    b'}' => {
                        self.position += 1;
                        break;
                    }
                    _ => return Err(self.fail(ErrorKind::MalformedObject, self.position)),
                },
            };
        }
        self.leave(start, "object", members.len());
        Ok(Value::Object(members))
    }

    // === Helper Methods ===

    fn enter(&mut self, start: usize) -> Result<(), JsonError> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(self.fail(ErrorKind::DepthLimitExceeded, start));
        }
        Ok(())
    }

    fn leave(&mut self, start: usize, what: &str, len: usize) {
        trace!(
            "{what} at byte {start} closed with {len} children (depth {})",
            self.depth
        );
        self.depth -= 1;
    }

    /// Runs a scanner at the cursor and steps past what it consumed.
    fn scan<T>(
        &mut self,
        scanner: fn(&'a str) -> Result<Scan<T>, ScanError>,
    ) -> Result<T, JsonError> {
        let start = self.position;
        match scanner(&self.source[start..]) {
            Ok(scan) => {
                self.position += scan.consumed;
                Ok(scan.value)
            }
            Err(err) => Err(self.fail(err.kind, start + err.offset)),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.position += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.position).copied()
    }

    fn fail(&self, kind: ErrorKind, offset: usize) -> JsonError {
        JsonError::new(kind, &self.options.source_name, self.source, offset)
    }
}

use crate::utils::get_line_and_column;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// The grammar production that rejected the input.
///
/// There is one kind per production that can fail locally, plus the nesting
/// limit. The numeric [`code`](ErrorKind::code) values are stable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    #[error("malformed value")]
    MalformedValue,
    #[error("malformed string")]
    MalformedString,
    #[error("malformed boolean literal")]
    MalformedBool,
    #[error("malformed null literal")]
    MalformedNull,
    #[error("malformed array")]
    MalformedArray,
    #[error("malformed object")]
    MalformedObject,
    #[error("malformed number")]
    MalformedNumber,
    #[error("nesting depth limit exceeded")]
    DepthLimitExceeded,
}

impl ErrorKind {
    /// Stable numeric error code. `0` is reserved for success.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            ErrorKind::MalformedValue => 1,
            ErrorKind::MalformedString => 2,
            ErrorKind::MalformedBool => 3,
            ErrorKind::MalformedNull => 4,
            ErrorKind::MalformedArray => 5,
            ErrorKind::MalformedObject => 6,
            ErrorKind::MalformedNumber => 7,
            ErrorKind::DepthLimitExceeded => 8,
        }
    }
}

/// A parse failure pinned to a byte offset of the input.
///
/// One variant per [`ErrorKind`]; each carries the named input, the span of
/// the offending byte and its 1-based line and column.
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum JsonError {
    #[error("malformed value at line {line}, column {column}")]
    #[diagnostic(
        code(json::malformed_value),
        help("A value must start with '\"', a digit, '-', 't', 'f', 'n', '[' or '{{'.")
    )]
    MalformedValue {
        #[source_code]
        src: NamedSource<String>,
        #[label("no value starts here")]
        span: SourceSpan,
        line: usize,
        column: usize,
    },

    #[error("malformed string at line {line}, column {column}")]
    #[diagnostic(
        code(json::malformed_string),
        help("Strings need a closing quote. Escapes are one of \\\" \\\\ \\/ \\b \\f \\n \\r \\t or \\u followed by four hex digits, and control characters must be escaped.")
    )]
    MalformedString {
        #[source_code]
        src: NamedSource<String>,
        #[label("string breaks here")]
        span: SourceSpan,
        line: usize,
        column: usize,
    },

    #[error("malformed boolean literal at line {line}, column {column}")]
    #[diagnostic(
        code(json::malformed_bool),
        help("Boolean literals are spelled exactly `true` or `false`.")
    )]
    MalformedBool {
        #[source_code]
        src: NamedSource<String>,
        #[label("literal breaks here")]
        span: SourceSpan,
        line: usize,
        column: usize,
    },

    #[error("malformed null literal at line {line}, column {column}")]
    #[diagnostic(
        code(json::malformed_null),
        help("The null literal is spelled exactly `null`.")
    )]
    MalformedNull {
        #[source_code]
        src: NamedSource<String>,
        #[label("literal breaks here")]
        span: SourceSpan,
        line: usize,
        column: usize,
    },

    #[error("malformed array at line {line}, column {column}")]
    #[diagnostic(
        code(json::malformed_array),
        help("Array elements are separated by ',' and the array is closed by ']'. Trailing commas are not allowed.")
    )]
    MalformedArray {
        #[source_code]
        src: NamedSource<String>,
        #[label("array breaks here")]
        span: SourceSpan,
        line: usize,
        column: usize,
    },

    #[error("malformed object at line {line}, column {column}")]
    #[diagnostic(
        code(json::malformed_object),
        help("Objects hold \"key\": value pairs separated by ',' and are closed by '}}'. Keys must be strings and trailing commas are not allowed.")
    )]
    MalformedObject {
        #[source_code]
        src: NamedSource<String>,
        #[label("object breaks here")]
        span: SourceSpan,
        line: usize,
        column: usize,
    },

    #[error("malformed number at line {line}, column {column}")]
    #[diagnostic(
        code(json::malformed_number),
        help("Numbers have no leading zeros, need digits after '.' and after an exponent, must fit in 64 bits when integral, and must be followed by whitespace, ',', ']' or '}}'.")
    )]
    MalformedNumber {
        #[source_code]
        src: NamedSource<String>,
        #[label("number breaks here")]
        span: SourceSpan,
        line: usize,
        column: usize,
    },

    #[error("nesting depth limit exceeded at line {line}, column {column}")]
    #[diagnostic(
        code(json::depth_limit_exceeded),
        help("Arrays and objects are nested deeper than the configured maximum depth.")
    )]
    DepthLimitExceeded {
        #[source_code]
        src: NamedSource<String>,
        #[label("this container is too deep")]
        span: SourceSpan,
        line: usize,
        column: usize,
    },
}

impl JsonError {
    pub(crate) fn new(kind: ErrorKind, name: &str, source: &str, offset: usize) -> Self {
        let (line, column) = get_line_and_column(source, offset);
        // A zero-length span at the end of input still renders a caret.
        let len = usize::from(offset < source.len());
        let src = NamedSource::new(name, source.to_string());
        let span: SourceSpan = (offset, len).into();
        match kind {
            ErrorKind::MalformedValue => Self::MalformedValue { src, span, line, column },
            ErrorKind::MalformedString => Self::MalformedString { src, span, line, column },
            ErrorKind::MalformedBool => Self::MalformedBool { src, span, line, column },
            ErrorKind::MalformedNull => Self::MalformedNull { src, span, line, column },
            ErrorKind::MalformedArray => Self::MalformedArray { src, span, line, column },
            ErrorKind::MalformedObject => Self::MalformedObject { src, span, line, column },
            ErrorKind::MalformedNumber => Self::MalformedNumber { src, span, line, column },
            ErrorKind::DepthLimitExceeded => Self::DepthLimitExceeded { src, span, line, column },
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedValue { .. } => ErrorKind::MalformedValue,
            Self::MalformedString { .. } => ErrorKind::MalformedString,
            Self::MalformedBool { .. } => ErrorKind::MalformedBool,
            Self::MalformedNull { .. } => ErrorKind::MalformedNull,
            Self::MalformedArray { .. } => ErrorKind::MalformedArray,
            Self::MalformedObject { .. } => ErrorKind::MalformedObject,
            Self::MalformedNumber { .. } => ErrorKind::MalformedNumber,
            Self::DepthLimitExceeded { .. } => ErrorKind::DepthLimitExceeded,
        }
    }

    /// Span, line and column; every variant carries them.
    fn position(&self) -> (SourceSpan, usize, usize) {
        match *self {
            Self::MalformedValue { span, line, column, .. }
            | Self::MalformedString { span, line, column, .. }
            | Self::MalformedBool { span, line, column, .. }
            | Self::MalformedNull { span, line, column, .. }
            | Self::MalformedArray { span, line, column, .. }
            | Self::MalformedObject { span, line, column, .. }
            | Self::MalformedNumber { span, line, column, .. }
            | Self::DepthLimitExceeded { span, line, column, .. } => (span, line, column),
        }
    }

    /// Byte offset of the offending character, or the input length when the
    /// input ended early.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.position().0.offset()
    }

    /// 1-based line and column of [`offset`](JsonError::offset).
    #[must_use]
    pub fn line_col(&self) -> (usize, usize) {
        let (_, line, column) = self.position();
        (line, column)
    }
}

/// A scanner failure. Carries no source text; the parser lifts it into a
/// [`JsonError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanError {
    pub kind: ErrorKind,
    /// Offset relative to the start of the scanned literal.
    pub offset: usize,
}

impl ScanError {
    pub(crate) fn new(kind: ErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}

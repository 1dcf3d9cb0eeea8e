// Unhappy paths: each malformed input must surface the specific production
// that rejected it.

use jsontree::{parse, parse_with_options, ErrorKind, ParseOptions};

fn assert_kind(source: &str, expected: ErrorKind) {
    match parse(source) {
        Ok(doc) => panic!("{source:?} should fail with {expected:?}, parsed {doc:?}"),
        Err(err) => assert_eq!(err.kind(), expected, "wrong error kind for {source:?}"),
    }
}

#[test]
fn test_missing_member_value() {
    assert_kind(r#"{"a":}"#, ErrorKind::MalformedValue);
}

#[test]
fn test_trailing_comma_in_array() {
    assert_kind(r#"{"a": [1,]}"#, ErrorKind::MalformedArray);
}

#[test]
fn test_trailing_comma_in_object() {
    assert_kind(r#"{"a": 1,}"#, ErrorKind::MalformedObject);
}

#[test]
fn test_unknown_value_start() {
    assert_kind(r#"{"a": undefined}"#, ErrorKind::MalformedValue);
    assert_kind(r#"{"a": 'single'}"#, ErrorKind::MalformedValue);
    assert_kind(r#"{"a": +1}"#, ErrorKind::MalformedValue);
    assert_kind(r#"{"a": .5}"#, ErrorKind::MalformedValue);
}

#[test]
fn test_malformed_strings() {
    assert_kind(r#"{"a": "open}"#, ErrorKind::MalformedString);
    assert_kind(r#"{"a": "\x"}"#, ErrorKind::MalformedString);
    assert_kind(r#"{"a": "\u12"}"#, ErrorKind::MalformedString);
    assert_kind(r#"{"a": "\uZZZZ"}"#, ErrorKind::MalformedString);
    assert_kind("{\"a\": \"tab\there\"}", ErrorKind::MalformedString);
    assert_kind(r#"{"open: 1}"#, ErrorKind::MalformedString);
}

#[test]
fn test_malformed_literals() {
    assert_kind(r#"{"a": tru}"#, ErrorKind::MalformedBool);
    assert_kind(r#"{"a": fals}"#, ErrorKind::MalformedBool);
    assert_kind(r#"{"a": True}"#, ErrorKind::MalformedValue);
    assert_kind(r#"{"a": nul}"#, ErrorKind::MalformedNull);
    assert_kind(r#"{"a": nil}"#, ErrorKind::MalformedNull);
    assert_kind(r#"{"a": t"#, ErrorKind::MalformedBool);
    assert_kind(r#"{"a": n"#, ErrorKind::MalformedNull);
}

#[test]
fn test_literal_followed_by_garbage() {
    assert_kind(r#"{"a": truex}"#, ErrorKind::MalformedObject);
    assert_kind(r#"{"a": [nullx]}"#, ErrorKind::MalformedArray);
}

#[test]
fn test_malformed_numbers() {
    assert_kind(r#"{"a": 01}"#, ErrorKind::MalformedNumber);
    assert_kind(r#"{"a": -01}"#, ErrorKind::MalformedNumber);
    assert_kind(r#"{"a": 1.}"#, ErrorKind::MalformedNumber);
    assert_kind(r#"{"a": 1e}"#, ErrorKind::MalformedNumber);
    assert_kind(r#"{"a": 1e+}"#, ErrorKind::MalformedNumber);
    assert_kind(r#"{"a": -}"#, ErrorKind::MalformedNumber);
    assert_kind(r#"{"a": 1x}"#, ErrorKind::MalformedNumber);
    assert_kind(r#"{"a": 0x10}"#, ErrorKind::MalformedNumber);
    assert_kind(r#"{"a": 99999999999999999999}"#, ErrorKind::MalformedNumber);
    // a number cannot end the input
    assert_kind(r#"{"a": 1"#, ErrorKind::MalformedNumber);
}

#[test]
fn test_malformed_arrays() {
    assert_kind(r#"{"a": [1 2]}"#, ErrorKind::MalformedArray);
    assert_kind(r#"{"a": [1, 2 "#, ErrorKind::MalformedArray);
    assert_kind(r#"{"a": [1:2]}"#, ErrorKind::MalformedNumber);
    assert_kind(r#"{"a": ["x":2]}"#, ErrorKind::MalformedArray);
    assert_kind(r#"{"a": [1, 2}"#, ErrorKind::MalformedArray);
}

#[test]
fn test_malformed_objects() {
    assert_kind(r#"{"a" 1}"#, ErrorKind::MalformedObject);
    assert_kind(r#"{a: 1}"#, ErrorKind::MalformedObject);
    assert_kind(r#"{1: 1}"#, ErrorKind::MalformedObject);
    assert_kind(r#"{"a": 1 "b": 2}"#, ErrorKind::MalformedObject);
    assert_kind(r#"{"a": 1,, "b": 2}"#, ErrorKind::MalformedObject);
    assert_kind(r#"{"a": true"#, ErrorKind::MalformedObject);
    assert_kind(r#"{"a": {"b": true]}"#, ErrorKind::MalformedObject);
    assert_kind("{", ErrorKind::MalformedObject);
    assert_kind("", ErrorKind::MalformedObject);
    assert_kind("no braces here", ErrorKind::MalformedObject);
    assert_kind("// comment\n{\"a\": 1 // trailing\n}", ErrorKind::MalformedObject);
}

#[test]
fn test_error_offsets() {
    let err = parse(r#"{"a": [1,]}"#).unwrap_err();
    assert_eq!(err.offset(), 9);

    let err = parse("{\n  \"a\": 1,\n  \"b\": tru\n}").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedBool);
    assert_eq!(err.line_col(), (3, 11));
    assert_eq!(
        err.to_string(),
        "malformed boolean literal at line 3, column 11"
    );
}

#[test]
fn test_depth_limit_exceeded() {
    let source = format!(r#"{{"a": {}{}}}"#, "[".repeat(200), "]".repeat(200));
    assert_kind(&source, ErrorKind::DepthLimitExceeded);

    let options = ParseOptions::new().with_max_depth(1);
    let err = parse_with_options(r#"{"a": {}}"#, options.clone()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DepthLimitExceeded);
    assert!(parse_with_options(r#"{"a": 1}"#, options).is_ok());
}

#[test]
fn test_deep_garbage_nesting_fails_cleanly() {
    // far beyond any sane stack depth; the limit must stop recursion first
    let source = format!("{{\"a\": {}", "[".repeat(1_000_000));
    assert_kind(&source, ErrorKind::DepthLimitExceeded);
}

#[test]
fn test_error_codes() {
    let cases = [
        (r#"{"a":}"#, 1),
        (r#"{"a": "\q"}"#, 2),
        (r#"{"a": tx}"#, 3),
        (r#"{"a": nx}"#, 4),
        (r#"{"a": [1,]}"#, 5),
        (r#"{"a" 1}"#, 6),
        (r#"{"a": 01}"#, 7),
    ];
    for (source, code) in cases {
        assert_eq!(parse(source).unwrap_err().kind().code(), code, "{source}");
    }
}

// Integration tests over the fixture files in tests/ok and tests/bad
use jsontree::{parse, ErrorKind, NodeType};
use miette::Report;
use std::fs;
use std::path::PathBuf;

fn get_test_file_path(subdir: &str, filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join(subdir)
        .join(filename)
}

fn read_test_file(subdir: &str, filename: &str) -> String {
    let path = get_test_file_path(subdir, filename);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {:?}", path))
}

fn json_files(subdir: &str) -> Vec<PathBuf> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join(subdir);
    let mut files: Vec<_> = fs::read_dir(&dir)
        .expect("Failed to read fixture directory")
        .map(|entry| entry.expect("Failed to read directory entry").path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

// Tests for fixtures that should parse successfully
mod ok_tests {
    use super::*;

    #[test]
    fn test_all_ok_files_parse() {
        let files = json_files("ok");
        assert!(!files.is_empty());
        for path in files {
            let source = fs::read_to_string(&path).unwrap();
            if let Err(err) = parse(&source) {
                panic!("Failed to parse {:?}. Error: {:?}", path, Report::new(err));
            }
        }
    }

    #[test]
    fn test_primitives() {
        let doc = parse(&read_test_file("ok", "primitives.json")).unwrap();
        assert_eq!(doc.get("string").unwrap().as_str(), Some("hello"));
        assert_eq!(doc.get("integer").unwrap().as_i64(), Some(42));
        assert_eq!(doc.get("negative").unwrap().as_i64(), Some(-17));
        assert_eq!(doc.get("double").unwrap().as_f64(), Some(1.25));
        assert_eq!(doc.get("exponent").unwrap().node_type(), NodeType::Double);
        assert_eq!(doc.get("yes").unwrap().as_bool(), Some(true));
        assert_eq!(doc.get("no").unwrap().as_bool(), Some(false));
        assert!(doc.get("nothing").unwrap().is_null());
    }

    #[test]
    fn test_collections() {
        let doc = parse(&read_test_file("ok", "collections.json")).unwrap();
        assert!(doc.get("empty_array").unwrap().is_empty());
        assert!(doc.get("empty_object").unwrap().is_empty());
        assert_eq!(doc.get("matrix").unwrap().at(1).unwrap().at(1).unwrap().as_i64(), Some(1));

        let people = doc.get("people").unwrap();
        let names: Vec<_> = people
            .children()
            .filter_map(|p| p.get("name").and_then(|n| n.as_str()))
            .collect();
        assert_eq!(names, vec!["Ada", "Linus"]);
        assert_eq!(people.at(1).unwrap().get("langs").unwrap().len(), 3);
    }

    #[test]
    fn test_escapes_stay_verbatim() {
        let doc = parse(&read_test_file("ok", "escapes.json")).unwrap();
        assert_eq!(doc.get("newline").unwrap().as_str(), Some(r"a\nb"));
        assert_eq!(doc.get("unicode").unwrap().as_str(), Some(r"snow ☃ man"));
        assert_eq!(
            doc.get("all").unwrap().as_str(),
            Some(r#"\" \\ \/ \b \f \n \r \t"#)
        );
    }

    #[test]
    fn test_leading_text_is_skipped() {
        let doc = parse(&read_test_file("ok", "leading_text.json")).unwrap();
        assert_eq!(doc.get("code").unwrap().as_i64(), Some(200));
    }
}

// Tests for fixtures that must be rejected with a specific error
mod bad_tests {
    use super::*;

    fn assert_fails(filename: &str, expected: ErrorKind, line: usize) {
        let source = read_test_file("bad", filename);
        match parse(&source) {
            Ok(_) => panic!("{filename} should fail to parse"),
            Err(err) => {
                assert_eq!(err.kind(), expected, "{filename}");
                assert_eq!(err.line_col().0, line, "{filename}");
            }
        }
    }

    #[test]
    fn test_all_bad_files_fail() {
        let files = json_files("bad");
        assert!(!files.is_empty());
        for path in files {
            let source = fs::read_to_string(&path).unwrap();
            assert!(parse(&source).is_err(), "{:?} should fail", path);
        }
    }

    #[test]
    fn test_trailing_comma() {
        assert_fails("trailing_comma.json", ErrorKind::MalformedArray, 2);
    }

    #[test]
    fn test_single_quotes() {
        assert_fails("single_quotes.json", ErrorKind::MalformedObject, 2);
    }

    #[test]
    fn test_leading_zero() {
        assert_fails("leading_zero.json", ErrorKind::MalformedNumber, 2);
    }

    #[test]
    fn test_unterminated_string() {
        assert_fails("unterminated.json", ErrorKind::MalformedString, 2);
    }

    #[test]
    fn test_comment() {
        assert_fails("comment.json", ErrorKind::MalformedObject, 2);
    }
}

// tests/line_converter.rs

//! End-to-end token file conversion: line count and order, empty input,
//! missing input, and the zhconv backend on real text.

mod common;

use common::{count_lines, setup_token_file, table_converter};
use hanconv::{ConversionError, Error, LineConverter, Target, TokenFile, ZhConverter};

#[test]
fn test_single_line_with_fake_backend() {
    let (_dir, input, output) = setup_token_file("简体字\n");
    let converter = LineConverter::new(table_converter(&[("简体字\n", "簡體字\n")]));

    let report = converter.convert_file(&input, &output).unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "簡體字\n");
    assert_eq!(report.lines, 1);
    assert_eq!(report.changed, 1);
}

#[test]
fn test_empty_input_creates_empty_output() {
    let (_dir, input, output) = setup_token_file("");
    let report = LineConverter::new(ZhConverter::default())
        .convert_file(&input, &output)
        .unwrap();

    assert!(output.exists());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
    assert_eq!(report.lines, 0);
}

#[test]
fn test_missing_input_fails_before_output_created() {
    let (dir, _input, output) = setup_token_file("");
    let missing = dir.path().join("NNLM-ZH/assets/tokens.txt");

    let err = LineConverter::new(ZhConverter::default())
        .convert_file(&missing, &output)
        .unwrap_err();

    assert!(matches!(err, Error::FileNotFound { ref path } if *path == missing));
    assert!(!output.exists());
}

#[test]
fn test_line_count_and_order_preserved() {
    let contents = "一\n二\n\n三\r\n四";
    let (_dir, input, output) = setup_token_file(contents);

    let report = LineConverter::new(|line: &str| -> Result<String, ConversionError> {
        Ok(format!("#{}", line))
    })
    .convert_file(&input, &output)
    .unwrap();

    let written = TokenFile::read(&output).unwrap();
    assert_eq!(report.lines, 5);
    assert_eq!(written.lines(), &["#一\n", "#二\n", "#\n", "#三\n", "#四"]);
}

#[test]
fn test_universal_newlines_normalized_to_lf() {
    let (_dir, input, output) = setup_token_file("简体\r\n字\rx\n");

    let report = LineConverter::new(ZhConverter::default())
        .convert_file(&input, &output)
        .unwrap();

    assert_eq!(report.lines, 3);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "簡體\n字\nx\n");
}

#[test]
fn test_output_line_count_matches_input() {
    let contents = "我们\n学习\n汉语\n\n词汇\n";
    let (_dir, input, output) = setup_token_file(contents);

    LineConverter::new(ZhConverter::default())
        .convert_file(&input, &output)
        .unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(count_lines(&written), count_lines(contents));
    assert_eq!(written.lines().nth(3), Some(""));
}

#[test]
fn test_zhconv_simplified_to_traditional() {
    let (_dir, input, output) = setup_token_file("简体字\n");

    let report = LineConverter::new(ZhConverter::new(Target::Traditional))
        .convert_file(&input, &output)
        .unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "簡體字\n");
    assert_eq!(report.changed, 1);
}

#[test]
fn test_mixed_lines_converted_independently() {
    let (_dir, input, output) = setup_token_file("簡體字\n简体字\nabc\n");

    let report = LineConverter::new(ZhConverter::default())
        .convert_file(&input, &output)
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "簡體字\n簡體字\nabc\n"
    );
    assert_eq!(report.lines, 3);
    assert_eq!(report.changed, 1);
}

#[test]
fn test_output_overwritten() {
    let (_dir, input, output) = setup_token_file("简体字\n");
    std::fs::write(&output, "stale contents\nmore\nlines\n").unwrap();

    LineConverter::new(ZhConverter::default())
        .convert_file(&input, &output)
        .unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "簡體字\n");
}

#[test]
fn test_unwritable_output_is_write_error() {
    let (dir, input, _output) = setup_token_file("简体字\n");
    let output = dir.path().join("missing-dir").join("tokens.txt");

    let err = LineConverter::new(ZhConverter::default())
        .convert_file(&input, &output)
        .unwrap_err();

    assert!(matches!(err, Error::Write { .. }));
}

#[test]
fn test_backend_failure_propagates_unmodified() {
    #[derive(Debug, thiserror::Error)]
    #[error("dictionary not loaded")]
    struct BackendError;

    let (_dir, input, output) = setup_token_file("a\nb\n");
    let converter = LineConverter::new(|line: &str| -> Result<String, ConversionError> {
        if line == "b\n" {
            Err(ConversionError::new(BackendError))
        } else {
            Ok(line.to_string())
        }
    });

    let err = converter.convert_file(&input, &output).unwrap_err();
    match err {
        Error::Conversion { line, source } => {
            assert_eq!(line, 2);
            assert!(source.inner().downcast_ref::<BackendError>().is_some());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!output.exists());
}

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::helpers::fixtures::{file_count, workdir, write_file};
use rstest::rstest;
use std::fs;
use std::io::{Cursor, Read};
use wps_inout::{DataHandle, InoutError, LiteralType, SourceKind, TypedDataHandle, Value};

// ============================================================================
// Stream sources
// ============================================================================

#[test]
fn test_stream_materializes_once() {
    let temp_dir = workdir();
    let mut handle = DataHandle::with_workdir(temp_dir.path()).unwrap();
    handle.set_stream(Cursor::new(b"hello".to_vec()));

    let first = handle.file().unwrap();
    let second = handle.file().unwrap();

    assert_eq!(first, second);
    assert!(first.starts_with(temp_dir.path()));
    assert_eq!(fs::read_to_string(&first).unwrap(), "hello");
    assert_eq!(file_count(temp_dir.path()), 1);
    assert_eq!(handle.materialized_file(), Some(first));
    assert_eq!(handle.source_kind(), Some(SourceKind::Stream));
}

#[test]
fn test_stream_read_directly_is_consumed() {
    let mut handle = DataHandle::new();
    handle.set_stream(Cursor::new(b"once".to_vec()));

    let mut content = String::new();
    handle.stream().unwrap().read_to_string(&mut content).unwrap();
    assert_eq!(content, "once");

    assert_eq!(handle.stream().unwrap().read_all().unwrap(), Vec::<u8>::new());
}

// ============================================================================
// File and value sources
// ============================================================================

#[test]
fn test_file_source_is_never_copied() {
    let temp_dir = workdir();
    let path = write_file(temp_dir.path(), "input.gml", "<gml:Point/>");

    let mut handle = DataHandle::with_workdir(temp_dir.path().join("work")).unwrap();
    handle.set_file(&path).unwrap();

    assert_eq!(handle.file().unwrap(), path);
    assert_eq!(handle.value().unwrap(), Value::String("<gml:Point/>".into()));
    assert!(handle.materialized_file().is_none());
    assert_eq!(file_count(&temp_dir.path().join("work")), 0);
}

#[test]
fn test_value_round_trips_through_file() {
    let temp_dir = workdir();
    let mut handle = DataHandle::with_workdir(temp_dir.path()).unwrap();
    handle.set_value(42_i64);

    let path = handle.file().unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), "42");
    assert_eq!(handle.base64().unwrap(), "NDI=");
}

#[test]
fn test_missing_file_reports_path() {
    let temp_dir = workdir();
    let missing = temp_dir.path().join("absent.json");
    let mut handle = DataHandle::new();
    handle.set_file(&missing).unwrap();

    match handle.value().unwrap_err() {
        InoutError::Filesystem { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other:?}"),
    }
}

// ============================================================================
// Literal coercion
// ============================================================================

#[rstest]
#[case(LiteralType::Integer, "  12 ", Value::Integer(12))]
#[case(LiteralType::Float, "2.5", Value::Float(2.5))]
#[case(LiteralType::Boolean, "True", Value::Boolean(true))]
#[case(LiteralType::Boolean, "yes", Value::Boolean(false))]
#[case(LiteralType::String, " keep ", Value::String(" keep ".into()))]
fn test_typed_handle_materializes_coerced_value(
    #[case] data_type: LiteralType,
    #[case] text: &str,
    #[case] expected: Value,
) {
    let temp_dir = workdir();
    let mut handle = TypedDataHandle::new(Some(data_type));
    handle.set_workdir(temp_dir.path()).unwrap();
    handle.set_value(text).unwrap();

    assert_eq!(handle.value().unwrap(), expected);
    let path = handle.file().unwrap();
    assert_eq!(fs::read_to_string(path).unwrap(), expected.to_string());
}

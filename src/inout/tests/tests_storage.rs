#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::super::*;
use crate::config::Config;
use crate::error::InoutError;
use crate::format::catalog;
use crate::handle::{DataHandle, SourceKind};
use std::fs;
use std::io::{Cursor, Read};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_file_storage_copies_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let tiff = temp_dir.path().join("file.tiff");
    fs::write(&tiff, "AA").unwrap();

    let storage =
        FileStorage::new(temp_dir.path().join("outputs"), "http://foo/bar/filestorage/").unwrap();
    let mut output = ComplexOutput::new("raster", vec![catalog::GEOTIFF.to_format()])
        .with_storage(Arc::new(storage));
    output.handle_mut().set_file(&tiff).unwrap();

    let url = output.url().unwrap();
    assert!(url.starts_with("http://foo/bar/filestorage/file_"), "{url}");
    assert!(url.ends_with(".tiff"), "{url}");

    // Storing reads without replacing the source
    assert_eq!(output.handle().source_kind(), Some(SourceKind::File));
    let mut content = String::new();
    output.handle().stream().unwrap().read_to_string(&mut content).unwrap();
    assert_eq!(content, "AA");
}

#[test]
fn test_store_reports_reference() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("nested").join("outputs");
    let storage = FileStorage::new(&target, "http://localhost/out").unwrap();
    assert!(target.is_dir());

    let mut handle = DataHandle::with_workdir(temp_dir.path().join("work")).unwrap();
    handle.set_stream(Cursor::new(b"{\"type\": \"FeatureCollection\"}".to_vec()));

    let stored = storage.store(&handle).unwrap();
    assert_eq!(stored.kind, StoreKind::Path);
    assert!(stored.reference.starts_with(&target));
    assert_eq!(
        fs::read_to_string(&stored.reference).unwrap(),
        "{\"type\": \"FeatureCollection\"}"
    );

    let name = stored.reference.file_name().unwrap().to_string_lossy();
    assert_eq!(stored.url, format!("http://localhost/out/{name}"));

    // The stream was materialized once and is reused on the next store
    let again = storage.store(&handle).unwrap();
    assert_ne!(again.reference, stored.reference);
    assert_eq!(
        fs::read_to_string(&again.reference).unwrap(),
        "{\"type\": \"FeatureCollection\"}"
    );
}

#[test]
fn test_file_storage_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.file_storage.target = temp_dir.path().join("served");
    config.server.output_url = "http://example.org/wps".to_string();

    let storage = FileStorage::from_config(&config).unwrap();
    assert_eq!(storage.target(), temp_dir.path().join("served"));
    assert_eq!(storage.output_url(), "http://example.org/wps");
}

#[test]
fn test_failed_copy_leaves_no_file_in_target() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("outputs");
    let storage = FileStorage::new(&target, "http://localhost/out").unwrap();

    // Opening a directory succeeds but reading it fails
    let unreadable = temp_dir.path().join("result.d");
    fs::create_dir(&unreadable).unwrap();
    let mut handle = DataHandle::new();
    handle.set_file(&unreadable).unwrap();

    let err = storage.store(&handle).unwrap_err();
    assert!(matches!(err, InoutError::Filesystem { .. }), "{err}");
    assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
}

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::helpers::fixtures::{registered_catalog, workdir, write_file};
use std::sync::Arc;
use wps_inout::format::{ContentValidator, guess_extension, guess_mime_type};
use wps_inout::{ComplexInput, DataHandle, Format, FormatNegotiator, InoutError, get_format};

#[test]
fn test_input_format_picked_from_file_extension() {
    registered_catalog();
    let temp_dir = workdir();
    let path = write_file(temp_dir.path(), "rivers.GeoJSON", "{\"type\": \"FeatureCollection\"}");

    let mut input = ComplexInput::new(
        "layer",
        vec![get_format("GML", None), get_format("GEOJSON", None)],
    );
    input.handle_mut().set_file(&path).unwrap();

    let mime_type = guess_mime_type(&input.handle().file().unwrap()).unwrap();
    input.set_data_format(Format::new(mime_type)).unwrap();

    assert_eq!(
        input.data_format().unwrap().mime_type(),
        "application/vnd.geo+json"
    );
    assert_eq!(guess_extension("image/tiff; subtype=geotiff").as_deref(), Some(".tiff"));
}

#[test]
fn test_get_format_attaches_validator() {
    let validator: Arc<dyn ContentValidator> =
        Arc::new(|_: &DataHandle, content: &[u8]| Some(content.starts_with(b"{")));
    let format = get_format("GEOJSON", Some(validator));

    assert_eq!(format.mime_type(), "application/vnd.geo+json");
    assert_eq!(format.extension(), ".geojson");
    assert_eq!(
        format.validate_content(&DataHandle::new(), b"{\"type\": \"Point\"}"),
        Some(true)
    );
    assert_eq!(format.validate_content(&DataHandle::new(), b"<xml/>"), Some(false));
}

#[test]
fn test_unknown_format_name_is_not_an_error() {
    let format = get_format("geojson", None);
    assert_eq!(format.mime_type(), "None");
    assert!(format.validator().is_none());
}

#[test]
fn test_negotiated_format_keeps_callers_instance() {
    let validator: Arc<dyn ContentValidator> = Arc::new(|_: &DataHandle, _: &[u8]| Some(true));
    let mut negotiator =
        FormatNegotiator::new(vec![get_format("GML", None), get_format("GEOJSON", None)]);

    negotiator
        .set_active_format(get_format("GEOJSON", Some(validator)))
        .unwrap();

    let active = negotiator.active_format().unwrap();
    assert_eq!(active.mime_type(), "application/vnd.geo+json");
    assert!(active.validator().is_some());
}

#[test]
fn test_rejected_format_reports_all_fields() {
    let mut negotiator = FormatNegotiator::new(vec![get_format("GML", None)]);
    let requested = Format::new("application/gml+xml")
        .with_encoding("base64")
        .with_schema("http://schemas.opengis.net/gml/3.2.1/gml.xsd");

    match negotiator.set_active_format(requested).unwrap_err() {
        InoutError::InvalidParameterValue {
            mime_type,
            encoding,
            schema,
        } => {
            assert_eq!(mime_type, "application/gml+xml");
            assert_eq!(encoding, "base64");
            assert_eq!(schema, "http://schemas.opengis.net/gml/3.2.1/gml.xsd");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(negotiator
        .active_format()
        .unwrap()
        .same_as(&get_format("GML", None)));
}

#[test]
fn test_complex_input_binary_payload() {
    let temp_dir = workdir();
    let archive = write_file(temp_dir.path(), "rivers.zip", [0x50, 0x4B, 0x03, 0x04, 0xFF]);

    let mut input = ComplexInput::new("rivers", vec![get_format("SHP", None)])
        .with_workdir(temp_dir.path())
        .unwrap();
    input.handle_mut().set_file(&archive).unwrap();

    let base64 = input.handle().base64().unwrap();
    let mut copy = DataHandle::with_workdir(temp_dir.path()).unwrap();
    copy.set_base64(&base64).unwrap();

    let bytes = std::fs::read(copy.file().unwrap()).unwrap();
    assert_eq!(bytes, [0x50, 0x4B, 0x03, 0x04, 0xFF]);
}

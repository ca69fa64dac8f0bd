//! Small helpers around the quick-xml writer for describe fragments.

use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::{InoutError, Result};

pub(crate) type FragmentWriter = Writer<Cursor<Vec<u8>>>;

/// OWS 1.1 namespace.
pub(crate) const OWS_NAMESPACE: &str = "http://www.opengis.net/ows/1.1";

/// Build a fragment with `build` and return it as a string.
pub(crate) fn fragment(build: impl FnOnce(&mut FragmentWriter) -> Result<()>) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    build(&mut writer)?;
    String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| InoutError::xml(format!("Invalid UTF-8 in fragment: {e}")))
}

pub(crate) fn start(writer: &mut FragmentWriter, elem: BytesStart<'_>) -> Result<()> {
    writer
        .write_event(Event::Start(elem))
        .map_err(|e| InoutError::xml(format!("Write error: {e}")))
}

pub(crate) fn end(writer: &mut FragmentWriter, name: &str) -> Result<()> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(|e| InoutError::xml(format!("Write error: {e}")))
}

/// Write `<name attrs…>text</name>`.
pub(crate) fn text_element(
    writer: &mut FragmentWriter,
    elem: BytesStart<'_>,
    text: &str,
) -> Result<()> {
    let name = String::from_utf8_lossy(elem.name().as_ref()).into_owned();
    start(writer, elem)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(|e| InoutError::xml(format!("Write error: {e}")))?;
    end(writer, &name)
}

//! Readable stream handed out by [`DataHandle::stream`](super::DataHandle::stream).

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};
use std::sync::Arc;

use parking_lot::Mutex;

/// Stream source shared between a handle and the streams it lends out.
pub(crate) type SharedReader = Arc<Mutex<Box<dyn Read + Send>>>;

/// A byte stream over one of the handle's representations.
///
/// File and value sources produce a fresh reader on every call. A stream
/// source is shared with the handle, so bytes already consumed are not
/// replayed. Only the reader is locked, and only for the length of a read.
pub enum HandleStream {
    /// Fresh reader over a file source.
    File(BufReader<File>),
    /// Fresh reader over the byte form of a value source.
    Memory(Cursor<Vec<u8>>),
    /// The stored stream itself.
    Source(SharedReader),
}

impl HandleStream {
    /// Read the remaining bytes into a vector.
    pub fn read_all(mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

impl Read for HandleStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            HandleStream::File(reader) => reader.read(buf),
            HandleStream::Memory(cursor) => cursor.read(buf),
            HandleStream::Source(reader) => reader.lock().read(buf),
        }
    }
}

impl fmt::Debug for HandleStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            HandleStream::File(_) => "File",
            HandleStream::Memory(_) => "Memory",
            HandleStream::Source(_) => "Source",
        };
        f.debug_tuple("HandleStream").field(&kind).finish()
    }
}

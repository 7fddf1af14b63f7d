//! Decoding from and encoding into generic byte streams
//!
//! Streams passed by value are owned for the duration of the call and closed
//! exactly once before it returns, whatever the outcome. Streams passed by
//! `&mut` are borrowed and left open.

use crate::codec::{Codec, JsonCodec, XmlCodec};
use scopeguard::ScopeGuard;
use serde::{Serialize, de::DeserializeOwned};
use serdeio_core::{SerdeError, SerdeResult};
use std::fs::File;
use std::io::{BufWriter, Cursor, Read, Write};
use std::net::TcpStream;

/// A byte stream with an explicit release step
pub trait Closable {
    /// Release the underlying resource
    fn close(&mut self) -> std::io::Result<()>;
}

impl Closable for File {
    // The descriptor itself is released when the handle drops
    fn close(&mut self) -> std::io::Result<()> {
        self.flush()
    }
}

impl Closable for TcpStream {
    fn close(&mut self) -> std::io::Result<()> {
        self.shutdown(std::net::Shutdown::Both)
    }
}

impl<T> Closable for Cursor<T> {
    fn close(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<C: Closable + ?Sized> Closable for Box<C> {
    fn close(&mut self) -> std::io::Result<()> {
        (**self).close()
    }
}

/// Take ownership of `stream` and close it when the guard drops
pub(crate) fn close_on_exit<S: Closable>(stream: S) -> ScopeGuard<S, impl FnOnce(S)> {
    scopeguard::guard(stream, |mut stream| {
        if let Err(err) = stream.close() {
            tracing::debug!(error = %err, "failed to close stream");
        }
    })
}

/// Encode through a buffer and flush it, reporting flush errors as serialization failures
pub(crate) fn encode_flushed<C, W, T>(codec: &C, writer: W, value: &T) -> SerdeResult<()>
where
    C: Codec,
    W: Write,
    T: Serialize + ?Sized,
{
    let mut writer = BufWriter::new(writer);
    codec.encode_to(&mut writer, value)?;
    writer
        .flush()
        .map_err(|e| SerdeError::serializing(codec.format(), e))
}

/// Decode one value from a borrowed reader, leaving it open
pub fn decode_reader<C, R, T>(codec: &C, reader: &mut R) -> SerdeResult<T>
where
    C: Codec,
    R: Read + ?Sized,
    T: DeserializeOwned,
{
    tracing::trace!(format = %codec.format(), "decoding from borrowed reader");
    codec.decode_from(reader)
}

/// Decode one value from an owned stream, closing it on every exit path
pub fn decode_owned<C, S, T>(codec: &C, stream: S) -> SerdeResult<T>
where
    C: Codec,
    S: Read + Closable,
    T: DeserializeOwned,
{
    tracing::trace!(format = %codec.format(), "decoding from owned stream");
    let mut stream = close_on_exit(stream);
    codec.decode_from(&mut *stream)
}

/// Decode JSON from an owned stream, closing it on every exit path
pub fn decode_json_stream<S, T>(stream: S) -> SerdeResult<T>
where
    S: Read + Closable,
    T: DeserializeOwned,
{
    decode_owned(&JsonCodec::new(), stream)
}

/// Decode XML from an owned stream, closing it on every exit path
pub fn decode_xml_stream<S, T>(stream: S) -> SerdeResult<T>
where
    S: Read + Closable,
    T: DeserializeOwned,
{
    decode_owned(&XmlCodec::new(), stream)
}

/// Encode a value into an owned stream, flushing and closing it on every exit path
pub fn write_owned<C, W, T>(codec: &C, stream: W, value: &T) -> SerdeResult<()>
where
    C: Codec,
    W: Write + Closable,
    T: Serialize + ?Sized,
{
    tracing::trace!(format = %codec.format(), "encoding into owned stream");
    let mut stream = close_on_exit(stream);
    encode_flushed(codec, &mut *stream, value)
}

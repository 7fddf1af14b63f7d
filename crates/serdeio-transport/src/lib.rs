//! serdeio-transport - JSON and XML encode/decode helpers
//!
//! This crate provides:
//! - [`Codec`] trait with [`JsonCodec`], [`XmlCodec`] and [`FormatCodec`]
//! - [`ResponseSink`] and [`ResponseWriter`] for outbound HTTP responses
//! - request, stream and file helpers that decode into any `DeserializeOwned`
//!   type and encode any `Serialize` type
//!
//! All failures are reported as [`SerdeError`], which separates IO failures
//! from serialization and deserialization failures.

mod codec;
mod file;
mod sink;
mod stream;
mod web;

pub use codec::{Codec, FormatCodec, JsonCodec, XmlCodec};
pub use file::{
    FileSource, FileTarget, read_file, read_json_file, read_xml_file, write_file,
    write_json_file, write_xml_file,
};
pub use serdeio_core::{CodecConfig, ErrorKind, Format, Phase, SerdeError, SerdeResult};
pub use sink::{ResponseSink, ResponseWriter};
pub use stream::{
    Closable, decode_json_stream, decode_owned, decode_reader, decode_xml_stream, write_owned,
};
pub use web::{
    decode_json_request, decode_request, decode_request_negotiated, decode_xml_request,
    encode_json, encode_response, encode_xml, request_format,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Closable, Codec, FileSource, FileTarget, Format, FormatCodec, JsonCodec, ResponseSink,
        ResponseWriter, SerdeError, SerdeResult, XmlCodec,
    };
}

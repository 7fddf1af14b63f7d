//! # serdeio
//!
//! Generic helpers that move typed values between Rust and JSON or XML wire
//! bytes, for HTTP handlers, files and plain streams.
//!
//! serdeio delegates all parsing and formatting to `serde_json` and
//! `quick-xml` and adds:
//! - one encode/decode routine per endpoint, usable with any serde type
//! - guaranteed closing of owned files and streams on every exit path
//! - uniform errors that tell "could not reach the data" apart from
//!   "data was reached but invalid"
//!
//! ## Quick Start
//!
//! ```ignore
//! use serdeio::prelude::*;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Person {
//!     #[serde(rename = "Name")]
//!     name: String,
//!     #[serde(rename = "Age")]
//!     age: u32,
//! }
//!
//! fn create_person(
//!     request: &mut http::Request<impl std::io::Read>,
//!     response: &mut ResponseWriter,
//! ) -> SerdeResult<()> {
//!     let person: Person = serdeio::decode_json_request(request)?;
//!     serdeio::write_json_file("person.json", &person)?;
//!     serdeio::encode_json(response, http::StatusCode::CREATED, &person)
//! }
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`SerdeError`]:
//! - `Io` when a file could not be opened or created
//! - `Serialization` when a payload could not be written in the target format
//! - `Deserialization` when bytes were read but did not parse into the target type
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`serdeio_core`] - Errors, formats and configuration
//! - [`serdeio_transport`] - Codecs and the encode/decode helpers
//! - [`serdeio_logging`] - Tracing subscriber setup

// Re-export core types
pub use serdeio_core::{
    BoxError, CodecConfig, ErrorKind, Format, LogLevel, Phase, SerdeError, SerdeResult,
};

// Re-export codecs and helpers
pub use serdeio_transport::{
    Closable, Codec, FileSource, FileTarget, FormatCodec, JsonCodec, ResponseSink, ResponseWriter,
    XmlCodec, decode_json_request, decode_json_stream, decode_owned, decode_reader,
    decode_request, decode_request_negotiated, decode_xml_request, decode_xml_stream, encode_json,
    encode_response, encode_xml, read_file, read_json_file, read_xml_file, request_format,
    write_file, write_json_file, write_owned, write_xml_file,
};

// Re-export logging setup
pub use serdeio_logging::{ReloadHandle, init_logging, init_logging_from_env};

// Re-export common dependencies that callers need
pub use http;
pub use serde;
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use serdeio::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        Closable, Codec, CodecConfig, FileSource, FileTarget, Format, FormatCodec, JsonCodec,
        ResponseSink, ResponseWriter, SerdeError, SerdeResult, XmlCodec,
    };

    // Serde derives (commonly needed for payload types)
    pub use serde::{Deserialize, Serialize};
}

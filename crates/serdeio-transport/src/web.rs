//! Encoding payloads into HTTP responses and decoding them from HTTP requests
//!
//! Response sinks and request bodies belong to the surrounding server, so
//! nothing here closes them.

use crate::codec::{Codec, FormatCodec, JsonCodec, XmlCodec};
use crate::sink::ResponseSink;
use http::header::{CONTENT_TYPE, HeaderValue};
use http::{Request, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use serdeio_core::{CodecConfig, Format, SerdeResult};
use std::io::Read;

/// Write `value` as the body of a response with the given status
///
/// The `Content-Type` header and the status are written before any body
/// bytes. If encoding fails afterwards the status already sent stays as is
/// and a serialization failure is returned.
pub fn encode_response<C, S, T>(
    codec: &C,
    sink: &mut S,
    status: StatusCode,
    value: &T,
) -> SerdeResult<()>
where
    C: Codec,
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    tracing::debug!(
        status = status.as_u16(),
        content_type = codec.content_type(),
        "encoding response body"
    );
    sink.set_header(CONTENT_TYPE, HeaderValue::from_static(codec.content_type()));
    sink.write_status(status);
    codec.encode_to(sink, value)
}

/// Write `value` as a JSON response body
pub fn encode_json<S, T>(sink: &mut S, status: StatusCode, value: &T) -> SerdeResult<()>
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    encode_response(&JsonCodec::new(), sink, status, value)
}

/// Write `value` as an XML response body
pub fn encode_xml<S, T>(sink: &mut S, status: StatusCode, value: &T) -> SerdeResult<()>
where
    S: ResponseSink + ?Sized,
    T: Serialize + ?Sized,
{
    encode_response(&XmlCodec::new(), sink, status, value)
}

/// Decode one value from a request body without closing it
pub fn decode_request<C, B, T>(codec: &C, request: &mut Request<B>) -> SerdeResult<T>
where
    C: Codec,
    B: Read,
    T: DeserializeOwned,
{
    tracing::trace!(
        method = %request.method(),
        uri = %request.uri(),
        format = %codec.format(),
        "decoding request body"
    );
    codec.decode_from(request.body_mut())
}

/// Decode a JSON request body
pub fn decode_json_request<B, T>(request: &mut Request<B>) -> SerdeResult<T>
where
    B: Read,
    T: DeserializeOwned,
{
    decode_request(&JsonCodec::new(), request)
}

/// Decode an XML request body
pub fn decode_xml_request<B, T>(request: &mut Request<B>) -> SerdeResult<T>
where
    B: Read,
    T: DeserializeOwned,
{
    decode_request(&XmlCodec::new(), request)
}

/// Pick the wire format of a request from its `Content-Type` header
///
/// Requests without a recognizable content type are treated as JSON.
pub fn request_format<B>(request: &Request<B>) -> Format {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(Format::from_content_type)
        .unwrap_or_default()
}

/// Decode a request body in the format named by its `Content-Type` header
pub fn decode_request_negotiated<B, T>(
    config: &CodecConfig,
    request: &mut Request<B>,
) -> SerdeResult<T>
where
    B: Read,
    T: DeserializeOwned,
{
    let codec = FormatCodec::new(request_format(request), config);
    decode_request(&codec, request)
}

#[cfg(test)]
#[path = "web/web_tests.rs"]
mod web_tests;

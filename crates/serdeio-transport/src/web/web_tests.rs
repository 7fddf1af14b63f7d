#![allow(non_snake_case)]

use super::*;
use crate::sink::ResponseWriter;
use crate::stream::Closable;
use http::header::HeaderName;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::{Cursor, Write};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Person {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Age")]
    age: i64,
}

fn person() -> Person {
    Person {
        name: "a".to_string(),
        age: 1,
    }
}

#[derive(Debug, PartialEq)]
enum SinkEvent {
    Header(String, String),
    Status(u16),
    Body(Vec<u8>),
}

/// Sink double that records every call in order
#[derive(Default)]
struct RecordingSink {
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    fn body(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Body(bytes) => Some(bytes.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }
}

impl Write for RecordingSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.events.push(SinkEvent::Body(buf.to_vec()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl ResponseSink for RecordingSink {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.events.push(SinkEvent::Header(
            name.to_string(),
            value.to_str().unwrap_or_default().to_string(),
        ));
    }

    fn write_status(&mut self, status: StatusCode) {
        self.events.push(SinkEvent::Status(status.as_u16()));
    }
}

/// Request body double that counts close calls
struct TrackedBody {
    data: Cursor<Vec<u8>>,
    closes: usize,
}

impl TrackedBody {
    fn new(data: &[u8]) -> Self {
        Self {
            data: Cursor::new(data.to_vec()),
            closes: 0,
        }
    }
}

impl Read for TrackedBody {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.data.read(buf)
    }
}

impl Closable for TrackedBody {
    fn close(&mut self) -> std::io::Result<()> {
        self.closes += 1;
        Ok(())
    }
}

fn request_with(content_type: Option<&str>, body: &[u8]) -> Request<TrackedBody> {
    let mut builder = Request::builder().method("POST").uri("/people");
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    builder.body(TrackedBody::new(body)).unwrap()
}

// encode_response tests

#[test]
fn encode_json___header_and_status_precede_body() {
    let mut sink = RecordingSink::default();

    encode_json(&mut sink, StatusCode::CREATED, &person()).unwrap();

    assert_eq!(
        sink.events[0],
        SinkEvent::Header("content-type".to_string(), "application/json".to_string())
    );
    assert_eq!(sink.events[1], SinkEvent::Status(201));
    assert!(sink.events[2..]
        .iter()
        .all(|event| matches!(event, SinkEvent::Body(_))));
    assert_eq!(sink.body(), b"{\"Name\":\"a\",\"Age\":1}\n");
}

#[test]
fn encode_xml___sets_xml_content_type_before_status() {
    let mut sink = RecordingSink::default();

    encode_xml(&mut sink, StatusCode::OK, &person()).unwrap();

    assert_eq!(
        sink.events[0],
        SinkEvent::Header(
            "content-type".to_string(),
            "text/xml; charset=utf-8".to_string()
        )
    );
    assert_eq!(sink.events[1], SinkEvent::Status(200));
    assert_eq!(
        sink.body(),
        b"<Person><Name>a</Name><Age>1</Age></Person>".to_vec()
    );
}

#[test]
fn encode_json___response_writer___builds_http_response() {
    let mut writer = ResponseWriter::new();

    encode_json(&mut writer, StatusCode::ACCEPTED, &person()).unwrap();
    let response = writer.into_response();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    let decoded: Person = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(decoded, person());
}

#[test]
fn encode_json___unsupported_value___keeps_status_already_sent() {
    let mut writer = ResponseWriter::new();
    let mut map = BTreeMap::new();
    map.insert(vec![1u8], "value");

    let err = encode_json(&mut writer, StatusCode::OK, &map).unwrap_err();

    assert!(err.is_serialization());
    assert_eq!(writer.status(), Some(StatusCode::OK));
    assert_eq!(writer.headers()[CONTENT_TYPE], "application/json");
}

#[test]
fn encode_response___format_codec___uses_codec_content_type() {
    let mut writer = ResponseWriter::new();
    let codec = FormatCodec::from(Format::Xml);

    encode_response(&codec, &mut writer, StatusCode::OK, &person()).unwrap();

    assert_eq!(writer.headers()[CONTENT_TYPE], "text/xml; charset=utf-8");
}

// decode_request tests

#[test]
fn decode_json_request___valid_body___returns_value() {
    let mut request = request_with(None, br#"{"Name":"nikitous","Age":39}"#);

    let decoded: Person = decode_json_request(&mut request).unwrap();

    assert_eq!(
        decoded,
        Person {
            name: "nikitous".to_string(),
            age: 39
        }
    );
}

#[test]
fn decode_json_request___body_is_left_open() {
    let mut request = request_with(None, br#"{"Name":"a","Age":1}"#);

    let _: Person = decode_json_request(&mut request).unwrap();

    assert_eq!(request.body().closes, 0);
}

#[test]
fn decode_json_request___failure___body_is_left_open() {
    let mut request = request_with(None, b"not json");

    let err = decode_json_request::<_, Person>(&mut request).unwrap_err();

    assert!(err.is_deserialization());
    assert_eq!(request.body().closes, 0);
}

#[test]
fn decode_json_request___empty_body___deserialization_failure() {
    let mut request = request_with(None, b"");

    let err = decode_json_request::<_, Person>(&mut request).unwrap_err();

    assert!(err.is_deserialization());
}

#[test]
fn decode_xml_request___valid_body___returns_value() {
    let mut request = request_with(
        Some("text/xml"),
        b"<Person><Name>a</Name><Age>1</Age></Person>",
    );

    let decoded: Person = decode_xml_request(&mut request).unwrap();

    assert_eq!(decoded, person());
    assert_eq!(request.body().closes, 0);
}

#[test]
fn request_format___reads_content_type_header() {
    assert_eq!(request_format(&request_with(None, b"")), Format::Json);
    assert_eq!(
        request_format(&request_with(Some("application/xml"), b"")),
        Format::Xml
    );
    assert_eq!(
        request_format(&request_with(Some("text/plain"), b"")),
        Format::Json
    );
}

#[test]
fn decode_request_negotiated___xml_content_type___decodes_xml() {
    let mut request = request_with(
        Some("text/xml; charset=utf-8"),
        b"<Person><Name>a</Name><Age>1</Age></Person>",
    );

    let decoded: Person = decode_request_negotiated(&CodecConfig::default(), &mut request).unwrap();

    assert_eq!(decoded, person());
}

#[test]
fn decode_request_negotiated___json_content_type___decodes_json() {
    let mut request = request_with(Some("application/json"), br#"{"Name":"a","Age":1}"#);

    let decoded: Person = decode_request_negotiated(&CodecConfig::default(), &mut request).unwrap();

    assert_eq!(decoded, person());
}

#[test]
fn decode_request_negotiated___mismatched_body___reports_xml_format() {
    let mut request = request_with(Some("application/xml"), br#"{"Name":"a","Age":1}"#);

    let err = decode_request_negotiated::<_, Person>(&CodecConfig::default(), &mut request)
        .unwrap_err();

    assert_eq!(err.format(), Some(Format::Xml));
}

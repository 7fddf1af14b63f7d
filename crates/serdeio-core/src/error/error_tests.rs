#![allow(non_snake_case)]

use super::*;
use std::error::Error as _;
use test_case::test_case;

fn not_found() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::NotFound, "no such file")
}

fn json_syntax_error() -> serde_json::Error {
    serde_json::from_str::<serde_json::Value>("{not json").unwrap_err()
}

#[test]
fn SerdeError___serializing___prefixes_phase_label() {
    let err = SerdeError::serializing(Format::Json, json_syntax_error());

    let display = err.to_string();

    assert!(display.starts_with("at serializing json: "), "{display}");
}

#[test]
fn SerdeError___deserializing___prefixes_phase_label() {
    let err = SerdeError::deserializing(Format::Xml, "unexpected end");

    assert_eq!(err.to_string(), "at deserializing xml: unexpected end");
}

#[test]
fn SerdeError___io___displays_context_and_cause() {
    let err = SerdeError::io("failed to open file", not_found());

    assert_eq!(err.to_string(), "failed to open file: no such file");
}

#[test]
fn SerdeError___source___preserves_original_cause() {
    let err = SerdeError::deserializing(Format::Json, json_syntax_error());

    let source = err.source().unwrap();

    assert!(source.downcast_ref::<serde_json::Error>().is_some());
}

#[test]
fn SerdeError___cause_as___downcasts_wrapped_error() {
    let err = SerdeError::deserializing(Format::Json, json_syntax_error());

    let cause = err.cause_as::<serde_json::Error>().unwrap();

    assert!(cause.is_syntax());
}

#[test]
fn SerdeError___cause_as___returns_io_error_for_io_kind() {
    let err = SerdeError::io("failed to create file", not_found());

    let cause = err.cause_as::<std::io::Error>().unwrap();

    assert_eq!(cause.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn SerdeError___cause_as___wrong_type_returns_none() {
    let err = SerdeError::serializing(Format::Json, not_found());

    assert!(err.cause_as::<serde_json::Error>().is_none());
}

#[test]
fn SerdeError___wrapping___does_not_change_underlying_kind() {
    let err = SerdeError::serializing(Format::Json, not_found());

    let cause = err.cause_as::<std::io::Error>().unwrap();

    assert_eq!(cause.kind(), std::io::ErrorKind::NotFound);
    assert!(err.is_serialization());
}

#[test_case(SerdeError::io("ctx", not_found()), ErrorKind::Io, None, 1)]
#[test_case(
    SerdeError::serializing(Format::Json, "boom"),
    ErrorKind::Serialization,
    Some(Phase::Serializing),
    2
)]
#[test_case(
    SerdeError::deserializing(Format::Xml, "boom"),
    ErrorKind::Deserialization,
    Some(Phase::Deserializing),
    3
)]
fn SerdeError___variant___maps_kind_phase_and_code(
    err: SerdeError,
    kind: ErrorKind,
    phase: Option<Phase>,
    code: u32,
) {
    assert_eq!(err.kind(), kind);
    assert_eq!(err.phase(), phase);
    assert_eq!(err.error_code(), code);
}

#[test]
fn SerdeError___format___none_for_io() {
    let io = SerdeError::io("ctx", not_found());
    let de = SerdeError::deserializing(Format::Xml, "boom");

    assert_eq!(io.format(), None);
    assert_eq!(de.format(), Some(Format::Xml));
}

#[test]
fn SerdeError___kind_predicates___exactly_one_is_true() {
    let err = SerdeError::deserializing(Format::Json, "boom");

    assert!(err.is_deserialization());
    assert!(!err.is_serialization());
    assert!(!err.is_io());
}

#[test]
fn Phase___display___lowercase_label() {
    assert_eq!(Phase::Serializing.to_string(), "serializing");
    assert_eq!(Phase::Deserializing.to_string(), "deserializing");
}

//! Codec trait with JSON and XML implementations

use serde::{Serialize, de::DeserializeOwned};
use serdeio_core::{CodecConfig, Format, SerdeError, SerdeResult};
use std::io::{BufReader, Read, Write};

/// Trait for streaming payload encoding and decoding
pub trait Codec: Send + Sync {
    /// Serialize a value directly into a writer
    fn encode_to<W: Write, T: Serialize + ?Sized>(&self, writer: W, value: &T)
    -> SerdeResult<()>;

    /// Parse exactly one value from a reader
    fn decode_from<R: Read, T: DeserializeOwned>(&self, reader: R) -> SerdeResult<T>;

    /// Get the wire format of this codec
    fn format(&self) -> Format;

    /// Get the content type for this codec
    fn content_type(&self) -> &'static str {
        self.format().content_type()
    }

    /// Encode a value to bytes
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> SerdeResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.encode_to(&mut buf, value)?;
        Ok(buf)
    }

    /// Decode bytes to a value
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> SerdeResult<T> {
        self.decode_from(data)
    }
}

/// JSON codec implementation using serde_json
#[derive(Debug, Clone)]
pub struct JsonCodec {
    /// Whether to pretty-print output (default: false)
    pretty: bool,
    /// Whether each value is followed by `\n` (default: true)
    trailing_newline: bool,
}

impl JsonCodec {
    /// Create a new JSON codec
    pub fn new() -> Self {
        Self {
            pretty: false,
            trailing_newline: true,
        }
    }

    /// Create a JSON codec that pretty-prints output
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::new()
        }
    }

    pub fn from_config(config: &CodecConfig) -> Self {
        Self {
            pretty: config.pretty,
            trailing_newline: config.trailing_newline,
        }
    }

    /// Drop the newline written after each value
    pub fn without_trailing_newline(mut self) -> Self {
        self.trailing_newline = false;
        self
    }
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for JsonCodec {
    fn encode_to<W: Write, T: Serialize + ?Sized>(
        &self,
        mut writer: W,
        value: &T,
    ) -> SerdeResult<()> {
        let result = if self.pretty {
            serde_json::to_writer_pretty(&mut writer, value)
        } else {
            serde_json::to_writer(&mut writer, value)
        };
        result.map_err(|e| SerdeError::serializing(Format::Json, e))?;

        if self.trailing_newline {
            writer
                .write_all(b"\n")
                .map_err(|e| SerdeError::serializing(Format::Json, e))?;
        }
        Ok(())
    }

    fn decode_from<R: Read, T: DeserializeOwned>(&self, reader: R) -> SerdeResult<T> {
        // Deserializing without `end()` stops after the first value
        let mut de = serde_json::Deserializer::from_reader(reader);
        T::deserialize(&mut de).map_err(|e| SerdeError::deserializing(Format::Json, e))
    }

    fn format(&self) -> Format {
        Format::Json
    }
}

/// XML codec implementation using quick-xml's serde support
///
/// The root element is named after the payload type, child elements after its
/// fields. Fields renamed with an `@` prefix become attributes.
#[derive(Debug, Clone)]
pub struct XmlCodec {
    /// Indentation width, `None` for compact output
    indent: Option<usize>,
}

impl XmlCodec {
    /// Create a new XML codec with compact output
    pub fn new() -> Self {
        Self { indent: None }
    }

    /// Create an XML codec that indents nested elements
    pub fn pretty() -> Self {
        Self { indent: Some(2) }
    }

    pub fn from_config(config: &CodecConfig) -> Self {
        Self {
            indent: config.pretty.then_some(config.xml_indent),
        }
    }
}

impl Default for XmlCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for XmlCodec {
    fn encode_to<W: Write, T: Serialize + ?Sized>(&self, writer: W, value: &T) -> SerdeResult<()> {
        let mut adapter = IoAdapter::new(writer);
        let mut ser = quick_xml::se::Serializer::new(&mut adapter);
        if let Some(indent) = self.indent {
            ser.indent(' ', indent);
        }
        let result = value.serialize(ser);

        // A failed write surfaces from quick-xml as a bare fmt::Error
        if let Some(err) = adapter.error.take() {
            return Err(SerdeError::serializing(Format::Xml, err));
        }
        result
            .map(|_| ())
            .map_err(|e| SerdeError::serializing(Format::Xml, e))
    }

    fn decode_from<R: Read, T: DeserializeOwned>(&self, reader: R) -> SerdeResult<T> {
        quick_xml::de::from_reader(BufReader::new(reader))
            .map_err(|e| SerdeError::deserializing(Format::Xml, e))
    }

    fn format(&self) -> Format {
        Format::Xml
    }
}

/// Codec selected at runtime from a [`Format`]
#[derive(Debug, Clone)]
pub enum FormatCodec {
    Json(JsonCodec),
    Xml(XmlCodec),
}

impl FormatCodec {
    /// Build the codec for `format` using the given configuration
    pub fn new(format: Format, config: &CodecConfig) -> Self {
        match format {
            Format::Json => FormatCodec::Json(JsonCodec::from_config(config)),
            Format::Xml => FormatCodec::Xml(XmlCodec::from_config(config)),
        }
    }
}

impl From<Format> for FormatCodec {
    fn from(format: Format) -> Self {
        Self::new(format, &CodecConfig::default())
    }
}

impl Codec for FormatCodec {
    fn encode_to<W: Write, T: Serialize + ?Sized>(&self, writer: W, value: &T) -> SerdeResult<()> {
        match self {
            FormatCodec::Json(codec) => codec.encode_to(writer, value),
            FormatCodec::Xml(codec) => codec.encode_to(writer, value),
        }
    }

    fn decode_from<R: Read, T: DeserializeOwned>(&self, reader: R) -> SerdeResult<T> {
        match self {
            FormatCodec::Json(codec) => codec.decode_from(reader),
            FormatCodec::Xml(codec) => codec.decode_from(reader),
        }
    }

    fn format(&self) -> Format {
        match self {
            FormatCodec::Json(_) => Format::Json,
            FormatCodec::Xml(_) => Format::Xml,
        }
    }
}

/// Bridges quick-xml's `fmt::Write` output onto an `io::Write`
struct IoAdapter<W> {
    inner: W,
    error: Option<std::io::Error>,
}

impl<W: Write> IoAdapter<W> {
    fn new(inner: W) -> Self {
        Self { inner, error: None }
    }
}

impl<W: Write> std::fmt::Write for IoAdapter<W> {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            std::fmt::Error
        })
    }
}

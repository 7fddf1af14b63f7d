//! Codec configuration

use serde::{Deserialize, Serialize};

/// Output options shared by the JSON and XML codecs
///
/// All fields have defaults so a partial document such as `{"pretty": true}`
/// is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Indent output for humans (default: false)
    #[serde(default)]
    pub pretty: bool,

    /// Terminate each encoded JSON value with a newline (default: true)
    #[serde(default = "default_trailing_newline")]
    pub trailing_newline: bool,

    /// Spaces per nesting level for indented XML
    #[serde(default = "default_xml_indent")]
    pub xml_indent: usize,
}

fn default_trailing_newline() -> bool {
    true
}

fn default_xml_indent() -> usize {
    2
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            trailing_newline: default_trailing_newline(),
            xml_indent: default_xml_indent(),
        }
    }
}

impl CodecConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    /// Enable or disable indented output
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Enable or disable the newline after each JSON value
    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }

    pub fn with_xml_indent(mut self, xml_indent: usize) -> Self {
        self.xml_indent = xml_indent;
        self
    }
}

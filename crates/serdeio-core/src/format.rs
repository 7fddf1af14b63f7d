//! Supported wire formats

use serde::{Deserialize, Serialize};

/// Content type written for JSON payloads
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Content type written for XML payloads
pub const XML_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Wire format of an encoded payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    #[default]
    Json,
    Xml,
}

impl Format {
    /// The `Content-Type` header value written for this format
    pub fn content_type(&self) -> &'static str {
        match self {
            Format::Json => JSON_CONTENT_TYPE,
            Format::Xml => XML_CONTENT_TYPE,
        }
    }

    /// Map a `Content-Type` header value to a format
    ///
    /// `application/json` and any `+json` suffix map to JSON, `text/xml`,
    /// `application/xml` and any `+xml` suffix map to XML. Parameters such as
    /// `charset` are ignored.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let mime = content_type.parse::<mime::Mime>().ok()?;
        let subtype = mime.subtype();
        let suffix = mime.suffix();

        if mime.type_() == mime::APPLICATION
            && (subtype == mime::JSON || suffix == Some(mime::JSON))
        {
            return Some(Format::Json);
        }

        let xml_type = mime.type_() == mime::TEXT || mime.type_() == mime::APPLICATION;
        if xml_type && (subtype == mime::XML || suffix == Some(mime::XML)) {
            return Some(Format::Xml);
        }

        None
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Xml => write!(f, "xml"),
        }
    }
}

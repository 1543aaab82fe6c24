//! API error decoder implementations
//!
//! Each decoder handles one wire format for the `{code, message}` error
//! entity. Decoding failures here are always treated as non-fatal by the
//! error handler; the raw body remains available in the envelope either way.

use crate::error::{Error, Result};
use crate::http::ApiError;
use serde::Deserialize;
use std::fmt;

/// A decoder for the structured API error entity, keyed by media type
pub trait ApiErrorDecoder: Send + Sync + fmt::Debug {
    /// Check whether this decoder handles the given media type essence
    /// (lowercase, without parameters)
    fn supports(&self, media_type: &str) -> bool;

    /// Decode the error entity from the body text
    fn decode(&self, body: &str) -> Result<ApiError>;
}

// ============================================================================
// XML Decoder
// ============================================================================

/// Decoder for `<error><code>..</code><message>..</message></error>` bodies
#[derive(Debug, Clone, Default)]
pub struct XmlApiErrorDecoder;

impl XmlApiErrorDecoder {
    /// Create a new XML decoder
    pub fn new() -> Self {
        Self
    }
}

impl ApiErrorDecoder for XmlApiErrorDecoder {
    fn supports(&self, media_type: &str) -> bool {
        media_type == "application/xml"
            || media_type == "text/xml"
            || media_type.ends_with("+xml")
    }

    fn decode(&self, body: &str) -> Result<ApiError> {
        let body = strip_prolog(body.trim());

        if !has_root_element(body, "error") {
            return Err(Error::decode("XML document root is not <error>"));
        }

        let code = element_text(body, "code")
            .ok_or_else(|| Error::decode("missing <code> element in error document"))?;
        let message = element_text(body, "message")
            .ok_or_else(|| Error::decode("missing <message> element in error document"))?;

        Ok(ApiError {
            code: unescape_xml(code),
            message: unescape_xml(message),
        })
    }
}

/// Skip an XML declaration, if present
fn strip_prolog(xml: &str) -> &str {
    if let Some(rest) = xml.strip_prefix("<?") {
        if let Some(end) = rest.find("?>") {
            return rest[end + 2..].trim_start();
        }
    }
    xml
}

/// Check that the document's root element has the given name
fn has_root_element(xml: &str, name: &str) -> bool {
    let Some(rest) = xml.strip_prefix('<') else {
        return false;
    };
    let Some(tag_end) = rest.find(['>', ' ', '/', '\t', '\n']) else {
        return false;
    };
    &rest[..tag_end] == name
}

/// Extract the text content of the first `<tag>..</tag>` occurrence
fn element_text<'a>(xml: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let start = xml.find(&open)? + open.len();
    let end = xml[start..].find(&close)? + start;
    Some(xml[start..end].trim())
}

/// Resolve the predefined XML entities
fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

// ============================================================================
// JSON Decoder
// ============================================================================

/// Decoder for `{"code": .., "message": ..}` bodies, bare or wrapped in an
/// `"error"` envelope object
#[derive(Debug, Clone, Default)]
pub struct JsonApiErrorDecoder;

impl JsonApiErrorDecoder {
    /// Create a new JSON decoder
    pub fn new() -> Self {
        Self
    }
}

#[derive(Deserialize)]
struct WrappedApiError {
    error: ApiError,
}

impl ApiErrorDecoder for JsonApiErrorDecoder {
    fn supports(&self, media_type: &str) -> bool {
        media_type == "application/json" || media_type.ends_with("+json")
    }

    fn decode(&self, body: &str) -> Result<ApiError> {
        if let Ok(api_error) = serde_json::from_str::<ApiError>(body) {
            return Ok(api_error);
        }
        serde_json::from_str::<WrappedApiError>(body)
            .map(|wrapped| wrapped.error)
            .map_err(|e| Error::decode(format!("JSON body is not an error entity: {e}")))
    }
}

// ============================================================================
// Registry
// ============================================================================

/// The set of error decoders available to the error handler.
///
/// Fixed at construction time; lookups match decoders in registration order.
#[derive(Debug)]
pub struct DecoderRegistry {
    decoders: Vec<Box<dyn ApiErrorDecoder>>,
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self {
            decoders: vec![
                Box::new(XmlApiErrorDecoder::new()),
                Box::new(JsonApiErrorDecoder::new()),
            ],
        }
    }
}

impl DecoderRegistry {
    /// Registry with the default XML + JSON decoders
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a custom decoder set
    pub fn with_decoders(decoders: Vec<Box<dyn ApiErrorDecoder>>) -> Self {
        Self { decoders }
    }

    /// Find the first decoder supporting a media type essence
    pub fn find(&self, media_type: &str) -> Option<&dyn ApiErrorDecoder> {
        self.decoders
            .iter()
            .find(|decoder| decoder.supports(media_type))
            .map(|decoder| decoder.as_ref())
    }
}

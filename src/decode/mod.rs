//! Structured API error decoders
//!
//! Pluggable decoders for the `{code, message}` error entity, keyed by media
//! type. The API service returns XML (or JSON) error bodies; anything else —
//! an HTML page from a proxy, for instance — simply has no matching decoder.

mod decoders;

pub use decoders::{ApiErrorDecoder, DecoderRegistry, JsonApiErrorDecoder, XmlApiErrorDecoder};

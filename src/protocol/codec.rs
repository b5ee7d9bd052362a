//! Protocol codec
//!
//! Encoding and decoding functions for the JSON wire format.
//!
//! Decoding is permissive about shape: absent fields, `null` fields and
//! unknown fields are fine. It is strict about syntax: the body must be a
//! well-formed JSON object and present fields must have the right type.
//!
//! Encoding is total: every response value has a JSON form.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{DocError, Result};
use super::{
    DocumentContent, DocumentLocator, ErrorBody, LoadRequest, LoadResponse, SaveRequest,
    SaveResponse,
};

// =============================================================================
// Wire Schema
// =============================================================================

#[derive(Deserialize)]
struct LoadRequestWire {
    #[serde(default, deserialize_with = "null_as_default")]
    path: String,
}

#[derive(Deserialize)]
struct SaveRequestWire {
    #[serde(default, deserialize_with = "null_as_default")]
    path: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        alias = "json_content",
        alias = "jsonContent"
    )]
    content: String,

    #[serde(default, alias = "elm_content", alias = "elmContent")]
    companion: Option<String>,
}

#[derive(Deserialize)]
struct LoadResponseWire {
    #[serde(
        default,
        deserialize_with = "null_as_default",
        alias = "json_content",
        alias = "jsonContent"
    )]
    content: String,
}

#[derive(Deserialize)]
struct ErrorBodyWire {
    #[serde(default, deserialize_with = "null_as_default")]
    error: String,

    #[serde(default, deserialize_with = "null_as_default")]
    message: String,
}

/// `null` decodes like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse `bytes` as a JSON object and map it onto `T`
fn decode_object<T: DeserializeOwned>(bytes: &[u8], what: &str) -> Result<T> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| DocError::Decode(format!("{}: malformed JSON: {}", what, e)))?;

    // serde would happily map a JSON array onto a struct positionally
    if !value.is_object() {
        return Err(DocError::Decode(format!(
            "{}: expected a JSON object, got {}",
            what,
            json_type_name(&value)
        )));
    }

    serde_json::from_value(value).map_err(|e| DocError::Decode(format!("{}: {}", what, e)))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// Request Encoding/Decoding
// =============================================================================

/// Decode a LoadFile request body
pub fn decode_load_request(bytes: &[u8]) -> Result<LoadRequest> {
    let wire: LoadRequestWire = decode_object(bytes, "load request")?;
    Ok(LoadRequest {
        locator: DocumentLocator::new(wire.path),
    })
}

/// Decode a SaveFile request body
pub fn decode_save_request(bytes: &[u8]) -> Result<SaveRequest> {
    let wire: SaveRequestWire = decode_object(bytes, "save request")?;
    Ok(SaveRequest {
        locator: DocumentLocator::new(wire.path),
        content: DocumentContent::new(wire.content),
        companion: wire.companion,
    })
}

/// Encode a LoadFile request body
pub fn encode_load_request(request: &LoadRequest) -> Vec<u8> {
    json!({ "path": request.locator.path }).to_string().into_bytes()
}

/// Encode a SaveFile request body
///
/// `companion` is omitted when absent.
pub fn encode_save_request(request: &SaveRequest) -> Vec<u8> {
    let mut value = json!({
        "path": request.locator.path,
        "content": request.content.as_str(),
    });
    if let (Some(companion), Value::Object(map)) = (&request.companion, &mut value) {
        map.insert("companion".to_string(), Value::String(companion.clone()));
    }
    value.to_string().into_bytes()
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a LoadFile response body
pub fn encode_load_response(response: &LoadResponse) -> Vec<u8> {
    json!({ "content": response.content.as_str() })
        .to_string()
        .into_bytes()
}

/// Encode a GetFile response body
///
/// Older editors read the document from the protobuf field name
/// `json_content`.
pub fn encode_legacy_load_response(response: &LoadResponse) -> Vec<u8> {
    json!({ "json_content": response.content.as_str() })
        .to_string()
        .into_bytes()
}

/// Encode a SaveFile response body
pub fn encode_save_response(_response: &SaveResponse) -> Vec<u8> {
    b"{}".to_vec()
}

/// Encode a failure body
pub fn encode_error(body: &ErrorBody) -> Vec<u8> {
    json!({ "error": body.error, "message": body.message })
        .to_string()
        .into_bytes()
}

/// Decode a LoadFile response body
pub fn decode_load_response(bytes: &[u8]) -> Result<LoadResponse> {
    let wire: LoadResponseWire = decode_object(bytes, "load response")?;
    Ok(LoadResponse {
        content: DocumentContent::new(wire.content),
    })
}

/// Decode a failure body
pub fn decode_error_body(bytes: &[u8]) -> Result<ErrorBody> {
    let wire: ErrorBodyWire = decode_object(bytes, "error body")?;
    Ok(ErrorBody {
        error: wire.error,
        message: wire.message,
    })
}

//! Protocol Module
//!
//! Defines the wire contract between the editor and the service.
//!
//! ## Wire Format (JSON, field-named)
//!
//! ### Requests
//! ```text
//! LoadFile:  { "path": "..." }
//! SaveFile:  { "path": "...", "content": "...", "companion": "..." }
//! ```
//!
//! Missing or `null` fields decode to their zero value. The legacy names
//! `json_content` / `jsonContent` (for `content`) and `elm_content` /
//! `elmContent` (for `companion`) are accepted on decode.
//!
//! ### Responses
//! ```text
//! LoadFile:  { "content": "..." }
//! SaveFile:  { }
//! failure:   { "error": "not_found", "message": "..." }
//! ```

mod request;
mod response;
mod codec;

pub use request::{DocumentContent, DocumentLocator, LoadRequest, SaveRequest};
pub use response::{ErrorBody, LoadResponse, Outcome, SaveResponse, Status};
pub use codec::{
    decode_error_body, decode_load_request, decode_load_response, decode_save_request,
    encode_error, encode_legacy_load_response, encode_load_request, encode_load_response,
    encode_save_request, encode_save_response,
};

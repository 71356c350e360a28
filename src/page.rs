//! Page parsing and validation
//!
//! Turns the raw bytes handed back by a transport into a validated page, or
//! into the recoverable error the driver backs off on. A usable page is a
//! JSON object that carries no `errors` list and names the next cursor in
//! `next_cursor_str`; everything else is rejected here so the driver never
//! persists a page it cannot advance past.

use crate::cursor::Cursor;
use crate::error::FetchError;
use serde_json::Value;

/// Response field naming the cursor for the following page.
const NEXT_CURSOR_FIELD: &str = "next_cursor_str";

/// Response field carrying the API error list.
const ERRORS_FIELD: &str = "errors";

/// One validated page of the followers listing.
///
/// The body is kept verbatim so the store can persist exactly what the API
/// returned; the next cursor is extracted up front so a page is only ever
/// accepted when the loop can move on from it.
#[derive(Debug, Clone)]
pub struct Page {
    raw: Value,
    next_cursor: Cursor,
}

impl Page {
    /// Parse and validate one response body.
    ///
    /// Classification mirrors the driver's recovery policy: invalid UTF-8,
    /// invalid JSON, or a missing `next_cursor_str` are the decode class; a
    /// non-empty `errors` array is the API class with every message joined
    /// by `", "`.
    pub fn parse(bytes: &[u8]) -> Result<Self, FetchError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| FetchError::decode(format!("response is not UTF-8: {e}")))?;
        let raw: Value =
            serde_json::from_str(text).map_err(|e| FetchError::decode(e.to_string()))?;

        if let Some(messages) = api_error_messages(&raw) {
            return Err(FetchError::api(messages));
        }

        let next_cursor = raw
            .get(NEXT_CURSOR_FIELD)
            .and_then(Value::as_str)
            .map(Cursor::new)
            .ok_or_else(|| {
                FetchError::decode(format!("response has no {NEXT_CURSOR_FIELD} field"))
            })?;

        Ok(Self { raw, next_cursor })
    }

    /// The verbatim response body
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Cursor for the page after this one
    pub fn next_cursor(&self) -> &Cursor {
        &self.next_cursor
    }

    /// Consume the page, returning the body and the next cursor
    pub fn into_parts(self) -> (Value, Cursor) {
        (self.raw, self.next_cursor)
    }
}

/// Extract the messages of a non-empty error list, if the response carries one
fn api_error_messages(body: &Value) -> Option<Vec<String>> {
    let errors = body.get(ERRORS_FIELD)?.as_array()?;
    if errors.is_empty() {
        return None;
    }

    let messages = errors
        .iter()
        .map(|record| {
            record
                .get("message")
                .and_then(Value::as_str)
                .map_or_else(|| record.to_string(), ToString::to_string)
        })
        .collect();
    Some(messages)
}

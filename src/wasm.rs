//! WASM bindings for browser-based ISBN checks.
//!
//! JavaScript may hand over `null` or `undefined` where a string is expected.
//! Those arrive as `None` and are rejected with the missing-input error rather
//! than being treated as an invalid ISBN.

use wasm_bindgen::prelude::*;

use crate::error::Error;
use crate::isbn::Isbn;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

fn to_js(e: Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn require(value: Option<String>) -> Result<String, JsValue> {
    value.ok_or_else(|| to_js(Error::MissingInput))
}

/// Check whether a string is a valid ISBN-10 or ISBN-13.
#[wasm_bindgen(js_name = isValid)]
pub fn is_valid(sequence: Option<String>) -> Result<bool, JsValue> {
    Ok(crate::checksum::is_valid(&require(sequence)?))
}

/// Convert an ISBN-10 to ISBN-13, mirroring its hyphenation.
#[wasm_bindgen(js_name = toIsbn13)]
pub fn to_isbn13(isbn10: Option<String>) -> Result<String, JsValue> {
    crate::checksum::to_isbn13(&require(isbn10)?).map_err(to_js)
}

/// Validate an ISBN and return its 13 digits without hyphens.
#[wasm_bindgen]
pub fn normalize(number: Option<String>) -> Result<String, JsValue> {
    let isbn = Isbn::of_nullable(number.as_deref()).map_err(to_js)?;
    Ok(isbn.normalized().to_string())
}

/// Validate an ISBN and return its linguistic area tag (e.g. `JAPANESE`).
#[wasm_bindgen(js_name = linguisticArea)]
pub fn linguistic_area(number: Option<String>) -> Result<String, JsValue> {
    let isbn = Isbn::of_nullable(number.as_deref()).map_err(to_js)?;
    Ok(isbn.linguistic_area().to_string())
}

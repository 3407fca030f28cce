use js_sys::Array;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use xml2cml_core::{CmlError, ConvertOptions};

// ============================================================================
// Options
// ============================================================================

/// Options object accepted in place of a bare `trim` boolean.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmConvertOptions {
    #[serde(default)]
    pub trim: Option<bool>,
}

/// Accepts `undefined`/`null`, a boolean, or `{ trim }`.
fn parse_options(value: JsValue) -> ConvertOptions {
    if value.is_undefined() || value.is_null() {
        return ConvertOptions::default();
    }
    if let Some(trim) = value.as_bool() {
        return ConvertOptions::new().with_trim(trim);
    }
    let opts: WasmConvertOptions = serde_wasm_bindgen::from_value(value).unwrap_or_default();
    ConvertOptions::new().with_trim(opts.trim.unwrap_or(true))
}

fn type_error(err: CmlError) -> JsValue {
    js_sys::TypeError::new(&err.to_string()).into()
}

// ============================================================================
// Conversion API
// ============================================================================

/// Converts an XML document to CML.
///
/// Throws a `TypeError` when `text` is not a string or `version` is missing,
/// not a string, or blank.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { xmlToCml } from './xml2cml_wasm';
///
/// xmlToCml('<a><b></b></a>', '1.0.0'); // '<cml>1.0.0↙cml>\n<a><b>↙b>↙a>'
/// ```
#[wasm_bindgen(js_name = xmlToCml)]
pub fn xml_to_cml(text: JsValue, version: JsValue, trim: JsValue) -> Result<String, JsValue> {
    let text = text.as_string().ok_or_else(|| type_error(CmlError::NotAString))?;
    let version = version
        .as_string()
        .ok_or_else(|| type_error(CmlError::MissingVersion))?;
    xml2cml_core::xml_to_cml_with_options(&text, &version, &parse_options(trim))
        .map_err(type_error)
}

/// Converts a CML document back to XML.
///
/// Throws a `TypeError` when `text` is not a string.
#[wasm_bindgen(js_name = cmlToXml)]
pub fn cml_to_xml(text: JsValue, trim: JsValue) -> Result<String, JsValue> {
    let text = text.as_string().ok_or_else(|| type_error(CmlError::NotAString))?;
    Ok(xml2cml_core::cml_to_xml_with_options(
        &text,
        &parse_options(trim),
    ))
}

/// Joins trimmed, non-empty fragments with newlines. Non-string entries are skipped.
///
/// Throws a `TypeError` when `items` is not an array.
#[wasm_bindgen(js_name = mergeContents)]
pub fn merge_contents(items: JsValue) -> Result<String, JsValue> {
    if !Array::is_array(&items) {
        return Err(type_error(CmlError::NotAnArray));
    }
    let fragments: Vec<String> = Array::from(&items)
        .iter()
        .map(|item| item.as_string().unwrap_or_default())
        .collect();
    Ok(xml2cml_core::merge_contents(&fragments))
}

/// Returns the version carried by a leading `<cml>` header, or `undefined`.
#[wasm_bindgen(js_name = cmlVersion)]
pub fn cml_version(text: &str) -> Option<String> {
    xml2cml_core::cml_version(text).map(str::to_string)
}

//! Entry points for untyped callers.
//!
//! JavaScript bindings hand over arbitrary values; these functions apply the
//! runtime type checks (string document, non-blank string version, array for
//! merging) before delegating to the typed transforms.

use serde_json::Value as JsonValue;

use crate::convert::{ConvertOptions, cml_to_xml_with_options, xml_to_cml_with_options};
use crate::error::CmlError;
use crate::merge::merge_contents;

fn options_from(trim: Option<bool>) -> ConvertOptions {
    ConvertOptions::new().with_trim(trim.unwrap_or(true))
}

/// Forward transform on untyped arguments. A missing version is passed as `None`.
pub fn xml_to_cml_value(
    text: &JsonValue,
    version: Option<&JsonValue>,
    trim: Option<bool>,
) -> Result<String, CmlError> {
    let text = text.as_str().ok_or(CmlError::NotAString)?;
    let version = version
        .and_then(JsonValue::as_str)
        .ok_or(CmlError::MissingVersion)?;
    xml_to_cml_with_options(text, version, &options_from(trim))
}

/// Reverse transform on untyped arguments.
pub fn cml_to_xml_value(text: &JsonValue, trim: Option<bool>) -> Result<String, CmlError> {
    let text = text.as_str().ok_or(CmlError::NotAString)?;
    Ok(cml_to_xml_with_options(text, &options_from(trim)))
}

/// Merge on an untyped argument. Non-string elements count as empty and are dropped.
pub fn merge_contents_value(items: &JsonValue) -> Result<String, CmlError> {
    let items = items.as_array().ok_or(CmlError::NotAnArray)?;
    Ok(merge_contents(
        items.iter().map(|item| item.as_str().unwrap_or_default()),
    ))
}

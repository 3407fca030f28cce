#![deny(missing_docs)]
//! Node.js bindings that surface xml2cml's Rust implementation.
//!
//! Arguments arrive as JSON values so that non-string input reaches Rust and
//! is rejected with the same messages the JavaScript module used.

use napi::bindgen_prelude::*;
use napi_derive::napi;
use serde_json::Value as JsonValue;
use xml2cml_core::{CmlError, cml_to_xml_value, merge_contents_value, xml_to_cml_value};

/// Converts an XML document to CML.
///
/// # Arguments
///
/// * `text` - The XML source
/// * `version` - Semantic version written into the `<cml>` header (required, non-blank)
/// * `trim` - Strip leading/trailing whitespace first (default: true)
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { xmlToCml } = require('xml2cml-napi');
///
/// xmlToCml('<?xml version="1.0"?>\n<a><b>x</b></a>', '1.0.0');
/// // '<cml>1.0.0↙cml>\n<a><b>x↙b>↙a>'
/// ```
#[napi(js_name = "xmlToCml")]
pub fn xml_to_cml(
    text: JsonValue,
    version: Option<JsonValue>,
    trim: Option<bool>,
) -> napi::Result<String> {
    xml_to_cml_value(&text, version.as_ref(), trim).map_err(convert_error)
}

/// Converts a CML document back to XML, replacing the version header with
/// the standard UTF-8 declaration.
#[napi(js_name = "cmlToXml")]
pub fn cml_to_xml(text: JsonValue, trim: Option<bool>) -> napi::Result<String> {
    cml_to_xml_value(&text, trim).map_err(convert_error)
}

/// Joins XML or CML fragments with newlines after trimming each one.
///
/// Non-string and blank entries are skipped.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { mergeContents } = require('xml2cml-napi');
///
/// mergeContents(['  <a/>  ', '', 42, '<b/>']); // '<a/>\n<b/>'
/// ```
#[napi(js_name = "mergeContents")]
pub fn merge_contents(items: JsonValue) -> napi::Result<String> {
    merge_contents_value(&items).map_err(convert_error)
}

/// Returns the version in a leading `<cml>N.N.N↙cml>` header, or `null`.
#[napi(js_name = "cmlVersion")]
pub fn cml_version(text: String) -> Option<String> {
    xml2cml_core::cml_version(&text).map(str::to_string)
}

/// Contract violations surface as `InvalidArg` so callers can tell them from runtime failures.
fn convert_error(err: CmlError) -> Error {
    if err.is_type_error() {
        Error::new(Status::InvalidArg, err.to_string())
    } else {
        Error::from_reason(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_xml_to_cml() {
        let cml = xml_to_cml(
            json!("<?xml version=\"1.0\"?>\n<a></a>"),
            Some(json!("2.0.0")),
            None,
        )
        .unwrap();
        assert_eq!(cml, "<cml>2.0.0↙cml>\n<a>↙a>");
    }

    #[test]
    fn rejects_non_string_text() {
        let err = xml_to_cml(json!(42), Some(json!("1.0.0")), None).unwrap_err();
        assert_eq!(err.status, Status::InvalidArg);
        assert_eq!(err.reason, "Input must be a string");

        let err = cml_to_xml(json!(42), None).unwrap_err();
        assert_eq!(err.status, Status::InvalidArg);
    }

    #[test]
    fn rejects_missing_or_blank_version() {
        for version in [None, Some(JsonValue::Null), Some(json!("")), Some(json!("   "))] {
            let err = xml_to_cml(json!("<a></a>"), version, None).unwrap_err();
            assert_eq!(err.status, Status::InvalidArg);
            assert_eq!(
                err.reason,
                "Version parameter is required and must be a non-empty string"
            );
        }
    }

    #[test]
    fn reverse_with_trim_disabled() {
        let xml = cml_to_xml(json!("<cml>1.0.0↙cml>\n<a>↙a>\n"), Some(false)).unwrap();
        assert_eq!(xml, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<a></a>\n");
    }

    #[test]
    fn merge_validates_array() {
        let err = merge_contents(json!("not-an-array")).unwrap_err();
        assert_eq!(err.status, Status::InvalidArg);
        assert_eq!(err.reason, "Input must be an array of strings");

        let merged = merge_contents(json!(["  <a/>  ", "", "  ", "<b/>"])).unwrap();
        assert_eq!(merged, "<a/>\n<b/>");
    }

    #[test]
    fn reads_header_version() {
        assert_eq!(
            cml_version("<cml>1.2.3↙cml>\n<a/>".to_string()).as_deref(),
            Some("1.2.3")
        );
        assert_eq!(cml_version("<a/>".to_string()), None);
    }
}

//! Forward (XML → CML) and reverse (CML → XML) transforms.
//!
//! Both directions are purely lexical: closing tags are rewritten by pattern,
//! nesting and balance are never checked.

use crate::error::CmlError;
use crate::patterns::{
    CML_CLOSING_TAG_RE, MARKER, VERSION_HEADER_RE, VERSION_TAG, XML_CLOSING_TAG_RE,
    XML_DECLARATION, XML_DECLARATION_RE,
};

/// Options shared by both transforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Strip leading/trailing whitespace from the input before rewriting.
    pub trim: bool,
}

impl ConvertOptions {
    /// Defaults: trimming enabled.
    pub const fn new() -> Self {
        Self { trim: true }
    }

    /// Returns a copy with the trim flag set.
    pub const fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Whitespace as JavaScript's `String.prototype.trim` sees it (includes the BOM, excludes NEL).
fn is_trimmable(ch: char) -> bool {
    ch == '\u{feff}' || (ch.is_whitespace() && ch != '\u{85}')
}

pub(crate) fn trim_document(input: &str) -> &str {
    input.trim_matches(is_trimmable)
}

/// Converts an XML document to CML using default options.
///
/// ```
/// use xml2cml_core::xml_to_cml;
///
/// let cml = xml_to_cml("<a><b>x</b></a>", "1.0.0").unwrap();
/// assert_eq!(cml, "<cml>1.0.0↙cml>\n<a><b>x↙b>↙a>");
/// ```
pub fn xml_to_cml(xml: &str, version: &str) -> Result<String, CmlError> {
    xml_to_cml_with_options(xml, version, &ConvertOptions::default())
}

/// Converts an XML document to CML.
///
/// The version is inserted verbatim into the `<cml>` header; it only has to be
/// non-blank. A leading `<?xml ...?>` declaration is dropped.
pub fn xml_to_cml_with_options(
    xml: &str,
    version: &str,
    options: &ConvertOptions,
) -> Result<String, CmlError> {
    if trim_document(version).is_empty() {
        return Err(CmlError::MissingVersion);
    }

    let input = if options.trim { trim_document(xml) } else { xml };
    let body = XML_DECLARATION_RE.replace(input, "");
    let converted = XML_CLOSING_TAG_RE.replace_all(&body, format!("{MARKER}${{1}}>").as_str());

    let mut out = String::with_capacity(converted.len() + version.len() + 16);
    out.push('<');
    out.push_str(VERSION_TAG);
    out.push('>');
    out.push_str(version);
    out.push(MARKER);
    out.push_str(VERSION_TAG);
    out.push_str(">\n");
    out.push_str(&converted);

    log::trace!(
        "xml_to_cml: {} bytes in, {} bytes out, version {}",
        xml.len(),
        out.len(),
        version
    );
    Ok(out)
}

/// Converts a CML document to XML using default options.
pub fn cml_to_xml(cml: &str) -> String {
    cml_to_xml_with_options(cml, &ConvertOptions::default())
}

/// Converts a CML document to XML.
///
/// A leading `<cml>N.N.N↙cml>` header is removed whatever version it carries,
/// and the standard UTF-8 declaration is prepended.
pub fn cml_to_xml_with_options(cml: &str, options: &ConvertOptions) -> String {
    let input = if options.trim { trim_document(cml) } else { cml };
    let body = VERSION_HEADER_RE.replace(input, "");
    let converted = CML_CLOSING_TAG_RE.replace_all(&body, "</${1}>");

    let mut out = String::with_capacity(XML_DECLARATION.len() + 1 + converted.len());
    out.push_str(XML_DECLARATION);
    out.push('\n');
    out.push_str(&converted);

    log::trace!("cml_to_xml: {} bytes in, {} bytes out", cml.len(), out.len());
    out
}

/// Returns the version carried by a leading CML header, if any.
///
/// Leading whitespace is ignored, matching the default trimming of [`cml_to_xml`].
pub fn cml_version(cml: &str) -> Option<&str> {
    let input = cml.trim_start_matches(is_trimmable);
    VERSION_HEADER_RE
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

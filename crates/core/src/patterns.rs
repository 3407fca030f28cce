//! Cached regex patterns for the XML/CML rewrites.
//!
//! Tag names are restricted to ASCII word characters (`(?-u:\w)`), so the
//! marker character and any non-ASCII letters never count as part of a name.

use once_cell::sync::Lazy;
use regex::Regex;

/// Character that stands in for `</` in CML documents.
pub const MARKER: char = '↙';

/// Name of the tag wrapping the CML version header.
pub const VERSION_TAG: &str = "cml";

/// Declaration line prepended by the reverse transform.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Leading `<?xml ...?>` prolog plus trailing whitespace.
pub static XML_DECLARATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\A<\?xml[^>]*\?>\s*").expect("valid declaration pattern"));

/// Leading `<cml>N.N.N↙cml>` header plus trailing whitespace. Group 1 is the version.
pub static VERSION_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\A<cml>([0-9]+\.[0-9]+\.[0-9]+)↙cml>\s*").expect("valid header pattern")
});

/// XML closing tag `</name>`. Group 1 is the name.
pub static XML_CLOSING_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</((?-u:\w)+)>").expect("valid closing tag pattern"));

/// CML closing tag `↙name>`. Group 1 is the name.
pub static CML_CLOSING_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"↙((?-u:\w)+)>").expect("valid marker pattern"));

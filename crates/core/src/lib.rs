#![deny(missing_docs)]
//! xml2cml core: lexical conversion between XML and the CML markup dialect.

/// XML ↔ CML transforms and their options.
pub mod convert;
/// Contract-violation errors.
pub mod error;
/// Fragment concatenation.
pub mod merge;
/// Compiled patterns and dialect constants.
pub mod patterns;
/// Type-checked entry points for untyped (JavaScript) callers.
pub mod value;

pub use convert::{
    ConvertOptions, cml_to_xml, cml_to_xml_with_options, cml_version, xml_to_cml,
    xml_to_cml_with_options,
};
pub use error::CmlError;
pub use merge::merge_contents;
pub use patterns::{MARKER, VERSION_TAG, XML_DECLARATION};
pub use value::{cml_to_xml_value, merge_contents_value, xml_to_cml_value};

use thiserror::Error;

/// Errors raised when a conversion is called with arguments that break its contract.
///
/// Every variant is a type/contract violation. Markup content itself never
/// produces an error: anything the patterns do not recognise passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CmlError {
    /// The document argument was not a string.
    #[error("Input must be a string")]
    NotAString,
    /// The version argument was missing, not a string, or blank.
    #[error("Version parameter is required and must be a non-empty string")]
    MissingVersion,
    /// The merge argument was not an ordered sequence.
    #[error("Input must be an array of strings")]
    NotAnArray,
}

impl CmlError {
    /// Whether the error should surface as a `TypeError` on the JavaScript side.
    ///
    /// All current variants are contract violations, so this is always true.
    pub fn is_type_error(&self) -> bool {
        match self {
            CmlError::NotAString | CmlError::MissingVersion | CmlError::NotAnArray => true,
        }
    }

    /// Short machine-readable code for the variant.
    pub fn code(&self) -> &'static str {
        match self {
            CmlError::NotAString => "not_a_string",
            CmlError::MissingVersion => "missing_version",
            CmlError::NotAnArray => "not_an_array",
        }
    }
}

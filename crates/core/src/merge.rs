//! Concatenation of XML or CML fragments into one document.

use crate::convert::trim_document;

/// Trims every fragment, drops the ones left empty, and joins the rest with `\n`.
///
/// Works the same for XML and CML input; no markup is inspected.
///
/// ```
/// use xml2cml_core::merge_contents;
///
/// assert_eq!(merge_contents(["  <a/>  ", "", "  ", "<b/>"]), "<a/>\n<b/>");
/// assert_eq!(merge_contents(Vec::<String>::new()), "");
/// ```
pub fn merge_contents<I, S>(inputs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut merged = String::new();
    let mut kept = 0usize;
    for input in inputs {
        let trimmed = trim_document(input.as_ref());
        if trimmed.is_empty() {
            continue;
        }
        if kept > 0 {
            merged.push('\n');
        }
        merged.push_str(trimmed);
        kept += 1;
    }
    log::trace!("merge_contents: kept {} fragments, {} bytes", kept, merged.len());
    merged
}

//! PDF text extraction — document bytes in, page-ordered plain text out.

use lopdf::Document;
use thiserror::Error;
use tracing::debug;

/// The byte stream could not be opened as a PDF at all (corrupt header,
/// wrong format). Individual pages without extractable text are not an
/// error and never raise this.
#[derive(Debug, Error)]
#[error("not a readable PDF document: {0}")]
pub struct DocumentParseError(#[from] lopdf::Error);

/// Extracts the full plain-text content of a PDF, concatenated in
/// ascending page order.
///
/// A page that yields no text (scanned image, broken content stream)
/// contributes an empty string; one bad page never aborts extraction of
/// the remaining pages.
pub fn extract_text(bytes: &[u8]) -> Result<String, DocumentParseError> {
    let document = Document::load_mem(bytes)?;
    let pages = document.get_pages();

    let mut text = String::new();
    for (&page_number, _) in &pages {
        match document.extract_text(&[page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => debug!("page {page_number}: no extractable text ({e})"),
        }
    }
    Ok(text)
}

use lopdf::Document;

use crate::error::ExtractError;

/// Extract text from PDF bytes.
///
/// Pages are visited in page order. A page whose text cannot be extracted
/// contributes nothing rather than failing the document; page texts are
/// trimmed and joined with a single newline. A PDF with no pages or no
/// extractable text yields an empty string, not an error.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractError::PdfParse(e.to_string()))?;

    let mut pages = Vec::new();
    for (page_num, _page_id) in doc.get_pages() {
        let text = doc.extract_text(&[page_num]).unwrap_or_default();
        let text = text.trim();
        if !text.is_empty() {
            pages.push(text.to_string());
        }
    }

    Ok(pages.join("\n"))
}

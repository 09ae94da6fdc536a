/*!
 * Document loading.
 *
 * A document is turned into a single text blob: the text of every page that
 * produced any, each followed by a newline. Page extraction sits behind the
 * `PageExtractor` trait; `PdfExtractor` is the production implementation.
 */

use log::debug;
use std::fmt;
use std::panic;
use std::path::Path;

use crate::errors::AppError;
use crate::file_utils::FileManager;

/// Extracts the text of each page of a document, in page order
pub trait PageExtractor {
    /// Return one string per page. A page without text is an empty string.
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, AppError>;
}

/// PDF page extraction backed by the `pdf-extract` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl PageExtractor for PdfExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, AppError> {
        let unreadable = |message: String| AppError::DocumentUnreadable {
            path: path.to_path_buf(),
            message,
        };

        let bytes = FileManager::read_bytes(path).map_err(|e| unreadable(format!("{:#}", e)))?;

        // The parser can panic on malformed input; treat that as a parse error
        match panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(&bytes)) {
            Ok(Ok(pages)) => Ok(pages),
            Ok(Err(e)) => Err(unreadable(e.to_string())),
            Err(_) => Err(unreadable("PDF parser panicked on malformed input".to_string())),
        }
    }
}

/// Full text of a loaded document. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentText {
    text: String,
    page_count: usize,
}

impl DocumentText {
    /// Build a document from page texts, skipping pages without text
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        let mut page_count = 0;
        for page in pages {
            let page = page.as_ref();
            if page.is_empty() {
                continue;
            }
            text.push_str(page);
            text.push('\n');
            page_count += 1;
        }
        Self { text, page_count }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of pages that contributed text
    pub fn page_count(&self) -> usize {
        self.page_count
    }
}

impl fmt::Display for DocumentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Join page texts into one blob. Empty pages contribute nothing.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DocumentText::from_pages(pages).text
}

/// Loads a document through a page extractor
#[derive(Debug, Default, Clone)]
pub struct DocumentLoader<E = PdfExtractor> {
    extractor: E,
}

impl DocumentLoader<PdfExtractor> {
    /// Loader for PDF documents
    pub fn pdf() -> Self {
        Self { extractor: PdfExtractor }
    }
}

impl<E: PageExtractor> DocumentLoader<E> {
    /// Loader using a custom extractor
    pub fn new(extractor: E) -> Self {
        Self { extractor }
    }

    /// Load the document at `path`. No partial result is returned on failure.
    pub fn load(&self, path: &Path) -> Result<DocumentText, AppError> {
        if !FileManager::file_exists(path) {
            return Err(AppError::DocumentNotFound(path.to_path_buf()));
        }

        let pages = self.extractor.extract_pages(path)?;
        let total = pages.len();
        let document = DocumentText::from_pages(pages);
        debug!(
            "Extracted {} characters from {} of {} page(s)",
            document.len(),
            document.page_count(),
            total
        );
        Ok(document)
    }
}

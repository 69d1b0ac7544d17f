//! PDFium-backed document source.
//!
//! Binds to a system PDFium library via `pdfium-render`. A fresh document
//! handle is loaded per operation and dropped when the operation returns,
//! which sidesteps the self-referential lifetime between `Pdfium` and its
//! documents and guarantees the handle is released on every exit path.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use pdfium_render::prelude::*;

use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::source::{DocumentSource, TextBlock};

/// Document source reading pages through PDFium.
///
/// ```ignore
/// use pdf_lexstat::source::pdfium::PdfiumSource;
///
/// let mut source = PdfiumSource::open("scan.pdf")?;
/// assert!(source.page_count() > 0);
/// ```
pub struct PdfiumSource {
    pdfium: Pdfium,
    path: PathBuf,
    page_count: usize,
}

impl PdfiumSource {
    /// Open a document, validating that PDFium can parse it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Open`] when no PDFium library can be bound or the
    /// file is corrupt or not a PDF.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let bindings = Pdfium::bind_to_system_library()
            .or_else(|_| {
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./lib"))
            })
            .map_err(|e| Error::Open(format!("failed to bind PDFium: {e}")))?;
        let pdfium = Pdfium::new(bindings);

        let path = path.as_ref().to_path_buf();
        let page_count = {
            let document = pdfium
                .load_pdf_from_file(&path, None)
                .map_err(|e| Error::Open(format!("{}: {e}", path.display())))?;
            document.pages().len() as usize
        };

        Ok(Self {
            pdfium,
            path,
            page_count,
        })
    }

    /// Load the document and run `f` against one page.
    ///
    /// The document handle lives only for the duration of the closure.
    fn with_page<T>(&self, index: usize, f: impl FnOnce(&PdfPage<'_>) -> Result<T>) -> Result<T> {
        let document = self
            .pdfium
            .load_pdf_from_file(&self.path, None)
            .map_err(|e| Error::Open(format!("{}: {e}", self.path.display())))?;
        let page = document
            .pages()
            .get(index as u16)
            .map_err(|e| Error::PageRender {
                page: index + 1,
                reason: e.to_string(),
            })?;
        f(&page)
    }
}

impl DocumentSource for PdfiumSource {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn page_width(&self, index: usize) -> Result<f32> {
        self.with_page(index, |page| Ok(page.width().value))
    }

    fn text_blocks(&mut self, index: usize) -> Result<Vec<TextBlock>> {
        self.with_page(index, |page| {
            // PDF coordinates are bottom-up; flip to the top-down space the
            // reading-order sort expects.
            let page_height = page.height().value;
            let text = page.text().map_err(|e| Error::PageRender {
                page: index + 1,
                reason: e.to_string(),
            })?;

            let mut blocks = Vec::new();
            for segment in text.segments().iter() {
                let bounds = segment.bounds();
                let bbox = Rect::from_points(
                    bounds.left.value,
                    page_height - bounds.top.value,
                    bounds.right.value,
                    page_height - bounds.bottom.value,
                );
                blocks.push(TextBlock::new(segment.text(), bbox));
            }
            Ok(blocks)
        })
    }

    fn render_page(&mut self, index: usize, dpi: u32) -> Result<DynamicImage> {
        self.with_page(index, |page| {
            let scale = dpi as f32 / 72.0;
            let config = PdfRenderConfig::new().scale_page_by_factor(scale);
            let bitmap = page
                .render_with_config(&config)
                .map_err(|e| Error::PageRender {
                    page: index + 1,
                    reason: e.to_string(),
                })?;
            Ok(bitmap.as_image())
        })
    }
}

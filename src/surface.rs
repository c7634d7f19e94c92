use crate::document::Document;
use crate::font::Font;
use crate::info::Info;
use crate::layout::{Geometry, Margins, Surface};
use crate::page::{LineLayout, Page, SpanFont};
use crate::pagesize::PageSize;
use crate::units::Pt;
use crate::PDFError;
use std::io::Write;
use std::path::Path;

/// A [Surface] that collects pages into an in-memory PDF [Document].
///
/// Nothing touches the disk until [PdfSurface::finish], which writes the whole
/// document in one go.
pub struct PdfSurface {
    document: Document,
    font: SpanFont,
    page_size: PageSize,
    margins: Margins,
    current: Page,
}

impl PdfSurface {
    /// Start an empty document whose pages share `geometry`, with every line set in `font`
    pub fn new(font: Font, geometry: &Geometry, info: Info) -> PdfSurface {
        let mut document = Document::default();
        document.set_info(info);
        let id = document.add_font(font);

        PdfSurface {
            document,
            font: SpanFont {
                id,
                size: geometry.font_size,
            },
            page_size: geometry.page_size,
            margins: geometry.margins,
            current: Page::new(geometry.page_size, Some(geometry.margins)),
        }
    }

    /// Pages flushed so far
    pub fn pages(&self) -> &[Page] {
        &self.document.pages
    }

    /// Consume the surface and return the document built so far. Lines placed
    /// after the last flush become a final page.
    pub fn into_document(mut self) -> Document {
        if !self.current.is_empty() {
            let page = std::mem::replace(&mut self.current, Page::new(self.page_size, Some(self.margins)));
            self.document.add_page(page);
        }
        self.document
    }

    /// Render the document into `w`
    pub fn write<W: Write>(self, w: W) -> Result<(), PDFError> {
        self.into_document().write(w)
    }

    /// Render the document to `path`.
    ///
    /// The document is written to a temporary file next to `path` and only
    /// renamed into place once it is complete, so a failed run never leaves a
    /// truncated file behind or clobbers an existing one.
    pub fn finish<P: AsRef<Path>>(self, path: P) -> Result<(), PDFError> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        self.write(file.as_file_mut())?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(|e| e.error)?;

        log::debug!("wrote {}", path.display());
        Ok(())
    }
}

impl Surface for PdfSurface {
    fn place_line(&mut self, text: &str, origin: (Pt, Pt), char_spacing: Pt) -> Result<(), PDFError> {
        self.current.add_line(LineLayout {
            text: text.to_string(),
            font: self.font,
            char_spacing,
            coords: origin,
        });
        Ok(())
    }

    fn flush_page(&mut self) -> Result<(), PDFError> {
        let page = std::mem::replace(&mut self.current, Page::new(self.page_size, Some(self.margins)));
        self.document.add_page(page);
        Ok(())
    }
}

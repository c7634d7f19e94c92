//! End-to-end conversion of a text file into a PDF document.

use crate::font::{BuiltinFont, Font};
use crate::info::Info;
use crate::layout::{paginate, wrap_file, Capacity, Geometry};
use crate::surface::PdfSurface;
use crate::PDFError;
use std::path::PathBuf;

/// Which font to set the text in
#[derive(Debug, Clone, PartialEq)]
pub enum FontChoice {
    Builtin(BuiltinFont),
    /// A TTF/OTF file, embedded into the document
    File(PathBuf),
}

impl FontChoice {
    /// Interpret `value` as a built-in font name first, and as a font file path otherwise
    pub fn parse(value: &str) -> FontChoice {
        BuiltinFont::from_name(value)
            .map(FontChoice::Builtin)
            .unwrap_or_else(|| FontChoice::File(PathBuf::from(value)))
    }

    pub fn load(&self) -> Result<Font, PDFError> {
        match self {
            FontChoice::Builtin(builtin) => Ok(Font::Builtin(*builtin)),
            FontChoice::File(path) => Font::load_file(path),
        }
    }
}

impl Default for FontChoice {
    fn default() -> Self {
        FontChoice::Builtin(BuiltinFont::Courier)
    }
}

/// Everything a conversion needs, fully resolved
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub font: FontChoice,
    pub geometry: Geometry,
    pub info: Info,
}

/// What a successful conversion produced
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub capacity: Capacity,
    pub pages: usize,
    pub source_lines: usize,
    /// Source lines that had to be split, 1-based
    pub wrapped_lines: Vec<usize>,
}

/// Convert `settings.input` into a PDF at `settings.output`.
///
/// The font and geometry are checked before the input is opened, and the
/// output file only appears once the whole document has been rendered: any
/// error leaves no output behind.
pub fn convert(settings: &Settings) -> Result<Report, PDFError> {
    let font = settings.font.load()?;
    let capacity = settings.geometry.measure(&font)?;

    let mut lines = wrap_file(&settings.input, capacity.chars_per_line)?;
    log::info!(
        "Printing '{}' with {} characters per line and {} lines per page...",
        settings.input.display(),
        capacity.chars_per_line,
        capacity.lines_per_page
    );

    let mut surface = PdfSurface::new(font, &settings.geometry, settings.info.clone());
    let pages = paginate(
        lines.by_ref(),
        capacity.lines_per_page,
        &settings.geometry.line_grid(),
        &mut surface,
    )?;
    surface.finish(&settings.output)?;

    log::info!("PDF document: {pages} pages");

    Ok(Report {
        capacity,
        pages,
        source_lines: lines.source_lines(),
        wrapped_lines: lines.warnings().iter().map(|w| w.line).collect(),
    })
}

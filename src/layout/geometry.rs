use super::Margins;
use crate::font::Font;
use crate::pagesize::PageSize;
use crate::units::Pt;
use crate::PDFError;

/// Line spacing used when no explicit leading is given, as a multiple of the font size
pub const DEFAULT_LEADING_FACTOR: f32 = 1.2;

/// The character whose advance width is taken as the width of one grid cell
pub const MEASURING_GLYPH: char = '.';

/// Relative slack for f32 rounding in page sizes, margins and glyph widths
const RATIO_TOLERANCE: f64 = 1e-6;

/// How many whole cells fit in `span`. Ratios that are integers on paper can
/// come out a hair below after f32 rounding, so they are nudged up first.
fn whole_cells(span: f64, cell: f64) -> f64 {
    (span / cell * (1.0 + RATIO_TOLERANCE)).floor()
}

/// Physical page set-up, fully resolved into points
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Geometry {
    pub page_size: PageSize,
    pub margins: Margins,
    pub font_size: Pt,
    /// Uniform extra space inserted between every pair of characters
    pub kerning: Pt,
    /// Distance between consecutive baselines. Defaults to 1.2 × the font size.
    pub leading: Option<Pt>,
}

/// How much text fits on one page
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Capacity {
    pub chars_per_line: usize,
    pub lines_per_page: usize,
}

/// Where the lines of a page are placed
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineGrid {
    /// Baseline start of the first line on every page
    pub origin: (Pt, Pt),
    /// Downward step between consecutive baselines
    pub leading: Pt,
    pub char_spacing: Pt,
}

impl LineGrid {
    /// Baseline start of the line in the 0-based `slot` of a page
    pub fn slot(&self, slot: usize) -> (Pt, Pt) {
        (self.origin.0, self.origin.1 - self.leading * slot as f32)
    }
}

impl Geometry {
    pub fn new(page_size: PageSize, margins: Margins, font_size: Pt) -> Geometry {
        Geometry {
            page_size,
            margins,
            font_size,
            kerning: Pt(0.0),
            leading: None,
        }
    }

    pub fn with_kerning(mut self, kerning: Pt) -> Geometry {
        self.kerning = kerning;
        self
    }

    pub fn with_leading(mut self, leading: Option<Pt>) -> Geometry {
        self.leading = leading;
        self
    }

    pub fn effective_leading(&self) -> Pt {
        self.leading
            .unwrap_or(self.font_size * DEFAULT_LEADING_FACTOR)
    }

    /// Width between the left and right margins
    pub fn usable_width(&self) -> Pt {
        self.page_size.0 - self.margins.horizontal()
    }

    /// Height between the top and bottom margins, less the height of the
    /// first line itself
    pub fn usable_height(&self) -> Pt {
        self.page_size.1 - self.margins.vertical() - self.font_size
    }

    /// Reject values no sensible page can be built from
    pub fn validate(&self) -> Result<(), PDFError> {
        let Margins {
            top,
            right,
            bottom,
            left,
        } = self.margins;
        let values = [
            ("page width", self.page_size.0),
            ("page height", self.page_size.1),
            ("top margin", top),
            ("right margin", right),
            ("bottom margin", bottom),
            ("left margin", left),
            ("font size", self.font_size),
            ("kerning", self.kerning),
            ("leading", self.effective_leading()),
        ];
        if let Some((name, _)) = values.iter().find(|(_, value)| !value.0.is_finite()) {
            return Err(PDFError::InvalidGeometry(format!("{name} is not a finite number")));
        }

        if self.page_size.0 <= Pt(0.0) || self.page_size.1 <= Pt(0.0) {
            return Err(PDFError::InvalidGeometry(format!(
                "page size {} x {} pt must be positive",
                self.page_size.0, self.page_size.1
            )));
        }
        if let Some((name, value)) = values[2..6].iter().find(|(_, value)| *value < Pt(0.0)) {
            return Err(PDFError::InvalidGeometry(format!(
                "{name} of {value} pt is negative"
            )));
        }
        if self.font_size <= Pt(0.0) {
            return Err(PDFError::InvalidGeometry(format!(
                "font size {} pt must be positive",
                self.font_size
            )));
        }
        if self.effective_leading() <= Pt(0.0) {
            return Err(PDFError::InvalidGeometry(format!(
                "leading {} pt must be positive",
                self.effective_leading()
            )));
        }
        if self.usable_width() <= Pt(0.0) {
            return Err(PDFError::InvalidGeometry(format!(
                "left and right margins ({} pt) leave no room on a {} pt wide page",
                self.margins.horizontal(),
                self.page_size.0
            )));
        }
        if self.page_size.1 - self.margins.vertical() <= Pt(0.0) {
            return Err(PDFError::InvalidGeometry(format!(
                "top and bottom margins ({} pt) leave no room on a {} pt high page",
                self.margins.vertical(),
                self.page_size.1
            )));
        }

        Ok(())
    }

    /// Compute the page capacity for a grid cell `glyph_width` wide.
    ///
    /// `chars_per_line = floor((usable_width + kerning) / (glyph_width + kerning))`
    /// and `lines_per_page = floor((leading + usable_height) / leading)`. Either
    /// coming out below one is a configuration error.
    pub fn capacity(&self, glyph_width: Pt) -> Result<Capacity, PDFError> {
        self.validate()?;

        let cell = glyph_width + self.kerning;
        if cell.0.is_nan() || cell.0 <= 0.0 {
            return Err(PDFError::InvalidGeometry(format!(
                "glyph width {glyph_width} pt plus kerning {} pt must be positive",
                self.kerning
            )));
        }

        let chars_per_line = whole_cells(
            f64::from(self.usable_width().0) + f64::from(self.kerning.0),
            f64::from(glyph_width.0) + f64::from(self.kerning.0),
        );
        if chars_per_line < 1.0 {
            return Err(PDFError::InvalidGeometry(format!(
                "no character fits in the {} pt between the margins",
                self.usable_width()
            )));
        }

        let leading = self.effective_leading();
        let lines_per_page = whole_cells(
            f64::from(leading.0) + f64::from(self.usable_height().0),
            f64::from(leading.0),
        );
        if lines_per_page < 1.0 {
            return Err(PDFError::InvalidGeometry(format!(
                "no line of {} pt text fits in the {} pt between the margins",
                self.font_size,
                self.page_size.1 - self.margins.vertical()
            )));
        }

        Ok(Capacity {
            chars_per_line: chars_per_line as usize,
            lines_per_page: lines_per_page as usize,
        })
    }

    /// Compute the page capacity using the width of `font`'s period glyph
    pub fn measure(&self, font: &Font) -> Result<Capacity, PDFError> {
        let glyph_width = font
            .advance_width(MEASURING_GLYPH, self.font_size)
            .ok_or(PDFError::MissingGlyph(MEASURING_GLYPH))?;
        self.capacity(glyph_width)
    }

    /// The first baseline sits one font size below the top margin, at the left margin
    pub fn line_grid(&self) -> LineGrid {
        LineGrid {
            origin: (
                self.margins.left,
                self.page_size.1 - self.margins.top - self.font_size,
            ),
            leading: self.effective_leading(),
            char_spacing: self.kerning,
        }
    }
}

//! Monospaced page layout: how much text fits on a page, how long lines are
//! cut to fit, and how the resulting lines are distributed over pages.
//!
//! The pieces are meant to be chained:
//!
//! - [`Geometry::measure`](crate::layout::Geometry::measure) turns the page set-up and font into a [`Capacity`](crate::layout::Capacity)
//! - [`wrap`](crate::layout::wrap()) cuts the input into display lines of at most `chars_per_line` characters
//! - [`paginate`](crate::layout::paginate) places those lines onto a [`Surface`](crate::layout::Surface), `lines_per_page` at a time
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use txt2pdf::font::{BuiltinFont, Font};
//! use txt2pdf::layout::{paginate, wrap, Geometry, Margins};
//! use txt2pdf::{pagesize, Cm, Info, PdfSurface, Pt};
//!
//! let font = Font::Builtin(BuiltinFont::Courier);
//! let geometry = Geometry::new(pagesize::A4, Margins::all(Cm(2.0)), Pt(10.0));
//! let capacity = geometry.measure(&font).expect("A4 has room for text");
//!
//! let text = "Hello, world!\n".repeat(100);
//! let lines = wrap(Cursor::new(text), "greeting", capacity.chars_per_line);
//!
//! let mut surface = PdfSurface::new(font, &geometry, Info::default());
//! let pages = paginate(lines, capacity.lines_per_page, &geometry.line_grid(), &mut surface)
//!     .expect("can lay out the text");
//! assert_eq!(pages, 2);
//! ```

mod geometry;
mod margins;
mod paginate;
mod wrap;

pub use geometry::*;
pub use margins::*;
pub use paginate::*;
pub use wrap::*;

//! Turn plain text files into paginated, monospaced PDF documents.
//!
//! Long lines are cut to fit the page width and the resulting lines are laid
//! out on a fixed grid, page after page. See [layout] for the layout pipeline
//! and [convert()] for the one-call file-to-file conversion.

mod content;

pub mod convert;
pub use convert::{convert, FontChoice, Report, Settings};

mod document;
pub use document::*;

pub mod font;
pub use font::Font;

mod info;
pub use info::*;

/// Page geometry, line wrapping and pagination
pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod surface;
pub use surface::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;

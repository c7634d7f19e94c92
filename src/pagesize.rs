//! Pre-defined page sizes for common paper formats, looked up by name.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height,
//! with the exception of `LEDGER`, which is tabloid turned on its side.
//! Use the [`PageOrientation`](crate::pagesize::PageOrientation) trait to convert between portrait and landscape.
//!
//! # Example
//!
//! ```
//! use txt2pdf::pagesize::{self, PageOrientation};
//!
//! let a4 = pagesize::by_name("a4").expect("A4 is a known size");
//! let landscape = a4.landscape();
//! assert!(landscape.0 > landscape.1);
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

// north american sizes
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const HALF_LETTER: PageSize = (Pt(5.5 * 72.0), Pt(8.5 * 72.0));
pub const JUNIOR_LEGAL: PageSize = (Pt(5.0 * 72.0), Pt(8.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));
pub const TABLOID: PageSize = (Pt(11.0 * 72.0), Pt(17.0 * 72.0));
pub const LEDGER: PageSize = (Pt(17.0 * 72.0), Pt(11.0 * 72.0));

// iso a-series (converted from mm to points)
pub const A0: PageSize = (Pt(841.0 * 72.0 / 25.4), Pt(1189.0 * 72.0 / 25.4));
pub const A1: PageSize = (Pt(594.0 * 72.0 / 25.4), Pt(841.0 * 72.0 / 25.4));
pub const A2: PageSize = (Pt(420.0 * 72.0 / 25.4), Pt(594.0 * 72.0 / 25.4));
pub const A3: PageSize = (Pt(297.0 * 72.0 / 25.4), Pt(420.0 * 72.0 / 25.4));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));
pub const A6: PageSize = (Pt(105.0 * 72.0 / 25.4), Pt(148.0 * 72.0 / 25.4));

// iso b-series
pub const B0: PageSize = (Pt(1000.0 * 72.0 / 25.4), Pt(1414.0 * 72.0 / 25.4));
pub const B1: PageSize = (Pt(707.0 * 72.0 / 25.4), Pt(1000.0 * 72.0 / 25.4));
pub const B2: PageSize = (Pt(500.0 * 72.0 / 25.4), Pt(707.0 * 72.0 / 25.4));
pub const B3: PageSize = (Pt(353.0 * 72.0 / 25.4), Pt(500.0 * 72.0 / 25.4));
pub const B4: PageSize = (Pt(250.0 * 72.0 / 25.4), Pt(353.0 * 72.0 / 25.4));
pub const B5: PageSize = (Pt(176.0 * 72.0 / 25.4), Pt(250.0 * 72.0 / 25.4));
pub const B6: PageSize = (Pt(125.0 * 72.0 / 25.4), Pt(176.0 * 72.0 / 25.4));

/// Every size that can be looked up with [by_name], keyed by its canonical name
pub const NAMED_SIZES: &[(&str, PageSize)] = &[
    ("A0", A0),
    ("A1", A1),
    ("A2", A2),
    ("A3", A3),
    ("A4", A4),
    ("A5", A5),
    ("A6", A6),
    ("B0", B0),
    ("B1", B1),
    ("B2", B2),
    ("B3", B3),
    ("B4", B4),
    ("B5", B5),
    ("B6", B6),
    ("LETTER", LETTER),
    ("HALF_LETTER", HALF_LETTER),
    ("JUNIOR_LEGAL", JUNIOR_LEGAL),
    ("LEGAL", LEGAL),
    ("TABLOID", TABLOID),
    ("ELEVENSEVENTEEN", TABLOID),
    ("LEDGER", LEDGER),
];

/// Look up a paper size by name, ignoring case and treating `-` like `_`
/// (so `a4`, `Letter` and `half-letter` all resolve).
pub fn by_name(name: &str) -> Option<PageSize> {
    let name = name.trim().to_ascii_uppercase().replace('-', "_");
    NAMED_SIZES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, size)| size)
}

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

use super::LineGrid;
use crate::units::Pt;
use crate::PDFError;

/// Anything the paginator can lay lines out onto.
///
/// Every call is an irreversible write: there is no way to take back a placed
/// line or a flushed page.
pub trait Surface {
    /// Place `text` on the current page with its baseline starting at `origin`,
    /// inserting `char_spacing` after every character
    fn place_line(&mut self, text: &str, origin: (Pt, Pt), char_spacing: Pt) -> Result<(), PDFError>;

    /// Commit everything placed since the previous flush as one finished page,
    /// and start a fresh page for whatever follows
    fn flush_page(&mut self) -> Result<(), PDFError>;
}

/// Lay `lines` out onto `surface`, `lines_per_page` lines to a page, and
/// return how many pages were produced.
///
/// Lines are pulled one at a time. A page is flushed as soon as it is full, and
/// a final partially filled page is flushed once the lines run out; a document
/// that ends exactly on a page boundary gets no empty trailing page. No lines
/// means no pages and no calls to the surface at all.
///
/// The first error, from either the line source or the surface, aborts
/// pagination and is returned as-is.
pub fn paginate<I, S>(
    lines: I,
    lines_per_page: usize,
    grid: &LineGrid,
    surface: &mut S,
) -> Result<usize, PDFError>
where
    I: IntoIterator<Item = Result<String, PDFError>>,
    S: Surface + ?Sized,
{
    if lines_per_page == 0 {
        return Err(PDFError::InvalidGeometry(
            "pages must hold at least one line".to_string(),
        ));
    }

    let mut page: usize = 1;
    let mut in_page: usize = 0;

    for line in lines {
        let line = line?;
        surface.place_line(&line, grid.slot(in_page), grid.char_spacing)?;
        in_page += 1;

        if in_page == lines_per_page {
            surface.flush_page()?;
            log::debug!("page {page} complete");
            page += 1;
            in_page = 0;
        }
    }

    // `page` always names the page that would receive the next line
    let last_page_empty = in_page == 0;
    if last_page_empty {
        page -= 1;
    } else {
        surface.flush_page()?;
        log::debug!("page {page} complete ({in_page} of {lines_per_page} lines)");
    }

    Ok(page)
}

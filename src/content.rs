//! Content stream rendering for laid out lines.

use crate::font::Font;
use crate::page::{LineLayout, SpanFont};
use crate::units::Pt;
use id_arena::Arena;
use std::io::Write;

/// Renders a page's lines to a PDF content stream.
///
/// All lines share one text object; the font and character spacing are only
/// re-emitted when they change, and each line is positioned absolutely with
/// its own text matrix so placement never depends on the previous line.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_lines(
    lines: &[LineLayout],
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, std::io::Error> {
    if lines.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();
    let mut current_font: Option<SpanFont> = None;
    let mut current_spacing: Pt = Pt(0.0);

    write!(&mut content, "BT\n")?;
    for line in lines.iter() {
        if current_font != Some(line.font) {
            write!(
                &mut content,
                "/F{} {} Tf\n",
                line.font.id.index(),
                line.font.size
            )?;
            current_font = Some(line.font);
        }
        if line.char_spacing != current_spacing {
            write!(&mut content, "{} Tc\n", line.char_spacing)?;
            current_spacing = line.char_spacing;
        }

        write!(
            &mut content,
            "1 0 0 1 {} {} Tm\n",
            line.coords.0, line.coords.1
        )?;
        write!(&mut content, "<")?;
        if let Some(font) = fonts.get(line.font.id) {
            for byte in font.encode(&line.text) {
                write!(&mut content, "{byte:02x}")?;
            }
        }
        write!(&mut content, "> Tj\n")?;
    }
    write!(&mut content, "ET\n")?;

    Ok(content)
}

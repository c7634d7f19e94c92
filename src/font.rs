use crate::{
    refs::{ObjectReferences, RefType},
    PDFError, Pt,
};
use id_arena::Id;
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::HashMap;
use std::path::Path;

/// Advance width of every Courier glyph, in 1/1000 em
const COURIER_ADVANCE: f32 = 600.0;

/// One of the monospaced standard PDF fonts. These are never embedded: every
/// conforming reader ships them, so using one keeps the output small.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BuiltinFont {
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

impl BuiltinFont {
    /// Resolve a built-in font from its PostScript name, ignoring case
    pub fn from_name(name: &str) -> Option<BuiltinFont> {
        [
            BuiltinFont::Courier,
            BuiltinFont::CourierBold,
            BuiltinFont::CourierOblique,
            BuiltinFont::CourierBoldOblique,
        ]
        .into_iter()
        .find(|font| font.base_font().eq_ignore_ascii_case(name.trim()))
    }

    /// The PostScript name used for the `BaseFont` entry
    pub fn base_font(&self) -> &'static str {
        match self {
            BuiltinFont::Courier => "Courier",
            BuiltinFont::CourierBold => "Courier-Bold",
            BuiltinFont::CourierOblique => "Courier-Oblique",
            BuiltinFont::CourierBoldOblique => "Courier-BoldOblique",
        }
    }
}

/// A parsed TTF or OTF font, embedded in its entirety in the generated PDF.
pub struct EmbeddedFont {
    pub face: OwnedFace,
}

/// The font every line of the document is set in.
///
/// Fonts are referred to throughout the document by their [Id] within the
/// document's font arena, and not by any typed references.
pub enum Font {
    Builtin(BuiltinFont),
    Embedded(EmbeddedFont),
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, PDFError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font::Embedded(EmbeddedFont { face }))
    }

    /// Read and parse a font file. Any failure is reported against `path`.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Font, PDFError> {
        let path = path.as_ref();
        std::fs::read(path)
            .map_err(PDFError::from)
            .and_then(Font::load)
            .map_err(|source| PDFError::FontLoad {
                path: path.to_path_buf(),
                source: Box::new(source),
            })
    }

    /// The horizontal advance of `ch` at the given font size, or [None] if the
    /// font has no glyph for it
    pub fn advance_width(&self, ch: char, size: Pt) -> Option<Pt> {
        match self {
            Font::Builtin(_) => Some(size * (COURIER_ADVANCE / 1000.0)),
            Font::Embedded(font) => {
                let face = font.face.as_face_ref();
                let scaling: Pt = size / face.units_per_em() as f32;
                face.glyph_index(ch)
                    .and_then(|gid| face.glyph_hor_advance(gid))
                    .map(|adv| scaling * adv as f32)
            }
        }
    }

    /// Encode `text` into the bytes a `Tj` operator expects for this font:
    /// single WinAnsi bytes for built-in fonts, big-endian glyph ids for
    /// embedded ones. Characters the font cannot show are replaced.
    pub(crate) fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Font::Builtin(_) => text.chars().map(win_ansi).collect(),
            Font::Embedded(font) => text
                .chars()
                .flat_map(|ch| font.glyph_id(ch).to_be_bytes())
                .collect(),
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_index = id.index();
        match self {
            Font::Builtin(builtin) => {
                let font_id = refs.gen(RefType::Font(font_index));
                let mut font = writer.type1_font(font_id);
                font.base_font(Name(builtin.base_font().as_bytes()));
                font.encoding_predefined(Name(b"WinAnsiEncoding"));
            }
            Font::Embedded(embedded) => embedded.write(refs, font_index, writer),
        }
    }
}

impl EmbeddedFont {
    fn name_entry(&self, name_id: u16) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == name_id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn glyph_id(&self, ch: char) -> u16 {
        let face = self.face.as_face_ref();
        // tabs have no glyph in most fonts; they occupy one cell like a space
        let ch = if ch == '\t' { ' ' } else { ch };
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
            .map(|gid| gid.0)
            .unwrap_or(0)
    }

    fn write_cid(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) -> Ref {
        let font_descriptor_id = self.write_descriptor(refs, font_index, writer);

        let id = refs.gen(RefType::CidFont(font_index));

        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(format!("F{font_index}").as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(font_descriptor_id);

        let face = self.face.as_face_ref();
        let scaling = 1000.0 / face.units_per_em() as f32;

        let mut id_widths: Vec<(u16, f32)> = self
            .glyph_ids()
            .into_keys()
            .filter_map(|gid| {
                face.glyph_hor_advance(GlyphId(gid))
                    .map(|adv| (gid, adv as f32 * scaling))
            })
            .collect();
        id_widths.sort_by_key(|&(gid, _)| gid);

        // find the most popular width to use as the default
        let mut widths_counts: HashMap<u32, usize> = HashMap::new();
        for &(_, width) in id_widths.iter() {
            *widths_counts.entry(width.to_bits()).or_insert(0) += 1;
        }
        let most_common_width = widths_counts
            .iter()
            .max_by_key(|&(&bits, &count)| (count, bits))
            .map(|(&bits, _)| f32::from_bits(bits))
            .unwrap_or(1000.0);

        // group runs of consecutive glyph ids into single `W` entries
        let mut widths = cid_font.widths();
        let mut run: Vec<f32> = Vec::new();
        let mut run_start: u16 = 0;
        for (gid, width) in id_widths {
            if !run.is_empty() && gid as usize != run_start as usize + run.len() {
                widths.consecutive(run_start, run.drain(..));
            }
            if run.is_empty() {
                run_start = gid;
            }
            run.push(width);
        }
        if !run.is_empty() {
            widths.consecutive(run_start, run);
        }
        widths.finish();

        cid_font.default_width(most_common_width);
        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));

        id
    }

    fn write_font_data(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::FontData(font_index));

        let data = self.face.as_slice();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            data,
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        let mut stream = writer.stream(id, compressed.as_slice());
        stream.filter(Filter::FlateDecode);
        stream.pair(Name(b"Length1"), data.len() as i32);

        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let font_data_stream_id = self.write_font_data(refs, font_index, writer);

        let face = self.face.as_face_ref();
        let scaling = 1000.0 / face.units_per_em() as f32;

        let advances: Vec<u16> = self
            .glyph_ids()
            .into_keys()
            .filter_map(|gid| face.glyph_hor_advance(GlyphId(gid)))
            .collect();
        let max_width = advances.iter().copied().max().unwrap_or_default();
        let avg_width = if advances.is_empty() {
            0.0
        } else {
            advances.iter().map(|&w| w as f32).sum::<f32>() / advances.len() as f32
        };

        let name = self
            .name_entry(owned_ttf_parser::name_id::POST_SCRIPT_NAME)
            .unwrap_or_else(|| format!("F{font_index}"));
        let family = self
            .name_entry(owned_ttf_parser::name_id::FAMILY)
            .unwrap_or_else(|| name.clone());

        let id = refs.gen(RefType::FontDescriptor(font_index));

        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(name.as_bytes()));
        descriptor.family(Str(family.as_bytes()));
        descriptor.weight(face.weight().to_number());

        let mut flags: FontFlags = FontFlags::SYMBOLIC;
        if face.is_monospaced() {
            flags.set(FontFlags::FIXED_PITCH, true);
        }
        if face.is_italic() {
            flags.set(FontFlags::ITALIC, true);
        }
        descriptor.flags(flags);

        let bbox = face.global_bounding_box();
        descriptor.bbox(pdf_writer::Rect {
            x1: bbox.x_min as f32 * scaling,
            y1: bbox.y_min as f32 * scaling,
            x2: bbox.x_max as f32 * scaling,
            y2: bbox.y_max as f32 * scaling,
        });
        descriptor.italic_angle(face.italic_angle());
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.leading(face.line_gap() as f32 * scaling);
        descriptor.cap_height(
            face.capital_height()
                .map(|h| h as f32 * scaling)
                .unwrap_or(1000.0),
        );
        descriptor.x_height(
            face.x_height()
                .unwrap_or_else(|| face.capital_height().unwrap_or_default()) as f32
                * scaling,
        );
        // TODO: derive from the OS/2 weight class instead of a fixed guess
        descriptor.stem_v(80.0);
        descriptor.avg_width(avg_width * scaling);
        descriptor.max_width(max_width as f32 * scaling);
        descriptor.missing_width(max_width as f32 * scaling);

        descriptor.font_file2(font_data_stream_id);

        id
    }

    /// Every glyph reachable through a unicode cmap subtable, mapped back to
    /// the first character that selects it
    fn glyph_ids(&self) -> HashMap<u16, char> {
        let mut map: HashMap<u16, char> = HashMap::new();

        let Some(cmap) = self.face.as_face_ref().tables().cmap else {
            return map;
        };

        for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
            subtable.codepoints(|codepoint: u32| {
                if let Ok(ch) = char::try_from(codepoint) {
                    if let Some(index) = subtable.glyph_index(codepoint).filter(|index| index.0 > 0)
                    {
                        map.entry(index.0).or_insert(ch);
                    }
                }
            });
        }

        map
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(font_index));

        let mut map: String = r#"/CIDInit /ProcSet findresource begin
12 dict begin
begincmap
/CIDSystemInfo
<< /Registry (Adobe)
/Ordering (UCS) /Supplement 0 >> def
/CMapName /Adobe-Identity-UCS def
/CMapType 2 def
1 begincodespacerange
<0000> <FFFF>
endcodespacerange
"#
        .replace("\r\n", "\n");

        let mut ids: Vec<(u16, char)> = self.glyph_ids().into_iter().collect();
        ids.sort_by_key(|&(id, _)| id);

        // each bfchar block holds at most 100 entries
        for block in ids.chunks(100) {
            map.push_str(&format!("{} beginbfchar\n", block.len()));
            for &(id, ch) in block {
                let mut utf16 = [0u16; 2];
                let unicode: String = ch
                    .encode_utf16(&mut utf16)
                    .iter()
                    .map(|unit| format!("{unit:04x}"))
                    .collect();
                map.push_str(&format!("<{id:04x}> <{unicode}>\n"));
            }
            map.push_str("endbfchar\n");
        }

        map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            map.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        let mut stream = writer.stream(id, compressed.as_slice());
        stream.filter(Filter::FlateDecode);

        id
    }

    fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        let font_id = refs.gen(RefType::Font(font_index));
        let cid_font_id = self.write_cid(refs, font_index, writer);
        let to_unicode_id = self.write_to_unicode(refs, font_index, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(format!("F{font_index}").as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
    }
}

/// Map a character onto the WinAnsi code page used by the built-in fonts
fn win_ansi(ch: char) -> u8 {
    match ch {
        ' '..='~' | '\u{a0}'..='\u{ff}' => ch as u8,
        '\t' => b' ',
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_resolve_case_insensitively() {
        assert_eq!(BuiltinFont::from_name("courier"), Some(BuiltinFont::Courier));
        assert_eq!(
            BuiltinFont::from_name("Courier-BoldOblique"),
            Some(BuiltinFont::CourierBoldOblique)
        );
        assert_eq!(BuiltinFont::from_name("Helvetica"), None);
        assert_eq!(BuiltinFont::from_name("/usr/share/fonts/Courier.ttf"), None);
    }

    #[test]
    fn courier_is_six_tenths_of_an_em() {
        let font = Font::Builtin(BuiltinFont::Courier);
        assert_eq!(font.advance_width('.', Pt(10.0)), Some(Pt(6.0)));
        assert_eq!(font.advance_width('W', Pt(10.0)), Some(Pt(6.0)));
    }

    #[test]
    fn builtin_encoding_is_win_ansi() {
        let font = Font::Builtin(BuiltinFont::Courier);
        assert_eq!(font.encode("Aé€\t☃"), vec![b'A', 0xe9, 0x80, b' ', b'?']);
    }

    fn dejavu_mono() -> Font {
        Font::load_file(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/DejaVuSansMono.ttf"
        ))
        .unwrap()
    }

    #[test]
    fn embedded_advance_comes_from_hmtx() {
        let font = dejavu_mono();
        // 1233 units on a 2048 em
        assert_eq!(font.advance_width('.', Pt(10.0)), Some(Pt(12330.0 / 2048.0)));
        assert_eq!(font.advance_width('W', Pt(10.0)), Some(Pt(12330.0 / 2048.0)));
        assert_eq!(font.advance_width('\u{E000}', Pt(10.0)), None);
    }

    #[test]
    fn embedded_encoding_is_two_byte_glyph_ids() {
        let font = dejavu_mono();
        assert_eq!(font.encode("A."), vec![0x00, 36, 0x00, 17]);
        // tab shows as a space, unmapped characters as the replacement glyph
        assert_eq!(font.encode("\t\u{E000}"), vec![0x00, 3, 0x0c, 0xbd]);
    }

    #[test]
    fn embedded_font_writes_a_cid_font_with_unicode_map() {
        let mut fonts: id_arena::Arena<Font> = id_arena::Arena::new();
        let id = fonts.alloc(dejavu_mono());
        let mut refs = ObjectReferences::new();
        let mut writer = Pdf::new();
        fonts[id].write(&mut refs, id, &mut writer);
        let pdf = String::from_utf8_lossy(&writer.finish()).into_owned();

        assert!(pdf.contains("/Type0"));
        assert!(pdf.contains("/CIDFontType2"));
        assert!(pdf.contains("/Identity-H"));
        assert!(pdf.contains("/FontFile2"));
        assert!(pdf.contains("/ToUnicode"));
        assert!(pdf.contains("/BaseFont /F0"));
        assert!(pdf.contains("/FontDescriptor"));
        for kind in [
            RefType::Font(0),
            RefType::CidFont(0),
            RefType::FontDescriptor(0),
            RefType::FontData(0),
            RefType::ToUnicode(0),
        ] {
            assert!(refs.get(kind).is_some(), "{kind:?} was not allocated");
        }
    }

    #[test]
    fn garbage_bytes_are_not_a_font() {
        let err = Font::load(b"definitely not a font".to_vec()).err();
        assert!(matches!(err, Some(PDFError::FaceParsingError(_))));
    }

    #[test]
    fn missing_font_file_names_the_path() {
        let err = Font::load_file("/nonexistent/font.ttf").err();
        match err {
            Some(PDFError::FontLoad { path, source }) => {
                assert_eq!(path, Path::new("/nonexistent/font.ttf"));
                assert!(matches!(*source, PDFError::Io(_)));
            }
            other => panic!("expected a font load error, got {other:?}"),
        }
    }
}

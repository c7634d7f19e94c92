use std::fs;
use std::path::Path;
use txt2pdf::font::BuiltinFont;
use txt2pdf::layout::{Geometry, Margins};
use txt2pdf::{convert, pagesize, Cm, FontChoice, Info, PDFError, Pt, Settings};

fn settings(dir: &Path, text: &[u8]) -> Settings {
    let input = dir.join("input.txt");
    fs::write(&input, text).expect("write input");
    Settings {
        input,
        output: dir.join("output.pdf"),
        font: FontChoice::Builtin(BuiltinFont::Courier),
        geometry: Geometry::new(pagesize::A4, Margins::all(Cm(2.0)), Pt(10.0)),
        info: Info::new().title("Test").author("Tester").clone(),
    }
}

fn read_pdf(pdf: &Path) -> String {
    let bytes = fs::read(pdf).expect("read output");
    assert!(bytes.starts_with(b"%PDF-"));
    String::from_utf8_lossy(&bytes).into_owned()
}

#[test]
fn converts_a_multi_page_file() {
    let dir = tempfile::tempdir().unwrap();
    let text: String = (1..=125).map(|i| format!("line number {i}\n")).collect();
    let settings = settings(dir.path(), text.as_bytes());

    let report = convert(&settings).unwrap();
    assert_eq!(report.capacity.chars_per_line, 80);
    assert_eq!(report.capacity.lines_per_page, 60);
    assert_eq!(report.pages, 3);
    assert_eq!(report.source_lines, 125);
    assert!(report.wrapped_lines.is_empty());
    assert!(read_pdf(&settings.output).contains("/Count 3"));
}

#[test]
fn exact_multiple_of_a_page_has_no_blank_page() {
    let dir = tempfile::tempdir().unwrap();
    let text = "x\n".repeat(120);
    let settings = settings(dir.path(), text.as_bytes());

    let report = convert(&settings).unwrap();
    assert_eq!(report.pages, 2);
    assert!(read_pdf(&settings.output).contains("/Count 2"));
}

#[test]
fn long_lines_are_wrapped_not_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let text = format!("first\n{}\n{}\n", "a".repeat(130), "b".repeat(400));
    let settings = settings(dir.path(), text.as_bytes());

    let report = convert(&settings).unwrap();
    assert_eq!(report.wrapped_lines, vec![2, 3]);
    assert_eq!(report.source_lines, 3);
    assert_eq!(report.pages, 1);
}

#[test]
fn lorem_ipsum_paragraphs_fill_pages() {
    let dir = tempfile::tempdir().unwrap();
    // one 1000-word paragraph per line: every line needs wrapping
    let text: String = (0..5).map(|_| lipsum::lipsum(1000) + "\n").collect();
    let settings = settings(dir.path(), text.as_bytes());

    let report = convert(&settings).unwrap();
    assert_eq!(report.wrapped_lines, vec![1, 2, 3, 4, 5]);
    assert!(report.pages >= 2);
}

#[test]
fn empty_input_still_produces_a_document() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings(dir.path(), b"");

    let report = convert(&settings).unwrap();
    assert_eq!(report.pages, 0);
    assert!(read_pdf(&settings.output).contains("/Count 0"));
}

#[test]
fn degenerate_geometry_produces_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = settings(dir.path(), b"hello\n");
    settings.geometry.margins = Margins::symmetric(Cm(2.0), Cm(11.0));

    let err = convert(&settings).unwrap_err();
    assert!(matches!(err, PDFError::InvalidGeometry(_)));
    assert!(!settings.output.exists());
}

#[test]
fn negative_leading_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = settings(dir.path(), b"hello\n");
    settings.geometry.leading = Some(Pt(-3.0));

    assert!(matches!(
        convert(&settings),
        Err(PDFError::InvalidGeometry(_))
    ));
    assert!(!settings.output.exists());
}

#[test]
fn undecodable_input_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings(dir.path(), b"ok\n\xc3\x28 broken\nmore\n");

    match convert(&settings) {
        Err(PDFError::Decode { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected a decode error, got {other:?}"),
    }
    assert!(!settings.output.exists());
}

#[test]
fn missing_input_is_reported_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = settings(dir.path(), b"");
    settings.input = dir.path().join("nope.txt");

    match convert(&settings) {
        Err(PDFError::Input { path, .. }) => assert_eq!(path, settings.input),
        other => panic!("expected an input error, got {other:?}"),
    }
    assert!(!settings.output.exists());
}

#[test]
fn unreadable_font_is_reported_with_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = settings(dir.path(), b"hello\n");
    let font = dir.path().join("not-a-font.ttf");
    fs::write(&font, b"garbage").unwrap();
    settings.font = FontChoice::File(font.clone());

    match convert(&settings) {
        Err(PDFError::FontLoad { path, source }) => {
            assert_eq!(path, font);
            assert!(matches!(*source, PDFError::FaceParsingError(_)));
        }
        other => panic!("expected a font error, got {other:?}"),
    }
    assert!(!settings.output.exists());
}

#[test]
fn embeds_a_truetype_font() {
    let dir = tempfile::tempdir().unwrap();
    let text: String = (1..=125).map(|i| format!("línea {i}\n")).collect();
    let mut settings = settings(dir.path(), text.as_bytes());
    settings.font = FontChoice::File(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSansMono.ttf"),
    );

    let report = convert(&settings).unwrap();
    assert_eq!(report.capacity.chars_per_line, 80);
    assert_eq!(report.capacity.lines_per_page, 60);
    assert_eq!(report.pages, 3);

    let pdf = read_pdf(&settings.output);
    assert!(pdf.contains("/Count 3"));
    assert!(pdf.contains("/Identity-H"));
    assert!(pdf.contains("/FontFile2"));
    assert!(pdf.contains("/ToUnicode"));
    assert!(!pdf.contains("/BaseFont /Courier"));
}

#[test]
fn existing_output_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings(dir.path(), b"fresh\n");
    fs::write(&settings.output, b"stale").unwrap();

    convert(&settings).unwrap();
    assert!(read_pdf(&settings.output).contains("/Count 1"));
}

use crate::PDFError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// A source line that was too long for the page and had to be split
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WrapWarning {
    /// 1-based number of the source line
    pub line: usize,
}

/// The unread remainder of a source line that is being split into chunks
struct Pending {
    line: String,
    offset: usize,
}

impl Pending {
    /// Cut the next chunk of at most `max_chars` characters, or [None] once the line is used up
    fn next_chunk(&mut self, max_chars: usize) -> Option<String> {
        let rest = &self.line[self.offset..];
        if rest.is_empty() {
            return None;
        }
        let len = rest
            .char_indices()
            .nth(max_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let chunk = rest[..len].to_string();
        self.offset += len;
        Some(chunk)
    }
}

/// Lazily turns a text source into display lines no longer than a fixed
/// number of characters.
///
/// Lines are read one at a time; a line that fits is yielded unchanged (even
/// if empty) and a line that does not is cut into consecutive chunks of exactly
/// `max_chars` characters, the last chunk holding the remainder. Cutting is a
/// plain character count, never word-aware. Every cut line is logged and
/// recorded in [WrappedLines::warnings].
///
/// A line that is not valid UTF-8 ends the sequence with a
/// [PDFError::Decode]; nothing is yielded after an error.
pub struct WrappedLines<R> {
    reader: R,
    source: String,
    max_chars: usize,
    line_number: usize,
    pending: Option<Pending>,
    warnings: Vec<WrapWarning>,
    buf: Vec<u8>,
    done: bool,
}

/// Wrap the lines of `reader` to at most `max_chars` characters. `source`
/// names the input in warnings and errors.
///
/// Panics if `max_chars` is zero.
pub fn wrap<R: BufRead, S: Into<String>>(reader: R, source: S, max_chars: usize) -> WrappedLines<R> {
    WrappedLines::new(reader, source, max_chars)
}

/// Open `path` and wrap its lines to at most `max_chars` characters. A zero
/// `max_chars` is rejected before the file is opened.
pub fn wrap_file<P: AsRef<Path>>(
    path: P,
    max_chars: usize,
) -> Result<WrappedLines<BufReader<File>>, PDFError> {
    if max_chars == 0 {
        return Err(PDFError::InvalidGeometry(
            "lines must hold at least one character".to_string(),
        ));
    }
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PDFError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(WrappedLines::new(
        BufReader::new(file),
        path.display().to_string(),
        max_chars,
    ))
}

impl<R: BufRead> WrappedLines<R> {
    /// Panics if `max_chars` is zero; no line could ever be emitted.
    pub fn new<S: Into<String>>(reader: R, source: S, max_chars: usize) -> WrappedLines<R> {
        assert!(max_chars > 0, "lines must be allowed at least one character");
        WrappedLines {
            reader,
            source: source.into(),
            max_chars,
            line_number: 0,
            pending: None,
            warnings: Vec::new(),
            buf: Vec::new(),
            done: false,
        }
    }

    /// Every source line that has been split so far, in source order
    pub fn warnings(&self) -> &[WrapWarning] {
        &self.warnings
    }

    /// Number of source lines read so far
    pub fn source_lines(&self) -> usize {
        self.line_number
    }

    /// Read the next source line with its line ending stripped, or [None] at the end of input
    fn read_line(&mut self) -> Result<Option<String>, PDFError> {
        self.buf.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|source| PDFError::Input {
                path: self.source.clone().into(),
                source,
            })?;
        if read == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        while matches!(self.buf.last(), Some(b'\n' | b'\r')) {
            self.buf.pop();
        }

        let mut line =
            String::from_utf8(std::mem::take(&mut self.buf)).map_err(|source| PDFError::Decode {
                source_name: self.source.clone(),
                line: self.line_number,
                source,
            })?;
        if self.line_number == 1 && line.starts_with(UTF8_BOM) {
            line.remove(0);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead> Iterator for WrappedLines<R> {
    type Item = Result<String, PDFError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Some(pending) = self.pending.as_mut() {
            if let Some(chunk) = pending.next_chunk(self.max_chars) {
                return Some(Ok(chunk));
            }
            self.pending = None;
        }

        let line = match self.read_line() {
            Ok(Some(line)) => line,
            Ok(None) => {
                self.done = true;
                return None;
            }
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        if line.chars().count() <= self.max_chars {
            return Some(Ok(line));
        }

        log::warn!("wrapping line {} in {}", self.line_number, self.source);
        self.warnings.push(WrapWarning {
            line: self.line_number,
        });

        let mut pending = Pending { line, offset: 0 };
        let first = pending.next_chunk(self.max_chars);
        self.pending = Some(pending);
        first.map(Ok)
    }
}

impl<R: BufRead> std::iter::FusedIterator for WrappedLines<R> {}

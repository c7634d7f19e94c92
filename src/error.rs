use std::path::PathBuf;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred while writing the document
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("invalid page geometry: {0}")]
    /// The page geometry leaves no room for text, or contains a nonsensical value
    InvalidGeometry(String),

    #[error("cannot read input file {}", .path.display())]
    /// The input text file could not be opened or read
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line} of {source_name} is not valid UTF-8")]
    /// A line of the input could not be decoded as text
    Decode {
        source_name: String,
        line: usize,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("cannot load font {}", .path.display())]
    /// A font file could not be read or parsed
    FontLoad {
        path: PathBuf,
        #[source]
        source: Box<PDFError>,
    },

    #[error("font has no glyph for {0:?}")]
    /// The font lacks a glyph needed to measure text
    MissingGlyph(char),
}

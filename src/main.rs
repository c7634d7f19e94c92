use anyhow::{anyhow, Context};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use txt2pdf::layout::{Geometry, Margins};
use txt2pdf::pagesize::{self, PageOrientation};
use txt2pdf::{Cm, FontChoice, Info, Pt, Settings};

#[derive(Parser, Debug)]
#[command(version, about = "Convert a text file into a paginated PDF document")]
struct Cli {
    /// Text file to convert
    filename: PathBuf,

    /// Built-in font (Courier, Courier-Bold, Courier-Oblique, Courier-BoldOblique)
    /// or the path of a TrueType / OpenType font to embed
    #[arg(short, long, default_value = "Courier")]
    font: String,

    /// Size of the font, in points
    #[arg(short = 's', long, default_value_t = 10.0)]
    font_size: f32,

    /// Extra vertical space between lines, as a multiple of the font size
    #[arg(short = 'v', long, allow_negative_numbers = true)]
    extra_vertical_space: Option<f32>,

    /// Extra horizontal space between characters, in points
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    kerning: f32,

    /// Size of the page (A4, A3, Letter, Legal, ...)
    #[arg(short, long, default_value = "A4")]
    media: String,

    /// Turn the page on its side
    #[arg(short = 'L', long)]
    landscape: bool,

    /// Left margin, in centimetres
    #[arg(short = 'l', long, default_value_t = 2.0)]
    margin_left: f32,

    /// Right margin, in centimetres
    #[arg(short = 'r', long, default_value_t = 2.0)]
    margin_right: f32,

    /// Top margin, in centimetres
    #[arg(short = 't', long, default_value_t = 2.0)]
    margin_top: f32,

    /// Bottom margin, in centimetres
    #[arg(short = 'b', long, default_value_t = 2.0)]
    margin_bottom: f32,

    /// Output file
    #[arg(short, long, default_value = "output.pdf")]
    output: PathBuf,

    /// Author of the PDF document
    #[arg(long, default_value = "")]
    author: String,

    /// Title of the PDF document
    #[arg(long, default_value = "")]
    title: String,
}

impl Cli {
    fn settings(self) -> anyhow::Result<Settings> {
        let page_size = pagesize::by_name(&self.media).ok_or_else(|| {
            anyhow!(
                "unknown page size '{}', expected one of: {}",
                self.media,
                pagesize::NAMED_SIZES
                    .iter()
                    .map(|(name, _)| *name)
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })?;
        let page_size = if self.landscape {
            page_size.landscape()
        } else {
            page_size.portrait()
        };

        let margins = Margins::trbl(
            Cm(self.margin_top),
            Cm(self.margin_right),
            Cm(self.margin_bottom),
            Cm(self.margin_left),
        );
        let font_size = Pt(self.font_size);
        let leading = self
            .extra_vertical_space
            .map(|extra| font_size * (extra + txt2pdf::layout::DEFAULT_LEADING_FACTOR));

        let geometry = Geometry::new(page_size, margins, font_size)
            .with_kerning(Pt(self.kerning))
            .with_leading(leading);

        Ok(Settings {
            input: self.filename,
            output: self.output,
            font: FontChoice::parse(&self.font),
            geometry,
            info: Info::new().title(self.title).author(self.author).clone(),
        })
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = cli.settings()?;
    txt2pdf::convert(&settings).with_context(|| {
        format!(
            "failed to convert {} into {}",
            settings.input.display(),
            settings.output.display()
        )
    })?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

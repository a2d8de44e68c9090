use clap::{Parser, ValueEnum};
use fb2txt::FormattingMode;
use std::path::PathBuf;

/// Convert FictionBook (FB2) ebooks to plain text or Markdown
#[derive(Parser, Debug)]
#[command(name = "fb2txt", version, about)]
pub struct Cli {
    /// Path to the input FB2 file
    pub input: PathBuf,

    /// Path to the output file.
    /// Defaults to the input path with the chosen format's extension.
    #[arg(conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Txt)]
    pub format: OutputFormat,

    /// Print the converted text to stdout instead of writing a file
    #[arg(long, default_value_t = false)]
    pub stdout: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text
    Txt,
    /// Markdown with headings and emphasis
    Md,
}

impl OutputFormat {
    pub fn mode(self) -> FormattingMode {
        match self {
            Self::Txt => FormattingMode::Plain,
            Self::Md => FormattingMode::Smart,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Md => "md",
        }
    }
}

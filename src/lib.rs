//! Convert FictionBook (FB2) documents to plain text or Markdown.
//!
//! ```
//! use fb2txt::{convert, FormattingMode};
//!
//! let xml = "<body><p>Hello <emphasis>world</emphasis>!</p></body>";
//! assert_eq!(convert(xml, FormattingMode::Smart).unwrap(), "Hello *world*!\n\n");
//! assert_eq!(convert(xml, FormattingMode::Plain).unwrap(), "Hello world!\n\n");
//! ```

pub mod body;
pub mod document;
pub mod error;
pub mod inline;
pub mod metadata;

pub use document::{Document, Element, Node};
pub use error::ParseError;
pub use metadata::Metadata;

/// Output policy applied to the whole document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormattingMode {
    /// Bare text without markers.
    #[default]
    Plain,
    /// Markdown: `### ` subtitles and `*emphasis*`.
    Smart,
}

impl FormattingMode {
    pub fn is_smart(self) -> bool {
        matches!(self, Self::Smart)
    }
}

/// Convert an FB2 document to text.
///
/// The metadata header comes first, followed by every paragraph, subtitle and
/// empty line of the first `<body>` in document order. A missing description or
/// body only shortens the output; the only error is a document that does not
/// parse.
pub fn convert(document_text: &str, mode: FormattingMode) -> Result<String, ParseError> {
    let document = Document::parse(document_text)?;

    let mut output = metadata::format_metadata(&Metadata::from_document(&document));

    let Some(body_element) = document.find("body") else {
        log::debug!("document has no <body>, returning metadata only");
        return Ok(output);
    };

    let block_count = body::render_body(body_element, mode, &mut output);
    log::debug!(
        "converted {} blocks to {} bytes ({:?})",
        block_count,
        output.len(),
        mode
    );

    Ok(output)
}

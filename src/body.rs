use crate::document::Element;
use crate::inline::render_inline;
use crate::FormattingMode;

/// Block-level node kinds the walker emits output for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Subtitle,
    EmptyLine,
}

impl BlockKind {
    pub const TAGS: &'static [&'static str] = &["p", "subtitle", "empty-line"];

    pub fn from_tag(name: &str) -> Option<Self> {
        match name {
            "p" => Some(Self::Paragraph),
            "subtitle" => Some(Self::Subtitle),
            "empty-line" => Some(Self::EmptyLine),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Block<'a> {
    pub kind: BlockKind,
    pub element: &'a Element,
}

/// Collect the blocks under `body` in document order, at any depth.
///
/// Wrappers such as `section`, `epigraph` or `cite` are looked through, and a
/// block nested inside another block is collected too.
pub fn blocks(body: &Element) -> Vec<Block<'_>> {
    body.find_all(BlockKind::TAGS)
        .filter_map(|element| {
            BlockKind::from_tag(element.name()).map(|kind| Block { kind, element })
        })
        .collect()
}

/// Append every block of `body` to `out`. Returns the number of blocks visited.
pub fn render_body(body: &Element, mode: FormattingMode, out: &mut String) -> usize {
    let blocks = blocks(body);
    for block in &blocks {
        log::trace!("rendering {:?}", block.kind);
        render_block(block, mode, out);
    }
    blocks.len()
}

fn render_block(block: &Block<'_>, mode: FormattingMode, out: &mut String) {
    match block.kind {
        BlockKind::Paragraph => {
            let rendered = render_inline(block.element, mode);
            let text = rendered.trim();
            if !text.is_empty() {
                out.push_str(text);
                out.push_str("\n\n");
            }
        }
        BlockKind::Subtitle => {
            let text = block.element.trimmed_text();
            if text.is_empty() {
                return;
            }
            if mode.is_smart() {
                out.push_str("### ");
            }
            out.push_str(&text);
            out.push_str("\n\n");
        }
        BlockKind::EmptyLine => out.push('\n'),
    }
}

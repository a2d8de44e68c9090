use crate::document::{Element, Node};
use crate::FormattingMode;

const EMPHASIS: &str = "emphasis";

/// Render the inline content of a block element.
///
/// Text is kept verbatim; the caller trims the assembled result once. In Smart
/// mode `<emphasis>` becomes `*text*` with its contents flattened. Every other
/// element, emphasis in Plain mode included, is descended into transparently so
/// its text is never dropped.
pub fn render_inline(element: &Element, mode: FormattingMode) -> String {
    let mut out = String::new();
    write_inline(element, mode, &mut out);
    out
}

fn write_inline(element: &Element, mode: FormattingMode, out: &mut String) {
    for child in element.children() {
        match child {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if mode.is_smart() && el.name() == EMPHASIS => {
                out.push('*');
                out.push_str(&el.trimmed_text());
                out.push('*');
            }
            Node::Element(el) => write_inline(el, mode, out),
        }
    }
}

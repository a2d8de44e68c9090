use crate::document::{Document, Element};

const SEPARATOR_WIDTH: usize = 40;

/// Book details taken from the `<description>` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl Metadata {
    /// Extract title and author. Anything missing is left as `None`.
    pub fn from_document(doc: &Document) -> Self {
        let Some(description) = doc.find("description") else {
            log::debug!("document has no <description>, skipping metadata");
            return Self::default();
        };

        Self {
            title: description.find("book-title").and_then(non_empty_text),
            author: description.find("author").and_then(author_name),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none()
    }
}

fn non_empty_text(element: &Element) -> Option<String> {
    let text = element.trimmed_text();
    (!text.is_empty()).then_some(text)
}

/// First and last name joined by a single space, skipping empty parts.
fn author_name(author: &Element) -> Option<String> {
    let parts: Vec<String> = ["first-name", "last-name"]
        .iter()
        .filter_map(|field| author.find(field).and_then(non_empty_text))
        .collect();

    let name = parts.join(" ");
    (!name.is_empty()).then_some(name)
}

pub fn format_metadata(metadata: &Metadata) -> String {
    if metadata.is_empty() {
        return String::new();
    }

    let mut header = String::new();

    if let Some(title) = &metadata.title {
        header.push_str(&format!("Title: {}\n", title));
    }

    if let Some(author) = &metadata.author {
        header.push_str(&format!("Author: {}\n", author));
    }

    header.push_str(&"=".repeat(SEPARATOR_WIDTH));
    header.push_str("\n\n");
    header
}

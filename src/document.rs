use crate::error::ParseError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// A node of the parsed tree. Elements own their children outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    children: Vec<Node>,
}

/// An owned FB2 document tree, built once per conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Element {
    /// Local tag name, without any namespace prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// All descendant elements in document order (pre-order, depth-first).
    /// The element itself is not included.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children.iter()],
        }
    }

    /// First descendant element with the given name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.descendants().find(|el| el.name == name)
    }

    /// Descendant elements whose name is in `names`, in document order.
    pub fn find_all<'a>(&'a self, names: &'a [&'a str]) -> impl Iterator<Item = &'a Element> + 'a {
        self.descendants()
            .filter(move |el| names.contains(&el.name.as_str()))
    }

    /// Concatenated character data of the whole subtree.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    /// Text content with leading and trailing whitespace removed.
    pub fn trimmed_text(&self) -> String {
        self.text_content().trim().to_string()
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => el.collect_text(out),
            }
        }
    }

    fn from_start(start: &BytesStart<'_>, position: usize) -> Result<Self, ParseError> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

        // Attributes carry nothing we render, but a malformed one still fails the parse.
        for attr in start.attributes() {
            let attr = attr.map_err(|e| ParseError::new(position, e.to_string()))?;
            attr.unescape_value()
                .map_err(|e| ParseError::new(position, e.to_string()))?;
        }

        Ok(Self {
            name,
            children: Vec::new(),
        })
    }
}

pub struct Descendants<'a> {
    stack: Vec<std::slice::Iter<'a, Node>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<&'a Element> {
        while let Some(children) = self.stack.last_mut() {
            match children.next() {
                Some(Node::Element(el)) => {
                    self.stack.push(el.children.iter());
                    return Some(el);
                }
                Some(Node::Text(_)) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl Document {
    /// Parse UTF-8 markup into a tree. Either the whole input forms a single
    /// well-formed element tree or an error is returned; there is no partial result.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut reader = Reader::from_str(text);

        let mut builder = TreeBuilder::default();

        loop {
            let position = reader.buffer_position();
            match reader.read_event() {
                Ok(Event::Start(e)) => builder.open(Element::from_start(&e, position)?),
                Ok(Event::Empty(e)) => {
                    let element = Element::from_start(&e, position)?;
                    builder.attach(Node::Element(element), position)?;
                }
                Ok(Event::End(e)) => {
                    let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                    builder.close(&name, position)?;
                }
                Ok(Event::Text(e)) => {
                    let text = e
                        .unescape()
                        .map_err(|e| ParseError::new(position, e.to_string()))?;
                    builder.text(text.into_owned(), position)?;
                }
                Ok(Event::CData(e)) => {
                    let raw = e.into_inner();
                    builder.text(String::from_utf8_lossy(&raw).into_owned(), position)?;
                }
                Ok(Event::Eof) => break,
                // Declarations, comments, processing instructions and doctypes carry no content.
                Ok(_) => {}
                Err(e) => return Err(ParseError::new(reader.buffer_position(), e.to_string())),
            }
        }

        builder.finish(reader.buffer_position())
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// First element with the given name, the root included.
    pub fn find(&self, name: &str) -> Option<&Element> {
        if self.root.name == name {
            Some(&self.root)
        } else {
            self.root.find(name)
        }
    }
}

#[derive(Default)]
struct TreeBuilder {
    open: Vec<Element>,
    root: Option<Element>,
}

impl TreeBuilder {
    fn open(&mut self, element: Element) {
        self.open.push(element);
    }

    fn close(&mut self, name: &str, position: usize) -> Result<(), ParseError> {
        let element = self.open.pop().ok_or_else(|| {
            ParseError::new(position, format!("unexpected closing tag </{name}>"))
        })?;
        if element.name != name {
            return Err(ParseError::new(
                position,
                format!("expected </{}>, found </{name}>", element.name),
            ));
        }
        self.attach(Node::Element(element), position)
    }

    fn attach(&mut self, node: Node, position: usize) -> Result<(), ParseError> {
        if let Some(parent) = self.open.last_mut() {
            parent.children.push(node);
            return Ok(());
        }

        match node {
            Node::Element(element) if self.root.is_none() => {
                self.root = Some(element);
                Ok(())
            }
            Node::Element(element) => Err(ParseError::new(
                position,
                format!("second root element <{}>", element.name),
            )),
            Node::Text(_) => Err(ParseError::new(position, "text outside of the root element")),
        }
    }

    fn text(&mut self, text: String, position: usize) -> Result<(), ParseError> {
        if self.open.is_empty() && text.trim().is_empty() {
            return Ok(());
        }
        self.attach(Node::Text(text), position)
    }

    fn finish(mut self, position: usize) -> Result<Document, ParseError> {
        if let Some(unclosed) = self.open.pop() {
            return Err(ParseError::new(
                position,
                format!("unclosed element <{}>", unclosed.name),
            ));
        }
        self.root
            .map(|root| Document { root })
            .ok_or_else(|| ParseError::new(position, "document has no root element"))
    }
}

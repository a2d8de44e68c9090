/// Failure to build a document tree from the input text.
///
/// There is a single kind: the input is either a well-formed tree or it is not.
/// `position` is the byte offset where the reader detected the problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed document at byte {position}: {reason}")]
pub struct ParseError {
    pub position: usize,
    pub reason: String,
}

impl ParseError {
    pub fn new(position: usize, reason: impl Into<String>) -> Self {
        Self {
            position,
            reason: reason.into(),
        }
    }
}

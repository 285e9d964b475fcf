use crate::render::Document;

/// Where a submission's outcome is shown.
///
/// Every call replaces the previous content entirely; implementations must
/// never append.
pub trait DisplaySurface {
    fn set_text(&mut self, text: &str);
    fn set_document(&mut self, document: &Document);
}

/// Content currently held by a [`MemorySurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Text(String),
    Document(Document),
}

/// In-memory surface, useful for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    current: Option<Output>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Output> {
        self.current.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        match &self.current {
            Some(Output::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn document(&self) -> Option<&Document> {
        match &self.current {
            Some(Output::Document(doc)) => Some(doc),
            _ => None,
        }
    }
}

impl DisplaySurface for MemorySurface {
    fn set_text(&mut self, text: &str) {
        self.current = Some(Output::Text(text.to_string()));
    }

    fn set_document(&mut self, document: &Document) {
        self.current = Some(Output::Document(document.clone()));
    }
}

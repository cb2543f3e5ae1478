use std::ops::Range;

/// A top-level block of a markdown document, located by its byte span in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: u8,
        text: String,
        span: Range<usize>,
    },
    List {
        items: Vec<Range<usize>>,
        span: Range<usize>,
    },
    Other {
        span: Range<usize>,
    },
}

/// Splits markdown into its top-level blocks in document order.
pub trait MarkdownBlocks: Send + Sync {
    fn blocks(&self, markdown: &str) -> Vec<Block>;
}

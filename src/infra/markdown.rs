use pulldown_cmark::{Event, Options, Parser, Tag};

use crate::services::markdown::{Block, MarkdownBlocks};

/// CommonMark block scanner backed by `pulldown-cmark`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PulldownMarkdown;

impl PulldownMarkdown {
    pub fn new() -> Self {
        Self
    }
}

impl MarkdownBlocks for PulldownMarkdown {
    fn blocks(&self, markdown: &str) -> Vec<Block> {
        let mut blocks = Vec::new();
        let mut current: Option<Block> = None;
        let mut depth = 0usize;

        for (event, range) in Parser::new_ext(markdown, Options::empty()).into_offset_iter() {
            match event {
                Event::Start(tag) => {
                    if depth == 0 {
                        current = Some(match tag {
                            Tag::Heading { level, .. } => Block::Heading {
                                level: level as u8,
                                text: String::new(),
                                span: range,
                            },
                            Tag::List(_) => Block::List {
                                items: Vec::new(),
                                span: range,
                            },
                            _ => Block::Other { span: range },
                        });
                    } else if depth == 1 && matches!(tag, Tag::Item) {
                        if let Some(Block::List { items, .. }) = &mut current {
                            items.push(range);
                        }
                    }
                    depth += 1;
                }
                Event::End(_) => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        if let Some(block) = current.take() {
                            blocks.push(block);
                        }
                    }
                }
                Event::Text(fragment) | Event::Code(fragment) => {
                    if let Some(Block::Heading { text, .. }) = &mut current {
                        text.push_str(&fragment);
                    }
                }
                Event::SoftBreak | Event::HardBreak => {
                    if let Some(Block::Heading { text, .. }) = &mut current {
                        text.push(' ');
                    }
                }
                // Leaf blocks such as thematic breaks have no start/end pair.
                _ if depth == 0 => blocks.push(Block::Other { span: range }),
                _ => {}
            }
        }

        blocks
    }
}

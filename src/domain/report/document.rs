//! Format-independent report layout.

use super::markup::{self, Inline};

/// One vertical element of a report, in reading order.
///
/// Text carried by `Title`, `Heading`, `Paragraph` and `Bullet` is inline
/// markup (see [`markup`]); dynamic values must already be escaped.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Heading { level: HeadingLevel, text: String },
    Paragraph(String),
    Bullet(String),
    /// Vertical gap in points.
    Spacer(f32),
}

/// Heading sizes used by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    /// Score line.
    Primary,
    /// Section headings ("Key Findings:").
    Section,
}

impl Block {
    /// Parsed inline content; `None` for spacers.
    pub fn inlines(&self) -> Option<Vec<Inline>> {
        match self {
            Block::Title(text)
            | Block::Heading { text, .. }
            | Block::Paragraph(text)
            | Block::Bullet(text) => Some(markup::parse(text)),
            Block::Spacer(_) => None,
        }
    }
}

/// An ordered list of blocks plus document metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDocument {
    title: String,
    blocks: Vec<Block>,
}

impl ReportDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    /// Document title used for PDF metadata.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    pub fn title_block(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::Title(text.into()))
    }

    pub fn heading(&mut self, level: HeadingLevel, text: impl Into<String>) -> &mut Self {
        self.push(Block::Heading {
            level,
            text: text.into(),
        })
    }

    pub fn paragraph(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::Paragraph(text.into()))
    }

    pub fn bullet(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::Bullet(text.into()))
    }

    pub fn spacer(&mut self, points: f32) -> &mut Self {
        self.push(Block::Spacer(points))
    }

    /// Plain text of every block, one per line; handy for assertions and logs.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(|block| block.inlines())
            .map(|inlines| markup::plain_text(&inlines))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

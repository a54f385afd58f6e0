//! Page layout for report documents.
//!
//! Turns a `ReportDocument` into positioned text runs on fixed-size pages.
//! Everything here is pure arithmetic in PDF points (1/72 inch) with the
//! origin at the bottom-left corner, so layout can be tested without
//! producing a PDF.

use crate::domain::report::{Block, HeadingLevel, Inline, ReportDocument, TextStyle};

use super::metrics::{sanitize, text_width};

/// Page geometry and type sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub title_size: f32,
    pub primary_heading_size: f32,
    pub section_heading_size: f32,
    pub body_size: f32,
    /// Line height as a multiple of the font size.
    pub leading: f32,
    pub bullet_indent: f32,
}

impl PageLayout {
    /// US Letter with one-inch margins.
    pub fn letter() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            margin: 72.0,
            title_size: 18.0,
            primary_heading_size: 14.0,
            section_heading_size: 12.0,
            body_size: 10.0,
            leading: 1.2,
            bullet_indent: 14.0,
        }
    }

    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    fn top(&self) -> f32 {
        self.page_height - self.margin
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::letter()
    }
}

/// A run of same-styled text at an absolute position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub style: TextStyle,
    pub size: f32,
    pub x: f32,
    pub y: f32,
}

/// All runs placed on one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidOutPage {
    pub runs: Vec<PlacedText>,
}

#[derive(Debug, Clone, PartialEq)]
struct Segment {
    text: String,
    style: TextStyle,
}

/// Unbreakable unit; may mix styles ("<b>Privacy</b>:" is one word).
#[derive(Debug, Clone, PartialEq)]
struct Word {
    segments: Vec<Segment>,
}

impl Word {
    fn width(&self, size: f32) -> f32 {
        self.segments
            .iter()
            .map(|s| text_width(&s.text, s.style, size))
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Word(Word),
    Break,
}

/// How a block's lines are positioned.
struct BlockStyle {
    size: f32,
    force_bold: bool,
    centered: bool,
    indent: f32,
    marker: Option<&'static str>,
}

/// Lays the document out on as many pages as needed.
///
/// Always returns at least one page.
pub fn layout_document(document: &ReportDocument, layout: &PageLayout) -> Vec<LaidOutPage> {
    let mut writer = PageWriter::new(layout);

    for block in document.blocks() {
        match block {
            Block::Spacer(points) => writer.advance(*points),
            other => {
                let inlines = other.inlines().unwrap_or_default();
                let style = block_style(other, layout);
                writer.write_block(&inlines, &style);
            }
        }
    }

    writer.finish()
}

fn block_style(block: &Block, layout: &PageLayout) -> BlockStyle {
    let body = BlockStyle {
        size: layout.body_size,
        force_bold: false,
        centered: false,
        indent: 0.0,
        marker: None,
    };
    match block {
        Block::Title(_) => BlockStyle {
            size: layout.title_size,
            force_bold: true,
            centered: true,
            ..body
        },
        Block::Heading {
            level: HeadingLevel::Primary,
            ..
        } => BlockStyle {
            size: layout.primary_heading_size,
            force_bold: true,
            ..body
        },
        Block::Heading {
            level: HeadingLevel::Section,
            ..
        } => BlockStyle {
            size: layout.section_heading_size,
            force_bold: true,
            ..body
        },
        Block::Bullet(_) => BlockStyle {
            indent: layout.bullet_indent,
            marker: Some("-"),
            ..body
        },
        Block::Paragraph(_) | Block::Spacer(_) => body,
    }
}

/// Splits inline runs into words and explicit breaks.
fn tokenize(inlines: &[Inline], force_bold: bool) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current: Vec<Segment> = Vec::new();

    fn finish(current: &mut Vec<Segment>, tokens: &mut Vec<Token>) {
        if !current.is_empty() {
            tokens.push(Token::Word(Word {
                segments: std::mem::take(current),
            }));
        }
    }

    for inline in inlines {
        match inline {
            Inline::LineBreak => {
                finish(&mut current, &mut tokens);
                tokens.push(Token::Break);
            }
            Inline::Text { text, style } => {
                let style = TextStyle {
                    bold: style.bold || force_bold,
                    italic: style.italic,
                };
                for ch in sanitize(text).chars() {
                    if ch.is_whitespace() {
                        finish(&mut current, &mut tokens);
                        continue;
                    }
                    match current.last_mut() {
                        Some(segment) if segment.style == style => segment.text.push(ch),
                        _ => current.push(Segment {
                            text: ch.to_string(),
                            style,
                        }),
                    }
                }
            }
        }
    }
    finish(&mut current, &mut tokens);
    tokens
}

/// Greedy line filling. A word wider than the line gets a line of its own.
fn wrap(tokens: Vec<Token>, max_width: f32, size: f32) -> Vec<Vec<Word>> {
    let space = text_width(" ", TextStyle::REGULAR, size);
    let mut lines = Vec::new();
    let mut line: Vec<Word> = Vec::new();
    let mut line_width = 0.0;

    for token in tokens {
        match token {
            Token::Break => {
                lines.push(std::mem::take(&mut line));
                line_width = 0.0;
            }
            Token::Word(word) => {
                let width = word.width(size);
                let needed = if line.is_empty() { width } else { line_width + space + width };
                if !line.is_empty() && needed > max_width {
                    lines.push(std::mem::take(&mut line));
                    line_width = width;
                } else {
                    line_width = needed;
                }
                line.push(word);
            }
        }
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

struct PageWriter<'a> {
    layout: &'a PageLayout,
    pages: Vec<LaidOutPage>,
    current: LaidOutPage,
    /// Top of the next line.
    y: f32,
}

impl<'a> PageWriter<'a> {
    fn new(layout: &'a PageLayout) -> Self {
        Self {
            layout,
            pages: Vec::new(),
            current: LaidOutPage::default(),
            y: layout.top(),
        }
    }

    fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.y = self.layout.top();
    }

    /// Vertical gap; never starts a page on its own.
    fn advance(&mut self, points: f32) {
        self.y -= points;
    }

    fn write_block(&mut self, inlines: &[Inline], style: &BlockStyle) {
        let available = self.layout.content_width() - style.indent;
        let lines = wrap(tokenize(inlines, style.force_bold), available, style.size);
        let line_height = style.size * self.layout.leading;
        let space = text_width(" ", TextStyle::REGULAR, style.size);

        for (idx, words) in lines.iter().enumerate() {
            if self.y - line_height < self.layout.margin {
                self.new_page();
            }
            let baseline = self.y - style.size;
            let line_width: f32 = words.iter().map(|w| w.width(style.size)).sum::<f32>()
                + space * words.len().saturating_sub(1) as f32;

            let mut x = self.layout.margin + style.indent;
            if style.centered {
                x = self.layout.margin + ((available - line_width) / 2.0).max(0.0);
            }

            if idx == 0 {
                if let Some(marker) = style.marker {
                    self.place(marker, TextStyle::REGULAR, style.size, self.layout.margin, baseline);
                }
            }

            for (w, word) in words.iter().enumerate() {
                if w > 0 {
                    x += space;
                }
                for segment in &word.segments {
                    self.place(&segment.text, segment.style, style.size, x, baseline);
                    x += text_width(&segment.text, segment.style, style.size);
                }
            }

            self.y -= line_height;
        }
    }

    fn place(&mut self, text: &str, style: TextStyle, size: f32, x: f32, y: f32) {
        self.current.runs.push(PlacedText {
            text: text.to_string(),
            style,
            size,
            x,
            y,
        });
    }

    fn finish(mut self) -> Vec<LaidOutPage> {
        if !self.current.runs.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}

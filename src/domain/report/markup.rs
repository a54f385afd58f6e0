//! Inline markup for report paragraphs.
//!
//! Paragraph text supports a deliberately small vocabulary: `<b>`, `<i>`,
//! `<br/>` and the five XML character entities. Anything taken from user
//! input or the question spreadsheet must go through [`escape`] before it is
//! embedded, so that it always renders literally.

/// Escapes markup-significant characters.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

/// Font variant of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
}

impl TextStyle {
    pub const REGULAR: Self = Self {
        bold: false,
        italic: false,
    };
    pub const BOLD: Self = Self {
        bold: true,
        italic: false,
    };
    pub const ITALIC: Self = Self {
        bold: false,
        italic: true,
    };
}

/// A parsed piece of paragraph content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text { text: String, style: TextStyle },
    LineBreak,
}

/// Parses paragraph markup into styled runs.
///
/// Unknown tags and malformed entities are kept as literal text; adjacent
/// runs with the same style are merged.
pub fn parse(markup: &str) -> Vec<Inline> {
    let mut parser = Parser::default();
    let mut rest = markup;

    while let Some(ch) = rest.chars().next() {
        match ch {
            '<' => match rest.find('>') {
                Some(end) if parser.apply_tag(&rest[1..end]) => rest = &rest[end + 1..],
                _ => {
                    parser.push_char('<');
                    rest = &rest[1..];
                }
            },
            '&' => match decode_entity(rest) {
                Some((decoded, consumed)) => {
                    parser.push_char(decoded);
                    rest = &rest[consumed..];
                }
                None => {
                    parser.push_char('&');
                    rest = &rest[1..];
                }
            },
            other => {
                parser.push_char(other);
                rest = &rest[other.len_utf8()..];
            }
        }
    }

    parser.finish()
}

#[derive(Default)]
struct Parser {
    out: Vec<Inline>,
    buffer: String,
    bold_depth: usize,
    italic_depth: usize,
}

impl Parser {
    fn style(&self) -> TextStyle {
        TextStyle {
            bold: self.bold_depth > 0,
            italic: self.italic_depth > 0,
        }
    }

    fn push_char(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.buffer);
        let style = self.style();
        if let Some(Inline::Text { text: prev, style: prev_style }) = self.out.last_mut() {
            if *prev_style == style {
                prev.push_str(&text);
                return;
            }
        }
        self.out.push(Inline::Text { text, style });
    }

    /// Returns false when the tag is not part of the vocabulary.
    fn apply_tag(&mut self, tag: &str) -> bool {
        let normalized: String = tag.chars().filter(|c| !c.is_whitespace()).collect();
        match normalized.to_ascii_lowercase().as_str() {
            "b" | "strong" => {
                self.flush();
                self.bold_depth += 1;
            }
            "/b" | "/strong" => {
                self.flush();
                self.bold_depth = self.bold_depth.saturating_sub(1);
            }
            "i" | "em" => {
                self.flush();
                self.italic_depth += 1;
            }
            "/i" | "/em" => {
                self.flush();
                self.italic_depth = self.italic_depth.saturating_sub(1);
            }
            "br" | "br/" => {
                self.flush();
                self.out.push(Inline::LineBreak);
            }
            _ => return false,
        }
        true
    }

    fn finish(mut self) -> Vec<Inline> {
        self.flush();
        self.out
    }
}

/// Decodes an entity at the start of `input`, returning the char and byte length.
fn decode_entity(input: &str) -> Option<(char, usize)> {
    let end = input.char_indices().take(10).find(|(_, c)| *c == ';')?.0;
    let body = &input[1..end];
    let decoded = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        _ => {
            let code = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                body.strip_prefix('#')?.parse().ok()?
            };
            char::from_u32(code)?
        }
    };
    Some((decoded, end + 1))
}

/// Concatenated text of parsed runs, line breaks as `\n`.
pub fn plain_text(inlines: &[Inline]) -> String {
    inlines
        .iter()
        .map(|inline| match inline {
            Inline::Text { text, .. } => text.as_str(),
            Inline::LineBreak => "\n",
        })
        .collect()
}

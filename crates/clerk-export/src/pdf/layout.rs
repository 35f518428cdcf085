//! Flow layout: a story of flowables poured into fixed frames, page by page

use super::fonts::Font;

/// RGB colour with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    /// Colour from a `0xRRGGBB` literal
    pub const fn hex(rgb: u32) -> Self {
        Rgb(
            ((rgb >> 16) & 0xFF) as f32 / 255.0,
            ((rgb >> 8) & 0xFF) as f32 / 255.0,
            (rgb & 0xFF) as f32 / 255.0,
        )
    }
}

/// Horizontal alignment of paragraph lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Paragraph style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub font: Font,
    pub size: f32,
    pub leading: f32,
    pub color: Rgb,
    pub align: Align,
    pub space_before: f32,
    pub space_after: f32,
}

/// Element of a story
#[derive(Debug, Clone, PartialEq)]
pub enum Flowable {
    /// Vertical gap
    Spacer(f32),
    /// Word-wrapped text; `\n` forces a line break
    Paragraph { text: String, style: Style },
    /// Centred horizontal rule spanning a fraction of the frame width
    Rule {
        width_fraction: f32,
        thickness: f32,
        color: Rgb,
        space_before: f32,
        space_after: f32,
    },
    /// The logo, centred
    Logo { width: f32, height: f32 },
    /// Continue on a new page
    PageBreak,
}

/// A positioned drawing instruction in page coordinates (origin bottom-left)
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        font: Font,
        size: f32,
        color: Rgb,
        text: String,
    },
    Line {
        x1: f32,
        x2: f32,
        y: f32,
        thickness: f32,
        color: Rgb,
    },
    Logo {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

/// Laid-out content of one page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

/// Content area of a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub left: f32,
    pub bottom: f32,
    pub width: f32,
    pub top: f32,
}

/// Break `text` into lines no wider than `max_width`
///
/// Greedy: words are added to a line until the next one would overflow. A word
/// wider than the whole line is split between characters.
pub fn wrap(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        let mut line = String::new();
        for word in raw_line.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", line, word)
            };
            if font.text_width(&candidate, size) <= max_width {
                line = candidate;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let mut pieces = split_word(word, font, size, max_width);
            line = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
        }
        lines.push(line);
    }

    lines
}

fn split_word(word: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let mut pieces = vec![String::new()];
    for c in word.chars() {
        let mut candidate = pieces.last().cloned().unwrap_or_default();
        candidate.push(c);
        match pieces.last_mut() {
            Some(last) if last.is_empty() || font.text_width(&candidate, size) <= max_width => {
                *last = candidate;
            }
            _ => pieces.push(c.to_string()),
        }
    }
    pieces
}

/// Lay out `story` across as many pages as it needs
pub fn paginate(frame: Frame, story: &[Flowable]) -> Vec<Page> {
    let mut paginator = Paginator::new(frame);
    for flowable in story {
        paginator.place(flowable);
    }
    paginator.finish()
}

struct Paginator {
    frame: Frame,
    pages: Vec<Page>,
    current: Page,
    cursor: f32,
    at_top: bool,
}

impl Paginator {
    fn new(frame: Frame) -> Self {
        Self {
            frame,
            pages: Vec::new(),
            current: Page::default(),
            cursor: frame.top,
            at_top: true,
        }
    }

    fn remaining(&self) -> f32 {
        self.cursor - self.frame.bottom
    }

    fn new_page(&mut self) {
        self.pages.push(std::mem::take(&mut self.current));
        self.cursor = self.frame.top;
        self.at_top = true;
    }

    fn place(&mut self, flowable: &Flowable) {
        match flowable {
            Flowable::Spacer(height) => {
                if *height >= self.remaining() {
                    self.new_page();
                } else {
                    self.cursor -= height;
                    self.at_top = false;
                }
            }
            Flowable::Paragraph { text, style } => self.place_paragraph(text, style),
            Flowable::Rule {
                width_fraction,
                thickness,
                color,
                space_before,
                space_after,
            } => {
                if !self.at_top {
                    self.cursor -= space_before;
                }
                if *thickness > self.remaining() {
                    self.new_page();
                }
                let width = self.frame.width * width_fraction;
                let x1 = self.frame.left + (self.frame.width - width) / 2.0;
                self.current.ops.push(DrawOp::Line {
                    x1,
                    x2: x1 + width,
                    y: self.cursor - thickness / 2.0,
                    thickness: *thickness,
                    color: *color,
                });
                self.cursor -= thickness + space_after;
                self.at_top = false;
            }
            Flowable::Logo { width, height } => {
                if *height > self.remaining() && !self.at_top {
                    self.new_page();
                }
                let width = width.min(self.frame.width);
                self.current.ops.push(DrawOp::Logo {
                    x: self.frame.left + (self.frame.width - width) / 2.0,
                    y: self.cursor - height,
                    width,
                    height: *height,
                });
                self.cursor -= height;
                self.at_top = false;
            }
            Flowable::PageBreak => {
                if !self.at_top {
                    self.new_page();
                }
            }
        }
    }

    fn place_paragraph(&mut self, text: &str, style: &Style) {
        if !self.at_top {
            self.cursor -= style.space_before;
        }

        for line in wrap(text, style.font, style.size, self.frame.width) {
            if style.leading > self.remaining() && !self.at_top {
                self.new_page();
            }
            if !line.is_empty() {
                let x = match style.align {
                    Align::Left => self.frame.left,
                    Align::Center => {
                        let width = style.font.text_width(&line, style.size);
                        self.frame.left + (self.frame.width - width) / 2.0
                    }
                };
                self.current.ops.push(DrawOp::Text {
                    x,
                    y: self.cursor - style.size,
                    font: style.font,
                    size: style.size,
                    color: style.color,
                    text: line,
                });
            }
            self.cursor -= style.leading;
            self.at_top = false;
        }

        self.cursor -= style.space_after;
    }

    fn finish(mut self) -> Vec<Page> {
        if !self.current.ops.is_empty() || self.pages.is_empty() {
            self.new_page();
        }
        self.pages
    }
}

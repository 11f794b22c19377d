use raylib::core::text::measure_text;
use raylib::prelude::*;
use crate::constants::*;
use crate::engine::Engine;
use crate::page::ContentFx;
use crate::scroll_lock::PageScroll;

const HEADING_SIZE: i32 = 48;
const BODY_SIZE: i32 = 20;
const DETAIL_SIZE: i32 = 22;
const LINE_SPACING: f32 = 1.8;
const MAX_TEXT_WIDTH: f32 = 800.0;

/// Static text shown on the About and Contact pages.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageText {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub details: Vec<String>,
}

/// Greedy word wrap. `measure` returns the rendered width of a string.
pub fn wrap_words(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if !line.is_empty() && measure(&candidate) > max_width {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

struct Line {
    text: String,
    size: i32,
    gap_before: f32,
}

pub struct TextPageEngine {
    text: PageText,
    scroll: PageScroll,
    lines: Vec<Line>,
    laid_out_for: f32,
    content_height: f32,
}

impl TextPageEngine {
    pub fn new(text: PageText, scroll: PageScroll) -> Self {
        Self {
            text,
            scroll,
            lines: Vec::new(),
            laid_out_for: -1.0,
            content_height: 0.0,
        }
    }

    pub fn set_text(&mut self, text: PageText) {
        self.text = text;
        self.laid_out_for = -1.0;
    }

    /// How far the page can scroll in a window of `height`.
    pub fn max_scroll(&self, height: f32) -> f32 {
        (self.content_height + NAVBAR_HEIGHT * 1.5 - height).max(0.0)
    }

    pub fn layout(&mut self, width: f32, measure: impl Fn(&str, i32) -> f32) {
        if (self.laid_out_for - width).abs() < f32::EPSILON {
            return;
        }
        let max_width = (width - 80.0).min(MAX_TEXT_WIDTH);
        let mut lines = vec![Line {
            text: self.text.heading.clone(),
            size: HEADING_SIZE,
            gap_before: 0.0,
        }];

        for paragraph in &self.text.paragraphs {
            let mut gap = BODY_SIZE as f32;
            for text in wrap_words(paragraph, max_width, |s| measure(s, BODY_SIZE)) {
                lines.push(Line { text, size: BODY_SIZE, gap_before: gap });
                gap = 0.0;
            }
        }
        let mut gap = 30.0;
        for detail in &self.text.details {
            lines.push(Line {
                text: detail.clone(),
                size: DETAIL_SIZE,
                gap_before: gap,
            });
            gap = 15.0;
        }

        self.content_height = lines
            .iter()
            .map(|l| l.gap_before + l.size as f32 * LINE_SPACING)
            .sum();
        self.lines = lines;
        self.laid_out_for = width;
    }
}

impl Engine for TextPageEngine {
    fn update(&mut self, _dt: f32, width: f32, height: f32) {
        self.layout(width, |s, size| measure_text(s, size) as f32);
        let max = self.max_scroll(height);
        if self.scroll.offset() > max && !self.scroll.is_locked() {
            self.scroll.set_offset(max);
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle, width: f32, height: f32, fx: ContentFx) {
        d.clear_background(Color::new(17, 17, 17, 255));

        let top = ((height - self.content_height) * 0.5).max(NAVBAR_HEIGHT * 1.5);
        let mut y = top - self.scroll.offset() + fx.offset_y;
        let color = Color::new(255, 255, 255, (255.0 * fx.opacity) as u8);

        for line in &self.lines {
            y += line.gap_before;
            let line_width = measure_text(&line.text, line.size) as f32;
            let x = (width - line_width) * 0.5;
            d.draw_text(&line.text, x as i32, y as i32, line.size, color);
            y += line.size as f32 * LINE_SPACING;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> f32 {
        s.chars().count() as f32
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_words("one two three four five", 9.0, chars);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn overlong_words_get_their_own_line() {
        let lines = wrap_words("a extraordinarily b", 5.0, chars);
        assert_eq!(lines, vec!["a", "extraordinarily", "b"]);
    }

    #[test]
    fn blank_text_has_no_lines() {
        assert!(wrap_words("   ", 10.0, chars).is_empty());
    }

    #[test]
    fn tall_pages_can_scroll() {
        let text = PageText {
            heading: "About".into(),
            paragraphs: vec!["word ".repeat(400)],
            details: vec!["Email: someone@example.com".into()],
        };
        let mut page = TextPageEngine::new(text, PageScroll::new());
        page.layout(1000.0, |s, size| chars(s) * size as f32 * 0.5);
        assert!(page.max_scroll(600.0) > 0.0);
        assert_eq!(page.max_scroll(100_000.0), 0.0);
    }
}

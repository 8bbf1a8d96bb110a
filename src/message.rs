//! Celebration banner panel (heading, two paragraphs, one button row)

use crate::terminal::{rgb, Terminal};
use crossterm::style::Color;

const HEADING: &str = "🎉 Continuous Deployment Success! 🎉";
const PARAGRAPHS: [&str; 2] = [
    "Your application has been successfully deployed using GitHub Actions!",
    "This demonstrates the power of continuous deployment the GitHub way.",
];
const BUTTON: &str = "[ Celebrate! 🎊 ]";
const HINT: &str = "c/Enter celebrate · q quit";

// Widest the panel content gets, mirroring a fixed max banner width.
const MAX_PANEL_WIDTH: usize = 64;
const MIN_PANEL_WIDTH: usize = 24;

// Gradient stops, top-left to bottom-right.
const GRADIENT_FROM: (u8, u8, u8) = (0x66, 0x7e, 0xea);
const GRADIENT_TO: (u8, u8, u8) = (0x76, 0x4b, 0xa2);

/// Centered celebration panel. Layout is computed once per initialization;
/// `draw` repaints it each frame.
pub struct MessagePanel {
    x: i32,
    y: i32,
    width: usize,
    height: usize,
    paragraphs: Vec<Vec<String>>,
}

impl MessagePanel {
    pub fn new(term_width: u16, term_height: u16) -> Self {
        let width = (term_width as usize)
            .saturating_sub(4)
            .min(MAX_PANEL_WIDTH)
            .max(MIN_PANEL_WIDTH);
        let inner = width - 4;

        let paragraphs: Vec<Vec<String>> =
            PARAGRAPHS.iter().map(|p| word_wrap(p, inner)).collect();

        // border + padding + heading + gaps + paragraphs + button + hint
        let text_rows: usize = 1
            + paragraphs.iter().map(|p| p.len() + 1).sum::<usize>()
            + 1
            + 1
            + 1;
        let height = text_rows + 4;

        let x = (term_width as usize).saturating_sub(width) as i32 / 2;
        let y = (term_height as usize).saturating_sub(height) as i32 / 2;

        Self {
            x,
            y,
            width,
            height,
            paragraphs,
        }
    }

    /// Paint the panel into the back buffer: gradient fill, rounded border,
    /// centered text. Off-screen cells are silently dropped.
    pub fn draw(&self, term: &mut Terminal) {
        let w = self.width;
        let h = self.height;

        for row in 0..h {
            for col in 0..w {
                term.set_bg(self.x + col as i32, self.y + row as i32, self.gradient_at(col, row));
            }
        }

        let border = Some(Color::White);
        term.set(self.x, self.y, '╭', border, false);
        term.set(self.x + w as i32 - 1, self.y, '╮', border, false);
        term.set(self.x, self.y + h as i32 - 1, '╰', border, false);
        term.set(self.x + w as i32 - 1, self.y + h as i32 - 1, '╯', border, false);
        for col in 1..w - 1 {
            term.set(self.x + col as i32, self.y, '─', border, false);
            term.set(self.x + col as i32, self.y + h as i32 - 1, '─', border, false);
        }
        for row in 1..h - 1 {
            term.set(self.x, self.y + row as i32, '│', border, false);
            term.set(self.x + w as i32 - 1, self.y + row as i32, '│', border, false);
        }

        let mut row = 2;
        self.centered(term, row, HEADING, Some(Color::White), true);
        row += 2;

        for para in &self.paragraphs {
            for line in para {
                self.centered(term, row, line, Some(Color::White), false);
                row += 1;
            }
            row += 1;
        }

        self.centered(term, row, BUTTON, Some(Color::Yellow), true);
        row += 1;
        self.centered(term, row, HINT, Some(Color::Grey), false);
    }

    fn centered(&self, term: &mut Terminal, row: usize, text: &str, fg: Option<Color>, bold: bool) {
        let len = text.chars().count();
        let x = self.x + (self.width.saturating_sub(len) / 2) as i32;
        term.set_str(x, self.y + row as i32, text, fg, bold);
    }

    fn gradient_at(&self, col: usize, row: usize) -> Color {
        // Diagonal blend: progress runs from the top-left to the bottom-right
        // corner, like a 135° CSS gradient.
        let dx = col as f32 / (self.width.max(2) - 1) as f32;
        let dy = row as f32 / (self.height.max(2) - 1) as f32;
        let t = (dx + dy) / 2.0;
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        rgb(
            lerp(GRADIENT_FROM.0, GRADIENT_TO.0),
            lerp(GRADIENT_FROM.1, GRADIENT_TO.1),
            lerp(GRADIENT_FROM.2, GRADIENT_TO.2),
        )
    }
}

/// Greedy word wrap within `width` columns. Words longer than the width get
/// a line of their own.
fn word_wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

//! Bordered, width-wrapped message blocks.
//!
//! A block is a blank line, a rule of dashes, the wrapped message and the
//! same rule again. The rule is one column narrower than the terminal.

use anyhow::{Context, Result};
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::platform::Terminal;
use crate::streams::StreamContext;

/// Usable width for a terminal of `columns` columns: one column of margin,
/// never less than 1.
pub fn block_width(columns: i32) -> usize {
    usize::try_from(columns.saturating_sub(1)).unwrap_or(0).max(1)
}

/// Greedy word wrap to `width` display columns.
///
/// Words are packed onto a line while they fit and lines only break at
/// whitespace. A word wider than `width` on its own is cut into `width`-wide
/// pieces. Empty or blank text yields no lines.
///
/// Runs of whitespace between words, including newlines and tabs, collapse to
/// a single space.
///
/// A character wider than `width` (a double-width glyph at width 1) cannot be
/// split and sits alone on a line that is wider than `width`.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if line.is_empty() {
            word_width
        } else {
            line_width + 1 + word_width
        };
        if needed <= width {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
            line_width = needed;
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        if word_width <= width {
            line.push_str(word);
            line_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if line_width + ch_width > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            line.push(ch);
            line_width += ch_width;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Render `message` as a block for a terminal of `columns` columns.
pub fn render(message: &str, columns: i32) -> String {
    let width = block_width(columns);
    let rule = "-".repeat(width);
    let wrapped = wrap(message, width).join("\n");

    let mut block = String::with_capacity(2 * width + wrapped.len() + 4);
    block.push('\n');
    block.push_str(&rule);
    block.push('\n');
    block.push_str(&wrapped);
    block.push('\n');
    block.push_str(&rule);
    block.push('\n');
    block
}

/// Write `message` as a block to the context's bound output stream, sized to
/// the terminal's current width.
pub fn show_message(ctx: &StreamContext, terminal: &impl Terminal, message: &str) -> Result<()> {
    let block = render(message, terminal.columns());
    ctx.write_out(&block)
        .context("Failed to write message to console")
}

use terminal_size::{Width, terminal_size};

use crate::ui::ansi::ESC_BYTE;

/// Column arithmetic for strings that may carry ANSI styling and emoji.
#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    /// Drops `ESC [ ... <letter>` sequences.
    pub(crate) fn strip_ansi(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c as u32 == ESC_BYTE as u32 && chars.peek() == Some(&'[') {
                chars.next();
                for nc in chars.by_ref() {
                    if nc.is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
            out.push(c);
        }
        out
    }

    // Pictographs render two cells wide in common terminals; variation
    // selectors and joiners take none.
    fn char_width(c: char) -> usize {
        match c as u32 {
            0x200D | 0xFE0E | 0xFE0F => 0,
            0x1F000..=0x1FAFF => 2,
            _ => 1,
        }
    }

    pub fn visible_width(&self, s: &str) -> usize {
        Self::strip_ansi(s).chars().map(Self::char_width).sum()
    }

    pub fn pad_visible(&self, s: &str, width: usize) -> String {
        let w = self.visible_width(s);
        format!("{s}{}", " ".repeat(width.saturating_sub(w)))
    }

    /// Best-effort terminal width (defaults to 80).
    pub fn terminal_width(&self) -> usize {
        terminal_size().map_or(80, |(Width(w), _)| w as usize)
    }

    /// Left padding that centers `content_width` columns in the terminal.
    pub fn center_pad(&self, content_width: usize) -> usize {
        self.terminal_width().saturating_sub(content_width) / 2
    }
}

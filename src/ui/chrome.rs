use crate::ui::ansi::{
    CLEAR_LINE_REST, CURSOR_UP_ONE, FG_LIGHT_GRAY, PROMPT_STYLE, STYLE_BOLD, STYLE_ITALIC,
    STYLE_RESET,
};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const BANNER_WIDTH: usize = 50;

/// Screen-level pieces: the startup banner and the input bar.
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn banner_lines(&self) -> Vec<String> {
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}L U M I N A{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}Countdowns made simple{STYLE_RESET}");
        let blank = " ".repeat(BANNER_WIDTH);
        vec![
            format!("╭{}╮", "─".repeat(BANNER_WIDTH)),
            format!("│{blank}│"),
            format!("│{}│", self.center_in_box(&title, BANNER_WIDTH)),
            format!("│{}│", self.center_in_box(&subtitle, BANNER_WIDTH)),
            format!("│{blank}│"),
            format!("╰{}╯", "─".repeat(BANNER_WIDTH)),
        ]
    }

    /// Prints the banner centered in the current terminal.
    pub fn print_banner(&self) {
        let pad = " ".repeat(self.util.center_pad(BANNER_WIDTH + 2));
        for line in self.banner_lines() {
            println!("{pad}{line}");
        }
    }

    /// Draws the shaded input bar and parks the cursor after `prompt`.
    pub fn print_prompt(&self, prompt: &str) {
        self.print_padding_line();
        println!("{PROMPT_STYLE}{prompt}{CLEAR_LINE_REST}{STYLE_RESET}");
        print!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}");
        let column = self.util.visible_width(prompt) + 1;
        print!("{CURSOR_UP_ONE}\x1B[{column}G{PROMPT_STYLE}");
        let _ = io::stdout().flush();
    }

    pub fn print_prompt_bottom_padding(&self) {
        self.print_padding_line();
        let _ = io::stdout().flush();
    }

    fn print_padding_line(&self) {
        println!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}");
    }

    fn center_in_box(&self, content: &str, width: usize) -> String {
        let content_width = self.util.visible_width(content);
        if content_width >= width {
            return content.to_string();
        }
        let left = (width - content_width) / 2;
        let right = width - content_width - left;
        format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
    }
}

// ANSI/VT100 control sequences and the macros that build them.

/// ESC as a byte, for scanning rendered strings.
pub const ESC_BYTE: u8 = 0x1B;

/// Control Sequence Introducer followed by `$suffix`.
#[macro_export]
macro_rules! csi {
    ($suffix:literal) => {
        concat!("\x1B[", $suffix)
    };
}

#[macro_export]
macro_rules! csi2 {
    ($first:literal, $second:literal) => {
        concat!("\x1B[", $first, "\x1B[", $second)
    };
}

pub const CLEAR_LINE_REST: &str = crate::csi!("0K");
pub const CURSOR_UP_ONE: &str = crate::csi!("1A");
pub const HIDE_CURSOR: &str = crate::csi!("?25l");
pub const SHOW_CURSOR: &str = crate::csi!("?25h");
/// Blinking block cursor, where the terminal supports it.
pub const CURSOR_BLINKING_BLOCK: &str = crate::csi!("1 q");

pub const STYLE_RESET: &str = crate::csi!("0m");
pub const STYLE_BOLD: &str = crate::csi!("1m");
pub const STYLE_ITALIC: &str = crate::csi!("3m");
pub const FG_LIGHT_GRAY: &str = crate::csi!("37m");

// Countdown urgency, loudest first.
pub const FG_RED_BOLD: &str = crate::csi2!("1m", "31m");
pub const FG_LIGHT_RED: &str = crate::csi!("91m");
pub const FG_ORANGE: &str = crate::csi!("38;5;208m");
pub const FG_DIM_GRAY: &str = crate::csi!("90m");

/// White on dark gray, for the input line.
pub const PROMPT_STYLE: &str = crate::csi2!("38;5;15m", "48;5;236m");

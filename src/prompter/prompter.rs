use crate::errors::{Error, Result};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::ansi::{CURSOR_BLINKING_BLOCK, HIDE_CURSOR, SHOW_CURSOR};
use std::io::{self, BufRead, StdinLock, Write};

/// Line-oriented input loop. Reads from any `BufRead`, so tests can feed a
/// `Cursor` where the binary uses locked stdin.
pub struct Prompter<R> {
    reader: R,
    lines_read: usize,
}

impl Prompter<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> Prompter<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            lines_read: 0,
        }
    }

    /// Drives `flow` until it finishes or input runs out, and returns the
    /// number of lines read.
    pub fn run<F: Flow>(&mut self, flow: &mut F) -> Result<usize> {
        loop {
            Self::with_hidden_cursor(|| flow.render())?;

            let Some(line) = self.next_line()? else {
                break;
            };
            if flow.handle_input(&line)? == FlowCtrl::Finish {
                break;
            }
        }
        flow.finish();
        Ok(self.lines_read)
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).map_err(Error::Io)? == 0 {
            return Ok(None);
        }
        self.lines_read += 1;
        Ok(Some(line.trim().to_string()))
    }

    fn with_hidden_cursor(draw: impl FnOnce() -> Result<()>) -> Result<()> {
        print!("{HIDE_CURSOR}");
        let drawn = draw();
        print!("{SHOW_CURSOR}{CURSOR_BLINKING_BLOCK}");
        let _ = io::stdout().flush();
        drawn
    }
}

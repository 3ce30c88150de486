use crate::errors::Result;

/// What the prompter does once a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowCtrl {
    Continue,
    Finish,
}

/// A screen driven one input line at a time.
pub trait Flow {
    /// Draws everything that precedes the next input line.
    fn render(&mut self) -> Result<()>;

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl>;

    /// Runs once when the loop stops, on `Finish` and on end of input alike.
    fn finish(&mut self) {}
}

use crate::error::Result;

/// Line-based console I/O used by the interactive flows.
pub trait Prompt {
    /// Show `message` and read one line of input, without the line ending.
    fn ask(&mut self, message: &str) -> Result<String>;

    /// Print one line of output.
    fn say(&mut self, line: &str);
}

/// Keyword that backs out of the menu and the state-code prompt.
pub const EXIT_KEYWORD: &str = "exit";

pub fn is_exit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(EXIT_KEYWORD)
}

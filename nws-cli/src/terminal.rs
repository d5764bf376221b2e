use inquire::{InquireError, Text};
use std::io::{self, BufRead, IsTerminal};

use nws_core::{NwsError, Prompt};

/// Console prompt: `inquire` on a real terminal, plain line reads when piped.
#[derive(Debug)]
pub struct TerminalPrompt {
    interactive: bool,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }

    fn read_line() -> nws_core::Result<String> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(NwsError::end_of_input());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Prompt for TerminalPrompt {
    fn ask(&mut self, message: &str) -> nws_core::Result<String> {
        if !self.interactive {
            println!("{message}");
            return Self::read_line();
        }

        // inquire renders a single-line question; earlier lines are plain output.
        let (preamble, question) = split_message(message);
        if let Some(preamble) = preamble {
            println!("{preamble}");
        }

        match Text::new(question).prompt() {
            Ok(answer) => Ok(answer),
            Err(InquireError::IO(e)) => Err(NwsError::Input(e)),
            Err(
                InquireError::OperationCanceled | InquireError::OperationInterrupted,
            ) => Err(NwsError::end_of_input()),
            Err(e) => Err(NwsError::Input(io::Error::other(e))),
        }
    }

    fn say(&mut self, line: &str) {
        println!("{line}");
    }
}

fn split_message(message: &str) -> (Option<&str>, &str) {
    match message.rsplit_once('\n') {
        Some((preamble, question)) => (Some(preamble), question),
        None => (None, message),
    }
}

//! Operator confirmation.
//!
//! Answers are compared literally against [`AFFIRMATIVE`]; anything else, including an
//! empty line or end of input, is a decline. Prompts block with no timeout.

use std::io::{self, BufRead, Write};

use crate::errors::MoveError;

/// The only answer that counts as "yes".
pub const AFFIRMATIVE: &str = "y";

pub trait Prompt {
    /// Show `message` and return the operator's line without its line terminator.
    fn ask(&mut self, message: &str) -> Result<String, MoveError>;

    /// Ask a yes/no question; `(y/n)` is appended to `question`.
    fn confirm(&mut self, question: &str) -> Result<bool, MoveError> {
        let answer = self.ask(&format!("{question} (y/n) "))?;
        Ok(answer == AFFIRMATIVE)
    }
}

/// Line-oriented prompt over any reader/writer pair.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, message: &str) -> Result<String, MoveError> {
        self.output
            .write_all(message.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(MoveError::Prompt)?;
        let mut line = String::new();
        self.input.read_line(&mut line).map_err(MoveError::Prompt)?;
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(trimmed.to_string())
    }
}

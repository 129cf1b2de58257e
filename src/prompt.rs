use std::io::{self, BufRead, StdinLock, StdoutLock, Write};

use crate::{Error, Result};

/// A line-oriented question/answer channel.
///
/// Questions are strictly sequential: `ask` takes `&mut self`, so only one
/// can be outstanding. `close` consumes the session.
pub struct PromptSession<R, W> {
    input: R,
    output: W,
}

impl PromptSession<StdinLock<'static>, StdoutLock<'static>> {
    /// Create a session over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `prompt` and return the next line of input without its line ending.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.output
            .write_all(prompt.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(Error::PromptWrite)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(Error::PromptRead)?;
        if read == 0 {
            return Err(Error::InputClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Write one line of informational output.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line).map_err(Error::PromptWrite)
    }

    /// Flush pending output and release both halves of the channel.
    pub fn close(mut self) -> Result<()> {
        self.output.flush().map_err(Error::PromptWrite)
    }

    /// Consume the session, returning the underlying writer (for testing).
    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}

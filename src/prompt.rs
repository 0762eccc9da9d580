// ABOUTME: Overwrite confirmation for the beamert application
// ABOUTME: Asks before an existing document is replaced

use std::io::{self, BufRead, Stdin, Stdout, Write};
use std::path::Path;

/// Decides whether an existing output file may be replaced
pub trait OverwritePrompt {
    fn confirm_overwrite(&mut self, path: &Path) -> io::Result<bool>;
}

/// Line-based prompt: writes a question, reads one answer.
///
/// Only `y` (any case, surrounding whitespace ignored) confirms. An empty
/// answer or end of input declines.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<io::BufReader<Stdin>, Stdout> {
    /// Prompt on the terminal
    pub fn stdio() -> Self {
        Self::new(io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> OverwritePrompt for LinePrompt<R, W> {
    fn confirm_overwrite(&mut self, path: &Path) -> io::Result<bool> {
        write!(
            self.output,
            "File {} already exist! Override? [Y/n] ",
            path.display()
        )?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }
}

// ABOUTME: Configuration module for the beamert application
// ABOUTME: Holds the options that control how a deck is written and compiled

/// External processor used when none is configured
pub const DEFAULT_COMMAND: &str = "pdflatex";

/// Extension of the artifact the default processor produces
pub const ARTIFACT_EXTENSION: &str = "pdf";

/// Options for a compile run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Replace an existing document without asking
    pub force_overwrite: bool,
    /// Log at debug level, including the processor's output
    pub verbose: bool,
    /// Processor program, optionally followed by extra arguments
    pub command: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            force_overwrite: false,
            verbose: false,
            command: DEFAULT_COMMAND.to_string(),
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn force_overwrite(mut self, force: bool) -> Self {
        self.force_overwrite = force;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    /// Split `command` into the program and its leading arguments
    pub fn program_and_args(&self) -> Option<(&str, Vec<&str>)> {
        let mut words = self.command.split_whitespace();
        let program = words.next()?;
        Some((program, words.collect()))
    }
}

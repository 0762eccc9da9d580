// ABOUTME: Deck compiler for the beamert application
// ABOUTME: Renders components into a .tex file and runs the external processor on it

use crate::components::{render_document, Component};
use crate::config::{CompileOptions, ARTIFACT_EXTENSION};
use crate::diagnostics::{diagnose, Hint};
use crate::errors::{BeamerError, Result};
use crate::logging::Logger;
use crate::prompt::{LinePrompt, OverwritePrompt};
use crate::utils::{ensure_parent_directory_exists, output_directory};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Outcome of a compile run that got past rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileReport {
    /// The processor exited with status 0
    Compiled { document: PathBuf, artifact: PathBuf },
    /// The document already existed and replacing it was declined
    WriteDeclined { document: PathBuf },
    /// The processor exited with a non-zero status (or was killed)
    ProcessFailed {
        document: PathBuf,
        command: String,
        exit_code: Option<i32>,
        hints: Vec<Hint>,
    },
    /// The processor could not be started or talked to
    Unexpected { document: PathBuf, message: String },
}

impl CompileReport {
    pub fn is_success(&self) -> bool {
        matches!(self, CompileReport::Compiled { .. })
    }

    pub fn document(&self) -> &Path {
        match self {
            CompileReport::Compiled { document, .. }
            | CompileReport::WriteDeclined { document }
            | CompileReport::ProcessFailed { document, .. }
            | CompileReport::Unexpected { document, .. } => document,
        }
    }

    /// The artifact path on success, the matching error otherwise
    pub fn into_result(self) -> Result<PathBuf> {
        match self {
            CompileReport::Compiled { artifact, .. } => Ok(artifact),
            CompileReport::WriteDeclined { document } => Err(BeamerError::WriteConflict(document)),
            CompileReport::ProcessFailed {
                command,
                exit_code,
                hints,
                ..
            } => Err(BeamerError::ExternalProcessFailure {
                command,
                exit_code,
                hints,
            }),
            CompileReport::Unexpected { message, .. } => {
                Err(BeamerError::UnexpectedError(message))
            }
        }
    }
}

/// Writes decks to disk and runs the external processor on them.
///
/// Each compiler carries its own `Logger`; nothing here touches global
/// logging state.
pub struct Compiler {
    options: CompileOptions,
    logger: Logger,
    prompt: Box<dyn OverwritePrompt>,
}

impl Compiler {
    /// Compiler logging as `Compiler`, asking on the terminal before overwriting
    pub fn new(options: CompileOptions) -> Self {
        let logger = Logger::with_verbosity("Compiler", options.verbose);
        Self::with_logger(options, logger)
    }

    pub fn with_logger(options: CompileOptions, logger: Logger) -> Self {
        logger.info("Initiating compiler ..");
        Self {
            options,
            logger,
            prompt: Box::new(LinePrompt::stdio()),
        }
    }

    /// Replace the overwrite confirmation
    pub fn with_prompt(mut self, prompt: impl OverwritePrompt + 'static) -> Self {
        self.prompt = Box::new(prompt);
        self
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Render `components`, write them to `output_path` and run the processor.
    ///
    /// Returns `Err` only when rendering fails validation or the document
    /// cannot be written; every other outcome is logged and reported.
    pub fn compile(
        &mut self,
        components: &[Box<dyn Component>],
        output_path: &Path,
    ) -> Result<CompileReport> {
        let text = render_document(components).map_err(|e| {
            self.logger.error(format!("[Failed] {}", e));
            e
        })?;
        self.logger.debug(format!(
            "Rendered {} components ({} bytes)",
            components.len(),
            text.len()
        ));

        let document = output_path.to_path_buf();
        if !self.write_document(&text, output_path)? {
            self.logger.error("[Failed] No changes are made..");
            return Ok(CompileReport::WriteDeclined { document });
        }
        self.logger
            .info(format!("[Success] Wrote in {}", output_path.display()));

        Ok(self.run_processor(document))
    }

    /// Returns `false` when the file exists and overwriting was declined
    fn write_document(&mut self, text: &str, path: &Path) -> Result<bool> {
        ensure_parent_directory_exists(path)?;

        if self.options.force_overwrite {
            fs::write(path, text)?;
            return Ok(true);
        }

        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(mut file) => {
                file.write_all(text.as_bytes())?;
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                match self.prompt.confirm_overwrite(path) {
                    Ok(true) => {
                        fs::write(path, text)?;
                        Ok(true)
                    }
                    Ok(false) => Ok(false),
                    Err(e) => {
                        self.logger
                            .error(format!("Could not read overwrite confirmation: {}", e));
                        Ok(false)
                    }
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    fn run_processor(&self, document: PathBuf) -> CompileReport {
        let command = self.options.command.clone();
        let Some((program, extra_args)) = self.options.program_and_args() else {
            let message = BeamerError::InvalidCommand(command).to_string();
            self.logger.error(format!("[Failed] {}", message));
            return CompileReport::Unexpected { document, message };
        };

        let out_dir = output_directory(&document);
        self.logger.debug(format!(
            "Running {} on {} (output directory {})",
            command,
            document.display(),
            out_dir.display()
        ));

        let output = match Command::new(program)
            .args(extra_args)
            .arg("-interaction=nonstopmode")
            .arg(format!("-output-directory={}", out_dir.display()))
            .arg(&document)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                let message = e.to_string();
                self.logger.error(format!("[Failed] {}", message));
                return CompileReport::Unexpected { document, message };
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stdout.is_empty() {
            self.logger.debug(&stdout);
        }
        if !stderr.is_empty() {
            self.logger.debug(&stderr);
        }

        let exit_code = output.status.code();
        self.logger.info(format!(
            "CMD {} returning {}",
            command,
            exit_code.map_or_else(|| "no exit code".to_string(), |c| c.to_string())
        ));

        if output.status.success() {
            let artifact = document.with_extension(ARTIFACT_EXTENSION);
            self.logger
                .info(format!("[Success] Pdf in {}", artifact.display()));
            return CompileReport::Compiled { document, artifact };
        }

        self.logger
            .error(format!("[Failed] {} failed to compile..", command));
        let hints = diagnose(&stdout);
        for hint in &hints {
            self.logger.error(format!("[Hint] {}", hint));
        }
        CompileReport::ProcessFailed {
            document,
            command,
            exit_code,
            hints,
        }
    }
}

// ABOUTME: Library module for the beamert program.
// ABOUTME: Contains the slide components, the title metadata and the deck compiler.

// Reexport modules
pub mod compiler;
pub mod components;
pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod logging;
pub mod markup;
pub mod metadata;
pub mod prompt;
pub mod templates;
pub mod utils;

// Reexport common types and functions
pub use compiler::{CompileReport, Compiler};
pub use components::{
    render_document, Component, DocumentBoundary, EmptyFrame, FileFrame, Header, Section, Style,
    TitleFrame, TitleSetting, TocFrame, TocSetting,
};
pub use config::CompileOptions;
pub use diagnostics::{diagnose, Hint};
pub use errors::{BeamerError, Result};
pub use logging::Logger;
pub use metadata::TitleMetadata;
pub use prompt::{LinePrompt, OverwritePrompt};

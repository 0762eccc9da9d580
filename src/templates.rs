// ABOUTME: Built-in deck templates for the beamert application
// ABOUTME: Maps template names to ready-made component lists

use crate::components::{
    Component, DocumentBoundary, EmptyFrame, FileFrame, Header, Section, Style, TitleFrame,
    TitleSetting, TocFrame, TocSetting,
};
use crate::errors::{BeamerError, Result};
use crate::metadata::TitleMetadata;
use std::path::PathBuf;

type Builder = fn() -> Result<Vec<Box<dyn Component>>>;

const TEMPLATES: &[(&str, Builder)] = &[("demo", demo), ("minimal", minimal)];

/// Names of every built-in template
pub fn names() -> Vec<&'static str> {
    TEMPLATES.iter().map(|(name, _)| *name).collect()
}

/// Build the component list for the template called `name`
pub fn build(name: &str) -> Result<Vec<Box<dyn Component>>> {
    TEMPLATES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .ok_or_else(|| BeamerError::UnknownTemplate(name.to_string()))
        .and_then(|(_, builder)| builder())
}

/// Title page, outline, two sections with placeholder and file frames
fn demo() -> Result<Vec<Box<dyn Component>>> {
    let metadata = TitleMetadata {
        title: Some("Welcome to the Jungle".into()),
        short_title: Some("WTTJ".into()),
        subtitle: Some("a gentle introduction".into()),
        names: Some(vec!["Black Zombie".into(), "Lucky Rogue".into()]),
        names_short: Some(vec!["B. Zombie".into()]),
        names_inst_index: Some(vec!["1, 2".into(), "2".into()]),
        institutions: Some(vec!["Pepperland".into(), "Ultra Station".into()]),
        institutions_short: Some(vec!["Pl".into()]),
        institution_index: Some(vec!["1".into(), "2".into()]),
        meeting: Some("Universe Edge Concert".into()),
        meeting_short: Some("UEC".into()),
        logo_paths: Some(vec![PathBuf::from("test/figures/logo.png")]),
    };

    Ok(vec![
        Box::new(Header::new()),
        Box::new(Style),
        Box::new(TitleSetting::new(metadata)),
        Box::new(TocSetting),
        Box::new(DocumentBoundary::Begin),
        Box::new(TitleFrame),
        Box::new(TocFrame::new("Outline")),
        Box::new(Section::new("Section One")),
        Box::new(EmptyFrame),
        Box::new(FileFrame::new("test/frames/frame_sample.tex")?),
        Box::new(FileFrame::new("test/frames/frame_figures.tex")?),
        Box::new(Section::new("Section Two")),
        Box::new(EmptyFrame),
        Box::new(FileFrame::new("test/frames/frame_twocolumn.tex")?),
        Box::new(DocumentBoundary::End),
    ])
}

/// Smallest deck that compiles: one section with one blank slide
fn minimal() -> Result<Vec<Box<dyn Component>>> {
    Ok(vec![
        Box::new(Header::new()),
        Box::new(Style),
        Box::new(DocumentBoundary::Begin),
        Box::new(Section::new("Intro")),
        Box::new(EmptyFrame),
        Box::new(DocumentBoundary::End),
    ])
}

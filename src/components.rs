// ABOUTME: Slide components for the beamert application
// ABOUTME: Each component renders one fragment of a Beamer document

use crate::errors::Result;
use crate::markup::{group, heading_keyword, region_begin, region_end};
use crate::metadata::TitleMetadata;
use crate::utils::absolute_path;
use std::path::{Path, PathBuf};

/// Aspect ratio used by `Header` unless one is configured
pub const DEFAULT_ASPECT_RATIO: &str = "1610";

const STYLE: &str = r"
\usetheme{Madrid}
\useoutertheme{default}
\useinnertheme{rounded}

\definecolor{myblue}{rgb}{0.35686, 0.60784, 0.83529}
\definecolor{mylightblue}{rgb}{0.0, 0.43922, 0.75294}
\definecolor{mydarkblue}{rgb}{0.26667, 0.45490, 0.62745}
\definecolor{myorange}{rgb}{0.92941, 0.49020, 0.19216}
\definecolor{mygrey}{rgb}{0.3686, 0.5255, 0.6235}

\setbeamercolor{palette primary}{bg=myblue,fg=white}
\setbeamercolor{palette secondary}{bg=myblue,fg=white}
\setbeamercolor{palette tertiary}{bg=myblue,fg=white}
\setbeamercolor{palette quaternary}{bg=myblue,fg=white}
\setbeamercolor{structure}{fg=myblue} % itemize, enumerate, etc
\setbeamercolor{section in toc}{fg=myblue} % TOC sections
\setbeamercolor{subsection in head/foot}{bg=mygrey,fg=white}
\setbeamertemplate{navigation symbols}{}
\setbeamertemplate{itemize items}[square]
\setbeamertemplate{enumerate items}[square]

\setbeamertemplate{title page}[default][rounded=true,shadow=false]
\setbeamertemplate{blocks}[rounded][shadow=false]

\setlength{\leftmargini}{0.3cm}
\setlength{\leftmarginii}{0.3cm}
";

const TOC_SETTING: &str = r"
\AtBeginSection[]
{
  \begin{frame}
    \frametitle{Table of Contents}
    \tableofcontents[currentsection]
  \end{frame}
}
";

const TITLE_FRAME: &str = r"
\frame{\titlepage}
\logo{}
";

/// A renderable piece of a slide deck.
///
/// Implementations hold only their own configuration; rendering the same
/// component twice yields the same text.
pub trait Component: std::fmt::Debug {
    fn render(&self) -> Result<String>;
}

/// Document class and input encoding declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    aspect_ratio: Option<String>,
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self { aspect_ratio: None }
    }

    /// Use a Beamer `aspectratio` value such as `169` or `43`
    pub fn with_aspect_ratio(ratio: impl Into<String>) -> Self {
        Self {
            aspect_ratio: Some(ratio.into()),
        }
    }

    pub fn aspect_ratio(&self) -> &str {
        self.aspect_ratio.as_deref().unwrap_or(DEFAULT_ASPECT_RATIO)
    }
}

impl Component for Header {
    fn render(&self) -> Result<String> {
        Ok(format!(
            "\n\\documentclass[aspectratio={}]{{beamer}}\n\\usepackage[utf8]{{inputenc}}\n",
            self.aspect_ratio()
        ))
    }
}

/// Theme, colour and template settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style;

impl Component for Style {
    fn render(&self) -> Result<String> {
        Ok(STYLE.to_string())
    }
}

/// Title page metadata for the preamble
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSetting {
    metadata: TitleMetadata,
}

impl TitleSetting {
    pub fn new(metadata: TitleMetadata) -> Self {
        Self { metadata }
    }

    pub fn metadata(&self) -> &TitleMetadata {
        &self.metadata
    }
}

impl Component for TitleSetting {
    fn render(&self) -> Result<String> {
        self.metadata.render()
    }
}

/// Repeat the table of contents at the start of every section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TocSetting;

impl Component for TocSetting {
    fn render(&self) -> Result<String> {
        Ok(TOC_SETTING.to_string())
    }
}

/// Opens or closes the document body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentBoundary {
    Begin,
    End,
}

impl Component for DocumentBoundary {
    fn render(&self) -> Result<String> {
        Ok(match self {
            DocumentBoundary::Begin => region_begin("document"),
            DocumentBoundary::End => region_end("document"),
        })
    }
}

/// A `\section`, `\subsection` or `\subsubsection` heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    title: String,
    level: i32,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_level(title, 1)
    }

    /// Levels outside 1..=3 render as a top-level section
    pub fn with_level(title: impl Into<String>, level: i32) -> Self {
        Self {
            title: title.into(),
            level,
        }
    }
}

impl Component for Section {
    fn render(&self) -> Result<String> {
        Ok(format!(
            "\\{}{}",
            heading_keyword(self.level),
            group(&self.title)
        ))
    }
}

/// The title page slide
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TitleFrame;

impl Component for TitleFrame {
    fn render(&self) -> Result<String> {
        Ok(TITLE_FRAME.to_string())
    }
}

/// A slide listing the table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocFrame {
    title: String,
}

impl TocFrame {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Component for TocFrame {
    fn render(&self) -> Result<String> {
        Ok(format!(
            "{}\\frametitle{}\n\\tableofcontents{}",
            region_begin("frame"),
            group(&self.title),
            region_end("frame")
        ))
    }
}

/// A blank placeholder slide
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyFrame;

impl Component for EmptyFrame {
    fn render(&self) -> Result<String> {
        Ok(format!("{}{}", region_begin("frame"), region_end("frame")))
    }
}

/// Pulls a hand-written slide in with `\input`.
///
/// The path is resolved against the working directory when the frame is
/// built, so later directory changes do not affect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFrame {
    path: PathBuf,
}

impl FileFrame {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            path: absolute_path(path.as_ref())?,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Component for FileFrame {
    fn render(&self) -> Result<String> {
        Ok(format!("\\input{}", group(self.path.display().to_string())))
    }
}

/// Render every component in order, joined by single newlines
pub fn render_document(components: &[Box<dyn Component>]) -> Result<String> {
    let fragments = components
        .iter()
        .map(|component| component.render())
        .collect::<Result<Vec<_>>>()?;
    Ok(fragments.join("\n"))
}

// ABOUTME: Title metadata for the beamert application
// ABOUTME: Holds optional presentation details and renders the Beamer title-page preamble

use crate::errors::{BeamerError, Result};
use crate::markup::group;
use crate::utils::absolute_path;
use std::path::PathBuf;

/// Height used for every logo on the title page
const LOGO_HEIGHT: &str = "1cm";

/// Optional details shown on the title page.
///
/// Every field may be left unset; unset (or empty) fields produce no output.
/// When both lists of a pair are set they must have the same length:
/// `names` with `names_inst_index`, and `institutions` with
/// `institution_index`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleMetadata {
    pub title: Option<String>,
    pub short_title: Option<String>,
    pub subtitle: Option<String>,
    /// Author names, in display order
    pub names: Option<Vec<String>>,
    pub names_short: Option<Vec<String>>,
    /// Institution superscript for each author, e.g. `"1, 2"`
    pub names_inst_index: Option<Vec<String>>,
    pub institutions: Option<Vec<String>>,
    pub institutions_short: Option<Vec<String>>,
    /// Superscript marker for each institution
    pub institution_index: Option<Vec<String>>,
    pub meeting: Option<String>,
    pub meeting_short: Option<String>,
    pub logo_paths: Option<Vec<PathBuf>>,
}

fn text(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn list<T>(field: &Option<Vec<T>>) -> Option<&[T]> {
    field.as_deref().filter(|items| !items.is_empty())
}

fn command(name: &str, short: Option<&str>, body: &str) -> String {
    match short {
        Some(short) => format!("\\{}[{}]{}", name, short, group(body)),
        None => format!("\\{}{}", name, group(body)),
    }
}

fn check_pair<A, B>(
    left: &'static str,
    left_items: Option<&[A]>,
    right: &'static str,
    right_items: Option<&[B]>,
) -> Result<()> {
    match (left_items, right_items) {
        (Some(l), Some(r)) if l.len() != r.len() => Err(BeamerError::ValidationError {
            left,
            right,
            left_len: l.len(),
            right_len: r.len(),
        }),
        _ => Ok(()),
    }
}

impl TitleMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that paired per-item lists line up
    pub fn validate(&self) -> Result<()> {
        check_pair(
            "names",
            list(&self.names),
            "names_inst_index",
            list(&self.names_inst_index),
        )?;
        check_pair(
            "institutions",
            list(&self.institutions),
            "institution_index",
            list(&self.institution_index),
        )
    }

    /// Render the preamble lines: title, subtitle, authors, institutions,
    /// date and logo, in that order.
    pub fn render(&self) -> Result<String> {
        self.validate()?;

        let mut lines = Vec::new();

        if let Some(title) = text(&self.title) {
            lines.push(command("title", text(&self.short_title), title));
        }

        if let Some(subtitle) = text(&self.subtitle) {
            lines.push(command("subtitle", None, subtitle));
        }

        if let Some(names) = list(&self.names) {
            let body = match list(&self.names_inst_index) {
                Some(indices) => names
                    .iter()
                    .zip(indices)
                    .map(|(name, index)| format!("{}\\inst{}", name, group(index)))
                    .collect::<Vec<_>>()
                    .join(" \\and "),
                None => names.join(" \\and "),
            };
            let short = list(&self.names_short).map(|short| short.join(", "));
            lines.push(command("author", short.as_deref(), &body));
        }

        if let Some(institutions) = list(&self.institutions) {
            let body = match list(&self.institution_index) {
                Some(indices) => institutions
                    .iter()
                    .zip(indices)
                    .map(|(institution, index)| format!("\\inst{}\n{}", group(index), institution))
                    .collect::<Vec<_>>()
                    .join("\n"),
                None => institutions.join(" \\and "),
            };
            let short = list(&self.institutions_short).map(|short| short.join(","));
            lines.push(command("institute", short.as_deref(), &body));
        }

        if let Some(meeting) = text(&self.meeting) {
            lines.push(command("date", text(&self.meeting_short), meeting));
        }

        if let Some(paths) = list(&self.logo_paths) {
            let mut logos = Vec::with_capacity(paths.len());
            for path in paths {
                let path = absolute_path(path)?;
                logos.push(format!(
                    "\\includegraphics[height={}]{}",
                    LOGO_HEIGHT,
                    group(path.display().to_string())
                ));
            }
            lines.push(command("logo", None, &logos.join("\n")));
        }

        Ok(lines.join("\n"))
    }
}

// ABOUTME: Markup formatting helpers for the beamert application
// ABOUTME: Produces grouping braces, environment markers and heading keywords

/// Wrap `text` in TeX grouping braces
pub fn group(text: impl AsRef<str>) -> String {
    format!("{{{}}}", text.as_ref())
}

/// Open a named environment, padded with blank lines on both sides
pub fn region_begin(name: &str) -> String {
    format!("\n\\begin{}\n", group(name))
}

/// Close a named environment
pub fn region_end(name: &str) -> String {
    format!("\n\\end{}\n", group(name))
}

/// Sectioning command for a heading level.
///
/// Levels outside 1..=3 fall back to `section`.
pub fn heading_keyword(level: i32) -> &'static str {
    match level {
        2 => "subsection",
        3 => "subsubsection",
        _ => "section",
    }
}

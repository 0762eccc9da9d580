// ABOUTME: Failure diagnostics for the beamert application
// ABOUTME: Scans external processor output for known error signatures and suggests causes

use std::fmt;

const MISSING_MATH: &str = "Missing $ inserted";
const UNDEFINED_CONTROL_SEQUENCE: &str = "Undefined control sequence";
const ILLEGAL_UNIT: &str = "Illegal unit of measure";

/// A best-effort guess at why the external processor failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hint {
    MissingMathDelimiter,
    UndefinedControlSequence { token: Option<String> },
    IllegalUnit,
    NoKnownCause,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::MissingMathDelimiter => write!(
                f,
                "Missing $ inserted: an unescaped special character (such as _ or ^) or missing math delimiters"
            ),
            Hint::UndefinedControlSequence { token: Some(token) } => write!(
                f,
                "Undefined control sequence: `{}` is likely the culprit",
                token
            ),
            Hint::UndefinedControlSequence { token: None } => {
                write!(f, "Undefined control sequence: check for misspelled commands")
            }
            Hint::IllegalUnit => write!(
                f,
                "Illegal unit of measure: check the size argument of \\includegraphics (e.g. width=0.5\\textwidth)"
            ),
            Hint::NoKnownCause => write!(f, "No known cause identified"),
        }
    }
}

/// Suggest causes for a failed run from the processor's standard output.
///
/// Each signature contributes at most one hint; when nothing matches the
/// result is `[Hint::NoKnownCause]`.
pub fn diagnose(output: &str) -> Vec<Hint> {
    let mut hints = Vec::new();

    if output.contains(MISSING_MATH) {
        hints.push(Hint::MissingMathDelimiter);
    }

    if output.contains(UNDEFINED_CONTROL_SEQUENCE) {
        hints.push(Hint::UndefinedControlSequence {
            token: undefined_token(output),
        });
    }

    if output.contains(ILLEGAL_UNIT) {
        hints.push(Hint::IllegalUnit);
    }

    if hints.is_empty() {
        hints.push(Hint::NoKnownCause);
    }
    hints
}

/// TeX stops reading right after the unknown command, so it is the last word
/// on the context line that follows the error message.
fn undefined_token(output: &str) -> Option<String> {
    let mut lines = output.lines();
    lines.find(|line| line.contains(UNDEFINED_CONTROL_SEQUENCE))?;
    lines
        .next()
        .and_then(|line| line.split_whitespace().last())
        .map(str::to_string)
}

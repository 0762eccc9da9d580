#![cfg(unix)]

use beamert::{
    render_document, BeamerError, CompileOptions, CompileReport, Compiler, Component,
    DocumentBoundary, EmptyFrame, Header, Hint, LinePrompt, OverwritePrompt, Section, Style,
    TitleMetadata, TitleSetting,
};
use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SUCCEEDING_PROCESSOR: &str = r#"
echo "$@" > "$(dirname "$0")/args.txt"
touch "${3%.tex}.pdf"
exit 0
"#;

const FAILING_PROCESSOR: &str = r#"
echo "$@" > "$(dirname "$0")/args.txt"
printf 'This is pdfTeX, Version 3.141592653\n! Undefined control sequence.\nl.12 \\foobar\n'
printf 'some warning\n' >&2
exit 1
"#;

const SILENT_FAILURE: &str = r#"
echo "nothing recognisable here"
exit 2
"#;

fn deck() -> Vec<Box<dyn Component>> {
    vec![
        Box::new(Header::new()),
        Box::new(Style),
        Box::new(DocumentBoundary::Begin),
        Box::new(Section::new("Intro")),
        Box::new(EmptyFrame),
        Box::new(DocumentBoundary::End),
    ]
}

/// Write a processor script and return the command that runs it
fn processor(dir: &Path, script: &str) -> String {
    let path = dir.join("processor.sh");
    fs::write(&path, script).expect("Failed to write processor script");
    format!("sh {}", path.display())
}

fn answering(answer: &str) -> LinePrompt<Cursor<Vec<u8>>, io::Sink> {
    LinePrompt::new(Cursor::new(answer.as_bytes().to_vec()), io::sink())
}

struct NeverAsked;

impl OverwritePrompt for NeverAsked {
    fn confirm_overwrite(&mut self, path: &Path) -> io::Result<bool> {
        panic!("Unexpected overwrite prompt for {:?}", path);
    }
}

fn compiler(command: String, force: bool, prompt: impl OverwritePrompt + 'static) -> Compiler {
    let options = CompileOptions::new()
        .force_overwrite(force)
        .verbose(true)
        .command(command);
    Compiler::new(options).with_prompt(prompt)
}

#[test]
fn test_compile_success_reports_artifact() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let document = temp_dir.path().join("deck.tex");
    let command = processor(temp_dir.path(), SUCCEEDING_PROCESSOR);

    let report = compiler(command, false, NeverAsked)
        .compile(&deck(), &document)
        .expect("Compile returned an error");

    assert_eq!(
        report,
        CompileReport::Compiled {
            document: document.clone(),
            artifact: temp_dir.path().join("deck.pdf"),
        }
    );
    assert!(temp_dir.path().join("deck.pdf").exists());

    let written = fs::read_to_string(&document).expect("Failed to read document");
    assert_eq!(written, render_document(&deck()).unwrap());

    let args = fs::read_to_string(temp_dir.path().join("args.txt")).unwrap();
    assert_eq!(
        args.trim(),
        format!(
            "-interaction=nonstopmode -output-directory={} {}",
            temp_dir.path().display(),
            document.display()
        )
    );
}

#[test]
fn test_declined_overwrite_leaves_file_untouched() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let document = temp_dir.path().join("deck.tex");
    fs::write(&document, "original contents").unwrap();
    let command = processor(temp_dir.path(), SUCCEEDING_PROCESSOR);

    let report = compiler(command, false, answering("n\n"))
        .compile(&deck(), &document)
        .expect("Compile returned an error");

    assert_eq!(
        report,
        CompileReport::WriteDeclined {
            document: document.clone()
        }
    );
    assert!(!report.is_success());
    assert_eq!(fs::read_to_string(&document).unwrap(), "original contents");
    assert!(!temp_dir.path().join("args.txt").exists());
    assert!(matches!(
        report.into_result(),
        Err(BeamerError::WriteConflict(path)) if path == document
    ));
}

#[test]
fn test_confirmed_overwrite_proceeds() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let document = temp_dir.path().join("deck.tex");
    fs::write(&document, "original contents").unwrap();
    let command = processor(temp_dir.path(), SUCCEEDING_PROCESSOR);

    let report = compiler(command, false, answering("Y\n"))
        .compile(&deck(), &document)
        .unwrap();

    assert!(report.is_success());
    assert_eq!(
        fs::read_to_string(&document).unwrap(),
        render_document(&deck()).unwrap()
    );
}

#[test]
fn test_forced_overwrite_skips_prompt() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let document = temp_dir.path().join("deck.tex");
    fs::write(&document, "original contents").unwrap();
    let command = processor(temp_dir.path(), SUCCEEDING_PROCESSOR);

    let report = compiler(command, true, NeverAsked)
        .compile(&deck(), &document)
        .unwrap();

    assert!(report.is_success());
    assert_ne!(fs::read_to_string(&document).unwrap(), "original contents");
    assert!(temp_dir.path().join("args.txt").exists());
}

#[test]
fn test_failed_processor_reports_hints() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let document = temp_dir.path().join("deck.tex");
    let command = processor(temp_dir.path(), FAILING_PROCESSOR);

    let report = compiler(command.clone(), false, NeverAsked)
        .compile(&deck(), &document)
        .unwrap();

    match report {
        CompileReport::ProcessFailed {
            document: failed,
            command: failed_command,
            exit_code,
            hints,
        } => {
            assert_eq!(failed, document);
            assert_eq!(failed_command, command);
            assert_eq!(exit_code, Some(1));
            assert_eq!(
                hints,
                vec![Hint::UndefinedControlSequence {
                    token: Some("\\foobar".to_string())
                }]
            );
        }
        other => panic!("Expected a process failure, got {:?}", other),
    }

    // The document stays behind for inspection
    assert!(document.exists());
    assert!(!temp_dir.path().join("deck.pdf").exists());
}

#[test]
fn test_failed_processor_without_known_cause() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let document = temp_dir.path().join("deck.tex");
    let command = processor(temp_dir.path(), SILENT_FAILURE);

    let report = compiler(command, false, NeverAsked)
        .compile(&deck(), &document)
        .unwrap();

    match report {
        CompileReport::ProcessFailed {
            exit_code, hints, ..
        } => {
            assert_eq!(exit_code, Some(2));
            assert_eq!(hints, vec![Hint::NoKnownCause]);
        }
        other => panic!("Expected a process failure, got {:?}", other),
    }
}

#[test]
fn test_missing_processor_is_reported_not_raised() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let document = temp_dir.path().join("deck.tex");

    let report = compiler(
        "beamert-no-such-processor".to_string(),
        false,
        NeverAsked,
    )
    .compile(&deck(), &document)
    .expect("Missing processor should not be an error");

    match &report {
        CompileReport::Unexpected { message, .. } => assert!(!message.is_empty()),
        other => panic!("Expected an unexpected failure, got {:?}", other),
    }
    assert!(document.exists());
    assert!(matches!(
        report.into_result(),
        Err(BeamerError::UnexpectedError(_))
    ));
}

#[test]
fn test_blank_command_is_reported() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let document = temp_dir.path().join("deck.tex");

    let report = compiler("  ".to_string(), false, NeverAsked)
        .compile(&deck(), &document)
        .unwrap();

    assert!(matches!(report, CompileReport::Unexpected { .. }));
}

#[test]
fn test_validation_error_aborts_before_writing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let document = temp_dir.path().join("deck.tex");
    let command = processor(temp_dir.path(), SUCCEEDING_PROCESSOR);

    let metadata = TitleMetadata {
        names: Some(vec!["Black Zombie".into(), "Lucky Rogue".into()]),
        names_inst_index: Some(vec!["1".into()]),
        ..Default::default()
    };
    let components: Vec<Box<dyn Component>> = vec![
        Box::new(Header::new()),
        Box::new(TitleSetting::new(metadata)),
    ];

    let result = compiler(command, false, NeverAsked).compile(&components, &document);

    assert!(matches!(
        result,
        Err(BeamerError::ValidationError {
            left: "names",
            right: "names_inst_index",
            ..
        })
    ));
    assert!(!document.exists());
}

#[test]
fn test_creates_missing_parent_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let document: PathBuf = temp_dir.path().join("build").join("talk").join("deck.tex");
    let command = processor(temp_dir.path(), SUCCEEDING_PROCESSOR);

    let report = compiler(command, false, NeverAsked)
        .compile(&deck(), &document)
        .unwrap();

    assert!(report.is_success());
    assert!(document.exists());
    let args = fs::read_to_string(temp_dir.path().join("args.txt")).unwrap();
    assert!(args.contains(&format!(
        "-output-directory={}",
        temp_dir.path().join("build").join("talk").display()
    )));
}

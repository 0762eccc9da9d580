// ABOUTME: Main entry point for the beamert program.
// ABOUTME: Provides CLI interface to build a named deck template and compile it.

use anyhow::Context;
use beamert::{templates, BeamerError, CompileOptions, Compiler};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The path to the output tex file
    #[arg(default_value = "example.tex")]
    output: PathBuf,

    /// The template that contains the components to compile
    #[arg(short, long, required_unless_present = "list")]
    module: Option<String>,

    /// Show verbose print-outs
    #[arg(short, long)]
    verbose: bool,

    /// Force to update the tex file
    #[arg(short, long)]
    force: bool,

    /// External processor, optionally with extra arguments
    #[arg(short, long, default_value = beamert::config::DEFAULT_COMMAND)]
    command: String,

    /// List the available templates and exit
    #[arg(long)]
    list: bool,
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    if cli.list {
        for name in templates::names() {
            println!("{}", name);
        }
        return Ok(true);
    }

    let module = cli.module.unwrap_or_default();
    let components = match templates::build(&module) {
        Ok(components) => components,
        Err(BeamerError::UnknownTemplate(name)) => {
            println!(
                "No module named \"{}\", exit.. (available: {})",
                name,
                templates::names().join(", ")
            );
            return Ok(false);
        }
        Err(e) => return Err(e).context("Failed to build components"),
    };

    let options = CompileOptions::new()
        .force_overwrite(cli.force)
        .verbose(cli.verbose)
        .command(cli.command);
    let mut compiler = Compiler::new(options);
    let report = compiler
        .compile(&components, &cli.output)
        .with_context(|| format!("Failed to compile {:?}", cli.output))?;

    Ok(report.is_success())
}

fn main() {
    beamert::logging::init();

    match run(Cli::parse()) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use clap::Parser;
use esotape::builtin_languages;
use esotape::find_language;
use esotape::Program;
use esotape::RuntimeError;
use esotape::StepResult;
use esotape::TranslationError;
use esotape::HELLO_WORLD;

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Translation error: {0}")]
    TranslationError(#[from] TranslationError),
    #[error("Execution error: {0}")]
    ExecutionError(#[from] RuntimeError),
    #[error("Unknown language: {0} (try --list)")]
    UnknownLanguage(String),
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Source file to run. When omitted, the bundled hello world is
    /// transcribed into the selected dialect and run.
    input_file: Option<PathBuf>,

    /// Dialect to interpret the source as
    #[arg(short, long, default_value = "brainfuck")]
    language: String,

    /// List the available dialects and exit
    #[arg(long, default_value_t = false)]
    list: bool,

    /// Dump each executed operator
    #[arg(long, default_value_t = false)]
    trace: bool,
}

fn run(program: &Program, trace: bool) -> Result<(), RuntimeError> {
    program.run_with_callback(
        &mut std::io::stdin().lock(),
        &mut std::io::stdout().lock(),
        &mut |cursor, op| {
            if trace {
                dbg!((cursor, op));
            }
            StepResult::Continue
        },
    )
}

fn main() -> Result<(), ProgramError> {
    let args = Args::parse();

    let languages = builtin_languages();
    if args.list {
        for language in &languages {
            println!("{}", language.name);
        }
        return Ok(());
    }

    let language = find_language(&languages, &args.language)
        .ok_or_else(|| ProgramError::UnknownLanguage(args.language.clone()))?;

    let source = match args.input_file {
        Some(path) => std::fs::read_to_string(path)?,
        // The command tables cover all of the bundled program, so the
        // transcription cannot come back empty-handed.
        None => language.transcribe(HELLO_WORLD).unwrap_or_default(),
    };

    let program = language.translate(&source)?;
    run(&program, args.trace)?;

    Ok(())
}

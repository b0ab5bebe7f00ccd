//! # esotape - An interpreter for the Brainfuck family of esoteric languages
//!
//! One translation + execution engine, many dialects: a dialect is just a
//! command table mapping source tokens to operators, so Ook, Pewlang,
//! MorseFuck and friends all share the same tape machine.
//!
//! **NOTE! This is a command line program. This library does NOT provide a
//! stable API, or even an API meant to be consumed by external code at all.**
//!
//! You have been warned.

// Re-export some symbols.
pub use config::BoundaryPolicy;
pub use config::Config;
pub use config::EofPolicy;
pub use config::OutputEncoding;
pub use config::TapeLength;
pub use languages::builtin_languages;
pub use languages::find_language;
pub use languages::HELLO_WORLD;
pub use operator::Op;
pub use program::Program;
pub use program::StepResult;
pub use runtime::RuntimeError;
pub use translate::Language;
pub use translate::Token;
pub use translate::TranslationError;

pub mod config;
pub mod languages;
mod operator;
mod program;
mod runtime;
pub mod tape;
mod translate;

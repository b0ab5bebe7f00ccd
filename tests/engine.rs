//! End-to-end tests of the translation + execution engine.

use std::collections::VecDeque;

use esotape::builtin_languages;
use esotape::find_language;
use esotape::BoundaryPolicy;
use esotape::Config;
use esotape::EofPolicy;
use esotape::Language;
use esotape::OutputEncoding;
use esotape::RuntimeError;
use esotape::TapeLength;

fn brainfuck() -> Language {
    let languages = builtin_languages();
    find_language(&languages, "brainfuck").unwrap().clone()
}

fn run(language: &Language, source: &str, input: &[u8]) -> (Result<(), RuntimeError>, Vec<u8>) {
    let program = language.translate(source).unwrap();
    let mut input: VecDeque<u8> = input.iter().copied().collect();
    let mut output: Vec<u8> = Vec::new();
    let result = program.run(&mut input, &mut output);
    (result, output)
}

#[test]
fn test_prints_a() {
    // 8 * 8 + 1 = 65
    let (result, output) = run(&brainfuck(), "++++++++[>++++++++<-]>+.", b"");
    result.unwrap();
    assert_eq!(output, b"A");
}

#[test]
fn test_echo() {
    let (result, output) = run(&brainfuck(), ",.", b"Z");
    result.unwrap();
    assert_eq!(output, b"Z");
}

#[test]
fn test_empty_source() {
    let bf = brainfuck();
    let program = bf.translate("").unwrap();
    assert!(program.ops().is_empty());
    let (result, output) = run(&bf, "", b"");
    result.unwrap();
    assert_eq!(output, b"");
}

#[test]
fn test_pointer_wrap_is_periodic() {
    // On a 5-cell ring, five steps right land back on the origin.
    let mut ring = brainfuck();
    ring.config = Config {
        tape: TapeLength::Bounded(5),
        encoding: OutputEncoding::Bytes,
        ..Config::default()
    };
    let (result, output) = run(&ring, "+>>>>>.", b"");
    result.unwrap();
    assert_eq!(output, vec![1]);
}

#[test]
fn test_bounded_tape_errors() {
    let mut strict = brainfuck();
    strict.config = Config {
        tape: TapeLength::Bounded(4),
        boundary: BoundaryPolicy::Fail,
        ..Config::default()
    };
    let (result, _) = run(&strict, "<", b"");
    assert_eq!(result, Err(RuntimeError::OutOfBounds(-1)));
    let (result, _) = run(&strict, ">>>>", b"");
    assert_eq!(result, Err(RuntimeError::OutOfBounds(4)));
    // Staying inside the bounds is fine.
    let (result, _) = run(&strict, ">>><<<", b"");
    result.unwrap();
}

#[test]
fn test_input_exhausted() {
    let mut strict = brainfuck();
    strict.config = Config {
        on_eof: EofPolicy::Fail,
        ..Config::default()
    };
    // The first read succeeds, the second hits the failing EOF policy.
    let (result, _) = run(&strict, ",,", b"Z");
    assert_eq!(result, Err(RuntimeError::InputExhausted));
}

#[test]
fn test_eof_leaves_cell_unchanged() {
    let mut lenient = brainfuck();
    lenient.config = Config {
        on_eof: EofPolicy::Unchanged,
        ..Config::default()
    };
    let (result, output) = run(&lenient, "+++++++++[>+++++++++<-]>.,.", b"");
    result.unwrap();
    // 81 = 'Q', printed twice since the dry read is a no-op.
    assert_eq!(output, b"QQ");
}

#[test]
fn test_unicode_output() {
    // 16-bit cells can hold code points beyond Latin-1; U+2603 SNOWMAN.
    let mut wide = brainfuck();
    wide.config = Config {
        cell_bits: 16,
        ..Config::default()
    };
    let source = format!("{}.", "+".repeat(0x2603));
    let (result, output) = run(&wide, &source, b"");
    result.unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "\u{2603}");
}

#[test]
fn test_narrow_cells_wrap() {
    // With 4-bit cells, 20 increments leave 4 behind.
    let mut narrow = brainfuck();
    narrow.config = Config {
        cell_bits: 4,
        encoding: OutputEncoding::Bytes,
        ..Config::default()
    };
    let (result, output) = run(&narrow, &format!("{}.", "+".repeat(20)), b"");
    result.unwrap();
    assert_eq!(output, vec![4]);
}

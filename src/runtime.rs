//! Mutable execution state for one run.

use std::io::Read;
use std::io::Write;

use thiserror::Error;

use crate::config::BoundaryPolicy;
use crate::config::Config;
use crate::config::EofPolicy;
use crate::config::OutputEncoding;
use crate::config::TapeLength;
use crate::tape::Tape;

/// Error type for execution
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The pointer left the tape under a failing boundary policy.
    #[error("Tape pointer out of range (cell {0})")]
    OutOfBounds(i64),
    /// The input stream ran dry under a failing end-of-input policy.
    #[error("Input exhausted")]
    InputExhausted,
    /// A cell value that is not a Unicode scalar reached an Output
    /// operator under the Unicode encoding.
    #[error("Cell value {0} is not a valid Unicode scalar")]
    UnencodableOutput(u32),
    /// IO error during program execution.
    #[error("Unexpected IO Error: {0}")]
    Io(#[from] std::io::Error),
    /// Aborted by callback.
    #[error("Callback aborted execution")]
    Aborted,
}

impl PartialEq for RuntimeError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::OutOfBounds(l), Self::OutOfBounds(r)) => l == r,
            (Self::UnencodableOutput(l), Self::UnencodableOutput(r)) => l == r,
            (Self::Io(l), Self::Io(r)) => l.kind() == r.kind(),
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

/// Everything that changes while a program executes: the tape, the
/// pointer into it, the cursor into the operator sequence, and the two
/// I/O channels. Created fresh for each run and discarded afterwards.
///
/// Invariant: between steps the pointer always satisfies the configured
/// boundary policy, because [`Runtime::move_right`] and
/// [`Runtime::move_left`] apply the policy before committing the move.
#[derive(Debug)]
pub struct Runtime<'io, R: Read, W: Write> {
    pub(crate) tape: Tape,
    pub(crate) pointer: usize,
    pub(crate) cursor: usize,
    input: &'io mut R,
    output: &'io mut W,
}

impl<'io, R: Read, W: Write> Runtime<'io, R, W> {
    pub(crate) fn new(input: &'io mut R, output: &'io mut W) -> Self {
        Self {
            tape: Tape::new(),
            pointer: 0,
            cursor: 0,
            input,
            output,
        }
    }

    /// Value of the cell at the pointer.
    pub fn current(&self) -> u32 {
        self.tape.get(self.pointer)
    }

    pub(crate) fn set_current(&mut self, value: u32) {
        self.tape.set(self.pointer, value);
    }

    /// Current cell index.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub(crate) fn move_right(&mut self, config: &Config) -> Result<(), RuntimeError> {
        match config.tape {
            TapeLength::Bounded(len) if self.pointer + 1 >= len => match config.boundary {
                BoundaryPolicy::Wrap => self.pointer = 0,
                BoundaryPolicy::Fail => return Err(RuntimeError::OutOfBounds(len as i64)),
            },
            _ => self.pointer += 1,
        }
        Ok(())
    }

    pub(crate) fn move_left(&mut self, config: &Config) -> Result<(), RuntimeError> {
        if self.pointer == 0 {
            match (config.tape, config.boundary) {
                (TapeLength::Bounded(len), BoundaryPolicy::Wrap) => self.pointer = len - 1,
                _ => return Err(RuntimeError::OutOfBounds(-1)),
            }
        } else {
            self.pointer -= 1;
        }
        Ok(())
    }

    /// Read one byte from the input channel into the current cell,
    /// applying the end-of-input policy when the channel is dry.
    pub(crate) fn read_into_current(&mut self, config: &Config) -> Result<(), RuntimeError> {
        // Pending output may need to reach the user before we block on
        // input (think prompts without a trailing newline).
        self.output.flush()?;
        let mut buf: [u8; 1] = [0; 1];
        if self.input.read(&mut buf)? == 0 {
            match config.on_eof {
                EofPolicy::Unchanged => (),
                EofPolicy::SetZero => self.set_current(0),
                EofPolicy::Fail => return Err(RuntimeError::InputExhausted),
            }
        } else {
            self.set_current(config.wrap(buf[0] as i64));
        }
        Ok(())
    }

    /// Write the current cell to the output channel under the configured
    /// encoding.
    pub(crate) fn write_current(&mut self, config: &Config) -> Result<(), RuntimeError> {
        let value = self.current();
        match config.encoding {
            OutputEncoding::Bytes => self.output.write_all(&[value as u8])?,
            OutputEncoding::Unicode => {
                let ch =
                    char::from_u32(value).ok_or(RuntimeError::UnencodableOutput(value))?;
                let mut buf = [0u8; 4];
                self.output.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            }
        }
        Ok(())
    }

    /// Write a fixed message, used by extension operators.
    pub(crate) fn write_line(&mut self, message: &str) -> Result<(), RuntimeError> {
        self.output.write_all(message.as_bytes())?;
        self.output.write_all(b"\n")?;
        Ok(())
    }
}

//! The executable units a program is made of.

use std::io::Read;
use std::io::Write;

use crate::config::Config;
use crate::runtime::Runtime;
use crate::runtime::RuntimeError;

/// One executable step of a translated program.
///
/// Immutable once constructed. The loop variants carry the index of their
/// matching counterpart, resolved once at translation time, so execution
/// never scans for brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Move the pointer one cell to the right.
    Right,
    /// Move the pointer one cell to the left.
    Left,
    /// Increment the cell at the pointer, wrapping at the cell width.
    Add,
    /// Decrement the cell at the pointer, wrapping at the cell width.
    Subtract,
    /// Write the cell at the pointer to the output channel.
    Output,
    /// Read one unit from the input channel into the cell at the pointer.
    Input,
    /// Jump to `target` (the matching [`Op::EndLoop`]) if the cell at the
    /// pointer is zero.
    BeginLoop { target: usize },
    /// Jump to `target` (the matching [`Op::BeginLoop`]) if the cell at
    /// the pointer is nonzero.
    EndLoop { target: usize },
    /// Write a fixed message to the output channel. No Brainfuck
    /// analogue; used by the joke commands of the Blub and Ook dialects.
    Say(&'static str),
}

impl Op {
    /// Apply one step of execution to the runtime.
    ///
    /// May mutate the pointer, the cell at the pointer, the instruction
    /// cursor or the I/O channels, never the config. Loop variants move
    /// the cursor themselves; for everything else the run loop advances
    /// it afterwards.
    pub(crate) fn apply<R: Read, W: Write>(
        &self,
        rt: &mut Runtime<'_, R, W>,
        config: &Config,
    ) -> Result<(), RuntimeError> {
        match *self {
            Op::Right => rt.move_right(config)?,
            Op::Left => rt.move_left(config)?,
            Op::Add => {
                let value = config.wrap(rt.current() as i64 + 1);
                rt.set_current(value);
            }
            Op::Subtract => {
                let value = config.wrap(rt.current() as i64 - 1);
                rt.set_current(value);
            }
            Op::Output => rt.write_current(config)?,
            Op::Input => rt.read_into_current(config)?,
            Op::BeginLoop { target } => {
                if rt.current() == 0 {
                    rt.cursor = target;
                }
            }
            Op::EndLoop { target } => {
                if rt.current() != 0 {
                    rt.cursor = target;
                }
            }
            Op::Say(message) => rt.write_line(message)?,
        }
        Ok(())
    }
}

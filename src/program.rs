//! A translated program and its run loop.

use std::io::Read;
use std::io::Write;

use crate::config::Config;
use crate::operator::Op;
use crate::runtime::Runtime;
use crate::runtime::RuntimeError;

/// Reply type for the per-step callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Continue execution.
    Continue,
    /// Abort execution with [`RuntimeError::Aborted`].
    Abort,
}

/// An ordered sequence of resolved operators bound to one configuration.
///
/// Invariant, established at translation time: every `BeginLoop` target
/// is the index of its matching `EndLoop` and vice versa. The run loop
/// relies on this and never re-validates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    config: Config,
    ops: Vec<Op>,
}

impl Program {
    pub(crate) fn new(config: Config, ops: Vec<Op>) -> Self {
        Self { config, ops }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Interpret the program to completion.
    ///
    /// Output is written to `output` in execution order; `Input`
    /// operators block on `input`. The first runtime error aborts the
    /// run and is returned as-is.
    pub fn run(
        &self,
        input: &mut impl Read,
        output: &mut impl Write,
    ) -> Result<(), RuntimeError> {
        self.run_with_callback(input, output, &mut |_, _| StepResult::Continue)
    }

    /// Like [`Program::run`], but invokes `callback` with the cursor and
    /// the operator about to execute before every step. Returning
    /// [`StepResult::Abort`] stops the run; useful for tracing and for
    /// bounding the step count of programs that may not terminate.
    pub fn run_with_callback<F>(
        &self,
        input: &mut impl Read,
        output: &mut impl Write,
        callback: &mut F,
    ) -> Result<(), RuntimeError>
    where
        F: FnMut(usize, &Op) -> StepResult,
    {
        let mut rt = Runtime::new(input, output);
        while rt.cursor < self.ops.len() {
            let op = &self.ops[rt.cursor];
            match callback(rt.cursor, op) {
                StepResult::Continue => (),
                StepResult::Abort => return Err(RuntimeError::Aborted),
            }
            let before = rt.cursor;
            op.apply(&mut rt, &self.config)?;
            if rt.cursor == before {
                rt.cursor += 1;
            }
        }
        Ok(())
    }
}

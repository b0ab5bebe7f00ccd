//! Run parameters for the tape machine.
//!
//! Different Brainfuck dialects disagree on what happens at the edges of
//! the tape and at end of input, so all of that is explicit configuration
//! here rather than behaviour baked into the interpreter.

/// How long the tape is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapeLength {
    /// A fixed number of cells.
    Bounded(usize),
    /// The tape grows to the right on demand. Moving left of cell zero is
    /// always an error on an unbounded tape.
    Unbounded,
}

/// What happens when the pointer moves past the edge of a bounded tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// The tape is a ring: walking off one end lands on the other.
    Wrap,
    /// Walking off either end aborts the run.
    Fail,
}

/// What happens to the current cell when the input stream runs dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EofPolicy {
    /// Leave the cell as it was.
    Unchanged,
    /// Store zero in the cell.
    SetZero,
    /// Abort the run.
    Fail,
}

/// How a cell value is written to the output channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputEncoding {
    /// Write the low byte of the cell as-is.
    Bytes,
    /// Interpret the cell as a Unicode scalar value and write it UTF-8
    /// encoded. Fails on values that are not valid scalars (only
    /// reachable with cell widths above 16 bits).
    Unicode,
}

/// All the run parameters. Immutable once handed to a translation; shared
/// read-only by the runtime and every operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cell width in bits, at most 31. Cell values live in
    /// `[0, 2^cell_bits)` and arithmetic wraps silently.
    pub cell_bits: u32,
    /// Tape length.
    pub tape: TapeLength,
    /// Boundary behaviour for bounded tapes.
    pub boundary: BoundaryPolicy,
    /// End-of-input behaviour.
    pub on_eof: EofPolicy,
    /// Output encoding.
    pub encoding: OutputEncoding,
}

impl Config {
    /// The wraparound modulus, `2^cell_bits`.
    pub fn modulus(&self) -> i64 {
        1_i64 << self.cell_bits
    }

    /// The largest representable cell value.
    pub fn max_value(&self) -> u32 {
        (self.modulus() - 1) as u32
    }

    /// Reduce an arbitrary integer into cell range.
    pub fn wrap(&self, value: i64) -> u32 {
        value.rem_euclid(self.modulus()) as u32
    }
}

impl Default for Config {
    /// The classic machine: 30 000 8-bit cells on a ring.
    fn default() -> Self {
        Self {
            cell_bits: 8,
            tape: TapeLength::Bounded(30_000),
            boundary: BoundaryPolicy::Wrap,
            on_eof: EofPolicy::SetZero,
            encoding: OutputEncoding::Unicode,
        }
    }
}

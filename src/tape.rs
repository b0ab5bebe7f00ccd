//! The cell store backing a run.

/// A growable tape of cells.
///
/// Cells that have never been written read as zero. The tape itself does
/// not enforce any length limit; keeping the pointer within range is the
/// runtime's job, so by the time an index reaches the tape it is known to
/// be valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tape {
    data: Vec<u32>,
}

impl Tape {
    pub fn new() -> Self {
        Self { data: vec![] }
    }

    /// Number of cells written so far. Everything at or above this index
    /// is zero.
    pub fn written_len(&self) -> usize {
        self.data.len()
    }

    pub fn get(&self, index: usize) -> u32 {
        match self.data.get(index) {
            Some(value) => *value,
            None => 0,
        }
    }

    pub fn set(&mut self, index: usize, value: u32) {
        if self.data.len() < index + 1 {
            self.data.resize(index + 1, 0);
        }
        self.data[index] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::Tape;

    #[test]
    fn test_tape() {
        let mut tape = Tape::new();
        assert_eq!(tape.get(0), 0);
        assert_eq!(tape.get(29_999), 0);
        tape.set(2, 5);
        assert_eq!(tape.get(2), 5);
        assert_eq!(tape.written_len(), 3);
        tape.set(8, 200);
        assert_eq!(tape.get(8), 200);
        assert_eq!(tape.get(5), 0);
        tape.set(2, 0);
        assert_eq!(tape.get(2), 0);
    }
}

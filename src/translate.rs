//! Translation of dialect source text into a runnable [`Program`].

use thiserror::Error;

use crate::config::Config;
use crate::operator::Op;
use crate::program::Program;

/// What a command table entry stands for. This is the unresolved form of
/// [`Op`]: loop tokens have no jump target yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Right,
    Left,
    Add,
    Subtract,
    Output,
    Input,
    BeginLoop,
    EndLoop,
    /// Extension: emit a fixed message.
    Say(&'static str),
}

/// Errors during translation.
///
/// Unbalanced loop commands are the only way a translation can fail;
/// unrecognized characters are comments, never errors.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TranslationError {
    /// A loop was opened and never closed.
    #[error("Unmatched start of loop in source")]
    UnmatchedLoopStart,
    /// A loop was closed that was never opened.
    #[error("Unmatched end of loop in source")]
    UnmatchedLoopEnd,
}

/// One dialect of the Brainfuck family.
///
/// A dialect is nothing but a command table (ordered, earlier entries win
/// when several tokens could match) and a default machine configuration;
/// the translation algorithm itself is shared by every dialect. Adding a
/// dialect means adding a table, see [`crate::languages`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Display name, also used for registry lookup.
    pub name: &'static str,
    /// The command table: recognized source tokens (one or more
    /// characters) and what they stand for. Order is match priority,
    /// which is how dialects whose commands contain each other (e.g.
    /// ZZZ's `zz` vs `z`) stay unambiguous.
    pub commands: Vec<(&'static str, Token)>,
    /// Machine parameters for programs in this dialect.
    pub config: Config,
}

impl Language {
    /// Translate dialect source text into a runnable program.
    ///
    /// Scans left to right, emitting one operator per recognized token
    /// and skipping everything else as commentary. Loop jump targets are
    /// resolved in the same pass with a stack of pending loop starts;
    /// translation is all-or-nothing, so a returned program always has
    /// fully matched loops.
    pub fn translate(&self, source: &str) -> Result<Program, TranslationError> {
        let bytes = source.as_bytes();
        let mut ops: Vec<Op> = Vec::new();
        // Indices of BeginLoop ops still waiting for their EndLoop.
        let mut pending: Vec<usize> = Vec::new();
        let mut cursor = 0;
        'scan: while cursor < bytes.len() {
            for &(token, meaning) in &self.commands {
                if !bytes[cursor..].starts_with(token.as_bytes()) {
                    continue;
                }
                let op = match meaning {
                    Token::Right => Op::Right,
                    Token::Left => Op::Left,
                    Token::Add => Op::Add,
                    Token::Subtract => Op::Subtract,
                    Token::Output => Op::Output,
                    Token::Input => Op::Input,
                    Token::Say(message) => Op::Say(message),
                    Token::BeginLoop => {
                        pending.push(ops.len());
                        // Target is patched when the matching end shows up.
                        Op::BeginLoop { target: 0 }
                    }
                    Token::EndLoop => {
                        let start = pending
                            .pop()
                            .ok_or(TranslationError::UnmatchedLoopEnd)?;
                        let end = ops.len();
                        match ops[start] {
                            Op::BeginLoop { ref mut target } => *target = end,
                            _ => unreachable!(),
                        }
                        Op::EndLoop { target: start }
                    }
                };
                ops.push(op);
                cursor += token.len();
                continue 'scan;
            }
            cursor += 1;
        }
        if !pending.is_empty() {
            return Err(TranslationError::UnmatchedLoopStart);
        }
        Ok(Program::new(self.config.clone(), ops))
    }

    /// Render canonical Brainfuck text in this dialect, by inverse table
    /// lookup. Tokens are joined with spaces, which every dialect treats
    /// as commentary. Returns `None` if the table lacks one of the eight
    /// canonical commands (none of the built-in dialects do).
    pub fn transcribe(&self, brainfuck_source: &str) -> Option<String> {
        let mut tokens: Vec<&str> = Vec::new();
        for ch in brainfuck_source.chars() {
            let meaning = match ch {
                '>' => Token::Right,
                '<' => Token::Left,
                '+' => Token::Add,
                '-' => Token::Subtract,
                '.' => Token::Output,
                ',' => Token::Input,
                '[' => Token::BeginLoop,
                ']' => Token::EndLoop,
                _ => continue,
            };
            let &(token, _) = self.commands.iter().find(|(_, m)| *m == meaning)?;
            tokens.push(token);
        }
        Some(tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::Token;
    use super::TranslationError;
    use crate::languages::builtin_languages;
    use crate::operator::Op;
    use crate::translate::Language;

    fn dialect(name: &str) -> Language {
        builtin_languages()
            .into_iter()
            .find(|l| l.name == name)
            .unwrap()
    }

    #[test]
    fn simple_translate() {
        let bf = dialect("Brainfuck");
        bf.translate("++>->,>.").unwrap();
        bf.translate("++>->,>.>[-]").unwrap();
        bf.translate("++>->,>.>[-[+>]]").unwrap();

        assert_eq!(
            bf.translate("++>->,>.>[-]]"),
            Err(TranslationError::UnmatchedLoopEnd)
        );
        assert_eq!(
            bf.translate("++>->,>.>[-]["),
            Err(TranslationError::UnmatchedLoopStart)
        );
        assert_eq!(bf.translate("]"), Err(TranslationError::UnmatchedLoopEnd));
        assert_eq!(bf.translate("["), Err(TranslationError::UnmatchedLoopStart));
    }

    #[test]
    fn test_jump_targets() {
        let program = dialect("Brainfuck").translate("+[>[-]<-]").unwrap();
        assert_eq!(
            program.ops(),
            &[
                Op::Add,
                Op::BeginLoop { target: 8 },
                Op::Right,
                Op::BeginLoop { target: 5 },
                Op::Subtract,
                Op::EndLoop { target: 3 },
                Op::Left,
                Op::Subtract,
                Op::EndLoop { target: 1 },
            ]
        );
    }

    #[test]
    fn test_comments_dropped() {
        let program = dialect("Brainfuck")
            .translate("inc + and dec - and the rest is comments\n")
            .unwrap();
        assert_eq!(program.ops(), &[Op::Add, Op::Subtract]);
    }

    #[test]
    fn test_multi_character_tokens() {
        let program = dialect("Ook")
            .translate("Ook. Ook. Ook! Ook. Ook? Ook?")
            .unwrap();
        assert_eq!(
            program.ops(),
            &[
                Op::Add,
                Op::Output,
                Op::Say("*Banana transfer takes place* - \"Ook!\""),
            ]
        );
    }

    #[test]
    fn test_match_priority() {
        // In ZZZ, `zzz` must win over `zz` and `z`, and `-zz` over `-z`.
        let program = dialect("ZZZ").translate("zzz zz -zz z -z").unwrap();
        assert_eq!(
            program.ops(),
            &[Op::Output, Op::Right, Op::Left, Op::Add, Op::Subtract]
        );
    }

    #[test]
    fn test_transcribe_roundtrip() {
        let morse = dialect("MorseFuck");
        let transcribed = morse.transcribe("+[>+<-].").unwrap();
        assert_eq!(transcribed, "..- --- .-- ..- --. -.. ... -.-");
        let program = morse.translate(&transcribed).unwrap();
        let reference = dialect("Brainfuck").translate("+[>+<-].").unwrap();
        assert_eq!(program.ops(), reference.ops());
    }

    #[test]
    fn test_say_token_equality() {
        // Inverse lookup must distinguish Say payloads from core tokens.
        assert_ne!(Token::Say("x"), Token::Output);
        assert_eq!(Token::Say("x"), Token::Say("x"));
    }
}

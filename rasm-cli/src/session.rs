//! Replay of the keyboard host loop
//!
//! The engine is pure; the keyboard host owns the buffer and drives it one
//! key at a time. This module reproduces that loop over an owned string so
//! the per-keystroke behavior can be exercised from the command line: each
//! committed character runs the full pipeline over the buffer, the dot key
//! consults the variant map (two-codepoint expansions first) and falls
//! back to a literal ".", and delete never removes the seeded leading
//! space the keyboard keeps in empty fields so that space-anchored rules
//! can fire on the first word.

use rasm_core::Normalizer;

/// A single key event, as the host delivers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Commit a character and run the pipeline
    Char(char),
    /// The dotted-variant cycle trigger
    Dot,
    /// Commit a space verbatim
    Space,
    /// Commit a newline verbatim
    Enter,
    /// Remove the trailing codepoint
    Delete,
}

impl Key {
    /// Script notation: `.` is the dot trigger, `<` deletes, space and
    /// newline commit verbatim, anything else is a plain character.
    pub fn from_script_char(c: char) -> Key {
        match c {
            '.' => Key::Dot,
            '<' => Key::Delete,
            ' ' => Key::Space,
            '\n' => Key::Enter,
            _ => Key::Char(c),
        }
    }
}

/// An in-memory typing session against a [`Normalizer`].
#[derive(Debug)]
pub struct KeySession {
    engine: Normalizer,
    buffer: String,
}

impl KeySession {
    /// Start a session over an empty field.
    ///
    /// The buffer is seeded with a single space, as the keyboard does when
    /// it attaches to an empty input.
    pub fn new(engine: Normalizer) -> Self {
        Self {
            engine,
            buffer: " ".to_string(),
        }
    }

    /// The current buffer contents.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Deliver one key event.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Char(c) => self.commit_char(c),
            Key::Dot => self.press_dot(),
            Key::Space => self.buffer.push(' '),
            Key::Enter => self.buffer.push('\n'),
            Key::Delete => self.press_delete(),
        }
    }

    /// Replay a whole script (see [`Key::from_script_char`]).
    pub fn replay(&mut self, script: &str) {
        for c in script.chars() {
            self.press(Key::from_script_char(c));
        }
    }

    fn commit_char(&mut self, c: char) {
        self.buffer.push(c);
        let converted = self.engine.convert(&self.buffer);
        if converted != self.buffer {
            self.buffer = converted;
        }
    }

    fn press_dot(&mut self) {
        let tail: Vec<char> = {
            let mut chars: Vec<char> = self.buffer.chars().collect();
            let keep = chars.len().saturating_sub(2);
            chars.split_off(keep)
        };

        // Two-codepoint expansions win over single-codepoint cycling.
        if tail.len() == 2 {
            let pair: String = tail.iter().collect();
            if let Some(expansion) = self.engine.next_dot_variant_seq(&pair) {
                self.pop_codepoints(2);
                self.buffer.push_str(expansion);
                return;
            }
        }

        if let Some(&last) = tail.last() {
            if let Some(variant) = self.engine.next_dot_variant(last) {
                self.pop_codepoints(1);
                self.buffer.push_str(variant);
                return;
            }
        }

        // Absent lookup: the dot key types a dot.
        self.buffer.push('.');
    }

    fn press_delete(&mut self) {
        if self.buffer == " " {
            return;
        }
        self.buffer.pop();
        if self.buffer.is_empty() {
            self.buffer.push(' ');
        }
    }

    fn pop_codepoints(&mut self, n: usize) {
        for _ in 0..n {
            self.buffer.pop();
        }
    }
}

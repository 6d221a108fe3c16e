//! The state every brush reads and advances: options, pointer, anchor, text cursor.

use crate::draw::{FontDescriptor, Point};
use crate::input::options::Options;

/// Phrase laid out letter by letter in text mode.
pub const DEFAULT_PHRASE: &str =
    "My mother told me, someday I will buy, galleys with good oars, sail to distant shores.";

/// Smallest glyph size in text mode, reached when the drag barely moves.
pub const DEFAULT_MIN_FONT_SIZE: f64 = 5.0;

/// Latest pointer position and whether the drawing button is held.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub is_down: bool,
}

impl PointerState {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Text-mode progress through the phrase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextCursor {
    /// Font size used for a zero-length drag
    pub min_font_size: f64,
    /// Index of the next letter to place; always within the phrase
    pub letter_index: usize,
}

/// Everything a brush needs, owned in one place and passed by reference.
#[derive(Debug, Clone)]
pub struct SketchState {
    pub options: Options,
    pub pointer: PointerState,
    /// Start of the current segment: set on press, advanced by the brushes
    pub anchor: Point,
    pub cursor: TextCursor,
    /// Font for text-mode glyphs
    pub font: FontDescriptor,
    phrase: Vec<char>,
}

impl Default for SketchState {
    fn default() -> Self {
        Self::new(
            Options::default(),
            DEFAULT_PHRASE,
            DEFAULT_MIN_FONT_SIZE,
            FontDescriptor::default(),
        )
    }
}

impl SketchState {
    /// Creates sketch state with the pointer up at the origin.
    ///
    /// An empty phrase is replaced by [`DEFAULT_PHRASE`] so text mode always
    /// has a letter to place.
    pub fn new(options: Options, phrase: &str, min_font_size: f64, font: FontDescriptor) -> Self {
        let phrase: Vec<char> = if phrase.is_empty() {
            DEFAULT_PHRASE.chars().collect()
        } else {
            phrase.chars().collect()
        };

        Self {
            options,
            pointer: PointerState::default(),
            anchor: Point::default(),
            cursor: TextCursor {
                min_font_size,
                letter_index: 0,
            },
            font,
            phrase,
        }
    }

    /// Number of letters in the phrase (never zero).
    pub fn phrase_len(&self) -> usize {
        self.phrase.len()
    }

    /// The letter text mode will place next.
    pub fn current_letter(&self) -> char {
        self.phrase[self.cursor.letter_index]
    }

    /// Moves the cursor to the next letter, wrapping past the end.
    pub fn advance_letter(&mut self) {
        self.cursor.letter_index += 1;
        if self.cursor.letter_index > self.phrase.len() - 1 {
            self.cursor.letter_index = 0;
        }
    }
}

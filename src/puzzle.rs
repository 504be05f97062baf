//! Puzzle words and the grading of guesses against them.

use std::{fmt::Display, ops::Deref};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Result, WordError};

/// A playable word: one or more uppercase ASCII letters and digits.
///
/// Construction is validated, so every instance can be typed on the board.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", try_from = "String", into = "String")
)]
pub struct Word {
    inner: String,
}

impl Word {
    /// Creates a new [`Word`].
    ///
    /// Returns an error if `word` is empty or holds anything but uppercase
    /// ASCII letters and digits. Use [`normalize()`](crate::normalize()) first
    /// to turn a display name into something acceptable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use cardle::Word;
    /// let zap = Word::new("ZAP")?;
    /// assert_eq!(&*zap, "ZAP");
    ///
    /// assert!(Word::new("zap").is_err());
    /// assert!(Word::new("").is_err());
    /// #
    /// # Ok::<_, cardle::CardleError>(())
    /// ```
    pub fn new(word: impl Into<String>) -> Result<Self> {
        let inner = word.into();
        if inner.is_empty() {
            return Err(WordError::Empty.into());
        }
        if let Some(ch) = inner
            .chars()
            .find(|c| !(c.is_ascii_uppercase() || c.is_ascii_digit()))
        {
            return Err(WordError::InvalidChar { word: inner, ch }.into());
        }
        Ok(Word { inner })
    }

    /// The number of characters in the word.
    pub fn len(&self) -> usize {
        // ASCII only, so bytes and chars agree
        self.inner.len()
    }

    /// Whether the word has no characters, which validation rules out.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Deref for Word {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl TryFrom<String> for Word {
    type Error = crate::CardleError;

    fn try_from(value: String) -> Result<Self> {
        Word::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.inner
    }
}

/// An evaluation tag that indicates the correctness of a letter in a guess.
///
/// `Correct` means that the letter is in the correct position. `Present`
/// means that the letter is in the word, but not in that position. `Absent`
/// means that the word has no copy of that letter left to match.
///
/// Grades are ordered by how much they reveal: `Absent < Present < Correct`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate", rename_all = "lowercase")
)]
pub enum Grade {
    /// The letter is not in the word, or every copy of it is already matched.
    Absent,

    /// The letter is in the word, but not there.
    Present,

    /// The letter is in the correct position.
    Correct,
}

impl Grade {
    /// The lowercase name of the grade, suitable as a style class.
    pub fn as_str(self) -> &'static str {
        match self {
            Grade::Absent => "absent",
            Grade::Present => "present",
            Grade::Correct => "correct",
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grades every character of `guess` against `target`.
///
/// The result has one [`Grade`] per character of `guess`, in order. Repeated
/// letters are resolved in two passes:
///
/// 1. Every character in the right position is [`Grade::Correct`] and uses up
///    that position of the target.
/// 2. Every remaining character takes the leftmost unused matching position
///    of the target and is [`Grade::Present`], or is [`Grade::Absent`] when
///    none is left.
///
/// So no character is ever marked `Correct` or `Present` more often than it
/// occurs in `target`, and exact matches always claim their position before
/// any `Present` can.
///
/// The two words are expected to have the same length. If `target` is
/// shorter, columns past its end can never be `Correct`.
///
/// # Examples
///
/// ```rust
/// use cardle::{evaluate, Grade::*};
///
/// assert_eq!(evaluate("AAAAA", "AABBB"), [Correct, Correct, Absent, Absent, Absent]);
/// assert_eq!(evaluate("BCDEA", "ABCDE"), [Present; 5]);
/// ```
pub fn evaluate(guess: &str, target: &str) -> Vec<Grade> {
    let guess = guess.as_bytes();
    let target = target.as_bytes();

    let mut res = vec![Grade::Absent; guess.len()];
    let mut taken = vec![false; target.len()];

    // go through correct letters first, since those get priority
    for (i, (g, t)) in guess.iter().zip(target).enumerate() {
        if g == t {
            res[i] = Grade::Correct;
            taken[i] = true;
        }
    }

    for (i, g) in guess.iter().enumerate() {
        if res[i] == Grade::Correct {
            continue;
        }
        if let Some(j) = target
            .iter()
            .zip(&taken)
            .position(|(t, &used)| t == g && !used)
        {
            res[i] = Grade::Present;
            taken[j] = true;
        }
    }

    res
}

/// A specific Cardle puzzle to solve: a target word laid out on a board at
/// least `min_cols` wide.
///
/// # Examples
///
/// ```rust
/// use cardle::{Puzzle, Word, Grade::*};
///
/// let puzzle = Puzzle::new(Word::new("ZAP")?, 3);
/// assert_eq!(puzzle.cols(), 3);
///
/// let (grades, correct) = puzzle.check("PAZ");
/// assert!(!correct);
/// assert_eq!(grades, [Present, Correct, Present]);
///
/// // Single letter names still play on a three column board.
/// assert_eq!(Puzzle::new(Word::new("X")?, 3).cols(), 3);
/// #
/// # Ok::<_, cardle::CardleError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Puzzle {
    word: Word,
    cols: usize,
}

impl Puzzle {
    /// Creates a new puzzle from a [`Word`], widening the board to
    /// `min_cols` columns for very short words.
    pub fn new(word: Word, min_cols: usize) -> Self {
        let cols = word.len().max(min_cols);
        Puzzle { word, cols }
    }

    /// The answer.
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// The number of columns on the board.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Checks a guess and returns partial information.
    ///
    /// This returns one [`Grade`] per character of `guess` (see
    /// [`evaluate()`]) and a [`bool`] denoting whether or not every grade is
    /// [`Grade::Correct`].
    pub fn check(&self, guess: &str) -> (Vec<Grade>, bool) {
        let grades = evaluate(guess, &self.word);
        let correct = !grades.is_empty() && grades.iter().all(|&g| g == Grade::Correct);
        (grades, correct)
    }
}

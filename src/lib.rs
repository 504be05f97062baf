#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

// Required to rename serde
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

use thiserror::Error;

pub mod card;
pub use card::{normalize, Card, Catalog};

pub mod daily;

pub mod puzzle;
pub use puzzle::{evaluate, Grade, Puzzle, Word};

pub mod keyboard;
pub use keyboard::KeyboardState;

pub mod input;
pub use input::Input;

pub mod session;
pub use session::{GameSession, Observer, Response, Rules, Status};

/// A [`Result`](std::result::Result) defaulting to [`CardleError`].
pub type Result<T, E = CardleError> = std::result::Result<T, E>;

/// The errors that `cardle` can produce.
#[derive(Debug, Error)]
pub enum CardleError {
    #[error("card catalog is unusable")]
    Catalog {
        #[from]
        kind: CatalogError,
    },

    #[error("invalid puzzle word")]
    Word {
        #[from]
        kind: WordError,
    },

    #[error("could not read card catalog")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("trouble deserializing card catalog")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// There are no cards to choose the daily target from.
    #[error("cannot select a daily target from zero cards")]
    Empty,

    /// A card name normalized to nothing, which would make a zero-width puzzle.
    #[error("card {index} (\"{name}\") has no letters or digits in its name")]
    EmptyName { index: usize, name: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordError {
    /// The string provided when constructing a [`Word`] was empty.
    #[error("a puzzle word cannot be empty")]
    Empty,

    /// The string provided when constructing a [`Word`] contains something
    /// other than uppercase ASCII letters and digits.
    #[error("the word \"{word}\" contains the invalid character {ch:?}")]
    InvalidChar { word: String, ch: char },
}

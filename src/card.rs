//! Cards and the catalog the daily target is drawn from.

#[cfg(feature = "serde")]
use std::io::Read;

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{puzzle::Word, CatalogError, Result};

/// Strips everything but ASCII letters and digits from `name` and uppercases
/// the rest.
///
/// Normalizing is idempotent.
///
/// # Examples
///
/// ```rust
/// use cardle::normalize;
///
/// assert_eq!(normalize("P.E.K.K.A"), "PEKKA");
/// assert_eq!(normalize("Mini P.E.K.K.A"), "MINIPEKKA");
/// assert_eq!(normalize(&normalize("X-Bow")), normalize("X-Bow"));
/// ```
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// A single card: its display name and the playable word derived from it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(crate = "serde_crate")
)]
pub struct Card {
    name: String,
    name_norm: Word,
}

impl Card {
    /// Creates a card, normalizing its name once.
    ///
    /// Returns an error if nothing playable is left after normalization.
    /// `index` is only used to describe the offending card.
    pub fn new(index: usize, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let norm = normalize(&name);
        if norm.is_empty() {
            return Err(CatalogError::EmptyName { index, name }.into());
        }
        let name_norm = Word::new(norm)?;
        Ok(Card { name, name_norm })
    }

    /// The display name, as it appeared in the catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The normalized name, which is what players have to guess.
    pub fn word(&self) -> &Word {
        &self.name_norm
    }
}

/// The minimal shape of a catalog record. Other fields are ignored.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
#[serde(crate = "serde_crate")]
struct CardRecord {
    name: String,
}

/// A non-empty list of valid cards.
///
/// Construction fails fast: an empty list, or any card without a single
/// letter or digit in its name, is rejected with a [`CatalogError`].
///
/// # Examples
///
/// ```rust
/// use cardle::Catalog;
///
/// let catalog = Catalog::new(["Hog Rider", "Zap", "The Log"])?;
/// assert_eq!(catalog.len(), 3);
/// assert_eq!(&**catalog[2].word(), "THELOG");
///
/// assert!(Catalog::new(Vec::<String>::new()).is_err());
/// assert!(Catalog::new(["Fireball", "???"]).is_err());
/// #
/// # Ok::<_, cardle::CardleError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    /// Builds a catalog from card names.
    pub fn new<I>(names: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let cards = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Card::new(i, name))
            .collect::<Result<Vec<_>>>()?;

        if cards.is_empty() {
            return Err(CatalogError::Empty.into());
        }

        debug!("loaded card catalog with {} cards", cards.len());
        Ok(Catalog { cards })
    }

    /// Builds a catalog from a JSON array of records shaped like
    /// `{ "name": "..." }`.
    ///
    /// ```rust
    /// use cardle::Catalog;
    ///
    /// let json = r#"[{ "name": "Knight", "elixir": 3 }, { "name": "Archers" }]"#;
    /// let catalog = Catalog::from_json(json)?;
    /// assert_eq!(catalog[0].name(), "Knight");
    /// #
    /// # Ok::<_, cardle::CardleError>(())
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<CardRecord> = serde_json::from_str(json)?;
        Self::new(records.into_iter().map(|r| r.name))
    }

    /// Like [`from_json()`](Self::from_json()), but reads the JSON from `reader`.
    #[cfg(feature = "serde")]
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    /// The number of cards. Never zero.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog has no cards. Loading rejects that, so this is
    /// false for every constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl std::ops::Index<usize> for Catalog {
    type Output = Card;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

//! Core catalogue types.
//!
//! Entries are ordered field lists; group keys are single characters with a
//! precomputed class so that ordering never has to branch per comparison.

use std::cmp::Ordering;
use std::fmt;

use crate::constants::markers;

/// A parsed album record: an ordered list of trimmed fields.
///
/// Conventionally `[title, artist]`, but any non-empty field count is kept.
/// Ordering is lexical over the whole field list, so ties on the title fall
/// through to the artist.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entry {
    fields: Vec<String>,
}

impl Entry {
    /// Build an entry, trimming whitespace from every field.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|f| f.as_ref().trim().to_string())
                .collect(),
        }
    }

    /// Split `text` on the delimiter into a new entry, optionally reversing field order.
    pub fn split(text: &str, orientation: Orientation) -> Self {
        let parts = text.split(markers::DELIMITER);
        match orientation {
            Orientation::Normal => Self::new(parts),
            Orientation::Reversed => Self::new(parts.rev()),
        }
    }

    /// The primary (title) field.
    pub fn primary(&self) -> &str {
        self.fields.first().map_or("", String::as_str)
    }

    /// The fields after the primary one.
    pub fn rest(&self) -> &[String] {
        self.fields.get(1..).unwrap_or_default()
    }

    /// All fields in order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// An entry is usable only when its primary field has text.
    pub fn is_empty(&self) -> bool {
        self.primary().is_empty()
    }

    /// Group key derived from the first character of the primary field.
    pub fn group_key(&self) -> Option<GroupKey> {
        self.primary().chars().next().map(GroupKey::classify)
    }
}

/// Whether raw lines list title-then-artist or artist-then-title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// `Title: Artist`.
    #[default]
    Normal,
    /// `Artist: Title`.
    Reversed,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "title-first"),
            Self::Reversed => write!(f, "artist-first"),
        }
    }
}

/// Character class of a group key, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyClass {
    /// `A`-`Z`.
    Alphabetic,
    /// `0`-`9`.
    Digit,
    /// The catch-all symbol and anything else.
    Other,
}

/// Single-character section key: an upper-case ASCII letter, a digit, or `~`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupKey {
    ch: char,
    class: KeyClass,
}

impl GroupKey {
    /// The catch-all key.
    pub const CATCH_ALL: Self = Self {
        ch: markers::CATCH_ALL,
        class: KeyClass::Other,
    };

    /// Classify a leading character: letters are upper-cased, digits kept,
    /// everything else collapses to the catch-all key.
    pub const fn classify(c: char) -> Self {
        if c.is_ascii_alphabetic() {
            Self {
                ch: c.to_ascii_uppercase(),
                class: KeyClass::Alphabetic,
            }
        } else if c.is_ascii_digit() {
            Self {
                ch: c,
                class: KeyClass::Digit,
            }
        } else {
            Self::CATCH_ALL
        }
    }

    /// The displayed key character.
    pub const fn as_char(self) -> char {
        self.ch
    }

    /// The key's character class.
    pub const fn class(self) -> KeyClass {
        self.class
    }

    /// Composite sort value: class first, then the class-specific value.
    fn rank(self) -> (KeyClass, u32) {
        let value = match self.class {
            KeyClass::Digit => self.ch.to_digit(10).unwrap_or_default(),
            KeyClass::Alphabetic | KeyClass::Other => u32::from(self.ch),
        };
        (self.class, value)
    }
}

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ch)
    }
}

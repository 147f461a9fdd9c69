//! Basic elements and their parts.
//!
//! A basic element (BE) is a small content unit such as a head word plus a
//! modifier. BEs arrive here already extracted; this module only gives them
//! a match key so that two BEs from different summaries can be compared.

use crate::canonical::CanonicalAnnotation;
use crate::config::BE_KEY_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

const KEY_ESCAPE: char = '\\';

/// One token or phrase component of a basic element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BePart {
    /// Surface text as it appeared in the summary
    pub text: String,
    /// Canonical form, when the part is a recognized number, amount or date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<CanonicalAnnotation>,
}

impl BePart {
    /// Creates an unannotated part.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotation: None,
        }
    }

    /// Creates a part whose whole text is a numeric mention.
    pub fn numeric(text: impl Into<String>) -> Self {
        let text = text.into();
        let annotation = CanonicalAnnotation::numeric(&text, 0..text.len());
        Self {
            text,
            annotation: Some(annotation),
        }
    }

    /// Attaches a canonical annotation to the part.
    pub fn with_annotation(mut self, annotation: CanonicalAnnotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// Returns the string this part matches under.
    ///
    /// Annotated parts match on their canonical string, everything else on
    /// lowercased surface text.
    pub fn key(&self) -> Cow<'_, str> {
        match &self.annotation {
            Some(annotation) => Cow::Borrowed(annotation.canonical_string()),
            None => Cow::Owned(self.text.to_lowercase()),
        }
    }

    /// Length of the surface text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A basic element: an ordered sequence of parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicElement {
    pub parts: Vec<BePart>,
}

impl BasicElement {
    pub fn new(parts: Vec<BePart>) -> Self {
        Self { parts }
    }

    /// Builds a BE of unannotated parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use bescore_core::element::BasicElement;
    ///
    /// let be = BasicElement::from_words(&["Prices", "rose"]);
    /// assert_eq!(be.match_key(), "prices|rose");
    /// ```
    pub fn from_words(words: &[&str]) -> Self {
        Self::new(words.iter().map(|w| BePart::new(*w)).collect())
    }

    pub fn parts(&self) -> &[BePart] {
        &self.parts
    }

    /// Total character length of all parts.
    pub fn text_len(&self) -> usize {
        self.parts.iter().map(BePart::char_len).sum()
    }

    /// Key under which two BEs are considered a match.
    ///
    /// Part keys are joined with [`BE_KEY_SEPARATOR`]. A separator or
    /// backslash inside a part key is backslash-escaped, so distinct part
    /// sequences never share a key.
    pub fn match_key(&self) -> String {
        let mut key = String::new();
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                key.push(BE_KEY_SEPARATOR);
            }
            for c in part.key().chars() {
                if c == BE_KEY_SEPARATOR || c == KEY_ESCAPE {
                    key.push(KEY_ESCAPE);
                }
                key.push(c);
            }
        }
        key
    }

    pub fn matches(&self, other: &BasicElement) -> bool {
        self.match_key() == other.match_key()
    }
}

impl fmt::Display for BasicElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, "{BE_KEY_SEPARATOR}")?;
            }
            f.write_str(&part.text)?;
        }
        Ok(())
    }
}

//! Canonicalization of textual mentions.
//!
//! Basic elements only match when their parts compare equal, so surface
//! variation in numbers, money and dates would otherwise hide real matches.
//! This module rewrites such mentions into canonical strings:
//!
//! | Mention | Canonical | Type |
//! |---------|-----------|------|
//! | `$2.5 million` | `$2500000` | [`CanonicalType::Money`] |
//! | `3k` | `3000` | [`CanonicalType::Number`] |
//! | `20%` | `20%` | [`CanonicalType::Percent`] |
//! | month `june`, day `4`, year `1998` | `june-4-1998` | [`CanonicalType::Date`] |
//!
//! All functions are pure. The lexicon behind spelled-out numbers is static
//! data initialized on first use.

pub mod lexicon;
mod number;

pub use number::canonicalize_number;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Kind of mention a canonical string was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalType {
    /// Plain or spelled-out number
    Number,
    /// Amount with a leading currency marker
    Money,
    /// Amount with a trailing percent marker
    Percent,
    /// Month/day/year tuple
    Date,
}

impl CanonicalType {
    /// Returns the lowercase name used in JSON and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Money => "money",
            Self::Percent => "percent",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical string paired with its type.
///
/// Two forms are equal iff both the type and the canonical string are equal,
/// which makes `CanonicalForm` usable directly as a map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalForm {
    /// Mention kind
    pub kind: CanonicalType,
    /// Normalized text
    pub value: String,
}

/// Canonicalizes a numeric, money or percent mention.
///
/// The type tag is read off the canonical string: a trailing `%` means
/// percent, otherwise a leading `$` means money, anything else is a number.
///
/// # Examples
///
/// ```
/// use bescore_core::canonical::{canonicalize, CanonicalType};
///
/// let form = canonicalize("$2.5 million");
/// assert_eq!(form.value, "$2500000");
/// assert_eq!(form.kind, CanonicalType::Money);
/// ```
pub fn canonicalize(raw: &str) -> CanonicalForm {
    let value = canonicalize_number(raw);
    let kind = if value.ends_with('%') {
        CanonicalType::Percent
    } else if value.starts_with('$') {
        CanonicalType::Money
    } else {
        CanonicalType::Number
    };
    CanonicalForm { kind, value }
}

/// Date fields already split out by the extraction step.
///
/// Values are used as given; month names, day and year formats are not
/// normalized here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFields {
    pub month: String,
    pub day: String,
    pub year: String,
}

impl DateFields {
    pub fn new(month: impl Into<String>, day: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            day: day.into(),
            year: year.into(),
        }
    }

    /// Joins the fields as `month-day-year`.
    pub fn canonical(&self) -> CanonicalForm {
        CanonicalForm {
            kind: CanonicalType::Date,
            value: format!("{}-{}-{}", self.month, self.day, self.year),
        }
    }
}

/// A recognized mention: a source span plus its canonical form.
///
/// Annotations are created once during BE construction and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalAnnotation {
    start: usize,
    end: usize,
    form: CanonicalForm,
}

impl CanonicalAnnotation {
    /// Annotates a numeric, money or percent mention covering `span`.
    pub fn numeric(text: &str, span: Range<usize>) -> Self {
        Self {
            start: span.start,
            end: span.end,
            form: canonicalize(text),
        }
    }

    /// Annotates a date mention covering `span`.
    pub fn date(fields: &DateFields, span: Range<usize>) -> Self {
        Self {
            start: span.start,
            end: span.end,
            form: fields.canonical(),
        }
    }

    /// Source span `[start, end)`.
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn canonical_string(&self) -> &str {
        &self.form.value
    }

    pub fn canonical_type(&self) -> CanonicalType {
        self.form.kind
    }

    pub fn form(&self) -> &CanonicalForm {
        &self.form
    }

    /// Returns true if both annotations denote the same value, regardless of
    /// where they occur.
    pub fn same_value(&self, other: &CanonicalAnnotation) -> bool {
        self.form == other.form
    }
}

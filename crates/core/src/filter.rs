//! Song listing filter.
//!
//! Only the fields declared in [`SongFilterField`] can ever be filtered on.
//! Each field maps to exactly one column, so the query layer never
//! interpolates caller-supplied identifiers into SQL text.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A filterable song attribute.
///
/// Variant order is the order predicates are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SongFilterField {
    Group,
    Title,
}

impl SongFilterField {
    pub const ALL: [SongFilterField; 2] = [SongFilterField::Group, SongFilterField::Title];

    /// Column in the `songs` table this field compares against.
    pub fn column(self) -> &'static str {
        match self {
            SongFilterField::Group => "group_name",
            SongFilterField::Title => "song_title",
        }
    }

    /// Canonical query parameter name.
    pub fn key(self) -> &'static str {
        match self {
            SongFilterField::Group => "group",
            SongFilterField::Title => "song",
        }
    }
}

impl fmt::Display for SongFilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SongFilterField {
    type Err = CoreError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "group" | "group_name" => Ok(SongFilterField::Group),
            "song" | "song_title" | "title" => Ok(SongFilterField::Title),
            other => Err(CoreError::Validation(format!(
                "Unknown filter key '{other}'. Valid keys: group, song"
            ))),
        }
    }
}

/// Exact-match constraints on a song listing, combined with AND.
///
/// Absent fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongFilter {
    values: BTreeMap<SongFilterField, String>,
}

impl SongFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter. Replaces any previous value for `field`.
    pub fn with(mut self, field: SongFilterField, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    /// Parse a filter from raw `key=value` pairs (e.g. HTTP query params).
    ///
    /// Every key must name a [`SongFilterField`]. Empty values are skipped.
    /// Two keys resolving to the same field are rejected, since there is no
    /// meaningful way to pick one.
    pub fn from_params<I, K, V>(params: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = Self::new();
        for (key, value) in params {
            let field: SongFilterField = key.as_ref().parse()?;
            let value = value.as_ref();
            if value.is_empty() {
                continue;
            }
            if filter.values.insert(field, value.to_string()).is_some() {
                return Err(CoreError::Validation(format!(
                    "Filter '{field}' given more than once"
                )));
            }
        }
        Ok(filter)
    }

    pub fn get(&self, field: SongFilterField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Present constraints in [`SongFilterField`] order.
    pub fn iter(&self) -> impl Iterator<Item = (SongFilterField, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }

    /// Whether a song with the given group and title satisfies every constraint.
    pub fn matches(&self, group: &str, title: &str) -> bool {
        self.iter().all(|(field, value)| match field {
            SongFilterField::Group => group == value,
            SongFilterField::Title => title == value,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Choices, candidates and match results.

use crate::text::ArgText;

/// Ordered set of permissible values. The first one is the default.
///
/// Emptiness is checked when the choices are handed to a matcher, so any
/// sequence converts into `Choices`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choices<T> {
    values: Vec<T>,
}

impl<T: ArgText> Choices<T> {
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.values.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub(crate) fn display_all(&self) -> Vec<String> {
        self.values.iter().map(|v| v.to_display().into_owned()).collect()
    }
}

/// Value supplied by the caller for validation.
///
/// A bare empty string is treated as absent, like an empty sequence. A
/// sequence holding one empty string is not absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<T> {
    values: Vec<T>,
}

impl<T: ArgText> Candidate<T> {
    pub fn absent() -> Self {
        Self { values: Vec::new() }
    }

    pub fn one(value: T) -> Self {
        if value.is_empty_text() {
            Self::absent()
        } else {
            Self {
                values: vec![value],
            }
        }
    }

    pub fn many(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn is_absent(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

impl<T: ArgText> Default for Candidate<T> {
    fn default() -> Self {
        Self::absent()
    }
}

/// Result of a successful match.
///
/// A single match is always `One`, even when several were allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matched<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Matched<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            Matched::One(v) => std::slice::from_ref(v),
            Matched::Many(vs) => vs,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// The single match, or `None` for `Many`.
    pub fn into_one(self) -> Option<T> {
        match self {
            Matched::One(v) => Some(v),
            Matched::Many(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Matched::One(v) => vec![v],
            Matched::Many(vs) => vs,
        }
    }
}

// ============ Conversions: strings ============

impl From<&str> for Choices<String> {
    fn from(value: &str) -> Self {
        Self::new([value.to_string()])
    }
}

impl From<String> for Choices<String> {
    fn from(value: String) -> Self {
        Self::new([value])
    }
}

impl From<Vec<String>> for Choices<String> {
    fn from(values: Vec<String>) -> Self {
        Self { values }
    }
}

impl From<Vec<&str>> for Choices<String> {
    fn from(values: Vec<&str>) -> Self {
        Self::new(values.into_iter().map(String::from))
    }
}

impl From<&[&str]> for Choices<String> {
    fn from(values: &[&str]) -> Self {
        Self::new(values.iter().map(|v| v.to_string()))
    }
}

impl From<&[String]> for Choices<String> {
    fn from(values: &[String]) -> Self {
        Self::new(values.iter().cloned())
    }
}

impl<const N: usize> From<[&str; N]> for Choices<String> {
    fn from(values: [&str; N]) -> Self {
        Self::new(values.into_iter().map(String::from))
    }
}

impl From<&str> for Candidate<String> {
    fn from(value: &str) -> Self {
        Self::one(value.to_string())
    }
}

impl From<String> for Candidate<String> {
    fn from(value: String) -> Self {
        Self::one(value)
    }
}

impl From<Option<&str>> for Candidate<String> {
    fn from(value: Option<&str>) -> Self {
        value.map_or_else(Self::absent, Self::from)
    }
}

impl From<Vec<String>> for Candidate<String> {
    fn from(values: Vec<String>) -> Self {
        Self { values }
    }
}

impl From<Vec<&str>> for Candidate<String> {
    fn from(values: Vec<&str>) -> Self {
        Self::many(values.into_iter().map(String::from))
    }
}

impl From<&[&str]> for Candidate<String> {
    fn from(values: &[&str]) -> Self {
        Self::many(values.iter().map(|v| v.to_string()))
    }
}

impl From<&[String]> for Candidate<String> {
    fn from(values: &[String]) -> Self {
        Self::many(values.iter().cloned())
    }
}

impl<const N: usize> From<[&str; N]> for Candidate<String> {
    fn from(values: [&str; N]) -> Self {
        Self::many(values.into_iter().map(String::from))
    }
}

// ============ Conversions: byte strings ============

impl From<&[u8]> for Choices<Vec<u8>> {
    fn from(value: &[u8]) -> Self {
        Self::new([value.to_vec()])
    }
}

impl From<Vec<Vec<u8>>> for Choices<Vec<u8>> {
    fn from(values: Vec<Vec<u8>>) -> Self {
        Self { values }
    }
}

impl From<&[&[u8]]> for Choices<Vec<u8>> {
    fn from(values: &[&[u8]]) -> Self {
        Self::new(values.iter().map(|v| v.to_vec()))
    }
}

impl<const N: usize> From<[&[u8]; N]> for Choices<Vec<u8>> {
    fn from(values: [&[u8]; N]) -> Self {
        Self::new(values.into_iter().map(<[u8]>::to_vec))
    }
}

impl From<&[u8]> for Candidate<Vec<u8>> {
    fn from(value: &[u8]) -> Self {
        Self::one(value.to_vec())
    }
}

impl From<Option<&[u8]>> for Candidate<Vec<u8>> {
    fn from(value: Option<&[u8]>) -> Self {
        value.map_or_else(Self::absent, Self::from)
    }
}

impl From<Vec<Vec<u8>>> for Candidate<Vec<u8>> {
    fn from(values: Vec<Vec<u8>>) -> Self {
        Self { values }
    }
}

impl From<&[&[u8]]> for Candidate<Vec<u8>> {
    fn from(values: &[&[u8]]) -> Self {
        Self::many(values.iter().map(|v| v.to_vec()))
    }
}

impl<const N: usize> From<[&[u8]; N]> for Candidate<Vec<u8>> {
    fn from(values: [&[u8]; N]) -> Self {
        Self::many(values.into_iter().map(<[u8]>::to_vec))
    }
}

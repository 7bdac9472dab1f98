use std::fmt;
use thiserror::Error;

/// Malformed input to the matcher. The caller has to fix the call.
#[derive(Error, Debug)]
pub enum InvalidArgument {
    #[error("choices must not be empty")]
    EmptyChoices,

    #[error("candidate must have exactly one element, got {len}")]
    CandidateLength { len: usize },

    #[error("match count must not be negative, got {count}")]
    NegativeMatchCount { count: i64 },

    #[error("items must have length {expected} when provided, got {actual}")]
    ItemsLength { expected: usize, actual: usize },

    #[error("invalid candidate pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// No choice matched, or more than one matched where only one is allowed.
///
/// `items` holds the full set of choices when nothing matched, and the
/// matches themselves when there were too many.
///
/// ```
/// use argmatch::MatchError;
///
/// let err = MatchError::with_items(2, ["aa", "ab"]).unwrap();
/// assert_eq!(err.describe(), "Too many matches (2), found 'aa', 'ab'");
///
/// let err = MatchError::with_items(0, ["x"]).unwrap();
/// assert_eq!(err.to_string(), "No argument match found, should be 'x'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchError {
    match_count: usize,
    items: Vec<String>,
}

impl MatchError {
    pub fn new(match_count: i64) -> std::result::Result<Self, InvalidArgument> {
        Self::with_items(match_count, Vec::<String>::new())
    }

    /// An empty `items` is the same as no items at all.
    pub fn with_items<I>(
        match_count: i64,
        items: I,
    ) -> std::result::Result<Self, InvalidArgument>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        let match_count = usize::try_from(match_count)
            .map_err(|_| InvalidArgument::NegativeMatchCount { count: match_count })?;
        if !items.is_empty() && match_count > 0 && items.len() != match_count {
            return Err(InvalidArgument::ItemsLength {
                expected: match_count,
                actual: items.len(),
            });
        }
        Ok(Self { match_count, items })
    }

    pub(crate) fn no_match(choices: Vec<String>) -> Self {
        Self {
            match_count: 0,
            items: choices,
        }
    }

    pub(crate) fn too_many(matches: Vec<String>) -> Self {
        Self {
            match_count: matches.len(),
            items: matches,
        }
    }

    /// Number of matches found.
    pub fn match_count(&self) -> usize {
        self.match_count
    }

    pub fn items(&self) -> Option<&[String]> {
        if self.items.is_empty() {
            None
        } else {
            Some(&self.items)
        }
    }

    pub fn is_no_match(&self) -> bool {
        self.match_count == 0
    }

    pub fn is_ambiguous(&self) -> bool {
        self.match_count > 0
    }

    pub fn describe(&self) -> String {
        if self.match_count > 0 {
            let mut msg = format!("Too many matches ({})", self.match_count);
            if !self.items.is_empty() {
                msg.push_str(", found ");
                msg.push_str(&quote_all(&self.items));
            }
            return msg;
        }

        let mut msg = String::from("No argument match found");
        match self.items.as_slice() {
            [] => {}
            [only] => {
                msg.push_str(&format!(", should be '{}'", only));
            }
            items => {
                msg.push_str(", should be one of ");
                msg.push_str(&quote_all(items));
            }
        }
        msg
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl std::error::Error for MatchError {}

fn quote_all(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("'{}'", item))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error(transparent)]
    Match(#[from] MatchError),
}

impl Error {
    pub fn as_match_error(&self) -> Option<&MatchError> {
        match self {
            Error::Match(e) => Some(e),
            Error::InvalidArgument(_) => None,
        }
    }

    pub fn as_invalid_argument(&self) -> Option<&InvalidArgument> {
        match self {
            Error::InvalidArgument(e) => Some(e),
            Error::Match(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

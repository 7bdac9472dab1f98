//! Argument validation against a declared set of choices.
//!
//! A parameter declares its legal values; the function body resolves the
//! caller's value against them with partial (prefix) matching. An absent
//! value resolves to the first choice, a prefix that selects exactly one
//! choice resolves to it, and anything else is reported as a [`MatchError`].
//!
//! # Example
//!
//! ```
//! use argmatch::{match_arg, Error, Matched};
//!
//! const ALTERNATIVES: [&str; 3] = ["two.sided", "less", "greater"];
//!
//! fn alternative(arg: Option<&str>) -> argmatch::Result<String> {
//!     let matched = match_arg(arg, ALTERNATIVES, false)?;
//!     Ok(matched.into_one().unwrap_or_default())
//! }
//!
//! assert_eq!(alternative(None).unwrap(), "two.sided");
//! assert_eq!(alternative(Some("gr")).unwrap(), "greater");
//!
//! match alternative(Some("x")) {
//!     Err(Error::Match(e)) => {
//!         assert_eq!(e.match_count(), 0);
//!         assert_eq!(
//!             e.to_string(),
//!             "No argument match found, should be one of 'two.sided', 'less', 'greater'"
//!         );
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

mod args;
mod error;
mod matcher;
mod text;

pub use args::{Candidate, Choices, Matched};
pub use error::{Error, InvalidArgument, MatchError, Result};
pub use matcher::{match_arg, match_arg_bytes, ArgMatcher, MatchMode};
pub use text::ArgText;

//! String flavours accepted as choices and candidates.

use std::borrow::Cow;
use std::fmt;
use std::fmt::Write as _;

mod sealed {
    pub trait Sealed {}
    impl Sealed for String {}
    impl Sealed for Vec<u8> {}
}

/// Text that can be matched against a set of choices.
///
/// Implemented for [`String`] and for byte strings (`Vec<u8>`). The trait is
/// sealed; the matcher only needs prefix tests, an anchored regex form and a
/// printable rendering.
pub trait ArgText: sealed::Sealed + Clone + PartialEq + fmt::Debug {
    /// Compiled regular expression for this text flavour.
    type Regex: fmt::Debug;

    fn is_empty_text(&self) -> bool;

    /// Whether `prefix` is a literal prefix of `self`.
    fn has_prefix(&self, prefix: &Self) -> bool;

    /// Compile `self` as a regular expression.
    fn compile(&self) -> Result<Self::Regex, regex::Error>;

    /// Whether `regex` matches `subject` starting at its first character.
    /// There is no end anchor.
    fn matches_at_start(regex: &Self::Regex, subject: &Self) -> bool;

    /// Human readable form, decoded lossily for byte strings.
    fn to_display(&self) -> Cow<'_, str>;
}

impl ArgText for String {
    type Regex = regex::Regex;

    fn is_empty_text(&self) -> bool {
        self.is_empty()
    }

    fn has_prefix(&self, prefix: &Self) -> bool {
        self.starts_with(prefix.as_str())
    }

    fn compile(&self) -> Result<Self::Regex, regex::Error> {
        regex::Regex::new(self)
    }

    fn matches_at_start(regex: &Self::Regex, subject: &Self) -> bool {
        // Leftmost search: a match starting at 0 is reported before any other.
        regex.find(subject).is_some_and(|m| m.start() == 0)
    }

    fn to_display(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl ArgText for Vec<u8> {
    type Regex = regex::bytes::Regex;

    fn is_empty_text(&self) -> bool {
        self.is_empty()
    }

    fn has_prefix(&self, prefix: &Self) -> bool {
        self.starts_with(prefix)
    }

    fn compile(&self) -> Result<Self::Regex, regex::Error> {
        regex::bytes::Regex::new(&byte_pattern(self))
    }

    fn matches_at_start(regex: &Self::Regex, subject: &Self) -> bool {
        regex.find(subject).is_some_and(|m| m.start() == 0)
    }

    fn to_display(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self)
    }
}

/// Turn a byte pattern into regex syntax that matches raw bytes.
///
/// Unicode is disabled so `.` and classes operate on single bytes, and every
/// non-ASCII byte is written as a `\xNN` escape. A backslash in front of a
/// non-ASCII byte escapes that byte, so it is folded into the escape.
fn byte_pattern(pattern: &[u8]) -> String {
    let mut out = String::with_capacity(pattern.len() + 6);
    out.push_str("(?-u)");
    let mut escaped = false;
    for &b in pattern {
        if !b.is_ascii() {
            let _ = write!(out, "\\x{:02X}", b);
        } else if escaped {
            out.push('\\');
            out.push(char::from(b));
        } else if b == b'\\' {
            escaped = true;
            continue;
        } else {
            out.push(char::from(b));
        }
        escaped = false;
    }
    if escaped {
        // Dangling backslash; left for the regex parser to reject.
        out.push('\\');
    }
    out
}

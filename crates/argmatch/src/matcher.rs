//! Partial matching of candidates against declared choices.

use crate::args::{Candidate, Choices, Matched};
use crate::error::{InvalidArgument, MatchError, Result};
use crate::text::ArgText;
use log::{debug, trace};

/// How a candidate element is compared with a choice.
///
/// The candidate is always the pattern and the choice the subject, so a
/// short candidate selects longer choices and never the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The candidate is a literal prefix of the choice.
    #[default]
    Literal,
    /// The candidate is a regular expression that must match at the start
    /// of the choice. There is no implicit end anchor.
    Regex,
}

/// Validates candidates against a fixed, non-empty set of choices.
///
/// # Example
///
/// ```
/// use argmatch::{ArgMatcher, Matched};
///
/// let matcher = ArgMatcher::new(["mean", "median", "mode"]).unwrap();
///
/// assert_eq!(matcher.resolve("mo").unwrap(), Matched::One("mode".to_string()));
/// assert_eq!(matcher.resolve(None).unwrap(), Matched::One("mean".to_string()));
///
/// // "me" selects two choices, which is only allowed in multiple mode.
/// let err = matcher.resolve("me").unwrap_err();
/// assert_eq!(err.to_string(), "Too many matches (2), found 'mean', 'median'");
///
/// let matches = matcher.clone().multiple(true).resolve("me").unwrap();
/// assert_eq!(matches.as_slice(), ["mean", "median"]);
/// ```
#[derive(Debug, Clone)]
pub struct ArgMatcher<T> {
    choices: Choices<T>,
    multiple: bool,
    mode: MatchMode,
}

impl<T: ArgText> ArgMatcher<T> {
    pub fn new(choices: impl Into<Choices<T>>) -> Result<Self> {
        let choices = choices.into();
        if choices.is_empty() {
            return Err(InvalidArgument::EmptyChoices.into());
        }
        Ok(Self {
            choices,
            multiple: false,
            mode: MatchMode::default(),
        })
    }

    /// Allow several candidate elements and several matches.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn choices(&self) -> &Choices<T> {
        &self.choices
    }

    /// The first declared choice, returned when no candidate is given.
    pub fn default_choice(&self) -> &T {
        &self.choices.as_slice()[0]
    }

    pub fn resolve(&self, candidate: impl Into<Candidate<T>>) -> Result<Matched<T>> {
        let candidate = candidate.into();

        if candidate.is_absent() {
            debug!(
                "no candidate given, using default '{}'",
                self.default_choice().to_display()
            );
            return Ok(Matched::One(self.default_choice().clone()));
        }

        if !self.multiple {
            // Caller forwarded the whole declared set unchanged.
            if candidate.as_slice() == self.choices.as_slice() {
                debug!(
                    "candidate equals choices, using default '{}'",
                    self.default_choice().to_display()
                );
                return Ok(Matched::One(self.default_choice().clone()));
            }
            if candidate.len() > 1 {
                return Err(InvalidArgument::CandidateLength {
                    len: candidate.len(),
                }
                .into());
            }
        }

        let mut matches = self.collect_matches(candidate.as_slice())?;
        debug!(
            "{} match(es) for {} candidate element(s) in {:?} mode",
            matches.len(),
            candidate.len(),
            self.mode
        );

        match matches.len() {
            0 => Err(MatchError::no_match(self.choices.display_all()).into()),
            1 => Ok(Matched::One(matches.remove(0))),
            _ if !self.multiple => Err(MatchError::too_many(
                matches.iter().map(|m| m.to_display().into_owned()).collect(),
            )
            .into()),
            _ => Ok(Matched::Many(matches)),
        }
    }

    /// Every choice selected by any candidate element, in candidate order then
    /// choice order. Duplicates are kept.
    fn collect_matches(&self, candidate: &[T]) -> Result<Vec<T>> {
        let mut matches = Vec::new();
        for value in candidate {
            let comparator = Comparator::new(value, self.mode)?;
            for choice in self.choices.iter() {
                let hit = comparator.matches(choice);
                trace!(
                    "'{}' against '{}': {}",
                    value.to_display(),
                    choice.to_display(),
                    if hit { "match" } else { "no match" }
                );
                if hit {
                    matches.push(choice.clone());
                }
            }
        }
        Ok(matches)
    }
}

enum Comparator<'a, T: ArgText> {
    Literal(&'a T),
    Regex(T::Regex),
}

impl<'a, T: ArgText> Comparator<'a, T> {
    fn new(pattern: &'a T, mode: MatchMode) -> Result<Self> {
        match mode {
            MatchMode::Literal => Ok(Comparator::Literal(pattern)),
            MatchMode::Regex => {
                let regex = pattern
                    .compile()
                    .map_err(|source| InvalidArgument::Pattern {
                        pattern: pattern.to_display().into_owned(),
                        source,
                    })?;
                Ok(Comparator::Regex(regex))
            }
        }
    }

    fn matches(&self, subject: &T) -> bool {
        match self {
            Comparator::Literal(prefix) => subject.has_prefix(prefix),
            Comparator::Regex(regex) => T::matches_at_start(regex, subject),
        }
    }
}

/// Match `candidate` against `choices`.
///
/// Returns the first choice when the candidate is absent or equal to the
/// full set of choices. Unless `multiple` is set, the candidate must have a
/// single element and select exactly one choice.
///
/// ```
/// use argmatch::{match_arg, Matched};
///
/// let kind = match_arg("two", ["two.sided", "less", "greater"], false).unwrap();
/// assert_eq!(kind, Matched::One("two.sided".to_string()));
/// ```
pub fn match_arg<C, H>(candidate: C, choices: H, multiple: bool) -> Result<Matched<String>>
where
    C: Into<Candidate<String>>,
    H: Into<Choices<String>>,
{
    ArgMatcher::new(choices)?.multiple(multiple).resolve(candidate)
}

/// Byte-string variant of [`match_arg`].
pub fn match_arg_bytes<C, H>(candidate: C, choices: H, multiple: bool) -> Result<Matched<Vec<u8>>>
where
    C: Into<Candidate<Vec<u8>>>,
    H: Into<Choices<Vec<u8>>>,
{
    ArgMatcher::new(choices)?.multiple(multiple).resolve(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn one(s: &str) -> Matched<String> {
        Matched::One(s.to_string())
    }

    fn many(items: &[&str]) -> Matched<String> {
        Matched::Many(items.iter().map(|s| s.to_string()).collect())
    }

    fn match_error(result: Result<Matched<String>>) -> MatchError {
        match result {
            Err(Error::Match(e)) => e,
            other => panic!("expected match error, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_candidate_returns_first_choice() {
        assert_eq!(match_arg(None, ["aa", "ab"], false).unwrap(), one("aa"));
        assert_eq!(match_arg("", ["aa", "ab"], false).unwrap(), one("aa"));
        assert_eq!(
            match_arg(Vec::<String>::new(), ["aa", "ab"], true).unwrap(),
            one("aa")
        );
    }

    #[test]
    fn test_candidate_equal_to_choices_returns_first_choice() {
        assert_eq!(
            match_arg(["aa", "ab"], ["aa", "ab"], false).unwrap(),
            one("aa")
        );
    }

    #[test]
    fn test_candidate_equal_to_choices_in_multiple_mode_matches_all() {
        assert_eq!(
            match_arg(["aa", "ab"], ["aa", "ab"], true).unwrap(),
            many(&["aa", "ab"])
        );
    }

    #[test]
    fn test_partial_match() {
        assert_eq!(match_arg("ab", ["abc", "bcd"], false).unwrap(), one("abc"));
    }

    #[test]
    fn test_self_match() {
        let choices = ["two.sided", "less", "greater"];
        for choice in choices {
            assert_eq!(match_arg(choice, choices, false).unwrap(), one(choice));
        }
    }

    #[test]
    fn test_single_bare_choice() {
        assert_eq!(match_arg("o", "only", false).unwrap(), one("only"));
    }

    #[test]
    fn test_ambiguous_match() {
        let err = match_error(match_arg("a", ["aa", "ab"], false));
        assert_eq!(err.match_count(), 2);
        assert_eq!(
            err.items(),
            Some(&["aa".to_string(), "ab".to_string()][..])
        );
    }

    #[test]
    fn test_ambiguous_match_allowed_in_multiple_mode() {
        assert_eq!(
            match_arg("a", ["aa", "ab"], true).unwrap(),
            many(&["aa", "ab"])
        );
    }

    #[test]
    fn test_no_match_reports_choices() {
        let err = match_error(match_arg("z", ["aa", "ab"], false));
        assert_eq!(err.match_count(), 0);
        assert_eq!(
            err.items(),
            Some(&["aa".to_string(), "ab".to_string()][..])
        );
        assert_eq!(
            err.describe(),
            "No argument match found, should be one of 'aa', 'ab'"
        );
    }

    #[test]
    fn test_matching_is_directional() {
        let err = match_error(match_arg("abc", ["ab"], false));
        assert!(err.is_no_match());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(match_arg("A", ["aa"], false).is_err());
    }

    #[test]
    fn test_several_candidates_rejected_without_multiple() {
        let result = match_arg(["x", "y"], ["x", "y", "z"], false);
        assert!(matches!(
            result,
            Err(Error::InvalidArgument(InvalidArgument::CandidateLength {
                len: 2
            }))
        ));
    }

    #[test]
    fn test_equality_shortcut_precedes_length_check() {
        // Same elements, different order: not the forwarded set.
        let result = match_arg(["ab", "aa"], ["aa", "ab"], false);
        assert!(matches!(
            result,
            Err(Error::InvalidArgument(InvalidArgument::CandidateLength { .. }))
        ));
    }

    #[test]
    fn test_several_candidates_in_multiple_mode() {
        let result = match_arg(["g", "l"], ["two.sided", "less", "greater"], true).unwrap();
        assert_eq!(result, many(&["greater", "less"]));
    }

    #[test]
    fn test_multiple_mode_single_match_is_scalar() {
        let result = match_arg(["g", "x"], ["less", "greater"], true).unwrap();
        assert_eq!(result, one("greater"));
    }

    #[test]
    fn test_multiple_mode_keeps_duplicates() {
        let result = match_arg(["a", "aa"], ["aa", "b"], true).unwrap();
        assert_eq!(result, many(&["aa", "aa"]));
    }

    #[test]
    fn test_empty_choices_rejected() {
        let result = match_arg("a", Vec::<String>::new(), false);
        assert!(matches!(
            result,
            Err(Error::InvalidArgument(InvalidArgument::EmptyChoices))
        ));
        // Choices are checked before the candidate.
        assert!(match_arg(None, Vec::<&str>::new(), false).is_err());
    }

    #[test]
    fn test_sequence_of_empty_string_matches_everything() {
        let err = match_error(match_arg(vec![""], ["aa", "ab"], false));
        assert_eq!(err.match_count(), 2);
    }

    #[test]
    fn test_literal_mode_ignores_metacharacters() {
        let matcher = ArgMatcher::new(["abc", "a.c"]).unwrap();
        assert_eq!(matcher.resolve("a.").unwrap(), one("a.c"));
        assert!(matcher.resolve("(").is_err());
    }

    #[test]
    fn test_regex_mode() {
        let matcher = ArgMatcher::new(["abc", "abd", "xyz"])
            .unwrap()
            .mode(MatchMode::Regex);
        assert_eq!(matcher.resolve("x.z").unwrap(), one("xyz"));
        assert_eq!(matcher.resolve("ab[c]").unwrap(), one("abc"));

        let err = match_error(matcher.resolve(".*"));
        assert_eq!(err.match_count(), 3);
    }

    #[test]
    fn test_regex_mode_is_start_anchored() {
        let matcher = ArgMatcher::new(["abc", "bcd"])
            .unwrap()
            .mode(MatchMode::Regex);
        assert_eq!(matcher.resolve("bc").unwrap(), one("bcd"));
    }

    #[test]
    fn test_regex_mode_invalid_pattern() {
        let matcher = ArgMatcher::new(["abc"]).unwrap().mode(MatchMode::Regex);
        let result = matcher.resolve("a(");
        assert!(matches!(
            result,
            Err(Error::InvalidArgument(InvalidArgument::Pattern { ref pattern, .. }))
                if pattern == "a("
        ));
    }

    #[test]
    fn test_default_choice_accessor() {
        let matcher = ArgMatcher::new(vec!["first", "second"]).unwrap();
        assert_eq!(matcher.default_choice(), "first");
        assert_eq!(matcher.choices().len(), 2);
    }

    #[test]
    fn test_byte_choices() {
        let choices: [&[u8]; 2] = [b"aa", b"ab"];
        assert_eq!(
            match_arg_bytes(&b"ab"[..], choices, false).unwrap(),
            Matched::One(b"ab".to_vec())
        );
        assert_eq!(
            match_arg_bytes(None, choices, false).unwrap(),
            Matched::One(b"aa".to_vec())
        );
    }

    #[test]
    fn test_byte_errors_render_decoded() {
        let choices: [&[u8]; 2] = [b"aa", b"ab"];
        let err = match_arg_bytes(&b"a"[..], choices, false).unwrap_err();
        assert_eq!(err.to_string(), "Too many matches (2), found 'aa', 'ab'");

        let err = match_arg_bytes(&b"z"[..], choices, false).unwrap_err();
        assert_eq!(
            err.as_match_error().and_then(MatchError::items),
            Some(&["aa".to_string(), "ab".to_string()][..])
        );
    }

    #[test]
    fn test_byte_regex_mode() {
        let choices: [&[u8]; 2] = [b"\xffa", b"\xffb"];
        let matcher = ArgMatcher::new(choices).unwrap().mode(MatchMode::Regex);
        assert_eq!(
            matcher.resolve(&b"\xff[b]"[..]).unwrap(),
            Matched::One(b"\xffb".to_vec())
        );
    }

    #[test]
    fn test_byte_regex_escaped_non_ascii_byte() {
        let choices: [&[u8]; 2] = [b"\xff", b"\\\xff"];
        let matcher = ArgMatcher::new(choices).unwrap().mode(MatchMode::Regex);
        assert_eq!(
            matcher.resolve(&b"\\\xff"[..]).unwrap(),
            Matched::One(b"\xff".to_vec())
        );
    }
}

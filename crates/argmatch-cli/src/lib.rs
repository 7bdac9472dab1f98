pub mod cli;
pub mod output;

use argmatch::{ArgMatcher, Candidate, Error, MatchMode, Matched};
use cli::Cli;

/// Process exit code for a match error (no match or too many).
pub const EXIT_NO_MATCH: i32 = 1;
/// Process exit code for malformed input; clap usage errors use it too.
pub const EXIT_INVALID: i32 = 2;

/// Resolve the command line's candidates against its choices.
pub fn resolve(cli: &Cli) -> argmatch::Result<Matched<String>> {
    let mode = if cli.regex {
        MatchMode::Regex
    } else {
        MatchMode::Literal
    };
    let matcher = ArgMatcher::new(cli.choices.clone())?
        .multiple(cli.multiple)
        .mode(mode);

    // A single word on the command line is a bare value, so "" means absent.
    let candidate = match cli.candidates.as_slice() {
        [single] => Candidate::one(single.clone()),
        all => Candidate::many(all.iter().cloned()),
    };
    matcher.resolve(candidate)
}

pub fn exit_code(error: &Error) -> i32 {
    match error {
        Error::Match(_) => EXIT_NO_MATCH,
        Error::InvalidArgument(_) => EXIT_INVALID,
    }
}

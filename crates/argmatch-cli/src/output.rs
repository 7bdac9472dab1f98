use argmatch::{Error, InvalidArgument, MatchError, Matched};
use serde_json::{json, Value};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub struct Output {
    stdout: StandardStream,
    stderr: StandardStream,
    json: bool,
}

impl Output {
    pub fn new(stdout_color: bool, stderr_color: bool, json: bool) -> Self {
        Self {
            stdout: StandardStream::stdout(color_choice(stdout_color)),
            stderr: StandardStream::stderr(color_choice(stderr_color)),
            json,
        }
    }

    pub fn print_matched(&mut self, matched: &Matched<String>) -> io::Result<()> {
        if self.json {
            writeln!(self.stdout, "{}", matched_json(matched))?;
        } else {
            for value in matched.as_slice() {
                writeln!(self.stdout, "{}", value)?;
            }
        }
        self.stdout.flush()
    }

    pub fn print_error(&mut self, error: &Error) -> io::Result<()> {
        if self.json {
            writeln!(self.stdout, "{}", error_json(error))?;
            return self.stdout.flush();
        }

        self.stderr
            .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(self.stderr, "error:")?;
        self.stderr.reset()?;
        writeln!(self.stderr, " {}", error)?;

        if let Error::InvalidArgument(InvalidArgument::Pattern { .. }) = error {
            self.stderr.set_color(ColorSpec::new().set_dimmed(true))?;
            writeln!(self.stderr, "  (drop --regex to match candidates literally)")?;
            self.stderr.reset()?;
        }
        self.stderr.flush()
    }
}

fn color_choice(color: bool) -> ColorChoice {
    if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

pub fn matched_json(matched: &Matched<String>) -> Value {
    json!({ "matched": matched.as_slice() })
}

pub fn error_json(error: &Error) -> Value {
    match error {
        Error::Match(e) => match_error_json(e),
        Error::InvalidArgument(e) => json!({
            "error": "invalid_argument",
            "message": e.to_string(),
        }),
    }
}

fn match_error_json(error: &MatchError) -> Value {
    let kind = if error.is_no_match() {
        "no_match"
    } else {
        "too_many_matches"
    };
    json!({
        "error": kind,
        "match_count": error.match_count(),
        "items": error.items(),
        "message": error.describe(),
    })
}

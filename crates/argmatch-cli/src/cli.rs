use clap::Parser;
use stderrlog::LogLevelNum;

#[derive(Parser)]
#[command(
    name = "argmatch",
    about = "Resolve a value against a set of choices by partial matching",
    version
)]
pub struct Cli {
    /// Values to validate; the first choice is printed when none is given
    pub candidates: Vec<String>,

    /// Permissible values, in order (repeatable or comma separated)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub choices: Vec<String>,

    /// Allow several candidates and several matches
    #[arg(short, long)]
    pub multiple: bool,

    /// Treat candidates as regular expressions anchored at the start
    #[arg(short, long)]
    pub regex: bool,

    /// Print the result or the match error as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Silence log messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Log matching decisions (-v, -vv, -vvv, -vvvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> LogLevelNum {
        match self.verbose {
            0 => LogLevelNum::Error,
            1 => LogLevelNum::Warn,
            2 => LogLevelNum::Info,
            3 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        }
    }

    pub fn setup_logging(&self) -> Result<(), log::SetLoggerError> {
        stderrlog::new()
            .module("argmatch")
            .module("argmatch_cli")
            .quiet(self.quiet)
            .verbosity(self.log_level())
            .init()
    }
}

use argmatch_cli::cli::Cli;
use argmatch_cli::output::Output;
use argmatch_cli::{exit_code, resolve};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Reset SIGPIPE handler to default (terminate) so piping to head/tail works correctly
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    let cli = Cli::parse();
    cli.setup_logging()?;

    let stdout_color = !cli.no_color && atty::is(atty::Stream::Stdout);
    let stderr_color = !cli.no_color && atty::is(atty::Stream::Stderr);
    let mut output = Output::new(stdout_color, stderr_color, cli.json);

    match resolve(&cli) {
        Ok(matched) => {
            log::info!("resolved to {} value(s)", matched.len());
            output.print_matched(&matched)?;
            Ok(())
        }
        Err(e) => {
            output.print_error(&e)?;
            std::process::exit(exit_code(&e));
        }
    }
}

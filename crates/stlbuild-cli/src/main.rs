use clap::Parser;
use miette::{IntoDiagnostic, Result};
use stlbuild_core::{host_name, BuildConfig, Composer};

/// Builds the STL viewer with the compiler and libraries of the host platform.
///
/// Takes no arguments: the previous `stlviewer` binary in the current
/// directory is removed, the compiler command is printed and then run.
/// An optional `stlbuild.toml` in the current directory overrides the
/// default module, library and framework lists.
#[derive(Parser)]
#[command(name = "stlbuild")]
#[command(author, version)]
struct Cli {}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let Cli {} = Cli::parse();

    let cwd = std::env::current_dir().into_diagnostic()?;
    let config = BuildConfig::load(&cwd)?;
    let system = host_name();
    log::debug!("detected platform {}", system);

    let outcome = Composer::new(config).build(&cwd, &system)?;

    std::process::exit(outcome.exit_code);
}

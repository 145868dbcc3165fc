use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{Generator, generate};
use colored::Colorize;
use std::io;
use std::process;
use sweep::cli::{Cli, Commands};
use sweep::output::{self, Verbosity};
use sweep::{ScanError, SweepContext, commands};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        if let Some(hint) = hint_for(&e) {
            eprintln!("{} {}", "hint:".yellow().bold(), hint);
        }
        process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "sweep=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ScanError>())
        .and_then(|scan_err| match scan_err {
            ScanError::NotFound { .. } => Some("check that the path exists and is a directory"),
            ScanError::PermissionDenied { .. } => {
                Some("check that you have permission to list every directory in the tree")
            }
            ScanError::InvalidPattern { .. } => {
                Some("patterns use the Rust regex dialect, escape literal dots as \\.")
            }
            ScanError::Io { .. } => None,
        })
}

fn run(cli: Cli) -> Result<()> {
    if cli.quiet {
        output::set_verbosity(Verbosity::Quiet);
    } else if cli.verbose {
        output::set_verbosity(Verbosity::Verbose);
    }

    match cli.command {
        Commands::Find(args) => {
            let ctx = SweepContext::new(args.root.clone(), cli.config)?;
            commands::find::execute(&ctx, &args.into())?;
        }
        Commands::Clean {
            root,
            dry_run,
            force,
        } => {
            let ctx = SweepContext::new(root, cli.config)?;
            commands::clean::execute(&ctx, dry_run, force)?;
        }
        Commands::Version { file } => {
            commands::version::execute(&file)?;
        }
        Commands::Config { root, key } => {
            let ctx = SweepContext::new(root, cli.config)?;
            commands::config::execute(&ctx, key.as_deref())?;
        }
        Commands::Completion { shell } => {
            print_completions(shell, &mut Cli::command());
        }
    }

    Ok(())
}

fn print_completions<G: Generator>(g: G, cmd: &mut clap::Command) {
    generate(g, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

//! Vexim CLI entry point.

use clap::Parser;
use std::process::ExitCode;
use vx::cli::commands;
use vx::cli::{Cli, Commands, OutputFormat};
use vx::error::Error;

/// Rewrite named flags to positional args for muscle-memory ergonomics.
///
/// People coming from form-style tools naturally type `--model "adder"`
/// instead of positional `"adder"`. This preprocessor transparently
/// converts known flag patterns so both forms work.
fn preprocess_args(args: impl Iterator<Item = String>) -> Vec<String> {
    // Flags that shadow positional args get stripped, keeping their
    // value. Named flags like --category already work via clap.
    const POSITIONAL_ALIASES: &[&str] = &[
        "--model", // add
        "--name",  // add
        "--price", // add
        "--id",    // remove
        "--label", // category add
        "--value", // category remove
    ];

    let mut result = Vec::new();
    let mut iter = args.peekable();

    while let Some(arg) = iter.next() {
        if POSITIONAL_ALIASES.contains(&arg.as_str()) {
            // Strip the flag, keep the value
            if let Some(value) = iter.next() {
                result.push(value);
            }
        } else if let Some(flag) = POSITIONAL_ALIASES
            .iter()
            .find(|f| arg.starts_with(&format!("{}=", f)))
        {
            // Handle --flag=value form
            let value = arg[flag.len() + 1..].to_string();
            result.push(value);
        } else {
            result.push(arg);
        }
    }

    result
}

fn main() -> ExitCode {
    let args = preprocess_args(std::env::args());
    let cli = Cli::parse_from(args);

    if cli.silent {
        vx::SILENT.store(true, std::sync::atomic::Ordering::Relaxed);
    }
    if cli.dry_run {
        vx::DRY_RUN.store(true, std::sync::atomic::Ordering::Relaxed);
    }
    if cli.format == OutputFormat::Csv {
        vx::CSV_OUTPUT.store(true, std::sync::atomic::Ordering::Relaxed);
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Set up tracing based on verbosity
    init_tracing(cli.verbose, cli.quiet);

    // Resolve effective JSON mode: --json OR --format json OR non-TTY stdout
    let json = cli.json
        || cli.format == OutputFormat::Json
        || !std::io::IsTerminal::is_terminal(&std::io::stdout());

    // Run the command and handle errors
    match run(&cli, json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if json {
                eprintln!("{}", e.to_structured_json());
            } else if !cli.quiet {
                if let Some(hint) = e.hint() {
                    eprintln!("Error: {e}\n  Hint: {hint}");
                } else {
                    eprintln!("Error: {e}");
                }
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    if quiet {
        return;
    }

    // Honor RUST_LOG if set, otherwise use verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: &Cli, json: bool) -> Result<(), Error> {
    match &cli.command {
        Commands::Add {
            model,
            name,
            price,
            category,
        } => commands::garage::execute_add(model, name, price, category, cli.data_dir.as_ref(), json),

        Commands::List => commands::garage::execute_list(cli.data_dir.as_ref(), json),

        Commands::Remove { id } => {
            commands::garage::execute_remove(id, cli.data_dir.as_ref(), json)
        }

        Commands::Clear => commands::garage::execute_clear(cli.data_dir.as_ref(), json),

        Commands::Category { command } => {
            commands::category::execute(command, cli.data_dir.as_ref(), json)
        }

        Commands::Sql { copy, out } => {
            commands::sql::execute(*copy, out.as_ref(), cli.data_dir.as_ref(), json)
        }

        Commands::Version => commands::version::execute(json),

        Commands::Completions { shell } => commands::completions::execute(shell),
    }
}

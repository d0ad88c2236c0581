use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;
mod output;
mod records;

use cli::{Cli, Commands, ConfigCommands};
use commands::config::{load_config, ConfigSetOptions};
use commands::notes::NotesOptions;
use commands::tags::TagsOptions;
use commands::{CommandContext, CommandError};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(text) => eprintln!("{text}"),
                    Err(_) => eprintln!("Error: {e}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            error_exit_code(&e)
        }
    }
}

/// Sets up tracing on stderr so JSON on stdout stays parseable.
///
/// `RUST_LOG` wins over the verbosity flags.
fn init_logging(cli: &Cli) {
    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .init();
}

fn run(cli: &Cli) -> commands::Result<()> {
    let explicit = cli.config.as_deref();
    let Some(command) = &cli.command else {
        if !cli.quiet {
            println!("ns: search exported notes and tags. Run 'ns --help' for usage.");
        }
        return Ok(());
    };

    // Completions and config path never need a readable config file.
    match command {
        Commands::Completions { shell } => return Ok(commands::completions::execute(shell)?),
        Commands::Config {
            command: Some(ConfigCommands::Path),
        } => {
            let ctx = CommandContext::new(cli, &Default::default());
            return commands::config::execute_path(&ctx, explicit);
        }
        _ => {}
    }

    let config = load_config(explicit)?;
    let ctx = CommandContext::new(cli, &config);

    match command {
        Commands::Notes {
            file,
            query,
            deleted,
            untagged,
            tag,
            system_tag,
            title,
            exact,
            limit,
        } => {
            let opts = NotesOptions {
                file: file.clone(),
                query: query.clone(),
                deleted: *deleted,
                untagged: *untagged,
                tag: tag.clone(),
                system_tag: system_tag.clone(),
                title: title.clone(),
                exact: exact.clone(),
                limit: *limit,
            };
            commands::notes::execute(&ctx, &opts)
        }
        Commands::Tags { file, query, limit } => {
            let opts = TagsOptions {
                file: file.clone(),
                query: query.clone(),
                limit: *limit,
            };
            commands::tags::execute(&ctx, &opts)
        }
        Commands::Parse { query } => commands::parse::execute(&ctx, query),
        Commands::Complete { query, word, tag } => {
            commands::complete::execute(&ctx, query, word, *tag)
        }
        Commands::Config { command } => match command {
            None | Some(ConfigCommands::Show) => commands::config::execute_show(&ctx, explicit),
            Some(ConfigCommands::Set { key, value }) => {
                let opts = ConfigSetOptions {
                    key: key.clone(),
                    value: value.clone(),
                };
                commands::config::execute_set(&ctx, &opts, explicit)
            }
            Some(ConfigCommands::Path) => commands::config::execute_path(&ctx, explicit),
        },
        Commands::Completions { shell } => Ok(commands::completions::execute(shell)?),
    }
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the exit code for an error.
fn error_exit_code(e: &CommandError) -> ExitCode {
    match e {
        CommandError::Config(_) => ExitCode::from(5),
        CommandError::Io(_) => ExitCode::from(3),
        CommandError::Json(_) => ExitCode::from(1),
    }
}

use clap::Parser;
use kata::cli::{Cli, Commands};
use kata::exercises::user::UserOptions;
use kata::types::config::Config;
use kata::KataResult;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Erro: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> KataResult<()> {
    // Load configuration first (no logging yet); a broken file is an error
    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default_config()
    };

    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("kata={}", log_level)
            .parse()
            .unwrap_or_else(|_| "kata=info".parse().expect("fallback directive is valid")),
    );

    if config.general.log_format == "json" {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match cli.command {
        Commands::Multiply { numbers } => {
            kata::cli::commands::multiply(&numbers);
        }
        Commands::Sum { numbers } => {
            kata::cli::commands::sum(&numbers);
        }
        Commands::Map { by, numbers } => {
            kata::cli::commands::map_by(&numbers, by);
        }
        Commands::Reverse { text } => {
            kata::cli::commands::reverse(&text);
        }
        Commands::Factorial { n } => {
            kata::cli::commands::factorial_cmd(n)?;
        }
        Commands::Greet {
            username,
            name,
            email,
            password,
            hello_world,
        } => {
            let options = UserOptions {
                username,
                name,
                email,
                password,
            };
            kata::cli::commands::greet(options, hello_world, cli.json)?;
        }
        Commands::Memo { numbers } => {
            kata::cli::commands::memo(&numbers, &config, cli.json)?;
        }
        Commands::Init { path } => {
            kata::cli::commands::init(path)?;
        }
        Commands::Version => {
            kata::cli::commands::version();
        }
    }

    Ok(())
}

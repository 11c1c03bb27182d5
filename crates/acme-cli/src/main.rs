use std::process::ExitCode;

use acme_config::{
    config::{config_path, generate_default_config, set_config_path, Config},
    error::ConfigError,
};
use acme_core::{AcmeClient, AcmeResult};
use acme_utils::path::resolve_path;
use clap::Parser;
use cli::{Args, Commands};
use logging::setup_logging;
use plugin::{check_plugin, list_plugins};
use show::{show_action, show_certificate};
use status::display_status;
use tracing::{debug, info};
use utils::{set_flag, COLOR, ICONS};

mod cli;
mod logging;
mod plugin;
mod show;
mod status;
mod utils;

fn load_config() -> AcmeResult<Config> {
    let config = Config::new()?;
    set_flag(&ICONS, config.display().icons());
    Ok(config)
}

fn load_client() -> AcmeResult<AcmeClient> {
    AcmeClient::from_config(load_config()?)
}

fn handle_cli() -> AcmeResult<ExitCode> {
    let args = Args::parse();

    setup_logging(&args);

    if args.no_color {
        set_flag(&COLOR, false);
    }

    if let Some(ref c) = args.config {
        let path = resolve_path(c).map_err(ConfigError::from)?;
        set_config_path(path);
    }

    debug!("using configuration {}", config_path().display());

    run(args.command)
}

fn run(command: Commands) -> AcmeResult<ExitCode> {
    match command {
        Commands::DefConfig => {
            generate_default_config()?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config => {
            let config = load_config()?;
            let content = toml::to_string_pretty(&config).map_err(ConfigError::from)?;
            info!("{}", content);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Status {
            check_certificates,
        } => Ok(display_status(&load_client()?, check_certificates)),
        Commands::Certificate {
            id,
        } => {
            show_certificate(&load_client()?, &id)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Action {
            uuid,
        } => {
            show_action(&load_client()?, &uuid)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Plugin {
            name,
        } => check_plugin(&load_client()?, &name),
        Commands::Plugins => {
            list_plugins(&load_client()?)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    match handle_cli() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::from(2)
        }
    }
}

use clap::Parser;
use lodash_compat::cli::dispatcher::Dispatcher;
use lodash_compat::cli::main_types::Cli;
use lodash_compat::storage::config::Config;
use lodash_compat::utils::logging::init_logging;
use lodash_compat::AppError;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();

    // Load Config
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            report(&AppError::from(err));
            std::process::exit(1);
        }
    };

    init_logging(cli.verbose.max(config.verbose));

    if let Some(config_dir) = &cli.config_dir {
        log::info!("Using config directory: {}", config_dir);
    }

    let mut dispatcher = Dispatcher::new(config, config_path, cli.format.map(Into::into));

    match dispatcher.dispatch(cli.command) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            report(&e);
            std::process::exit(1);
        }
    }
}

fn report(error: &AppError) {
    log::debug!("error severity: {:?}", error.severity());
    eprintln!("Error: {}", error);
    if let Some(hint) = error.troubleshooting_hint() {
        eprintln!("Hint: {}", hint);
    }
}

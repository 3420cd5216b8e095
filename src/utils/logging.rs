/// Map a `-v` count to an env_logger filter.
pub fn log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install env_logger. `RUST_LOG` takes precedence over the verbosity count.
pub fn init_logging(verbosity: u8) {
    let env = env_logger::Env::default().default_filter_or(log_level(verbosity));
    // A second initialization (tests, embedding) keeps the first logger.
    let _ = env_logger::Builder::from_env(env).try_init();
}

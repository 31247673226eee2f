//! Tracing setup — structured logging for the binary.

use cilin_core::config::ObservabilityConfig;
use cilin_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

/// Pick the log filter: `CILIN_LOG` wins, then `-v` flags, then the config.
pub fn filter_for(config: &ObservabilityConfig, verbose: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return filter;
    }
    match verbose {
        0 => EnvFilter::new(&config.log_level),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays parseable.
pub fn init_tracing(config: &ObservabilityConfig, verbose: u8) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter_for(config, verbose))
        .with_target(true)
        .with_writer(std::io::stderr);

    if config.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

//! Logging setup for the command-line runner.
//!
//! Installs a global `tracing` subscriber writing to stderr, so stdout stays
//! free for the tree and the prediction report. `RUST_LOG` overrides the
//! level chosen from the command-line verbosity.

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Level directive for `-v` repetitions; `quiet` wins over any verbosity.
pub fn filter_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_env_filter(verbose: u8, quiet: bool) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(filter_directive(verbose, quiet))?),
    }
}

pub fn init(verbose: u8, quiet: bool) -> Result<(), LoggingError> {
    let env_filter = build_env_filter(verbose, quiet)?;
    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let subscriber = Registry::default().with(env_filter).with(stderr_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    tracing::debug!(directive = filter_directive(verbose, quiet), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(filter_directive(0, false), "warn");
        assert_eq!(filter_directive(1, false), "info");
        assert_eq!(filter_directive(2, false), "debug");
        assert_eq!(filter_directive(3, false), "trace");
        assert_eq!(filter_directive(9, false), "trace");
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(filter_directive(0, true), "error");
        assert_eq!(filter_directive(3, true), "error");
    }

    #[test]
    fn every_directive_is_a_valid_filter() {
        for verbose in 0..4 {
            assert!(EnvFilter::try_new(filter_directive(verbose, false)).is_ok());
        }
    }
}

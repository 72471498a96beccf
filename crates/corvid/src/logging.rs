use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter for the given `-v` count. `--debug` implies at least `debug`.
pub fn default_directive(verbosity: u8, debug: bool) -> &'static str {
    match (verbosity, debug) {
        (0, false) => "warn",
        (1, false) => "info",
        (0..=2, _) => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over the flags.
pub fn init_tracing(verbosity: u8, debug: bool) -> eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity, debug)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(debug).with_writer(std::io::stderr).compact())
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize logging: {e}"))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_directive(0, false), "warn");
        assert_eq!(default_directive(1, false), "info");
        assert_eq!(default_directive(0, true), "debug");
        assert_eq!(default_directive(2, false), "debug");
        assert_eq!(default_directive(3, false), "trace");
        assert_eq!(default_directive(5, true), "trace");
    }
}

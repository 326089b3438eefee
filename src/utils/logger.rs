use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default directives when `RUST_LOG` is unset; verbose adds our debug events.
fn default_directives(verbose: bool) -> String {
    let crate_name = env!("CARGO_CRATE_NAME");
    if verbose {
        format!("{}=debug,info", crate_name)
    } else {
        format!("{}=info,warn", crate_name)
    }
}

/// Logs go to stderr so stdout only carries the run summary.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .try_init();

    if installed.is_err() {
        tracing::debug!("Global subscriber already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(false), "basecamp_milestones=info,warn");
        assert_eq!(default_directives(true), "basecamp_milestones=debug,info");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_cli_logger(false);
        init_cli_logger(true);
    }
}

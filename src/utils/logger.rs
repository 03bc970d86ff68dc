use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directives used when `RUST_LOG` is unset. Monitoring output is logged at
/// `info`, so the quiet default must keep that level.
fn fallback_directives(verbose: bool) -> &'static str {
    if verbose {
        "loose_compare=debug,info"
    } else {
        "loose_compare=info"
    }
}

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_directives(verbose)))
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Structured logs for machine consumers, one JSON object per line on stderr.
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .json(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_default_keeps_info_output() {
        let quiet = EnvFilter::new(fallback_directives(false));
        assert_eq!(quiet.max_level_hint(), Some(tracing::level_filters::LevelFilter::INFO));
        assert!(fallback_directives(true).contains("loose_compare=debug"));
    }
}

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directives for the library target and the `fittrack` binary target.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "fittrack_client=debug,fittrack=debug,info"
    } else {
        "fittrack_client=warn,fittrack=warn"
    }
}

pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    // Diagnostics go to stderr so `--json` output stays clean on stdout.
    tracing_subscriber::registry()
        .with(filter)
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

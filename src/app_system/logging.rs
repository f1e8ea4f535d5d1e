use tracing_subscriber::EnvFilter;

/// Configure tracing once at application startup.
///
/// Verbosity is controlled with `RUST_LOG` and defaults to `warn`, so an
/// interactive run only shows rejected stock changes. Logs are written to
/// stderr and never mix with the prompts on stdout.
///
/// ```bash
/// RUST_LOG=debug cargo run    # Show lookups and session steps
/// RUST_LOG=info cargo run     # Show stock changes
/// ```
pub fn setup_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber. `RUST_LOG` wins unless `verbose` is set, in
/// which case the core crate logs at debug level.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("kana_core=debug,kana_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second init (tests, repeated calls) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(filter)
        .try_init();
}

use tracing_subscriber::EnvFilter;

// JSON logs without ANSI colors or timestamps, CloudWatch adds the ingestion time.
// RUST_LOG overrides the default info level.
pub fn setup_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .json()
        .try_init();
}

use std::{io::IsTerminal, path::Path};

/// Initializes a tracing subscriber filtered by `RUST_LOG`.
pub fn subscriber() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Loads a `.env` file from the current directory, if there is one.
///
/// Variables already present in the environment take precedence.
pub fn load_dotenv() {
    let path = Path::new(".env");
    if !path.exists() {
        return;
    }
    if let Err(err) = dotenvy::from_path(path) {
        debug!(%err, "failed to load .env");
    }
}

/// Disables colors when `NO_COLOR` is set or stderr is not a terminal.
pub fn enable_paint() {
    if !std::io::stderr().is_terminal() || std::env::var_os("NO_COLOR").is_some() {
        yansi::disable();
    }
}

use tracing::{debug, Level};

/// Map a `-v` count to a maximum log level; warnings are always shown.
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install a stderr `fmt` subscriber so stdout carries only the console
/// protocol. Does nothing if a subscriber is already set.
pub fn init(verbose: u8) {
    let installed = tracing_subscriber::fmt()
        .with_max_level(level_for(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if let Err(err) = installed {
        debug!(error = %err, "keeping existing tracing subscriber");
    }
}

use clap::Parser;
use tracing_subscriber::EnvFilter;

use corsinator::cli::{self, Cli};
use corsinator::errors::CorsinatorError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Logs go to stderr; stdout carries the progress lines and the
    // completion message.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    match cli::scan::handle_scan(cli).await {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                CorsinatorError::Input(_) | CorsinatorError::Csv(_) => 2,
                CorsinatorError::Chart(_) | CorsinatorError::Io(_) => 3,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}

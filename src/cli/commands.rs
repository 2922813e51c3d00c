use clap::Parser;

#[derive(Parser)]
#[command(
    name = "corsinator",
    version,
    long_version = concat!(
        env!("CARGO_PKG_VERSION"),
        " (built ",
        env!("BUILD_TIMESTAMP"),
        ")"
    ),
    about = "CORS misconfiguration scanner"
)]
pub struct Cli {
    /// Path to input CSV file (first column is the target URL)
    pub input: String,

    /// Request timeout in seconds
    #[arg(short = 't', long = "timeout", default_value = "5")]
    pub timeout: u64,

    /// Report output path
    #[arg(short, long, default_value = "report.html")]
    pub output: String,

    /// Chart image output path
    #[arg(long, default_value = "chart.png")]
    pub chart: String,

    /// Also write scan results to this path as JSON
    #[arg(long)]
    pub json: Option<String>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

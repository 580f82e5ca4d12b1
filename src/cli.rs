use clap::Parser;
use reputation_recon::application::dto::OutputFormat;
use std::path::PathBuf;

/// Assess the security reputation of a software product
#[derive(Parser, Debug)]
#[command(name = "reputation-recon")]
#[command(version)]
#[command(
    about = "Assess the security reputation of a software product",
    long_about = "Submits a product name, URL, or SHA-1 digest to a trust evaluation backend, \
                  renders the returned security report, and lists recent assessments."
)]
pub struct Args {
    /// Product name, URL, or SHA-1 digest to assess
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Base URL of the evaluation backend [default: http://localhost:5000]
    #[arg(short = 'u', long, env = "RECON_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Output format: text, markdown or json [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// List recent assessments after the report
    #[arg(long)]
    pub history: bool,

    /// Re-display the Nth most recent assessment (1-based) without a new request
    #[arg(short, long, value_name = "N", conflicts_with = "query")]
    pub select: Option<usize>,

    /// Exit with code 1 when the trust score is below this value (0-100)
    #[arg(long, value_name = "SCORE")]
    pub min_score: Option<u32>,

    /// Request timeout in seconds [default: 10]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to a config file (defaults to ./reputation-recon.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Only print the report and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

use clap::Parser;

/// CLI arguments for athar
#[derive(Parser, Debug)]
#[command(name = "athar")]
#[command(about = "Athar Assistant - chat with the university information bot")]
#[command(version)]
pub struct Cli {
    /// Backend base URL (e.g., http://localhost:5000); overrides --environment
    #[arg(long, value_name = "URL", env = "ATHAR_API_URL")]
    pub api_url: Option<String>,

    /// Backend deployment to talk to (production, local)
    /// Default: local for debug builds, production for release builds
    #[arg(long, short = 'e', value_name = "ENV", env = "ATHAR_ENV")]
    pub environment: Option<String>,

    /// Enable verbose debug output (HTTP requests and responses)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Do not probe the backend's health endpoint at startup
    #[arg(long)]
    pub skip_health_check: bool,

    /// Send a single message, print the reply and exit
    #[arg(long, short = 'm', value_name = "TEXT")]
    pub message: Option<String>,
}

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "github-profile-analyzer")]
#[command(about = "GitHub Profile Analyzer - Languages, top repositories and README keywords for a GitHub account")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub github: GitHubArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args)]
pub struct GitHubArgs {
    /// GitHub API token, sent as a bearer credential
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: String,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    pub github_api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "GITHUB_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze one account and print the dashboard
    Analyze {
        /// GitHub username
        username: String,

        /// Directory the report file is written to
        #[arg(long, short, default_value = ".")]
        output_dir: PathBuf,

        /// Skip writing the report file
        #[arg(long)]
        no_report: bool,
    },

    /// Serve the dashboard over HTTP
    Serve {
        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = 8080)]
        port: u16,
    },
}

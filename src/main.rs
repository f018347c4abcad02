use anyhow::Context;
use clap::Parser;
use colored::*;
use github_profile_analyzer::cli::{Cli, Command, GitHubArgs};
use github_profile_analyzer::config::{ApiToken, GitHubConfig};
use github_profile_analyzer::dashboard;
use github_profile_analyzer::github::GitHubClient;
use github_profile_analyzer::models::AnalysisOutcome;
use github_profile_analyzer::pipeline::analyze_profile;
use github_profile_analyzer::server::{start_server, AppState};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn build_client(args: &GitHubArgs) -> anyhow::Result<GitHubClient> {
    let token = ApiToken::new(args.github_token.clone())?;
    let config = GitHubConfig::new(token)
        .with_api_base_url(&args.github_api_url)
        .context("invalid GitHub API URL")?
        .with_timeout(Duration::from_secs(args.timeout_secs));

    GitHubClient::new(config).context("failed to build GitHub client")
}

async fn analyze(
    client: &GitHubClient,
    username: &str,
    output_dir: &Path,
    no_report: bool,
) -> anyhow::Result<ExitCode> {
    if username.trim().is_empty() {
        println!("{}", dashboard::EMPTY_USERNAME_MESSAGE.yellow());
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", "Fetching and analyzing data...".dimmed());

    let analysis = match analyze_profile(client, username).await? {
        AnalysisOutcome::Found(analysis) => analysis,
        AnalysisOutcome::AccountNotFound => {
            eprintln!("{}", dashboard::NOT_FOUND_MESSAGE.red());
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("\n{}", dashboard::render_terminal(&analysis));

    if !no_report {
        let path = output_dir.join(analysis.report_filename());
        std::fs::write(&path, analysis.report())
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("✅ Report saved to {}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = build_client(&cli.github)?;

    match cli.command {
        Command::Analyze {
            username,
            output_dir,
            no_report,
        } => analyze(&client, &username, &output_dir, no_report).await,
        Command::Serve { port } => {
            println!("{}", "GitHub Profile Analyzer".bold().green());
            println!("{}\n", "=".repeat(50).dimmed());

            let state = AppState {
                source: Arc::new(client),
            };
            start_server(state, port).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

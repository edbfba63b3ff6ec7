//! Command-line project submission: sends a brief to the proxy and prints the result.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jenga_api::client::SubmissionClient;
use jenga_api::models::brief::ProjectBrief;

#[derive(Debug, Parser)]
#[command(name = "jenga-submit", version, about = "Request AI recommendations for a project")]
struct Cli {
    /// Project name
    #[arg(long, default_value = "")]
    name: String,

    /// What the project should achieve
    #[arg(long, default_value = "")]
    goal: String,

    /// Free-text context for the recommendation
    #[arg(long, default_value = "")]
    description: String,

    /// Base URL of the recommendation proxy
    #[arg(long, env = "JENGA_SERVER", default_value = "http://localhost:4000")]
    server: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,

    /// Print the raw JSON result instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let brief = ProjectBrief::new(cli.name, cli.goal, cli.description);

    let client = SubmissionClient::new(cli.server, Duration::from_secs(cli.timeout_secs))?;
    let result = client.submit_or_fallback(&brief).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("[{}]\n{}", result.source.as_str(), result.text);
    }
    Ok(())
}

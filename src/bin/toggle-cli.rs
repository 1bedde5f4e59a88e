use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "toggle-cli")]
#[command(about = "Flip and probe failover backends", long_about = None)]
struct Cli {
    /// Base URL of the backend (or of the proxy in front of it).
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mark an instance active
    Activate { target: String },
    /// Mark an instance inactive (its API starts answering 503)
    Deactivate { target: String },
    /// Send a raw `active` value
    Set { target: String, value: String },
    /// Request an API path and print the result
    Probe {
        #[arg(long, default_value = "/api")]
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Activate { target } => toggle(&client, base, &target, "true").await?,
        Commands::Deactivate { target } => toggle(&client, base, &target, "false").await?,
        Commands::Set { target, value } => toggle(&client, base, &target, &value).await?,
        Commands::Probe { path } => client.get(format!("{base}{path}")).send().await?,
    };

    print_response(res).await
}

async fn toggle(
    client: &reqwest::Client,
    base: &str,
    target: &str,
    active: &str,
) -> Result<reqwest::Response, reqwest::Error> {
    client
        .get(format!("{base}/control/toggle"))
        .query(&[("target", target), ("active", active)])
        .send()
        .await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let body = res.text().await?;
    println!("{} {}", status.as_u16(), body.trim_end());
    Ok(())
}

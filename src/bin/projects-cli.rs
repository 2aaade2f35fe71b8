use clap::{Parser, Subcommand};
use reqwest::{Client, RequestBuilder};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "projects-cli")]
#[command(about = "Command-line client for the house projects API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every project
    List,
    /// Show one project
    Get { title: String },
    /// Create a project
    Create {
        title: String,
        #[arg(long, default_value_t = 0.0)]
        cost: f64,
        #[arg(long, default_value_t = 0)]
        duration_days: i64,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Replace the cost, duration and description of a project
    Update {
        title: String,
        #[arg(long, default_value_t = 0.0)]
        cost: f64,
        #[arg(long, default_value_t = 0)]
        duration_days: i64,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Delete a project
    Delete { title: String },
    /// Check service status
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::List => client.get(format!("{}/projects", base)),
        Commands::Get { title } => client.get(project_url(base, &title)?),
        Commands::Create {
            title,
            cost,
            duration_days,
            description,
        } => client.post(format!("{}/projects", base)).json(&json!({
            "title": title,
            "cost": cost,
            "duration_days": duration_days,
            "description": description,
        })),
        Commands::Update {
            title,
            cost,
            duration_days,
            description,
        } => client.put(project_url(base, &title)?).json(&json!({
            "title": title,
            "cost": cost,
            "duration_days": duration_days,
            "description": description,
        })),
        Commands::Delete { title } => client.delete(project_url(base, &title)?),
        Commands::Status => client.get(format!("{}/status", base)),
    };

    send(request).await
}

/// URL of a single project, with the title percent-encoded as one path segment.
fn project_url(base: &str, title: &str) -> Result<reqwest::Url, Box<dyn std::error::Error>> {
    let mut url = reqwest::Url::parse(&format!("{}/projects/", base))?;
    url.path_segments_mut()
        .map_err(|_| "service URL cannot be a base")?
        .pop_if_empty()
        .push(title);
    Ok(url)
}

async fn send(request: RequestBuilder) -> Result<(), Box<dyn std::error::Error>> {
    let res = request.send().await?;
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if !text.is_empty() {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    if text.is_empty() {
        println!("{}", status);
        return Ok(());
    }

    let json: Value = serde_json::from_str(&text)?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sketch-cli")]
#[command(about = "Drive a running sketch-mint studio", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show wallet session and mint state
    Status,
    /// Retry the wallet connection
    Reconnect,
    /// Select the stroke color (#rrggbb)
    Color { color: String },
    /// Draw a straight stroke
    Line { x1: i32, y1: i32, x2: i32, y2: i32 },
    /// Replay a JSON array of pointer events
    Replay { file: PathBuf },
    /// Clear the canvas
    Clear,
    /// Save the current drawing as PNG
    Export { out: PathBuf },
    /// Mint the current drawing
    Mint,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let api = |path: &str| format!("{}/api{}", cli.url.trim_end_matches('/'), path);

    match cli.command {
        Commands::Status => {
            let res = client.get(api("/session")).send().await?;
            print_response(res).await?;
        }
        Commands::Reconnect => {
            let res = client.post(api("/session/reconnect")).send().await?;
            print_response(res).await?;
        }
        Commands::Color { color } => {
            let res = client
                .put(api("/canvas/color"))
                .json(&json!({ "color": color }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Line { x1, y1, x2, y2 } => {
            let events = [
                json!({ "kind": "down", "x": x1, "y": y1 }),
                json!({ "kind": "move", "x": x2, "y": y2 }),
                json!({ "kind": "up" }),
            ];
            send_events(&client, &api("/canvas/pointer"), &events).await?;
        }
        Commands::Replay { file } => {
            let content = std::fs::read_to_string(&file)?;
            let events: Vec<Value> = serde_json::from_str(&content)?;
            send_events(&client, &api("/canvas/pointer"), &events).await?;
        }
        Commands::Clear => {
            let res = client.delete(api("/canvas")).send().await?;
            print_response(res).await?;
        }
        Commands::Export { out } => {
            let res = client.get(api("/canvas.png")).send().await?;
            if !res.status().is_success() {
                return print_response(res).await;
            }
            let bytes = res.bytes().await?;
            std::fs::write(&out, &bytes)?;
            println!("Wrote {} bytes to {}", bytes.len(), out.display());
        }
        Commands::Mint => {
            println!("Minting, waiting for confirmation...");
            let res = client.post(api("/mint")).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn send_events(
    client: &reqwest::Client,
    url: &str,
    events: &[Value],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut painted = 0usize;
    for event in events {
        let res = client.post(url).json(event).send().await?;
        if !res.status().is_success() {
            return print_response(res).await;
        }
        let outcome: Value = res.json().await?;
        if outcome["painted"].as_bool().unwrap_or(false) {
            painted += 1;
        }
    }
    println!("Sent {} pointer events, {} painted", events.len(), painted);
    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if status == reqwest::StatusCode::NO_CONTENT {
        println!("OK");
        return Ok(());
    }

    let text = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: studio API returned status {}", status);
    }
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}

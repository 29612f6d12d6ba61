//! Interactive tourist-guide CLI.
//!
//! Reads one city or place query per turn, forwards it with the running
//! conversation to a local Ollama backend, and prints the guide's reply.
//!
//! # Examples
//!
//! ```sh
//! # Chat against a local Ollama install with the default model
//! wayfarer-guide
//!
//! # Pick a different model and enable debug logging
//! wayfarer-guide --model llama3.2:3b --verbose
//! ```

use std::io::{self, Write};

use clap::Parser;
use wayfarer_guide::prompt::{GREETING, tour_guide_persona};
use wayfarer_rs::{ChatConfig, OllamaClient, Session, session};

/// Interactive tourist-guide chat over a local Ollama backend.
#[derive(Parser)]
#[command(name = "wayfarer-guide")]
struct Cli {
    /// Model to use for completions.
    #[arg(long, default_value = wayfarer_rs::DEFAULT_MODEL)]
    model: String,

    /// Backend address. Falls back to $OLLAMA_HOST, then the local default.
    #[arg(long)]
    base_url: Option<String>,

    /// Sampling temperature in [0, 1].
    #[arg(long, default_value_t = wayfarer_rs::DEFAULT_TEMPERATURE)]
    temperature: f32,

    /// Retries for transient backend failures.
    #[arg(long, default_value_t = 0)]
    retries: u32,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> wayfarer_rs::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let base_url = cli
        .base_url
        .or_else(|| std::env::var("OLLAMA_HOST").ok())
        .unwrap_or_else(|| wayfarer_rs::DEFAULT_BASE_URL.to_string());

    let config = ChatConfig::new(cli.model, base_url)
        .with_temperature(cli.temperature)
        .with_retries(cli.retries);

    let client = match OllamaClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: failed to create completion client: {e}");
            std::process::exit(1);
        }
    };

    let persona = tour_guide_persona();
    let mut session = Session::with_greeting(&client, GREETING);

    loop {
        print!("Enter a city name or ask about a place (or type 'exit' to quit): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            // End of input stream.
            println!();
            println!("Goodbye, traveler! Safe journeys! 🛫");
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if session::is_exit(input) {
            println!("Goodbye, traveler! Safe journeys! 🛫");
            break;
        }

        match session.turn(&persona, input).await {
            Ok(reply) => println!("\nTour Guide: {reply}\n"),
            Err(e) => eprintln!("\nError: {e}\n"),
        }
    }

    Ok(())
}

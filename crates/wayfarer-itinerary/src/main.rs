//! Interactive itinerary-planner CLI.
//!
//! Reads a destination and a trip length per turn, forwards a structured
//! planning request with the running conversation to a local Ollama
//! backend, and prints the day-wise itinerary.
//!
//! # Examples
//!
//! ```sh
//! # Plan against a local Ollama install with the default model
//! wayfarer-itinerary
//!
//! # Pick a different model and allow retries on flaky connections
//! wayfarer-itinerary --model llama3.2:3b --retries 2
//! ```

use std::io::{self, Write};

use clap::Parser;
use wayfarer_itinerary::prompt::{
    GREETING, itinerary_persona, itinerary_request, parse_trip_length,
};
use wayfarer_rs::{ChatConfig, OllamaClient, Session, session};

/// Interactive day-wise itinerary planner over a local Ollama backend.
#[derive(Parser)]
#[command(name = "wayfarer-itinerary")]
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

    let mut session = Session::with_greeting(&client, GREETING);

    loop {
        print!("Enter the destination (or type 'exit' to quit): ");
        io::stdout().flush()?;

        let mut destination = String::new();
        if io::stdin().read_line(&mut destination)? == 0 {
            // End of input stream.
            println!();
            println!("Goodbye, traveler! Safe journeys! 🛫");
            break;
        }
        let destination = destination.trim();

        if destination.is_empty() {
            continue;
        }
        if session::is_exit(destination) {
            println!("Goodbye, traveler! Safe journeys! 🛫");
            break;
        }

        print!("Enter the number of days for the trip: ");
        io::stdout().flush()?;

        let mut days_input = String::new();
        if io::stdin().read_line(&mut days_input)? == 0 {
            println!();
            println!("Goodbye, traveler! Safe journeys! 🛫");
            break;
        }

        // Rejected input advances nothing: back to the destination prompt
        // with the transcript untouched.
        let Ok(num_days) = parse_trip_length(&days_input) else {
            println!("Please enter a valid number for days.");
            continue;
        };

        let persona = match itinerary_persona(destination, num_days) {
            Ok(persona) => persona,
            Err(e) => {
                eprintln!("Error: {e}");
                continue;
            }
        };

        let request = itinerary_request(destination, num_days);
        match session.turn(&persona, &request).await {
            Ok(reply) => println!("\nDay-wise Itinerary:\n{reply}\n"),
            Err(e) => eprintln!("\nError: {e}\n"),
        }
    }

    Ok(())
}

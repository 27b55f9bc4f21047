//! Interactive travel assistant REPL.
//!
//! Run with: cargo run -p sonar-assistant --example ask
//!
//! Requires `PERPLEXITY_API_KEY` in the environment or a .env file.

use std::io::{self, BufRead, Write};

use sonar_assistant::SonarAssistant;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let assistant = SonarAssistant::from_env()?;

    println!("Welcome to TRACE Travel Assistant Bot! Ask me anything about your travel safety and plans.");
    println!("Type 'exit' to quit.");

    let stdin = io::stdin();
    loop {
        print!("You: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if matches!(question.to_lowercase().as_str(), "exit" | "quit") {
            println!("Thank you for using TRACE Travel Assistant. Safe travels!");
            break;
        }

        match assistant.converse("repl", question).await {
            Ok(answer) => println!("Bot: {}\n", answer),
            Err(err) => eprintln!("Error: {}\n", err),
        }
    }

    Ok(())
}

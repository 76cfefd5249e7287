//! Bedrock Assist - knowledge-base assistant over AWS Bedrock
//!
//! This is the CLI entry point for the bedrock-assist tool.
//! Run with: cargo run --bin bedrock-assist -- <command> <text...>

use bedrock_assist::{result_to_json, source_reference, AppSettings, AskOutcome, Assistant};
use std::env;
use tracing_subscriber::EnvFilter;
use std::io::{self, BufRead, Write};

const USAGE: &str = "Usage: bedrock-assist [classify|retrieve|generate|ask] <text...>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (ignore errors if file doesn't exist)
    let _ = dotenvy::dotenv();

    // Initialize tracing on stderr, RUST_LOG filtered
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let settings = AppSettings::from_env();

    // Banner on stderr keeps command output on stdout machine-readable
    print_banner(&settings);

    let assistant = Assistant::connect(settings).await;

    if args.len() < 2 {
        return run_interactive(&assistant).await;
    }

    let command = args[1].as_str();
    let text = args[2..].join(" ");
    if text.is_empty() {
        anyhow::bail!("{}", USAGE);
    }

    match command {
        "classify" => {
            if assistant.is_valid(&text).await {
                println!("✅ valid");
            } else {
                println!("🚫 invalid");
            }
        }
        "retrieve" => {
            let results = assistant.retrieve(&text).await;
            let records = results.iter().map(result_to_json).collect::<Vec<_>>();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        "generate" => {
            let answer = assistant.generate(&text).await?;
            println!("{}", answer);
        }
        "ask" => print_outcome(assistant.ask(&text).await?),
        _ => anyhow::bail!("Unknown command '{}'\n{}", command, USAGE),
    }

    Ok(())
}

fn print_banner(settings: &AppSettings) {
    eprintln!("🤖 Bedrock Assist");
    eprintln!("================================================");
    eprintln!("Region: {}", settings.region);
    eprintln!("Model: {}", settings.model_id);
    if settings.knowledge_base_id.is_empty() {
        eprintln!("Knowledge base: (not set, BEDROCK_KNOWLEDGE_BASE_ID)");
    } else {
        eprintln!("Knowledge base: {}", settings.knowledge_base_id);
    }
    eprintln!(
        "Sampling: temperature={:.2}, top_p={:.2}",
        settings.temperature, settings.top_p
    );
    eprintln!("================================================\n");
}

/// Ask questions line by line until `quit`, `exit` or end of input.
async fn run_interactive(assistant: &Assistant) -> anyhow::Result<()> {
    println!("Interactive mode. Type your question and press Enter.");
    println!("Type 'quit' or 'exit' to exit.\n");

    let stdin = io::stdin();
    loop {
        print!("❓ Question: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let question = line.trim();

        if question.is_empty() {
            continue;
        }

        if question == "quit" || question == "exit" {
            println!("Goodbye! 👋");
            break;
        }

        match assistant.ask(question).await {
            Ok(outcome) => print_outcome(outcome),
            Err(e) => eprintln!("\n❌ Error: {}\n", e),
        }
    }

    Ok(())
}

fn print_outcome(outcome: AskOutcome) {
    match outcome {
        AskOutcome::Rejected => {
            println!("\n🚫 This request is outside the topics I can help with.\n");
        }
        AskOutcome::Answered { answer, sources } => {
            println!("\n💬 {}\n", answer);
            for source in sources {
                println!(
                    "   📄 {} (score {:.3})",
                    source_reference(&source).unwrap_or("unknown source"),
                    source.score.unwrap_or_default()
                );
            }
            println!();
        }
    }
}

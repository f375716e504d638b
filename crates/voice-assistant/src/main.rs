//! Voice chess assistant
//!
//! Reads one utterance per line from stdin (ranked transcription hypotheses
//! separated by the configured separator), resolves it against the board
//! and speaks the result on stdout.

use std::io::{self, BufRead};

use anyhow::Context;
use move_resolver::Game;
use tracing::info;
use tracing_subscriber::EnvFilter;

use voice_assistant::report::CommandReport;
use voice_assistant::speech::split_hypotheses;
use voice_assistant::{AssistantConfig, ConsoleSpeaker, Response, Session};

/// Parse --fen <FEN> from CLI args
fn parse_fen_arg() -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|arg| arg == "--fen")
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout is what the player hears
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let config = AssistantConfig::from_env()?;

    let game = match parse_fen_arg().or_else(|| config.start_fen.clone()) {
        Some(fen) => Game::from_fen(&fen).context("Invalid starting position")?,
        None => Game::new(),
    };
    info!(
        max_hypotheses = config.max_hypotheses,
        separator = %config.hypothesis_separator,
        "Voice assistant ready"
    );

    let mut session = Session::new(game, ConsoleSpeaker::new(io::stdout()));

    for line in io::stdin().lock().lines() {
        let line = line?;
        if matches!(line.trim().to_lowercase().as_str(), "quit" | "exit") {
            break;
        }

        let hypotheses = split_hypotheses(&line, &config.hypothesis_separator, config.max_hypotheses);
        if hypotheses.is_empty() {
            continue;
        }

        let response = session.handle_utterance(&hypotheses)?;

        if config.report_json
            && matches!(response, Response::Executed(_) | Response::Ambiguous | Response::Rejected)
        {
            if let Some((utterance, command)) = session.last_command() {
                eprintln!("{}", CommandReport::new(utterance, command).to_json()?);
            }
        }
    }

    info!(moves = session.game().history().len(), "Session ended");
    Ok(())
}

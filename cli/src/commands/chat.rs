//! # Ostrich Chat Handler
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! Implements `ostrich chat`, a read-eval-print loop in front of the copilot.
//!
//! - Blank lines are ignored.
//! - `bye`, `exit` or `quit` ends the session, as does end of input.
//! - `/run <action-id>` runs one of the actions offered by the previous reply.
//! - Anything else is a copilot query.
//!
//! The loop is written against `BufRead`/`Write` so tests can drive it with
//! in-memory buffers.
//!
use clap::Parser;
use ostrich::common::ui;
use ostrich::copilot::{Copilot, CopilotResponse};
use ostrich::core::config::ChatConfig;
use ostrich::core::error::{OstrichError, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(about = "Chat with the copilot about your integrations")]
pub struct ChatArgs {
    /// Override the assistant name shown in front of replies.
    #[arg(long)]
    name: Option<String>,
}

pub async fn handle_chat(args: ChatArgs, data: Option<&Path>) -> Result<()> {
    debug!("Chat args: {:?}", args);
    let (cfg, snapshot) = super::load_snapshot(data)?;
    let mut chat_cfg = cfg.chat;
    if let Some(name) = args.name {
        chat_cfg.assistant_name = name;
    }
    let copilot = Copilot::new(&snapshot.integrations, &snapshot.logs);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&copilot, &chat_cfg, stdin.lock(), stdout.lock())
}

/// Drives one chat session until the user leaves or input ends.
pub fn run_session<R: BufRead, W: Write>(
    copilot: &Copilot<'_>,
    chat: &ChatConfig,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let speaker = chat.assistant_name.as_str();
    writeln!(output, "{}: {}", speaker, chat.greeting)?;
    writeln!(output, "(Type 'bye' to quit, '/run <action-id>' to run a suggested action.)")?;

    let mut last: Option<CopilotResponse> = None;
    loop {
        write!(output, "You: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            info!("Chat input closed, ending session.");
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if ["bye", "exit", "quit"]
            .iter()
            .any(|w| trimmed.eq_ignore_ascii_case(w))
        {
            writeln!(output, "{}: Goodbye!", speaker)?;
            break;
        }

        let (command, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));
        if command == "/run" {
            match run_action(last.as_ref(), rest.trim()) {
                Ok(announcement) => writeln!(output, "{}: {}", speaker, announcement)?,
                Err(e) => {
                    warn!("{}", e);
                    writeln!(output, "{} (error): {}", speaker, e)?;
                }
            }
            continue;
        }

        let response = copilot.respond(trimmed);
        write!(output, "{}", ui::render_response(&response, speaker))?;
        last = Some(response);
    }
    Ok(())
}

fn run_action(last: Option<&CopilotResponse>, id: &str) -> Result<String> {
    if id.is_empty() {
        return Err(OstrichError::ArgumentParsing("usage: /run <action-id>".to_string()).into());
    }
    let action = last
        .and_then(|r| r.action(id))
        .ok_or_else(|| OstrichError::ActionNotFound { id: id.to_string() })?;
    Ok(action.run().to_string())
}

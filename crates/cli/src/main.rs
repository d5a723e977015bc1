//! Terminal REPL for the cara caregiver chat core.
//!
//! One session per process. The core hands back plain reply strings;
//! everything here is presentation.

use cara_core::config::SessionCfg;
use cara_core::dialogue::reply::FEEDBACK_PROMPT;
use cara_core::session::ChatSession;
use cara_core::types::Tone;
use cara_scorer::lexicon::LexiconScorer;
use cara_scorer::provider::SentimentProvider;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const TREND_WINDOW: usize = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();

    let cfg = SessionCfg::from_env()?;

    // Remote scorer when configured, deterministic lexicon otherwise.
    let provider: Box<dyn SentimentProvider> = match cara_scorer::http::from_env() {
        Some(remote) => {
            tracing::info!("using remote sentiment backend");
            Box::new(remote)
        }
        None => {
            tracing::info!("CARA_SENTIMENT_URL not set, using lexicon backend");
            Box::new(LexiconScorer::new())
        }
    };

    let mut session = ChatSession::new(cfg.tone, provider)?;

    println!("cara — caregiver support chat ({} tone)", session.tone().as_str());
    println!("commands: /tone soft|directive, /history, /trend, /quit");

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("you> ") {
            Ok(line) => {
                let text = line.trim();
                if text.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(text);

                if let Some(command) = text.strip_prefix('/') {
                    if !handle_command(command, &mut session)? {
                        break;
                    }
                    continue;
                }

                let reply = session.process(text).await?;
                println!("cara> {reply}");
                if cfg.show_feedback_prompt {
                    println!("cara> {FEEDBACK_PROMPT}");
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("take care of yourself too.");
    Ok(())
}

/// Handle a slash command. Returns false when the REPL should exit.
fn handle_command(command: &str, session: &mut ChatSession) -> anyhow::Result<bool> {
    let mut parts = command.split_whitespace();
    match parts.next() {
        Some("quit") | Some("exit") => return Ok(false),
        Some("tone") => match parts.next() {
            Some(value) => match Tone::parse(value) {
                Ok(tone) => {
                    session.set_tone(tone);
                    println!("tone set to {}", tone.as_str());
                }
                Err(e) => println!("{e}"),
            },
            None => println!("current tone: {}", session.tone().as_str()),
        },
        Some("history") => {
            if session.log().is_empty() {
                println!("(no conversation yet)");
            } else {
                for entry in session.log().entries() {
                    println!(
                        "[{}] {}: {}",
                        entry.message.timestamp.format("%H:%M:%S"),
                        entry.speaker.as_str(),
                        entry.message.text
                    );
                }
            }
        }
        Some("trend") => match session.mood_trend(TREND_WINDOW) {
            Some(mean) => println!("mood trend (last {TREND_WINDOW} turns): {mean:+.2}"),
            None => println!("(no scores recorded yet)"),
        },
        _ => println!("unknown command: /{command}"),
    }
    Ok(true)
}

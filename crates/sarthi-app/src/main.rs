//! KUSUM Sarthi terminal client - composition root.
//!
//! 1. Parse CLI flags and load configuration from TOML
//! 2. Initialize tracing
//! 3. Build a chat session with a console speaker and the tracing event sink
//! 4. Run the event loop: typed lines from stdin and voice capture results

mod cli;
mod console;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;

use sarthi_chat::{
    CaptureTicket, ChatError, Listener, SessionOrchestrator, Turn, UnsupportedListener,
};
use sarthi_core::{Locale, SarthiConfig, TracingEventSink};

use cli::CliArgs;
use console::{ConsoleListener, ConsoleSpeaker};

/// Outcome of one background voice capture.
type CaptureOutcome = (CaptureTicket, Result<String, ChatError>);

const HELP: &str = "\
Commands:
  /voice         start voice input (stops any capture in progress)
  /stop          stop voice input
  /mute          toggle spoken replies
  /lang hi|en    switch language
  /transcript    print the conversation as JSON
  /help          show this help
  /quit          exit";

/// A parsed line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Voice,
    Stop,
    Mute,
    Lang(&'a str),
    Transcript,
    Help,
    Quit,
    Unknown(&'a str),
    Say(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Command::Say(line);
        };
        let (name, arg) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        match name {
            "voice" => Command::Voice,
            "stop" => Command::Stop,
            "mute" => Command::Mute,
            "lang" => Command::Lang(arg.trim()),
            "transcript" => Command::Transcript,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(trimmed),
        }
    }
}

/// Print the bot reply of a turn, followed by any links it contains.
fn print_reply(session: &SessionOrchestrator, turn: &Turn) {
    let Some(reply) = session
        .transcript()
        .messages()
        .iter()
        .rev()
        .find(|m| m.id == turn.bot_id)
    else {
        return;
    };
    println!("{}", reply.text);
    for link in reply.links() {
        println!("  -> {}", link);
    }
    println!();
}

fn print_banner(session: &SessionOrchestrator) {
    let copy = session.copy();
    println!("== {} ==", copy.heading);
    if let Some(greeting) = session.transcript().messages().first() {
        println!("{}", greeting.text);
    }
    println!("({})", copy.placeholder);
    println!("Type /help for commands.\n");
}

/// Start a capture and run the listener in the background. The previous
/// capture task, if any, is aborted.
fn start_voice(
    session: &mut SessionOrchestrator,
    listener: &ConsoleListener,
    tx: &mpsc::UnboundedSender<CaptureOutcome>,
    task: &mut Option<JoinHandle<()>>,
) {
    let ticket = match session.start_listening(listener) {
        Ok(t) => t,
        Err(ChatError::VoiceUnavailable) => {
            println!("{}\n", session.copy().voice_unavailable);
            return;
        }
        Err(e) => {
            tracing::warn!(error = %e, "Could not start voice input");
            return;
        }
    };
    if let Some(previous) = task.take() {
        previous.abort();
    }

    println!("🎤 … ({})", session.copy().stop_voice);
    let listener = listener.clone();
    let locale = session.locale();
    let tx = tx.clone();
    *task = Some(tokio::spawn(async move {
        let outcome = listener.listen(locale).await;
        if tx.send((ticket, outcome)).is_err() {
            tracing::debug!(%ticket, "Session closed before capture finished");
        }
    }));
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let mut config = if config_file.exists() {
        SarthiConfig::load_or_default(&config_file)
    } else {
        SarthiConfig::default()
    };
    args.apply(&mut config);

    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting KUSUM Sarthi v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        path = %config_file.display(),
        locale = %config.general.locale,
        "Configuration ready"
    );

    // Voice input.
    let listener = match args.voice_script {
        Some(ref path) if config.voice.enabled => {
            let script = std::fs::read_to_string(path)?;
            tracing::info!(path = %path.display(), "Voice script loaded");
            ConsoleListener::from_script(&script)
        }
        _ => ConsoleListener::Unsupported(UnsupportedListener),
    };

    // Session.
    let mut session = SessionOrchestrator::new(
        &config,
        Box::new(ConsoleSpeaker),
        Box::new(TracingEventSink::new()),
    );
    print_banner(&session);

    // === Event loop ===

    let (tx, mut rx) = mpsc::unbounded_channel::<CaptureOutcome>();
    let mut capture_task: Option<JoinHandle<()>> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Command::Say(text) => {
                        session.set_input(text);
                        if let Some(turn) = session.submit_pending() {
                            print_reply(&session, &turn);
                        }
                    }
                    Command::Voice => start_voice(&mut session, &listener, &tx, &mut capture_task),
                    Command::Stop => {
                        if session.stop_listening().is_some() {
                            if let Some(task) = capture_task.take() {
                                task.abort();
                            }
                            println!("{}\n", session.copy().start_voice);
                        }
                    }
                    Command::Mute => {
                        let muted = session.toggle_mute();
                        let copy = session.copy();
                        println!("{}\n", if muted { copy.muted } else { copy.unmuted });
                    }
                    Command::Lang(code) => match code.parse::<Locale>() {
                        Ok(locale) => {
                            session.set_locale(locale);
                            println!("== {} ==\n", session.copy().heading);
                        }
                        Err(e) => println!("{}\n", e),
                    },
                    Command::Transcript => println!("{}\n", session.transcript_json()?),
                    Command::Help => println!("{}\n", HELP),
                    Command::Quit => break,
                    Command::Unknown(cmd) => println!("Unknown command: {}\n{}\n", cmd, HELP),
                }
            }
            Some((ticket, outcome)) = rx.recv() => {
                if let Ok(ref text) = outcome {
                    println!("> {}", text);
                }
                if let Some(turn) = session.finish_listening(ticket, outcome) {
                    print_reply(&session, &turn);
                }
            }
        }
    }

    if let Some(task) = capture_task.take() {
        task.abort();
    }
    tracing::info!(
        session = %session.id(),
        started_at = %session.started_at(),
        messages = session.transcript().len(),
        "Session ended"
    );
    Ok(())
}

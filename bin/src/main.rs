mod http_engine;
mod input;

use clap::Parser;
use std::error::Error;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::LocalSet;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wordle_assistant::*;

use http_engine::HttpEngine;
use input::Command;

/// Interactive Wordle assistant: enter your guesses and the feedback you got, and a solving
/// engine suggests what to try next.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Base URL of the solving engine.
    #[clap(
        long,
        env = "WORDLE_ENGINE_URL",
        default_value = "http://127.0.0.1:8787"
    )]
    engine_url: String,

    /// How long to wait for the engine before giving up, in seconds.
    #[clap(long, env = "WORDLE_ENGINE_TIMEOUT", default_value_t = 10)]
    timeout_secs: u64,

    /// Log more. Repeat for even more detail. RUST_LOG takes precedence.
    #[clap(short, long, parse(from_occurrences))]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_tracing(args.verbose);
    info!(engine_url = %args.engine_url, "starting");

    let engine = HttpEngine::new(&args.engine_url, Duration::from_secs(args.timeout_secs))?;
    // Engine calls run as local tasks, so input keeps being read while they are in flight.
    LocalSet::new().run_until(run(Assistant::new(engine))).await
}

async fn run<E>(mut assistant: Assistant<E>) -> Result<(), Box<dyn Error>>
where
    E: SolverEngine + 'static,
{
    let (answers_tx, mut answers) = mpsc::unbounded_channel();
    println!("Enter your guesses and mark how they scored. Type 'h' for help.\n");

    // Failures are kept as the current message, and rendered below.
    if let Ok(call) = assistant.begin_start() {
        dispatch(call, &answers_tx);
    }
    render(&assistant);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line? {
                    Some(line) => line,
                    None => break,
                };
                let command = match input::parse_command(&line) {
                    Ok(command) => command,
                    Err(err) => {
                        println!("{}", err);
                        continue;
                    }
                };
                match command {
                    Command::Quit => break,
                    Command::Help => {
                        println!("{}", input::HELP);
                        continue;
                    }
                    command => match apply(&mut assistant, command) {
                        Ok(Some(call)) => dispatch(call, &answers_tx),
                        Ok(None) => {}
                        Err(err) => debug!(error = %err, "command failed"),
                    },
                }
            }
            Some(answer) = answers.recv() => {
                if matches!(assistant.finish(answer), Ok(Completion::Stale)) {
                    continue;
                }
            }
        }
        render(&assistant);
    }

    Ok(())
}

/// Runs the engine call in the background. Its answer comes back through `answers`.
fn dispatch<E>(call: EngineCall<E>, answers: &UnboundedSender<EngineAnswer>)
where
    E: SolverEngine + 'static,
{
    debug!(seq = call.seq(), "dispatching engine call");
    let answers = answers.clone();
    tokio::task::spawn_local(async move {
        if answers.send(call.run().await).is_err() {
            debug!("session closed before the engine answered");
        }
    });
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Applies one command. Commands that need the engine return the call to run.
fn apply<E: SolverEngine>(
    assistant: &mut Assistant<E>,
    command: Command,
) -> Result<Option<EngineCall<E>>, AssistError> {
    match command {
        Command::Type(letters) => {
            assistant.enter_text(&letters)?;
        }
        Command::Backspace => {
            assistant.pop_letter();
        }
        Command::Cycle(index) => assistant.cycle_color(index)?,
        Command::Mark(colors) => {
            for (index, color) in colors.into_iter().enumerate() {
                if let Some(color) = color {
                    assistant.mark(index, color)?;
                }
            }
        }
        Command::Submit => return assistant.begin_submit().map(Some),
        Command::Reset => return Ok(Some(assistant.begin_reset())),
        Command::Help | Command::Quit => {}
    }
    Ok(None)
}

fn render<E>(assistant: &Assistant<E>)
where
    E: SolverEngine,
{
    println!();
    for row in assistant.history() {
        println!("  {}", render_row(row));
    }
    println!("> {}", render_row(assistant.in_progress()));
    println!("  [G] green  (Y) yellow  -X- gray  <?> not marked");
    if assistant.state() == GridState::Submitting {
        println!("  (waiting for the engine)");
    }

    if let Some(message) = assistant.message() {
        println!("\n! {}", message);
    }

    match assistant.suggestions() {
        [] => println!("\nNo suggestions."),
        suggestions => {
            println!("\nTry:");
            for (rank, suggestion) in suggestions.iter().enumerate() {
                println!(
                    "  {:>2}. {}  ({:.3})",
                    rank + 1,
                    suggestion.word,
                    suggestion.score
                );
            }
        }
    }
}

fn render_row(row: &GuessRow) -> String {
    row.cells()
        .iter()
        .map(|cell| match (cell.letter(), cell.color()) {
            (None, _) => " _ ".to_string(),
            (Some(letter), CellColor::Correct) => format!("[{}]", letter),
            (Some(letter), CellColor::Misplaced) => format!("({})", letter),
            (Some(letter), CellColor::Wrong) => format!("-{}-", letter),
            (Some(letter), CellColor::Empty) => format!("<{}>", letter),
        })
        .collect::<Vec<String>>()
        .join(" ")
}

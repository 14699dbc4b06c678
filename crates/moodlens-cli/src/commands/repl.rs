use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use moodlens_application::{Session, SessionUseCase};
use moodlens_core::config::DisplayConfig;
use moodlens_infrastructure::DEFAULT_EXPORT_FILE_NAME;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use super::print_failure;
use crate::render;

const SLASH_COMMANDS: &[&str] = &[
    "/clear", "/history", "/export", "/table", "/chart", "/save", "/help",
];

/// A line typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Detect(String),
    Clear,
    History,
    Export(Option<PathBuf>),
    ToggleTable,
    ToggleChart,
    ToggleSave,
    Help,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed == "quit" || trimmed == "exit" {
            return Self::Quit;
        }
        if !trimmed.starts_with('/') {
            return Self::Detect(line.to_string());
        }
        // `//` submits the rest of the line as text starting with `/`
        if trimmed.starts_with("//") {
            return Self::Detect(line.replacen('/', "", 1));
        }

        let (name, arg) = match trimmed.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (trimmed, None),
        };
        match name {
            "/clear" => Self::Clear,
            "/history" => Self::History,
            "/export" => Self::Export(arg.map(PathBuf::from)),
            "/table" => Self::ToggleTable,
            "/chart" => Self::ToggleChart,
            "/save" => Self::ToggleSave,
            "/help" => Self::Help,
            _ => Self::Unknown(name.to_string()),
        }
    }
}

/// Rustyline helper providing slash-command completion, hints, and highlighting.
#[derive(Clone)]
struct ReplHelper {
    commands: Vec<String>,
}

impl ReplHelper {
    fn new() -> Self {
        Self {
            commands: SLASH_COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for ReplHelper {}

fn print_help() {
    println!("{}", "Type some text and press Enter to detect its emotion.".bright_black());
    println!("{}", "  /history        show this session's detections".bright_black());
    println!("{}", "  /clear          clear the history".bright_black());
    println!(
        "{}",
        format!("  /export [PATH]  save the history as CSV (default {DEFAULT_EXPORT_FILE_NAME})")
            .bright_black()
    );
    println!("{}", "  /table /chart   toggle the score table or charts".bright_black());
    println!("{}", "  //text          analyze text that starts with '/'".bright_black());
    println!("{}", "  /save           toggle saving detections to history".bright_black());
    println!("{}", "  quit | exit     leave".bright_black());
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

/// Runs one non-quit command against the session.
async fn dispatch(command: ReplCommand, session: &mut Session, display: &mut DisplayConfig) {
    match command {
        ReplCommand::Detect(text) => match session.detect(&text).await {
            Ok(report) => {
                render::print_report(&report, display);
                if report.recorded.is_none() {
                    println!("{}", "(history saving is off)".bright_black());
                }
            }
            Err(err) => print_failure(&err),
        },
        ReplCommand::Clear => {
            session.clear_history();
            println!("{}", "History cleared.".bright_green());
        }
        ReplCommand::History => render::print_history(session.history(), display),
        ReplCommand::Export(path) => {
            let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE_NAME));
            match session.export_history_to(&path).await {
                Ok(written) => println!(
                    "{}",
                    format!(
                        "Exported {} entries to {}",
                        session.history().len(),
                        written.display()
                    )
                    .bright_green()
                ),
                Err(err) => {
                    tracing::error!(error = %err, "Export failed");
                    eprintln!("{}", format!("Export failed: {}", err).red());
                }
            }
        }
        ReplCommand::ToggleTable => {
            display.show_table = !display.show_table;
            println!("Score table: {}", on_off(display.show_table));
        }
        ReplCommand::ToggleChart => {
            display.show_chart = !display.show_chart;
            println!("Charts: {}", on_off(display.show_chart));
        }
        ReplCommand::ToggleSave => {
            let save = !session.options().save_history;
            session.set_save_history(save);
            println!("Save to history: {}", on_off(save));
        }
        ReplCommand::Help => print_help(),
        ReplCommand::Unknown(name) => {
            println!("{}", format!("Unknown command: {} (try /help)", name).bright_black());
        }
        ReplCommand::Quit => {}
    }
}

/// Interactive session loop. Each line is handled to completion before the
/// next prompt.
pub async fn run() -> Result<()> {
    let use_case = SessionUseCase::bootstrap()?;
    let mut display = use_case.display().clone();
    let mut session = use_case.start_session();

    let mut rl: Editor<ReplHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ReplHelper::new()));

    println!("{}", "=== moodlens ===".bright_magenta().bold());
    println!(
        "{}",
        "Type how you feel, '/help' for commands, or 'quit' to exit.".bright_black()
    );
    println!();

    tracing::debug!(session_id = session.id(), "REPL session started");

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }

                let command = ReplCommand::parse(&line);
                if command == ReplCommand::Quit {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
                dispatch(command, &mut session, &mut display).await;
                println!();
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

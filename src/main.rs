use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tapcalc::calculator::copy_to_clipboard;
use tapcalc::input::BINDINGS;
use tapcalc::{Config, Outcome, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tapcalc", version, about = "A keypad-style calculator for the terminal")]
struct Cli {
    /// Config file to use instead of ~/.config/tapcalc/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print every outcome as a JSON line
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Feed key lines to a fresh calculator and print the display
    Run {
        /// Key lines, e.g. "12+3=" (applied in order)
        #[arg(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
    },
    /// Read key lines from stdin interactively (default)
    Repl,
    /// List the key bindings
    Keys,
}

/// What the REPL loop should do after a `:` command.
enum Flow {
    Continue,
    Quit,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(&config.log_level);

    match cli.command.unwrap_or(Command::Repl) {
        Command::Run { keys } => run(config, &keys, cli.json),
        Command::Repl => repl(config, cli.json),
        Command::Keys => {
            print_bindings();
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(config: Config, lines: &[String], json: bool) -> Result<ExitCode> {
    let mut session = Session::new(config);
    let mut failed = false;

    for line in lines {
        let outcome = match session.feed(line) {
            Ok(outcome) => outcome,
            Err(err) => {
                eprintln!("error: {err}");
                return Ok(ExitCode::from(2));
            }
        };

        failed |= outcome.is_error();
        report_errors(&outcome);
        if json {
            println!("{}", serde_json::to_string(&outcome)?);
        }
    }

    if !json {
        println!("{}", session.rendered_display());
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn repl(config: Config, json: bool) -> Result<ExitCode> {
    let mut session = Session::new(config);
    let mut last: Option<Outcome> = None;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        if !json {
            write!(stdout, "{}", session.config().prompt)?;
            stdout.flush()?;
        }

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix(':') {
            match repl_command(&mut session, &mut last, command, json)? {
                Flow::Continue => continue,
                Flow::Quit => break,
            }
        }

        match session.feed(line) {
            Ok(outcome) => {
                show(&outcome, json)?;
                if session.config().copy_results
                    && let Some(result) = &outcome.result
                {
                    copy(result);
                }
                last = Some(outcome);
            }
            Err(err) => eprintln!("error: {err}"),
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn repl_command(
    session: &mut Session,
    last: &mut Option<Outcome>,
    command: &str,
    json: bool,
) -> Result<Flow> {
    let (name, arg) = command.split_once(' ').unwrap_or((command, ""));

    match name {
        "paste" | "p" => {
            let outcome = session.paste(arg);
            show(&outcome, json)?;
            *last = Some(outcome);
        }
        "copy" => {
            let text = last
                .as_ref()
                .map_or(session.display(), Outcome::text_for_clipboard);
            copy(text);
        }
        "state" => println!("{}", serde_json::to_string_pretty(session.snapshot())?),
        "help" | "h" => print_help(),
        "quit" | "q" | "exit" => return Ok(Flow::Quit),
        _ => eprintln!("error: unknown command :{name} (try :help)"),
    }

    Ok(Flow::Continue)
}

fn show(outcome: &Outcome, json: bool) -> Result<()> {
    report_errors(outcome);
    if json {
        println!("{}", serde_json::to_string(outcome)?);
    } else {
        println!("{}", outcome.rendered);
    }
    Ok(())
}

fn report_errors(outcome: &Outcome) {
    for error in &outcome.errors {
        eprintln!("error: {}", error.message);
    }
}

fn copy(text: &str) {
    match copy_to_clipboard(text) {
        Ok(()) => info!(text, "copied to clipboard"),
        Err(err) => eprintln!("error: {err}"),
    }
}

fn print_bindings() {
    for (keys, action) in BINDINGS {
        println!("{keys:<16}{action}");
    }
}

fn print_help() {
    println!("Type keys and press return, e.g. 12+3=");
    println!();
    print_bindings();
    println!();
    println!(":paste <text>   set the number being typed");
    println!(":copy           copy the last result to the clipboard");
    println!(":state          show the calculator state");
    println!(":quit           exit");
}

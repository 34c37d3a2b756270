//! TabCalc Shell
//!
//! Line-oriented front-end. Each line is one user action: keypad input or
//! an `@command`. The prompt shows the active tab and its expression.

mod commands;
mod state;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tabcalc_core::{Config, KEYPAD_LAYOUT};

use commands::{Command, CommandResult, Output};
use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "tabcalc", version, about = "Multi-tab calculator")]
pub struct Cli {
    /// Directory holding tabcalc.db (defaults to the platform data dir)
    #[arg(long, env = "TABCALC_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep everything in memory; nothing is saved
    #[arg(long)]
    pub in_memory: bool,

    /// Only save on @save
    #[arg(long)]
    pub no_autosave: bool,

    /// Print each result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn config(&self) -> Config {
        let mut config = match &self.data_dir {
            Some(dir) => Config::new(dir.clone()),
            None => Config::default(),
        };
        config.autosave = !self.no_autosave;
        config
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tabcalc_core::init_logging();

    let config = cli.config();
    tracing::info!(
        database = %config.database_path.display(),
        in_memory = cli.in_memory,
        "Starting TabCalc"
    );

    let mut state = AppState::new(config, cli.in_memory)?;
    state.initialize();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl(&mut state, stdin.lock(), stdout.lock(), cli.json)?;

    tracing::info!("TabCalc stopped");

    Ok(())
}

/// Read lines until `@quit` or end of input
pub fn repl<R: BufRead, W: Write>(
    state: &mut AppState,
    input: R,
    mut output: W,
    json: bool,
) -> anyhow::Result<()> {
    if !json {
        for row in KEYPAD_LAYOUT {
            let row: Vec<String> = row.iter().map(char::to_string).collect();
            writeln!(output, "  {}", row.join(" "))?;
        }
        writeln!(output, "Type @help for commands.")?;
    }

    show_prompt(&mut output, state, json)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            show_prompt(&mut output, state, json)?;
            continue;
        }

        let (result, quit) = match Command::parse(&line) {
            Ok(command) => {
                let quit = command == Command::Quit;
                (commands::dispatch(state, command), quit)
            }
            Err(e) => (CommandResult::err(e), false),
        };

        print_result(&mut output, &result, json)?;

        if quit {
            break;
        }

        show_prompt(&mut output, state, json)?;
    }

    Ok(())
}

/// JSON mode prints results only
fn show_prompt<W: Write>(output: &mut W, state: &AppState, json: bool) -> anyhow::Result<()> {
    if !json {
        write!(output, "{}", state.prompt())?;
        output.flush()?;
    }
    Ok(())
}

fn print_result<W: Write>(
    output: &mut W,
    result: &CommandResult<Output>,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        writeln!(output, "{}", serde_json::to_string(result)?)?;
        return Ok(());
    }

    match (&result.data, &result.error) {
        // Keypad results already show in the prompt
        (Some(Output::Display { .. }), _) => {}
        (Some(data), _) => writeln!(output, "{}", data)?,
        (None, Some(error)) => writeln!(output, "error: {}", error)?,
        (None, None) => {}
    }

    Ok(())
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use tabcalc_core::{Calculator, Mode};

    let config = Config {
        database_path: PathBuf::from(":memory:"),
        default_theme: "classic".to_string(),
        default_mode: Mode::Dark,
        autosave: false,
    };
    AppState::from_calculator(Calculator::in_memory(config).unwrap())
}

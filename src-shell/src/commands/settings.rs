//! Settings commands

use super::{CommandResult, Output};
use crate::state::AppState;
use tabcalc_core::Mode;

/// Show the theme, or set it when an id is given
pub fn theme(state: &mut AppState, theme: Option<String>) -> CommandResult<Output> {
    if let Some(theme) = theme {
        if let Err(e) = state.with_calculator(|calc| calc.set_theme(theme)) {
            return CommandResult::err(e.to_string());
        }
    }
    CommandResult::ok(Output::preferences(state))
}

/// Toggle the mode, or set it when one is named
pub fn mode(state: &mut AppState, mode: Option<&str>) -> CommandResult<Output> {
    let mode = match mode.map(str::parse::<Mode>) {
        Some(Ok(mode)) => Some(mode),
        Some(Err(e)) => return CommandResult::err(e),
        None => None,
    };

    let result = state.with_calculator(|calc| {
        match mode {
            Some(mode) => calc.set_mode(mode),
            None => {
                calc.toggle_mode();
            }
        }
        Ok(())
    });

    match result {
        Ok(()) => CommandResult::ok(Output::preferences(state)),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
